//! Ordered mapping of group labels to the literal answers that select them.

use serde::{Deserialize, Serialize};

/// One group label and the answers belonging to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerGroup<G> {
    pub group: G,
    pub answers: Vec<String>,
}

/// Group-to-answers mapping, kept in insertion order.
///
/// Order matters: when the same answer (after case folding, if enabled) is
/// listed under several groups, the group inserted last owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerGroups<G> {
    entries: Vec<AnswerGroup<G>>,
}

impl<G> Default for AnswerGroups<G> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<G> AnswerGroups<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group with its answers.
    #[must_use]
    pub fn with_group<I, S>(mut self, group: G, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(group, answers);
        self
    }

    pub fn push<I, S>(&mut self, group: G, answers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.push(AnswerGroup {
            group,
            answers: answers.into_iter().map(Into::into).collect(),
        });
    }

    /// Append every entry of `other` after the existing ones.
    pub fn extend(&mut self, other: AnswerGroups<G>) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnswerGroup<G>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<G, S> FromIterator<(G, Vec<S>)> for AnswerGroups<G>
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (G, Vec<S>)>>(iter: T) -> Self {
        let mut groups = Self::new();
        for (group, answers) in iter {
            groups.push(group, answers);
        }
        groups
    }
}

impl<'a, G> IntoIterator for &'a AnswerGroups<G> {
    type Item = &'a AnswerGroup<G>;
    type IntoIter = std::slice::Iter<'a, AnswerGroup<G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
