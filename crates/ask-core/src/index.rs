use std::borrow::Cow;
use std::collections::HashMap;

use crate::groups::AnswerGroups;

/// Normalized answer text to owning group, rebuilt for every prompt.
#[derive(Debug, Clone)]
pub struct ReverseIndex<G> {
    map: HashMap<String, G>,
    ignore_case: bool,
}

impl<G: Clone> ReverseIndex<G> {
    /// Flatten `groups` into a lookup table. Later entries overwrite earlier
    /// ones on key collisions.
    pub fn build(groups: &AnswerGroups<G>, ignore_case: bool) -> Self {
        let mut map = HashMap::new();
        for entry in groups {
            for answer in &entry.answers {
                let key = normalize(answer, ignore_case).into_owned();
                map.insert(key, entry.group.clone());
            }
        }
        Self { map, ignore_case }
    }
}

impl<G> ReverseIndex<G> {
    pub fn lookup(&self, text: &str) -> Option<&G> {
        self.map.get(normalize(text, self.ignore_case).as_ref())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn normalize(text: &str, ignore_case: bool) -> Cow<'_, str> {
    if ignore_case {
        Cow::Owned(text.to_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}
