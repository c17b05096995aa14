//! Answer groups supplied on the command line or in a JSON file.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use ask_core::AnswerGroups;

/// A `NAME=ANSWER[,ANSWER...]` command-line group.
///
/// Answers are split on `,`; an empty segment is the empty answer, so
/// `skip=` accepts a bare Enter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupArg {
    pub name: String,
    pub answers: Vec<String>,
}

impl FromStr for GroupArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let Some((name, answers)) = s.split_once('=') else {
            return Err(format!("expected NAME=ANSWER[,ANSWER...], got '{s}'"));
        };
        if name.is_empty() {
            return Err(format!("group name is empty in '{s}'"));
        }
        Ok(Self {
            name: name.to_string(),
            answers: answers.split(',').map(str::to_string).collect(),
        })
    }
}

/// Load a JSON array of `{ "group": ..., "answers": [...] }` objects.
pub fn load_groups_file(path: &Path) -> Result<AnswerGroups<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read groups file {}", path.display()))?;
    let groups: AnswerGroups<String> = serde_json::from_str(&text)
        .with_context(|| format!("parse groups file {}", path.display()))?;
    Ok(groups)
}

/// Combine file groups and command-line groups, file entries first.
///
/// The result may be empty: auto mode never consults it, and with a default
/// every answer simply falls back to that default.
pub fn collect_groups(file: Option<&Path>, args: &[GroupArg]) -> Result<AnswerGroups<String>> {
    let mut groups = match file {
        Some(path) => load_groups_file(path)?,
        None => AnswerGroups::new(),
    };
    for arg in args {
        groups.push(arg.name.clone(), arg.answers.iter().cloned());
    }
    tracing::debug!(groups = groups.len(), "collected answer groups");
    Ok(groups)
}
