//! The prompt classifier.
//!
//! A [`Prompt`] shows a message, reads one line and reports which
//! [`AnswerGroups`] entry the line belongs to, together with the raw text.
//!
//! Behavior on a miss depends on whether a default group is configured:
//!
//! - with a default, the prompt is shown once and a miss yields the default;
//! - without one, the prompt repeats (after the optional wrong-answer message)
//!   until an answer matches. There is no bound unless
//!   [`Prompt::max_attempts`] is set.
//!
//! In [`InputMode::Auto`] no I/O happens at all: the configured auto value is
//! returned as both group and input, and a prompt without one fails with
//! [`AskError::AutoValueMissing`].
//!
//! # Usage
//!
//! ```no_run
//! use ask_core::{InputMode, Prompt};
//!
//! let answer = Prompt::new("Overwrite? [y/N] ")
//!     .group(true, ["y", "yes"])
//!     .group(false, ["n", "no"])
//!     .default_group(false)
//!     .auto(true)
//!     .ask(InputMode::Interactive)?;
//! println!("{} ({:?})", answer.group, answer.input);
//! # Ok::<(), ask_core::AskError>(())
//! ```

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::console::{Console, StreamConsole};
use crate::error::{AskError, Result};
use crate::groups::AnswerGroups;
use crate::index::ReverseIndex;

/// Whether answers come from the user or from the prompt's auto value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    /// Read answers from the console.
    #[default]
    Interactive,
    /// Use the auto value without reading anything.
    Auto,
}

impl InputMode {
    pub fn from_auto_flag(auto: bool) -> Self {
        if auto { Self::Auto } else { Self::Interactive }
    }
}

/// Classification result: the selected group and the text that selected it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer<G> {
    pub group: G,
    /// Raw input as typed, never case-folded.
    pub input: String,
}

/// Construction parameters for one classification.
#[derive(Debug, Clone)]
pub struct Prompt<G> {
    message: String,
    groups: AnswerGroups<G>,
    default: Option<G>,
    auto: Option<G>,
    wrong: String,
    ignore_case: bool,
    max_attempts: Option<NonZeroUsize>,
}

impl<G> Default for Prompt<G> {
    fn default() -> Self {
        Self {
            message: String::new(),
            groups: AnswerGroups::new(),
            default: None,
            auto: None,
            wrong: String::new(),
            ignore_case: true,
            max_attempts: None,
        }
    }
}

impl<G> Prompt<G> {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Replace the whole group-to-answers mapping.
    #[must_use]
    pub fn groups(mut self, groups: AnswerGroups<G>) -> Self {
        self.groups = groups;
        self
    }

    /// Append one group after those already configured.
    #[must_use]
    pub fn group<I, S>(mut self, group: G, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.push(group, answers);
        self
    }

    /// Group returned when the input matches nothing. Setting it disables
    /// re-prompting.
    #[must_use]
    pub fn default_group(mut self, group: G) -> Self {
        self.default = Some(group);
        self
    }

    /// Value returned in [`InputMode::Auto`].
    #[must_use]
    pub fn auto(mut self, group: G) -> Self {
        self.auto = Some(group);
        self
    }

    /// Message shown after each unmatched answer when no default is set.
    #[must_use]
    pub fn wrong(mut self, message: impl Into<String>) -> Self {
        self.wrong = message.into();
        self
    }

    #[must_use]
    pub fn ignore_case(mut self, enable: bool) -> Self {
        self.ignore_case = enable;
        self
    }

    /// Give up with [`AskError::AttemptsExhausted`] after `attempts`
    /// unmatched answers. Only applies when no default is set.
    #[must_use]
    pub fn max_attempts(mut self, attempts: NonZeroUsize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn answer_groups(&self) -> &AnswerGroups<G> {
        &self.groups
    }
}

impl<G: Clone + fmt::Display> Prompt<G> {
    /// Classify one answer read from the process's stdin.
    pub fn ask(&self, mode: InputMode) -> Result<Answer<G>> {
        self.ask_with(mode, &mut StreamConsole::stdio())
    }

    /// Classify one answer read through `console`.
    ///
    /// `Display` is only needed to render the auto value as the answer's
    /// input text; use [`Prompt::ask_interactive`] for group types without it.
    pub fn ask_with<C: Console>(&self, mode: InputMode, console: &mut C) -> Result<Answer<G>> {
        if mode == InputMode::Interactive {
            return self.ask_interactive(console);
        }
        let Some(auto) = &self.auto else {
            return Err(AskError::AutoValueMissing);
        };
        debug!(auto = %auto, "auto mode, skipping prompt");
        Ok(Answer {
            group: auto.clone(),
            input: auto.to_string(),
        })
    }
}

impl<G: Clone> Prompt<G> {
    pub fn reverse_index(&self) -> ReverseIndex<G> {
        ReverseIndex::build(&self.groups, self.ignore_case)
    }

    /// Classify one answer read through `console`, ignoring any auto value.
    pub fn ask_interactive<C: Console>(&self, console: &mut C) -> Result<Answer<G>> {
        let index = self.reverse_index();
        debug!(
            groups = self.groups.len(),
            answers = index.len(),
            ignore_case = self.ignore_case,
            "built answer index"
        );

        match &self.default {
            None => self.ask_until_match(&index, console),
            Some(default) => {
                let input = read_answer(&self.message, console)?;
                let group = match index.lookup(&input) {
                    Some(group) => group.clone(),
                    None => {
                        debug!("answer did not match any group, using default");
                        default.clone()
                    }
                };
                Ok(Answer { group, input })
            }
        }
    }

    fn ask_until_match<C: Console>(
        &self,
        index: &ReverseIndex<G>,
        console: &mut C,
    ) -> Result<Answer<G>> {
        let mut misses = 0usize;
        loop {
            let input = read_answer(&self.message, console)?;
            if let Some(group) = index.lookup(&input) {
                return Ok(Answer {
                    group: group.clone(),
                    input,
                });
            }
            misses += 1;
            debug!(attempt = misses, "answer did not match any group");
            if !self.wrong.is_empty() {
                console.show_line(&self.wrong)?;
            }
            if let Some(limit) = self.max_attempts
                && misses >= limit.get()
            {
                return Err(AskError::AttemptsExhausted { attempts: misses });
            }
        }
    }
}

fn read_answer<C: Console>(message: &str, console: &mut C) -> Result<String> {
    console.show_prompt(message)?;
    let line = console.read_line()?.ok_or(AskError::EndOfInput)?;
    trace!(bytes = line.len(), "read answer");
    Ok(line)
}
