//! Interactive answer prompts classified against named answer groups.

pub mod console;
pub mod error;
pub mod groups;
pub mod index;
pub mod prompt;

pub use console::{Console, StreamConsole};
pub use error::{AskError, Result};
pub use groups::{AnswerGroup, AnswerGroups};
pub use index::ReverseIndex;
pub use prompt::{Answer, InputMode, Prompt};
