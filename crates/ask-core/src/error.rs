use thiserror::Error;

#[derive(Debug, Error)]
pub enum AskError {
    /// Auto mode was requested but this prompt has no auto value.
    #[error("auto input mode is on, but there is no auto value set")]
    AutoValueMissing,
    #[error("input stream closed before a valid answer was entered")]
    EndOfInput,
    #[error("no valid answer after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AskError {
    /// Returns true for the caller-configuration error raised in auto mode.
    pub fn is_auto_value_missing(&self) -> bool {
        matches!(self, Self::AutoValueMissing)
    }
}

pub type Result<T> = std::result::Result<T, AskError>;
