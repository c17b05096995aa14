use anyhow::Result;
use ask_core::Answer;

/// How the classified answer is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `GROUP<TAB>INPUT`
    #[default]
    Text,
    Json,
}

pub fn render_answer(answer: &Answer<String>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{}\t{}", answer.group, answer.input)),
        OutputFormat::Json => Ok(serde_json::to_string(answer)?),
    }
}
