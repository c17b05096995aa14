//! CLI library components for the `ask` prompt tool.

pub mod groups;
pub mod logging;
pub mod render;
