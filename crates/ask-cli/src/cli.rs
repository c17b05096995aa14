//! CLI argument definitions for the `ask` prompt tool.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use ask_cli::groups::GroupArg;
use clap::builder::FalseyValueParser;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ask",
    version,
    about = "Ask for one line of input and classify it into an answer group",
    long_about = "Show a prompt, read one line from stdin and print the group it belongs to.\n\n\
                  Without --default the prompt repeats until an answer matches.\n\
                  With --auto-mode no input is read and the --auto value is printed."
)]
pub struct Cli {
    /// Prompt shown before each read.
    #[arg(long, short = 'p', default_value = "")]
    pub prompt: String,

    /// Answer group as NAME=ANSWER[,ANSWER...]; repeat for more groups.
    ///
    /// When an answer appears in several groups the last one wins.
    #[arg(long = "group", short = 'g', value_name = "NAME=ANSWERS")]
    pub groups: Vec<GroupArg>,

    /// JSON file with an array of {"group": ..., "answers": [...]} objects,
    /// applied before any --group.
    #[arg(long = "groups-file", value_name = "PATH")]
    pub groups_file: Option<PathBuf>,

    /// Group printed when the answer matches nothing (disables re-prompting).
    #[arg(long)]
    pub default: Option<String>,

    /// Value printed in auto mode.
    #[arg(long)]
    pub auto: Option<String>,

    /// Message shown after an unmatched answer when no default is set.
    #[arg(long, default_value = "")]
    pub wrong: String,

    /// Match answers case-sensitively.
    #[arg(long = "case-sensitive")]
    pub case_sensitive: bool,

    /// Give up after this many unmatched answers.
    #[arg(long = "max-attempts", value_name = "N")]
    pub max_attempts: Option<NonZeroUsize>,

    /// Do not read input; print the --auto value instead.
    #[arg(
        long = "auto-mode",
        env = "ASK_AUTO_MODE",
        value_parser = FalseyValueParser::new()
    )]
    pub auto_mode: bool,

    /// Result format on stdout.
    ///
    /// `text` prints GROUP<TAB>INPUT and is ambiguous when either side
    /// contains a tab; use `json` for arbitrary groups or input.
    #[arg(long = "output", value_enum, default_value = "text")]
    pub output: OutputFormatArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Include the module path in log lines.
    #[arg(long = "log-target")]
    pub log_target: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
