//! `ask` - prompt for one line of input and classify it.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use ask_cli::groups::collect_groups;
use ask_cli::logging::{LogConfig, LogFormat, init_logging};
use ask_cli::render::{OutputFormat, render_answer};
use ask_core::{AskError, InputMode, Prompt};

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg, OutputFormatArg};

/// Exit code for an auto-mode run with no auto value configured.
const EXIT_AUTO_VALUE_MISSING: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            match error.downcast_ref::<AskError>() {
                Some(AskError::AutoValueMissing) => EXIT_AUTO_VALUE_MISSING,
                _ => 1,
            }
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let groups = collect_groups(cli.groups_file.as_deref(), &cli.groups)?;
    if groups.is_empty() && cli.default.is_none() && !cli.auto_mode {
        tracing::warn!("no answer groups and no --default; no answer can match");
    }
    let mut prompt = Prompt::new(cli.prompt.as_str())
        .groups(groups)
        .wrong(cli.wrong.as_str())
        .ignore_case(!cli.case_sensitive);
    if let Some(default) = &cli.default {
        prompt = prompt.default_group(default.clone());
    }
    if let Some(auto) = &cli.auto {
        prompt = prompt.auto(auto.clone());
    }
    if let Some(limit) = cli.max_attempts {
        prompt = prompt.max_attempts(limit);
    }

    let mode = InputMode::from_auto_flag(cli.auto_mode);
    let answer = prompt.ask(mode)?;
    tracing::info!(group = %answer.group, ?mode, "classified answer");

    let format = match cli.output {
        OutputFormatArg::Text => OutputFormat::Text,
        OutputFormatArg::Json => OutputFormat::Json,
    };
    println!("{}", render_answer(&answer, format)?);
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
        .with_format(format)
        .with_timestamps(cli.log_timestamps)
        .with_target(cli.log_target)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
}
