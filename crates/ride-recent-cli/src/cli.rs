//! CLI argument definitions for the recent files tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "ride-recent",
    version,
    about = "Inspect and edit the RIDE recent files list",
    long_about = "Inspect and edit the list of recently opened suites shown in the\n\
                  RIDE File menu.\n\n\
                  Every change is saved to the settings file and previews the File\n\
                  menu exactly as the IDE rebuilds it."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file to read and write (default: the RIDE config directory).
    #[arg(long = "settings", value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the recent files, most recent first.
    List,

    /// Record a suite as just opened, moving it to the front.
    Add(AddArgs),

    /// Follow a tracked file to its new path, keeping its position.
    Rename(RenameArgs),

    /// Forget every recent file.
    Clear,

    /// Remove recent files that no longer exist on disk.
    Prune,

    /// Change how many recent files are remembered.
    SetMax(SetMaxArgs),

    /// Preview the File menu with the recent files in place.
    Menu,
}

#[derive(Parser)]
pub struct AddArgs {
    /// Suite file or directory that was opened.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

#[derive(Parser)]
pub struct RenameArgs {
    /// Path currently in the list.
    #[arg(value_name = "OLD")]
    pub old_path: PathBuf,

    /// Path the file was saved under.
    #[arg(value_name = "NEW")]
    pub new_path: PathBuf,
}

#[derive(Parser)]
pub struct SetMaxArgs {
    /// Number of recent files to remember (at least 1).
    #[arg(value_name = "N")]
    pub max: usize,
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

impl LogLevelArg {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
