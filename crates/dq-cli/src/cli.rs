//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dq",
    version,
    about = "Audit exported schema metadata for structural quality problems",
    long_about = "Audit exported relational-schema metadata (tables, columns, keys)\n\
                  for structural quality problems.\n\n\
                  Reads one metadados_<schema>.csv per schema from a base folder and\n\
                  writes a per-schema report: raw metadata, rule violations, structural\n\
                  measures, and normalized quality metrics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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
    /// Audit every schema export found under a base folder.
    Audit(AuditArgs),

    /// List the standard rule catalog.
    Rules,
}

#[derive(Parser)]
pub struct AuditArgs {
    /// Folder containing metadados_<schema>.csv files (searched recursively).
    #[arg(value_name = "BASE_FOLDER")]
    pub base_folder: PathBuf,

    /// Report output directory (default: <BASE_FOLDER>, one subfolder per schema).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Tables to exclude, as OWNER.TABLE or a table-name fragment.
    #[arg(long = "exclude-tables", value_name = "OWNER.TABLE", num_args = 0..)]
    pub exclude_tables: Vec<String>,

    /// Table names allowed to end with 'S' despite the singular-name rule.
    #[arg(long = "plural-exceptions", value_name = "NAME", num_args = 0..)]
    pub plural_exceptions: Vec<String>,

    /// Validate and summarize without writing report files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
