//! CLI argument definitions for the drug mention graph tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use drugmap_cli::pipeline::DEFAULT_OUTPUT_NAME;
use drugmap_graph::DEFAULT_MIN_NAME_LEN;

#[derive(Parser)]
#[command(
    name = "drugmap",
    version,
    about = "Drug mention graph - link drugs to the publications that cite them",
    long_about = "Build a graph of drugs and the publications mentioning them.\n\n\
                  Reads drugs, clinical trials and PubMed articles from a resources\n\
                  directory and writes one JSON document grouping mentions by journal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Build the mention graph from a resources directory.
    Run(RunArgs),

    /// Show the journals citing the most distinct drugs in a graph document.
    Report(ReportArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Directory holding drugs.csv and the publication files.
    #[arg(value_name = "RESOURCES_DIR", env = "DRUGMAP_RESOURCES_DIR")]
    pub resources_dir: PathBuf,

    /// Output directory (default: <RESOURCES_DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// File name of the graph document.
    #[arg(long = "output-name", value_name = "NAME", default_value = DEFAULT_OUTPUT_NAME)]
    pub output_name: String,

    /// Drug names shorter than this many characters are never matched.
    #[arg(long = "min-name-len", value_name = "N", default_value_t = DEFAULT_MIN_NAME_LEN)]
    pub min_name_len: usize,

    /// Indent the JSON document.
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Build and summarize without writing the document.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Graph document written by `drugmap run`.
    #[arg(value_name = "GRAPH_JSON")]
    pub graph: PathBuf,
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
