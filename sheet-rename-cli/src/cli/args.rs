use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::{FileTypeArg, LogLevelArg, OutputFormat, ReportArg, TableFormatArg};

/// Rename IES, PDF and GOS files from a spreadsheet of old and new names
#[derive(Parser, Debug)]
#[command(name = "sheet-rename")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Log verbosity (defaults to the config file, then warn)
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevelArg>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the rename template with one example row per file type
    Template {
        /// Document format of the template
        #[arg(long, value_enum)]
        format: Option<TableFormatArg>,

        /// Where to write the template (defaults to File_Renaming_Template.<ext>)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Rename files in a folder using a filled-in rename table
    Rename {
        /// Folder containing the files (plain path or file:// URI)
        folder: String,

        /// Rename table (.xlsx, .xls, .ods, .csv, .tsv)
        table: PathBuf,

        /// File type selection; every row is still resolved by its own extension
        #[arg(long, value_enum)]
        file_type: Option<FileTypeArg>,

        /// How to report outcomes
        #[arg(long, value_enum)]
        report: Option<ReportArg>,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress the report
        #[arg(long)]
        quiet: bool,
    },

    /// Show version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}
