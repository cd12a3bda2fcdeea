use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with the inputs of a rename run.
///
/// Any of these stops the run before a single row is processed.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Please provide both the folder path and the table file.")]
    MissingInput,

    #[error("Unsupported table format: {} (expected .xlsx, .xls, .ods, .csv or .tsv)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to read spreadsheet {}", .path.display())]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Spreadsheet {} has no worksheets", .path.display())]
    NoWorksheet { path: PathBuf },

    #[error("Failed to read delimited table {}", .path.display())]
    Delimited {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Table {} has no header row", .path.display())]
    NoHeader { path: PathBuf },

    #[error(
        "Template must contain columns: Old File Name, IES, Photometric_Report, Gos_Report (missing: {})",
        .missing.join(", ")
    )]
    MissingColumns { missing: Vec<&'static str> },
}

/// Problems writing a template document.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("{} already exists (use --force to overwrite)", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Failed to build xlsx template")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("Failed to build csv template")]
    Csv(#[from] csv::Error),

    #[error("Failed to write template to {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
