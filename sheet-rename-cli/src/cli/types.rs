use clap::ValueEnum;
use sheet_rename_core::{FileTypeFilter, ReportFormat, TableFormat};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum OutputFormat {
    Summary,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum ReportArg {
    Summary,
    Table,
}

impl From<ReportArg> for ReportFormat {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Summary => Self::Summary,
            ReportArg::Table => Self::Table,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum FileTypeArg {
    Ies,
    Pdf,
    Gos,
    All,
}

impl From<FileTypeArg> for FileTypeFilter {
    fn from(arg: FileTypeArg) -> Self {
        match arg {
            FileTypeArg::Ies => Self::Ies,
            FileTypeArg::Pdf => Self::Pdf,
            FileTypeArg::Gos => Self::Gos,
            FileTypeArg::All => Self::All,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum TableFormatArg {
    Xlsx,
    Csv,
}

impl From<TableFormatArg> for TableFormat {
    fn from(arg: TableFormatArg) -> Self {
        match arg {
            TableFormatArg::Xlsx => Self::Xlsx,
            TableFormatArg::Csv => Self::Csv,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevelArg {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}
