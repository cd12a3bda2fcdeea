use crate::error::InputError;
use crate::file_type::FileType;
use calamine::{open_workbook_auto, Data, Reader};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OLD_FILE_NAME_COLUMN: &str = "Old File Name";
pub const IES_COLUMN: &str = "IES";
pub const PHOTOMETRIC_REPORT_COLUMN: &str = "Photometric_Report";
pub const GOS_REPORT_COLUMN: &str = "Gos_Report";

/// Columns every rename table must have, in template order.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    OLD_FILE_NAME_COLUMN,
    IES_COLUMN,
    PHOTOMETRIC_REPORT_COLUMN,
    GOS_REPORT_COLUMN,
];

/// One row of the rename table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameRequest {
    pub old_file_name: String,
    pub ies_new_name: String,
    pub photometric_new_name: String,
    pub gos_new_name: String,
}

impl RenameRequest {
    pub fn new(old_file_name: impl Into<String>) -> Self {
        Self {
            old_file_name: old_file_name.into(),
            ..Self::default()
        }
    }

    /// Raw (untrimmed) new name cell for the given file type
    pub fn new_name_for(&self, file_type: FileType) -> &str {
        match file_type {
            FileType::Ies => &self.ies_new_name,
            FileType::Pdf => &self.photometric_new_name,
            FileType::Gos => &self.gos_new_name,
        }
    }

    /// Cells in `REQUIRED_COLUMNS` order
    pub fn cells(&self) -> [&str; 4] {
        [
            &self.old_file_name,
            &self.ies_new_name,
            &self.photometric_new_name,
            &self.gos_new_name,
        ]
    }
}

/// Output formats for table documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    Xlsx,
    Csv,
}

impl TableFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Csv => "text/csv",
        }
    }

    /// File name offered for the downloadable template
    pub fn template_file_name(self) -> String {
        format!("File_Renaming_Template.{}", self.extension())
    }
}

impl std::str::FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" => Ok(Self::Xlsx),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("Invalid table format: {}", s)),
        }
    }
}

/// Ordered rename requests loaded from a table document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<RenameRequest>,
}

impl Table {
    pub fn new(rows: Vec<RenameRequest>) -> Self {
        Self { rows }
    }

    /// Build a table from a header row and data records.
    ///
    /// Columns are located by header name (surrounding whitespace ignored, the
    /// first duplicate wins). Extra columns are ignored and short records are
    /// padded with empty cells.
    pub fn from_records<I>(headers: &[String], records: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let index = ColumnIndex::locate(headers)?;
        let rows = records
            .into_iter()
            .map(|record| index.request(&record))
            .collect();
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[RenameRequest] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Positions of the required columns within a header row
struct ColumnIndex {
    old_file_name: usize,
    ies: usize,
    photometric: usize,
    gos: usize,
}

impl ColumnIndex {
    fn locate(headers: &[String]) -> Result<Self, InputError> {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);

        let missing: Vec<&'static str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|&name| position(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(InputError::MissingColumns { missing });
        }

        // All four are present at this point
        Ok(Self {
            old_file_name: position(OLD_FILE_NAME_COLUMN).unwrap_or_default(),
            ies: position(FileType::Ies.column()).unwrap_or_default(),
            photometric: position(FileType::Pdf.column()).unwrap_or_default(),
            gos: position(FileType::Gos.column()).unwrap_or_default(),
        })
    }

    fn request(&self, record: &[String]) -> RenameRequest {
        let cell = |i: usize| record.get(i).cloned().unwrap_or_default();
        RenameRequest {
            old_file_name: cell(self.old_file_name),
            ies_new_name: cell(self.ies),
            photometric_new_name: cell(self.photometric),
            gos_new_name: cell(self.gos),
        }
    }
}

enum Source {
    Spreadsheet,
    Delimited(u8),
}

fn detect_source(path: &Path) -> Option<Source> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(Source::Spreadsheet),
        "csv" => Some(Source::Delimited(b',')),
        "tsv" | "tab" => Some(Source::Delimited(b'\t')),
        _ => None,
    }
}

/// Load a rename table from a spreadsheet or delimited text file.
pub fn load_table(path: &Path) -> Result<Table, InputError> {
    let source = detect_source(path).ok_or_else(|| InputError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let (headers, records) = match source {
        Source::Spreadsheet => read_spreadsheet(path)?,
        Source::Delimited(delimiter) => read_delimited(path, delimiter)?,
    };

    let table = Table::from_records(&headers, records)?;
    log::debug!("Loaded {} rows from {}", table.len(), path.display());
    Ok(table)
}

type Records = (Vec<String>, Vec<Vec<String>>);

fn read_spreadsheet(path: &Path) -> Result<Records, InputError> {
    let spreadsheet_error = |source: calamine::Error| InputError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(spreadsheet_error)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| InputError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(spreadsheet_error)?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>());
    let headers = rows.next().ok_or_else(|| InputError::NoHeader {
        path: path.to_path_buf(),
    })?;

    Ok((headers, rows.collect()))
}

fn read_delimited(path: &Path, delimiter: u8) -> Result<Records, InputError> {
    let delimited_error = |source: csv::Error| InputError::Delimited {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(delimited_error)?;

    let mut records = reader
        .records()
        .map(|record| record.map(|r| r.iter().map(str::to_string).collect::<Vec<_>>()));

    let mut headers = match records.next() {
        Some(header) => header.map_err(delimited_error)?,
        None => {
            return Err(InputError::NoHeader {
                path: path.to_path_buf(),
            })
        },
    };
    if let Some(first) = headers.first_mut() {
        *first = first.trim_start_matches('\u{feff}').to_string();
    }

    let records = records
        .collect::<Result<Vec<_>, _>>()
        .map_err(delimited_error)?;
    Ok((headers, records))
}

/// Render a spreadsheet cell the way a user typed it.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        #[allow(clippy::cast_possible_truncation)]
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (*f as i64).to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
