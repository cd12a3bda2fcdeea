use serde::{Deserialize, Serialize};
use std::fmt;

/// File types the rename table knows how to resolve.
///
/// Each type owns one "new name" column of the table. The type of a row is
/// decided by the extension of its old file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Ies,
    Pdf,
    Gos,
}

impl FileType {
    pub const ALL: [Self; 3] = [Self::Ies, Self::Pdf, Self::Gos];

    /// Extension including the leading dot, lowercase.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Ies => ".ies",
            Self::Pdf => ".pdf",
            Self::Gos => ".gos",
        }
    }

    /// Name of the table column that holds the new name for this type
    pub fn column(self) -> &'static str {
        match self {
            Self::Ies => crate::table::IES_COLUMN,
            Self::Pdf => crate::table::PHOTOMETRIC_REPORT_COLUMN,
            Self::Gos => crate::table::GOS_REPORT_COLUMN,
        }
    }

    /// Detect the file type from a file name, ignoring case.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = extension_of(file_name)?;
        Self::ALL
            .into_iter()
            .find(|file_type| file_type.extension().eq_ignore_ascii_case(ext))
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ies => "IES",
            Self::Pdf => "PDF",
            Self::Gos => "GOS",
        };
        f.write_str(label)
    }
}

/// The file type selection offered to the user.
///
/// Carried through the rename operation and echoed in its output. Rows are
/// always resolved by their own extension, whatever the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileTypeFilter {
    Ies,
    Pdf,
    Gos,
    #[default]
    All,
}

impl std::str::FromStr for FileTypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ies" => Ok(Self::Ies),
            "pdf" => Ok(Self::Pdf),
            "gos" => Ok(Self::Gos),
            "all" | "all files" => Ok(Self::All),
            _ => Err(format!("Invalid file type: {}", s)),
        }
    }
}

impl fmt::Display for FileTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ies => write!(f, "{}", FileType::Ies),
            Self::Pdf => write!(f, "{}", FileType::Pdf),
            Self::Gos => write!(f, "{}", FileType::Gos),
            Self::All => f.write_str("All Files"),
        }
    }
}

/// Return the extension of `file_name`, including the dot.
///
/// Only the last path component is considered. Leading dots do not start an
/// extension, so `.ies` on its own has none.
pub fn extension_of(file_name: &str) -> Option<&str> {
    let base = file_name
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(file_name);
    let stem_start = base.len() - base.trim_start_matches('.').len();
    let dot = base[stem_start..].rfind('.')? + stem_start;
    Some(&base[dot..])
}
