use crate::file_type::{FileType, FileTypeFilter};
use crate::folder::join_in_folder;
use crate::table::RenameRequest;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// What happened to a single row of the rename table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenameOutcome {
    Renamed { old: String, new: String },
    SkippedNoNewName { old: String },
    NotFound { old: String },
    Error { old: String, message: String },
}

impl RenameOutcome {
    /// The old file name of the row this outcome belongs to
    pub fn old(&self) -> &str {
        match self {
            Self::Renamed { old, .. }
            | Self::SkippedNoNewName { old }
            | Self::NotFound { old }
            | Self::Error { old, .. } => old,
        }
    }

    pub fn is_renamed(&self) -> bool {
        matches!(self, Self::Renamed { .. })
    }
}

impl fmt::Display for RenameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Renamed { old, new } => write!(f, "✅ {} → {}", old, new),
            Self::SkippedNoNewName { old } => write!(f, "⚠️ New name not provided for: {}", old),
            Self::NotFound { old } => write!(f, "❌ File not found: {}", old),
            Self::Error { old, message } => write!(f, "⚠️ Error renaming {}: {}", old, message),
        }
    }
}

/// Outcomes of a rename run, split the way they are reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameReport {
    pub succeeded: Vec<RenameOutcome>,
    pub failed: Vec<RenameOutcome>,
}

impl RenameReport {
    pub fn push(&mut self, outcome: RenameOutcome) {
        if outcome.is_renamed() {
            self.succeeded.push(outcome);
        } else {
            self.failed.push(outcome);
        }
    }

    pub fn renamed_count(&self) -> usize {
        self.succeeded.len()
    }

    pub fn any_renamed(&self) -> bool {
        !self.succeeded.is_empty()
    }

    /// Count of `failed` outcomes matching the predicate
    pub fn count_failed(&self, predicate: impl Fn(&RenameOutcome) -> bool) -> usize {
        self.failed.iter().filter(|o| predicate(o)).count()
    }
}

/// How a row resolves before anything touches the filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Extension is not one of the supported types; the row is ignored
    Unsupported,
    /// The column for this extension is empty or whitespace
    MissingNewName,
    NewName(&'a str),
}

/// Pick the trimmed new name for a row based on its old file's extension.
pub fn resolve(request: &RenameRequest) -> Resolution<'_> {
    let Some(file_type) = FileType::from_file_name(&request.old_file_name) else {
        return Resolution::Unsupported;
    };

    let candidate = request.new_name_for(file_type).trim();
    if candidate.is_empty() {
        Resolution::MissingNewName
    } else {
        Resolution::NewName(candidate)
    }
}

/// Resolve one row and perform its rename inside `folder`.
///
/// Returns `None` for rows with an unsupported extension.
pub fn rename_one(folder: &Path, request: &RenameRequest) -> Option<RenameOutcome> {
    let old = request.old_file_name.clone();

    let new_name = match resolve(request) {
        Resolution::Unsupported => {
            log::debug!("Skipping {}: unsupported extension", old);
            return None;
        },
        Resolution::MissingNewName => {
            log::debug!("Skipping {}: no new name", old);
            return Some(RenameOutcome::SkippedNoNewName { old });
        },
        Resolution::NewName(name) => name,
    };

    let old_path = join_in_folder(folder, &old);
    let new_path = join_in_folder(folder, new_name);

    let outcome = match fs::rename(&old_path, &new_path) {
        Ok(()) => {
            log::debug!("Renamed {} -> {}", old_path.display(), new_path.display());
            RenameOutcome::Renamed {
                old,
                new: new_name.to_string(),
            }
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound && !source_exists(&old_path) => {
            log::debug!("Source not found: {}", old_path.display());
            RenameOutcome::NotFound { old }
        },
        Err(e) => {
            log::debug!("Failed to rename {}: {}", old_path.display(), e);
            RenameOutcome::Error {
                old,
                message: e.to_string(),
            }
        },
    };
    Some(outcome)
}

fn source_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Rename every row of the table inside `folder`, in table order.
///
/// A failing row never stops the run. `filter` is accepted for callers that
/// expose a file type selection but does not restrict the rows processed:
/// each row is resolved by its own extension.
pub fn resolve_and_rename(
    folder: &Path,
    rows: &[RenameRequest],
    filter: FileTypeFilter,
) -> RenameReport {
    log::debug!(
        "Processing {} rows in {} (file type selection: {})",
        rows.len(),
        folder.display(),
        filter
    );

    let mut report = RenameReport::default();
    for outcome in rows.iter().filter_map(|row| rename_one(folder, row)) {
        report.push(outcome);
    }

    log::info!(
        "Renamed {} of {} rows, {} issues",
        report.succeeded.len(),
        rows.len(),
        report.failed.len()
    );
    report
}
