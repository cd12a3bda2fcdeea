use crate::error::InputError;
use crate::file_type::FileTypeFilter;
use crate::folder::normalize_folder;
use crate::output::RenameResult;
use crate::resolver::resolve_and_rename;
use crate::table::load_table;
use anyhow::{Context, Result};
use std::path::Path;

/// Rename operation - loads the table, renames files in `folder`, and returns structured data
///
/// The table is validated in full before the first rename, so a schema error
/// leaves the folder untouched.
pub fn rename_operation(
    folder: &str,
    table_path: &Path,
    file_type: FileTypeFilter,
) -> Result<RenameResult> {
    if folder.trim().is_empty() || table_path.as_os_str().is_empty() {
        return Err(InputError::MissingInput.into());
    }

    let table = load_table(table_path)
        .with_context(|| format!("Error processing file: {}", table_path.display()))?;

    let folder_path = normalize_folder(folder);
    if !folder_path.is_dir() {
        log::warn!(
            "{} is not a directory; its rows will not be found",
            folder_path.display()
        );
    }

    let report = resolve_and_rename(&folder_path, table.rows(), file_type);

    Ok(RenameResult {
        folder: folder_path.display().to_string(),
        table: table_path.display().to_string(),
        file_type,
        rows: table.len(),
        report,
    })
}
