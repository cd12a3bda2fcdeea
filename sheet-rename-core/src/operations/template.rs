use crate::error::TemplateError;
use crate::output::TemplateResult;
use crate::table::TableFormat;
use crate::template::{render_template, template_table};
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Template operation - writes the example table and returns structured data
///
/// Without an explicit `output` the template lands in `working_dir` (or the
/// current directory) under its default file name.
pub fn template_operation(
    output: Option<&Path>,
    format: TableFormat,
    force: bool,
    working_dir: Option<&Path>,
) -> Result<TemplateResult> {
    let current_dir = working_dir.unwrap_or_else(|| Path::new("."));
    let path: PathBuf = match output {
        Some(path) => current_dir.join(path),
        None => current_dir.join(format.template_file_name()),
    };

    if path.exists() && !force {
        return Err(TemplateError::AlreadyExists { path }.into());
    }

    let bytes = render_template(format)?;
    fs::write(&path, bytes).map_err(|source| TemplateError::Io {
        path: path.clone(),
        source,
    })?;
    log::info!("Wrote {} template to {}", format.extension(), path.display());

    Ok(TemplateResult {
        path: path.display().to_string(),
        format,
        mime_type: format.mime_type().to_string(),
        rows: template_table().len(),
    })
}
