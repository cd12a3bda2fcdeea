use anyhow::Result;
use sheet_rename_core::{rename_operation, FileTypeFilter, OutputFormatter, ReportFormat};
use std::path::Path;
use std::process;

use crate::OutputFormat;

pub fn handle_rename(
    folder: &str,
    table: &Path,
    file_type: FileTypeFilter,
    report_format: ReportFormat,
    use_color: bool,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let result = rename_operation(folder, table, file_type)?;

    match output {
        OutputFormat::Json => {
            println!("{}", result.format_json());
        },
        OutputFormat::Summary => {
            if !quiet {
                print!("{}", result.render(report_format, use_color));
            }
        },
    }

    // A run where nothing was renamed is reported, not raised
    if !result.report.any_renamed() {
        process::exit(1);
    }

    Ok(())
}
