use anyhow::Result;
use sheet_rename_core::{template_operation, OutputFormatter, TableFormat};
use std::path::Path;

use crate::OutputFormat;

pub fn handle_template(
    out: Option<&Path>,
    format: TableFormat,
    force: bool,
    output: OutputFormat,
) -> Result<()> {
    let result = template_operation(out, format, force, None)?;

    match output {
        OutputFormat::Json => {
            println!("{}", result.format_json());
        },
        OutputFormat::Summary => {
            print!("{}", result.format_summary());
        },
    }

    Ok(())
}
