use crate::error::TemplateError;
use crate::table::{RenameRequest, Table, TableFormat, REQUIRED_COLUMNS};
use rust_xlsxwriter::{Format, Workbook};

/// The downloadable template: the required columns and one example row per
/// supported file type.
pub fn template_table() -> Table {
    Table::new(vec![
        RenameRequest {
            ies_new_name: "new_ies_file".to_string(),
            ..RenameRequest::new("example_file.ies")
        },
        RenameRequest {
            photometric_new_name: "new_pdf_file".to_string(),
            ..RenameRequest::new("example_file.pdf")
        },
        RenameRequest {
            gos_new_name: "new_gos_file".to_string(),
            ..RenameRequest::new("example_file.gos")
        },
    ])
}

/// Serialize a table in the given document format.
pub fn render_document(table: &Table, format: TableFormat) -> Result<Vec<u8>, TemplateError> {
    match format {
        TableFormat::Xlsx => render_xlsx(table),
        TableFormat::Csv => render_csv(table),
    }
}

/// Serialize the template in the given document format.
pub fn render_template(format: TableFormat) -> Result<Vec<u8>, TemplateError> {
    render_document(&template_table(), format)
}

fn render_xlsx(table: &Table) -> Result<Vec<u8>, TemplateError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();

    for (col, header) in (0u16..).zip(REQUIRED_COLUMNS) {
        worksheet.write_string_with_format(0, col, header, &header_format)?;
    }

    for (row, request) in (1u32..).zip(table.rows()) {
        for (col, cell) in (0u16..).zip(request.cells()) {
            // Leave blank cells empty rather than writing ""
            if !cell.is_empty() {
                worksheet.write_string(row, col, cell)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn render_csv(table: &Table) -> Result<Vec<u8>, TemplateError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(REQUIRED_COLUMNS)?;
    for request in table.rows() {
        writer.write_record(request.cells())?;
    }

    writer
        .into_inner()
        .map_err(|e| TemplateError::Csv(csv::Error::from(e.into_error())))
}
