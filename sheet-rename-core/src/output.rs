use crate::file_type::FileTypeFilter;
use crate::report::{render_report, ReportFormat};
use crate::resolver::{RenameOutcome, RenameReport};
use crate::table::TableFormat;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a rename operation
#[derive(Debug, Serialize, Deserialize)]
pub struct RenameResult {
    pub folder: String,
    pub table: String,
    pub file_type: FileTypeFilter,
    pub rows: usize,
    pub report: RenameReport,
}

impl RenameResult {
    /// Render the outcomes as a human-readable report
    pub fn render(&self, format: ReportFormat, use_color: bool) -> String {
        render_report(&self.report, format, use_color)
    }
}

/// Result of a template operation
#[derive(Debug, Serialize, Deserialize)]
pub struct TemplateResult {
    pub path: String,
    pub format: TableFormat,
    pub mime_type: String,
    pub rows: usize,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for RenameResult {
    fn format_json(&self) -> String {
        let report = &self.report;
        let skipped =
            report.count_failed(|o| matches!(o, RenameOutcome::SkippedNoNewName { .. }));
        let not_found = report.count_failed(|o| matches!(o, RenameOutcome::NotFound { .. }));
        let errors = report.count_failed(|o| matches!(o, RenameOutcome::Error { .. }));

        serde_json::to_string(&json!({
            "success": report.any_renamed(),
            "operation": "rename",
            "folder": self.folder,
            "table": self.table,
            "file_type": self.file_type,
            "rows": self.rows,
            "summary": {
                "renamed": report.renamed_count(),
                "skipped_no_new_name": skipped,
                "not_found": not_found,
                "errors": errors,
            },
            "succeeded": report.succeeded,
            "failed": report.failed,
        }))
        .unwrap_or_default()
    }

    /// Plain summary report, without colors
    fn format_summary(&self) -> String {
        self.render(ReportFormat::Summary, false)
    }
}

impl OutputFormatter for TemplateResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "template",
            "path": self.path,
            "format": self.format,
            "mime_type": self.mime_type,
            "rows": self.rows,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        writeln!(output, "📥 Template written to {}", self.path).unwrap();
        writeln!(output, "Format: {} ({})", self.format.extension(), self.mime_type).unwrap();
        writeln!(output, "Example rows: {}", self.rows).unwrap();
        output
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
