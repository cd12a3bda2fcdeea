mod summary;
mod table;

pub use summary::render_summary;
pub use table::render_table;

use crate::resolver::RenameReport;
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Summary,
    Table,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "table" => Ok(Self::Table),
            _ => Err(format!("Invalid report format: {}", s)),
        }
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color_with_detector<F>(use_color: Option<bool>, is_terminal: F) -> bool
where
    F: Fn() -> bool,
{
    match use_color {
        Some(explicit_color) => explicit_color,
        None => is_terminal(),
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color(use_color: Option<bool>) -> bool {
    should_use_color_with_detector(use_color, || io::stdout().is_terminal())
}

/// Render the outcomes of a rename run in the specified format
pub fn render_report(report: &RenameReport, format: ReportFormat, use_color: bool) -> String {
    match format {
        ReportFormat::Summary => render_summary(report, use_color),
        ReportFormat::Table => render_table(report, use_color),
    }
}
