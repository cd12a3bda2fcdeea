use crate::resolver::RenameReport;
use nu_ansi_term::Color;
use std::fmt::Write;

pub const RENAMED_HEADING: &str = "Renamed Files:";
pub const ISSUES_HEADING: &str = "Issues Found:";
pub const NOTHING_RENAMED: &str = "No files were renamed.";

fn heading(text: &str, color: Color, use_color: bool) -> String {
    if use_color {
        color.bold().paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Render the report as message lines grouped under headings
pub fn render_summary(report: &RenameReport, use_color: bool) -> String {
    let mut output = String::new();

    if !report.succeeded.is_empty() {
        writeln!(output, "{}", heading(RENAMED_HEADING, Color::Green, use_color)).unwrap();
        for outcome in &report.succeeded {
            writeln!(output, "{}", outcome).unwrap();
        }
    }

    if !report.failed.is_empty() {
        writeln!(output, "{}", heading(ISSUES_HEADING, Color::Yellow, use_color)).unwrap();
        for outcome in &report.failed {
            writeln!(output, "{}", outcome).unwrap();
        }
    }

    if !report.any_renamed() {
        writeln!(output, "{}", heading(NOTHING_RENAMED, Color::Red, use_color)).unwrap();
    }

    output
}
