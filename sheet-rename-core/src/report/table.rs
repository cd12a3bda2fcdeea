use crate::resolver::{RenameOutcome, RenameReport};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, IsTerminal};

fn status(outcome: &RenameOutcome) -> (&'static str, Color) {
    match outcome {
        RenameOutcome::Renamed { .. } => ("Renamed", Color::Green),
        RenameOutcome::SkippedNoNewName { .. } => ("Skipped", Color::Yellow),
        RenameOutcome::NotFound { .. } => ("Not found", Color::Red),
        RenameOutcome::Error { .. } => ("Error", Color::Red),
    }
}

fn new_name_and_detail(outcome: &RenameOutcome) -> (&str, &str) {
    match outcome {
        RenameOutcome::Renamed { new, .. } => (new.as_str(), ""),
        RenameOutcome::SkippedNoNewName { .. } => ("", "New name not provided"),
        RenameOutcome::NotFound { .. } => ("", "File not found"),
        RenameOutcome::Error { message, .. } => ("", message.as_str()),
    }
}

/// Render one row per outcome, successes first
pub fn render_table(report: &RenameReport, use_color: bool) -> String {
    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("Old File Name").fg(Color::Cyan),
            Cell::new("New File Name").fg(Color::Cyan),
            Cell::new("Status").fg(Color::Cyan),
            Cell::new("Detail").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Old File Name", "New File Name", "Status", "Detail"]);
    }

    for outcome in report.succeeded.iter().chain(&report.failed) {
        let (label, color) = status(outcome);
        let (new, detail) = new_name_and_detail(outcome);

        if use_color {
            table.add_row(vec![
                Cell::new(outcome.old()),
                Cell::new(new),
                Cell::new(label).fg(color),
                Cell::new(detail),
            ]);
        } else {
            table.add_row(vec![outcome.old(), new, label, detail]);
        }
    }

    format!("{table}\n")
}
