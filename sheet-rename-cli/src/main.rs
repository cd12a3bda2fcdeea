use anyhow::{Context, Result};
use clap::Parser;
use sheet_rename_core::{
    should_use_color, Config, FileTypeFilter, InputError, OutputFormatter, ReportFormat,
    TableFormat, TemplateError, VersionResult,
};
use std::process;
use std::str::FromStr;

mod cli;
mod logging;
mod rename;
mod template;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
            .unwrap_or_else(|e| {
                eprintln!("Error: {e:#}");
                process::exit(2);
            });
    }

    // Load config to get defaults
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let log_level = cli
        .log_level
        .map_or(config.defaults.log_level.as_str(), |level| level.as_str());
    logging::setup_logging(log_level);
    if let Some(e) = config_error {
        log::warn!("Ignoring unreadable config file: {e:#}");
    }

    let use_color = !cli.no_color && should_use_color(config.defaults.use_color);

    let result = match cli.command {
        Commands::Template {
            format,
            out,
            force,
            output,
        } => {
            let format = format.map(Into::into).unwrap_or_else(|| {
                TableFormat::from_str(&config.defaults.template_format).unwrap_or(TableFormat::Xlsx)
            });
            template::handle_template(out.as_deref(), format, force, output)
        },

        Commands::Rename {
            folder,
            table,
            file_type,
            report,
            output,
            quiet,
        } => {
            let file_type = file_type.map(Into::into).unwrap_or_else(|| {
                FileTypeFilter::from_str(&config.defaults.file_type).unwrap_or_default()
            });
            let report = report.map(Into::into).unwrap_or_else(|| {
                ReportFormat::from_str(&config.defaults.report_format)
                    .unwrap_or(ReportFormat::Summary)
            });

            rename::handle_rename(
                &folder, &table, file_type, report, use_color, output, quiet,
            )
        },

        Commands::Version { output } => handle_version(output),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

/// 2 for invalid input, 3 for everything else
fn exit_code(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<InputError>().is_some() {
        return 2;
    }
    match error.downcast_ref::<TemplateError>() {
        Some(TemplateError::AlreadyExists { .. }) => 2,
        _ => 3,
    }
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "sheet-rename".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let formatted = match output {
        OutputFormat::Json => version_result.format_json(),
        OutputFormat::Summary => version_result.format_summary(),
    };

    println!("{}", formatted);
    Ok(())
}
