#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod file_type;
pub mod folder;
pub mod operations;
pub mod output;
pub mod report;
pub mod resolver;
pub mod table;
pub mod template;

pub use config::Config;
pub use error::{InputError, TemplateError};
pub use file_type::{extension_of, FileType, FileTypeFilter};
pub use folder::{join_in_folder, normalize_folder};
pub use operations::{rename_operation, template_operation};
pub use output::{OutputFormat, OutputFormatter, RenameResult, TemplateResult, VersionResult};
pub use report::{render_report, should_use_color, ReportFormat};
pub use resolver::{rename_one, resolve, resolve_and_rename, RenameOutcome, RenameReport, Resolution};
pub use table::{load_table, RenameRequest, Table, TableFormat, REQUIRED_COLUMNS};
pub use template::{render_document, render_template, template_table};
