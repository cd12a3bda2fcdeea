//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core logic for each sheet-rename operation,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod rename;
pub mod template;

pub use rename::rename_operation;
pub use template::template_operation;
