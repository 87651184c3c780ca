//! Special-function-register reset table compiler.

/// Built-in reference tables.
pub mod builtin;
/// Structured error types.
pub mod errors;
/// Logging setup for the command-line driver.
pub mod logging;
/// Table join, classification and rendering pipeline.
pub mod pipeline;
/// Report rows and text output.
pub mod report;
/// Run settings and TOML loading.
pub mod settings;
/// Register and address table parsing.
pub mod source;

pub use errors::{MaskgenError, MaskgenErrorKind, MaskgenResult, RowLocation};
pub use pipeline::{compile, join_tables, RegisterRecord};
pub use report::{Report, ReportLayout, ReportRow};
pub use settings::{Settings, TableOptions};
pub use source::{
    load_tables, parse_address_table, parse_register_table, AddressEntry, AddressTable,
    RegisterRow, RegisterTable,
};

#[cfg(test)]
use rstest as _;
#[cfg(test)]
use tempfile as _;
