//! Structured error reporting for table compilation.
//!
//! Every failure aborts the run. Errors that concern a particular register
//! row carry a [`RowLocation`], formatted for stderr as:
//! ```text
//! registers.txt:7: error: row 3 (PORTA): unknown symbol 'z' at position 2 (bit 5)
//! ```

use std::fmt;

use mask_core::{ClassifyError, LiteralError};
use thiserror::Error;

/// Where in the input tables an error was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLocation {
    /// Table origin (file path or built-in table name).
    pub table: String,
    /// 1-indexed line number within the table.
    pub line: usize,
    /// 0-indexed register row, if the error concerns one.
    pub row: Option<usize>,
    /// Register name, if known.
    pub name: Option<String>,
}

impl RowLocation {
    /// Creates a location pointing at a table line.
    #[must_use]
    pub fn new(table: impl Into<String>, line: usize) -> Self {
        Self {
            table: table.into(),
            line,
            row: None,
            name: None,
        }
    }

    /// Attaches the register row index and name.
    #[must_use]
    pub fn with_row(mut self, row: usize, name: impl Into<String>) -> Self {
        self.row = Some(row);
        self.name = Some(name.into());
        self
    }

    /// Formats `table:line`.
    #[must_use]
    pub fn format_location(&self) -> String {
        format!("{}:{}", self.table, self.line)
    }

    /// Formats the row context, e.g. `row 3 (PORTA)`.
    #[must_use]
    pub fn format_row(&self) -> Option<String> {
        match (self.row, &self.name) {
            (Some(row), Some(name)) => Some(format!("row {row} ({name})")),
            (Some(row), None) => Some(format!("row {row}")),
            (None, Some(name)) => Some(format!("({name})")),
            (None, None) => None,
        }
    }
}

impl fmt::Display for RowLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format_row() {
            Some(row) => write!(f, "{}: {row}", self.format_location()),
            None => write!(f, "{}", self.format_location()),
        }
    }
}

/// Classification of compilation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskgenErrorKind {
    /// Register and address tables have different lengths.
    #[error("register table has {rows} rows but address table has {addresses} entries")]
    RowCountMismatch {
        /// Register rows.
        rows: usize,
        /// Address tokens.
        addresses: usize,
    },
    /// Reset pattern could not be classified.
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    /// Mask accumulator could not be rendered.
    #[error(transparent)]
    Literal(#[from] LiteralError),
    /// Address token is not a hexadecimal literal.
    #[error("invalid address literal: {0}")]
    InvalidAddress(String),
    /// Row has no pattern in the selected reset column.
    #[error("no reset pattern in column {column}")]
    MissingPattern {
        /// Selected reset column.
        column: usize,
    },
    /// Half-token of a reset pattern is not one nibble wide.
    #[error("reset pattern half {token:?} has {found} symbols, expected 4")]
    MisalignedPattern {
        /// Offending half-token.
        token: String,
        /// Symbols in the half-token.
        found: usize,
    },
    /// Settings file could not be parsed.
    #[error("invalid settings: {0}")]
    Settings(String),
    /// Table or output file could not be accessed.
    #[error("I/O error: {0}")]
    Io(String),
}

/// A compilation error with optional row context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskgenError {
    /// The kind of error.
    pub kind: MaskgenErrorKind,
    /// Location if available.
    pub location: Option<RowLocation>,
}

impl MaskgenError {
    /// Creates an error without location.
    #[must_use]
    pub const fn new(kind: MaskgenErrorKind) -> Self {
        Self {
            kind,
            location: None,
        }
    }

    /// Adds a location to the error.
    #[must_use]
    pub fn with_location(mut self, location: RowLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Formats the error for stderr output.
    #[must_use]
    pub fn format_for_stderr(&self) -> String {
        let Some(location) = &self.location else {
            return format!("error: {}", self.kind);
        };
        match location.format_row() {
            Some(row) => format!(
                "{}: error: {row}: {}",
                location.format_location(),
                self.kind
            ),
            None => format!("{}: error: {}", location.format_location(), self.kind),
        }
    }
}

impl fmt::Display for MaskgenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{location}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for MaskgenError {}

impl From<MaskgenErrorKind> for MaskgenError {
    fn from(kind: MaskgenErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<ClassifyError> for MaskgenError {
    fn from(e: ClassifyError) -> Self {
        Self::new(MaskgenErrorKind::Classify(e))
    }
}

impl From<LiteralError> for MaskgenError {
    fn from(e: LiteralError) -> Self {
        Self::new(MaskgenErrorKind::Literal(e))
    }
}

/// Result type for table compilation.
pub type MaskgenResult<T> = Result<T, MaskgenError>;
