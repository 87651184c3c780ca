//! Run settings and their TOML representation.
//!
//! ```toml
//! [masks.default_bits]
//! unknown = true
//!
//! [masks.literal]
//! separator = "'"
//!
//! [report]
//! name_width = 12
//!
//! [table]
//! reset_column = 0
//! ```
//!
//! Every key is optional. `masks.alphabet` replaces the whole symbol list
//! when present:
//!
//! ```toml
//! [[masks.alphabet]]
//! symbol = "0"
//! category = { fixed = false }
//!
//! [[masks.alphabet]]
//! symbol = "x"
//! category = "unknown"
//! ```

use std::fs;
use std::path::Path;

use mask_core::MaskConfig;
use serde::{Deserialize, Serialize};

use crate::errors::{MaskgenError, MaskgenErrorKind, MaskgenResult};
use crate::report::ReportLayout;

/// Reset column used for mask derivation by default (power-up).
pub const POWER_UP_COLUMN: usize = 0;

/// Register table interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableOptions {
    /// Reset-pattern column to derive masks from.
    pub reset_column: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            reset_column: POWER_UP_COLUMN,
        }
    }
}

/// Everything a run can be configured with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Classifier and literal configuration.
    pub masks: MaskConfig,
    /// Report layout.
    pub report: ReportLayout,
    /// Table interpretation.
    pub table: TableOptions,
}

impl Settings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`MaskgenErrorKind::Settings`] for malformed TOML, unknown
    /// keys, or an invalid symbol alphabet.
    pub fn from_toml_str(content: &str) -> MaskgenResult<Self> {
        toml::from_str(content)
            .map_err(|e| MaskgenError::new(MaskgenErrorKind::Settings(e.message().to_string())))
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`MaskgenErrorKind::Io`] if the file cannot be read and
    /// [`MaskgenErrorKind::Settings`] if it cannot be parsed.
    pub fn load(path: &Path) -> MaskgenResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            MaskgenError::new(MaskgenErrorKind::Io(format!("{}: {e}", path.display())))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e.kind {
            MaskgenErrorKind::Settings(msg) => MaskgenError::new(MaskgenErrorKind::Settings(
                format!("{}: {msg}", path.display()),
            )),
            kind => MaskgenError::new(kind),
        })
    }
}
