//! Register and address table parsing.
//!
//! Two tables describe a register family:
//! - **Register table**: one register per line, `NAME` followed by the
//!   4-symbol halves of each reset pattern. Footnote markers such as `(3)`
//!   are stripped. Blank lines and `#` comments are skipped.
//! - **Address table**: hexadecimal address tokens, one per register in the
//!   same order. Line breaks carry no meaning.
//!
//! Source line numbers are kept so errors can point back at the input.

use std::fs;
use std::path::Path;

use tracing::trace;

use crate::errors::{MaskgenError, MaskgenErrorKind, MaskgenResult, RowLocation};

/// Symbols in one half-token of a reset pattern.
pub const NIBBLE_WIDTH: usize = 4;

/// One register row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRow {
    /// Register name.
    pub name: String,
    /// Pattern half-tokens in source order, footnotes removed.
    pub nibbles: Vec<String>,
    /// 1-indexed line number in the table.
    pub line: usize,
}

impl RegisterRow {
    /// Reassembles the full reset pattern of `column` (`0` = power-up)
    /// from its two half-tokens.
    ///
    /// # Errors
    ///
    /// Returns [`MaskgenErrorKind::MissingPattern`] if the row has no such
    /// column and [`MaskgenErrorKind::MisalignedPattern`] if either half is
    /// not [`NIBBLE_WIDTH`] symbols long.
    pub fn reset_pattern(&self, column: usize) -> Result<String, MaskgenErrorKind> {
        let (Some(high), Some(low)) = (
            self.nibbles.get(column * 2),
            self.nibbles.get(column * 2 + 1),
        ) else {
            return Err(MaskgenErrorKind::MissingPattern { column });
        };
        for half in [high, low] {
            let found = half.chars().count();
            if found != NIBBLE_WIDTH {
                return Err(MaskgenErrorKind::MisalignedPattern {
                    token: half.clone(),
                    found,
                });
            }
        }
        Ok(format!("{high}{low}"))
    }
}

/// Parsed register table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterTable {
    /// Table origin for error reporting.
    pub origin: String,
    /// Rows in source order.
    pub rows: Vec<RegisterRow>,
}

/// One address token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressEntry {
    /// Register address.
    pub value: u16,
    /// 1-indexed line number in the table.
    pub line: usize,
}

/// Parsed address table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressTable {
    /// Table origin for error reporting.
    pub origin: String,
    /// Addresses in source order.
    pub entries: Vec<AddressEntry>,
}

/// Removes a trailing footnote marker like `(2)` from a token.
fn strip_footnote(token: &str) -> &str {
    let Some(body) = token.strip_suffix(')') else {
        return token;
    };
    match body.rfind('(') {
        Some(open) if body[open + 1..].chars().all(|c| c.is_ascii_digit()) => &token[..open],
        _ => token,
    }
}

fn is_skipped(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parses a register table.
#[must_use]
pub fn parse_register_table(origin: &str, content: &str) -> RegisterTable {
    let mut rows = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if is_skipped(line) {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            continue;
        };
        let nibbles: Vec<String> = tokens
            .map(strip_footnote)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        trace!(name, line = idx + 1, tokens = nibbles.len(), "register row");
        rows.push(RegisterRow {
            name: name.to_string(),
            nibbles,
            line: idx + 1,
        });
    }

    RegisterTable {
        origin: origin.to_string(),
        rows,
    }
}

/// Parses one `0x`-prefixed hexadecimal address.
fn parse_address(token: &str) -> Option<u16> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(digits, 16).ok()
}

/// Parses an address table.
///
/// # Errors
///
/// Returns [`MaskgenErrorKind::InvalidAddress`] for the first token that is
/// not a `0x`-prefixed 16-bit hexadecimal literal.
pub fn parse_address_table(origin: &str, content: &str) -> MaskgenResult<AddressTable> {
    let mut entries = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if is_skipped(line) {
            continue;
        }
        for token in line.split_whitespace() {
            let value = parse_address(token).ok_or_else(|| {
                MaskgenError::new(MaskgenErrorKind::InvalidAddress(token.to_string()))
                    .with_location(RowLocation::new(origin, idx + 1))
            })?;
            entries.push(AddressEntry {
                value,
                line: idx + 1,
            });
        }
    }

    trace!(origin, entries = entries.len(), "address table");
    Ok(AddressTable {
        origin: origin.to_string(),
        entries,
    })
}

fn read_table(path: &Path) -> MaskgenResult<String> {
    fs::read_to_string(path).map_err(|e| {
        MaskgenError::new(MaskgenErrorKind::Io(format!("{}: {e}", path.display())))
    })
}

/// Reads and parses a register table file and its address table file.
///
/// # Errors
///
/// Returns [`MaskgenErrorKind::Io`] if either file cannot be read, or the
/// address parse error.
pub fn load_tables(
    registers: &Path,
    addresses: &Path,
) -> MaskgenResult<(RegisterTable, AddressTable)> {
    let register_text = read_table(registers)?;
    let address_text = read_table(addresses)?;
    Ok((
        parse_register_table(&registers.display().to_string(), &register_text),
        parse_address_table(&addresses.display().to_string(), &address_text)?,
    ))
}
