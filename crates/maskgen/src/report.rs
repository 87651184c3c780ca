//! Report rows and their line-oriented text form.
//!
//! Each register becomes one line:
//! ```text
//! PCON       0x08E 0b0000_0000 0b1111_1100 0b0000_0000 // NOTE: 0b0000_0001 depends on condition
//! ```
//! The note is only written for registers with condition-dependent bits.

use std::fmt;
use std::io::{self, Write};

use mask_core::{render_channel, LiteralError, LiteralStyle, MaskChannel, MaskSet};
use serde::{Deserialize, Serialize};

/// First line of every report.
pub const DEFAULT_SECTION_HEADER: &str = "# masks";
/// Width the register name is padded to.
pub const DEFAULT_NAME_WIDTH: usize = 10;
/// Minimum number of hex digits in a rendered address.
pub const DEFAULT_ADDRESS_DIGITS: usize = 3;

/// Column layout of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportLayout {
    /// Line written before the first register.
    pub section_header: String,
    /// Register names are left-justified to this width.
    pub name_width: usize,
    /// Addresses are zero-padded to this many hex digits.
    pub address_digits: usize,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            section_header: DEFAULT_SECTION_HEADER.to_string(),
            name_width: DEFAULT_NAME_WIDTH,
            address_digits: DEFAULT_ADDRESS_DIGITS,
        }
    }
}

/// One rendered register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Register name.
    pub name: String,
    /// Register address.
    pub address: u16,
    /// Rendered initial value.
    pub initial: String,
    /// Rendered unimplemented mask.
    pub unimplemented: String,
    /// Rendered unknown mask.
    pub unknown: String,
    /// Rendered condition-dependent mask, only when non-zero.
    pub depends_on_condition: Option<String>,
}

impl ReportRow {
    /// Renders the mask channels of one register.
    ///
    /// # Errors
    ///
    /// Propagates [`LiteralError`] from the mask assembler.
    pub fn from_masks(
        name: &str,
        address: u16,
        masks: &MaskSet,
        style: &LiteralStyle,
    ) -> Result<Self, LiteralError> {
        let depends_on_condition = if masks.has_condition_dependent_bits() {
            Some(render_channel(masks, MaskChannel::DependsOnCondition, style)?)
        } else {
            None
        };

        Ok(Self {
            name: name.to_string(),
            address,
            initial: render_channel(masks, MaskChannel::Initial, style)?,
            unimplemented: render_channel(masks, MaskChannel::Unimplemented, style)?,
            unknown: render_channel(masks, MaskChannel::Unknown, style)?,
            depends_on_condition,
        })
    }

    /// Formats the row as one report line (without newline).
    #[must_use]
    pub fn format_line(&self, layout: &ReportLayout) -> String {
        let mut line = format!(
            "{:<name_width$} 0x{:0digits$X} {} {} {}",
            self.name,
            self.address,
            self.initial,
            self.unimplemented,
            self.unknown,
            name_width = layout.name_width,
            digits = layout.address_digits,
        );
        if let Some(depends) = &self.depends_on_condition {
            line.push_str(&format!(" // NOTE: {depends} depends on condition"));
        }
        line
    }
}

/// A complete report, in input row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Layout used when writing.
    pub layout: ReportLayout,
    /// Rendered registers.
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Writes the section header and one line per row.
    ///
    /// # Errors
    ///
    /// Propagates write failures.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.layout.section_header)?;
        for row in &self.rows {
            writeln!(f, "{}", row.format_line(&self.layout))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mask_core::MaskConfig;

    fn render_row(name: &str, address: u16, pattern: &str) -> ReportRow {
        let config = MaskConfig::default();
        let masks = MaskSet::derive(pattern, &config).expect("valid pattern");
        ReportRow::from_masks(name, address, &masks, &config.literal).expect("8-bit masks")
    }

    #[test]
    fn plain_row_has_three_literals() {
        let row = render_row("STATUS", 0x003, "00011xxx");
        assert_eq!(row.depends_on_condition, None);
        assert_eq!(
            row.format_line(&ReportLayout::default()),
            "STATUS     0x003 0b0001_1000 0b0000_0000 0b0000_0111"
        );
    }

    #[test]
    fn condition_dependent_row_carries_note() {
        let row = render_row("PCON", 0x08E, "------0q");
        assert_eq!(
            row.format_line(&ReportLayout::default()),
            "PCON       0x08E 0b0000_0000 0b1111_1100 0b0000_0000 // NOTE: 0b0000_0001 depends on condition"
        );
    }

    #[test]
    fn long_names_are_not_truncated() {
        let row = render_row("OPTION_REG", 0x081, "11111111");
        assert_eq!(
            row.format_line(&ReportLayout::default()),
            "OPTION_REG 0x081 0b1111_1111 0b0000_0000 0b0000_0000"
        );
        let row = render_row("EXTRA_LONG_NAME", 0x1, "00000000");
        assert!(row
            .format_line(&ReportLayout::default())
            .starts_with("EXTRA_LONG_NAME 0x001 "));
    }

    #[test]
    fn layout_controls_padding() {
        let layout = ReportLayout {
            section_header: "; masks".into(),
            name_width: 6,
            address_digits: 4,
        };
        let row = render_row("FSR", 0x4, "xxxxxxxx");
        assert_eq!(
            row.format_line(&layout),
            "FSR    0x0004 0b0000_0000 0b0000_0000 0b1111_1111"
        );
    }

    #[test]
    fn report_writes_header_then_rows() {
        let report = Report {
            layout: ReportLayout::default(),
            rows: vec![
                render_row("TMR0", 0x001, "xxxxxxxx"),
                render_row("PCL", 0x002, "00000000"),
            ],
        };
        let mut out = Vec::new();
        report.write_to(&mut out).expect("write to vec");
        let text = String::from_utf8(out).expect("utf-8");

        assert_eq!(
            text,
            "# masks\n\
             TMR0       0x001 0b0000_0000 0b0000_0000 0b1111_1111\n\
             PCL        0x002 0b0000_0000 0b0000_0000 0b0000_0000\n"
        );
        assert_eq!(report.to_string(), text);
    }
}
