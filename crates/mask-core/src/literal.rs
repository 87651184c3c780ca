//! Nibble-grouped rendering of mask accumulators.

use thiserror::Error;

use crate::classify::REGISTER_WIDTH;
use crate::config::LiteralStyle;
use crate::mask::{MaskChannel, MaskSet};

/// Errors raised while rendering an accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// Accumulator does not start with the configured header.
    #[error("accumulator is missing the {expected:?} header")]
    MissingHeader {
        /// Header required by the literal style.
        expected: String,
    },
    /// Accumulator does not carry exactly [`REGISTER_WIDTH`] data bits.
    #[error("accumulator has {found} data bits, expected {expected}")]
    LengthMismatch {
        /// Required bit count.
        expected: usize,
        /// Bit count actually present.
        found: usize,
    },
    /// Data bit other than `0` or `1`.
    #[error("accumulator contains non-binary digit {0:?}")]
    InvalidBit(char),
}

/// Inserts the group separator into a header-prefixed accumulator.
///
/// `0b00011000` becomes `0b0001_1000` with the default style.
///
/// # Errors
///
/// Returns [`LiteralError::MissingHeader`] if the header is absent,
/// [`LiteralError::LengthMismatch`] unless exactly [`REGISTER_WIDTH`] data
/// bits follow it, and [`LiteralError::InvalidBit`] for non-binary digits.
pub fn align_nibbles(accumulator: &str, style: &LiteralStyle) -> Result<String, LiteralError> {
    let data = accumulator
        .strip_prefix(style.header.as_str())
        .ok_or_else(|| LiteralError::MissingHeader {
            expected: style.header.clone(),
        })?;

    let found = data.chars().count();
    if found != REGISTER_WIDTH {
        return Err(LiteralError::LengthMismatch {
            expected: REGISTER_WIDTH,
            found,
        });
    }
    if let Some(bad) = data.chars().find(|c| !matches!(c, '0' | '1')) {
        return Err(LiteralError::InvalidBit(bad));
    }

    let groups = if style.group_width == 0 {
        0
    } else {
        (REGISTER_WIDTH - 1) / style.group_width
    };
    let mut out = String::with_capacity(
        style.header.len() + REGISTER_WIDTH + groups * style.separator.len(),
    );
    out.push_str(&style.header);
    for (index, bit) in data.chars().enumerate() {
        if style.group_width != 0 && index != 0 && index % style.group_width == 0 {
            out.push_str(&style.separator);
        }
        out.push(bit);
    }
    Ok(out)
}

/// Renders one channel of `masks` as an aligned literal.
///
/// # Errors
///
/// See [`align_nibbles`].
pub fn render_channel(
    masks: &MaskSet,
    channel: MaskChannel,
    style: &LiteralStyle,
) -> Result<String, LiteralError> {
    align_nibbles(&masks.accumulator(channel, &style.header), style)
}
