//! Bit symbol classification of reset patterns.
//!
//! Patterns are read left to right, most-significant bit first. The whole
//! pattern is validated before a [`BitClassification`] is returned, so a
//! bad symbol never yields a partial result.

use thiserror::Error;

use crate::symbol::{BitCategory, SymbolAlphabet};

/// Number of bits described by one reset pattern.
pub const REGISTER_WIDTH: usize = 8;

/// Errors raised while classifying a reset pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// Pattern character outside the configured alphabet.
    #[error("unknown symbol {symbol:?} at position {index} (bit {bit})")]
    UnknownSymbol {
        /// Offending character.
        symbol: char,
        /// 0-based position from the left (most-significant) end.
        index: usize,
        /// Bit number of the same position, `7` = MSB.
        bit: usize,
    },
    /// Pattern does not describe exactly [`REGISTER_WIDTH`] bits.
    #[error("reset pattern has {found} symbols, expected {expected}")]
    LengthMismatch {
        /// Required symbol count.
        expected: usize,
        /// Symbol count actually present.
        found: usize,
    },
}

/// Category of every bit of one register, MSB first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitClassification {
    bits: [BitCategory; REGISTER_WIDTH],
}

impl BitClassification {
    /// Returns the categories, MSB first.
    #[must_use]
    pub const fn categories(&self) -> &[BitCategory; REGISTER_WIDTH] {
        &self.bits
    }
}

/// Classifies one reset pattern against `alphabet`.
///
/// # Errors
///
/// Returns [`ClassifyError::LengthMismatch`] if the pattern is not exactly
/// [`REGISTER_WIDTH`] characters long, checked before any symbol is looked
/// at, and [`ClassifyError::UnknownSymbol`] for the first character the
/// alphabet does not map.
pub fn classify_pattern(
    pattern: &str,
    alphabet: &SymbolAlphabet,
) -> Result<BitClassification, ClassifyError> {
    let found = pattern.chars().count();
    if found != REGISTER_WIDTH {
        return Err(ClassifyError::LengthMismatch {
            expected: REGISTER_WIDTH,
            found,
        });
    }

    let mut bits = [BitCategory::Fixed(false); REGISTER_WIDTH];
    for (index, symbol) in pattern.chars().enumerate() {
        bits[index] = alphabet
            .category_of(symbol)
            .ok_or(ClassifyError::UnknownSymbol {
                symbol,
                index,
                bit: REGISTER_WIDTH - 1 - index,
            })?;
    }

    Ok(BitClassification { bits })
}

#[cfg(test)]
mod tests {
    use super::{classify_pattern, ClassifyError};
    use crate::symbol::{BitCategory, SymbolAlphabet};

    #[test]
    fn classifies_mixed_pattern_msb_first() {
        let classification =
            classify_pattern("0001q-x1", &SymbolAlphabet::default()).expect("valid pattern");
        assert_eq!(
            classification.categories(),
            &[
                BitCategory::Fixed(false),
                BitCategory::Fixed(false),
                BitCategory::Fixed(false),
                BitCategory::Fixed(true),
                BitCategory::DependsOnCondition,
                BitCategory::Unimplemented,
                BitCategory::Unknown,
                BitCategory::Fixed(true),
            ]
        );
    }

    #[test]
    fn unknown_symbol_reports_character_and_position() {
        let error = classify_pattern("000z0000", &SymbolAlphabet::default())
            .expect_err("z is not a reset symbol");
        assert_eq!(
            error,
            ClassifyError::UnknownSymbol {
                symbol: 'z',
                index: 3,
                bit: 4
            }
        );
        assert_eq!(error.to_string(), "unknown symbol 'z' at position 3 (bit 4)");
    }

    #[test]
    fn first_unknown_symbol_wins() {
        let error = classify_pattern("0a0b0000", &SymbolAlphabet::default())
            .expect_err("pattern has two bad symbols");
        assert!(matches!(
            error,
            ClassifyError::UnknownSymbol {
                symbol: 'a',
                index: 1,
                bit: 6
            }
        ));
    }

    #[test]
    fn length_is_checked_before_symbols() {
        let error = classify_pattern("zzzz", &SymbolAlphabet::default())
            .expect_err("short pattern must fail");
        assert_eq!(
            error,
            ClassifyError::LengthMismatch {
                expected: 8,
                found: 4
            }
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let error = classify_pattern("0000000\u{00e9}", &SymbolAlphabet::default())
            .expect_err("non-ascii symbol is still unknown");
        assert!(matches!(
            error,
            ClassifyError::UnknownSymbol {
                index: 7,
                bit: 0,
                ..
            }
        ));
    }
}
