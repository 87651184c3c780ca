//! Reset-pattern symbol alphabet and per-bit categories.
//!
//! A reset pattern describes each bit of a register with one symbol. The
//! alphabet maps every accepted symbol onto exactly one [`BitCategory`];
//! anything outside the alphabet is rejected by the classifier.

use thiserror::Error;

/// Reset state of a single register bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BitCategory {
    /// Bit resets to a known literal value.
    Fixed(bool),
    /// Bit is not implemented.
    Unimplemented,
    /// Bit value is unknown after reset.
    Unknown,
    /// Bit value depends on the condition that caused the reset.
    DependsOnCondition,
}

/// One entry of a [`SymbolAlphabet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct SymbolMapping {
    /// Character as written in the reset pattern.
    pub symbol: char,
    /// Category the character stands for.
    pub category: BitCategory,
}

impl SymbolMapping {
    /// Creates a mapping.
    #[must_use]
    pub const fn new(symbol: char, category: BitCategory) -> Self {
        Self { symbol, category }
    }
}

/// Symbols used by datasheet reset tables: `0`/`1` literal bits, `x`
/// unknown, `-` unimplemented (reads as `0`), `q` condition dependent.
pub const REFERENCE_SYMBOLS: [SymbolMapping; 5] = [
    SymbolMapping::new('0', BitCategory::Fixed(false)),
    SymbolMapping::new('1', BitCategory::Fixed(true)),
    SymbolMapping::new('x', BitCategory::Unknown),
    SymbolMapping::new('-', BitCategory::Unimplemented),
    SymbolMapping::new('q', BitCategory::DependsOnCondition),
];

/// Alphabet construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// The same character was given two mappings.
    #[error("symbol {0:?} is mapped more than once")]
    DuplicateSymbol(char),
    /// Whitespace separates table tokens and cannot be a bit symbol.
    #[error("whitespace cannot be used as a bit symbol")]
    WhitespaceSymbol,
}

/// Validated mapping from pattern characters to bit categories.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<SymbolMapping>", into = "Vec<SymbolMapping>")
)]
pub struct SymbolAlphabet {
    mappings: Vec<SymbolMapping>,
}

impl Default for SymbolAlphabet {
    fn default() -> Self {
        Self {
            mappings: REFERENCE_SYMBOLS.to_vec(),
        }
    }
}

impl SymbolAlphabet {
    /// Builds an alphabet from explicit mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError::DuplicateSymbol`] if a character appears
    /// twice and [`AlphabetError::WhitespaceSymbol`] for whitespace symbols.
    pub fn new(mappings: impl IntoIterator<Item = SymbolMapping>) -> Result<Self, AlphabetError> {
        let mut alphabet = Self {
            mappings: Vec::new(),
        };
        for mapping in mappings {
            alphabet.insert(mapping)?;
        }
        Ok(alphabet)
    }

    /// Returns a copy of this alphabet with one more symbol.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SymbolAlphabet::new`].
    pub fn with_symbol(
        mut self,
        symbol: char,
        category: BitCategory,
    ) -> Result<Self, AlphabetError> {
        self.insert(SymbolMapping::new(symbol, category))?;
        Ok(self)
    }

    fn insert(&mut self, mapping: SymbolMapping) -> Result<(), AlphabetError> {
        if mapping.symbol.is_whitespace() {
            return Err(AlphabetError::WhitespaceSymbol);
        }
        if self.category_of(mapping.symbol).is_some() {
            return Err(AlphabetError::DuplicateSymbol(mapping.symbol));
        }
        self.mappings.push(mapping);
        Ok(())
    }

    /// Looks up the category of a pattern character.
    #[must_use]
    pub fn category_of(&self, symbol: char) -> Option<BitCategory> {
        self.mappings
            .iter()
            .find(|m| m.symbol == symbol)
            .map(|m| m.category)
    }

    /// Returns the mappings in declaration order.
    #[must_use]
    pub fn mappings(&self) -> &[SymbolMapping] {
        &self.mappings
    }
}

impl TryFrom<Vec<SymbolMapping>> for SymbolAlphabet {
    type Error = AlphabetError;

    fn try_from(mappings: Vec<SymbolMapping>) -> Result<Self, Self::Error> {
        Self::new(mappings)
    }
}

impl From<SymbolAlphabet> for Vec<SymbolMapping> {
    fn from(alphabet: SymbolAlphabet) -> Self {
        alphabet.mappings
    }
}

#[cfg(test)]
mod tests {
    use super::{AlphabetError, BitCategory, SymbolAlphabet, SymbolMapping, REFERENCE_SYMBOLS};

    #[test]
    fn default_alphabet_matches_reference_symbols() {
        let alphabet = SymbolAlphabet::default();
        assert_eq!(alphabet.mappings(), &REFERENCE_SYMBOLS);
        assert_eq!(alphabet.category_of('0'), Some(BitCategory::Fixed(false)));
        assert_eq!(alphabet.category_of('1'), Some(BitCategory::Fixed(true)));
        assert_eq!(alphabet.category_of('x'), Some(BitCategory::Unknown));
        assert_eq!(alphabet.category_of('-'), Some(BitCategory::Unimplemented));
        assert_eq!(
            alphabet.category_of('q'),
            Some(BitCategory::DependsOnCondition)
        );
        assert_eq!(alphabet.category_of('u'), None);
    }

    #[test]
    fn duplicate_symbol_is_rejected() {
        let result = SymbolAlphabet::new([
            SymbolMapping::new('x', BitCategory::Unknown),
            SymbolMapping::new('x', BitCategory::Unimplemented),
        ]);
        assert_eq!(result, Err(AlphabetError::DuplicateSymbol('x')));
    }

    #[test]
    fn whitespace_symbol_is_rejected() {
        let result = SymbolAlphabet::default().with_symbol(' ', BitCategory::Unknown);
        assert_eq!(result, Err(AlphabetError::WhitespaceSymbol));
    }

    #[test]
    fn extra_symbol_extends_default_alphabet() {
        let alphabet = SymbolAlphabet::default()
            .with_symbol('u', BitCategory::Unknown)
            .expect("u is not in the reference alphabet");
        assert_eq!(alphabet.category_of('u'), Some(BitCategory::Unknown));
        assert_eq!(alphabet.mappings().len(), REFERENCE_SYMBOLS.len() + 1);
    }
}
