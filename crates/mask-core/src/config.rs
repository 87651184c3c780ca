//! Engine configuration.

use crate::symbol::{BitCategory, SymbolAlphabet};

/// Header marking a rendered literal as binary.
pub const DEFAULT_LITERAL_HEADER: &str = "0b";
/// Separator inserted between bit groups of a rendered literal.
pub const DEFAULT_LITERAL_SEPARATOR: &str = "_";
/// Number of bits per separated group.
pub const DEFAULT_GROUP_WIDTH: usize = 4;

/// Value written into the `initial` mask for bits without a literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DefaultBits {
    /// Initial value of unimplemented bits.
    pub unimplemented: bool,
    /// Initial value of unknown bits.
    pub unknown: bool,
    /// Initial value of condition-dependent bits.
    pub depends_on_condition: bool,
}

impl DefaultBits {
    /// Returns the `initial` mask contribution of a bit in `category`.
    #[must_use]
    pub const fn initial_bit(&self, category: BitCategory) -> bool {
        match category {
            BitCategory::Fixed(value) => value,
            BitCategory::Unimplemented => self.unimplemented,
            BitCategory::Unknown => self.unknown,
            BitCategory::DependsOnCondition => self.depends_on_condition,
        }
    }
}

/// How mask literals are spelled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LiteralStyle {
    /// Prefix identifying the literal as binary.
    pub header: String,
    /// Text placed between bit groups.
    pub separator: String,
    /// Bits per group; `0` disables grouping.
    pub group_width: usize,
}

impl Default for LiteralStyle {
    fn default() -> Self {
        Self {
            header: DEFAULT_LITERAL_HEADER.to_string(),
            separator: DEFAULT_LITERAL_SEPARATOR.to_string(),
            group_width: DEFAULT_GROUP_WIDTH,
        }
    }
}

/// Complete configuration of the classifier and mask assembler.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MaskConfig {
    /// Initial bits for the non-literal categories.
    pub default_bits: DefaultBits,
    /// Accepted pattern symbols.
    pub alphabet: SymbolAlphabet,
    /// Literal rendering.
    pub literal: LiteralStyle,
}
