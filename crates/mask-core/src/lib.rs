//! Reset-pattern classification and bitmask derivation for special-function
//! registers.

/// Reset-pattern symbols and bit categories.
pub mod symbol;
pub use symbol::{AlphabetError, BitCategory, SymbolAlphabet, SymbolMapping, REFERENCE_SYMBOLS};

/// Classifier and mask-assembler configuration.
pub mod config;
pub use config::{
    DefaultBits, LiteralStyle, MaskConfig, DEFAULT_GROUP_WIDTH, DEFAULT_LITERAL_HEADER,
    DEFAULT_LITERAL_SEPARATOR,
};

/// Per-bit classification of reset patterns.
pub mod classify;
pub use classify::{classify_pattern, BitClassification, ClassifyError, REGISTER_WIDTH};

/// Mask accumulators derived from classified bits.
pub mod mask;
pub use mask::{MaskChannel, MaskSet};

/// Grouped binary-literal rendering.
pub mod literal;
pub use literal::{align_nibbles, render_channel, LiteralError};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
