//! Mask channels derived from a bit classification.

use crate::classify::{classify_pattern, BitClassification, ClassifyError, REGISTER_WIDTH};
use crate::config::{DefaultBits, MaskConfig};
use crate::symbol::BitCategory;

/// One output channel of a [`MaskSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskChannel {
    /// Reset value: literal bits plus configured defaults.
    Initial,
    /// Bits that are not implemented.
    Unimplemented,
    /// Bits with unknown reset value.
    Unknown,
    /// Bits whose reset value depends on the reset condition.
    DependsOnCondition,
}

impl MaskChannel {
    /// All channels in report order.
    pub const ALL: [Self; 4] = [
        Self::Initial,
        Self::Unimplemented,
        Self::Unknown,
        Self::DependsOnCondition,
    ];
}

/// The four bitmask accumulators of one register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaskSet {
    initial: u8,
    unimplemented: u8,
    unknown: u8,
    depends_on_condition: u8,
}

const fn bit_mask(index: usize) -> u8 {
    1 << (REGISTER_WIDTH - 1 - index)
}

impl MaskSet {
    /// Assembles masks from classified bits.
    #[must_use]
    pub fn from_classification(classification: &BitClassification, defaults: &DefaultBits) -> Self {
        let mut masks = Self::default();
        for (index, &category) in classification.categories().iter().enumerate() {
            let bit = bit_mask(index);
            if defaults.initial_bit(category) {
                masks.initial |= bit;
            }
            match category {
                BitCategory::Fixed(_) => {}
                BitCategory::Unimplemented => masks.unimplemented |= bit,
                BitCategory::Unknown => masks.unknown |= bit,
                BitCategory::DependsOnCondition => masks.depends_on_condition |= bit,
            }
        }
        masks
    }

    /// Classifies `pattern` and assembles its masks.
    ///
    /// # Errors
    ///
    /// Propagates [`ClassifyError`] from [`classify_pattern`].
    pub fn derive(pattern: &str, config: &MaskConfig) -> Result<Self, ClassifyError> {
        let classification = classify_pattern(pattern, &config.alphabet)?;
        Ok(Self::from_classification(
            &classification,
            &config.default_bits,
        ))
    }

    /// Initial (reset) value.
    #[must_use]
    pub const fn initial(&self) -> u8 {
        self.initial
    }

    /// Unimplemented-bit mask.
    #[must_use]
    pub const fn unimplemented(&self) -> u8 {
        self.unimplemented
    }

    /// Unknown-bit mask.
    #[must_use]
    pub const fn unknown(&self) -> u8 {
        self.unknown
    }

    /// Condition-dependent-bit mask.
    #[must_use]
    pub const fn depends_on_condition(&self) -> u8 {
        self.depends_on_condition
    }

    /// Value of one channel.
    #[must_use]
    pub const fn channel(&self, channel: MaskChannel) -> u8 {
        match channel {
            MaskChannel::Initial => self.initial,
            MaskChannel::Unimplemented => self.unimplemented,
            MaskChannel::Unknown => self.unknown,
            MaskChannel::DependsOnCondition => self.depends_on_condition,
        }
    }

    /// Returns `true` if any bit depends on the reset condition.
    #[must_use]
    pub const fn has_condition_dependent_bits(&self) -> bool {
        self.depends_on_condition != 0
    }

    /// Bits whose reset value is a literal.
    #[must_use]
    pub const fn fixed(&self) -> u8 {
        !(self.unimplemented | self.unknown | self.depends_on_condition)
    }

    /// Returns `true` when no bit is claimed by two non-literal channels.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.unimplemented & self.unknown == 0
            && self.unimplemented & self.depends_on_condition == 0
            && self.unknown & self.depends_on_condition == 0
    }

    /// Header-prefixed accumulator string of one channel, MSB first.
    #[must_use]
    pub fn accumulator(&self, channel: MaskChannel, header: &str) -> String {
        let value = self.channel(channel);
        let mut out = String::with_capacity(header.len() + REGISTER_WIDTH);
        out.push_str(header);
        for index in 0..REGISTER_WIDTH {
            out.push(if value & bit_mask(index) == 0 { '0' } else { '1' });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{MaskChannel, MaskSet};
    use crate::config::{DefaultBits, MaskConfig};

    fn derive(pattern: &str) -> MaskSet {
        MaskSet::derive(pattern, &MaskConfig::default()).expect("valid pattern")
    }

    #[test]
    fn status_register_power_up() {
        let masks = derive("00011xxx");
        assert_eq!(masks.initial(), 0b0001_1000);
        assert_eq!(masks.unimplemented(), 0);
        assert_eq!(masks.unknown(), 0b0000_0111);
        assert!(!masks.has_condition_dependent_bits());
        assert_eq!(masks.fixed(), 0b1111_1000);
    }

    #[test]
    fn condition_dependent_bits_get_their_own_mask() {
        let masks = derive("------0q");
        assert_eq!(masks.unimplemented(), 0b1111_1100);
        assert_eq!(masks.depends_on_condition(), 0b0000_0001);
        assert_eq!(masks.initial(), 0);
        assert!(masks.has_condition_dependent_bits());
        assert!(masks.is_consistent());
    }

    #[test]
    fn defaults_fill_initial_for_non_literal_bits() {
        let config = MaskConfig {
            default_bits: DefaultBits {
                unimplemented: false,
                unknown: true,
                depends_on_condition: true,
            },
            ..MaskConfig::default()
        };
        let masks = MaskSet::derive("x-q00001", &config).expect("valid pattern");
        assert_eq!(masks.initial(), 0b1010_0001);
        assert_eq!(masks.unknown(), 0b1000_0000);
        assert_eq!(masks.unimplemented(), 0b0100_0000);
        assert_eq!(masks.depends_on_condition(), 0b0010_0000);
    }

    #[test]
    fn accumulator_is_header_prefixed_msb_first() {
        let masks = derive("x--x1000");
        assert_eq!(masks.accumulator(MaskChannel::Initial, "0b"), "0b00001000");
        assert_eq!(
            masks.accumulator(MaskChannel::Unimplemented, "0b"),
            "0b01100000"
        );
        assert_eq!(masks.accumulator(MaskChannel::Unknown, "0b"), "0b10010000");
        assert_eq!(
            masks.accumulator(MaskChannel::DependsOnCondition, ""),
            "00000000"
        );
    }

    #[test]
    fn channel_lookup_matches_accessors() {
        let masks = derive("1q-x0101");
        for channel in MaskChannel::ALL {
            let expected = match channel {
                MaskChannel::Initial => masks.initial(),
                MaskChannel::Unimplemented => masks.unimplemented(),
                MaskChannel::Unknown => masks.unknown(),
                MaskChannel::DependsOnCondition => masks.depends_on_condition(),
            };
            assert_eq!(masks.channel(channel), expected);
        }
    }
}
