//! Reference tables compiled into the binary.

use crate::errors::MaskgenResult;
use crate::source::{parse_address_table, parse_register_table, AddressTable, RegisterTable};

/// Origin name reported for the built-in register table.
pub const PIC16F88_REGISTERS_ORIGIN: &str = "<pic16f88 registers>";
/// Origin name reported for the built-in address table.
pub const PIC16F88_ADDRESSES_ORIGIN: &str = "<pic16f88 addresses>";

/// PIC16F88 special-function register reset table.
pub const PIC16F88_REGISTERS: &str = include_str!("../data/pic16f88_registers.txt");
/// Addresses of [`PIC16F88_REGISTERS`], in row order.
pub const PIC16F88_ADDRESSES: &str = include_str!("../data/pic16f88_addresses.txt");

/// Parses the built-in PIC16F88 tables.
///
/// # Errors
///
/// Only fails if the embedded address table is malformed.
pub fn pic16f88() -> MaskgenResult<(RegisterTable, AddressTable)> {
    Ok((
        parse_register_table(PIC16F88_REGISTERS_ORIGIN, PIC16F88_REGISTERS),
        parse_address_table(PIC16F88_ADDRESSES_ORIGIN, PIC16F88_ADDRESSES)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::pic16f88;

    #[test]
    fn builtin_tables_have_matching_lengths() {
        let (registers, addresses) = pic16f88().expect("embedded tables parse");
        assert_eq!(registers.rows.len(), 50);
        assert_eq!(addresses.entries.len(), 50);
        assert_eq!(registers.rows[0].name, "TMR0");
        assert_eq!(addresses.entries[49].value, 0x18D);
    }
}
