//! DS1307 register map and the seven-register time-block codec.
//!
//! The chip exposes 64 registers: seven timekeeping registers at
//! 0x00..=0x06, the control register at 0x07, and 56 bytes of
//! battery-backed RAM at 0x08..=0x3F. Time fields are stored in
//! binary-coded decimal except the weekday, which is a raw 1..=7.

use crate::bcd::{from_bcd, to_bcd};
use crate::datetime::DateTime;
use crate::error::AddressError;

/// Fixed I2C address of the DS1307.
pub const DEVICE_ADDRESS: u8 = 0x68;

pub const REG_SECONDS: u8 = 0x00; // BCD 0-59, bit 7 = CH
pub const REG_MINUTES: u8 = 0x01; // BCD 0-59
pub const REG_HOURS: u8 = 0x02; // BCD 0-23, 24-hour mode
pub const REG_WEEKDAY: u8 = 0x03; // raw 1-7
pub const REG_DAY: u8 = 0x04; // BCD 1-31
pub const REG_MONTH: u8 = 0x05; // BCD 1-12
pub const REG_YEAR: u8 = 0x06; // BCD 0-99
pub const REG_CONTROL: u8 = 0x07;

/// First byte of the general-purpose RAM.
pub const RAM_START: u8 = 0x08;
/// Last valid register address.
pub const LAST_ADDRESS: u8 = 0x3F;
/// Total number of addressable registers.
pub const REGISTER_COUNT: usize = LAST_ADDRESS as usize + 1;

/// Clock-halt bit in the seconds register; while set, the oscillator
/// is stopped and the time registers hold still.
pub const CH_BIT: u8 = 0x80;

/// Length of the timekeeping block at 0x00.
pub const TIME_BLOCK_LEN: usize = 7;

/// Square-wave output frequency selection for the control register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SquareWaveFrequency {
    Hz1,
    KHz4_096,
    KHz8_192,
    KHz32_768,
}

impl SquareWaveFrequency {
    /// Control-register pattern: SQWE set plus the matching RS bits.
    pub const fn control_value(self) -> u8 {
        match self {
            Self::Hz1 => 0x10,
            Self::KHz4_096 => 0x11,
            Self::KHz8_192 => 0x12,
            Self::KHz32_768 => 0x13,
        }
    }
}

/// Level driven on the OUT pin while the square wave is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutLevel {
    Low,
    High,
}

impl OutLevel {
    pub const fn control_value(self) -> u8 {
        match self {
            Self::Low => 0x00,
            Self::High => 0x80,
        }
    }
}

/// Returns true when `addr` names one of the chip's 64 registers.
pub const fn address_in_range(addr: u8) -> bool {
    addr <= LAST_ADDRESS
}

/// Validates that `len` bytes starting at `addr` stay inside the
/// register map.
pub const fn check_range(addr: u8, len: usize) -> Result<(), AddressError> {
    if !address_in_range(addr) {
        return Err(AddressError::OutOfRange { addr });
    }
    if len > REGISTER_COUNT - addr as usize {
        return Err(AddressError::RangeTooLong { addr, len });
    }
    Ok(())
}

/// Encodes `time` into the chip's time-block layout, seconds through
/// year in register order.
///
/// The weekday goes out raw, everything else BCD. The encoded seconds
/// byte always has CH clear, so writing the block also starts a halted
/// clock.
pub fn encode_time_block(time: &DateTime) -> [u8; TIME_BLOCK_LEN] {
    [
        to_bcd(time.second()),
        to_bcd(time.minute()),
        to_bcd(time.hour()),
        time.weekday(),
        to_bcd(time.day()),
        to_bcd(time.month()),
        to_bcd(time.year_offset()),
    ]
}

/// Decodes a time block read from address 0x00.
///
/// Masks CH out of the seconds byte and takes the stored weekday
/// verbatim instead of recomputing it; the chip is treated as the
/// authority on what it was told.
pub fn decode_time_block(block: &[u8; TIME_BLOCK_LEN]) -> DateTime {
    DateTime::with_weekday(
        2000 + from_bcd(block[6]) as u16,
        from_bcd(block[5]),
        from_bcd(block[4]),
        block[3],
        from_bcd(block[2]),
        from_bcd(block[1]),
        from_bcd(block[0] & !CH_BIT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_time_block_fixture() {
        let time = DateTime::new(2024, 2, 29, 12, 34, 56);
        assert_eq!(
            encode_time_block(&time),
            [0x56, 0x34, 0x12, 5, 0x29, 0x02, 0x24]
        );
    }

    #[test]
    fn decodes_time_block_fixture() {
        let time = decode_time_block(&[0x56, 0x34, 0x12, 5, 0x29, 0x02, 0x24]);
        assert_eq!(time.year(), 2024);
        assert_eq!(time.month(), 2);
        assert_eq!(time.day(), 29);
        assert_eq!(time.weekday(), 5);
        assert_eq!(time.hour(), 12);
        assert_eq!(time.minute(), 34);
        assert_eq!(time.second(), 56);
    }

    #[test]
    fn decode_masks_clock_halt_bit() {
        let halted = decode_time_block(&[0x56 | CH_BIT, 0x00, 0x00, 1, 0x01, 0x01, 0x00]);
        assert_eq!(halted.second(), 56);
    }

    #[test]
    fn decode_trusts_stored_weekday() {
        // 2024-01-01 derives to 2; the stored 6 must win.
        let time = decode_time_block(&[0x00, 0x00, 0x00, 6, 0x01, 0x01, 0x24]);
        assert_eq!(time.weekday(), 6);
    }

    #[test]
    fn range_checks() {
        assert!(check_range(0x00, TIME_BLOCK_LEN).is_ok());
        assert!(check_range(LAST_ADDRESS, 1).is_ok());
        assert_eq!(
            check_range(0x40, 1),
            Err(AddressError::OutOfRange { addr: 0x40 })
        );
        assert_eq!(
            check_range(0x3E, 3),
            Err(AddressError::RangeTooLong { addr: 0x3E, len: 3 })
        );
    }
}
