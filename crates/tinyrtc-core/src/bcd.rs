/// Converts a two-digit binary value (0..=99) to binary-coded decimal:
/// tens digit in the high nibble, ones digit in the low nibble.
pub const fn to_bcd(value: u8) -> u8 {
    value + 6 * (value / 10)
}

/// Converts a binary-coded-decimal byte back to binary.
pub const fn from_bcd(value: u8) -> u8 {
    value - 6 * (value >> 4)
}

#[cfg(test)]
mod tests {
    use super::{from_bcd, to_bcd};
    use proptest::prelude::*;

    #[test]
    fn encodes_known_values() {
        assert_eq!(to_bcd(0), 0x00);
        assert_eq!(to_bcd(9), 0x09);
        assert_eq!(to_bcd(10), 0x10);
        assert_eq!(to_bcd(59), 0x59);
        assert_eq!(to_bcd(99), 0x99);
    }

    #[test]
    fn decodes_known_values() {
        assert_eq!(from_bcd(0x00), 0);
        assert_eq!(from_bcd(0x31), 31);
        assert_eq!(from_bcd(0x59), 59);
    }

    proptest! {
        #[test]
        fn bcd_roundtrip(v in 0u8..=99) {
            prop_assert_eq!(from_bcd(to_bcd(v)), v);
        }
    }
}
