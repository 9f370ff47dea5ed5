use core::fmt;

/// Pre-flight validation failures against the chip's 0x00..=0x3F
/// register map. Raised before any bus traffic happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressError {
    /// The address lies beyond the last register.
    OutOfRange { addr: u8 },
    /// The range starting at `addr` runs past the end of the map.
    RangeTooLong { addr: u8, len: usize },
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { addr } => {
                write!(f, "register address 0x{addr:02x} out of range")
            }
            Self::RangeTooLong { addr, len } => {
                write!(f, "{len} bytes at 0x{addr:02x} run past the register map")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AddressError {}
