use thiserror::Error;
use tinyrtc_core::AddressError;

/// Errors surfaced by DS1307 operations.
///
/// `E` is the error type of the underlying I2C bus. Address problems
/// are caught before any bus traffic happens.
#[derive(Debug, Error)]
pub enum Ds1307Error<E> {
    /// The I2C transaction failed.
    #[error("i2c bus error")]
    Bus(E),
    /// A register address or range failed the pre-flight check.
    #[error("address check failed: {0}")]
    Address(#[from] AddressError),
}
