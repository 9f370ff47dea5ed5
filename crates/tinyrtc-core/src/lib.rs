//! DS1307 calendar arithmetic and register formats in pure Rust.
//!
//! `tinyrtc-core` provides the validated [`DateTime`] value type,
//! binary-coded-decimal conversion, and the chip's seven-register
//! time-block layout. It performs no I/O and is `no_std`-compatible,
//! forming the foundation of the tinyrtc crate family.
//!
//! # Feature flags
//!
//! - **`std`** (default) — enables `std::error::Error` implementations.
//! - **`serde`** — derives `Serialize`/`Deserialize` on core types.
//! - **`defmt`** — derives `defmt::Format` for embedded logging.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Binary-coded-decimal conversion for the chip's time registers.
pub mod bcd;
/// Leap years, month lengths, and the weekday congruence.
pub mod calendar;
/// The validated [`DateTime`] value type.
pub mod datetime;
/// Register-address validation errors.
pub mod error;
/// Register map, control-register patterns, and the time-block codec.
pub mod registers;

pub use datetime::DateTime;
pub use error::AddressError;
