//! Blocking DS1307 real-time-clock driver.
//!
//! [`Ds1307`] talks to the chip over any injected
//! [`embedded_hal::i2c::I2c`] handle: wall-clock time in and out of
//! the seven-register block, clock-halt control, the square-wave
//! output, and raw access to the 56 bytes of battery-backed RAM.
//! Calendar validation and the register formats live in
//! [`tinyrtc_core`].
//!
//! [`SimulatedDs1307`] is a register-file test double implementing the
//! same bus trait, so the whole driver can be exercised without
//! hardware.

pub mod device;
pub mod error;
pub mod sim;

pub use device::Ds1307;
pub use error::Ds1307Error;
pub use sim::SimulatedDs1307;
pub use tinyrtc_core::registers::{OutLevel, SquareWaveFrequency};
pub use tinyrtc_core::DateTime;
