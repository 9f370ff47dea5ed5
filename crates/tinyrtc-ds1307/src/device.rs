use crate::Ds1307Error;
use embedded_hal::i2c::I2c;
use tinyrtc_core::registers::{
    check_range, decode_time_block, encode_time_block, OutLevel, SquareWaveFrequency, CH_BIT,
    DEVICE_ADDRESS, REGISTER_COUNT, REG_CONTROL, REG_SECONDS, TIME_BLOCK_LEN,
};
use tinyrtc_core::DateTime;

/// DS1307 driver over an injected blocking I2C handle.
///
/// Every operation is one or two blocking transactions against the
/// chip's fixed address 0x68 and returns only after completion or bus
/// error. The handle is owned exclusively; create one driver per chip
/// and arbitrate the bus outside if other peripherals share it.
#[derive(Debug)]
pub struct Ds1307<I2C> {
    i2c: I2C,
    last_running: Option<bool>,
}

impl<I2C: I2c> Ds1307<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            last_running: None,
        }
    }

    /// Consumes the driver and hands the bus handle back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Writes the full seven-register time block in one transaction.
    ///
    /// Field ranges are guaranteed by [`DateTime`], so nothing is
    /// re-validated here. The weekday goes to the wire raw, everything
    /// else BCD; the seconds byte carries CH clear, so writing a time
    /// also starts a halted clock.
    pub fn set_time(&mut self, time: &DateTime) -> Result<(), Ds1307Error<I2C::Error>> {
        let mut frame = [0u8; 1 + TIME_BLOCK_LEN];
        frame[0] = REG_SECONDS;
        frame[1..].copy_from_slice(&encode_time_block(time));
        self.i2c
            .write(DEVICE_ADDRESS, &frame)
            .map_err(Ds1307Error::Bus)?;
        self.last_running = Some(true);
        Ok(())
    }

    /// Reads the time block and decodes it.
    ///
    /// CH is masked out of the seconds byte and the stored weekday is
    /// trusted verbatim rather than recomputed.
    pub fn time(&mut self) -> Result<DateTime, Ds1307Error<I2C::Error>> {
        let mut block = [0u8; TIME_BLOCK_LEN];
        self.i2c
            .write_read(DEVICE_ADDRESS, &[REG_SECONDS], &mut block)
            .map_err(Ds1307Error::Bus)?;
        Ok(decode_time_block(&block))
    }

    /// Starts the oscillator by clearing CH, preserving the stored
    /// seconds.
    pub fn start(&mut self) -> Result<(), Ds1307Error<I2C::Error>> {
        self.update_seconds(|s| s & !CH_BIT)?;
        self.last_running = Some(true);
        Ok(())
    }

    /// Halts the oscillator by setting CH, preserving the stored
    /// seconds.
    pub fn halt(&mut self) -> Result<(), Ds1307Error<I2C::Error>> {
        self.update_seconds(|s| s | CH_BIT)?;
        self.last_running = Some(false);
        Ok(())
    }

    /// Reads CH from the chip; clear means the clock is running.
    pub fn is_running(&mut self) -> Result<bool, Ds1307Error<I2C::Error>> {
        let seconds = self.read_register(REG_SECONDS)?;
        let running = seconds & CH_BIT == 0;
        self.last_running = Some(running);
        Ok(running)
    }

    /// Run state last observed by [`set_time`](Self::set_time),
    /// [`start`](Self::start), [`halt`](Self::halt), or
    /// [`is_running`](Self::is_running), without touching the bus.
    /// `None` until one of those has succeeded.
    pub fn last_known_running(&self) -> Option<bool> {
        self.last_running
    }

    /// Enables the square-wave output at the selected frequency.
    pub fn enable_square_wave(
        &mut self,
        frequency: SquareWaveFrequency,
    ) -> Result<(), Ds1307Error<I2C::Error>> {
        self.write_register(REG_CONTROL, frequency.control_value())
    }

    /// Disables the square-wave output; OUT idles at `level`.
    pub fn disable_square_wave(&mut self, level: OutLevel) -> Result<(), Ds1307Error<I2C::Error>> {
        self.write_register(REG_CONTROL, level.control_value())
    }

    /// Positions the chip's internal address pointer without
    /// transferring data, so a later plain read starts at `addr`.
    pub fn set_pointer(&mut self, addr: u8) -> Result<(), Ds1307Error<I2C::Error>> {
        check_range(addr, 1)?;
        self.i2c
            .write(DEVICE_ADDRESS, &[addr])
            .map_err(Ds1307Error::Bus)
    }

    /// Writes `data` into consecutive registers starting at `addr`.
    ///
    /// The whole range must fit inside the 0x00..=0x3F map; violations
    /// are rejected before any bus traffic.
    pub fn write_memory(&mut self, addr: u8, data: &[u8]) -> Result<(), Ds1307Error<I2C::Error>> {
        check_range(addr, data.len())?;
        let mut frame = [0u8; 1 + REGISTER_COUNT];
        frame[0] = addr;
        frame[1..1 + data.len()].copy_from_slice(data);
        self.i2c
            .write(DEVICE_ADDRESS, &frame[..1 + data.len()])
            .map_err(Ds1307Error::Bus)
    }

    /// Reads consecutive registers starting at `addr` into `buf`,
    /// bound-checked the same way as [`write_memory`](Self::write_memory).
    pub fn read_memory(&mut self, addr: u8, buf: &mut [u8]) -> Result<(), Ds1307Error<I2C::Error>> {
        check_range(addr, buf.len())?;
        if buf.is_empty() {
            return Ok(());
        }
        self.i2c
            .write_read(DEVICE_ADDRESS, &[addr], buf)
            .map_err(Ds1307Error::Bus)
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, Ds1307Error<I2C::Error>> {
        let mut value = [0u8];
        self.i2c
            .write_read(DEVICE_ADDRESS, &[reg], &mut value)
            .map_err(Ds1307Error::Bus)?;
        Ok(value[0])
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Ds1307Error<I2C::Error>> {
        self.i2c
            .write(DEVICE_ADDRESS, &[reg, value])
            .map_err(Ds1307Error::Bus)
    }

    fn update_seconds(
        &mut self,
        f: impl FnOnce(u8) -> u8,
    ) -> Result<(), Ds1307Error<I2C::Error>> {
        let seconds = self.read_register(REG_SECONDS)?;
        self.write_register(REG_SECONDS, f(seconds))
    }
}
