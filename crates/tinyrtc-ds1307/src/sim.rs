//! Lightweight simulated DS1307.
//!
//! [`SimulatedDs1307`] is a 64-byte register file behind the
//! [`embedded_hal::i2c::I2c`] trait, modeling the chip's address
//! pointer and its wrap-around. Useful for testing and development
//! without physical hardware.

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use tinyrtc_core::registers::{
    CH_BIT, DEVICE_ADDRESS, REGISTER_COUNT, REG_DAY, REG_MONTH, REG_SECONDS, REG_WEEKDAY,
};

/// Bus-level failure raised by the simulator when a transaction is
/// addressed to anything but the DS1307.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoAcknowledge;

impl embedded_hal::i2c::Error for NoAcknowledge {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
    }
}

/// A simulated DS1307 register file.
pub struct SimulatedDs1307 {
    regs: [u8; REGISTER_COUNT],
    pointer: u8,
    transactions: usize,
}

impl SimulatedDs1307 {
    /// Power-on state per the datasheet: clock halted (CH set),
    /// 2000-01-01, weekday 1, 00:00:00, RAM zeroed.
    pub fn new() -> Self {
        let mut regs = [0u8; REGISTER_COUNT];
        regs[REG_SECONDS as usize] = CH_BIT;
        regs[REG_WEEKDAY as usize] = 1;
        regs[REG_DAY as usize] = 1;
        regs[REG_MONTH as usize] = 1;
        Self {
            regs,
            pointer: 0,
            transactions: 0,
        }
    }

    /// Direct register access for assertions.
    pub fn register(&self, addr: u8) -> u8 {
        self.regs[addr as usize % REGISTER_COUNT]
    }

    /// Direct register mutation for test setup.
    pub fn set_register(&mut self, addr: u8, value: u8) {
        self.regs[addr as usize % REGISTER_COUNT] = value;
    }

    /// Number of bus transactions the simulator has acknowledged,
    /// for asserting that rejected operations produced no traffic.
    pub fn transaction_count(&self) -> usize {
        self.transactions
    }

    fn advance_pointer(&mut self) {
        self.pointer = (self.pointer + 1) % REGISTER_COUNT as u8;
    }
}

impl Default for SimulatedDs1307 {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorType for SimulatedDs1307 {
    type Error = NoAcknowledge;
}

impl I2c for SimulatedDs1307 {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if address != DEVICE_ADDRESS {
            log::debug!("sim: no ack for bus address 0x{address:02x}");
            return Err(NoAcknowledge);
        }
        self.transactions += 1;
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    // First byte of every write positions the pointer.
                    if let Some((reg, data)) = bytes.split_first() {
                        self.pointer = *reg % REGISTER_COUNT as u8;
                        for byte in data {
                            self.regs[self.pointer as usize] = *byte;
                            self.advance_pointer();
                        }
                    }
                }
                Operation::Read(buf) => {
                    for slot in buf.iter_mut() {
                        *slot = self.regs[self.pointer as usize];
                        self.advance_pointer();
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SimulatedDs1307;
    use embedded_hal::i2c::I2c;
    use tinyrtc_core::registers::{DEVICE_ADDRESS, LAST_ADDRESS, RAM_START};

    #[test]
    fn write_positions_pointer_and_stores_data() {
        let mut sim = SimulatedDs1307::new();
        sim.write(DEVICE_ADDRESS, &[RAM_START, 0xAA, 0xBB]).unwrap();
        assert_eq!(sim.register(RAM_START), 0xAA);
        assert_eq!(sim.register(RAM_START + 1), 0xBB);

        let mut back = [0u8; 2];
        sim.write_read(DEVICE_ADDRESS, &[RAM_START], &mut back)
            .unwrap();
        assert_eq!(back, [0xAA, 0xBB]);
    }

    #[test]
    fn pointer_wraps_past_the_last_register() {
        let mut sim = SimulatedDs1307::new();
        sim.set_register(LAST_ADDRESS, 0x11);
        let mut back = [0u8; 2];
        sim.write_read(DEVICE_ADDRESS, &[LAST_ADDRESS], &mut back)
            .unwrap();
        // Second byte comes from 0x00 after the wrap.
        assert_eq!(back[0], 0x11);
        assert_eq!(back[1], sim.register(0x00));
    }

    #[test]
    fn nacks_other_devices() {
        let mut sim = SimulatedDs1307::new();
        assert!(sim.write(0x50, &[0x00]).is_err());
        assert_eq!(sim.transaction_count(), 0);
    }
}
