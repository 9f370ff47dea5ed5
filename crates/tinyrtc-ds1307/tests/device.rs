use tinyrtc_core::registers::{CH_BIT, LAST_ADDRESS, RAM_START, REG_CONTROL, REG_SECONDS};
use tinyrtc_ds1307::{DateTime, Ds1307, Ds1307Error, OutLevel, SimulatedDs1307, SquareWaveFrequency};

#[test]
fn time_roundtrips_through_the_register_block() {
    let mut rtc = Ds1307::new(SimulatedDs1307::new());

    let written = DateTime::new(2024, 2, 28, 12, 0, 0);
    rtc.set_time(&written).unwrap();
    let back = rtc.time().unwrap();

    assert_eq!(back.year(), 2024);
    assert_eq!(back.month(), 2);
    assert_eq!(back.day(), 28);
    assert_eq!(back.weekday(), written.weekday());
    assert_eq!(back.hour(), 12);
    assert_eq!(back.minute(), 0);
    assert_eq!(back.second(), 0);
}

#[test]
fn readback_trusts_the_stored_weekday() {
    let mut rtc = Ds1307::new(SimulatedDs1307::new());

    // 2024-01-01 derives to weekday 2; store 6 instead and make sure
    // the driver does not second-guess the chip.
    let skewed = DateTime::with_weekday(2024, 1, 1, 6, 8, 30, 0);
    rtc.set_time(&skewed).unwrap();
    assert_eq!(rtc.time().unwrap().weekday(), 6);
}

#[test]
fn power_on_state_reads_as_halted_century_start() {
    let mut rtc = Ds1307::new(SimulatedDs1307::new());

    assert_eq!(rtc.last_known_running(), None);
    assert!(!rtc.is_running().unwrap());
    assert_eq!(rtc.last_known_running(), Some(false));

    let time = rtc.time().unwrap();
    assert_eq!((time.year(), time.month(), time.day()), (2000, 1, 1));
    assert_eq!((time.hour(), time.minute(), time.second()), (0, 0, 0));
}

#[test]
fn setting_the_time_starts_a_halted_clock() {
    let mut rtc = Ds1307::new(SimulatedDs1307::new());

    assert!(!rtc.is_running().unwrap());
    rtc.set_time(&DateTime::new(2024, 6, 1, 10, 0, 0)).unwrap();
    assert!(rtc.is_running().unwrap());
    assert_eq!(rtc.last_known_running(), Some(true));
}

#[test]
fn halt_and_start_preserve_the_seconds_value() {
    let mut rtc = Ds1307::new(SimulatedDs1307::new());
    rtc.set_time(&DateTime::new(2024, 6, 1, 10, 0, 37)).unwrap();

    rtc.halt().unwrap();
    assert!(!rtc.is_running().unwrap());
    let sim = rtc.release();
    assert_eq!(sim.register(REG_SECONDS), 0x37 | CH_BIT);

    let mut rtc = Ds1307::new(sim);
    rtc.start().unwrap();
    assert!(rtc.is_running().unwrap());
    assert_eq!(rtc.time().unwrap().second(), 37);
}

#[test]
fn square_wave_control_patterns() {
    let mut rtc = Ds1307::new(SimulatedDs1307::new());

    rtc.enable_square_wave(SquareWaveFrequency::Hz1).unwrap();
    assert_eq!(register(&mut rtc, REG_CONTROL), 0x10);
    rtc.enable_square_wave(SquareWaveFrequency::KHz32_768)
        .unwrap();
    assert_eq!(register(&mut rtc, REG_CONTROL), 0x13);

    rtc.disable_square_wave(OutLevel::High).unwrap();
    assert_eq!(register(&mut rtc, REG_CONTROL), 0x80);
    rtc.disable_square_wave(OutLevel::Low).unwrap();
    assert_eq!(register(&mut rtc, REG_CONTROL), 0x00);
}

#[test]
fn ram_roundtrip() {
    let mut rtc = Ds1307::new(SimulatedDs1307::new());

    let data = [0xDE, 0xAD, 0xBE, 0xEF];
    rtc.write_memory(RAM_START, &data).unwrap();
    let mut back = [0u8; 4];
    rtc.read_memory(RAM_START, &mut back).unwrap();
    assert_eq!(back, data);
}

#[test]
fn out_of_range_addresses_are_rejected_without_bus_traffic() {
    let mut rtc = Ds1307::new(SimulatedDs1307::new());

    assert!(matches!(
        rtc.set_pointer(0x40),
        Err(Ds1307Error::Address(_))
    ));
    assert!(matches!(
        rtc.write_memory(0x40, &[1]),
        Err(Ds1307Error::Address(_))
    ));
    let mut buf = [0u8; 1];
    assert!(matches!(
        rtc.read_memory(0x40, &mut buf),
        Err(Ds1307Error::Address(_))
    ));
    // A range that starts inside the map but runs past its end.
    let mut long = [0u8; 4];
    assert!(matches!(
        rtc.read_memory(0x3E, &mut long),
        Err(Ds1307Error::Address(_))
    ));

    assert_eq!(rtc.release().transaction_count(), 0);
}

#[test]
fn last_valid_address_is_accepted() {
    let mut rtc = Ds1307::new(SimulatedDs1307::new());

    rtc.set_pointer(LAST_ADDRESS).unwrap();
    rtc.write_memory(LAST_ADDRESS, &[0x5A]).unwrap();
    let mut back = [0u8; 1];
    rtc.read_memory(LAST_ADDRESS, &mut back).unwrap();
    assert_eq!(back, [0x5A]);
}

fn register(rtc: &mut Ds1307<SimulatedDs1307>, addr: u8) -> u8 {
    let mut value = [0u8; 1];
    rtc.read_memory(addr, &mut value).unwrap();
    value[0]
}
