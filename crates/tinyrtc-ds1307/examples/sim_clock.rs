//! Drives the DS1307 driver against the simulated register file:
//! stores a build-stamp time, halts and restarts the clock, and uses
//! a bit of battery-backed RAM.

use tinyrtc_ds1307::{DateTime, Ds1307, SimulatedDs1307, SquareWaveFrequency};

fn main() {
    let mut rtc = Ds1307::new(SimulatedDs1307::new());

    let boot = DateTime::from_build_timestamp("Jul  4 2023", "09:41:07");
    rtc.set_time(&boot).expect("set_time");
    println!("stored   {boot} (weekday {})", boot.weekday());

    let mut read = rtc.time().expect("time");
    println!("read back {read}");

    for _ in 0..5 {
        read.tick();
    }
    println!("five seconds later: {read}");

    rtc.halt().expect("halt");
    println!("running after halt: {}", rtc.is_running().expect("is_running"));
    rtc.start().expect("start");
    println!("running after start: {}", rtc.is_running().expect("is_running"));

    rtc.enable_square_wave(SquareWaveFrequency::Hz1)
        .expect("enable_square_wave");

    rtc.write_memory(0x08, b"boot-count:1").expect("write_memory");
    let mut note = [0u8; 12];
    rtc.read_memory(0x08, &mut note).expect("read_memory");
    println!("ram note: {}", String::from_utf8_lossy(&note));
}
