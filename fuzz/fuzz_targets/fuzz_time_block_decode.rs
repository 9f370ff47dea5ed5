#![no_main]

use libfuzzer_sys::fuzz_target;
use tinyrtc_core::calendar::{days_in_month, is_leap_year};
use tinyrtc_core::registers::{decode_time_block, TIME_BLOCK_LEN};

fuzz_target!(|data: &[u8]| {
    if data.len() < TIME_BLOCK_LEN {
        return;
    }
    let mut block = [0u8; TIME_BLOCK_LEN];
    block.copy_from_slice(&data[..TIME_BLOCK_LEN]);

    let dt = decode_time_block(&block);
    assert!((2000..=2099).contains(&dt.year()));
    assert!((1..=12).contains(&dt.month()));
    assert!(dt.day() >= 1);
    assert!(dt.day() <= days_in_month(dt.month(), is_leap_year(dt.year())));
    assert!((1..=7).contains(&dt.weekday()));
    assert!(dt.hour() <= 23 && dt.minute() <= 59 && dt.second() <= 59);
});
