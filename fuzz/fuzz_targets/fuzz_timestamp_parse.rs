#![no_main]

use libfuzzer_sys::fuzz_target;
use tinyrtc_core::DateTime;

fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let at = split as usize % (rest.len() + 1);
    let (date, time) = rest.split_at(at);
    if let (Ok(date), Ok(time)) = (core::str::from_utf8(date), core::str::from_utf8(time)) {
        let dt = DateTime::from_build_timestamp(date, time);
        // Whatever came in, the value must be internally consistent.
        assert!((2000..=2099).contains(&dt.year()));
        assert!((1..=12).contains(&dt.month()));
        assert!(dt.day() >= 1);
        assert!((1..=7).contains(&dt.weekday()));
        assert!(dt.hour() <= 23 && dt.minute() <= 59 && dt.second() <= 59);
    }
});
