use crate::calendar::{days_in_month, is_leap_year, weekday};
use core::fmt;

/// A validated calendar date and wall-clock time in 2000..=2099.
///
/// Every field is kept inside its legal range at all times. Setters
/// never fail; an out-of-range input is silently clamped to a safe
/// default (the start of the range for dates, zero for clock fields).
/// That clamp-and-continue policy is intentional: a real-time clock
/// must keep counting even when handed garbage.
///
/// The weekday (1..=7) is normally *derived* from the date and tracks
/// every date mutation. [`DateTime::set_weekday`] overrides it with an
/// externally trusted value and suspends derivation until
/// [`DateTime::derive_weekday`] is called; reading a DS1307 back uses
/// that form so the chip's stored weekday survives the round trip.
///
/// Plain `Copy` value, no allocation, no I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    year_offset: u8,
    month: u8,
    day: u8,
    weekday: u8,
    hour: u8,
    minute: u8,
    second: u8,
    weekday_derived: bool,
}

impl Default for DateTime {
    /// 2000-01-01 00:00:00, weekday 7 (a Saturday under this crate's
    /// anchor).
    fn default() -> Self {
        Self {
            year_offset: 0,
            month: 1,
            day: 1,
            weekday: 7,
            hour: 0,
            minute: 0,
            second: 0,
            weekday_derived: true,
        }
    }
}

impl DateTime {
    /// Builds a date/time with the weekday derived from the date.
    pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        let mut dt = Self::default();
        dt.set_year(year);
        dt.set_month(month);
        dt.set_day(day);
        dt.set_hour(hour);
        dt.set_minute(minute);
        dt.set_second(second);
        dt
    }

    /// Builds a date/time with an explicitly supplied weekday.
    ///
    /// For values coming from a trusted source, typically the chip's
    /// own registers. The weekday stays decoupled from the date until
    /// [`DateTime::derive_weekday`] is called.
    pub fn with_weekday(
        year: u16,
        month: u8,
        day: u8,
        weekday: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        let mut dt = Self::new(year, month, day, hour, minute, second);
        dt.set_weekday(weekday);
        dt
    }

    /// Parses compiler-style build stamps: date `"MMM DD YYYY"` and
    /// time `"HH:MM:SS"`, the `__DATE__`/`__TIME__` layout.
    ///
    /// The month is matched by its distinguishing English letters; an
    /// unrecognized abbreviation falls back to January. Digit pairs
    /// are forgiving: any non-digit position contributes 0, which is
    /// what makes the space-padded day of `"Jul  4 2023"` come out as
    /// 4. Never panics, even on short or non-ASCII input.
    pub fn from_build_timestamp(date: &str, time: &str) -> Self {
        let d = date.as_bytes();
        let t = time.as_bytes();
        let month = match (byte_at(d, 0), byte_at(d, 1), byte_at(d, 2)) {
            (b'J', b'a', _) => 1,
            (b'J', _, b'n') => 6,
            (b'J', _, _) => 7,
            (b'F', _, _) => 2,
            (b'A', _, b'r') => 4,
            (b'A', _, _) => 8,
            (b'M', _, b'r') => 3,
            (b'M', _, _) => 5,
            (b'S', _, _) => 9,
            (b'O', _, _) => 10,
            (b'N', _, _) => 11,
            (b'D', _, _) => 12,
            _ => 1,
        };
        Self::new(
            2000 + digit_pair(d, 9) as u16,
            month,
            digit_pair(d, 4),
            digit_pair(t, 0),
            digit_pair(t, 3),
            digit_pair(t, 6),
        )
    }

    /// Absolute year, 2000..=2099.
    pub const fn year(&self) -> u16 {
        2000 + self.year_offset as u16
    }

    /// Year minus 2000, as stored in the chip's year register.
    pub const fn year_offset(&self) -> u8 {
        self.year_offset
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Weekday 1..=7; see the type docs for derived vs explicit mode.
    pub const fn weekday(&self) -> u8 {
        self.weekday
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Sets the absolute year; anything outside 2000..=2099 clamps to
    /// 2000. Leaving a leap year with February 29 held clamps the day
    /// down to 28.
    pub fn set_year(&mut self, year: u16) {
        self.year_offset = if (2000..2100).contains(&year) {
            (year - 2000) as u8
        } else {
            0
        };
        self.clamp_day_to_month();
        self.refresh_weekday();
    }

    /// Sets the month; out-of-range values clamp to 1. A day past the
    /// new month's length clamps down to that length.
    pub fn set_month(&mut self, month: u8) {
        self.month = if (1..=12).contains(&month) { month } else { 1 };
        self.clamp_day_to_month();
        self.refresh_weekday();
    }

    /// Sets the day of month; values outside the (month, leap-year)
    /// bound clamp to 1.
    pub fn set_day(&mut self, day: u8) {
        let last = days_in_month(self.month, is_leap_year(self.year()));
        self.day = if day >= 1 && day <= last { day } else { 1 };
        self.refresh_weekday();
    }

    /// Sets the hour (0..=23); out-of-range clamps to 0.
    pub fn set_hour(&mut self, hour: u8) {
        self.hour = if hour <= 23 { hour } else { 0 };
    }

    /// Sets the minute (0..=59); out-of-range clamps to 0.
    pub fn set_minute(&mut self, minute: u8) {
        self.minute = if minute <= 59 { minute } else { 0 };
    }

    /// Sets the second (0..=59); out-of-range clamps to 0.
    pub fn set_second(&mut self, second: u8) {
        self.second = if second <= 59 { second } else { 0 };
    }

    /// Recomputes the weekday from the date and re-enters derived
    /// mode, discarding any explicit override.
    pub fn derive_weekday(&mut self) {
        self.weekday_derived = true;
        self.weekday = weekday(self.year(), self.month, self.day);
    }

    /// Overrides the weekday explicitly; out-of-range values clamp to
    /// 1. Derivation stays suspended until
    /// [`DateTime::derive_weekday`].
    pub fn set_weekday(&mut self, weekday: u8) {
        self.weekday_derived = false;
        self.weekday = if (1..=7).contains(&weekday) { weekday } else { 1 };
    }

    /// Seconds elapsed since 2000-01-01 00:00:00.
    pub fn seconds_since_2000(&self) -> u32 {
        let leap = is_leap_year(self.year());
        let mut days = self.day as u32 - 1;
        for m in 1..self.month {
            days += days_in_month(m, leap) as u32;
        }
        let y = self.year_offset as u32;
        days += 365 * y + (y + 3) / 4;
        ((days * 24 + self.hour as u32) * 60 + self.minute as u32) * 60 + self.second as u32
    }

    /// Seconds elapsed since the Unix epoch, 1970-01-01 00:00:00.
    pub fn unix_time(&self) -> u32 {
        self.seconds_since_2000() + 946_684_800
    }

    /// Advances the value by one second, rippling carries up through
    /// minute, hour, weekday, day, month, and year.
    ///
    /// The month carry re-evaluates February against the (possibly
    /// new) leap year. 2099-12-31 23:59:59 wraps to 2000, matching the
    /// chip's own year-register rollover.
    pub fn tick(&mut self) {
        self.second += 1;
        if self.second < 60 {
            return;
        }
        self.second = 0;
        self.minute += 1;
        if self.minute < 60 {
            return;
        }
        self.minute = 0;
        self.hour += 1;
        if self.hour < 24 {
            return;
        }
        self.hour = 0;
        self.weekday = if self.weekday == 7 { 1 } else { self.weekday + 1 };
        if self.day < days_in_month(self.month, is_leap_year(self.year())) {
            self.day += 1;
            return;
        }
        self.day = 1;
        if self.month < 12 {
            self.month += 1;
            return;
        }
        self.month = 1;
        self.year_offset = if self.year_offset < 99 {
            self.year_offset + 1
        } else {
            0
        };
    }

    fn clamp_day_to_month(&mut self) {
        let last = days_in_month(self.month, is_leap_year(self.year()));
        if self.day > last {
            self.day = last;
        }
    }

    fn refresh_weekday(&mut self) {
        if self.weekday_derived {
            self.weekday = weekday(self.year(), self.month, self.day);
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year(),
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}

fn byte_at(bytes: &[u8], at: usize) -> u8 {
    bytes.get(at).copied().unwrap_or(0)
}

fn digit_pair(bytes: &[u8], at: usize) -> u8 {
    10 * digit_at(bytes, at) + digit_at(bytes, at + 1)
}

fn digit_at(bytes: &[u8], at: usize) -> u8 {
    match bytes.get(at) {
        Some(b @ b'0'..=b'9') => b - b'0',
        _ => 0,
    }
}
