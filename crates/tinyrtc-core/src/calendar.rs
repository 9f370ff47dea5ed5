/// Leap-year test under the divisible-by-four rule.
///
/// Exact for 2000..=2099: the span contains no century exception, so
/// this matches the full Gregorian rule there.
pub const fn is_leap_year(year: u16) -> bool {
    year % 4 == 0
}

/// Number of days in `month` (1..=12) given the leap-year state.
///
/// Months outside 1..=12 are treated as January.
pub const fn days_in_month(month: u8, leap: bool) -> u8 {
    match month {
        2 => {
            if leap {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Weekday of a calendar date, 1..=7.
///
/// Sakamoto-style congruence over the full four-digit year. The anchor
/// puts 2000-01-01 at 7 (so 1 reads as Sunday through 7 as Saturday);
/// equal dates always map to equal weekdays and consecutive dates to
/// consecutive values, wrapping 7 back to 1.
pub const fn weekday(year: u16, month: u8, day: u8) -> u8 {
    const OFFSETS: [u16; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let month = if month >= 1 && month <= 12 { month } else { 1 };
    let y = if month < 3 {
        year.saturating_sub(1)
    } else {
        year
    };
    (1 + (y + y / 4 - y / 100 + y / 400 + OFFSETS[(month - 1) as usize] + day as u16) % 7) as u8
}

#[cfg(test)]
mod tests {
    use super::{days_in_month, is_leap_year, weekday};

    #[test]
    fn leap_years_in_range() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2004));
        assert!(is_leap_year(2096));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2099));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(1, false), 31);
        assert_eq!(days_in_month(2, false), 28);
        assert_eq!(days_in_month(2, true), 29);
        assert_eq!(days_in_month(4, false), 30);
        assert_eq!(days_in_month(9, true), 30);
        assert_eq!(days_in_month(12, false), 31);
    }

    #[test]
    fn weekday_fixtures() {
        // 1 = Sunday under the 2000-01-01 = 7 anchor.
        assert_eq!(weekday(2000, 1, 1), 7); // Saturday
        assert_eq!(weekday(2024, 1, 1), 2); // Monday
        assert_eq!(weekday(2024, 2, 29), 5); // Thursday
        assert_eq!(weekday(2023, 7, 4), 3); // Tuesday
        assert_eq!(weekday(2099, 12, 31), 5); // Thursday
    }

    #[test]
    fn weekday_is_continuous_across_month_ends() {
        let feb28 = weekday(2023, 2, 28);
        assert_eq!(weekday(2023, 3, 1), feb28 % 7 + 1);

        let dec31 = weekday(2020, 12, 31);
        assert_eq!(weekday(2021, 1, 1), dec31 % 7 + 1);
    }
}
