use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

/// A log timestamp, stored in 24-hour form.
///
/// The raw log encodes 12-hour time with an AM/PM marker and a literal
/// "12" standing for hour 0 within its half; both are resolved at
/// construction time, so a Timestamp never needs re-normalizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl Timestamp {
    /// Build a timestamp from raw 12-hour clock fields.
    ///
    /// Returns None when a field is out of range: month/day must form a
    /// real calendar date, raw hour must be 1-12, minute 0-59.
    pub fn from_clock(
        year: i32,
        month: u32,
        day: u32,
        raw_hour: u32,
        minute: u32,
        afternoon: bool,
    ) -> Option<Self> {
        if !(1..=12).contains(&raw_hour) {
            return None;
        }

        // 12:xx AM -> 0, 1-11 AM -> 1-11, 12:xx PM -> 12, 1-11 PM -> 13-23
        let mut hour = raw_hour;
        if hour == 12 {
            hour = 0;
        }
        if afternoon {
            hour += 12;
        }

        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;

        Some(Self { date, time })
    }

    /// Minutes since local midnight.
    pub fn minutes_into_day(&self) -> i64 {
        self.time.hour() as i64 * 60 + self.time.minute() as i64
    }

    pub fn date_str(&self) -> String {
        format!(
            "{}/{:02}/{:02}",
            self.date.year(),
            self.date.month(),
            self.date.day()
        )
    }
}
