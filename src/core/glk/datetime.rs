//=========================================================================
// Glk Date & Time
//=========================================================================
//
// The two datetime records and their conversions to and from `chrono`.
//
//   GlkTimeval  seconds since the Unix epoch, split across two 32-bit
//               halves, plus microseconds
//   GlkDate     broken-down UTC calendar time (weekday 0 = Sunday)
//
//=========================================================================

//=== External Crates =====================================================

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

//=== Internal Dependencies ===============================================

use super::types::{Glsi32, Glui32};

//=== GlkTimeval ==========================================================

/// Epoch timestamp with 64-bit seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlkTimeval {
    pub high_sec: Glsi32,
    pub low_sec: Glui32,
    pub microsec: Glsi32,
}

impl GlkTimeval {
    pub fn from_seconds(seconds: i64, microsec: u32) -> Self {
        Self {
            high_sec: (seconds >> 32) as Glsi32,
            low_sec: seconds as Glui32,
            microsec: microsec as Glsi32,
        }
    }

    /// Whole seconds since the epoch.
    pub fn seconds(&self) -> i64 {
        (i64::from(self.high_sec) << 32) | i64::from(self.low_sec)
    }

    /// Seconds divided by `factor`, rounded toward negative infinity.
    /// A zero factor yields 0.
    pub fn simple_time(&self, factor: u32) -> i64 {
        if factor == 0 {
            return 0;
        }
        self.seconds().div_euclid(i64::from(factor))
    }

    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let micros = u32::try_from(self.microsec).ok().filter(|us| *us < 1_000_000)?;
        DateTime::from_timestamp(self.seconds(), micros * 1_000)
    }
}

impl From<DateTime<Utc>> for GlkTimeval {
    fn from(time: DateTime<Utc>) -> Self {
        // Leap-second nanos run past 1e9; clamp into the last microsecond.
        let micros = (time.timestamp_subsec_nanos() / 1_000).min(999_999);
        Self::from_seconds(time.timestamp(), micros)
    }
}

//=== GlkDate =============================================================

/// Broken-down UTC calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlkDate {
    /// Full four-digit year.
    pub year: Glsi32,
    /// 1-12, 1 is January.
    pub month: Glsi32,
    /// 1-31.
    pub day: Glsi32,
    /// 0-6, 0 is Sunday.
    pub weekday: Glsi32,
    pub hour: Glsi32,
    pub minute: Glsi32,
    /// 0-59, 60 during a leap second.
    pub second: Glsi32,
    pub microsec: Glsi32,
}

impl GlkDate {
    pub fn from_timeval(timeval: &GlkTimeval) -> Option<Self> {
        timeval.to_datetime().map(Self::from)
    }

    /// Converts back to a timestamp. The weekday field is ignored;
    /// out-of-range fields yield `None`.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let field = |v: Glsi32| u32::try_from(v).ok();

        let date = NaiveDate::from_ymd_opt(self.year, field(self.month)?, field(self.day)?)?;
        let (second, leap) = match self.second {
            60 => (59, 1_000_000),
            s => (field(s)?, 0),
        };
        let micros = field(self.microsec).filter(|us| *us < 1_000_000)?;
        let time = date.and_hms_micro_opt(field(self.hour)?, field(self.minute)?, second, micros + leap)?;

        Some(time.and_utc())
    }

    pub fn to_timeval(&self) -> Option<GlkTimeval> {
        self.to_datetime().map(GlkTimeval::from)
    }
}

impl From<DateTime<Utc>> for GlkDate {
    fn from(time: DateTime<Utc>) -> Self {
        let nanos = time.nanosecond();
        let (second, nanos) = if nanos >= 1_000_000_000 {
            (60, nanos - 1_000_000_000)
        } else {
            (time.second(), nanos)
        };

        Self {
            year: time.year(),
            month: time.month() as Glsi32,
            day: time.day() as Glsi32,
            weekday: time.weekday().num_days_from_sunday() as Glsi32,
            hour: time.hour() as Glsi32,
            minute: time.minute() as Glsi32,
            second: second as Glsi32,
            microsec: (nanos / 1_000) as Glsi32,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timeval_splits_seconds() {
        let tv = GlkTimeval::from_seconds(0x1_0000_0005, 7);
        assert_eq!(tv.high_sec, 1);
        assert_eq!(tv.low_sec, 5);
        assert_eq!(tv.seconds(), 0x1_0000_0005);

        let before_epoch = GlkTimeval::from_seconds(-1, 0);
        assert_eq!(before_epoch.high_sec, -1);
        assert_eq!(before_epoch.low_sec, u32::MAX);
        assert_eq!(before_epoch.seconds(), -1);
    }

    #[test]
    fn simple_time_floors() {
        let tv = GlkTimeval::from_seconds(-61, 0);
        assert_eq!(tv.simple_time(60), -2);
        assert_eq!(GlkTimeval::from_seconds(125, 0).simple_time(60), 2);
        assert_eq!(tv.simple_time(0), 0);
    }

    #[test]
    fn date_from_chrono() {
        // 1999-12-31 was a Friday.
        let time = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 58).unwrap();
        let date = GlkDate::from(time);

        assert_eq!(
            date,
            GlkDate {
                year: 1999,
                month: 12,
                day: 31,
                weekday: 5,
                hour: 23,
                minute: 59,
                second: 58,
                microsec: 0,
            }
        );
        assert_eq!(date.to_datetime(), Some(time));
    }

    #[test]
    fn timeval_to_date() {
        let tv = GlkTimeval { high_sec: 0, low_sec: 86_400 + 3_600, microsec: 250 };
        let date = GlkDate::from_timeval(&tv).expect("valid timeval");

        assert_eq!((date.year, date.month, date.day), (1970, 1, 2));
        assert_eq!(date.weekday, 5);
        assert_eq!(date.hour, 1);
        assert_eq!(date.microsec, 250);
        assert_eq!(date.to_timeval(), Some(tv));
    }

    #[test]
    fn invalid_fields_are_rejected() {
        let mut date = GlkDate::from(Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
        assert!(date.to_datetime().is_some());

        date.day = 30;
        assert_eq!(date.to_datetime(), None);

        let tv = GlkTimeval { high_sec: 0, low_sec: 0, microsec: -1 };
        assert_eq!(tv.to_datetime(), None);
    }
}
