//! Serial date numbers

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Largest serial Excel can display (9999-12-31 23:59:59.999)
const MAX_SERIAL: f64 = 2_958_466.0;

/// A date stored the way spreadsheets store it: days since the 1900 epoch
///
/// The fractional part is the time of day. Serials below 61 follow Excel's
/// 1900 leap-year quirk, so `1.0` is 1900-01-01 and `61.0` is 1900-03-01.
///
/// A serial that does not name a real date (NaN, negative, past year 9999)
/// is kept as-is; [`ExcelDate::to_datetime`] reports it as `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExcelDate(f64);

impl ExcelDate {
    /// A serial that never converts to a date
    pub const INVALID: ExcelDate = ExcelDate(f64::NAN);

    /// Wrap a raw serial number
    pub fn from_serial(serial: f64) -> Self {
        ExcelDate(serial)
    }

    /// Convert a calendar date-time to its serial
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        let delta = (dt - epoch()).num_milliseconds() as f64 / MS_PER_DAY;
        if delta < 61.0 {
            ExcelDate(delta - 1.0)
        } else {
            ExcelDate(delta)
        }
    }

    /// Parse an ISO 8601 date, date-time or time
    ///
    /// Timezone designators are accepted and dropped after converting to UTC.
    /// Unparseable input yields [`ExcelDate::INVALID`].
    pub fn parse_iso(s: &str) -> Self {
        let s = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Self::from_datetime(dt.naive_utc());
        }
        let naive = s.trim_end_matches('Z');
        for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(naive, fmt) {
                return Self::from_datetime(dt);
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(naive, "%Y-%m-%d") {
            return Self::from_datetime(date.and_time(NaiveTime::MIN));
        }
        if let Ok(time) = NaiveTime::parse_from_str(naive, "%H:%M:%S%.f") {
            let ms = (time - NaiveTime::MIN).num_milliseconds() as f64;
            return ExcelDate(ms / MS_PER_DAY);
        }

        Self::INVALID
    }

    /// The raw serial number
    pub fn serial(&self) -> f64 {
        self.0
    }

    /// Whether the serial names a representable calendar date
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0 && self.0 < MAX_SERIAL
    }

    /// Convert to a calendar date-time, or `None` if the serial is not a real date
    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        if !self.is_valid() {
            return None;
        }
        let days = if self.0 < 60.0 { self.0 + 1.0 } else { self.0 };
        let ms = (days * MS_PER_DAY).round() as i64;
        epoch().checked_add_signed(Duration::milliseconds(ms))
    }
}

impl From<NaiveDateTime> for ExcelDate {
    fn from(dt: NaiveDateTime) -> Self {
        ExcelDate::from_datetime(dt)
    }
}

impl fmt::Display for ExcelDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            None => write!(f, "#DATE({})", self.0),
        }
    }
}

fn epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .unwrap_or(NaiveDate::MIN)
        .and_time(NaiveTime::MIN)
}
