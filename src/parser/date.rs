use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

/// Seconds east of UTC for the feed's audience (KST).
pub const DEFAULT_OFFSET_SECS: i32 = 9 * 3600;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

// %b also accepts full month names when parsing ("March 5, 2024").
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d", "%b %d, %Y"];

/// Renders loosely formatted feed dates as `YYYY.MM.DD`.
///
/// Timestamps carrying an offset are shifted into `offset` before the
/// calendar date is taken; naive dates and date-times are used as written.
#[derive(Debug, Clone, Copy)]
pub struct DateFormatter {
    offset: FixedOffset,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self {
            offset: FixedOffset::east_opt(DEFAULT_OFFSET_SECS).expect("UTC+9 is in range"),
        }
    }
}

impl DateFormatter {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// `None` when `hours` is outside ±23.
    pub fn from_offset_hours(hours: i32) -> Option<Self> {
        if !(-23..=23).contains(&hours) {
            return None;
        }
        FixedOffset::east_opt(hours * 3600).map(Self::new)
    }

    /// Empty stays empty; anything unparseable passes through untouched.
    pub fn format(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }
        match self.parse(raw.trim()) {
            Some(date) => date.format("%Y.%m.%d").to_string(),
            None => raw.to_string(),
        }
    }

    fn parse(&self, s: &str) -> Option<NaiveDate> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&self.offset).date_naive());
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
            return Some(dt.with_timezone(&self.offset).date_naive());
        }
        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|dt| dt.date())
            .or_else(|| {
                DATE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
            })
    }
}
