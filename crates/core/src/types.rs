use chrono_tz::Tz;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Wire format for query parameters, stored keys, and displayed times.
/// Minute precision: the store does not distinguish seconds.
pub const MINUTE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The two recorded series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Temperature,
    Humidity,
}

impl SeriesKind {
    /// Table name backing the series.
    pub fn table(self) -> &'static str {
        match self {
            SeriesKind::Temperature => "temperatures",
            SeriesKind::Humidity => "humidities",
        }
    }
}

/// A single stored reading, timestamp already parsed at the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorRecord {
    pub recorded_at: Timestamp,
    pub value: f64,
}

/// One live reading from the sensor capability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSample {
    pub temperature_c: f64,
    pub humidity: f64,
}

/// A resolved UTC query interval plus the display timezone.
///
/// Invariant for well-formed caller input (`from <= to`): `from_utc <= to_utc`.
/// A reversed interval is representable and propagated, matching the lenient
/// input policy; it simply selects no records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub from_utc: Timestamp,
    pub to_utc: Timestamp,
    pub tz: Tz,
}

impl TimeWindow {
    /// Lower bound in the store's minute-text key format.
    pub fn from_text(&self) -> String {
        self.from_utc.format(MINUTE_FORMAT).to_string()
    }

    /// Upper bound in the store's minute-text key format.
    pub fn to_text(&self) -> String {
        self.to_utc.format(MINUTE_FORMAT).to_string()
    }
}
