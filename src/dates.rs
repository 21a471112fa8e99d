//! Date normalization for records coming from the remote store
//!
//! Plan workouts carry their date either as an ISO string (sometimes with a
//! time component) or as a `[year, month, day]` array, depending on which
//! serializer produced them. Everything is funneled through one conversion
//! into a canonical `NaiveDate` key; raw encodings are never compared.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Canonical key format
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// A date exactly as the store sent it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
  /// `"2024-06-12"` or `"2024-06-12T08:00:00"`
  Iso(String),
  /// `[2024, 6, 12]`
  Triple(i32, i32, i32),
  /// Any other JSON shape. Kept so one bad record cannot fail a whole payload.
  Unrecognized(serde_json::Value),
}

impl RawDate {
  /// Convert to the canonical calendar date, or `None` if the record must be excluded
  pub fn normalize(&self) -> Option<NaiveDate> {
    match self {
      RawDate::Iso(s) => parse_date_key(s),
      RawDate::Triple(year, month, day) => {
        let month = u32::try_from(*month).ok()?;
        let day = u32::try_from(*day).ok()?;
        NaiveDate::from_ymd_opt(*year, month, day)
      }
      RawDate::Unrecognized(_) => None,
    }
  }
}

impl From<NaiveDate> for RawDate {
  fn from(date: NaiveDate) -> Self {
    RawDate::Iso(format_date_key(date))
  }
}

/// Normalize an optional raw date; missing or null dates are excluded
pub fn normalize_date(raw: Option<&RawDate>) -> Option<NaiveDate> {
  raw.and_then(RawDate::normalize)
}

/// Serde adapter for record dates: any encoding `RawDate` understands, or an error
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = RawDate::deserialize(deserializer)?;
  raw
    .normalize()
    .ok_or_else(|| serde::de::Error::custom(format!("unreadable date {:?}", raw)))
}

/// Parse a date string, discarding any time-of-day suffix
pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
  let date_part = value
    .trim()
    .split(['T', ' '])
    .next()
    .filter(|s| !s.is_empty())?;

  NaiveDate::parse_from_str(date_part, DATE_KEY_FORMAT).ok()
}

/// Canonical `YYYY-MM-DD` form
pub fn format_date_key(date: NaiveDate) -> String {
  date.format(DATE_KEY_FORMAT).to_string()
}

/// String-in, string-out normalization
pub fn normalize_date_str(value: &str) -> Option<String> {
  parse_date_key(value).map(format_date_key)
}
