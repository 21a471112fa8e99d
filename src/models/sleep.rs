use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One night's sleep and mood check-in. At most one exists per member per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepMoodLog {
  pub id: i64,
  #[serde(deserialize_with = "crate::dates::deserialize_date")]
  pub date: NaiveDate,
  #[serde(default, deserialize_with = "super::null_as_default")]
  pub sleep_hours: f64,
  #[serde(default)]
  pub mood: Option<String>,
  /// 1 (calm) to 10 (stressed)
  #[serde(default)]
  pub stress_level: Option<i32>,
}

/// For inserting a new sleep/mood log (without id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSleepMoodLog {
  pub date: NaiveDate,
  pub sleep_hours: f64,
  pub mood: Option<String>,
  pub stress_level: Option<i32>,
}
