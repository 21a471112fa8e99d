use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::RawDate;

/// Ad-hoc workout logged directly by the member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
  pub id: i64,
  #[serde(alias = "name", default)]
  pub workout_name: String,
  #[serde(deserialize_with = "crate::dates::deserialize_date")]
  pub date: NaiveDate,
  #[serde(default, deserialize_with = "super::null_as_default")]
  pub target_reps: i32,
  #[serde(default)]
  pub actual_reps: Option<i32>,
  #[serde(default, deserialize_with = "super::null_as_default")]
  pub completed: bool,
  /// Target time-of-day, free text from the store (e.g. "07:30")
  #[serde(default)]
  pub target_time: Option<String>,
}

/// Workout entry from a trainer-assigned weekly plan.
///
/// `workout_date` is kept raw: the store sends either `"YYYY-MM-DD"`
/// (sometimes with a time suffix) or `[year, month, day]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanWorkoutRecord {
  pub id: i64,
  #[serde(alias = "name", default)]
  pub workout_name: String,
  #[serde(alias = "date", default)]
  pub workout_date: Option<RawDate>,
  #[serde(default, deserialize_with = "super::null_as_default")]
  pub target_reps: i32,
  #[serde(default, deserialize_with = "super::null_as_default")]
  pub completed: bool,
}

/// Latest weekly plan assigned to the member
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
  #[serde(default)]
  pub id: Option<i64>,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default, deserialize_with = "super::null_as_default")]
  pub workouts: Vec<PlanWorkoutRecord>,
}
