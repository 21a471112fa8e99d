pub mod dashboard;
pub mod nutrition;
pub mod sleep;
pub mod targets;
pub mod trainer;
pub mod workout;

pub use dashboard::DashboardFigures;
pub use nutrition::{NewNutritionLog, NutritionLog};
pub use sleep::{NewSleepMoodLog, SleepMoodLog};
pub use targets::Targets;
pub use trainer::TrainerProfile;
pub use workout::{PlanWorkoutRecord, WeeklyPlan, WorkoutRecord};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// The remote store sends boxed booleans and numbers; `null` means "unset".
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a list payload row by row. A row that does not fit `T` (for
/// example an unreadable date) is skipped without failing its siblings.
pub(crate) fn decode_rows<T: DeserializeOwned>(rows: Vec<serde_json::Value>, kind: &str) -> Vec<T> {
  rows
    .into_iter()
    .enumerate()
    .filter_map(|(index, row)| match serde_json::from_value(row) {
      Ok(record) => Some(record),
      Err(e) => {
        log::debug!("Skipping {} record at index {}: {}", kind, index, e);
        None
      }
    })
    .collect()
}
