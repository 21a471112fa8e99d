//! Workout reconciliation
//!
//! Merges the member's ad-hoc workouts with the entries of their latest
//! trainer-assigned weekly plan into one ordered list for a window:
//! - plan entries first, then ad-hoc entries
//! - identity is `(origin, id)`; the two sources may reuse the same ids
//! - completion is taken from each record's own flag, never inferred
//!
//! Pure and deterministic: identical inputs give identical output.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{PlanWorkoutRecord, WorkoutRecord};
use crate::window::{resolve_window, ReportingWindow, ViewMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutOrigin {
  /// Assigned by a trainer as part of a weekly plan
  Plan,
  /// Logged directly by the member
  Direct,
}

/// One entry of the merged workout list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciledWorkout {
  pub origin: WorkoutOrigin,
  pub id: i64,
  pub name: String,
  pub date: NaiveDate,
  pub target_reps: i32,
  pub actual_reps: Option<i32>,
  pub target_time: Option<String>,
  pub completed: bool,
}

impl ReconciledWorkout {
  pub fn key(&self) -> (WorkoutOrigin, i64) {
    (self.origin, self.id)
  }

  pub fn is_plan(&self) -> bool {
    self.origin == WorkoutOrigin::Plan
  }

  fn from_plan(record: &PlanWorkoutRecord, date: NaiveDate) -> Self {
    Self {
      origin: WorkoutOrigin::Plan,
      id: record.id,
      name: record.workout_name.clone(),
      date,
      target_reps: record.target_reps,
      actual_reps: None,
      target_time: None,
      completed: record.completed,
    }
  }

  fn from_direct(record: &WorkoutRecord) -> Self {
    Self {
      origin: WorkoutOrigin::Direct,
      id: record.id,
      name: record.workout_name.clone(),
      date: record.date,
      target_reps: record.target_reps,
      actual_reps: record.actual_reps,
      target_time: record.target_time.clone(),
      completed: record.completed,
    }
  }
}

/// Merge ad-hoc and plan workouts for `window`.
///
/// Plan entries whose date cannot be normalized are dropped, as is any entry
/// of either origin dated outside the window. Repeated `(origin, id)` pairs
/// keep their first occurrence.
pub fn reconcile_workouts(
  window: &ReportingWindow,
  adhoc: &[WorkoutRecord],
  plan: &[PlanWorkoutRecord],
) -> Vec<ReconciledWorkout> {
  let mut seen = HashSet::new();
  let mut merged = Vec::with_capacity(plan.len() + adhoc.len());

  for record in plan {
    let Some(date) = record.workout_date.as_ref().and_then(|raw| raw.normalize()) else {
      log::debug!(
        "Excluding plan workout {} ({}): unreadable date {:?}",
        record.id,
        record.workout_name,
        record.workout_date
      );
      continue;
    };

    if !window.contains(date) {
      continue;
    }

    let entry = ReconciledWorkout::from_plan(record, date);
    if seen.insert(entry.key()) {
      merged.push(entry);
    }
  }

  for record in adhoc {
    if !window.contains(record.date) {
      log::debug!("Excluding workout {} dated {}: outside window", record.id, record.date);
      continue;
    }

    let entry = ReconciledWorkout::from_direct(record);
    if seen.insert(entry.key()) {
      merged.push(entry);
    }
  }

  merged
}

/// Single-day reconciliation used by the activity view
pub fn reconcile_day(
  date: NaiveDate,
  adhoc: &[WorkoutRecord],
  plan: &[PlanWorkoutRecord],
) -> Vec<ReconciledWorkout> {
  reconcile_workouts(&resolve_window(ViewMode::Daily, date), adhoc, plan)
}

/// Share of completed workouts, rounded to a whole percent (0 when empty)
pub fn completion_percentage(workouts: &[ReconciledWorkout]) -> u8 {
  if workouts.is_empty() {
    return 0;
  }

  let completed = workouts.iter().filter(|w| w.completed).count();
  ((completed as f64 / workouts.len() as f64) * 100.0).round() as u8
}
