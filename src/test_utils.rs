//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Mock record factories
//! - An in-memory store for refresh tests
//! - Helper assertions

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::{ApiError, HealthStore, Session};
use crate::dates::RawDate;
use crate::models::{
  NewNutritionLog, NewSleepMoodLog, NutritionLog, PlanWorkoutRecord, SleepMoodLog, Targets,
  TrainerProfile, WeeklyPlan, WorkoutRecord,
};
use crate::window::ReportingWindow;

/// ---------------------------------------------------------------------------
/// Date Helpers
/// ---------------------------------------------------------------------------

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

pub fn mock_workout(id: i64, date: NaiveDate, completed: bool) -> WorkoutRecord {
  WorkoutRecord {
    id,
    workout_name: format!("Pushups #{}", id),
    date,
    target_reps: 30,
    actual_reps: if completed { Some(30) } else { None },
    completed,
    target_time: Some("07:30".to_string()),
  }
}

pub fn mock_plan_workout(id: i64, date: RawDate, completed: bool) -> PlanWorkoutRecord {
  PlanWorkoutRecord {
    id,
    workout_name: format!("Plan squats #{}", id),
    workout_date: Some(date),
    target_reps: 20,
    completed,
  }
}

pub fn mock_nutrition_log(id: i64, date: NaiveDate) -> NutritionLog {
  NutritionLog {
    id,
    nutrition_date: date,
    calories_consumed: 1800.0,
    protein_consumed: 120.0,
    carbs_consumed: 200.0,
    fats_consumed: 60.0,
    water_intake: 2.5,
    steps: 8000,
  }
}

pub fn mock_new_nutrition_log(date: NaiveDate) -> NewNutritionLog {
  NewNutritionLog {
    nutrition_date: date,
    calories_consumed: 1800.0,
    protein_consumed: 120.0,
    carbs_consumed: 200.0,
    fats_consumed: 60.0,
    water_intake: 2.5,
    steps: 8000,
  }
}

pub fn mock_sleep_log(id: i64, date: NaiveDate, hours: f64) -> SleepMoodLog {
  SleepMoodLog {
    id,
    date,
    sleep_hours: hours,
    mood: Some("Neutral".to_string()),
    stress_level: Some(5),
  }
}

pub fn mock_new_sleep_log(date: NaiveDate, hours: f64) -> NewSleepMoodLog {
  NewSleepMoodLog {
    date,
    sleep_hours: hours,
    mood: Some("Happy".to_string()),
    stress_level: Some(3),
  }
}

pub fn mock_targets() -> Targets {
  Targets::default()
}

pub fn mock_trainer() -> TrainerProfile {
  TrainerProfile {
    id: 42,
    username: Some("coach_ana".to_string()),
    specialization: Some("Strength".to_string()),
    available_hours_per_day: Some(6),
    experience_years: Some(8),
  }
}

pub fn mock_member_session() -> Session {
  Session::member("test-token", "member_one", 7)
}

/// ---------------------------------------------------------------------------
/// In-Memory Store
/// ---------------------------------------------------------------------------

/// Fake store returning canned data; any kind listed in `failing` errors out
#[derive(Default)]
pub struct FakeStore {
  pub workouts: Vec<WorkoutRecord>,
  pub plan: Option<WeeklyPlan>,
  pub nutrition: Vec<NutritionLog>,
  pub sleep: Vec<SleepMoodLog>,
  pub trainer: Option<TrainerProfile>,
  pub failing: Vec<&'static str>,
  pub requested_windows: Mutex<Vec<ReportingWindow>>,
}

impl FakeStore {
  fn fail_if(&self, kind: &'static str) -> Result<(), ApiError> {
    if self.failing.contains(&kind) {
      return Err(ApiError::Api(format!("{} unavailable", kind)));
    }
    Ok(())
  }
}

#[async_trait]
impl HealthStore for FakeStore {
  async fn fetch_workouts(
    &self,
    _session: &Session,
    window: &ReportingWindow,
  ) -> Result<Vec<WorkoutRecord>, ApiError> {
    if let Ok(mut seen) = self.requested_windows.lock() {
      seen.push(*window);
    }
    self.fail_if("workouts")?;
    Ok(self.workouts.clone())
  }

  async fn fetch_latest_plan(&self, _session: &Session) -> Result<Option<WeeklyPlan>, ApiError> {
    self.fail_if("plan")?;
    Ok(self.plan.clone())
  }

  async fn fetch_nutrition_logs(
    &self,
    _session: &Session,
    _window: &ReportingWindow,
  ) -> Result<Vec<NutritionLog>, ApiError> {
    self.fail_if("nutrition")?;
    Ok(self.nutrition.clone())
  }

  async fn fetch_sleep_logs(
    &self,
    _session: &Session,
    _window: &ReportingWindow,
  ) -> Result<Vec<SleepMoodLog>, ApiError> {
    self.fail_if("sleep")?;
    Ok(self.sleep.clone())
  }

  async fn fetch_assigned_trainer(
    &self,
    _session: &Session,
  ) -> Result<Option<TrainerProfile>, ApiError> {
    self.fail_if("trainer")?;
    Ok(self.trainer.clone())
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_mock_factories_create_valid_data() {
    let workout = mock_workout(1, ymd(2024, 6, 12), true);
    assert_eq!(workout.actual_reps, Some(30));

    let plan = mock_plan_workout(2, RawDate::Triple(2024, 6, 12), false);
    assert_eq!(plan.workout_date.and_then(|d| d.normalize()), Some(ymd(2024, 6, 12)));

    let session = mock_member_session();
    assert_eq!(session.user_id, 7);
  }

  #[tokio::test]
  async fn test_fake_store_failure_switch() {
    let store = FakeStore {
      failing: vec!["plan"],
      trainer: Some(mock_trainer()),
      ..Default::default()
    };
    let session = mock_member_session();

    assert!(store.fetch_latest_plan(&session).await.is_err());
    assert_eq!(store.fetch_assigned_trainer(&session).await.unwrap(), Some(mock_trainer()));
  }
}
