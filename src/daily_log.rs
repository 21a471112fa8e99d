//! One-log-per-day guard
//!
//! Nutrition and sleep/mood logs are limited to one entry per member per
//! calendar day. The guard runs before any write; a second log for a day
//! that already has one is rejected, never merged or overwritten. The
//! store remains the final authority since two clients can both pass
//! this check.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{NewNutritionLog, NewSleepMoodLog, NutritionLog, SleepMoodLog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
  Nutrition,
  SleepMood,
}

impl std::fmt::Display for LogKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Nutrition => write!(f, "nutrition"),
      Self::SleepMood => write!(f, "sleep/mood"),
    }
  }
}

/// A record kind limited to one entry per calendar day
pub trait DailyLog {
  const KIND: LogKind;

  fn log_date(&self) -> NaiveDate;
}

impl DailyLog for NutritionLog {
  const KIND: LogKind = LogKind::Nutrition;
  fn log_date(&self) -> NaiveDate {
    self.nutrition_date
  }
}

impl DailyLog for NewNutritionLog {
  const KIND: LogKind = LogKind::Nutrition;
  fn log_date(&self) -> NaiveDate {
    self.nutrition_date
  }
}

impl DailyLog for SleepMoodLog {
  const KIND: LogKind = LogKind::SleepMood;
  fn log_date(&self) -> NaiveDate {
    self.date
  }
}

impl DailyLog for NewSleepMoodLog {
  const KIND: LogKind = LogKind::SleepMood;
  fn log_date(&self) -> NaiveDate {
    self.date
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DailyLogError {
  #[error("A {kind} log already exists for {date}")]
  AlreadyLogged { kind: LogKind, date: NaiveDate },
}

/// Accept `candidate` only if no existing log shares its date
pub fn check_daily_log<E, C>(existing: &[E], candidate: &C) -> Result<(), DailyLogError>
where
  E: DailyLog,
  C: DailyLog,
{
  let date = candidate.log_date();
  if existing.iter().any(|log| log.log_date() == date) {
    return Err(DailyLogError::AlreadyLogged {
      kind: C::KIND,
      date,
    });
  }

  Ok(())
}
