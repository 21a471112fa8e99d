//! Dashboard summary assembly
//!
//! Pure composition over already-fetched inputs: consumed totals, targets
//! and the reconciled workout list become one summary value that every
//! presentation layer reads. No I/O happens here.

use serde::{Deserialize, Serialize};

use crate::models::{DashboardFigures, NutritionLog, SleepMoodLog, Targets};
use crate::progress::{compute_progress, Progress};
use crate::reconcile::ReconciledWorkout;
use crate::window::ReportingWindow;

/// ---------------------------------------------------------------------------
/// Consumed Totals
/// ---------------------------------------------------------------------------

/// Raw consumed values for a window
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumedTotals {
  pub calories: f64,
  pub protein: f64,
  pub carbs: f64,
  pub fats: f64,
  /// Litres
  pub water: f64,
  /// Average hours per logged night
  pub sleep: f64,
  pub steps: i64,
}

impl ConsumedTotals {
  /// Aggregate logs falling inside `window`.
  ///
  /// Nutrition values and steps are summed. Sleep is averaged over the
  /// nights that were actually logged, so a half-logged week is not
  /// dragged toward zero.
  pub fn from_logs(
    window: &ReportingWindow,
    nutrition: &[NutritionLog],
    sleep: &[SleepMoodLog],
  ) -> Self {
    let mut totals = Self::default();

    for log in nutrition.iter().filter(|l| window.contains(l.nutrition_date)) {
      totals.calories += log.calories_consumed;
      totals.protein += log.protein_consumed;
      totals.carbs += log.carbs_consumed;
      totals.fats += log.fats_consumed;
      totals.water += log.water_intake;
      totals.steps += log.steps;
    }

    let nights: Vec<f64> = sleep
      .iter()
      .filter(|l| window.contains(l.date))
      .map(|l| l.sleep_hours)
      .collect();

    if !nights.is_empty() {
      totals.sleep = nights.iter().sum::<f64>() / nights.len() as f64;
    }

    totals
  }

  /// Totals as reported by the store's pre-aggregated figures
  pub fn from_figures(figures: &DashboardFigures) -> Self {
    Self {
      calories: figures.calories_consumed.unwrap_or(0.0),
      protein: figures.protein_consumed.unwrap_or(0.0),
      carbs: figures.carbs_consumed.unwrap_or(0.0),
      fats: figures.fats_consumed.unwrap_or(0.0),
      water: figures.water.unwrap_or(0.0),
      sleep: figures.avg_sleep.unwrap_or(0.0),
      steps: 0,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Warnings
/// ---------------------------------------------------------------------------

/// Non-fatal problems encountered while gathering data for a summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryWarning {
  /// Record kind that could not be fetched ("workouts", "nutrition", ...)
  pub source: String,
  pub message: String,
}

impl SummaryWarning {
  pub fn new(source: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      source: source.into(),
      message: message.into(),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Dashboard Summary
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
  pub window: ReportingWindow,
  pub calories: Progress,
  pub protein: Progress,
  pub carbs: Progress,
  pub fats: Progress,
  pub water: Progress,
  pub sleep: Progress,
  /// Completed workouts against the workout-count target
  pub workouts: Progress,
  pub workouts_completed: u32,
  pub workouts_total: u32,
  pub steps: i64,
  pub reconciled_workouts: Vec<ReconciledWorkout>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub warnings: Vec<SummaryWarning>,
}

impl DashboardSummary {
  pub fn with_warnings(mut self, warnings: Vec<SummaryWarning>) -> Self {
    self.warnings.extend(warnings);
    self
  }

  pub fn is_partial(&self) -> bool {
    !self.warnings.is_empty()
  }
}

/// Assemble the summary for `window`
pub fn build_summary(
  window: ReportingWindow,
  consumed: &ConsumedTotals,
  targets: &Targets,
  reconciled: Vec<ReconciledWorkout>,
) -> DashboardSummary {
  let workouts_completed = reconciled.iter().filter(|w| w.completed).count() as u32;
  let workouts_total = reconciled.len() as u32;

  assemble(
    window,
    consumed,
    targets,
    workouts_completed,
    workouts_total,
    reconciled,
  )
}

/// Summary from store-side figures only (trainer viewing a member).
///
/// There is no workout list on this path; completed/total counts are the
/// store's own.
pub fn summary_from_figures(
  window: ReportingWindow,
  figures: &DashboardFigures,
  targets: &Targets,
) -> DashboardSummary {
  let consumed = ConsumedTotals::from_figures(figures);
  let targets = targets.with_figures(figures);
  let total = figures.total_workouts.unwrap_or(0);
  let completed = figures.completed_workouts.unwrap_or(0).min(total);

  assemble(window, &consumed, &targets, completed, total, Vec::new())
}

fn assemble(
  window: ReportingWindow,
  consumed: &ConsumedTotals,
  targets: &Targets,
  workouts_completed: u32,
  workouts_total: u32,
  reconciled: Vec<ReconciledWorkout>,
) -> DashboardSummary {
  DashboardSummary {
    window,
    calories: compute_progress(consumed.calories, targets.calories),
    protein: compute_progress(consumed.protein, targets.protein),
    carbs: compute_progress(consumed.carbs, targets.carbs),
    fats: compute_progress(consumed.fats, targets.fats),
    water: compute_progress(consumed.water, targets.water),
    sleep: compute_progress(consumed.sleep, targets.sleep),
    workouts: compute_progress(f64::from(workouts_completed), targets.workouts),
    workouts_completed,
    workouts_total,
    steps: consumed.steps,
    reconciled_workouts: reconciled,
    warnings: Vec::new(),
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
