use serde::{Deserialize, Serialize};

/// Pre-aggregated figures the store computes for a window.
///
/// Every field is optional; the store omits what it has no data for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardFigures {
  pub calories_consumed: Option<f64>,
  pub protein_consumed: Option<f64>,
  pub carbs_consumed: Option<f64>,
  pub fats_consumed: Option<f64>,
  pub water: Option<f64>,
  pub avg_sleep: Option<f64>,
  pub completed_workouts: Option<u32>,
  pub total_workouts: Option<u32>,
  pub calories_target: Option<f64>,
  pub protein_target: Option<f64>,
  pub carbs_target: Option<f64>,
  pub fats_target: Option<f64>,
  pub water_target: Option<f64>,
}
