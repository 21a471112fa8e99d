use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's nutrition log. At most one exists per member per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionLog {
  pub id: i64,
  #[serde(alias = "date", deserialize_with = "crate::dates::deserialize_date")]
  pub nutrition_date: NaiveDate,
  #[serde(default, deserialize_with = "super::null_as_default")]
  pub calories_consumed: f64,
  #[serde(default, deserialize_with = "super::null_as_default")]
  pub protein_consumed: f64,
  #[serde(default, deserialize_with = "super::null_as_default")]
  pub carbs_consumed: f64,
  #[serde(default, deserialize_with = "super::null_as_default")]
  pub fats_consumed: f64,
  /// Litres
  #[serde(default, deserialize_with = "super::null_as_default")]
  pub water_intake: f64,
  #[serde(default, deserialize_with = "super::null_as_default")]
  pub steps: i64,
}

/// For inserting a new nutrition log (without id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNutritionLog {
  pub nutrition_date: NaiveDate,
  pub calories_consumed: f64,
  pub protein_consumed: f64,
  pub carbs_consumed: f64,
  pub fats_consumed: f64,
  pub water_intake: f64,
  pub steps: i64,
}
