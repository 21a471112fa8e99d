use serde::{Deserialize, Serialize};

/// The member's assigned trainer, as shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainerProfile {
  pub id: i64,
  #[serde(default)]
  pub username: Option<String>,
  #[serde(default)]
  pub specialization: Option<String>,
  #[serde(default)]
  pub available_hours_per_day: Option<i32>,
  #[serde(default)]
  pub experience_years: Option<i32>,
}
