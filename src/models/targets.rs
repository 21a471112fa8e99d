use serde::{Deserialize, Serialize};

use super::DashboardFigures;

/// Per-member goals. Supplied by the trainer or the store; read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Targets {
  pub calories: f64,
  pub protein: f64,
  pub carbs: f64,
  pub fats: f64,
  /// Litres per day
  pub water: f64,
  pub workouts: f64,
  /// Hours per night
  pub sleep: f64,
}

impl Default for Targets {
  fn default() -> Self {
    Self {
      calories: 2000.0,
      protein: 150.0,
      carbs: 300.0,
      fats: 70.0,
      water: 3.0,
      workouts: 1.0,
      sleep: 8.0,
    }
  }
}

impl Targets {
  /// Overlay any positive targets the store reported for this window
  pub fn with_figures(&self, figures: &DashboardFigures) -> Self {
    let pick = |remote: Option<f64>, local: f64| match remote {
      Some(v) if v > 0.0 => v,
      _ => local,
    };

    Self {
      calories: pick(figures.calories_target, self.calories),
      protein: pick(figures.protein_target, self.protein),
      carbs: pick(figures.carbs_target, self.carbs),
      fats: pick(figures.fats_target, self.fats),
      water: pick(figures.water_target, self.water),
      workouts: self.workouts,
      sleep: self.sleep,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_with_figures_ignores_missing_and_zero_targets() {
    let figures = DashboardFigures {
      calories_target: Some(2400.0),
      protein_target: Some(0.0),
      water_target: None,
      ..Default::default()
    };

    let merged = Targets::default().with_figures(&figures);
    assert_eq!(merged.calories, 2400.0);
    assert_eq!(merged.protein, 150.0);
    assert_eq!(merged.water, 3.0);
    assert_eq!(merged.sleep, 8.0);
  }
}
