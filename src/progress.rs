//! Consumed-vs-target progress
//!
//! Every indicator on the dashboard is driven by the same ratio, clamped to
//! [0, 100]. A non-positive target reads as 0% instead of dividing by zero.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
  pub consumed: f64,
  pub target: f64,
  /// Clamped to [0, 100]
  pub percentage: f64,
  /// `max(target - consumed, 0)`
  pub remaining: f64,
}

impl Progress {
  pub fn is_met(&self) -> bool {
    self.target > 0.0 && self.consumed >= self.target
  }
}

/// Compute progress of `consumed` against `target`
pub fn compute_progress(consumed: f64, target: f64) -> Progress {
  let consumed = if consumed.is_finite() { consumed } else { 0.0 };
  let target = if target.is_finite() { target } else { 0.0 };

  let percentage = if target > 0.0 {
    (consumed / target * 100.0).clamp(0.0, 100.0)
  } else {
    0.0
  };

  Progress {
    consumed,
    target,
    percentage,
    remaining: (target - consumed).max(0.0),
  }
}
