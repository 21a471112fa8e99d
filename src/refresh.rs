//! Dashboard refresh coordination
//!
//! A refresh resolves the window, fans out one fetch per record kind, and
//! joins them into a single summary. Every pass carries a request token;
//! only the result of the most recently issued token may be applied, so a
//! slow pass for an old view mode can never overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use serde::Serialize;

use crate::api::{ApiError, HealthStore, Session};
use crate::models::{Targets, TrainerProfile};
use crate::reconcile::reconcile_workouts;
use crate::summary::{build_summary, ConsumedTotals, DashboardSummary, SummaryWarning};
use crate::window::{resolve_rolling_window, resolve_window, ReportingWindow, ViewMode};

/// Identifies one refresh pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
  pub summary: DashboardSummary,
  pub trainer: Option<TrainerProfile>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
  Current(DashboardSnapshot),
  /// A newer refresh was issued while this one was in flight
  Superseded,
}

impl RefreshOutcome {
  pub fn into_current(self) -> Option<DashboardSnapshot> {
    match self {
      Self::Current(snapshot) => Some(snapshot),
      Self::Superseded => None,
    }
  }
}

pub struct DashboardRefresher<S> {
  store: S,
  targets: Targets,
  latest: AtomicU64,
}

impl<S: HealthStore> DashboardRefresher<S> {
  pub fn new(store: S, targets: Targets) -> Self {
    Self {
      store,
      targets,
      latest: AtomicU64::new(0),
    }
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  pub fn targets(&self) -> &Targets {
    &self.targets
  }

  /// Issue a new token, superseding every earlier one
  pub fn begin(&self) -> RequestToken {
    RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
  }

  pub fn is_current(&self, token: RequestToken) -> bool {
    self.latest.load(Ordering::SeqCst) == token.0
  }

  /// Refresh the calendar-aligned window containing `reference`
  pub async fn refresh(&self, session: &Session, mode: ViewMode, reference: NaiveDate) -> RefreshOutcome {
    let token = self.begin();
    self.run(token, session, resolve_window(mode, reference)).await
  }

  /// Refresh the rolling window ending on `reference`
  pub async fn refresh_rolling(
    &self,
    session: &Session,
    mode: ViewMode,
    reference: NaiveDate,
  ) -> RefreshOutcome {
    let token = self.begin();
    self.run(token, session, resolve_rolling_window(mode, reference)).await
  }

  /// Run one pass for `window` under an already issued token
  pub async fn run(&self, token: RequestToken, session: &Session, window: ReportingWindow) -> RefreshOutcome {
    log::debug!("Refresh {:?} for {} to {}", token, window.start, window.end);

    let (workouts, plan, nutrition, sleep, trainer) = tokio::join!(
      self.store.fetch_workouts(session, &window),
      self.store.fetch_latest_plan(session),
      self.store.fetch_nutrition_logs(session, &window),
      self.store.fetch_sleep_logs(session, &window),
      self.store.fetch_assigned_trainer(session),
    );

    if !self.is_current(token) {
      log::debug!("Discarding stale refresh {:?}", token);
      return RefreshOutcome::Superseded;
    }

    let mut warnings = Vec::new();
    let workouts = recover(workouts, "workouts", &mut warnings).unwrap_or_default();
    let plan_workouts = recover(plan, "plan", &mut warnings)
      .flatten()
      .map(|plan| plan.workouts)
      .unwrap_or_default();
    let nutrition = recover(nutrition, "nutrition", &mut warnings).unwrap_or_default();
    let sleep = recover(sleep, "sleep", &mut warnings).unwrap_or_default();
    let trainer = recover(trainer, "trainer", &mut warnings).flatten();

    let reconciled = reconcile_workouts(&window, &workouts, &plan_workouts);
    let consumed = ConsumedTotals::from_logs(&window, &nutrition, &sleep);
    let summary = build_summary(window, &consumed, &self.targets, reconciled).with_warnings(warnings);

    RefreshOutcome::Current(DashboardSnapshot { summary, trainer })
  }
}

/// Keep a successful fetch; turn a failed one into a warning
fn recover<T>(result: Result<T, ApiError>, source: &str, warnings: &mut Vec<SummaryWarning>) -> Option<T> {
  match result {
    Ok(value) => Some(value),
    Err(e) => {
      log::warn!("Failed to fetch {}: {}", source, e);
      warnings.push(SummaryWarning::new(source, e.to_string()));
      None
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
