pub mod api;
pub mod config;
pub mod daily_log;
pub mod dates;
pub mod models;
pub mod progress;
pub mod reconcile;
pub mod refresh;
pub mod summary;
pub mod window;

#[cfg(test)]
mod test_utils;

pub use api::{ApiClient, ApiError, HealthStore, Role, Session};
pub use config::{AppConfig, ConfigError};
pub use daily_log::{check_daily_log, DailyLogError, LogKind};
pub use dates::{normalize_date, RawDate};
pub use progress::{compute_progress, Progress};
pub use reconcile::{reconcile_workouts, ReconciledWorkout};
pub use refresh::{DashboardRefresher, DashboardSnapshot, RefreshOutcome, RequestToken};
pub use summary::{build_summary, summary_from_figures, DashboardSummary, SummaryWarning};
pub use window::{resolve_rolling_window, resolve_window, ReportingWindow, ViewMode};

use chrono::NaiveDate;

#[derive(Debug, thiserror::Error)]
pub enum RunError {
  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error(transparent)]
  Api(#[from] ApiError),

  #[error("Refresh was superseded before it completed")]
  Superseded,
}

/// One dashboard pass for the configured member
pub async fn run(mode: ViewMode, reference: NaiveDate, rolling: bool) -> Result<DashboardSnapshot, RunError> {
  let config = AppConfig::load()?;
  let client = ApiClient::from_config(&config)?;

  // The store resolves the member from the token; the id is not sent
  let username = config.username.clone().unwrap_or_else(|| "member".to_string());
  let session = Session::member(config.api_token.clone(), username, 0);

  let refresher = DashboardRefresher::new(client, config.targets.clone());
  let outcome = if rolling {
    refresher.refresh_rolling(&session, mode, reference).await
  } else {
    refresher.refresh(&session, mode, reference).await
  };

  let snapshot = outcome.into_current().ok_or(RunError::Superseded)?;
  for warning in &snapshot.summary.warnings {
    log::warn!("Partial dashboard: {} ({})", warning.source, warning.message);
  }
  log::info!(
    "{} dashboard {} to {}: {}/{} workouts completed",
    mode,
    snapshot.summary.window.start,
    snapshot.summary.window.end,
    snapshot.summary.workouts_completed,
    snapshot.summary.workouts_total
  );

  Ok(snapshot)
}
