//! Reporting windows
//!
//! A view-mode selector (`daily`, `weekly`, `monthly`) resolves to an
//! inclusive `[start, end]` calendar-date range. The primary resolver is
//! calendar-aligned: ISO week (Monday to Sunday) and first-to-last day of
//! the month. The trailing variant is a separate function and is never
//! substituted silently.

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// View Mode
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
  #[default]
  Daily,
  Weekly,
  Monthly,
}

impl std::fmt::Display for ViewMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Daily => write!(f, "daily"),
      Self::Weekly => write!(f, "weekly"),
      Self::Monthly => write!(f, "monthly"),
    }
  }
}

impl std::str::FromStr for ViewMode {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "daily" => Ok(Self::Daily),
      "weekly" => Ok(Self::Weekly),
      "monthly" => Ok(Self::Monthly),
      _ => Err(format!("Unknown view mode: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Reporting Window
/// ---------------------------------------------------------------------------

/// Inclusive date range for one view mode. Dates serialize as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingWindow {
  pub view_mode: ViewMode,
  pub start: NaiveDate,
  pub end: NaiveDate,
}

impl ReportingWindow {
  pub fn contains(&self, date: NaiveDate) -> bool {
    self.start <= date && date <= self.end
  }

  /// Number of calendar days covered, both ends included
  pub fn day_count(&self) -> i64 {
    (self.end - self.start).num_days() + 1
  }

  /// Every calendar day in the window, in order
  pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
    self.start.iter_days().take_while({
      let end = self.end;
      move |d| *d <= end
    })
  }
}

/// Today in the caller's local calendar, not UTC
pub fn local_today() -> NaiveDate {
  Local::now().date_naive()
}

/// Resolve the calendar-aligned window containing `reference`
pub fn resolve_window(mode: ViewMode, reference: NaiveDate) -> ReportingWindow {
  let (start, end) = match mode {
    ViewMode::Daily => (reference, reference),
    ViewMode::Weekly => {
      // Sunday belongs to the week that started six days earlier
      let offset = i64::from(reference.weekday().number_from_monday()) - 1;
      let monday = reference - Duration::days(offset);
      (monday, monday + Duration::days(6))
    }
    ViewMode::Monthly => {
      let first = reference.with_day(1).unwrap_or(reference);
      (first, last_day_of_month(first))
    }
  };

  ReportingWindow {
    view_mode: mode,
    start,
    end,
  }
}

/// Resolve the calendar-aligned window for the local "today"
pub fn resolve_window_today(mode: ViewMode) -> ReportingWindow {
  resolve_window(mode, local_today())
}

/// Trailing window ending on `reference`: 1, 7 or 30 days
pub fn resolve_rolling_window(mode: ViewMode, reference: NaiveDate) -> ReportingWindow {
  let length_days = match mode {
    ViewMode::Daily => 1,
    ViewMode::Weekly => 7,
    ViewMode::Monthly => 30,
  };

  ReportingWindow {
    view_mode: mode,
    start: reference - Duration::days(length_days - 1),
    end: reference,
  }
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
  let (year, month) = if first.month() == 12 {
    (first.year() + 1, 1)
  } else {
    (first.year(), first.month() + 1)
  };

  NaiveDate::from_ymd_opt(year, month, 1)
    .and_then(|next_first| next_first.pred_opt())
    .unwrap_or(first)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
