//! Remote store client
//!
//! Thin request/response wrapper over the WellNest REST API. All record
//! data is owned by the store; this client only reads it for a window and
//! forwards member writes. The session is passed explicitly to every call.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::AppConfig;
use crate::daily_log::{check_daily_log, DailyLog, DailyLogError};
use crate::dates::format_date_key;
use crate::models::{
  decode_rows, DashboardFigures, NewNutritionLog, NewSleepMoodLog, NutritionLog, SleepMoodLog, TrainerProfile,
  WeeklyPlan, WorkoutRecord,
};
use crate::window::{resolve_window, ReportingWindow, ViewMode};

/// ---------------------------------------------------------------------------
/// Session
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
  #[serde(alias = "USER")]
  Member,
  Trainer,
  Admin,
}

/// Authenticated identity, injected into every call that needs one
#[derive(Clone, Serialize, Deserialize)]
pub struct Session {
  pub token: String,
  pub username: String,
  pub role: Role,
  pub user_id: i64,
}

impl Session {
  pub fn member(token: impl Into<String>, username: impl Into<String>, user_id: i64) -> Self {
    Self {
      token: token.into(),
      username: username.into(),
      role: Role::Member,
      user_id,
    }
  }

  pub fn trainer(token: impl Into<String>, username: impl Into<String>, user_id: i64) -> Self {
    Self {
      role: Role::Trainer,
      ..Self::member(token, username, user_id)
    }
  }
}

impl std::fmt::Debug for Session {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Session")
      .field("username", &self.username)
      .field("role", &self.role)
      .field("user_id", &self.user_id)
      .finish_non_exhaustive()
  }
}

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum ApiError {
  #[error("Invalid API URL: {0}")]
  InvalidUrl(String),

  #[error("HTTP request failed: {0}")]
  Request(String),

  #[error("API error: {0}")]
  Api(String),

  #[error("Unexpected response body: {0}")]
  Decode(String),

  #[error("Not permitted: {0}")]
  Forbidden(String),

  #[error(transparent)]
  DailyLog(#[from] DailyLogError),
}

impl From<reqwest::Error> for ApiError {
  fn from(e: reqwest::Error) -> Self {
    ApiError::Request(e.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Store Seam
/// ---------------------------------------------------------------------------

/// Reads the dashboard fans out over
#[async_trait]
pub trait HealthStore: Send + Sync {
  async fn fetch_workouts(
    &self,
    session: &Session,
    window: &ReportingWindow,
  ) -> Result<Vec<WorkoutRecord>, ApiError>;

  /// `None` when no plan has been assigned yet
  async fn fetch_latest_plan(&self, session: &Session) -> Result<Option<WeeklyPlan>, ApiError>;

  async fn fetch_nutrition_logs(
    &self,
    session: &Session,
    window: &ReportingWindow,
  ) -> Result<Vec<NutritionLog>, ApiError>;

  async fn fetch_sleep_logs(
    &self,
    session: &Session,
    window: &ReportingWindow,
  ) -> Result<Vec<SleepMoodLog>, ApiError>;

  /// `None` when the member has no trainer
  async fn fetch_assigned_trainer(
    &self,
    session: &Session,
  ) -> Result<Option<TrainerProfile>, ApiError>;
}

/// ---------------------------------------------------------------------------
/// HTTP Client
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ApiClient {
  http: Client,
  base_url: Url,
}

impl ApiClient {
  pub fn new(base_url: &str) -> Result<Self, ApiError> {
    // Without a trailing slash `Url::join` would drop the last path segment
    let normalized = if base_url.ends_with('/') {
      base_url.to_string()
    } else {
      format!("{}/", base_url)
    };
    let base_url = Url::parse(&normalized).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

    Ok(Self {
      http: Client::new(),
      base_url,
    })
  }

  pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
    Self::new(&config.api_url)
  }

  fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
    self
      .base_url
      .join(path.trim_start_matches('/'))
      .map_err(|e| ApiError::InvalidUrl(e.to_string()))
  }

  fn windowed_endpoint(&self, path: &str, window: &ReportingWindow) -> Result<Url, ApiError> {
    let mut url = self.endpoint(path)?;
    url
      .query_pairs_mut()
      .append_pair("startDate", &format_date_key(window.start))
      .append_pair("endDate", &format_date_key(window.end));
    Ok(url)
  }

  async fn send(&self, request: RequestBuilder, label: &str) -> Result<Response, ApiError> {
    let response = request.send().await?;

    if !response.status().is_success() {
      return Err(status_error(response, label).await);
    }

    Ok(response)
  }

  async fn get_json<T: DeserializeOwned>(
    &self,
    session: &Session,
    url: Url,
    label: &str,
  ) -> Result<T, ApiError> {
    log::debug!("GET {}", url.path());
    let request = self.http.get(url).bearer_auth(&session.token);
    let body = self.send(request, label).await?.text().await?;
    decode_body(&body, label)
  }

  /// GET a list of records, skipping rows that cannot be read
  async fn get_records<T: DeserializeOwned>(
    &self,
    session: &Session,
    url: Url,
    label: &str,
  ) -> Result<Vec<T>, ApiError> {
    let rows: Vec<serde_json::Value> = self.get_json(session, url, label).await?;
    Ok(decode_rows(rows, label))
  }

  /// GET where "nothing there" (404, 204, empty or `null` body) is a valid answer
  async fn get_optional<T: DeserializeOwned>(
    &self,
    session: &Session,
    url: Url,
    label: &str,
  ) -> Result<Option<T>, ApiError> {
    log::debug!("GET {}", url.path());
    let response = self.http.get(url).bearer_auth(&session.token).send().await?;

    match response.status() {
      StatusCode::NOT_FOUND | StatusCode::NO_CONTENT => return Ok(None),
      status if !status.is_success() => return Err(status_error(response, label).await),
      _ => {}
    }

    let body = response.text().await?;
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
      return Ok(None);
    }

    decode_body(trimmed, label).map(Some)
  }

  /// POST a new daily log, mapping a store-side conflict to the same rejection
  /// the local guard produces
  async fn post_daily_log<L>(&self, session: &Session, path: &str, log: &L) -> Result<(), ApiError>
  where
    L: DailyLog + Serialize + Sync,
  {
    let url = self.endpoint(path)?;
    let response = self
      .http
      .post(url)
      .bearer_auth(&session.token)
      .json(log)
      .send()
      .await?;

    if response.status() == StatusCode::CONFLICT {
      return Err(
        DailyLogError::AlreadyLogged {
          kind: L::KIND,
          date: log.log_date(),
        }
        .into(),
      );
    }

    if !response.status().is_success() {
      return Err(status_error(response, &format!("{} log", L::KIND)).await);
    }

    Ok(())
  }

  /// ---------------------------------------------------------------------------
  /// Workouts
  /// ---------------------------------------------------------------------------

  /// Record the reps done for an ad-hoc workout and mark it complete
  pub async fn log_workout(
    &self,
    session: &Session,
    workout_id: i64,
    actual_reps: i32,
  ) -> Result<(), ApiError> {
    let mut url = self.endpoint(&format!("api/user/workouts/{}/log", workout_id))?;
    url
      .query_pairs_mut()
      .append_pair("actualReps", &actual_reps.to_string())
      .append_pair("completed", "true");

    let request = self.http.post(url).bearer_auth(&session.token);
    self.send(request, "Workout log").await?;
    Ok(())
  }

  /// Mark a plan-assigned workout complete
  pub async fn complete_plan_workout(&self, session: &Session, plan_workout_id: i64) -> Result<(), ApiError> {
    let url = self.endpoint(&format!("api/user/weekly-plan/workouts/{}/complete", plan_workout_id))?;
    let request = self.http.post(url).bearer_auth(&session.token);
    self.send(request, "Plan workout completion").await?;
    Ok(())
  }

  /// ---------------------------------------------------------------------------
  /// Nutrition
  /// ---------------------------------------------------------------------------

  pub async fn fetch_nutrition_for_day(
    &self,
    session: &Session,
    date: NaiveDate,
  ) -> Result<Vec<NutritionLog>, ApiError> {
    self
      .fetch_nutrition_logs(session, &resolve_window(ViewMode::Daily, date))
      .await
  }

  /// Insert the day's nutrition log unless one already exists
  pub async fn log_nutrition(&self, session: &Session, log: &NewNutritionLog) -> Result<(), ApiError> {
    let existing = self.fetch_nutrition_for_day(session, log.nutrition_date).await?;
    check_daily_log(&existing, log)?;
    self.post_daily_log(session, "api/user/nutrition", log).await?;
    log::info!("Logged nutrition for {}", log.nutrition_date);
    Ok(())
  }

  pub async fn delete_nutrition_log(&self, session: &Session, log_id: i64) -> Result<(), ApiError> {
    let url = self.endpoint(&format!("api/user/nutrition/{}", log_id))?;
    let request = self.http.delete(url).bearer_auth(&session.token);
    self.send(request, "Nutrition delete").await?;
    Ok(())
  }

  /// ---------------------------------------------------------------------------
  /// Sleep & Mood
  /// ---------------------------------------------------------------------------

  pub async fn fetch_sleep_for_day(
    &self,
    session: &Session,
    date: NaiveDate,
  ) -> Result<Vec<SleepMoodLog>, ApiError> {
    self
      .fetch_sleep_logs(session, &resolve_window(ViewMode::Daily, date))
      .await
  }

  /// Insert the night's sleep/mood log unless one already exists
  pub async fn log_sleep_mood(&self, session: &Session, log: &NewSleepMoodLog) -> Result<(), ApiError> {
    let existing = self.fetch_sleep_for_day(session, log.date).await?;
    check_daily_log(&existing, log)?;
    self.post_daily_log(session, "api/user/sleep-mood", log).await?;
    log::info!("Logged sleep/mood for {}", log.date);
    Ok(())
  }

  /// ---------------------------------------------------------------------------
  /// Dashboard
  /// ---------------------------------------------------------------------------

  /// Store-side aggregates for a window. A trainer may scope to one of their members.
  pub async fn fetch_dashboard_figures(
    &self,
    session: &Session,
    window: &ReportingWindow,
    member_id: Option<i64>,
  ) -> Result<DashboardFigures, ApiError> {
    let path = match member_id {
      Some(id) if session.role == Role::Trainer => format!("api/trainer/users/{}/dashboard-stats", id),
      Some(_) => {
        return Err(ApiError::Forbidden(format!(
          "{} cannot view another member's dashboard",
          session.username
        )))
      }
      None => "api/user/dashboard".to_string(),
    };

    let url = self.windowed_endpoint(&path, window)?;
    self.get_json(session, url, "Dashboard figures").await
  }
}

/// Map a non-success response to `ApiError::Api`, keeping the body for context
async fn status_error(response: Response, label: &str) -> ApiError {
  let status = response.status();
  let error_text = response.text().await.unwrap_or_default();
  ApiError::Api(format!("{} error {}: {}", label, status, error_text))
}

fn decode_body<T: DeserializeOwned>(body: &str, label: &str) -> Result<T, ApiError> {
  serde_json::from_str(body).map_err(|e| ApiError::Decode(format!("{}: {}", label, e)))
}

#[async_trait]
impl HealthStore for ApiClient {
  async fn fetch_workouts(
    &self,
    session: &Session,
    window: &ReportingWindow,
  ) -> Result<Vec<WorkoutRecord>, ApiError> {
    let url = self.windowed_endpoint("api/user/workouts", window)?;
    self.get_records(session, url, "Workouts").await
  }

  async fn fetch_latest_plan(&self, session: &Session) -> Result<Option<WeeklyPlan>, ApiError> {
    let url = self.endpoint("api/user/weekly-plan/latest")?;
    self.get_optional(session, url, "Weekly plan").await
  }

  async fn fetch_nutrition_logs(
    &self,
    session: &Session,
    window: &ReportingWindow,
  ) -> Result<Vec<NutritionLog>, ApiError> {
    let url = self.windowed_endpoint("api/user/nutrition", window)?;
    self.get_records(session, url, "Nutrition").await
  }

  async fn fetch_sleep_logs(
    &self,
    session: &Session,
    window: &ReportingWindow,
  ) -> Result<Vec<SleepMoodLog>, ApiError> {
    let url = self.windowed_endpoint("api/user/sleep-mood", window)?;
    self.get_records(session, url, "Sleep/mood").await
  }

  async fn fetch_assigned_trainer(
    &self,
    session: &Session,
  ) -> Result<Option<TrainerProfile>, ApiError> {
    let url = self.endpoint("api/user/assigned-trainer")?;
    self.get_optional(session, url, "Assigned trainer").await
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::daily_log::LogKind;
  use crate::test_utils::*;
  use mockito::Matcher;

  fn week_query() -> Matcher {
    Matcher::AllOf(vec![
      Matcher::UrlEncoded("startDate".into(), "2024-06-10".into()),
      Matcher::UrlEncoded("endDate".into(), "2024-06-16".into()),
    ])
  }

  #[test]
  fn test_base_url_keeps_path_prefix() {
    let client = ApiClient::new("https://example.test/v1").unwrap();
    let url = client.endpoint("/api/user/workouts").unwrap();
    assert_eq!(url.as_str(), "https://example.test/v1/api/user/workouts");
  }

  #[test]
  fn test_invalid_base_url() {
    assert!(matches!(ApiClient::new("not a url"), Err(ApiError::InvalidUrl(_))));
  }

  #[test]
  fn test_session_debug_hides_token() {
    let rendered = format!("{:?}", mock_member_session());
    assert!(!rendered.contains("test-token"));
    assert!(rendered.contains("member_one"));
  }

  #[tokio::test]
  async fn test_fetch_workouts_for_window() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
      .mock("GET", "/api/user/workouts")
      .match_query(week_query())
      .match_header("authorization", "Bearer test-token")
      .with_status(200)
      .with_header("content-type", "application/json")
      .with_body(r#"[{"id": 1, "workoutName": "Pushups", "date": "2024-06-11", "targetReps": 30, "completed": true}]"#)
      .create_async()
      .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let window = resolve_window(ViewMode::Weekly, ymd(2024, 6, 12));
    let workouts = client.fetch_workouts(&mock_member_session(), &window).await.unwrap();

    mock.assert_async().await;
    assert_eq!(workouts.len(), 1);
    assert!(workouts[0].completed);
  }

  #[tokio::test]
  async fn test_missing_plan_is_none() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
      .mock("GET", "/api/user/weekly-plan/latest")
      .with_status(404)
      .create_async()
      .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let plan = client.fetch_latest_plan(&mock_member_session()).await.unwrap();
    assert_eq!(plan, None);
  }

  #[tokio::test]
  async fn test_null_trainer_is_none() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
      .mock("GET", "/api/user/assigned-trainer")
      .with_status(200)
      .with_body("null")
      .create_async()
      .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let trainer = client.fetch_assigned_trainer(&mock_member_session()).await.unwrap();
    assert_eq!(trainer, None);
  }

  #[tokio::test]
  async fn test_plan_with_mixed_dates_parses() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
      .mock("GET", "/api/user/weekly-plan/latest")
      .with_status(200)
      .with_body(r#"{"id": 5, "workouts": [{"id": 1, "workoutDate": [2024, 6, 12]}, {"id": 2, "workoutDate": 12}]}"#)
      .create_async()
      .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let plan = client
      .fetch_latest_plan(&mock_member_session())
      .await
      .unwrap()
      .expect("plan present");
    assert_eq!(plan.workouts.len(), 2);
  }

  #[tokio::test]
  async fn test_server_error_surfaces_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
      .mock("GET", "/api/user/sleep-mood")
      .match_query(Matcher::Any)
      .with_status(500)
      .with_body("boom")
      .create_async()
      .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let window = resolve_window(ViewMode::Daily, ymd(2024, 6, 12));
    let err = client.fetch_sleep_logs(&mock_member_session(), &window).await.unwrap_err();

    match err {
      ApiError::Api(msg) => assert!(msg.contains("500") && msg.contains("boom")),
      other => panic!("unexpected error: {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_one_bad_workout_date_keeps_the_rest() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
      .mock("GET", "/api/user/workouts")
      .match_query(Matcher::Any)
      .with_status(200)
      .with_body(
        r#"[
          {"id": 1, "workoutName": "Pushups", "date": "2024-06-11", "completed": true},
          {"id": 2, "workoutName": "Rows", "date": [2024, 6, 12], "completed": false},
          {"id": 3, "workoutName": "Plank", "date": "not-a-date", "completed": true}
        ]"#,
      )
      .create_async()
      .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let window = resolve_window(ViewMode::Weekly, ymd(2024, 6, 12));
    let workouts = client.fetch_workouts(&mock_member_session(), &window).await.unwrap();

    let ids: Vec<i64> = workouts.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(workouts[1].date, ymd(2024, 6, 12));
  }

  #[tokio::test]
  async fn test_one_bad_nutrition_date_keeps_the_rest() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
      .mock("GET", "/api/user/nutrition")
      .match_query(Matcher::Any)
      .with_status(200)
      .with_body(
        r#"[
          {"id": 1, "nutritionDate": "2024-06-11", "caloriesConsumed": 900},
          {"id": 2, "nutritionDate": "garbage", "caloriesConsumed": 400}
        ]"#,
      )
      .create_async()
      .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let window = resolve_window(ViewMode::Weekly, ymd(2024, 6, 12));
    let logs = client.fetch_nutrition_logs(&mock_member_session(), &window).await.unwrap();

    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].calories_consumed, 900.0);
  }

  #[tokio::test]
  async fn test_malformed_body_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
      .mock("GET", "/api/user/sleep-mood")
      .match_query(Matcher::Any)
      .with_status(200)
      .with_body("{not json")
      .create_async()
      .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let window = resolve_window(ViewMode::Daily, ymd(2024, 6, 12));
    let err = client.fetch_sleep_logs(&mock_member_session(), &window).await.unwrap_err();

    match err {
      ApiError::Decode(msg) => assert!(msg.starts_with("Sleep/mood")),
      other => panic!("unexpected error: {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_log_post_failure_surfaces_status() {
    let mut server = mockito::Server::new_async().await;
    let _existing = server
      .mock("GET", "/api/user/nutrition")
      .match_query(Matcher::Any)
      .with_status(200)
      .with_body("[]")
      .create_async()
      .await;
    let _post = server
      .mock("POST", "/api/user/nutrition")
      .with_status(400)
      .with_body("bad macros")
      .create_async()
      .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let err = client
      .log_nutrition(&mock_member_session(), &mock_new_nutrition_log(ymd(2024, 6, 12)))
      .await
      .unwrap_err();

    match err {
      ApiError::Api(msg) => assert!(msg.starts_with("nutrition log error 400") && msg.contains("bad macros")),
      other => panic!("unexpected error: {:?}", other),
    }
  }

  #[tokio::test]
  async fn test_log_nutrition_blocked_when_day_already_logged() {
    let mut server = mockito::Server::new_async().await;
    let _existing = server
      .mock("GET", "/api/user/nutrition")
      .match_query(Matcher::Any)
      .with_status(200)
      .with_body(r#"[{"id": 3, "nutritionDate": "2024-06-12", "caloriesConsumed": 900}]"#)
      .create_async()
      .await;
    let post = server
      .mock("POST", "/api/user/nutrition")
      .expect(0)
      .create_async()
      .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let err = client
      .log_nutrition(&mock_member_session(), &mock_new_nutrition_log(ymd(2024, 6, 12)))
      .await
      .unwrap_err();

    post.assert_async().await;
    assert!(matches!(
      err,
      ApiError::DailyLog(DailyLogError::AlreadyLogged { kind: LogKind::Nutrition, .. })
    ));
  }

  #[tokio::test]
  async fn test_log_nutrition_posts_first_log() {
    let mut server = mockito::Server::new_async().await;
    let _existing = server
      .mock("GET", "/api/user/nutrition")
      .match_query(Matcher::Any)
      .with_status(200)
      .with_body("[]")
      .create_async()
      .await;
    let post = server
      .mock("POST", "/api/user/nutrition")
      .match_body(Matcher::PartialJson(serde_json::json!({"nutritionDate": "2024-06-12"})))
      .with_status(200)
      .create_async()
      .await;

    let client = ApiClient::new(&server.url()).unwrap();
    client
      .log_nutrition(&mock_member_session(), &mock_new_nutrition_log(ymd(2024, 6, 12)))
      .await
      .unwrap();

    post.assert_async().await;
  }

  #[tokio::test]
  async fn test_store_conflict_maps_to_already_logged() {
    let mut server = mockito::Server::new_async().await;
    let _existing = server
      .mock("GET", "/api/user/sleep-mood")
      .match_query(Matcher::Any)
      .with_status(200)
      .with_body("[]")
      .create_async()
      .await;
    let _post = server
      .mock("POST", "/api/user/sleep-mood")
      .with_status(409)
      .create_async()
      .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let err = client
      .log_sleep_mood(&mock_member_session(), &mock_new_sleep_log(ymd(2024, 6, 12), 7.5))
      .await
      .unwrap_err();

    assert!(matches!(
      err,
      ApiError::DailyLog(DailyLogError::AlreadyLogged { kind: LogKind::SleepMood, .. })
    ));
  }

  #[tokio::test]
  async fn test_log_workout_sends_reps() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
      .mock("POST", "/api/user/workouts/12/log")
      .match_query(Matcher::AllOf(vec![
        Matcher::UrlEncoded("actualReps".into(), "25".into()),
        Matcher::UrlEncoded("completed".into(), "true".into()),
      ]))
      .with_status(200)
      .create_async()
      .await;

    let client = ApiClient::new(&server.url()).unwrap();
    client.log_workout(&mock_member_session(), 12, 25).await.unwrap();
    mock.assert_async().await;
  }

  #[tokio::test]
  async fn test_member_scope_requires_trainer() {
    let client = ApiClient::new("http://127.0.0.1:9").unwrap();
    let window = resolve_window(ViewMode::Weekly, ymd(2024, 6, 12));

    let err = client
      .fetch_dashboard_figures(&mock_member_session(), &window, Some(3))
      .await
      .unwrap_err();
    assert!(matches!(err, ApiError::Forbidden(_)));
  }

  #[tokio::test]
  async fn test_trainer_fetches_member_figures() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
      .mock("GET", "/api/trainer/users/3/dashboard-stats")
      .match_query(week_query())
      .with_status(200)
      .with_body(r#"{"caloriesConsumed": 8000, "completedWorkouts": 3, "totalWorkouts": 4}"#)
      .create_async()
      .await;

    let client = ApiClient::new(&server.url()).unwrap();
    let window = resolve_window(ViewMode::Weekly, ymd(2024, 6, 12));
    let session = Session::trainer("test-token", "coach_ana", 42);
    let figures = client.fetch_dashboard_figures(&session, &window, Some(3)).await.unwrap();

    mock.assert_async().await;
    assert_eq!(figures.calories_consumed, Some(8000.0));
    assert_eq!(figures.total_workouts, Some(4));
  }
}
