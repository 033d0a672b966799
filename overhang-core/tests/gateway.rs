use axum::extract::{Form, Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use overhang_core::api::{ApiClient, ApiConfig};
use overhang_core::filter::FilterState;
use overhang_core::grade::Grade;
use overhang_core::models::{LoginCredentials, Period, RegisterCredentials, UserUpdate};
use overhang_core::session_form::SessionForm;
use overhang_core::token::{MemoryTokenStore, TokenStore};
use overhang_core::OverhangError;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

type Reply = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map_or(false, |v| v == "Bearer s3cret")
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Could not validate credentials"})),
    )
}

async fn login(Form(form): Form<HashMap<String, String>>) -> Reply {
    if form.get("username").map(String::as_str) == Some("ada")
        && form.get("password").map(String::as_str) == Some("pw")
    {
        Ok(Json(json!({"access_token": "s3cret", "token_type": "bearer"})))
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Incorrect username or password"})),
        ))
    }
}

async fn me(headers: HeaderMap) -> Reply {
    if !authorized(&headers) {
        return Err(unauthorized());
    }
    Ok(Json(json!({
        "id": 1,
        "username": "ada",
        "email": null,
        "home_location_id": 2,
        "default_grade": "V3",
        "created_at": "2024-01-05T09:00:00"
    })))
}

async fn register(Json(body): Json<Value>) -> Reply {
    if body["username"] == "grace" && body["password"] == "pw" {
        Ok(Json(json!({"access_token": "s3cret", "token_type": "bearer"})))
    } else {
        Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Username already registered"})),
        ))
    }
}

async fn update_me(headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    if !authorized(&headers) {
        return Err(unauthorized());
    }
    // fields left out of the patch come back null
    Ok(Json(json!({
        "id": 1,
        "username": "ada",
        "email": null,
        "home_location_id": body.get("home_location_id").cloned().unwrap_or(Value::Null),
        "default_grade": body.get("default_grade").cloned().unwrap_or(Value::Null),
        "created_at": "2024-01-05T09:00:00"
    })))
}

async fn distribution(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Reply {
    if !authorized(&headers) {
        return Err(unauthorized());
    }
    // encode the received parameters as grade keys
    let mut body = serde_json::Map::new();
    for (key, value) in params {
        body.insert(format!("{key}={value}"), json!(1));
    }
    Ok(Json(Value::Object(body)))
}

async fn delete_session(
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    if !authorized(&headers) {
        return Err(unauthorized());
    }
    if id == 7 {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Session not found"})),
        ))
    }
}

async fn aggregate_progress(Query(params): Query<HashMap<String, String>>) -> Reply {
    let start = params.get("start_date").cloned().unwrap_or_default();
    let location_id: Option<i64> = params.get("location_id").and_then(|v| v.parse().ok());
    Ok(Json(json!([
        {"date": start, "grade": "V4-V6", "location_id": location_id}
    ])))
}

async fn location_stats(Path(id): Path<i64>) -> Reply {
    if id == 3 {
        Ok(Json(json!({
            "total_climbs": 12,
            "grade_distribution": {"V0": 4, "V3": 4, "VB": 1}
        })))
    } else {
        Err((
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Location not found"})),
        ))
    }
}

async fn progress(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> Reply {
    if !authorized(&headers) {
        return Err(unauthorized());
    }
    // echo the received bounds back as the event dates
    let start = params.get("start_date").cloned().unwrap_or_default();
    let end = params.get("end_date").cloned().unwrap_or_default();
    Ok(Json(json!([
        {"date": start, "grade": "V0"},
        {"date": end, "grade": "V0"}
    ])))
}

async fn create_session() -> Reply {
    Err((
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({"detail": [
            {"msg": "Input should be greater than or equal to 1"},
            {"msg": "Field required"}
        ]})),
    ))
}

async fn location(Path(slug): Path<String>) -> Reply {
    match slug.as_str() {
        "brooklyn" => Ok(Json(json!({
            "id": 3, "name": "Brooklyn", "slug": "brooklyn", "created_at": "2024-01-01T00:00:00"
        }))),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Ok(Json(json!({})))
        }
        _ => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Location not found"})),
        )),
    }
}

async fn aggregate(Query(params): Query<HashMap<String, String>>) -> Reply {
    let period = params.get("period").cloned().unwrap_or_default();
    // 0 marks a request without a location filter
    let location_id: i64 = params
        .get("location_id")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    Ok(Json(json!({
        "total_climbs": 5,
        "by_location": [{"location_id": location_id, "name": period, "count": 5}],
        "grade_distribution": {"V3": 2, "VB": 2}
    })))
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/api/auth/me", get(me).patch(update_me))
        .route("/api/stats/user/progress", get(progress))
        .route("/api/stats/user/distribution", get(distribution))
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:id", delete(delete_session))
        .route("/locations/:slug", get(location))
        .route("/stats/aggregate", get(aggregate))
        .route("/stats/aggregate/progress", get(aggregate_progress))
        .route("/stats/location/:id", get(location_stats));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base: &str, store: Arc<MemoryTokenStore>) -> ApiClient {
    ApiClient::new(ApiConfig::new(base), store)
}

#[tokio::test]
async fn test_login_stores_token_and_authenticates_followups() {
    let base = spawn_backend().await;
    let store = Arc::new(MemoryTokenStore::new());
    let api = client(&base, store.clone());

    let err = api.current_user().await.unwrap_err();
    assert!(err.is_unauthorized());

    let creds = LoginCredentials {
        username: "ada".to_string(),
        password: "pw".to_string(),
    };
    let auth = api.login(&creds).await.unwrap();
    assert_eq!(auth.token_type, "bearer");
    assert_eq!(store.token().as_deref(), Some("s3cret"));

    let user = api.current_user().await.unwrap();
    assert_eq!(user.username, "ada");
    assert_eq!(user.home_location_id, Some(2));

    api.logout();
    assert!(api.current_user().await.unwrap_err().is_unauthorized());
}

#[tokio::test]
async fn test_bad_credentials_surface_backend_detail() {
    let base = spawn_backend().await;
    let store = Arc::new(MemoryTokenStore::new());
    let api = client(&base, store.clone());
    let creds = LoginCredentials {
        username: "ada".to_string(),
        password: "nope".to_string(),
    };
    let err = api.login(&creds).await.unwrap_err();
    assert_eq!(err.user_message("Invalid credentials"), "Incorrect username or password");
    assert_eq!(store.token(), None);
}

#[tokio::test]
async fn test_progress_query_carries_week_bounds() {
    let base = spawn_backend().await;
    let api = client(&base, Arc::new(MemoryTokenStore::with_token("s3cret")));
    let mut filter = FilterState::new();
    let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    filter.select_period(Period::Week, today);

    let records = api.user_progress(&filter).await.unwrap();
    assert_eq!(records[0].date, "2024-06-08");
    assert_eq!(records[1].date, "2024-06-15");
}

#[tokio::test]
async fn test_validation_list_is_flattened() {
    let base = spawn_backend().await;
    let api = client(&base, Arc::new(MemoryTokenStore::with_token("s3cret")));
    let mut form = SessionForm::new(chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    form.location_id = 1;
    form.set_completed(0, 1);
    let body = form.validate().unwrap();

    let err = api.create_session(&body).await.unwrap_err();
    assert_eq!(
        err,
        OverhangError::Validation(
            "Input should be greater than or equal to 1, Field required".to_string()
        )
    );
}

#[tokio::test]
async fn test_unknown_slug_is_not_found() {
    let base = spawn_backend().await;
    let api = client(&base, Arc::new(MemoryTokenStore::new()));
    let location = api.location_by_slug("brooklyn").await.unwrap();
    assert_eq!(location.id, 3);

    let err = api.location_by_slug("atlantis").await.unwrap_err();
    assert_eq!(err, OverhangError::NotFound(Some("Location not found".to_string())));
}

#[tokio::test]
async fn test_timeout_fails_without_retry() {
    let base = spawn_backend().await;
    let config = ApiConfig::new(base).with_timeout(Duration::from_millis(200));
    let api = ApiClient::new(config, Arc::new(MemoryTokenStore::new()));
    let err = api.location_by_slug("slow").await.unwrap_err();
    assert_eq!(err, OverhangError::Timeout);
}

#[tokio::test]
async fn test_aggregate_distribution_uses_all_for_custom_range() {
    let base = spawn_backend().await;
    let api = client(&base, Arc::new(MemoryTokenStore::new()));
    let mut filter = FilterState::new();
    filter.select_period(Period::Week, chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    filter.toggle_custom_range();

    let stats = api.aggregate_stats(filter.distribution_period(), None).await.unwrap();
    assert_eq!(stats.by_location[0].name, "all");
    let dist = api.aggregate_distribution(&filter).await.unwrap();
    assert_eq!(dist.get("V3"), Some(2));
}

#[tokio::test]
async fn test_register_posts_json_and_stores_token() {
    let base = spawn_backend().await;
    let store = Arc::new(MemoryTokenStore::new());
    let api = client(&base, store.clone());
    let creds = RegisterCredentials {
        username: "grace".to_string(),
        email: None,
        password: "pw".to_string(),
        home_location_id: Some(3),
    };
    let auth = api.register(&creds).await.unwrap();
    assert_eq!(auth.access_token, "s3cret");
    assert_eq!(store.token().as_deref(), Some("s3cret"));
    assert_eq!(api.current_user().await.unwrap().id, 1);

    let taken = RegisterCredentials {
        username: "ada".to_string(),
        ..creds
    };
    store.clear_token();
    let err = api.register(&taken).await.unwrap_err();
    assert_eq!(err.user_message("Registration failed"), "Username already registered");
    assert_eq!(store.token(), None);
}

#[tokio::test]
async fn test_update_user_patches_only_given_fields() {
    let base = spawn_backend().await;
    let api = client(&base, Arc::new(MemoryTokenStore::with_token("s3cret")));
    let update = UserUpdate {
        home_location_id: Some(5),
        default_grade: None,
    };
    let user = api.update_user(&update).await.unwrap();
    assert_eq!(user.home_location_id, Some(5));
    assert_eq!(user.default_grade, None);

    let update = UserUpdate {
        home_location_id: None,
        default_grade: Some(Grade::V4V6),
    };
    let user = api.update_user(&update).await.unwrap();
    assert_eq!(user.home_location_id, None);
    assert_eq!(user.default_grade, Some(Grade::V4V6));
}

#[tokio::test]
async fn test_user_distribution_forwards_location_and_period() {
    let base = spawn_backend().await;
    let api = client(&base, Arc::new(MemoryTokenStore::with_token("s3cret")));
    let mut filter = FilterState::new();
    filter.select_period(Period::Month, chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    filter.set_location(Some(4));

    let dist = api.user_distribution(&filter).await.unwrap();
    assert_eq!(dist.len(), 2);
    assert_eq!(dist.get("location_id=4"), Some(1));
    assert_eq!(dist.get("period=month"), Some(1));

    filter.set_location(None);
    filter.toggle_custom_range();
    let dist = api.user_distribution(&filter).await.unwrap();
    assert_eq!(dist.len(), 1);
    assert_eq!(dist.get("period=all"), Some(1));
}

#[tokio::test]
async fn test_delete_session() {
    let base = spawn_backend().await;
    let api = client(&base, Arc::new(MemoryTokenStore::with_token("s3cret")));
    api.delete_session(7).await.unwrap();

    let err = api.delete_session(8).await.unwrap_err();
    assert_eq!(err, OverhangError::NotFound(Some("Session not found".to_string())));

    let anonymous = client(&base, Arc::new(MemoryTokenStore::new()));
    assert!(anonymous.delete_session(7).await.unwrap_err().is_unauthorized());
}

#[tokio::test]
async fn test_aggregate_stats_forwards_location() {
    let base = spawn_backend().await;
    let api = client(&base, Arc::new(MemoryTokenStore::new()));
    let stats = api.aggregate_stats(Period::Week, Some(3)).await.unwrap();
    assert_eq!(stats.by_location[0].location_id, 3);
    assert_eq!(stats.by_location[0].name, "week");

    let stats = api.aggregate_stats(Period::All, None).await.unwrap();
    assert_eq!(stats.by_location[0].location_id, 0);
}

#[tokio::test]
async fn test_aggregate_progress_needs_no_token() {
    let base = spawn_backend().await;
    let api = client(&base, Arc::new(MemoryTokenStore::new()));
    let mut filter = FilterState::new();
    filter.select_period(Period::Week, chrono::NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    filter.set_location(Some(2));

    let records = api.aggregate_progress(&filter).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, "2024-06-08");
    assert_eq!(records[0].grade, "V4-V6");
    assert_eq!(records[0].location_id, Some(2));
}

#[tokio::test]
async fn test_location_stats() {
    let base = spawn_backend().await;
    let api = client(&base, Arc::new(MemoryTokenStore::new()));
    let stats = api.location_stats(3).await.unwrap();
    assert_eq!(stats.total_climbs, 12);
    assert_eq!(stats.grade_distribution.get("V0"), Some(4));
    assert_eq!(stats.grade_distribution.len(), 3);

    let err = api.location_stats(99).await.unwrap_err();
    assert_eq!(err, OverhangError::NotFound(Some("Location not found".to_string())));
}
