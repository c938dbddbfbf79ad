use super::*;
use crate::models::{HabitUpdate, NewHabit, NewHabitEntry};
use axum::extract::State;
use axum::http::{HeaderMap as AxumHeaders, Method as AxumMethod, StatusCode as AxumStatus, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::json;
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    target: String,
    body: String,
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Recorded>>>);

impl Recorder {
    fn last(&self) -> Recorded {
        self.0.lock().unwrap().last().cloned().expect("no request recorded")
    }

    fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

fn habit_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "habit_type": "duration",
        "weight": 1.0,
        "target_days_per_week": 5,
        "nonzero_threshold": 0.0,
        "goal_threshold": 20.0,
        "stretch_threshold": 45.0,
        "zero_threshold": null,
        "compound_rate": 1.15,
        "decay_rate": 0.9,
        "forgiveness_days": 2,
        "is_inverted": false,
        "is_active": true,
        "created_at": "2024-03-01T08:00:00"
    })
}

async fn backend(
    State(recorder): State<Recorder>,
    method: AxumMethod,
    uri: Uri,
    headers: AxumHeaders,
    body: String,
) -> Response {
    recorder.0.lock().unwrap().push(Recorded {
        method: method.to_string(),
        target: uri
            .path_and_query()
            .map(|pq| pq.to_string())
            .unwrap_or_default(),
        body: body.clone(),
    });

    match (method.as_str(), uri.path()) {
        ("GET", "/api/habits/") => Json(json!([habit_json(1, "Meditate")])).into_response(),
        ("POST", "/api/habits/") => {
            let sent: Value = serde_json::from_str(&body).unwrap_or_default();
            let name = sent["name"].as_str().unwrap_or_default().to_string();
            Json(habit_json(2, &name)).into_response()
        }
        ("PUT", "/api/habits/99") => (
            AxumStatus::NOT_FOUND,
            Json(json!({"detail": "Habit not found"})),
        )
            .into_response(),
        ("PUT", "/api/habits/1") => Json(habit_json(1, "Meditate")).into_response(),
        ("DELETE", "/api/habits/1") => {
            Json(json!({"message": "Habit deactivated successfully"})).into_response()
        }
        ("GET", "/api/scores/daily") | ("GET", "/api/habits/entries") => {
            Json(json!([])).into_response()
        }
        ("POST", "/api/habits/entries") => Json(json!({
            "id": 5,
            "habit_id": 3,
            "date": "2024-05-02",
            "value": 1.5,
            "created_at": "2024-05-02T09:00:00"
        }))
        .into_response(),
        ("POST", "/api/habits/entries/batch") => {
            Json(json!({"message": "Entries saved"})).into_response()
        }
        ("POST", "/api/scores/recalculate") => {
            Json(json!({"message": "Scores recalculated"})).into_response()
        }
        ("GET", path)
            if path.starts_with("/api/habits/entries/")
                || path.starts_with("/api/scores/habits")
                || path == "/api/whoop/data" =>
        {
            Json(json!([])).into_response()
        }
        ("GET", "/api/scores/summary")
        | ("GET", "/api/scores/trends")
        | ("GET", "/api/notifications/weekly-progress")
        | ("GET", "/api/whoop/status") => Json(json!({})).into_response(),
        ("GET", "/api/auth/whoop/status") => {
            Json(json!({"connected": true, "has_refresh_token": false})).into_response()
        }
        ("POST", "/api/whoop/sync") => Json(json!({"synced_dates": [], "received": body}))
            .into_response(),
        ("GET", "/api/auth/whoop") => {
            Json(json!({"auth_url": "https://api.prod.whoop.com/oauth/oauth2/auth?x=1"}))
                .into_response()
        }
        ("GET", "/api/plain") => "plain body".into_response(),
        ("GET", "/api/content-type") => {
            let ct = headers
                .get("content-type")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            Json(json!({ "content_type": ct })).into_response()
        }
        ("GET", "/api/boom") => {
            (AxumStatus::INTERNAL_SERVER_ERROR, "<html>oops</html>").into_response()
        }
        ("GET", "/api/empty-detail") => {
            (AxumStatus::BAD_REQUEST, Json(json!({"detail": ""}))).into_response()
        }
        ("GET", "/api/zero-detail") => {
            (AxumStatus::BAD_REQUEST, Json(json!({"detail": 0}))).into_response()
        }
        ("GET", "/api/validation") => (
            AxumStatus::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": [{"loc": ["body", "name"], "msg": "field required"}]})),
        )
            .into_response(),
        _ => (AxumStatus::NOT_FOUND, Json(json!({"detail": "Not Found"}))).into_response(),
    }
}

async fn spawn_backend() -> (ApiClient, Recorder) {
    let recorder = Recorder::default();
    let app = Router::new()
        .fallback(backend)
        .with_state(recorder.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let client = ApiClient::new(ClientConfig::new(format!("http://{}/api", addr))).unwrap();
    (client, recorder)
}

#[tokio::test]
async fn json_payload_returned_unchanged() {
    let (client, _) = spawn_backend().await;
    let payload = client.send(ApiRequest::get("/habits/")).await.unwrap();
    assert_eq!(payload, Payload::Json(json!([habit_json(1, "Meditate")])));
}

#[tokio::test]
async fn text_payload_returned_raw() {
    let (client, _) = spawn_backend().await;
    let payload = client.send(ApiRequest::get("/plain")).await.unwrap();
    assert_eq!(payload.into_text().as_deref(), Some("plain body"));
}

#[tokio::test]
async fn json_content_type_sent_by_default() {
    let (client, _) = spawn_backend().await;
    let payload = client.send(ApiRequest::get("/content-type")).await.unwrap();
    assert_eq!(payload.into_json().unwrap()["content_type"], "application/json");
}

#[tokio::test]
async fn caller_content_type_overrides_default() {
    let (client, _) = spawn_backend().await;
    let req = ApiRequest::get("/content-type")
        .header(CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    let payload = client.send(req).await.unwrap();
    assert_eq!(payload.into_json().unwrap()["content_type"], "text/csv");
}

#[tokio::test]
async fn detail_becomes_error_message() {
    let (client, _) = spawn_backend().await;
    let err = client
        .update_habit(99, &HabitUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), 404);
    assert_eq!(err.message(), "Habit not found");
    assert!(matches!(err, ClientError::Api { .. }));
}

#[tokio::test]
async fn unparseable_error_body_falls_back_to_status() {
    let (client, _) = spawn_backend().await;
    let err = client.send(ApiRequest::get("/boom")).await.unwrap_err();
    assert_eq!(err.status(), 500);
    assert_eq!(err.message(), "HTTP 500");
}

#[tokio::test]
async fn empty_detail_falls_back_to_status() {
    let (client, _) = spawn_backend().await;
    let err = client.send(ApiRequest::get("/empty-detail")).await.unwrap_err();
    assert_eq!(err.message(), "HTTP 400");
}

#[tokio::test]
async fn structured_detail_is_rendered() {
    let (client, _) = spawn_backend().await;
    let err = client.send(ApiRequest::get("/validation")).await.unwrap_err();
    assert_eq!(err.status(), 422);
    assert!(err.message().contains("field required"));
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(ClientConfig::new(format!("http://{}/api", addr))).unwrap();
    let err = client.get_habits().await.unwrap_err();
    assert_eq!(err.status(), 0);
    assert!(err.is_transport());
    assert!(err.message().starts_with("Network error: "));
}

#[tokio::test]
async fn typed_endpoints_decode() {
    let (client, recorder) = spawn_backend().await;
    let habits = client.get_habits().await.unwrap();
    assert_eq!(habits.len(), 1);
    assert_eq!(habits[0].name, "Meditate");

    let created = client
        .create_habit(&NewHabit::new("Stretch", "duration", 10.0, 20.0))
        .await
        .unwrap();
    assert_eq!(created.name, "Stretch");
    let last = recorder.last();
    assert_eq!(last.method, "POST");
    let sent: Value = serde_json::from_str(&last.body).unwrap();
    assert_eq!(sent["forgiveness_days"], 2);
}

#[tokio::test]
async fn text_response_fails_typed_decode() {
    let (client, _) = spawn_backend().await;
    let err = client
        .send_json::<Value>(ApiRequest::get("/plain"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Decode { .. }));
    assert_eq!(err.status(), 0);
}

#[tokio::test]
async fn delete_uses_habit_path() {
    let (client, recorder) = spawn_backend().await;
    let msg = client.delete_habit(1).await.unwrap();
    assert_eq!(msg.message, "Habit deactivated successfully");
    let last = recorder.last();
    assert_eq!(last.method, "DELETE");
    assert_eq!(last.target, "/api/habits/1");
}

#[tokio::test]
async fn daily_scores_query_prefers_explicit_range() {
    let (client, recorder) = spawn_backend().await;
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    client
        .get_daily_scores(&DateWindow::range(&start, &end))
        .await
        .unwrap();
    assert_eq!(
        recorder.last().target,
        "/api/scores/daily?start_date=2024-01-01&end_date=2024-01-31"
    );

    client.get_daily_scores(&DateWindow::default()).await.unwrap();
    assert_eq!(recorder.last().target, "/api/scores/daily?days=30");
}

#[tokio::test]
async fn entries_without_date_send_no_query() {
    let (client, recorder) = spawn_backend().await;
    client.get_habit_entries(None).await.unwrap();
    assert_eq!(recorder.last().target, "/api/habits/entries");

    client
        .get_habit_entries(NaiveDate::from_ymd_opt(2024, 5, 2))
        .await
        .unwrap();
    assert_eq!(recorder.last().target, "/api/habits/entries?entry_date=2024-05-02");
}

#[tokio::test]
async fn whoop_sync_sends_days_in_body() {
    let (client, recorder) = spawn_backend().await;
    client.sync_whoop_data(14).await.unwrap();
    let last = recorder.last();
    assert_eq!(last.target, "/api/whoop/sync");
    assert_eq!(serde_json::from_str::<Value>(&last.body).unwrap(), json!({"days": 14}));

    let url = client.connect_whoop().await.unwrap();
    assert!(url.auth_url.starts_with("https://"));
}

#[tokio::test]
async fn one_network_call_per_request() {
    let (client, recorder) = spawn_backend().await;
    let _ = client.send(ApiRequest::get("/boom")).await;
    let _ = client.send(ApiRequest::get("/plain")).await;
    assert_eq!(recorder.count(), 2);
}

#[tokio::test]
async fn zero_detail_falls_back_to_status() {
    let (client, _) = spawn_backend().await;
    let err = client.send(ApiRequest::get("/zero-detail")).await.unwrap_err();
    assert_eq!(err.status(), 400);
    assert_eq!(err.message(), "HTTP 400");
    assert_eq!(error_message(StatusCode::BAD_REQUEST, r#"{"detail": 0.0}"#), "HTTP 400");
    assert_eq!(error_message(StatusCode::BAD_REQUEST, r#"{"detail": 7}"#), "7");
}

#[test]
fn unencodable_body_is_encode_error() {
    // JSON object keys must be strings
    let mut body = BTreeMap::new();
    body.insert((1, 2), "pair");

    let err = ApiRequest::post("/scores/recalculate")
        .json(&body)
        .unwrap_err();
    assert!(matches!(err, ClientError::Encode { .. }));
    assert_eq!(err.status(), 0);
    assert!(err.to_string().starts_with("failed to encode request body: "));
    assert!(!err.is_transport());
}

type Call<'a> = Pin<Box<dyn Future<Output = Result<()>> + 'a>>;

fn call<'a, T: 'a>(fut: impl Future<Output = Result<T>> + 'a) -> Call<'a> {
    Box::pin(async move { fut.await.map(|_| ()) })
}

#[tokio::test]
async fn every_endpoint_hits_its_route() {
    let (client, recorder) = spawn_backend().await;
    let day = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
    let new_habit = NewHabit::new("Stretch", "duration", 10.0, 20.0);
    let update = HabitUpdate {
        name: Some("Read".into()),
        ..Default::default()
    };
    let entry = NewHabitEntry {
        habit_id: 3,
        date: day,
        value: 1.5,
    };
    let batch = vec![
        entry.clone(),
        NewHabitEntry {
            habit_id: 4,
            date: day,
            value: 0.0,
        },
    ];
    let range = DateWindow::range(&start, &end);
    let default_window = DateWindow::default();

    // (method, target, JSON body or None for an empty body, call)
    let cases: Vec<(&str, &str, Option<Value>, Call<'_>)> = vec![
        ("GET", "/api/habits/", None, call(client.get_habits())),
        (
            "POST",
            "/api/habits/",
            Some(serde_json::to_value(&new_habit).unwrap()),
            call(client.create_habit(&new_habit)),
        ),
        (
            "PUT",
            "/api/habits/1",
            Some(json!({"name": "Read"})),
            call(client.update_habit(1, &update)),
        ),
        ("DELETE", "/api/habits/1", None, call(client.delete_habit(1))),
        (
            "GET",
            "/api/habits/entries?entry_date=2024-05-02",
            None,
            call(client.get_habit_entries(Some(day))),
        ),
        (
            "POST",
            "/api/habits/entries",
            Some(json!({"habit_id": 3, "date": "2024-05-02", "value": 1.5})),
            call(client.create_habit_entry(&entry)),
        ),
        (
            "POST",
            "/api/habits/entries/batch",
            Some(json!([
                {"habit_id": 3, "date": "2024-05-02", "value": 1.5},
                {"habit_id": 4, "date": "2024-05-02", "value": 0.0}
            ])),
            call(client.create_habit_entries_batch(&batch)),
        ),
        (
            "GET",
            "/api/habits/entries/3?days=7",
            None,
            call(client.get_habit_entries_by_id(3, 7)),
        ),
        (
            "GET",
            "/api/scores/daily?start_date=2024-01-01&end_date=2024-01-07",
            None,
            call(client.get_daily_scores(&range)),
        ),
        (
            "GET",
            "/api/scores/habits/3?days=14",
            None,
            call(client.get_habit_performance(3, 14)),
        ),
        (
            "POST",
            "/api/scores/recalculate",
            Some(json!({})),
            call(client.recalculate_scores(None, None)),
        ),
        (
            "POST",
            "/api/scores/recalculate",
            Some(json!({"start_date": "2024-01-01"})),
            call(client.recalculate_scores(Some(start), None)),
        ),
        (
            "POST",
            "/api/scores/recalculate",
            Some(json!({"start_date": "2024-01-01", "end_date": "2024-01-07"})),
            call(client.recalculate_scores(Some(start), Some(end))),
        ),
        ("GET", "/api/scores/summary", None, call(client.get_scores_summary())),
        (
            "GET",
            "/api/scores/habits?target_date=2024-05-02",
            None,
            call(client.get_all_habit_scores(Some(day))),
        ),
        ("GET", "/api/scores/habits", None, call(client.get_all_habit_scores(None))),
        ("GET", "/api/scores/trends?days=30", None, call(client.get_score_trends(30))),
        (
            "GET",
            "/api/notifications/weekly-progress",
            None,
            call(client.get_weekly_progress()),
        ),
        ("GET", "/api/auth/whoop", None, call(client.connect_whoop())),
        ("GET", "/api/auth/whoop/status", None, call(client.check_whoop_status())),
        ("POST", "/api/whoop/sync", Some(json!({"days": 7})), call(client.sync_whoop_data(7))),
        (
            "GET",
            "/api/whoop/data?start_date=2024-01-01&end_date=2024-01-07",
            None,
            call(client.get_whoop_data(&range)),
        ),
        (
            "GET",
            "/api/whoop/data?days=30",
            None,
            call(client.get_whoop_data(&default_window)),
        ),
        ("GET", "/api/whoop/status", None, call(client.get_whoop_sync_status())),
    ];

    let total = cases.len();
    for (method, target, body, request) in cases {
        if let Err(err) = request.await {
            panic!("{} {} failed: {}", method, target, err);
        }
        let last = recorder.last();
        assert_eq!(last.method, method, "{}", target);
        assert_eq!(last.target, target);
        match body {
            Some(expected) => {
                let sent: Value = serde_json::from_str(&last.body).unwrap();
                assert_eq!(sent, expected, "{} {}", method, target);
            }
            None => assert!(last.body.is_empty(), "{} {} sent a body", method, target),
        }
    }
    assert_eq!(recorder.count(), total);
}
