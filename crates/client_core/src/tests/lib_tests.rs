use super::*;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Clone, Default)]
struct UsersServerState {
    users: Arc<Mutex<Vec<UserRecord>>>,
    next_id: Arc<Mutex<i64>>,
}

impl UsersServerState {
    async fn seed(&self, records: Vec<UserRecord>) {
        let highest = records.iter().map(|record| record.id.0).max().unwrap_or(0);
        *self.next_id.lock().await = highest;
        *self.users.lock().await = records;
    }
}

async fn handle_list(State(state): State<UsersServerState>) -> Json<Vec<UserRecord>> {
    Json(state.users.lock().await.clone())
}

async fn handle_create(
    State(state): State<UsersServerState>,
    Json(draft): Json<UserDraft>,
) -> Json<UserRecord> {
    let mut next_id = state.next_id.lock().await;
    *next_id += 1;
    let record = UserRecord {
        id: UserId(*next_id),
        full_name: draft.full_name,
        email: draft.email,
        phone_number: draft.phone_number,
    };
    state.users.lock().await.push(record.clone());
    Json(record)
}

async fn handle_fetch(
    State(state): State<UsersServerState>,
    Path(id): Path<i64>,
) -> Result<Json<UserRecord>, StatusCode> {
    state
        .users
        .lock()
        .await
        .iter()
        .find(|record| record.id.0 == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn handle_update(
    State(state): State<UsersServerState>,
    Path(id): Path<i64>,
    Json(draft): Json<UserDraft>,
) -> Result<Json<UserRecord>, StatusCode> {
    let mut users = state.users.lock().await;
    let record = users
        .iter_mut()
        .find(|record| record.id.0 == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    record.full_name = draft.full_name;
    record.email = draft.email;
    record.phone_number = draft.phone_number;
    Ok(Json(record.clone()))
}

async fn handle_delete(
    State(state): State<UsersServerState>,
    Path(id): Path<i64>,
) -> StatusCode {
    let mut users = state.users.lock().await;
    let before = users.len();
    users.retain(|record| record.id.0 != id);
    if users.len() < before {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn spawn_users_server() -> (String, UsersServerState) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let state = UsersServerState::default();
    let app = Router::new()
        .route("/api/users", get(handle_list).post(handle_create))
        .route(
            "/api/users/:id",
            get(handle_fetch).put(handle_update).delete(handle_delete),
        )
        .with_state(state.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}/api"), state)
}

async fn spawn_failing_server() -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR });
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}/api")
}

fn sample_record(id: i64, full_name: &str) -> UserRecord {
    UserRecord {
        id: UserId(id),
        full_name: full_name.to_string(),
        email: format!("{}@correo.com", full_name.to_lowercase().replace(' ', ".")),
        phone_number: Some("123456789".to_string()),
    }
}

fn sample_draft(full_name: &str) -> UserDraft {
    UserDraft {
        full_name: full_name.to_string(),
        email: format!("{}@correo.com", full_name.to_lowercase().replace(' ', ".")),
        phone_number: None,
    }
}

#[tokio::test]
async fn lists_users_in_server_order() {
    let (base_url, state) = spawn_users_server().await;
    state
        .seed(vec![
            sample_record(1, "Ana García"),
            sample_record(2, "Juan Pérez"),
        ])
        .await;

    let directory = RestUserDirectory::new(base_url);
    let users = directory.list_users().await.expect("list");

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, UserId(1));
    assert_eq!(users[1].full_name, "Juan Pérez");
}

#[tokio::test]
async fn create_then_reload_includes_new_record_exactly_once() {
    let (base_url, _state) = spawn_users_server().await;
    let directory = RestUserDirectory::new(base_url);

    let created = directory
        .create_user(&sample_draft("Ana García"))
        .await
        .expect("create");
    assert_eq!(created.full_name, "Ana García");

    let users = directory.list_users().await.expect("list");
    let matches = users.iter().filter(|user| user.id == created.id).count();
    assert_eq!(matches, 1);
}

#[tokio::test]
async fn fetch_returns_single_record_by_id() {
    let (base_url, state) = spawn_users_server().await;
    state.seed(vec![sample_record(5, "Ana García")]).await;

    let directory = RestUserDirectory::new(base_url);
    let user = directory.fetch_user(UserId(5)).await.expect("fetch");

    assert_eq!(user.full_name, "Ana García");
}

#[tokio::test]
async fn fetch_of_missing_user_fails_with_not_found_status() {
    let (base_url, _state) = spawn_users_server().await;
    let directory = RestUserDirectory::new(base_url);

    let err = directory
        .fetch_user(UserId(99))
        .await
        .expect_err("must fail");
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn update_changes_only_the_target_record() {
    let (base_url, state) = spawn_users_server().await;
    state
        .seed(vec![
            sample_record(1, "Ana García"),
            sample_record(2, "Juan Pérez"),
        ])
        .await;

    let directory = RestUserDirectory::new(base_url);
    let updated = directory
        .update_user(
            UserId(2),
            &UserDraft {
                full_name: "Juan Pérez Soto".to_string(),
                email: "juan.soto@correo.com".to_string(),
                phone_number: Some("987654321".to_string()),
            },
        )
        .await
        .expect("update");
    assert_eq!(updated.id, UserId(2));
    assert_eq!(updated.full_name, "Juan Pérez Soto");

    let users = directory.list_users().await.expect("list");
    assert_eq!(users[0], sample_record(1, "Ana García"));
    assert_eq!(users[1].phone_number.as_deref(), Some("987654321"));
}

#[tokio::test]
async fn delete_removes_record_and_reports_success() {
    let (base_url, state) = spawn_users_server().await;
    state
        .seed(vec![
            sample_record(1, "Ana García"),
            sample_record(2, "Juan Pérez"),
        ])
        .await;

    let directory = RestUserDirectory::new(base_url);
    let deleted = directory.delete_user(UserId(1)).await.expect("delete");
    assert!(deleted);

    let users = directory.list_users().await.expect("list");
    assert!(users.iter().all(|user| user.id != UserId(1)));
}

#[tokio::test]
async fn delete_of_missing_user_fails() {
    let (base_url, _state) = spawn_users_server().await;
    let directory = RestUserDirectory::new(base_url);

    let err = directory
        .delete_user(UserId(42))
        .await
        .expect_err("must fail");
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn server_error_collapses_to_the_single_request_error_kind() {
    let base_url = spawn_failing_server().await;
    let directory = RestUserDirectory::new(base_url);

    let err = directory.list_users().await.expect_err("must fail");
    assert_eq!(err.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
    assert!(err.to_string().starts_with("request failed"));
}

#[tokio::test]
async fn base_url_with_trailing_slash_is_tolerated() {
    let (base_url, state) = spawn_users_server().await;
    state.seed(vec![sample_record(1, "Ana García")]).await;

    let directory = RestUserDirectory::new(format!("{base_url}/"));
    let users = directory.list_users().await.expect("list");
    assert_eq!(users.len(), 1);
}
