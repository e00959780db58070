//! Integration tests for hosted-store against a local fake PostgREST server.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use hosted_store::{HostedConfig, HostedStore};
use journal_core::{EntryDraft, EntryId, JournalStore, StoreError};
use serde_json::{json, Value};

const API_KEY: &str = "test-anon-key";

#[derive(Clone, Default)]
struct FakeTable {
    rows: Arc<Mutex<Vec<Value>>>,
    next_id: Arc<AtomicI64>,
}

fn unauthorized(headers: &HeaderMap) -> Option<Response> {
    let key_ok = headers.get("apikey").and_then(|v| v.to_str().ok()) == Some(API_KEY);
    let bearer = format!("Bearer {}", API_KEY);
    let bearer_ok =
        headers.get("authorization").and_then(|v| v.to_str().ok()) == Some(bearer.as_str());

    if key_ok && bearer_ok {
        None
    } else {
        let body = json!({"message": "Invalid API key", "details": null});
        Some((StatusCode::UNAUTHORIZED, Json(body)).into_response())
    }
}

fn id_filter(params: &HashMap<String, String>) -> Option<i64> {
    params.get("id")?.strip_prefix("eq.")?.parse().ok()
}

async fn list(
    State(table): State<FakeTable>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(response) = unauthorized(&headers) {
        return response;
    }
    assert_eq!(params.get("order").map(String::as_str), Some("created_at.desc"));

    let rows = table.rows.lock().unwrap();
    let newest_first: Vec<Value> = rows.iter().rev().cloned().collect();
    Json(newest_first).into_response()
}

async fn insert(
    State(table): State<FakeTable>,
    headers: HeaderMap,
    Json(body): Json<Vec<Value>>,
) -> Response {
    if let Some(response) = unauthorized(&headers) {
        return response;
    }
    assert_eq!(
        headers.get("prefer").and_then(|v| v.to_str().ok()),
        Some("return=representation")
    );

    let mut inserted = Vec::new();
    let mut rows = table.rows.lock().unwrap();
    for mut row in body {
        if row["title"].as_str().unwrap_or_default().is_empty() {
            let body = json!({"message": "null value in column \"title\""});
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
        let id = table.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        row["id"] = json!(id);
        row["created_at"] = json!(format!("2026-10-18T09:{:02}:00.123456+00:00", id));
        rows.push(row.clone());
        inserted.push(row);
    }

    (StatusCode::CREATED, Json(inserted)).into_response()
}

async fn update(
    State(table): State<FakeTable>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> Response {
    if let Some(response) = unauthorized(&headers) {
        return response;
    }

    let id = id_filter(&params);
    let mut rows = table.rows.lock().unwrap();
    for row in rows.iter_mut().filter(|row| row["id"].as_i64() == id) {
        for field in ["title", "content", "summary"] {
            row[field] = body[field].clone();
        }
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn remove(
    State(table): State<FakeTable>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Some(response) = unauthorized(&headers) {
        return response;
    }

    let id = id_filter(&params);
    table.rows.lock().unwrap().retain(|row| row["id"].as_i64() != id);
    StatusCode::NO_CONTENT.into_response()
}

async fn spawn_fake() -> (String, FakeTable) {
    let table = FakeTable::default();
    let app = Router::new()
        .route(
            "/rest/v1/notes",
            get(list).post(insert).patch(update).delete(remove),
        )
        .with_state(table.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), table)
}

async fn store() -> (HostedStore, FakeTable) {
    let (url, table) = spawn_fake().await;
    let store = HostedStore::new(HostedConfig::new(url, API_KEY)).unwrap();
    (store, table)
}

#[tokio::test]
async fn test_insert_returns_server_assigned_fields() {
    let (store, _table) = store().await;
    let draft = EntryDraft::from_form("btc/usdt", "Breakout above weekly high", 60).unwrap();

    let entry = store.insert(&draft).await.unwrap();
    assert_eq!(entry.id, EntryId::from("1"));
    assert_eq!(entry.title, "BTC/USDT");
    assert_eq!(entry.summary, "Breakout above weekly high");
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let (store, _table) = store().await;
    for title in ["eth", "sol", "aapl"] {
        let draft = EntryDraft::from_form(title, "plan", 60).unwrap();
        store.insert(&draft).await.unwrap();
    }

    let entries = store.list().await.unwrap();
    let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["AAPL", "SOL", "ETH"]);
    assert!(entries[0].created_at > entries[1].created_at);
}

#[tokio::test]
async fn test_update_by_id() {
    let (store, _table) = store().await;
    let created = store
        .insert(&EntryDraft::from_form("eth", "first idea", 60).unwrap())
        .await
        .unwrap();

    let edited = EntryDraft::from_form("eth", "second idea", 60).unwrap();
    store.update(&created.id, &edited).await.unwrap();

    let entries = store.list().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, created.id);
    assert_eq!(entries[0].content, "second idea");
    assert_eq!(entries[0].created_at, created.created_at);
}

#[tokio::test]
async fn test_delete_missing_id_is_noop() {
    let (store, table) = store().await;
    store
        .insert(&EntryDraft::from_form("keep", "me", 60).unwrap())
        .await
        .unwrap();

    store.delete(&EntryId::from("999")).await.unwrap();
    assert_eq!(table.rows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_bad_key_surfaces_backend_error() {
    let (url, _table) = spawn_fake().await;
    let store = HostedStore::new(HostedConfig::new(url, "wrong-key")).unwrap();

    match store.list().await {
        Err(StoreError::Backend { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid API key");
        }
        other => panic!("expected backend error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = HostedStore::new(HostedConfig::new(format!("http://{}", addr), API_KEY)).unwrap();
    assert!(matches!(store.list().await, Err(StoreError::Transport(_))));
}
