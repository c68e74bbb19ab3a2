//! Runs `HttpRecordStore` against a local axum server that emulates the mock
//! API's `/userrecord/` collection.

use std::sync::{Arc, Mutex};

use api::{ApiConfig, HttpRecordStore};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use store::{
    Age, Field, RecordBody, RecordKey, RecordListController, RecordStore, RecordsConfig,
    StoreError, TagSet,
};

#[derive(Default)]
struct Collection {
    rows: Vec<Value>,
    next_id: u64,
    log: Vec<String>,
}

type Shared = Arc<Mutex<Collection>>;

async fn list(State(db): State<Shared>) -> Json<Vec<Value>> {
    let mut db = db.lock().unwrap();
    db.log.push("GET".to_string());
    Json(db.rows.clone())
}

async fn create(State(db): State<Shared>, Json(mut body): Json<Value>) -> (StatusCode, Json<Value>) {
    let mut db = db.lock().unwrap();
    db.next_id += 1;
    let id = db.next_id.to_string();
    db.log.push(format!("POST {body}"));
    body["id"] = json!(id);
    db.rows.push(body.clone());
    (StatusCode::CREATED, Json(body))
}

async fn update(
    State(db): State<Shared>,
    Path(id): Path<String>,
    Json(mut body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut db = db.lock().unwrap();
    db.log.push(format!("PUT {id}"));
    let row = db
        .rows
        .iter_mut()
        .find(|r| r["id"] == json!(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    body["id"] = json!(id);
    *row = body.clone();
    Ok(Json(body))
}

async fn remove(State(db): State<Shared>, Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    let mut db = db.lock().unwrap();
    db.log.push(format!("DELETE {id}"));
    let index = db
        .rows
        .iter()
        .position(|r| r["id"] == json!(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(db.rows.remove(index)))
}

async fn spawn_server(db: Shared) -> ApiConfig {
    let router = Router::new()
        .route("/api/v1/userrecord/", get(list).post(create))
        .route("/api/v1/userrecord/{id}", axum::routing::put(update).delete(remove))
        .route(
            "/broken/userrecord/",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route(
            "/garbled/userrecord/",
            get(|| async { Json(json!([{"id": "1", "firstName": 5}])) }),
        )
        .with_state(db);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ApiConfig::new(&format!("http://{addr}/api/v1")).unwrap()
}

fn ada() -> RecordBody {
    RecordBody {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        age: Age(36.0),
        address: "London".into(),
        tags: TagSet::from_iter(["math"]),
    }
}

#[tokio::test]
async fn crud_round_trip_against_collection() {
    let db = Shared::default();
    let config = spawn_server(db.clone()).await;
    let store = HttpRecordStore::new(&config).unwrap();

    assert!(store.list().await.unwrap().is_empty());

    let created = store.create(&ada()).await.unwrap();
    assert_eq!(created.id, RecordKey::new("1"));
    assert_eq!(created.body(), ada());

    let mut changed = ada();
    changed.address = "Marylebone".into();
    let updated = store.update(&created.id, &changed).await.unwrap();
    assert_eq!(updated.address, "Marylebone");

    let rows = store.list().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].address, "Marylebone");

    store.delete(&created.id).await.unwrap();
    assert!(store.list().await.unwrap().is_empty());

    let log = db.lock().unwrap().log.clone();
    assert_eq!(log[0], "GET");
    assert!(log[1].starts_with("POST "));
    assert_eq!(&log[2..], ["PUT 1", "GET", "DELETE 1", "GET"]);
}

#[tokio::test]
async fn create_sends_camel_case_body_with_numeric_age() {
    let db = Shared::default();
    let config = spawn_server(db.clone()).await;
    let store = HttpRecordStore::new(&config).unwrap();

    store.create(&ada()).await.unwrap();

    let row = db.lock().unwrap().rows[0].clone();
    assert_eq!(
        row,
        json!({
            "id": "1",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "age": 36,
            "address": "London",
            "tags": ["math"],
        })
    );
}

#[tokio::test]
async fn missing_key_maps_to_not_found() {
    let config = spawn_server(Shared::default()).await;
    let store = HttpRecordStore::new(&config).unwrap();

    let key = RecordKey::new("404");
    assert_eq!(store.delete(&key).await, Err(StoreError::NotFound(key.clone())));
    assert_eq!(store.update(&key, &ada()).await, Err(StoreError::NotFound(key)));
}

#[tokio::test]
async fn server_errors_and_bad_payloads() {
    let config = spawn_server(Shared::default()).await;
    let origin = config.base_url.origin().ascii_serialization();

    let broken = HttpRecordStore::new(&ApiConfig::new(&format!("{origin}/broken")).unwrap()).unwrap();
    assert_eq!(
        broken.list().await,
        Err(StoreError::Status {
            status: 500,
            message: "boom".to_string()
        })
    );

    let garbled = HttpRecordStore::new(&ApiConfig::new(&format!("{origin}/garbled")).unwrap()).unwrap();
    assert!(matches!(garbled.list().await, Err(StoreError::Decode(_))));
}

#[tokio::test]
async fn unreachable_server_is_unavailable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ApiConfig::new(&format!("http://{addr}/api/v1")).unwrap();
    let store = HttpRecordStore::new(&config).unwrap();
    assert!(matches!(store.list().await, Err(StoreError::Unavailable(_))));
}

#[tokio::test]
async fn controller_drives_http_store() {
    let db = Shared::default();
    let config = spawn_server(db.clone()).await;
    let store = HttpRecordStore::new(&config).unwrap();
    let mut list = RecordListController::new(store, &RecordsConfig::default());

    list.load_records().await;
    list.open_create();
    {
        let form = list.state_mut().form_mut();
        form.set_value(Field::FirstName, "Ada");
        form.set_value(Field::LastName, "Lovelace");
        form.set_value(Field::Age, "36");
        form.set_value(Field::Address, "London");
        form.tags_mut().add_tag("math");
    }
    assert_eq!(list.confirm_modal().await, Ok(true));
    assert!(!list.state().modal_open());
    assert_eq!(list.state().records().len(), 1);
    assert_eq!(list.state().records()[0].body(), ada());

    let row = list.state().records()[0].clone();
    list.delete_record(&row).await.unwrap();
    assert!(list.state().records().is_empty());
    assert!(db.lock().unwrap().rows.is_empty());
}
