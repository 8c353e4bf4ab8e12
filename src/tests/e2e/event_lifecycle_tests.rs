// End to end tests over the full REST router with an in memory store.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::events::coordinator::OrphanPolicy;
use crate::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use crate::shell::http::router;
use crate::shell::state::AppState;

fn app(policy: OrphanPolicy) -> Router {
    router(AppState::new(Arc::new(InMemoryDocumentStore::new()), policy))
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn register_organizer(app: &Router, first_name: &str) -> String {
    let (status, organizer) = call(
        app,
        "POST",
        "/organizers",
        Some(json!({
            "first_name": first_name,
            "last_name": "Example",
            "email": format!("{}@example.com", first_name.to_lowercase()),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    organizer["id"].as_str().unwrap().to_string()
}

async fn organizer_events(app: &Router, id: &str) -> Value {
    let (status, organizer) = call(app, "GET", &format!("/organizers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    organizer["events"].clone()
}

#[tokio::test]
async fn it_should_link_on_create_and_unlink_on_delete() {
    let app = app(OrphanPolicy::Retain);
    let org = register_organizer(&app, "Ada").await;
    assert_eq!(organizer_events(&app, &org).await, json!([]));

    let (status, event) = call(
        &app,
        "POST",
        "/events",
        Some(json!({ "organizer_id": org, "title": "Launch" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let event_id = event["id"].as_str().unwrap().to_string();
    assert_eq!(
        event,
        json!({ "id": event_id, "organizer_id": org, "title": "Launch" })
    );
    assert_eq!(organizer_events(&app, &org).await, json!([event_id]));

    let (status, _) = call(&app, "DELETE", &format!("/events/{event_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(organizer_events(&app, &org).await, json!([]));

    let (status, body) = call(&app, "DELETE", &format!("/events/{event_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], json!("Event not found"));
}

#[tokio::test]
async fn it_should_round_trip_the_payload_fields() {
    let app = app(OrphanPolicy::Retain);
    let org = register_organizer(&app, "Ada").await;
    let payload = json!({
        "organizer_id": org,
        "title": "Launch",
        "date": "2026-11-02",
        "tags": ["release", "public"],
        "capacity": 120,
    });

    let (_, created) = call(&app, "POST", "/events", Some(payload.clone())).await;
    let id = created["id"].as_str().unwrap();
    let (status, fetched) = call(&app, "GET", &format!("/events/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    for (key, value) in payload.as_object().unwrap() {
        assert_eq!(&fetched[key], value, "field {key}");
    }
    assert_eq!(fetched["organizer"]["first_name"], json!("Ada"));
}

#[tokio::test]
async fn it_should_signal_a_dangling_reference_but_keep_the_event() {
    let app = app(OrphanPolicy::Retain);

    let (status, body) = call(
        &app,
        "POST",
        "/events",
        Some(json!({ "organizer_id": "ghost", "title": "Launch" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["event_retained"], json!(true));
    let event_id = body["event_id"].as_str().unwrap();
    let (_, fetched) = call(&app, "GET", &format!("/events/{event_id}"), None).await;
    assert_eq!(fetched["organizer_id"], json!("ghost"));
    assert_eq!(fetched["organizer"], Value::Null);
}

#[tokio::test]
async fn it_should_discard_the_orphan_when_compensating() {
    let app = app(OrphanPolicy::Compensate);

    let (status, body) = call(
        &app,
        "POST",
        "/events",
        Some(json!({ "organizer_id": "ghost" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["event_retained"], json!(false));
    let (_, listed) = call(&app, "GET", "/events", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn it_should_leave_no_trace_after_deleting_all_events() {
    let app = app(OrphanPolicy::Retain);
    let ada = register_organizer(&app, "Ada").await;
    let grace = register_organizer(&app, "Grace").await;
    for org in [&ada, &ada, &grace] {
        let (status, _) = call(&app, "POST", "/events", Some(json!({ "organizer_id": org }))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = call(&app, "DELETE", "/events", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted_count"], json!(3));
    assert_eq!(body["unlink"]["status"], json!("complete"));
    let (_, listed) = call(&app, "GET", "/events", None).await;
    assert_eq!(listed, json!([]));
    assert_eq!(organizer_events(&app, &ada).await, json!([]));
    assert_eq!(organizer_events(&app, &grace).await, json!([]));
}

#[tokio::test]
async fn it_should_keep_the_owner_when_updating() {
    let app = app(OrphanPolicy::Retain);
    let ada = register_organizer(&app, "Ada").await;
    let grace = register_organizer(&app, "Grace").await;
    let (_, created) = call(
        &app,
        "POST",
        "/events",
        Some(json!({ "organizer_id": ada, "title": "Launch" })),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = call(
        &app,
        "PUT",
        &format!("/events/{id}"),
        Some(json!({ "organizer_id": grace })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, updated) = call(
        &app,
        "PUT",
        &format!("/events/{id}"),
        Some(json!({ "title": "Relaunch" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], json!("Relaunch"));
    assert_eq!(organizer_events(&app, &ada).await, json!([id]));
    assert_eq!(organizer_events(&app, &grace).await, json!([]));
}
