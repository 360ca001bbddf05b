//! Note CRUD and ownership-authorization integration tests

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use jotter::{create_app, AppState, WebConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn create_request(method: &str, uri: &str, body: Option<Value>, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    if let Some(body) = body {
        builder = builder.header("Content-Type", "application/json");
        builder
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    }
}

async fn extract_json_response(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn test_app() -> axum::Router {
    let state = AppState::new(WebConfig::default()).unwrap();
    create_app(state)
}

/// Register an account and return (account id, token)
async fn register(app: &axum::Router, name: &str, email: &str) -> (String, String) {
    let body = json!({"name": name, "email": email, "password": "secret1"});
    let response = app
        .clone()
        .oneshot(create_request("POST", "/api/auth/register", Some(body), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = extract_json_response(response).await;
    (
        body["id"].as_str().unwrap().to_string(),
        body["token"].as_str().unwrap().to_string(),
    )
}

async fn create_note(app: &axum::Router, token: &str, title: &str, content: &str) -> Value {
    let body = json!({"title": title, "content": content});
    let response = app
        .clone()
        .oneshot(create_request("POST", "/api/notes", Some(body), Some(token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    extract_json_response(response).await
}

#[tokio::test]
async fn test_create_note_sets_owner() {
    let app = test_app();
    let (ann_id, ann_token) = register(&app, "Ann", "ann@x.com").await;

    let note = create_note(&app, &ann_token, "a", "b").await;
    assert_eq!(note["ownerId"], ann_id.as_str());
    assert_eq!(note["title"], "a");
    assert_eq!(note["content"], "b");
    assert_eq!(note["isFavorite"], false);
    assert!(note["createdAt"].is_string());
    assert!(note["updatedAt"].is_string());
}

#[tokio::test]
async fn test_create_note_requires_title_and_content() {
    let app = test_app();
    let (_, token) = register(&app, "Ann", "ann@x.com").await;

    for body in [json!({"content": "b"}), json!({"title": "a"}), json!({})] {
        let response = app
            .clone()
            .oneshot(create_request("POST", "/api/notes", Some(body), Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = extract_json_response(response).await;
        assert_eq!(body["error"], "validation_error");
    }
}

#[tokio::test]
async fn test_listing_is_owner_scoped() {
    let app = test_app();
    let (_, ann_token) = register(&app, "Ann", "ann@x.com").await;
    let (_, bob_token) = register(&app, "Bob", "bob@x.com").await;

    create_note(&app, &ann_token, "first", "x").await;
    create_note(&app, &ann_token, "second", "y").await;
    create_note(&app, &bob_token, "bobs", "z").await;

    let response = app
        .clone()
        .oneshot(create_request("GET", "/api/notes", None, Some(&ann_token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let notes = extract_json_response(response).await;
    let notes = notes.as_array().unwrap();
    assert_eq!(notes.len(), 2);
    // Newest first
    assert_eq!(notes[0]["title"], "second");
    assert_eq!(notes[1]["title"], "first");

    let response = app
        .oneshot(create_request("GET", "/api/notes", None, Some(&bob_token)))
        .await
        .unwrap();
    let notes = extract_json_response(response).await;
    assert_eq!(notes.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_owner_can_update_and_delete() {
    let app = test_app();
    let (_, token) = register(&app, "Ann", "ann@x.com").await;

    let note = create_note(&app, &token, "a", "b").await;
    let id = note["id"].as_str().unwrap();

    let patch = json!({"title": "renamed", "isFavorite": true});
    let response = app
        .clone()
        .oneshot(create_request(
            "PUT",
            &format!("/api/notes/{}", id),
            Some(patch),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = extract_json_response(response).await;
    assert_eq!(updated["title"], "renamed");
    assert_eq!(updated["content"], "b");
    assert_eq!(updated["isFavorite"], true);

    let response = app
        .clone()
        .oneshot(create_request(
            "DELETE",
            &format!("/api/notes/{}", id),
            None,
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json_response(response).await;
    assert_eq!(body["id"], id);

    // Gone from the listing afterwards
    let response = app
        .oneshot(create_request("GET", "/api/notes", None, Some(&token)))
        .await
        .unwrap();
    let notes = extract_json_response(response).await;
    assert!(notes.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_non_owner_mutations_forbidden() {
    let app = test_app();
    let (ann_id, ann_token) = register(&app, "Ann", "ann@x.com").await;
    let (_, bob_token) = register(&app, "Bob", "bob@x.com").await;

    let note = create_note(&app, &ann_token, "a", "b").await;
    assert_eq!(note["ownerId"], ann_id.as_str());
    let id = note["id"].as_str().unwrap();

    // Bob cannot update Ann's note
    let response = app
        .clone()
        .oneshot(create_request(
            "PUT",
            &format!("/api/notes/{}", id),
            Some(json!({"title": "stolen"})),
            Some(&bob_token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Bob cannot delete it either
    let response = app
        .clone()
        .oneshot(create_request(
            "DELETE",
            &format!("/api/notes/{}", id),
            None,
            Some(&bob_token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The note is untouched
    let response = app
        .oneshot(create_request("GET", "/api/notes", None, Some(&ann_token)))
        .await
        .unwrap();
    let notes = extract_json_response(response).await;
    assert_eq!(notes[0]["title"], "a");
}

#[tokio::test]
async fn test_missing_note_is_not_found() {
    let app = test_app();
    let (_, token) = register(&app, "Ann", "ann@x.com").await;

    let response = app
        .clone()
        .oneshot(create_request(
            "PUT",
            "/api/notes/no-such-id",
            Some(json!({"title": "x"})),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(create_request("DELETE", "/api/notes/no-such-id", None, Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_note_routes_require_authentication() {
    let app = test_app();

    let cases = [
        ("GET", "/api/notes", None),
        ("POST", "/api/notes", Some(json!({"title": "a", "content": "b"}))),
        ("PUT", "/api/notes/some-id", Some(json!({"title": "a"}))),
        ("DELETE", "/api/notes/some-id", None),
    ];

    for (method, uri, body) in cases {
        let response = app
            .clone()
            .oneshot(create_request(method, uri, body, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{} {}", method, uri);
    }
}

/// The end-to-end scenario: Ann registers and works with her notes, Bob
/// cannot touch them, and unknown ids are reported missing.
#[tokio::test]
async fn test_full_ownership_scenario() {
    let app = test_app();

    let (ann_id, t1) = register(&app, "Ann", "ann@x.com").await;

    let response = app
        .clone()
        .oneshot(create_request("GET", "/api/auth/me", None, Some(&t1)))
        .await
        .unwrap();
    let me = extract_json_response(response).await;
    assert_eq!(me["id"], ann_id.as_str());
    assert_eq!(me["name"], "Ann");
    assert_eq!(me["email"], "ann@x.com");

    let note = create_note(&app, &t1, "a", "b").await;
    assert_eq!(note["ownerId"], ann_id.as_str());

    let (_, t2) = register(&app, "Bob", "bob@x.com").await;
    let response = app
        .clone()
        .oneshot(create_request(
            "PUT",
            &format!("/api/notes/{}", note["id"].as_str().unwrap()),
            Some(json!({"title": "hijack"})),
            Some(&t2),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(create_request(
            "DELETE",
            "/api/notes/00000000-0000-0000-0000-000000000000",
            None,
            Some(&t1),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
