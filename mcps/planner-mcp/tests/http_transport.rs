//! Integration tests for the HTTP transport
//!
//! Each test starts a throwaway axum server on 127.0.0.1 standing in for the
//! planner API, so no external service is needed.
//!
//! ```bash
//! cargo test -p planner-mcp --test http_transport
//! ```

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use mcp_common::result_text;
use planner_mcp::api::{ApiError, ApiRequest, ApiTransport, HttpTransport};
use planner_mcp::config::ApiConfig;
use planner_mcp::Dispatcher;
use serde_json::{json, Value};

type Seen = Arc<Mutex<Vec<String>>>;

/// Serve `router` on an ephemeral port and return its base URL
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn transport(base_url: &str) -> HttpTransport {
    HttpTransport::new(&ApiConfig::new(base_url)).unwrap()
}

/// Minimal planner API: one current plan `p1`, echoing writes back
fn planner_router(seen: Seen) -> Router {
    Router::new()
        .route(
            "/plans/current",
            get(|| async { Json(json!({"id": "p1", "name": "Launch", "tasks": []})) }),
        )
        .route(
            "/plans/from-text",
            post(|Json(body): Json<Value>| async move {
                Json(json!({"id": "p1", "name": body["name"], "source": body["text"]}))
            }),
        )
        .route(
            "/plans/:plan/tasks/:task/status",
            put(
                |State(seen): State<Seen>,
                 Path((plan, task)): Path<(String, String)>,
                 Json(body): Json<Value>| async move {
                    seen.lock().unwrap().push(format!("PUT {plan}/{task}"));
                    Json(json!({"id": task, "status": body["status"]}))
                },
            ),
        )
        .route(
            "/plans/:plan/tasks/:task/comments/:comment",
            delete(
                |State(seen): State<Seen>,
                 Path((plan, task, comment)): Path<(String, String, String)>| async move {
                    seen.lock()
                        .unwrap()
                        .push(format!("DELETE comment {plan}/{task}/{comment}"));
                    StatusCode::NO_CONTENT
                },
            ),
        )
        .route(
            "/plans/:plan",
            delete(|State(seen): State<Seen>, Path(plan): Path<String>| async move {
                seen.lock().unwrap().push(format!("DELETE plan {plan}"));
                Json(json!({"success": true, "message": "plan deleted"}))
            }),
        )
        .route(
            "/plans/:plan/tasks/:task",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({"detail": "Task not found"}))) }),
        )
        .with_state(seen)
}

#[tokio::test]
async fn test_get_returns_json_body() {
    let base = spawn(planner_router(Seen::default())).await;
    let api = transport(&base);

    let plan = api.send(ApiRequest::get("/plans/current")).await.unwrap();
    assert_eq!(plan["id"], "p1");
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let base = spawn(planner_router(Seen::default())).await;
    let api = transport(&base);

    let created = api
        .send(ApiRequest::post(
            "/plans/from-text",
            json!({"name": "Launch", "text": "Task 1: Design"}),
        ))
        .await
        .unwrap();
    assert_eq!(created["name"], "Launch");
    assert_eq!(created["source"], "Task 1: Design");
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let base = spawn(planner_router(Seen::default())).await;
    let api = transport(&base);

    let body = api
        .send(ApiRequest::delete("/plans/p1/tasks/t1/comments/c1"))
        .await
        .unwrap();
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let base = spawn(planner_router(Seen::default())).await;
    let api = transport(&base);

    let err = api
        .send(ApiRequest::get("/plans/p1/tasks/missing"))
        .await
        .unwrap_err();
    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("Task not found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Grab a free port, then release it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = transport(&format!("http://{}", addr));
    let err = api.send(ApiRequest::get("/plans/current")).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let base = spawn(planner_router(Seen::default())).await;
    let api = transport(&format!("{}/", base));
    assert_eq!(api.base_url(), base);

    let plan = api.send(ApiRequest::get("/plans/current")).await.unwrap();
    assert_eq!(plan["id"], "p1");
}

#[tokio::test]
async fn test_dispatcher_over_http() {
    let seen = Seen::default();
    let base = spawn(planner_router(seen.clone())).await;
    let dispatcher = Dispatcher::new(Arc::new(transport(&base)));

    let args = json!({"task_id": "t1", "status": "Working"});
    let result = dispatcher
        .dispatch("update_task_status", args.as_object().cloned())
        .await;
    assert!(!result.is_error.unwrap_or(false));
    assert!(result_text(&result).unwrap().contains("\"Working\""));
    assert_eq!(*seen.lock().unwrap(), ["PUT p1/t1"]);

    let result = dispatcher
        .dispatch("get_task", json!({"task_id": "missing"}).as_object().cloned())
        .await;
    assert_eq!(result.is_error, Some(true));
    let message = result_text(&result).unwrap();
    assert!(message.contains("get_task"));
    assert!(message.contains("404"));
}

#[tokio::test]
async fn test_comment_id_cannot_escape_its_route() {
    let seen = Seen::default();
    let base = spawn(planner_router(seen.clone())).await;
    let dispatcher = Dispatcher::new(Arc::new(transport(&base)));

    let args = json!({"task_id": "x", "comment_id": "../../../../p2"});
    let result = dispatcher
        .dispatch("remove_comment", args.as_object().cloned())
        .await;

    assert!(!result.is_error.unwrap_or(false), "{:?}", result_text(&result));
    assert_eq!(*seen.lock().unwrap(), ["DELETE comment p1/x/../../../../p2"]);
}

#[tokio::test]
async fn test_query_and_fragment_characters_stay_in_the_path() {
    let seen = Seen::default();
    let base = spawn(planner_router(seen.clone())).await;
    let dispatcher = Dispatcher::new(Arc::new(transport(&base)));

    let args = json!({"task_id": "t1?force=true#top", "status": "Complete"});
    let result = dispatcher
        .dispatch("update_task_status", args.as_object().cloned())
        .await;

    assert!(!result.is_error.unwrap_or(false), "{:?}", result_text(&result));
    assert_eq!(*seen.lock().unwrap(), ["PUT p1/t1?force=true#top"]);
}
