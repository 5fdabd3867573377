//! Forwarding tests against real listeners.

use axum::extract::Path;
use axum::routing::{get, post};
use axum::{Json, Router};
use rosterhub_gateway::{router, serve, RouteEntry, RouteTable};
use serde_json::{json, Value};

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A stand-in backend that reports which path it saw.
fn echo_backend(name: &'static str) -> Router {
    Router::new()
        .route(
            "/getTodas",
            get(move || async move { Json(json!({"backend": name, "path": "/getTodas"})) }),
        )
        .route(
            "/getPorId/{id}",
            get(move |Path(id): Path<String>| async move {
                Json(json!({"backend": name, "id": id}))
            }),
        )
        .route(
            "/setTodo",
            post(move |body: String| async move { Json(json!({"backend": name, "body": body})) }),
        )
}

#[tokio::test]
async fn test_forwards_with_prefix_stripped() {
    let natacion = spawn(echo_backend("natacion")).await;
    let waterpolo = spawn(echo_backend("waterpolo")).await;

    let table = RouteTable::new(vec![
        RouteEntry {
            prefix: "/natacion".to_string(),
            target: natacion,
        },
        RouteEntry {
            prefix: "/waterpolo".to_string(),
            target: waterpolo,
        },
    ])
    .unwrap();
    let gateway = spawn(router(table)).await;

    let seen: Value = reqwest::get(format!("{gateway}/natacion/getTodas"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(seen["backend"], "natacion");
    assert_eq!(seen["path"], "/getTodas");

    let seen: Value = reqwest::get(format!("{gateway}/waterpolo/getPorId/42"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(seen["backend"], "waterpolo");
    assert_eq!(seen["id"], "42");
}

#[tokio::test]
async fn test_post_bodies_pass_through() {
    let backend = spawn(echo_backend("natacion")).await;
    let table = RouteTable::new(vec![RouteEntry {
        prefix: "/natacion".to_string(),
        target: backend,
    }])
    .unwrap();
    let gateway = spawn(router(table)).await;

    let seen: Value = reqwest::Client::new()
        .post(format!("{gateway}/natacion/setTodo"))
        .body(r#"{"id_deportista":"1","nombre":"Ana"}"#)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(seen["body"], r#"{"id_deportista":"1","nombre":"Ana"}"#);
}

#[tokio::test]
async fn test_unmatched_path_is_404() {
    let table = RouteTable::new(vec![RouteEntry {
        prefix: "/natacion".to_string(),
        target: "http://127.0.0.1:9".to_string(),
    }])
    .unwrap();
    let gateway = spawn(router(table)).await;

    let response = reqwest::get(format!("{gateway}/unknown/x")).await.unwrap();
    assert_eq!(response.status(), 404);
    let payload: Value = response.json().await.unwrap();
    assert!(payload["error"].as_str().unwrap().contains("/unknown/x"));
}

#[tokio::test]
async fn test_unreachable_upstream_is_502() {
    // Port 9 (discard) is not listening.
    let table = RouteTable::new(vec![RouteEntry {
        prefix: "/natacion".to_string(),
        target: "http://127.0.0.1:9".to_string(),
    }])
    .unwrap();
    let gateway = spawn(router(table)).await;

    let response = reqwest::get(format!("{gateway}/natacion/getTodas"))
        .await
        .unwrap();
    assert_eq!(response.status(), 502);
}
