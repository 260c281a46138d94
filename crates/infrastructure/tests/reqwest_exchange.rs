//! Integration tests for the reqwest adapter against a local server.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use pretty_assertions::assert_eq;
use reqpanel_application::{ExecuteRequest, ExecuteRequestError, HttpClientError};
use reqpanel_domain::{ExchangeRequest, FormPayload};
use reqpanel_infrastructure::ReqwestHttpClient;

async fn echo(headers: HeaderMap, body: String) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    (
        StatusCode::OK,
        [("x-received-content-type", content_type)],
        body,
    )
}

async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, "no such endpoint") }),
        )
        .route("/echo", post(echo));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn use_case() -> ExecuteRequest<ReqwestHttpClient> {
    ExecuteRequest::new(Arc::new(ReqwestHttpClient::new().unwrap()))
}

#[tokio::test]
async fn test_not_found_round_trips_status_and_body() {
    let addr = spawn_server().await;

    let exchange = use_case()
        .execute(ExchangeRequest::get(format!("http://{addr}/missing")))
        .await
        .expect("404 is a valid exchange");

    assert_eq!(exchange.status(), 404);
    assert_eq!(exchange.response.status_text, "Not Found");
    assert_eq!(exchange.body(), "no such endpoint");
    assert!(exchange.response.headers.contains_key("content-type"));
}

#[tokio::test]
async fn test_text_body_reaches_server_unchanged() {
    let addr = spawn_server().await;
    let payload = "{ \"id\": 7,\n  \"tags\": [] }";

    let exchange = use_case()
        .execute(
            ExchangeRequest::new("post", format!("http://{addr}/echo"))
                .with_header("content-type", "application/json")
                .with_text(payload),
        )
        .await
        .unwrap();

    assert_eq!(exchange.status(), 200);
    assert_eq!(exchange.body(), payload);
    assert_eq!(
        exchange
            .response
            .headers
            .get("x-received-content-type")
            .map(String::as_str),
        Some("application/json")
    );
}

#[tokio::test]
async fn test_multipart_gets_transport_boundary() {
    let addr = spawn_server().await;

    let exchange = use_case()
        .execute(
            ExchangeRequest::new("POST", format!("http://{addr}/echo"))
                .with_header("content-type", "application/json")
                .with_form(FormPayload::new().text("title", "quarterly")),
        )
        .await
        .unwrap();

    let received = exchange
        .response
        .headers
        .get("x-received-content-type")
        .cloned()
        .unwrap_or_default();
    assert!(received.starts_with("multipart/form-data; boundary="));
    assert!(exchange.body().contains("name=\"title\""));
    assert!(exchange.body().contains("quarterly"));
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = use_case()
        .execute(ExchangeRequest::get(format!("http://{addr}/")))
        .await;

    match result {
        Err(ExecuteRequestError::Network(
            HttpClientError::ConnectionRefused { .. } | HttpClientError::ConnectionFailed(_),
        )) => {}
        other => panic!("expected connection failure, got {other:?}"),
    }
}
