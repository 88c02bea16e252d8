//! Bootstrap fetch against an in-process server.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::json;

use kartela_admin::bootstrap::{BootstrapError, fetch_bootstrap};
use kartela_admin::config::{AppConfig, WindowGeometry};

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn config(addr: SocketAddr, record: Option<&str>) -> AppConfig {
    AppConfig {
        api_url: format!("http://{addr}"),
        record: record.map(str::to_string),
        lookup_timeout: Duration::from_secs(2),
        window: WindowGeometry::default(),
    }
}

#[tokio::test]
async fn fetches_the_record_bootstrap() {
    let app = Router::new().route(
        "/records/person/42/bootstrap/",
        get(|| async {
            axum::Json(json!({
                "csrf_token": "tok-9",
                "person": {"values": {"status": "employed"}}
            }))
        }),
    );
    let addr = serve(app).await;

    let bootstrap = fetch_bootstrap(&config(addr, Some("42"))).await.unwrap();
    assert_eq!(bootstrap.csrf_token, "tok-9");
    let seed = bootstrap.into_seed().unwrap();
    assert_eq!(seed.person.values.text("status"), "employed");
}

#[tokio::test]
async fn blank_entry_uses_the_default_path() {
    let app = Router::new().route(
        "/records/person/bootstrap/",
        get(|| async { axum::Json(json!({"csrf_token": "tok-0"})) }),
    );
    let addr = serve(app).await;

    let bootstrap = fetch_bootstrap(&config(addr, None)).await.unwrap();
    assert_eq!(bootstrap.csrf_token, "tok-0");
}

#[tokio::test]
async fn missing_endpoint_is_a_status_error() {
    let app = Router::new().route("/health", get(|| async { StatusCode::OK }));
    let addr = serve(app).await;

    let err = fetch_bootstrap(&config(addr, None)).await.unwrap_err();
    assert!(matches!(err, BootstrapError::Status(404)));
}

#[tokio::test]
async fn scalar_body_is_malformed() {
    let app = Router::new().route(
        "/records/person/bootstrap/",
        get(|| async { axum::Json(json!("nope")) }),
    );
    let addr = serve(app).await;

    let err = fetch_bootstrap(&config(addr, None)).await.unwrap_err();
    assert!(matches!(err, BootstrapError::Malformed(_)));
}
