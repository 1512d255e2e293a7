// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for `BnsService` against an in-process stand-in for the BNS API.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use config::{BnsConfig, HttpConfig, Network};
use serde_json::json;
use std::sync::{Arc, Mutex};
use ticketing_client::{BnsService, ServiceError};

const ADDRESS: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

#[derive(Clone)]
struct MockBns {
    status: StatusCode,
    body: String,
    requested: Arc<Mutex<Vec<String>>>,
}

async fn names_by_address(
    State(mock): State<MockBns>,
    Path(address): Path<String>,
) -> (StatusCode, String) {
    mock.requested.lock().unwrap().push(address);
    (mock.status, mock.body.clone())
}

/// Start the mock API and return a service pointed at it.
async fn spawn_bns(status: StatusCode, body: String) -> (BnsService, Arc<Mutex<Vec<String>>>) {
    let requested = Arc::new(Mutex::new(Vec::new()));
    let mock = MockBns {
        status,
        body,
        requested: requested.clone(),
    };

    let app = Router::new()
        .route("/names/address/:address/valid", get(names_by_address))
        .with_state(mock);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let bns = BnsConfig {
        api_url: Some(format!("http://{}/", addr)),
    };
    let service = BnsService::for_network(&bns, &Network::Testnet, &HttpConfig::default()).unwrap();
    (service, requested)
}

#[tokio::test]
async fn test_get_bns_name_returns_first_name() {
    let body = json!({
        "total": 2,
        "names": [
            {"full_name": "alice.btc", "name_string": "alice", "namespace_string": "btc"},
            {"full_name": "alice.id", "name_string": "alice", "namespace_string": "id"}
        ]
    });
    let (service, requested) = spawn_bns(StatusCode::OK, body.to_string()).await;

    assert_eq!(service.get_bns_name(ADDRESS).await.unwrap(), "alice.btc");
    assert_eq!(*requested.lock().unwrap(), [ADDRESS.to_string()]);
}

#[tokio::test]
async fn test_get_bns_name_without_names() {
    let (service, _) = spawn_bns(StatusCode::OK, json!({"total": 0, "names": []}).to_string()).await;

    let err = service.get_bns_name(ADDRESS).await.unwrap_err();
    assert!(matches!(err, ServiceError::NameNotFound(ref address) if address == ADDRESS));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_get_bns_name_missing_names_field() {
    let (service, _) = spawn_bns(StatusCode::OK, json!({"total": 0}).to_string()).await;

    let err = service.get_bns_name(ADDRESS).await.unwrap_err();
    assert!(matches!(err, ServiceError::NameNotFound(_)));
}

#[tokio::test]
async fn test_get_bns_name_non_success_status() {
    let (service, _) = spawn_bns(StatusCode::NOT_FOUND, "Not Found".to_string()).await;

    match service.get_bns_name(ADDRESS).await.unwrap_err() {
        ServiceError::Status {
            status,
            body,
            endpoint,
            ..
        } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body, "Not Found");
            assert!(endpoint.ends_with(&format!("/names/address/{}/valid", ADDRESS)));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_bns_name_invalid_json() {
    let (service, _) = spawn_bns(StatusCode::OK, "<html></html>".to_string()).await;

    let err = service.get_bns_name(ADDRESS).await.unwrap_err();
    assert!(matches!(err, ServiceError::MalformedBody { .. }), "got {:?}", err);
}
