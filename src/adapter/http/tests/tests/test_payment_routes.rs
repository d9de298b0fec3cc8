// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use ember_accounts::testing::MockWalletAuthService;
use ember_payments::testing::MockTransactionVerifier;
use ember_payments::TransactionStatus;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::harness::{await_client_server_flow, GatewayHarness};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

async fn initiate_payment(client: &reqwest::Client, base_url: &str) -> String {
    let body: Value = client
        .post(format!("{base_url}/api/initiate-payment"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], json!(true));
    body["id"].as_str().unwrap().to_string()
}

fn payment_payload(reference: &str) -> Value {
    json!({
        "payload": {
            "transaction_id": "0xabc123",
            "reference": reference,
            "chain": "worldchain",
        }
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_initiate_payment_issues_reference() {
    let harness = GatewayHarness::new(
        MockWalletAuthService::new(),
        MockTransactionVerifier::new(),
    );
    let server = harness.api_server().await;
    let base_url = format!("http://{}", server.local_addr());

    let client_handle = async {
        let client = reqwest::Client::new();

        let first = initiate_payment(&client, &base_url).await;
        let second = initiate_payment(&client, &base_url).await;

        assert_eq!(first.len(), 32);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!first.contains('-'));
        assert_ne!(first, second);
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_confirm_payment_status_matrix() {
    let cases = [
        (TransactionStatus::Success, 200, true),
        (TransactionStatus::Pending, 200, true),
        (TransactionStatus::Failed, 400, false),
        (TransactionStatus::Unknown, 400, false),
    ];

    for (status, expected_http_status, expected_success) in cases {
        let harness = GatewayHarness::new(
            MockWalletAuthService::new(),
            MockTransactionVerifier::reporting_status(status),
        );
        let server = harness.api_server().await;
        let base_url = format!("http://{}", server.local_addr());

        let client_handle = async {
            let client = reqwest::Client::new();
            let reference = initiate_payment(&client, &base_url).await;

            let response = client
                .post(format!("{base_url}/api/confirm-payment"))
                .json(&payment_payload(&reference))
                .send()
                .await
                .unwrap();

            assert_eq!(response.status(), expected_http_status, "status {status:?}");

            let body: Value = response.json().await.unwrap();
            assert_eq!(body["success"], json!(expected_success), "status {status:?}");
            assert!(body["transaction"].is_object());
        };

        await_client_server_flow!(server.run(), client_handle);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_confirm_payment_unknown_reference() {
    let harness = GatewayHarness::new(
        MockWalletAuthService::new(),
        MockTransactionVerifier::reporting_status(TransactionStatus::Success),
    );
    let server = harness.api_server().await;
    let base_url = format!("http://{}", server.local_addr());

    let client_handle = async {
        let response = reqwest::Client::new()
            .post(format!("{base_url}/api/confirm-payment"))
            .json(&payment_payload("0123456789abcdef0123456789abcdef"))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Unknown payment reference"));
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_confirm_payment_replay_is_rejected() {
    let harness = GatewayHarness::new(
        MockWalletAuthService::new(),
        MockTransactionVerifier::reporting_status(TransactionStatus::Success),
    );
    let server = harness.api_server().await;
    let base_url = format!("http://{}", server.local_addr());

    let client_handle = async {
        let client = reqwest::Client::new();
        let reference = initiate_payment(&client, &base_url).await;

        let response = client
            .post(format!("{base_url}/api/confirm-payment"))
            .json(&payment_payload(&reference))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let response = client
            .post(format!("{base_url}/api/confirm-payment"))
            .json(&payment_payload(&reference))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
