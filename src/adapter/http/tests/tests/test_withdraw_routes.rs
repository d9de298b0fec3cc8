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
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::harness::{await_client_server_flow, GatewayHarness};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_initiate_withdraw_echoes_request() {
    let harness = GatewayHarness::new(
        MockWalletAuthService::new(),
        MockTransactionVerifier::new(),
    );
    let server = harness.api_server().await;
    let base_url = format!("http://{}", server.local_addr());

    let client_handle = async {
        let response = reqwest::Client::new()
            .post(format!("{base_url}/api/initiate-withdraw"))
            .json(&json!({ "amount": 25.5, "token": "USDC" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["amount"], json!(25.5));
        assert_eq!(body["token"], json!("USDC"));

        let id = body["id"].as_str().unwrap();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_initiate_withdraw_rejects_invalid_amount() {
    let harness = GatewayHarness::new(
        MockWalletAuthService::new(),
        MockTransactionVerifier::new(),
    );
    let server = harness.api_server().await;
    let base_url = format!("http://{}", server.local_addr());

    let client_handle = async {
        for amount in [0.0, -3.0] {
            let response = reqwest::Client::new()
                .post(format!("{base_url}/api/initiate-withdraw"))
                .json(&json!({ "amount": amount, "token": "USDC" }))
                .send()
                .await
                .unwrap();

            assert_eq!(response.status(), 400, "amount {amount}");
        }
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_confirm_withdraw_acknowledges_registered_request() {
    let harness = GatewayHarness::new(
        MockWalletAuthService::new(),
        MockTransactionVerifier::new(),
    );
    let server = harness.api_server().await;
    let base_url = format!("http://{}", server.local_addr());

    let client_handle = async {
        let client = reqwest::Client::new();

        let body: Value = client
            .post(format!("{base_url}/api/initiate-withdraw"))
            .json(&json!({ "amount": 10.0, "token": "WLD" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let reference = body["id"].as_str().unwrap().to_string();

        let response = client
            .post(format!("{base_url}/api/confirm-withdraw"))
            .json(&json!({
                "payload": {
                    "transaction_id": "0xfeed42",
                    "reference": reference,
                }
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["transaction_id"], json!("0xfeed42"));
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_confirm_withdraw_unknown_reference() {
    let harness = GatewayHarness::new(
        MockWalletAuthService::new(),
        MockTransactionVerifier::new(),
    );
    let server = harness.api_server().await;
    let base_url = format!("http://{}", server.local_addr());

    let client_handle = async {
        let response = reqwest::Client::new()
            .post(format!("{base_url}/api/confirm-withdraw"))
            .json(&json!({
                "payload": {
                    "transaction_id": "0xfeed42",
                    "reference": "0123456789abcdef0123456789abcdef",
                }
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 400);
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
