// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use ember_accounts::testing::MockWalletAuthService;
use ember_accounts::{WalletAddress, WalletAuthError, WalletAuthPayload};
use ember_payments::testing::MockTransactionVerifier;
use internal_error::InternalError;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::harness::{await_client_server_flow, GatewayHarness};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const TEST_ADDRESS: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

fn test_payload() -> WalletAuthPayload {
    WalletAuthPayload {
        message: "test message".to_string(),
        signature: "0xdeadbeef".to_string(),
        address: WalletAddress::try_new(TEST_ADDRESS).unwrap(),
        version: Some(1),
    }
}

fn cookie_client() -> reqwest::Client {
    reqwest::Client::builder().cookie_store(true).build().unwrap()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_nonce_issues_challenge_and_cookie() {
    let harness = GatewayHarness::new(
        MockWalletAuthService::new(),
        MockTransactionVerifier::new(),
    );
    let server = harness.api_server().await;
    let base_url = format!("http://{}", server.local_addr());

    let client_handle = async {
        let response = reqwest::Client::new()
            .get(format!("{base_url}/api/nonce"))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);

        let set_cookie = response
            .headers()
            .get(http::header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.starts_with("siwe="), "{set_cookie}");
        assert!(set_cookie.contains("HttpOnly"), "{set_cookie}");
        assert!(set_cookie.contains("SameSite=Lax"), "{set_cookie}");

        let body: Value = response.json().await.unwrap();
        let nonce = body["nonce"].as_str().unwrap();
        assert_eq!(nonce.len(), 24);
        assert!(nonce.chars().all(|c| c.is_ascii_alphanumeric()));
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_complete_siwe_happy_path() {
    let harness = GatewayHarness::new(
        MockWalletAuthService::verifying_as(WalletAddress::try_new(TEST_ADDRESS).unwrap()),
        MockTransactionVerifier::new(),
    );
    let server = harness.api_server().await;
    let base_url = format!("http://{}", server.local_addr());

    let client_handle = async {
        let client = cookie_client();

        let nonce_body: Value = client
            .get(format!("{base_url}/api/nonce"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let nonce = nonce_body["nonce"].as_str().unwrap().to_string();

        let response = client
            .post(format!("{base_url}/api/complete-siwe"))
            .json(&json!({ "payload": test_payload(), "nonce": nonce }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);

        let set_cookie = response
            .headers()
            .get(http::header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.starts_with("auth_token=authenticated"), "{set_cookie}");

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["address"], json!(TEST_ADDRESS));

        // Session is now visible to check-auth
        let body: Value = client
            .get(format!("{base_url}/api/check-auth"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["authenticated"], json!(true));
        assert!(body["address"].is_string());
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_complete_siwe_nonce_mismatch() {
    let harness = GatewayHarness::new(
        MockWalletAuthService::new(),
        MockTransactionVerifier::new(),
    );
    let server = harness.api_server().await;
    let base_url = format!("http://{}", server.local_addr());

    let client_handle = async {
        let client = cookie_client();

        // Cookie now holds the issued nonce
        client
            .get(format!("{base_url}/api/nonce"))
            .send()
            .await
            .unwrap();

        let response = client
            .post(format!("{base_url}/api/complete-siwe"))
            .json(&json!({ "payload": test_payload(), "nonce": "someOtherNonce123" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Invalid nonce"));
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_complete_siwe_without_issued_nonce() {
    let harness = GatewayHarness::new(
        MockWalletAuthService::new(),
        MockTransactionVerifier::new(),
    );
    let server = harness.api_server().await;
    let base_url = format!("http://{}", server.local_addr());

    let client_handle = async {
        // No prior /api/nonce call, so no cookie
        let response = reqwest::Client::new()
            .post(format!("{base_url}/api/complete-siwe"))
            .json(&json!({ "payload": test_payload(), "nonce": "aBcDeFgH12345678" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Invalid nonce"));
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_complete_siwe_rejected_signature() {
    let harness = GatewayHarness::new(
        MockWalletAuthService::rejecting_with_invalid_signature(),
        MockTransactionVerifier::new(),
    );
    let server = harness.api_server().await;
    let base_url = format!("http://{}", server.local_addr());

    let client_handle = async {
        let client = cookie_client();

        let nonce_body: Value = client
            .get(format!("{base_url}/api/nonce"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let nonce = nonce_body["nonce"].as_str().unwrap().to_string();

        let response = client
            .post(format!("{base_url}/api/complete-siwe"))
            .json(&json!({ "payload": test_payload(), "nonce": nonce }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["error"], json!("Invalid signature"));
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_internal_verification_error_yields_generic_json_500() {
    let mut wallet_auth_service = MockWalletAuthService::new();
    wallet_auth_service.expect_verify().returning(|_, _| {
        Err(WalletAuthError::Internal(InternalError::reason(
            "relay connection lost",
        )))
    });

    let harness = GatewayHarness::new(wallet_auth_service, MockTransactionVerifier::new());
    let server = harness.api_server().await;
    let base_url = format!("http://{}", server.local_addr());

    let client_handle = async {
        let client = cookie_client();

        let nonce_body: Value = client
            .get(format!("{base_url}/api/nonce"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let nonce = nonce_body["nonce"].as_str().unwrap().to_string();

        let response = client
            .post(format!("{base_url}/api/complete-siwe"))
            .json(&json!({ "payload": test_payload(), "nonce": nonce }))
            .send()
            .await
            .unwrap();

        // The cause stays in the server log; the body is a generic JSON error
        assert_eq!(response.status(), 500);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Internal error" }));
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_logout_clears_session() {
    let harness = GatewayHarness::new(
        MockWalletAuthService::verifying_as(WalletAddress::try_new(TEST_ADDRESS).unwrap()),
        MockTransactionVerifier::new(),
    );
    let server = harness.api_server().await;
    let base_url = format!("http://{}", server.local_addr());

    let client_handle = async {
        let client = cookie_client();

        let body: Value = client
            .get(format!("{base_url}/api/check-auth"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["authenticated"], json!(false));

        let nonce_body: Value = client
            .get(format!("{base_url}/api/nonce"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let nonce = nonce_body["nonce"].as_str().unwrap().to_string();
        client
            .post(format!("{base_url}/api/complete-siwe"))
            .json(&json!({ "payload": test_payload(), "nonce": nonce }))
            .send()
            .await
            .unwrap();

        let body: Value = client
            .post(format!("{base_url}/api/logout"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["success"], json!(true));

        let body: Value = client
            .get(format!("{base_url}/api/check-auth"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["authenticated"], json!(false));
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
