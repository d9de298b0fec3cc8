// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use ember_accounts::testing::MockWalletAuthService;
use ember_accounts::{SessionState, WalletAddress};
use ember_client::SessionStore;
use ember_payments::testing::MockTransactionVerifier;
use pretty_assertions::assert_eq;

use crate::harness::{await_client_server_flow, ClientSideHarness};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn wallet_address() -> WalletAddress {
    WalletAddress::try_new("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045").unwrap()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_restore_reports_anonymous_without_session_cookie() {
    let harness = ClientSideHarness::new(
        MockWalletAuthService::new(),
        MockTransactionVerifier::new(),
    );
    let server = harness.api_server().await;
    let api = ClientSideHarness::api_client(&server);

    let client_handle = async {
        let session = SessionStore::new(api);

        let state = session.restore().await.unwrap();
        assert_eq!(state, SessionState::anonymous());
        assert_eq!(session.current(), SessionState::anonymous());
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_login_then_logout_leaves_anonymous() {
    let harness = ClientSideHarness::new(
        MockWalletAuthService::new(),
        MockTransactionVerifier::new(),
    );
    let server = harness.api_server().await;
    let api = ClientSideHarness::api_client(&server);

    let client_handle = async {
        let session = Arc::new(SessionStore::new(api));

        session.login(wallet_address());
        assert_eq!(session.current(), SessionState::logged_in(wallet_address()));

        session.logout();
        assert_eq!(session.current(), SessionState::anonymous());

        // Reconciling against the server keeps the store anonymous
        let state = session.restore().await.unwrap();
        assert_eq!(state, SessionState::anonymous());
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_logout_is_idempotent() {
    let harness = ClientSideHarness::new(
        MockWalletAuthService::new(),
        MockTransactionVerifier::new(),
    );
    let server = harness.api_server().await;
    let api = ClientSideHarness::api_client(&server);

    let client_handle = async {
        let session = Arc::new(SessionStore::new(api));

        session.logout();
        session.login(wallet_address());
        session.logout();
        session.logout();

        assert_eq!(session.current(), SessionState::anonymous());
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
