// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::WalletAddress;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Value stored in the session cookie once authentication succeeds.
///
/// SECURITY GAP: this is a fixed sentinel, not a signed or server-validated
/// token - possession of the cookie is the entire session proof. Kept
/// deliberately to match the demo contract; a production deployment needs an
/// opaque token validated server-side on every privileged call.
pub const SESSION_TOKEN_SENTINEL: &str = "authenticated";

/// Session lifetime, which both the nonce cookie and the auth cookie share.
pub const SESSION_MAX_AGE_DAYS: i64 = 7;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Client-visible authentication state, mirrored from the server cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
    pub wallet_address: Option<WalletAddress>,
}

impl SessionState {
    pub fn logged_in(wallet_address: WalletAddress) -> Self {
        Self {
            authenticated: true,
            wallet_address: Some(wallet_address),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}
