// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::{Arc, Mutex};

use ember_accounts::{SessionState, WalletAddress};
use internal_error::InternalError;

use crate::GatewayApiClient;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// In-memory mirror of the server-side session cookie.
///
/// The cookie remains the source of truth. This store only caches what the
/// last round trip reported plus any local `login`/`logout` transitions, so a
/// transient disagreement between cookie and memory is possible and gets
/// reconciled by the next [`SessionStore::restore`].
pub struct SessionStore {
    api: Arc<GatewayApiClient>,
    state: Mutex<SessionState>,
}

impl SessionStore {
    pub fn new(api: Arc<GatewayApiClient>) -> Self {
        Self {
            api,
            state: Mutex::new(SessionState::anonymous()),
        }
    }

    /// One round trip to `/api/check-auth`, mirroring the result into memory.
    /// Intended to run once on startup.
    pub async fn restore(&self) -> Result<SessionState, InternalError> {
        let response = self.api.check_auth().await.map_err(InternalError::new)?;

        let state = if response.authenticated {
            SessionState {
                authenticated: true,
                wallet_address: response
                    .address
                    .and_then(|a| WalletAddress::try_new(a).ok()),
            }
        } else {
            SessionState::anonymous()
        };

        *self.state.lock().unwrap() = state.clone();
        Ok(state)
    }

    pub fn current(&self) -> SessionState {
        self.state.lock().unwrap().clone()
    }

    /// Records a session the server has just established. The cookie was set
    /// by the sign-in response, so no extra round trip is needed.
    pub fn login(&self, wallet_address: WalletAddress) {
        *self.state.lock().unwrap() = SessionState::logged_in(wallet_address);
    }

    /// Drops the in-memory session immediately and clears the server cookie
    /// in the background. The caller observes an anonymous session even if
    /// the server call is still in flight or fails.
    pub fn logout(&self) {
        *self.state.lock().unwrap() = SessionState::anonymous();

        let api = self.api.clone();
        tokio::spawn(async move {
            if let Err(e) = api.logout().await {
                tracing::warn!(error = ?e, "Sign-out request to the gateway failed");
            }
        });
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
