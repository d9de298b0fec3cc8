// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use chrono::Duration;
use ember_accounts::{
    AuthNonce,
    WalletAddress,
    WalletAuthRequest,
    WalletCommandError,
    WalletProvider,
};
use internal_error::{InternalError, ResultIntoInternal};
use thiserror::Error;
use time_source::SystemTimeSource;

use crate::{GatewayApiClient, GatewayRequestError, SessionStore};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Statement the user sees in the wallet's signing prompt
pub const SIGN_IN_STATEMENT: &str = "Sign in to Ember to grow your savings";

/// Validity window of the signed message. Backdating `not_before` absorbs
/// clock skew between the wallet and the gateway.
const SIGN_IN_NOT_BEFORE_HOURS: i64 = 24;
const SIGN_IN_EXPIRATION_DAYS: i64 = 7;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Challenge/response sign-in handshake: fetch a nonce, have the wallet sign
/// over it, submit the signed message for verification, and establish the
/// session on success. None of the failure states are retried automatically.
pub struct SignInFlow {
    api: Arc<GatewayApiClient>,
    wallet: Arc<dyn WalletProvider>,
    session: Arc<SessionStore>,
    time_source: Arc<dyn SystemTimeSource>,
}

impl SignInFlow {
    pub fn new(
        api: Arc<GatewayApiClient>,
        wallet: Arc<dyn WalletProvider>,
        session: Arc<SessionStore>,
        time_source: Arc<dyn SystemTimeSource>,
    ) -> Self {
        Self {
            api,
            wallet,
            session,
            time_source,
        }
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn sign_in(&self) -> Result<WalletAddress, SignInError> {
        // Pre-flight, before any network call
        if !self.wallet.is_installed() {
            return Err(SignInError::ProviderUnavailable);
        }

        let nonce = self.api.fetch_nonce().await?.nonce;
        let nonce = AuthNonce::try_new(nonce).int_err()?;

        let now = self.time_source.now();
        let request = WalletAuthRequest {
            nonce: nonce.clone(),
            statement: SIGN_IN_STATEMENT.to_string(),
            not_before: now - Duration::hours(SIGN_IN_NOT_BEFORE_HOURS),
            expiration_time: now + Duration::days(SIGN_IN_EXPIRATION_DAYS),
            request_id: "0".to_string(),
        };

        let payload = match self.wallet.wallet_auth(request).await {
            Ok(payload) => payload,
            Err(WalletCommandError::NotInstalled) => return Err(SignInError::ProviderUnavailable),
            Err(WalletCommandError::Cancelled) => return Err(SignInError::Cancelled),
            Err(WalletCommandError::Failed { reason }) => {
                return Err(SignInError::Rejected { reason })
            }
            Err(WalletCommandError::Internal(e)) => return Err(e.into()),
        };

        let response = self
            .api
            .complete_siwe(payload, nonce.to_string())
            .await?;

        if !response.success {
            return Err(SignInError::Rejected {
                reason: response
                    .error
                    .unwrap_or_else(|| "Authentication failed".to_string()),
            });
        }

        let address = response
            .address
            .ok_or_else(|| InternalError::reason("Gateway reported success without an address"))?;
        let address = WalletAddress::try_new(address).int_err()?;

        self.session.login(address.clone());

        tracing::info!(%address, "Wallet sign-in completed");
        Ok(address)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum SignInError {
    #[error("Wallet application is not installed")]
    ProviderUnavailable,

    #[error("Sign-in was cancelled")]
    Cancelled,

    #[error("Sign-in rejected: {reason}")]
    Rejected { reason: String },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl From<GatewayRequestError> for SignInError {
    fn from(e: GatewayRequestError) -> Self {
        match e {
            GatewayRequestError::Rejected { message } => Self::Rejected { reason: message },
            GatewayRequestError::Internal(e) => Self::Internal(e),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
