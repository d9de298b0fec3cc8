// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use dill::{component, interface};
use ember_accounts::{
    AuthNonce,
    WalletAddress,
    WalletAuthError,
    WalletAuthPayload,
    WalletAuthService,
};
use internal_error::ResultIntoInternal;
use time_source::SystemTimeSource;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const EIP191_SIGNATURE_LENGTH: usize = 65;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// EIP-4361 verifier. Parses the signed message, checks the embedded nonce
/// against the one issued to the session, validates the message time window
/// against the injected clock, and recovers the signer.
pub struct WalletAuthServiceImpl {
    time_source: Arc<dyn SystemTimeSource>,
}

#[component(pub)]
#[interface(dyn WalletAuthService)]
impl WalletAuthServiceImpl {
    pub fn new(time_source: Arc<dyn SystemTimeSource>) -> Self {
        Self { time_source }
    }

    fn decode_signature(signature: &str) -> Result<Vec<u8>, WalletAuthError> {
        let hex_body = signature.strip_prefix("0x").unwrap_or(signature);
        let bytes = hex::decode(hex_body).map_err(|_| WalletAuthError::InvalidSignature)?;
        if bytes.len() != EIP191_SIGNATURE_LENGTH {
            return Err(WalletAuthError::InvalidSignature);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl WalletAuthService for WalletAuthServiceImpl {
    #[tracing::instrument(level = "debug", skip_all)]
    async fn verify(
        &self,
        payload: &WalletAuthPayload,
        expected_nonce: &AuthNonce,
    ) -> Result<WalletAddress, WalletAuthError> {
        let message: siwe::Message = payload
            .message
            .parse()
            .map_err(|_| WalletAuthError::MessageMalformed)?;

        if message.nonce != *expected_nonce.as_ref() {
            return Err(WalletAuthError::NonceMismatch);
        }

        let signature = Self::decode_signature(&payload.signature)?;

        let now = self.time_source.now();
        let timestamp = time::OffsetDateTime::from_unix_timestamp(now.timestamp()).int_err()?;

        message
            .verify(
                &signature,
                &siwe::VerificationOpts {
                    domain: None,
                    nonce: Some(expected_nonce.as_ref().to_string()),
                    timestamp: Some(timestamp),
                },
            )
            .await
            .map_err(|e| match e {
                siwe::VerificationError::Time => WalletAuthError::Expired,
                _ => WalletAuthError::InvalidSignature,
            })?;

        let recovered =
            WalletAddress::try_new(format!("0x{}", hex::encode(message.address)))
                .map_err(|_| WalletAuthError::MessageMalformed)?;

        if recovered != payload.address {
            return Err(WalletAuthError::AddressMismatch);
        }

        Ok(recovered)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
