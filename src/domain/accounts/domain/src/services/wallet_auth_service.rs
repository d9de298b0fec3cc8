// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;
use thiserror::Error;

use crate::{AuthNonce, WalletAddress, WalletAuthPayload};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Verifies a signed EIP-4361 payload against the nonce issued to the caller's
/// session and returns the authenticated wallet address.
#[async_trait::async_trait]
pub trait WalletAuthService: Send + Sync {
    async fn verify(
        &self,
        payload: &WalletAuthPayload,
        expected_nonce: &AuthNonce,
    ) -> Result<WalletAddress, WalletAuthError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum WalletAuthError {
    #[error("Message is not a valid EIP-4361 message")]
    MessageMalformed,

    #[error("Nonce in the signed message does not match the issued nonce")]
    NonceMismatch,

    #[error("Signature verification failed")]
    InvalidSignature,

    #[error("Message is expired or not yet valid")]
    Expired,

    #[error("Recovered address does not match the claimed address")]
    AddressMismatch,

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
