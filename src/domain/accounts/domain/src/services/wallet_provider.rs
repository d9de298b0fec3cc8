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

use crate::{WalletAuthPayload, WalletAuthRequest};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Client-side seam to the host wallet application. Implementations bridge to
/// whatever runtime actually holds the user's keys; tests substitute a mock.
#[async_trait::async_trait]
pub trait WalletProvider: Send + Sync {
    /// Whether the host wallet is present in the current environment
    fn is_installed(&self) -> bool;

    /// Ask the wallet to sign an EIP-4361 message built from the request
    async fn wallet_auth(
        &self,
        request: WalletAuthRequest,
    ) -> Result<WalletAuthPayload, WalletCommandError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum WalletCommandError {
    #[error("Wallet application is not installed")]
    NotInstalled,

    #[error("User cancelled the request")]
    Cancelled,

    #[error("Wallet command failed: {reason}")]
    Failed { reason: String },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
