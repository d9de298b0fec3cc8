// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AuthNonce, WalletAddress};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Result of the wallet provider's `wallet_auth` command: an EIP-4361
/// ("Sign-In with Ethereum") message together with the signature produced by
/// the user's wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletAuthPayload {
    /// Full text of the signed EIP-4361 message
    pub message: String,

    /// `0x`-prefixed 65-byte ECDSA signature in hex
    pub signature: String,

    /// Address the provider claims produced the signature. Must match the
    /// address recovered from the signature during verification.
    pub address: WalletAddress,

    /// Message format version reported by the provider
    #[serde(default)]
    pub version: Option<u32>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Parameters for the provider's `wallet_auth` command.
#[derive(Debug, Clone)]
pub struct WalletAuthRequest {
    pub nonce: AuthNonce,
    pub statement: String,
    pub not_before: DateTime<Utc>,
    pub expiration_time: DateTime<Utc>,
    pub request_id: String,
}
