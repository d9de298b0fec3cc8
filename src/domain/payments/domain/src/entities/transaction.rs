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

use crate::PaymentReference;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Final payload the wallet hands back once the user approves a payment
/// command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSuccessPayload {
    /// Identifier of the submitted transaction, assigned by the wallet
    pub transaction_id: String,

    /// Reference the command was initiated with
    pub reference: PaymentReference,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Lifecycle state the transaction relay reports for a submitted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Success,
    Failed,
    #[serde(other)]
    Unknown,
}

impl TransactionStatus {
    /// Deposits are credited optimistically: a transaction still pending on
    /// the relay counts as confirmed, only an explicit failure (or a state we
    /// do not recognize) rejects it.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Pending | Self::Success)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Final payload the wallet hands back once the user approves an arbitrary
/// transaction, such as a withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSuccessPayload {
    pub transaction_id: String,
    pub reference: PaymentReference,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Transaction record as reported by the transaction relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedTransaction {
    pub transaction_id: String,
    pub status: TransactionStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_wallet_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
