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

use crate::VerifiedTransaction;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Looks up the authoritative state of a wallet-submitted transaction on the
/// transaction relay.
#[async_trait::async_trait]
pub trait TransactionVerifier: Send + Sync {
    async fn get_transaction(
        &self,
        transaction_id: &str,
    ) -> Result<VerifiedTransaction, GetTransactionError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum GetTransactionError {
    #[error("Transaction '{transaction_id}' not found")]
    NotFound { transaction_id: String },

    #[error("Transaction relay responded with status {status}")]
    UpstreamError { status: u16 },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
