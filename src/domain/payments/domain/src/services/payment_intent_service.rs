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

use crate::{PaymentIntent, TokenSymbol, WithdrawalRequest};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Issues references for deposits and withdrawals before the wallet is asked
/// to move funds.
#[async_trait::async_trait]
pub trait PaymentIntentService: Send + Sync {
    async fn create_intent(&self) -> Result<PaymentIntent, InternalError>;

    async fn create_withdrawal(
        &self,
        amount: f64,
        token: TokenSymbol,
    ) -> Result<WithdrawalRequest, CreateWithdrawalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum CreateWithdrawalError {
    #[error("Withdrawal amount must be positive, got {amount}")]
    InvalidAmount { amount: f64 },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
