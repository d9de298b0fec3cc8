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

use crate::{PaymentReference, PaymentSuccessPayload, VerifiedTransaction};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Settles a payment the wallet reports as sent: matches it to an outstanding
/// intent and checks the transaction with the relay.
#[async_trait::async_trait]
pub trait PaymentConfirmationService: Send + Sync {
    async fn confirm_payment(
        &self,
        payload: &PaymentSuccessPayload,
    ) -> Result<VerifiedTransaction, ConfirmPaymentError>;

    /// Withdrawal settlement is not wired to an on-chain check yet and
    /// succeeds for any registered reference
    async fn confirm_withdrawal(
        &self,
        reference: &PaymentReference,
    ) -> Result<(), ConfirmWithdrawalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum ConfirmPaymentError {
    #[error("No outstanding payment intent for reference '{reference}'")]
    UnknownReference { reference: PaymentReference },

    #[error("Transaction '{}' did not pass verification", transaction.transaction_id)]
    VerificationFailed {
        transaction: Box<VerifiedTransaction>,
    },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Debug, Error)]
pub enum ConfirmWithdrawalError {
    #[error("No outstanding withdrawal request for reference '{reference}'")]
    UnknownReference { reference: PaymentReference },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
