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
use ember_payments::*;
use internal_error::ErrorIntoInternal;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct PaymentConfirmationServiceImpl {
    payment_intent_repo: Arc<dyn PaymentIntentRepository>,
    withdrawal_request_repo: Arc<dyn WithdrawalRequestRepository>,
    transaction_verifier: Arc<dyn TransactionVerifier>,
}

#[component(pub)]
#[interface(dyn PaymentConfirmationService)]
impl PaymentConfirmationServiceImpl {
    pub fn new(
        payment_intent_repo: Arc<dyn PaymentIntentRepository>,
        withdrawal_request_repo: Arc<dyn WithdrawalRequestRepository>,
        transaction_verifier: Arc<dyn TransactionVerifier>,
    ) -> Self {
        Self {
            payment_intent_repo,
            withdrawal_request_repo,
            transaction_verifier,
        }
    }
}

#[async_trait::async_trait]
impl PaymentConfirmationService for PaymentConfirmationServiceImpl {
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(reference = %payload.reference, transaction_id = %payload.transaction_id)
    )]
    async fn confirm_payment(
        &self,
        payload: &PaymentSuccessPayload,
    ) -> Result<VerifiedTransaction, ConfirmPaymentError> {
        // Consuming up-front makes confirmation single-shot: a replay of the
        // same reference fails even if the relay lookup below errors out
        let Some(_intent) = self
            .payment_intent_repo
            .consume(&payload.reference)
            .await?
        else {
            return Err(ConfirmPaymentError::UnknownReference {
                reference: payload.reference.clone(),
            });
        };

        let transaction = self
            .transaction_verifier
            .get_transaction(&payload.transaction_id)
            .await
            .map_err(|e| match e {
                GetTransactionError::Internal(e) => ConfirmPaymentError::Internal(e),
                e @ (GetTransactionError::NotFound { .. }
                | GetTransactionError::UpstreamError { .. }) => {
                    ConfirmPaymentError::Internal(e.int_err())
                }
            })?;

        if !transaction.status.is_confirmed() {
            tracing::warn!(
                status = ?transaction.status,
                "Rejecting payment confirmation",
            );
            return Err(ConfirmPaymentError::VerificationFailed {
                transaction: Box::new(transaction),
            });
        }

        tracing::info!(
            status = ?transaction.status,
            "Payment confirmed",
        );
        Ok(transaction)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%reference))]
    async fn confirm_withdrawal(
        &self,
        reference: &PaymentReference,
    ) -> Result<(), ConfirmWithdrawalError> {
        let Some(request) = self
            .withdrawal_request_repo
            .find_by_reference(reference)
            .await?
        else {
            return Err(ConfirmWithdrawalError::UnknownReference {
                reference: reference.clone(),
            });
        };

        // TODO: verify the on-chain transfer once withdrawals leave the
        // simulated balance
        tracing::info!(amount = request.amount, token = %request.token, "Withdrawal confirmed");
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
