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
use dill::{component, interface};
use ember_payments::*;
use internal_error::{InternalError, ResultIntoInternal};
use time_source::SystemTimeSource;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Unconfirmed intents older than this are dropped on the next create call.
const PAYMENT_INTENT_TTL_MINUTES: i64 = 60;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct PaymentIntentServiceImpl {
    time_source: Arc<dyn SystemTimeSource>,
    payment_intent_repo: Arc<dyn PaymentIntentRepository>,
    withdrawal_request_repo: Arc<dyn WithdrawalRequestRepository>,
}

#[component(pub)]
#[interface(dyn PaymentIntentService)]
impl PaymentIntentServiceImpl {
    pub fn new(
        time_source: Arc<dyn SystemTimeSource>,
        payment_intent_repo: Arc<dyn PaymentIntentRepository>,
        withdrawal_request_repo: Arc<dyn WithdrawalRequestRepository>,
    ) -> Self {
        Self {
            time_source,
            payment_intent_repo,
            withdrawal_request_repo,
        }
    }

    async fn evict_expired_intents(&self) -> Result<(), InternalError> {
        let evicted = self
            .payment_intent_repo
            .delete_expired(
                self.time_source.now(),
                Duration::minutes(PAYMENT_INTENT_TTL_MINUTES),
            )
            .await?;

        if evicted > 0 {
            tracing::debug!(evicted, "Evicted expired payment intents");
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl PaymentIntentService for PaymentIntentServiceImpl {
    #[tracing::instrument(level = "debug", skip_all)]
    async fn create_intent(&self) -> Result<PaymentIntent, InternalError> {
        self.evict_expired_intents().await?;

        let intent = PaymentIntent {
            reference: PaymentReference::new(),
            created_at: self.time_source.now(),
        };

        self.payment_intent_repo
            .save(intent.clone())
            .await
            .int_err()?;

        tracing::debug!(reference = %intent.reference, "Created payment intent");
        Ok(intent)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%amount, %token))]
    async fn create_withdrawal(
        &self,
        amount: f64,
        token: TokenSymbol,
    ) -> Result<WithdrawalRequest, CreateWithdrawalError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CreateWithdrawalError::InvalidAmount { amount });
        }

        let request = WithdrawalRequest {
            reference: PaymentReference::new(),
            amount,
            token,
            created_at: self.time_source.now(),
        };

        self.withdrawal_request_repo
            .save(request.clone())
            .await
            .int_err()?;

        tracing::debug!(reference = %request.reference, "Registered withdrawal request");
        Ok(request)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
