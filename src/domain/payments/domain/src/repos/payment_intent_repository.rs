// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Duration, Utc};
use internal_error::InternalError;
use thiserror::Error;

use crate::{PaymentIntent, PaymentReference};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
pub trait PaymentIntentRepository: Send + Sync {
    async fn save(&self, intent: PaymentIntent) -> Result<(), SavePaymentIntentError>;

    async fn find_by_reference(
        &self,
        reference: &PaymentReference,
    ) -> Result<Option<PaymentIntent>, InternalError>;

    /// Atomically removes and returns the intent, so that a reference can be
    /// confirmed at most once
    async fn consume(
        &self,
        reference: &PaymentReference,
    ) -> Result<Option<PaymentIntent>, InternalError>;

    /// Drops intents older than `ttl`, returning how many were removed
    async fn delete_expired(
        &self,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<usize, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum SavePaymentIntentError {
    #[error("Payment intent '{reference}' already exists")]
    Duplicate { reference: PaymentReference },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
