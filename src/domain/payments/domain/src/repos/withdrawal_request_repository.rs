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

use crate::{PaymentReference, WithdrawalRequest};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
pub trait WithdrawalRequestRepository: Send + Sync {
    async fn save(&self, request: WithdrawalRequest) -> Result<(), SaveWithdrawalRequestError>;

    async fn find_by_reference(
        &self,
        reference: &PaymentReference,
    ) -> Result<Option<WithdrawalRequest>, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum SaveWithdrawalRequestError {
    #[error("Withdrawal request '{reference}' already exists")]
    Duplicate { reference: PaymentReference },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
