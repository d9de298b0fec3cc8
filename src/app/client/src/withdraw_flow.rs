// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use ember_accounts::WalletCommandError;
use ember_payments::{
    PaymentProvider,
    PaymentReference,
    SendTransactionCommand,
    TokenSymbol,
};
use internal_error::{InternalError, ResultIntoInternal};
use thiserror::Error;

use crate::{GatewayApiClient, GatewayRequestError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Withdrawal orchestration, mirroring the deposit shape: register the
/// withdrawal with the gateway, have the wallet submit the vault transaction,
/// then acknowledge it server-side. The acknowledgement performs no on-chain
/// verification.
pub struct WithdrawFlow {
    api: Arc<GatewayApiClient>,
    provider: Arc<dyn PaymentProvider>,
    vault_address: String,
    in_flight: AtomicBool,
    epoch: AtomicU64,
}

impl WithdrawFlow {
    pub fn new(
        api: Arc<GatewayApiClient>,
        provider: Arc<dyn PaymentProvider>,
        vault_address: String,
    ) -> Self {
        Self {
            api,
            provider,
            vault_address,
            in_flight: AtomicBool::new(false),
            epoch: AtomicU64::new(0),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// See [`crate::DepositFlow::reset`]
    pub fn reset(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
        self.in_flight.store(false, Ordering::Release);
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%amount, %token))]
    pub async fn initiate_withdraw(
        &self,
        amount: f64,
        token: TokenSymbol,
    ) -> Result<WithdrawOutcome, WithdrawError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(WithdrawError::InvalidAmount { amount });
        }
        if !self.provider.is_installed() {
            return Err(WithdrawError::ProviderUnavailable);
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(WithdrawError::AlreadyInFlight);
        }

        let epoch = self.epoch.load(Ordering::Acquire);
        let result = self.run(amount, token).await;

        if self.epoch.load(Ordering::Acquire) != epoch {
            return Ok(WithdrawOutcome::Discarded);
        }
        self.in_flight.store(false, Ordering::Release);
        result
    }

    async fn run(
        &self,
        amount: f64,
        token: TokenSymbol,
    ) -> Result<WithdrawOutcome, WithdrawError> {
        let initiated = self.api.initiate_withdraw(amount, token).await?;
        let reference = PaymentReference::try_new(initiated.id).int_err()?;

        let payload = match self
            .provider
            .send_transaction(SendTransactionCommand {
                reference: reference.clone(),
                to: self.vault_address.clone(),
                amount,
                token,
            })
            .await
        {
            Ok(payload) => payload,
            Err(WalletCommandError::NotInstalled) => {
                return Err(WithdrawError::ProviderUnavailable)
            }
            Err(WalletCommandError::Cancelled) => return Err(WithdrawError::Cancelled),
            Err(WalletCommandError::Failed { reason }) => {
                return Err(WithdrawError::Rejected { reason })
            }
            Err(WalletCommandError::Internal(e)) => return Err(e.into()),
        };

        let response = self.api.confirm_withdraw(payload).await?;

        tracing::info!(
            %reference,
            transaction_id = %response.transaction_id,
            "Withdrawal acknowledged",
        );
        Ok(WithdrawOutcome::Completed {
            reference,
            transaction_id: response.transaction_id,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WithdrawOutcome {
    Completed {
        reference: PaymentReference,
        transaction_id: String,
    },

    /// The attempt completed after [`WithdrawFlow::reset`] was called
    Discarded,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum WithdrawError {
    #[error("Invalid withdrawal amount: {amount}")]
    InvalidAmount { amount: f64 },

    #[error("Another withdrawal is already in progress")]
    AlreadyInFlight,

    #[error("Wallet application is not installed")]
    ProviderUnavailable,

    #[error("Withdrawal was cancelled")]
    Cancelled,

    #[error("Withdrawal rejected: {reason}")]
    Rejected { reason: String },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl From<GatewayRequestError> for WithdrawError {
    fn from(e: GatewayRequestError) -> Self {
        match e {
            GatewayRequestError::Rejected { message } => Self::Rejected { reason: message },
            GatewayRequestError::Internal(e) => Self::Internal(e),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
