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
    PayCommand,
    PaymentProvider,
    PaymentReference,
    TokenAmount,
    TokenSymbol,
};
use internal_error::{InternalError, ResultIntoInternal};
use thiserror::Error;

use crate::{GatewayApiClient, GatewayRequestError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Deposit orchestration: obtain a payment reference from the gateway, hand
/// it to the wallet's pay command addressed at the vault, and only after the
/// wallet reports a successful send submit the confirmation for server-side
/// verification.
///
/// At most one deposit runs at a time. [`DepositFlow::reset`] lets an
/// in-flight attempt run to completion but discards its outcome, which keeps
/// a dialog dismissed mid-payment from corrupting the next attempt.
pub struct DepositFlow {
    api: Arc<GatewayApiClient>,
    provider: Arc<dyn PaymentProvider>,
    vault_address: String,
    in_flight: AtomicBool,
    epoch: AtomicU64,
}

impl DepositFlow {
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

    /// Discards the outcome of any in-flight deposit and re-arms the flow
    /// for the next attempt. The in-flight request itself is not cancelled.
    pub fn reset(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
        self.in_flight.store(false, Ordering::Release);
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%amount, %token))]
    pub async fn initiate_deposit(
        &self,
        amount: f64,
        token: TokenSymbol,
    ) -> Result<DepositOutcome, DepositError> {
        // Precondition failures are rejected before any network call
        if !amount.is_finite() || amount <= 0.0 {
            return Err(DepositError::InvalidAmount { amount });
        }
        if !self.provider.is_installed() {
            return Err(DepositError::ProviderUnavailable);
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(DepositError::AlreadyInFlight);
        }

        let epoch = self.epoch.load(Ordering::Acquire);
        let result = self.run(amount, token).await;

        // A reset while we were running means the user dismissed the dialog:
        // the attempt completed, but its outcome must not surface
        if self.epoch.load(Ordering::Acquire) != epoch {
            return Ok(DepositOutcome::Discarded);
        }
        self.in_flight.store(false, Ordering::Release);
        result
    }

    async fn run(
        &self,
        amount: f64,
        token: TokenSymbol,
    ) -> Result<DepositOutcome, DepositError> {
        let initiated = self.api.initiate_payment().await?;
        let reference = PaymentReference::try_new(initiated.id).int_err()?;

        let command = PayCommand {
            reference: reference.clone(),
            to: self.vault_address.clone(),
            tokens: vec![TokenAmount {
                symbol: token,
                token_amount: token.to_token_units(amount),
            }],
            description: format!("Deposit {amount} {token} into the Ember vault"),
        };

        let payload = match self.provider.pay(command).await {
            Ok(payload) => payload,
            Err(WalletCommandError::NotInstalled) => return Err(DepositError::ProviderUnavailable),
            Err(WalletCommandError::Cancelled) => return Err(DepositError::Cancelled),
            Err(WalletCommandError::Failed { reason }) => {
                return Err(DepositError::Rejected { reason })
            }
            Err(WalletCommandError::Internal(e)) => return Err(e.into()),
        };

        // Confirmation runs strictly after the wallet reported the send
        let transaction_id = payload.transaction_id.clone();
        let response = self.api.confirm_payment(payload).await?;

        if !response.success {
            return Err(DepositError::Rejected {
                reason: response
                    .error
                    .unwrap_or_else(|| "Payment verification failed".to_string()),
            });
        }

        tracing::info!(%reference, %transaction_id, "Deposit confirmed");
        Ok(DepositOutcome::Confirmed {
            reference,
            transaction_id,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepositOutcome {
    Confirmed {
        reference: PaymentReference,
        transaction_id: String,
    },

    /// The attempt completed after [`DepositFlow::reset`] was called, so its
    /// result was dropped
    Discarded,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum DepositError {
    #[error("Invalid deposit amount: {amount}")]
    InvalidAmount { amount: f64 },

    #[error("Another deposit is already in progress")]
    AlreadyInFlight,

    #[error("Wallet application is not installed")]
    ProviderUnavailable,

    #[error("Payment was cancelled")]
    Cancelled,

    #[error("Payment rejected: {reason}")]
    Rejected { reason: String },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl From<GatewayRequestError> for DepositError {
    fn from(e: GatewayRequestError) -> Self {
        match e {
            GatewayRequestError::Rejected { message } => Self::Rejected { reason: message },
            GatewayRequestError::Internal(e) => Self::Internal(e),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
