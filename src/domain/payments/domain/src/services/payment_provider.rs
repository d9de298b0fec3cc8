// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use ember_accounts::WalletCommandError;
use serde::{Deserialize, Serialize};

use crate::{PaymentReference, PaymentSuccessPayload, TokenSymbol, TransactionSuccessPayload};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Client-side seam to the host wallet's payment commands.
#[async_trait::async_trait]
pub trait PaymentProvider: Send + Sync {
    fn is_installed(&self) -> bool;

    /// Ask the wallet to transfer tokens to the given address
    async fn pay(&self, command: PayCommand) -> Result<PaymentSuccessPayload, WalletCommandError>;

    /// Ask the wallet to submit an arbitrary transaction, used for
    /// withdrawals from the vault
    async fn send_transaction(
        &self,
        command: SendTransactionCommand,
    ) -> Result<TransactionSuccessPayload, WalletCommandError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Payment command in the shape the wallet expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayCommand {
    pub reference: PaymentReference,
    pub to: String,
    pub tokens: Vec<TokenAmount>,
    pub description: String,
}

/// Withdrawal command in the shape the wallet expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendTransactionCommand {
    pub reference: PaymentReference,
    pub to: String,
    pub amount: f64,
    pub token: TokenSymbol,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAmount {
    pub symbol: TokenSymbol,

    /// Integer token units as a decimal string, see
    /// [`TokenSymbol::to_token_units`]
    pub token_amount: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
