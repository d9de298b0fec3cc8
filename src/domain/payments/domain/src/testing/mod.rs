// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use ember_accounts::WalletCommandError;
use internal_error::InternalError;

use crate::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

mockall::mock! {
    pub TransactionVerifier {}

    #[async_trait::async_trait]
    impl TransactionVerifier for TransactionVerifier {
        async fn get_transaction(
            &self,
            transaction_id: &str,
        ) -> Result<VerifiedTransaction, GetTransactionError>;
    }
}

impl MockTransactionVerifier {
    pub fn reporting_status(status: TransactionStatus) -> Self {
        let mut mock = Self::new();
        mock.expect_get_transaction().returning(move |transaction_id| {
            Ok(VerifiedTransaction {
                transaction_id: transaction_id.to_string(),
                status,
                transaction_hash: None,
                reference: None,
                network: None,
                from_wallet_address: None,
                updated_at: None,
            })
        });
        mock
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

mockall::mock! {
    pub PaymentProvider {}

    #[async_trait::async_trait]
    impl PaymentProvider for PaymentProvider {
        fn is_installed(&self) -> bool;

        async fn pay(
            &self,
            command: PayCommand,
        ) -> Result<PaymentSuccessPayload, WalletCommandError>;

        async fn send_transaction(
            &self,
            command: SendTransactionCommand,
        ) -> Result<TransactionSuccessPayload, WalletCommandError>;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

mockall::mock! {
    pub PaymentIntentService {}

    #[async_trait::async_trait]
    impl PaymentIntentService for PaymentIntentService {
        async fn create_intent(&self) -> Result<PaymentIntent, InternalError>;

        async fn create_withdrawal(
            &self,
            amount: f64,
            token: TokenSymbol,
        ) -> Result<WithdrawalRequest, CreateWithdrawalError>;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

mockall::mock! {
    pub PaymentConfirmationService {}

    #[async_trait::async_trait]
    impl PaymentConfirmationService for PaymentConfirmationService {
        async fn confirm_payment(
            &self,
            payload: &PaymentSuccessPayload,
        ) -> Result<VerifiedTransaction, ConfirmPaymentError>;

        async fn confirm_withdrawal(
            &self,
            reference: &PaymentReference,
        ) -> Result<(), ConfirmWithdrawalError>;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
