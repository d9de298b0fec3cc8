// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use ember_accounts::testing::MockWalletAuthService;
use ember_client::{DepositError, DepositFlow, DepositOutcome};
use ember_payments::testing::{MockPaymentProvider, MockTransactionVerifier};
use ember_payments::{PaymentSuccessPayload, TokenSymbol, TransactionStatus};
use pretty_assertions::assert_eq;

use crate::harness::{
    await_client_server_flow,
    ClientSideHarness,
    GatedPaymentProvider,
    TEST_VAULT_ADDRESS,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Wallet that approves every pay command, echoing its reference back
fn approving_provider() -> MockPaymentProvider {
    let mut provider = MockPaymentProvider::new();
    provider.expect_is_installed().return_const(true);
    provider.expect_pay().returning(|command| {
        Ok(PaymentSuccessPayload {
            transaction_id: "0xabc123".to_string(),
            reference: command.reference,
            chain: Some("worldchain".to_string()),
            timestamp: None,
            from: None,
        })
    });
    provider
}

fn deposit_flow(
    server: &crate::harness::TestGatewayServer,
    provider: Arc<dyn ember_payments::PaymentProvider>,
) -> DepositFlow {
    DepositFlow::new(
        ClientSideHarness::api_client(server),
        provider,
        TEST_VAULT_ADDRESS.to_string(),
    )
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_deposit_happy_path() {
    let harness = ClientSideHarness::new(
        MockWalletAuthService::new(),
        MockTransactionVerifier::reporting_status(TransactionStatus::Success),
    );
    let server = harness.api_server().await;

    let mut provider = MockPaymentProvider::new();
    provider.expect_is_installed().return_const(true);
    provider
        .expect_pay()
        .withf(|command| {
            command.to == TEST_VAULT_ADDRESS
                && command.tokens.len() == 1
                && command.tokens[0].symbol == TokenSymbol::Usdc
                && command.tokens[0].token_amount == "25500000"
        })
        .returning(|command| {
            Ok(PaymentSuccessPayload {
                transaction_id: "0xabc123".to_string(),
                reference: command.reference,
                chain: Some("worldchain".to_string()),
                timestamp: None,
                from: None,
            })
        });

    let flow = deposit_flow(&server, Arc::new(provider));

    let client_handle = async {
        let outcome = flow.initiate_deposit(25.5, TokenSymbol::Usdc).await.unwrap();

        match outcome {
            DepositOutcome::Confirmed {
                reference,
                transaction_id,
            } => {
                assert_eq!(reference.as_ref().len(), 32);
                assert_eq!(transaction_id, "0xabc123");
            }
            DepositOutcome::Discarded => panic!("Deposit unexpectedly discarded"),
        }
        assert!(!flow.is_in_flight());
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_deposit_rejects_non_positive_amounts_before_any_network_call() {
    let harness = ClientSideHarness::new(
        MockWalletAuthService::new(),
        MockTransactionVerifier::new(),
    );
    let server = harness.api_server().await;

    // No expectations: any wallet interaction would fail the test
    let flow = deposit_flow(&server, Arc::new(MockPaymentProvider::new()));

    let client_handle = async {
        for amount in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = flow.initiate_deposit(amount, TokenSymbol::Usdc).await;
            assert!(
                matches!(result, Err(DepositError::InvalidAmount { .. })),
                "Amount {amount} was not rejected",
            );
        }
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_deposit_failed_verification_surfaces_rejection() {
    let harness = ClientSideHarness::new(
        MockWalletAuthService::new(),
        MockTransactionVerifier::reporting_status(TransactionStatus::Failed),
    );
    let server = harness.api_server().await;
    let flow = deposit_flow(&server, Arc::new(approving_provider()));

    let client_handle = async {
        let result = flow.initiate_deposit(10.0, TokenSymbol::Wld).await;

        match result {
            Err(DepositError::Rejected { reason }) => {
                assert_eq!(reason, "Payment verification failed");
            }
            unexpected => panic!("Unexpected deposit result: {unexpected:?}"),
        }
        // The flow re-arms after a failed attempt
        assert!(!flow.is_in_flight());
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_second_deposit_rejected_while_first_in_flight() {
    let harness = ClientSideHarness::new(
        MockWalletAuthService::new(),
        MockTransactionVerifier::reporting_status(TransactionStatus::Success),
    );
    let server = harness.api_server().await;

    let provider = Arc::new(GatedPaymentProvider::new());
    let flow = Arc::new(deposit_flow(&server, provider.clone()));

    let client_handle = async {
        let first = tokio::spawn({
            let flow = flow.clone();
            async move { flow.initiate_deposit(5.0, TokenSymbol::Usdc).await }
        });

        while !flow.is_in_flight() {
            tokio::task::yield_now().await;
        }

        let second = flow.initiate_deposit(5.0, TokenSymbol::Usdc).await;
        assert!(matches!(second, Err(DepositError::AlreadyInFlight)));

        provider.release();
        let first = first.await.unwrap().unwrap();
        assert!(matches!(first, DepositOutcome::Confirmed { .. }));
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_reset_discards_outcome_of_in_flight_deposit() {
    let harness = ClientSideHarness::new(
        MockWalletAuthService::new(),
        MockTransactionVerifier::reporting_status(TransactionStatus::Success),
    );
    let server = harness.api_server().await;

    let provider = Arc::new(GatedPaymentProvider::new());
    let flow = Arc::new(deposit_flow(&server, provider.clone()));

    let client_handle = async {
        let first = tokio::spawn({
            let flow = flow.clone();
            async move { flow.initiate_deposit(5.0, TokenSymbol::Usdc).await }
        });

        while !flow.is_in_flight() {
            tokio::task::yield_now().await;
        }

        // User dismissed the dialog: the attempt completes but its outcome
        // must not surface
        flow.reset();
        provider.release();

        let first = first.await.unwrap().unwrap();
        assert_eq!(first, DepositOutcome::Discarded);

        // The flow is re-armed for the next attempt
        provider.release();
        let second = flow.initiate_deposit(7.0, TokenSymbol::Usdc).await.unwrap();
        assert!(matches!(second, DepositOutcome::Confirmed { .. }));
    };

    await_client_server_flow!(server.run(), client_handle);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
