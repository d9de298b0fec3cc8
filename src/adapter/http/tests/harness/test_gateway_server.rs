// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::future::IntoFuture;
use std::net::SocketAddr;

use chrono::{TimeZone, Utc};
use dill::{Catalog, CatalogBuilder};
use ember_accounts::testing::MockWalletAuthService;
use ember_accounts::WalletAuthService;
use ember_accounts_services::NonceServiceImpl;
use ember_adapter_http::SessionCookieConfig;
use ember_payments::testing::MockTransactionVerifier;
use ember_payments::TransactionVerifier;
use ember_payments_inmem::{InMemoryPaymentIntentRepository, InMemoryWithdrawalRequestRepository};
use ember_payments_services::{PaymentConfirmationServiceImpl, PaymentIntentServiceImpl};
use observability::axum::unknown_fallback_handler;
use time_source::{SystemTimeSource, SystemTimeSourceStub};
use utoipa_axum::router::OpenApiRouter;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct TestGatewayServer {
    server_future: Box<dyn std::future::Future<Output = Result<(), std::io::Error>> + Unpin + Send>,
    local_addr: SocketAddr,
}

impl TestGatewayServer {
    pub fn new(catalog: Catalog, listener: tokio::net::TcpListener) -> Self {
        let (router, _api) = OpenApiRouter::new()
            .nest("/api", ember_adapter_http::root_router())
            .layer(
                tower::ServiceBuilder::new()
                    .layer(
                        tower_http::cors::CorsLayer::new()
                            .allow_origin(tower_http::cors::Any)
                            .allow_methods(vec![http::Method::GET, http::Method::POST])
                            .allow_headers(tower_http::cors::Any),
                    )
                    .layer(axum::extract::Extension(catalog)),
            )
            .fallback(unknown_fallback_handler)
            .split_for_parts();

        let local_addr = listener.local_addr().unwrap();

        let server_future =
            Box::new(axum::serve(listener, router.into_make_service()).into_future());

        Self {
            server_future,
            local_addr,
        }
    }

    pub fn local_addr(&self) -> &SocketAddr {
        &self.local_addr
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        self.server_future.await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct GatewayHarness {
    catalog: Catalog,
}

impl GatewayHarness {
    pub fn new(
        wallet_auth_service: MockWalletAuthService,
        transaction_verifier: MockTransactionVerifier,
    ) -> Self {
        let mut b = CatalogBuilder::new();
        b.add_value(SessionCookieConfig::default());
        b.add_value(wallet_auth_service)
            .bind::<dyn WalletAuthService, MockWalletAuthService>();
        b.add_value(transaction_verifier)
            .bind::<dyn TransactionVerifier, MockTransactionVerifier>();
        b.add_value(SystemTimeSourceStub::new_set(
            Utc.with_ymd_and_hms(2026, 8, 28, 12, 0, 0).unwrap(),
        ))
        .bind::<dyn SystemTimeSource, SystemTimeSourceStub>();
        b.add::<NonceServiceImpl>();
        b.add::<InMemoryPaymentIntentRepository>();
        b.add::<InMemoryWithdrawalRequestRepository>();
        b.add::<PaymentIntentServiceImpl>();
        b.add::<PaymentConfirmationServiceImpl>();

        Self { catalog: b.build() }
    }

    pub async fn api_server(&self) -> TestGatewayServer {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        TestGatewayServer::new(self.catalog.clone(), listener)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
