// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dill::CatalogBuilder;
use ember_accounts_services::{NonceServiceImpl, WalletAuthServiceImpl};
use ember_adapter_dev_portal::{DevPortalConfig, DevPortalTransactionVerifier};
use ember_adapter_http::SessionCookieConfig;
use ember_payments_inmem::{InMemoryPaymentIntentRepository, InMemoryWithdrawalRequestRepository};
use ember_payments_services::{PaymentConfirmationServiceImpl, PaymentIntentServiceImpl};
use internal_error::{InternalError, ResultIntoInternal};
use time_source::SystemTimeSourceDefault;

use crate::api_server::ApiServer;
use crate::cli::Cli;
use crate::config::GatewayConfig;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const BINARY_NAME: &str = "ember-gateway";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn run(cli: Cli) -> Result<(), InternalError> {
    let mut config = GatewayConfig::load(cli.config.as_deref())?;
    if let Some(address) = cli.address {
        config.address = address;
    }
    if let Some(http_port) = cli.http_port {
        config.http_port = http_port;
    }

    tracing::info!(?config, "Loaded configuration");

    let dev_portal_config = config.dev_portal_config()?;
    let catalog = configure_catalog(&config, dev_portal_config).build();

    let server = ApiServer::new(&catalog, config.address, config.http_port).await?;
    tracing::info!(address = %server.local_addr(), "Gateway is listening");

    server.run().await.int_err()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn configure_catalog(
    config: &GatewayConfig,
    dev_portal_config: DevPortalConfig,
) -> CatalogBuilder {
    let mut b = CatalogBuilder::new();

    b.add::<SystemTimeSourceDefault>();
    b.add::<NonceServiceImpl>();
    b.add::<WalletAuthServiceImpl>();

    b.add::<InMemoryPaymentIntentRepository>();
    b.add::<InMemoryWithdrawalRequestRepository>();
    b.add::<PaymentIntentServiceImpl>();
    b.add::<PaymentConfirmationServiceImpl>();

    b.add_value(dev_portal_config);
    b.add::<DevPortalTransactionVerifier>();

    b.add_value(SessionCookieConfig {
        secure: config.secure_cookies,
    });

    b
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
