// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use dill::{component, interface};
use ember_payments::{GetTransactionError, TransactionVerifier, VerifiedTransaction};
use internal_error::ResultIntoInternal;
use url::Url;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Connection settings for the wallet vendor's developer portal, read from
/// app config.
#[derive(Debug, Clone)]
pub struct DevPortalConfig {
    /// E.g. `https://developer.worldcoin.org/`
    pub base_url: Url,
    /// Application identifier registered with the portal
    pub app_id: String,
    /// Server-held API credential, never exposed to clients
    pub api_key: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// [`TransactionVerifier`] backed by the developer portal's transaction API.
pub struct DevPortalTransactionVerifier {
    config: Arc<DevPortalConfig>,
    client: reqwest::Client,
}

#[component(pub)]
#[interface(dyn TransactionVerifier)]
impl DevPortalTransactionVerifier {
    pub fn new(config: Arc<DevPortalConfig>) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl TransactionVerifier for DevPortalTransactionVerifier {
    #[tracing::instrument(level = "debug", skip_all, fields(%transaction_id))]
    async fn get_transaction(
        &self,
        transaction_id: &str,
    ) -> Result<VerifiedTransaction, GetTransactionError> {
        let mut url = self
            .config
            .base_url
            .join(&format!("api/v2/minikit/transaction/{transaction_id}"))
            .int_err()?;
        url.query_pairs_mut()
            .append_pair("app_id", &self.config.app_id);

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.config.api_key)
            .send()
            .await
            .int_err()?;

        match response.status() {
            status if status.is_success() => {
                let transaction: VerifiedTransaction = response.json().await.int_err()?;
                Ok(transaction)
            }
            reqwest::StatusCode::NOT_FOUND => Err(GetTransactionError::NotFound {
                transaction_id: transaction_id.to_string(),
            }),
            status => {
                tracing::warn!(%status, "Developer portal returned an error");
                Err(GetTransactionError::UpstreamError {
                    status: status.as_u16(),
                })
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
