// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use ember_accounts::WalletAuthPayload;
use ember_adapter_http::{
    CheckAuthResponse,
    CompleteSiweRequest,
    CompleteSiweResponse,
    ConfirmPaymentRequest,
    ConfirmPaymentResponse,
    ConfirmWithdrawRequest,
    ConfirmWithdrawResponse,
    InitiatePaymentResponse,
    InitiateWithdrawRequest,
    InitiateWithdrawResponse,
    LogoutResponse,
    NonceResponse,
};
use ember_payments::{PaymentSuccessPayload, TokenSymbol, TransactionSuccessPayload};
use http_common::ApiErrorResponse;
use internal_error::{InternalError, ResultIntoInternal};
use thiserror::Error;
use url::Url;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Thin typed wrapper over the gateway's `/api` routes. Holds a cookie jar so
/// the nonce and session cookies flow between calls the way a browser would
/// carry them.
pub struct GatewayApiClient {
    base_url: Url,
    client: reqwest::Client,
}

impl GatewayApiClient {
    pub fn new(base_url: Url) -> Result<Self, InternalError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .int_err()?;

        Ok(Self { base_url, client })
    }

    fn route(&self, path: &str) -> Result<Url, InternalError> {
        self.base_url.join(path).int_err()
    }

    pub async fn fetch_nonce(&self) -> Result<NonceResponse, GatewayRequestError> {
        let response = self
            .client
            .get(self.route("api/nonce")?)
            .send()
            .await
            .int_err()?;

        Self::expect_json(response).await
    }

    pub async fn complete_siwe(
        &self,
        payload: WalletAuthPayload,
        nonce: String,
    ) -> Result<CompleteSiweResponse, GatewayRequestError> {
        let response = self
            .client
            .post(self.route("api/complete-siwe")?)
            .json(&CompleteSiweRequest { payload, nonce })
            .send()
            .await
            .int_err()?;

        Self::expect_json(response).await
    }

    pub async fn check_auth(&self) -> Result<CheckAuthResponse, GatewayRequestError> {
        let response = self
            .client
            .get(self.route("api/check-auth")?)
            .send()
            .await
            .int_err()?;

        Self::expect_json(response).await
    }

    pub async fn logout(&self) -> Result<LogoutResponse, GatewayRequestError> {
        let response = self
            .client
            .post(self.route("api/logout")?)
            .send()
            .await
            .int_err()?;

        Self::expect_json(response).await
    }

    pub async fn initiate_payment(&self) -> Result<InitiatePaymentResponse, GatewayRequestError> {
        let response = self
            .client
            .post(self.route("api/initiate-payment")?)
            .send()
            .await
            .int_err()?;

        Self::expect_json(response).await
    }

    /// Confirmation outcomes are reported in-band: both the 200 and the 400
    /// responses carry a [`ConfirmPaymentResponse`] body.
    pub async fn confirm_payment(
        &self,
        payload: PaymentSuccessPayload,
    ) -> Result<ConfirmPaymentResponse, GatewayRequestError> {
        let response = self
            .client
            .post(self.route("api/confirm-payment")?)
            .json(&ConfirmPaymentRequest { payload })
            .send()
            .await
            .int_err()?;

        let status = response.status();
        if status.is_success() || status == reqwest::StatusCode::BAD_REQUEST {
            Ok(response.json().await.int_err()?)
        } else {
            Err(GatewayRequestError::unexpected_status(status))
        }
    }

    pub async fn initiate_withdraw(
        &self,
        amount: f64,
        token: TokenSymbol,
    ) -> Result<InitiateWithdrawResponse, GatewayRequestError> {
        let response = self
            .client
            .post(self.route("api/initiate-withdraw")?)
            .json(&InitiateWithdrawRequest { amount, token })
            .send()
            .await
            .int_err()?;

        Self::expect_json(response).await
    }

    pub async fn confirm_withdraw(
        &self,
        payload: TransactionSuccessPayload,
    ) -> Result<ConfirmWithdrawResponse, GatewayRequestError> {
        let response = self
            .client
            .post(self.route("api/confirm-withdraw")?)
            .json(&ConfirmWithdrawRequest { payload })
            .send()
            .await
            .int_err()?;

        Self::expect_json(response).await
    }

    async fn expect_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GatewayRequestError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await.int_err()?);
        }
        if status.is_client_error() {
            if let Ok(body) = response.json::<ApiErrorResponse>().await {
                return Err(GatewayRequestError::Rejected {
                    message: body.error,
                });
            }
        }
        Err(GatewayRequestError::unexpected_status(status))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum GatewayRequestError {
    #[error("Gateway rejected the request: {message}")]
    Rejected { message: String },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl GatewayRequestError {
    fn unexpected_status(status: reqwest::StatusCode) -> Self {
        Self::Internal(InternalError::reason(format!(
            "Gateway returned unexpected status {status}"
        )))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
