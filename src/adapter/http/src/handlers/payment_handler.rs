// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum::response::IntoResponse;
use axum::{Extension, Json};
use dill::Catalog;
use ember_payments::{
    ConfirmPaymentError,
    PaymentConfirmationService,
    PaymentIntentService,
    PaymentSuccessPayload,
    VerifiedTransaction,
};
use http_common::ApiError;
use serde::{Deserialize, Serialize};

use crate::axum_utils::from_catalog_n;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InitiatePaymentResponse {
    /// Reference to pass to the wallet's pay command
    pub id: String,
    pub success: bool,
}

/// Create a payment intent for a deposit
#[utoipa::path(
    post,
    path = "/initiate-payment",
    responses(
        (status = OK, body = InitiatePaymentResponse),
    ),
    tag = "ember",
)]
pub async fn initiate_payment_handler(
    Extension(catalog): Extension<Catalog>,
) -> Result<Json<InitiatePaymentResponse>, ApiError> {
    let payment_intent_service = from_catalog_n!(catalog, dyn PaymentIntentService);

    let intent = payment_intent_service.create_intent().await?;

    Ok(Json(InitiatePaymentResponse {
        id: intent.reference.to_string(),
        success: true,
    }))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConfirmPaymentRequest {
    /// Success payload as delivered by the wallet's payment event
    #[schema(value_type = Object)]
    pub payload: PaymentSuccessPayload,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConfirmPaymentResponse {
    pub success: bool,

    #[schema(value_type = Object)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction: Option<VerifiedTransaction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Verify a wallet-reported payment against the transaction relay
#[utoipa::path(
    post,
    path = "/confirm-payment",
    request_body = ConfirmPaymentRequest,
    responses(
        (status = OK, body = ConfirmPaymentResponse),
        (status = BAD_REQUEST, body = ConfirmPaymentResponse),
    ),
    tag = "ember",
)]
pub async fn confirm_payment_handler(
    Extension(catalog): Extension<Catalog>,
    Json(request): Json<ConfirmPaymentRequest>,
) -> Result<axum::response::Response, ApiError> {
    let confirmation_service = from_catalog_n!(catalog, dyn PaymentConfirmationService);

    match confirmation_service.confirm_payment(&request.payload).await {
        Ok(transaction) => Ok(Json(ConfirmPaymentResponse {
            success: true,
            transaction: Some(transaction),
            message: Some("Payment confirmed successfully".to_string()),
            error: None,
        })
        .into_response()),
        Err(ConfirmPaymentError::UnknownReference { .. }) => Ok((
            http::StatusCode::BAD_REQUEST,
            Json(ConfirmPaymentResponse {
                success: false,
                transaction: None,
                message: None,
                error: Some("Unknown payment reference".to_string()),
            }),
        )
            .into_response()),
        Err(ConfirmPaymentError::VerificationFailed { transaction }) => Ok((
            http::StatusCode::BAD_REQUEST,
            Json(ConfirmPaymentResponse {
                success: false,
                transaction: Some(*transaction),
                message: None,
                error: Some("Payment verification failed".to_string()),
            }),
        )
            .into_response()),
        Err(ConfirmPaymentError::Internal(e)) => Err(e.into()),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
