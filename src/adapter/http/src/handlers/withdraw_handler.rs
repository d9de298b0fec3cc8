// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum::{Extension, Json};
use dill::Catalog;
use ember_payments::{
    ConfirmWithdrawalError,
    CreateWithdrawalError,
    PaymentConfirmationService,
    PaymentIntentService,
    TokenSymbol,
    TransactionSuccessPayload,
};
use http_common::ApiError;
use serde::{Deserialize, Serialize};

use crate::axum_utils::from_catalog_n;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InitiateWithdrawRequest {
    pub amount: f64,
    #[schema(value_type = String)]
    pub token: TokenSymbol,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InitiateWithdrawResponse {
    pub id: String,
    pub amount: f64,
    #[schema(value_type = String)]
    pub token: TokenSymbol,
    pub success: bool,
}

/// Register a withdrawal request
#[utoipa::path(
    post,
    path = "/initiate-withdraw",
    request_body = InitiateWithdrawRequest,
    responses(
        (status = OK, body = InitiateWithdrawResponse),
    ),
    tag = "ember",
)]
pub async fn initiate_withdraw_handler(
    Extension(catalog): Extension<Catalog>,
    Json(request): Json<InitiateWithdrawRequest>,
) -> Result<Json<InitiateWithdrawResponse>, ApiError> {
    let payment_intent_service = from_catalog_n!(catalog, dyn PaymentIntentService);

    let withdrawal = payment_intent_service
        .create_withdrawal(request.amount, request.token)
        .await
        .map_err(|e| match e {
            CreateWithdrawalError::InvalidAmount { .. } => {
                ApiError::bad_request_with_message("Invalid withdrawal amount")
            }
            CreateWithdrawalError::Internal(e) => e.into(),
        })?;

    Ok(Json(InitiateWithdrawResponse {
        id: withdrawal.reference.to_string(),
        amount: withdrawal.amount,
        token: withdrawal.token,
        success: true,
    }))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConfirmWithdrawRequest {
    /// Success payload as delivered by the wallet's transaction event
    #[schema(value_type = Object)]
    pub payload: TransactionSuccessPayload,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConfirmWithdrawResponse {
    pub success: bool,
    pub transaction_id: String,
    pub message: String,
}

/// Acknowledge a wallet-reported withdrawal.
///
/// No on-chain verification is performed - the withdrawal is matched to its
/// registered request and acknowledged.
#[utoipa::path(
    post,
    path = "/confirm-withdraw",
    request_body = ConfirmWithdrawRequest,
    responses(
        (status = OK, body = ConfirmWithdrawResponse),
    ),
    tag = "ember",
)]
pub async fn confirm_withdraw_handler(
    Extension(catalog): Extension<Catalog>,
    Json(request): Json<ConfirmWithdrawRequest>,
) -> Result<Json<ConfirmWithdrawResponse>, ApiError> {
    let confirmation_service = from_catalog_n!(catalog, dyn PaymentConfirmationService);

    confirmation_service
        .confirm_withdrawal(&request.payload.reference)
        .await
        .map_err(|e| match e {
            ConfirmWithdrawalError::UnknownReference { .. } => {
                ApiError::bad_request_with_message("Unknown withdrawal reference")
            }
            ConfirmWithdrawalError::Internal(e) => e.into(),
        })?;

    Ok(Json(ConfirmWithdrawResponse {
        success: true,
        transaction_id: request.payload.transaction_id,
        message: "Withdrawal completed successfully".to_string(),
    }))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
