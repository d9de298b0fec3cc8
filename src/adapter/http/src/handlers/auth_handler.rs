// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use dill::Catalog;
use ember_accounts::{
    AuthNonce,
    NonceService,
    WalletAuthError,
    WalletAuthPayload,
    WalletAuthService,
    SESSION_TOKEN_SENTINEL,
};
use http_common::ApiError;
use serde::{Deserialize, Serialize};

use crate::axum_utils::from_catalog_n;
use crate::{SessionCookieConfig, AUTH_COOKIE, NONCE_COOKIE};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The sentinel cookie carries no identity, so there is no real address to
/// return here. Matches the demo contract until sessions store the
/// authenticated wallet.
const SESSION_PLACEHOLDER_ADDRESS: &str = "0x1234...5678";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NonceResponse {
    pub nonce: String,
}

/// Issue a single-use sign-in challenge
#[utoipa::path(
    get,
    path = "/nonce",
    responses(
        (status = OK, body = NonceResponse),
    ),
    tag = "ember",
)]
pub async fn nonce_handler(
    Extension(catalog): Extension<Catalog>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<NonceResponse>), ApiError> {
    let (nonce_service, cookie_config) =
        from_catalog_n!(catalog, dyn NonceService, SessionCookieConfig);

    let nonce = nonce_service.issue_nonce();
    let jar = jar.add(cookie_config.session_cookie(NONCE_COOKIE, nonce.to_string()));

    Ok((
        jar,
        Json(NonceResponse {
            nonce: nonce.to_string(),
        }),
    ))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CompleteSiweRequest {
    /// Signed message payload as returned by the wallet
    #[schema(value_type = Object)]
    pub payload: WalletAuthPayload,

    /// Nonce the wallet signed over, must equal the issued one
    pub nonce: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CompleteSiweResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CompleteSiweResponse {
    fn rejected(error: &str) -> Self {
        Self {
            success: false,
            address: None,
            message: None,
            error: Some(error.to_string()),
        }
    }
}

/// Complete the sign-in handshake by submitting the signed challenge.
///
/// Authentication failures are reported in-band with `success: false` and a
/// distinct `error` message, always with a 200 status.
#[utoipa::path(
    post,
    path = "/complete-siwe",
    request_body = CompleteSiweRequest,
    responses(
        (status = OK, body = CompleteSiweResponse),
    ),
    tag = "ember",
)]
pub async fn complete_siwe_handler(
    Extension(catalog): Extension<Catalog>,
    jar: CookieJar,
    Json(request): Json<CompleteSiweRequest>,
) -> Result<(CookieJar, Json<CompleteSiweResponse>), ApiError> {
    let (wallet_auth_service, cookie_config) =
        from_catalog_n!(catalog, dyn WalletAuthService, SessionCookieConfig);

    let issued_nonce = jar.get(NONCE_COOKIE).map(|c| c.value().to_string());
    if issued_nonce.as_deref() != Some(request.nonce.as_str()) {
        return Ok((jar, Json(CompleteSiweResponse::rejected("Invalid nonce"))));
    }
    let Ok(nonce) = AuthNonce::try_new(request.nonce) else {
        return Ok((jar, Json(CompleteSiweResponse::rejected("Invalid nonce"))));
    };

    match wallet_auth_service.verify(&request.payload, &nonce).await {
        Ok(address) => {
            let jar = jar.add(
                cookie_config.session_cookie(AUTH_COOKIE, SESSION_TOKEN_SENTINEL.to_string()),
            );
            Ok((
                jar,
                Json(CompleteSiweResponse {
                    success: true,
                    address: Some(address.to_string()),
                    message: Some("Authentication successful".to_string()),
                    error: None,
                }),
            ))
        }
        Err(WalletAuthError::NonceMismatch) => {
            Ok((jar, Json(CompleteSiweResponse::rejected("Invalid nonce"))))
        }
        Err(
            WalletAuthError::MessageMalformed
            | WalletAuthError::InvalidSignature
            | WalletAuthError::AddressMismatch,
        ) => Ok((jar, Json(CompleteSiweResponse::rejected("Invalid signature")))),
        Err(e @ WalletAuthError::Expired) => {
            Ok((jar, Json(CompleteSiweResponse::rejected(&e.to_string()))))
        }
        Err(WalletAuthError::Internal(e)) => Err(e.into()),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CheckAuthResponse {
    pub authenticated: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Report whether the caller holds an authenticated session
#[utoipa::path(
    get,
    path = "/check-auth",
    responses(
        (status = OK, body = CheckAuthResponse),
    ),
    tag = "ember",
)]
pub async fn check_auth_handler(jar: CookieJar) -> Json<CheckAuthResponse> {
    let authenticated = jar
        .get(AUTH_COOKIE)
        .is_some_and(|c| c.value() == SESSION_TOKEN_SENTINEL);

    Json(CheckAuthResponse {
        authenticated,
        address: authenticated.then(|| SESSION_PLACEHOLDER_ADDRESS.to_string()),
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Clear the session cookie
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = OK, body = LogoutResponse),
    ),
    tag = "ember",
)]
pub async fn logout_handler(
    Extension(catalog): Extension<Catalog>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<LogoutResponse>), ApiError> {
    let cookie_config = from_catalog_n!(catalog, SessionCookieConfig);

    let jar = jar.add(cookie_config.removal_cookie(AUTH_COOKIE));
    Ok((jar, Json(LogoutResponse { success: true })))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
