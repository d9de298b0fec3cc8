// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// All gateway routes, meant to be nested under `/api`.
pub fn root_router() -> OpenApiRouter {
    use crate::handlers;

    OpenApiRouter::new()
        .routes(routes!(handlers::nonce_handler))
        .routes(routes!(handlers::complete_siwe_handler))
        .routes(routes!(handlers::check_auth_handler))
        .routes(routes!(handlers::logout_handler))
        .routes(routes!(handlers::initiate_payment_handler))
        .routes(routes!(handlers::confirm_payment_handler))
        .routes(routes!(handlers::initiate_withdraw_handler))
        .routes(routes!(handlers::confirm_withdraw_handler))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
