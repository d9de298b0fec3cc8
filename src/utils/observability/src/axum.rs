// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum::response::IntoResponse;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Fallback handler that logs requests to routes we don't serve, so that
/// probing and client misconfiguration show up in the trace
pub async fn unknown_fallback_handler(
    method: http::Method,
    uri: axum::http::Uri,
) -> axum::response::Response {
    tracing::debug!(%method, %uri, "Request to unknown route");

    (
        http::StatusCode::NOT_FOUND,
        axum::Json(serde_json::json!({"error": "Not Found"})),
    )
        .into_response()
}
