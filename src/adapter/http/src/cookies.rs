// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum_extra::extract::cookie::{Cookie, SameSite};
use ember_accounts::SESSION_MAX_AGE_DAYS;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Holds the nonce issued to the browser session between the challenge and
/// the completion call
pub const NONCE_COOKIE: &str = "siwe";

/// Holds the session sentinel once wallet authentication succeeds
pub const AUTH_COOKIE: &str = "auth_token";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Deployment-dependent cookie settings, injected from app config.
#[derive(Debug, Clone, Default)]
pub struct SessionCookieConfig {
    /// Set the `Secure` attribute - on in production, off for local HTTP
    pub secure: bool,
}

impl SessionCookieConfig {
    pub fn session_cookie(&self, name: &'static str, value: String) -> Cookie<'static> {
        let mut cookie = Cookie::new(name, value);
        cookie.set_http_only(true);
        cookie.set_secure(self.secure);
        cookie.set_same_site(SameSite::Lax);
        cookie.set_path("/");
        cookie.set_max_age(time::Duration::days(SESSION_MAX_AGE_DAYS));
        cookie
    }

    pub fn removal_cookie(&self, name: &'static str) -> Cookie<'static> {
        let mut cookie = self.session_cookie(name, String::new());
        cookie.set_max_age(time::Duration::ZERO);
        cookie
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
