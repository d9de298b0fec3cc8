// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::LazyLock;

use regex::Regex;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const AUTH_NONCE_LENGTH: usize = 24;

static AUTH_NONCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z0-9]{8,}$").unwrap());

/// Single-use challenge issued per sign-in attempt. The browser session that
/// completes wallet authentication must present the exact nonce it was
/// issued, which ties the signed message to that session.
#[nutype::nutype(
    sanitize(trim),
    validate(regex = AUTH_NONCE_REGEX),
    derive(AsRef, Clone, Debug, Display, Eq, PartialEq, Serialize, Deserialize, TryFrom)
)]
pub struct AuthNonce(String);

impl AuthNonce {
    pub fn new() -> Self {
        Self::try_new(random_strings::alphanumeric(AUTH_NONCE_LENGTH))
            .expect("Invalid nonce generated")
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
