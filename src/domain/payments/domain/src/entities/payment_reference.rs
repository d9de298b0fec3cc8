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

// UUIDv4 with hyphens stripped
static PAYMENT_REFERENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9a-f]{32}$").unwrap());

/// Server-issued identifier that correlates a payment command sent to the
/// wallet with the confirmation call that follows it.
#[nutype::nutype(
    sanitize(trim),
    validate(regex = PAYMENT_REFERENCE_REGEX),
    derive(AsRef, Clone, Debug, Display, Eq, PartialEq, Hash, Serialize, Deserialize, TryFrom)
)]
pub struct PaymentReference(String);

impl PaymentReference {
    pub fn new() -> Self {
        Self::try_new(uuid::Uuid::new_v4().simple().to_string())
            .expect("Invalid payment reference generated")
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
