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

static EVM_ADDRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^0x[0-9a-fA-F]{40}$").unwrap());

/// A 20-byte EVM wallet address in its `0x`-prefixed hex form. Mixed-case
/// input is accepted as-is; comparisons between addresses ignore case.
#[nutype::nutype(
    sanitize(trim),
    validate(regex = EVM_ADDRESS_REGEX),
    derive(AsRef, Clone, Debug, Display, Serialize, Deserialize, TryFrom)
)]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn eq_ignore_case(&self, other: &WalletAddress) -> bool {
        self.as_ref().eq_ignore_ascii_case(other.as_ref())
    }
}

impl PartialEq for WalletAddress {
    fn eq(&self, other: &Self) -> bool {
        self.eq_ignore_case(other)
    }
}

impl Eq for WalletAddress {}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
