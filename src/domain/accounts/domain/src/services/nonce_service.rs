// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::AuthNonce;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Issues sign-in challenges. Kept behind a trait so tests can pin the nonce
/// to a known value.
pub trait NonceService: Send + Sync {
    fn issue_nonce(&self) -> AuthNonce;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
