// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dill::{component, interface};
use ember_accounts::{AuthNonce, NonceService};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct NonceServiceImpl {}

#[component(pub)]
#[interface(dyn NonceService)]
impl NonceServiceImpl {
    pub fn new() -> Self {
        Self {}
    }
}

impl NonceService for NonceServiceImpl {
    fn issue_nonce(&self) -> AuthNonce {
        AuthNonce::new()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
