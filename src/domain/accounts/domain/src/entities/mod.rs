// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod auth_nonce;
mod session;
mod wallet_address;
mod wallet_auth_payload;

pub use auth_nonce::*;
pub use session::*;
pub use wallet_address::*;
pub use wallet_auth_payload::*;
