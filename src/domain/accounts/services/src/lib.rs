// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod nonce_service_impl;
mod wallet_auth_service_impl;

pub use nonce_service_impl::*;
pub use wallet_auth_service_impl::*;
