// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod payment_confirmation_service;
mod payment_intent_service;
mod payment_provider;
mod transaction_verifier;

pub use payment_confirmation_service::*;
pub use payment_intent_service::*;
pub use payment_provider::*;
pub use transaction_verifier::*;
