// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod payment_intent_repository;
mod withdrawal_request_repository;

pub use payment_intent_repository::*;
pub use withdrawal_request_repository::*;
