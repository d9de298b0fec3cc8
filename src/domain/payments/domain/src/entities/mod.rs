// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod payment_intent;
mod payment_reference;
mod token;
mod transaction;
mod withdrawal_request;

pub use payment_intent::*;
pub use payment_reference::*;
pub use token::*;
pub use transaction::*;
pub use withdrawal_request::*;
