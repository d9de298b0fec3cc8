// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod auth_handler;
mod payment_handler;
mod withdraw_handler;

pub use auth_handler::*;
pub use payment_handler::*;
pub use withdraw_handler::*;
