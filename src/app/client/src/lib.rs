// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Browser-side orchestration flows that drive the gateway's HTTP API and
//! the host wallet's commands. Presentation code calls into these flows and
//! renders their results; nothing here touches the UI directly.

mod deposit_flow;
mod gateway_api_client;
mod session_store;
mod sign_in_flow;
mod withdraw_flow;

pub use deposit_flow::*;
pub use gateway_api_client::*;
pub use session_store::*;
pub use sign_in_flow::*;
pub use withdraw_flow::*;
