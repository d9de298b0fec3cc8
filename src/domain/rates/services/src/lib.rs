// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod simulated_rate_read_strategy;
mod yield_rate_aggregator;

pub use simulated_rate_read_strategy::*;
pub use yield_rate_aggregator::*;
