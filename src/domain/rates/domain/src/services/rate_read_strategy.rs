// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;

use crate::LiveRateReading;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Source of live APY readings. The shipped implementation simulates a
/// cross-chain read request; a real one would query on-chain rate oracles.
#[async_trait::async_trait]
pub trait RateReadStrategy: Send + Sync {
    /// Current readings without initiating a fresh read
    async fn current_rates(&self) -> Result<Vec<LiveRateReading>, InternalError>;

    /// Initiates a fresh read, waiting for the readings to arrive
    async fn read_rates(&self) -> Result<Vec<LiveRateReading>, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
