// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// One row of the yield comparison table. Only protocols marked live receive
/// fresh readings, the rest carry their catalog baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolRate {
    pub id: String,
    pub name: String,
    pub logo_url: String,
    pub asset: String,
    pub apy: f64,
    pub description: String,
    pub tvl: u64,
    pub last_optimized: DateTime<Utc>,
    pub link: String,
    #[serde(default)]
    pub is_live: bool,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A fresh APY observation for a single live protocol.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveRateReading {
    pub protocol_id: &'static str,
    pub apy: f64,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
