// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::{Arc, Mutex};

use chrono::Duration;
use dill::{component, interface};
use ember_rates::*;
use internal_error::InternalError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use time_source::SystemTimeSource;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Latency of the simulated cross-chain read round-trip.
const SIMULATED_READ_DELAY_MS: i64 = 2000;

/// Fresh readings deviate from the baseline by at most half of this span in
/// either direction.
const JITTER_SPAN: f64 = 0.5;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Stands in for an on-chain rate oracle: returns the catalog baselines,
/// with a small random jitter on fresh reads after a simulated network delay.
pub struct SimulatedRateReadStrategy {
    time_source: Arc<dyn SystemTimeSource>,
    rng: Mutex<StdRng>,
    read_delay: Duration,
}

#[component(pub)]
#[interface(dyn RateReadStrategy)]
impl SimulatedRateReadStrategy {
    pub fn new(time_source: Arc<dyn SystemTimeSource>) -> Self {
        Self::with_rng(
            time_source,
            StdRng::from_entropy(),
            Duration::milliseconds(SIMULATED_READ_DELAY_MS),
        )
    }

    pub fn with_rng(
        time_source: Arc<dyn SystemTimeSource>,
        rng: StdRng,
        read_delay: Duration,
    ) -> Self {
        Self {
            time_source,
            rng: Mutex::new(rng),
            read_delay,
        }
    }

    fn jittered(&self, baseline: f64) -> f64 {
        let mut rng = self.rng.lock().unwrap();
        baseline + (rng.gen::<f64>() - 0.5) * JITTER_SPAN
    }
}

#[async_trait::async_trait]
impl RateReadStrategy for SimulatedRateReadStrategy {
    async fn current_rates(&self) -> Result<Vec<LiveRateReading>, InternalError> {
        Ok(vec![
            LiveRateReading {
                protocol_id: AAVE_PROTOCOL_ID,
                apy: AAVE_BASELINE_APY,
            },
            LiveRateReading {
                protocol_id: MORPHO_PROTOCOL_ID,
                apy: MORPHO_BASELINE_APY,
            },
        ])
    }

    async fn read_rates(&self) -> Result<Vec<LiveRateReading>, InternalError> {
        self.time_source.sleep(self.read_delay).await;

        Ok(vec![
            LiveRateReading {
                protocol_id: AAVE_PROTOCOL_ID,
                apy: self.jittered(AAVE_BASELINE_APY),
            },
            LiveRateReading {
                protocol_id: MORPHO_PROTOCOL_ID,
                apy: self.jittered(MORPHO_BASELINE_APY),
            },
        ])
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
