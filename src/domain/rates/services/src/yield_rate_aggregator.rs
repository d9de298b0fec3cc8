// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use ember_rates::*;
use internal_error::InternalError;
use time_source::SystemTimeSource;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Maintains the protocol comparison table for one viewer. Seeds it from the
/// catalog, overlays live readings, and ensures at most one fresh read is in
/// flight at a time.
pub struct YieldRateAggregator {
    time_source: Arc<dyn SystemTimeSource>,
    strategy: Arc<dyn RateReadStrategy>,
    protocols: Mutex<Vec<ProtocolRate>>,
    loading: AtomicBool,
}

/// What a refresh request actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    AlreadyInFlight,
}

impl YieldRateAggregator {
    pub fn new(
        time_source: Arc<dyn SystemTimeSource>,
        strategy: Arc<dyn RateReadStrategy>,
    ) -> Self {
        Self {
            time_source,
            strategy,
            protocols: Mutex::new(protocol_catalog()),
            loading: AtomicBool::new(false),
        }
    }

    pub fn protocols(&self) -> Vec<ProtocolRate> {
        self.protocols.lock().unwrap().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Overlays the readings the strategy already has, without initiating a
    /// fresh read. Used to populate the table on first render.
    pub async fn refresh_current(&self) -> Result<(), InternalError> {
        let readings = self.strategy.current_rates().await?;
        self.apply_readings(&readings);
        Ok(())
    }

    /// Initiates a fresh read unless one is already in flight.
    pub async fn request_fresh_rates(&self) -> Result<RefreshOutcome, InternalError> {
        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Ok(RefreshOutcome::AlreadyInFlight);
        }

        let res = self.strategy.read_rates().await;
        self.loading.store(false, Ordering::Release);

        let readings = res?;
        self.apply_readings(&readings);

        tracing::debug!(readings = readings.len(), "Applied fresh rate readings");
        Ok(RefreshOutcome::Applied)
    }

    fn apply_readings(&self, readings: &[LiveRateReading]) {
        let now = self.time_source.now();
        let mut protocols = self.protocols.lock().unwrap();

        for reading in readings {
            if let Some(protocol) = protocols.iter_mut().find(|p| p.id == reading.protocol_id) {
                protocol.apy = reading.apy;
                protocol.is_live = true;
                protocol.last_optimized = now;
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
