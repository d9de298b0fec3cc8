// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use dill::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Abstracts the system time, so that time-dependent logic can be tested
/// with a fake clock.
#[async_trait::async_trait]
pub trait SystemTimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    async fn sleep(&self, d: Duration);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct SystemTimeSourceDefault;

#[component(pub)]
#[interface(dyn SystemTimeSource)]
impl SystemTimeSourceDefault {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl SystemTimeSource for SystemTimeSourceDefault {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, d: Duration) {
        if let Ok(std_duration) = d.to_std() {
            tokio::time::sleep(std_duration).await;
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Fake clock that starts at a fixed instant and advances only when
/// explicitly told to, or when a caller "sleeps" on it.
pub struct SystemTimeSourceStub {
    t: Arc<Mutex<DateTime<Utc>>>,
}

#[component(pub)]
#[interface(dyn SystemTimeSource)]
#[scope(Singleton)]
impl SystemTimeSourceStub {
    pub fn new() -> Self {
        Self::new_set(DateTime::from_timestamp(0, 0).unwrap())
    }
}

impl SystemTimeSourceStub {
    pub fn new_set(t: DateTime<Utc>) -> Self {
        Self {
            t: Arc::new(Mutex::new(t)),
        }
    }

    pub fn set(&self, t: DateTime<Utc>) {
        *self.t.lock().unwrap() = t;
    }

    pub fn advance(&self, d: Duration) {
        let mut t = self.t.lock().unwrap();
        *t += d;
    }
}

#[async_trait::async_trait]
impl SystemTimeSource for SystemTimeSourceStub {
    fn now(&self) -> DateTime<Utc> {
        *self.t.lock().unwrap()
    }

    async fn sleep(&self, d: Duration) {
        // Sleeping on the stub completes instantly but still moves the clock,
        // preserving the causal order that real code observes
        self.advance(d);
        tokio::task::yield_now().await;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
