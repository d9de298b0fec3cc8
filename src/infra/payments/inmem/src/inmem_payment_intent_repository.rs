// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use dill::{component, interface, scope, Singleton};
use ember_payments::*;
use internal_error::InternalError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
struct State {
    intents_by_reference: HashMap<PaymentReference, PaymentIntent>,
}

pub struct InMemoryPaymentIntentRepository {
    state: Mutex<State>,
}

#[component(pub)]
#[interface(dyn PaymentIntentRepository)]
#[scope(Singleton)]
impl InMemoryPaymentIntentRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
        }
    }
}

#[async_trait::async_trait]
impl PaymentIntentRepository for InMemoryPaymentIntentRepository {
    async fn save(&self, intent: PaymentIntent) -> Result<(), SavePaymentIntentError> {
        let mut state = self.state.lock().unwrap();

        if state.intents_by_reference.contains_key(&intent.reference) {
            return Err(SavePaymentIntentError::Duplicate {
                reference: intent.reference,
            });
        }

        state
            .intents_by_reference
            .insert(intent.reference.clone(), intent);
        Ok(())
    }

    async fn find_by_reference(
        &self,
        reference: &PaymentReference,
    ) -> Result<Option<PaymentIntent>, InternalError> {
        let state = self.state.lock().unwrap();
        Ok(state.intents_by_reference.get(reference).cloned())
    }

    async fn consume(
        &self,
        reference: &PaymentReference,
    ) -> Result<Option<PaymentIntent>, InternalError> {
        let mut state = self.state.lock().unwrap();
        Ok(state.intents_by_reference.remove(reference))
    }

    async fn delete_expired(
        &self,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<usize, InternalError> {
        let mut state = self.state.lock().unwrap();

        let len_before = state.intents_by_reference.len();
        state
            .intents_by_reference
            .retain(|_, intent| now - intent.created_at <= ttl);

        Ok(len_before - state.intents_by_reference.len())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
