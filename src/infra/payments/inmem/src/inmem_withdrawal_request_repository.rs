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

use dill::{component, interface, scope, Singleton};
use ember_payments::*;
use internal_error::InternalError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
struct State {
    requests_by_reference: HashMap<PaymentReference, WithdrawalRequest>,
}

pub struct InMemoryWithdrawalRequestRepository {
    state: Mutex<State>,
}

#[component(pub)]
#[interface(dyn WithdrawalRequestRepository)]
#[scope(Singleton)]
impl InMemoryWithdrawalRequestRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
        }
    }
}

#[async_trait::async_trait]
impl WithdrawalRequestRepository for InMemoryWithdrawalRequestRepository {
    async fn save(&self, request: WithdrawalRequest) -> Result<(), SaveWithdrawalRequestError> {
        let mut state = self.state.lock().unwrap();

        if state.requests_by_reference.contains_key(&request.reference) {
            return Err(SaveWithdrawalRequestError::Duplicate {
                reference: request.reference,
            });
        }

        state
            .requests_by_reference
            .insert(request.reference.clone(), request);
        Ok(())
    }

    async fn find_by_reference(
        &self,
        reference: &PaymentReference,
    ) -> Result<Option<WithdrawalRequest>, InternalError> {
        let state = self.state.lock().unwrap();
        Ok(state.requests_by_reference.get(reference).cloned())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
