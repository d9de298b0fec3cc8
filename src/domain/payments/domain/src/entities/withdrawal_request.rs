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

use crate::{PaymentReference, TokenSymbol};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A withdrawal the server has registered for the session. Unlike deposits,
/// confirmation of withdrawals is not yet wired to an on-chain check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawalRequest {
    pub reference: PaymentReference,
    pub amount: f64,
    pub token: TokenSymbol,
    pub created_at: DateTime<Utc>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
