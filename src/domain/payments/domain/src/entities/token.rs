// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Tokens the app can move. Decimal counts follow the on-chain token
/// contracts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum TokenSymbol {
    Usdc,
    Usds,
    Wld,
}

impl TokenSymbol {
    pub fn decimals(&self) -> u32 {
        match self {
            Self::Usdc => 6,
            Self::Usds => 18,
            Self::Wld => 8,
        }
    }

    /// Converts a human-readable amount into the integer token units the
    /// wallet expects, as a decimal string. Scaling goes through the shortest
    /// decimal form of the input rather than float multiplication, which
    /// keeps values like `0.1` exact even at 18 decimals. Digits beyond the
    /// token's precision are truncated. The amount must be finite and
    /// non-negative.
    pub fn to_token_units(&self, amount: f64) -> String {
        let decimals = self.decimals();
        let text = format!("{amount}");
        let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), ""));

        let mut units: u128 = whole.parse().unwrap_or_default();
        units *= 10u128.pow(decimals);

        let mut place = 10u128.pow(decimals);
        for digit in frac.chars().take(decimals as usize) {
            place /= 10;
            units += u128::from(digit.to_digit(10).unwrap_or_default()) * place;
        }

        units.to_string()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
