// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};

use crate::ProtocolRate;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const AAVE_PROTOCOL_ID: &str = "aave";
pub const MORPHO_PROTOCOL_ID: &str = "morpho";

pub const AAVE_BASELINE_APY: f64 = 4.85;
pub const MORPHO_BASELINE_APY: f64 = 6.87;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Curated set of protocols shown in the comparison table. Baselines come
/// from a mid-2025 snapshot; live protocols get overwritten by readings.
pub fn protocol_catalog() -> Vec<ProtocolRate> {
    let snapshot_at = catalog_snapshot_time();

    let row = |id: &str,
               name: &str,
               logo: &str,
               asset: &str,
               apy: f64,
               description: &str,
               tvl: u64,
               link: &str,
               is_live: bool| ProtocolRate {
        id: id.to_string(),
        name: name.to_string(),
        logo_url: format!("/protocols/{logo}.svg"),
        asset: asset.to_string(),
        apy,
        description: description.to_string(),
        tvl,
        last_optimized: snapshot_at,
        link: link.to_string(),
        is_live,
    };

    vec![
        row(
            AAVE_PROTOCOL_ID,
            "Aave",
            "aave",
            "USDC",
            AAVE_BASELINE_APY,
            "Battle-tested DeFi money market on Ethereum.",
            9_900_000_000,
            "https://aave.com/",
            true,
        ),
        row(
            MORPHO_PROTOCOL_ID,
            "Morpho Blue",
            "morpho",
            "USDC",
            MORPHO_BASELINE_APY,
            "Peer-to-peer lending aggregator for Aave/Compound.",
            550_000_000,
            "https://blue.morpho.org/",
            true,
        ),
        row(
            "stargate",
            "Stargate",
            "stargate",
            "USDC",
            7.42,
            "Cross-chain stablecoin bridge and yield optimizer.",
            150_000_000,
            "https://stargate.finance/",
            false,
        ),
        row(
            "curve",
            "Curve",
            "curve",
            "USDT",
            6.21,
            "Efficient stablecoin AMM with boosted APY.",
            5_800_000_000,
            "https://curve.fi/",
            false,
        ),
        row(
            "venus",
            "Venus",
            "venus",
            "USDC",
            5.9,
            "Lending and borrowing protocol for Binance Smart Chain.",
            700_000_000,
            "https://venus.io/",
            false,
        ),
        row(
            "radiant",
            "Radiant",
            "radiant",
            "USDT",
            8.08,
            "Omnichain money market protocol on LayerZero.",
            400_000_000,
            "https://radiant.capital/",
            false,
        ),
        row(
            "pendle",
            "Pendle",
            "pendle",
            "USDe",
            9.15,
            "Tokenized yield protocol for pro DeFi users.",
            280_000_000,
            "https://app.pendle.finance/",
            false,
        ),
        row(
            "spark",
            "Spark Protocol",
            "spark",
            "DAI",
            5.25,
            "MakerDAO's DeFi yield market for DAI.",
            900_000_000,
            "https://app.sparkprotocol.io/",
            false,
        ),
        row(
            "native",
            "Native (Default)",
            "ember",
            "USDC",
            3.12,
            "Ember's own optimized vault for stable yield.",
            100_000,
            "#",
            false,
        ),
        row(
            "apegrow",
            "ApeGrow",
            "apegrow",
            "USDT",
            11.8,
            "Super-degen apes pool - max yield, max fun",
            1_000_000,
            "#",
            false,
        ),
    ]
}

fn catalog_snapshot_time() -> DateTime<Utc> {
    "2025-07-05T13:00:00Z"
        .parse()
        .expect("Invalid catalog snapshot time")
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
