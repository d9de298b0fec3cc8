// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct Config {
    pub service_name: String,
    pub default_log_levels: String,
    pub json_output: bool,
}

impl Config {
    pub fn from_env_with_name(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            default_log_levels: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json_output: std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Installs the global tracing subscriber. Must be called once, before any
/// spans or events are emitted.
pub fn init_tracing(config: &Config) {
    let env_filter = EnvFilter::try_new(config.default_log_levels.as_str())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.json_output {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!(service = %config.service_name, "Tracing initialized");
}
