// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod api_server;
mod app;
mod cli;
mod config;

use clap::Parser;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    observability::init_tracing(&observability::Config::from_env_with_name(app::BINARY_NAME));

    if let Err(e) = app::run(cli).await {
        tracing::error!(error = ?e, error_msg = %e, "Gateway exited with an error");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
