// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::net::IpAddr;
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, clap::Parser)]
#[command(name = "ember-gateway", version, about = "HTTP gateway of the Ember mini app")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Address to bind to, overriding the config file
    #[arg(long)]
    pub address: Option<IpAddr>,

    /// Port to bind to, overriding the config file
    #[arg(long)]
    pub http_port: Option<u16>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
