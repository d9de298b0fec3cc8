// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::net::IpAddr;
use std::path::Path;

use ember_adapter_dev_portal::DevPortalConfig;
use internal_error::{InternalError, ResultIntoInternal};
use serde::Deserialize;
use url::Url;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Environment variable overriding the configured developer-portal app id
pub const ENV_APP_ID: &str = "APP_ID";

/// Environment variable holding the developer-portal API key. The key never
/// appears in the config file.
pub const ENV_DEV_PORTAL_API_KEY: &str = "DEV_PORTAL_API_KEY";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase", default)]
pub struct GatewayConfig {
    /// Address the HTTP server binds to
    pub address: IpAddr,

    /// Port the HTTP server binds to
    pub http_port: u16,

    /// Whether session cookies are marked `Secure`. Disable only for local
    /// development over plain HTTP.
    pub secure_cookies: bool,

    pub dev_portal: DevPortalSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase", default)]
pub struct DevPortalSection {
    pub base_url: Url,
    pub app_id: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".parse().unwrap(),
            http_port: 3000,
            secure_cookies: true,
            dev_portal: DevPortalSection::default(),
        }
    }
}

impl Default for DevPortalSection {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://developer.worldcoin.org/").unwrap(),
            app_id: String::new(),
        }
    }
}

impl GatewayConfig {
    pub fn load(path: Option<&Path>) -> Result<Self, InternalError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let file = std::fs::File::open(path).int_err()?;
        let config = serde_yaml::from_reader(file).int_err()?;
        Ok(config)
    }

    /// Resolves the developer-portal connection settings, applying
    /// environment overrides. The API key comes exclusively from the
    /// environment so it never lands in version control.
    pub fn dev_portal_config(&self) -> Result<DevPortalConfig, InternalError> {
        let app_id = std::env::var(ENV_APP_ID).unwrap_or_else(|_| self.dev_portal.app_id.clone());
        if app_id.is_empty() {
            return InternalError::bail(format!(
                "Developer portal app id is not configured, set `devPortal.appId` or {ENV_APP_ID}"
            ));
        }

        let Ok(api_key) = std::env::var(ENV_DEV_PORTAL_API_KEY) else {
            return InternalError::bail(format!(
                "Developer portal API key is not configured, set {ENV_DEV_PORTAL_API_KEY}"
            ));
        };

        Ok(DevPortalConfig {
            base_url: self.dev_portal.base_url.clone(),
            app_id,
            api_key,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
