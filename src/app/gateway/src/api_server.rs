// Copyright Ember Labs, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::future::IntoFuture;
use std::net::{IpAddr, SocketAddr};

use dill::Catalog;
use internal_error::{InternalError, ResultIntoInternal};
use observability::axum::unknown_fallback_handler;
use utoipa_axum::router::OpenApiRouter;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct ApiServer {
    server_future: Box<dyn std::future::Future<Output = Result<(), std::io::Error>> + Unpin + Send>,
    local_addr: SocketAddr,
}

impl ApiServer {
    pub async fn new(
        catalog: &Catalog,
        address: IpAddr,
        port: u16,
    ) -> Result<Self, InternalError> {
        let listener = tokio::net::TcpListener::bind((address, port))
            .await
            .int_err()?;
        let local_addr = listener.local_addr().int_err()?;

        let (router, _api) = OpenApiRouter::new()
            .nest("/api", ember_adapter_http::root_router())
            .layer(
                tower::ServiceBuilder::new()
                    .layer(tower_http::trace::TraceLayer::new_for_http())
                    .layer(
                        tower_http::cors::CorsLayer::new()
                            .allow_origin(tower_http::cors::Any)
                            .allow_methods(vec![http::Method::GET, http::Method::POST])
                            .allow_headers(tower_http::cors::Any),
                    )
                    .layer(axum::extract::Extension(catalog.clone())),
            )
            .fallback(unknown_fallback_handler)
            .split_for_parts();

        let server_future = Box::new(
            axum::serve(listener, router.into_make_service())
                .with_graceful_shutdown(async {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        tracing::error!(error = ?e, "Failed to listen for shutdown signal");
                    }
                    tracing::info!("Shutting down");
                })
                .into_future(),
        );

        Ok(Self {
            server_future,
            local_addr,
        })
    }

    pub fn local_addr(&self) -> &SocketAddr {
        &self.local_addr
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        self.server_future.await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
