//! HTTP harness: routes, handlers and the listen loop.

mod config;

pub use config::{ConfigError, HOST_ENV, PORT_ENV, ServerConfig};

use std::io;
use std::net::SocketAddr;

use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::service::PhoneNumberService;
use crate::transport::{decode_query, encode_response};

/// Path of the lookup endpoint.
pub const LOOKUP_PATH: &str = "/v1/phone-numbers";

#[derive(Debug, thiserror::Error)]
/// Errors that stop the server.
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

/// Routes: `GET /v1/phone-numbers` and a redirect from `/`.
pub fn router(service: PhoneNumberService) -> Router {
    Router::new()
        .route("/", get(redirect_to_lookup))
        .route(LOOKUP_PATH, get(lookup))
        .with_state(service)
}

/// Bind to `config` and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, service: PhoneNumberService) -> Result<(), ServerError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let local = listener.local_addr().map_err(ServerError::Serve)?;

    info!("Phone Number Lookup API running at http://{local}{LOOKUP_PATH}");
    info!("example request: http://{local}{LOOKUP_PATH}?phoneNumber=16573310806");

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn lookup(State(service): State<PhoneNumberService>, RawQuery(raw): RawQuery) -> Response {
    let query = decode_query(raw.as_deref());
    let response = service.handle(&query);

    match encode_response(&response) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(err) => {
            error!(%err, "failed to encode lookup response");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn redirect_to_lookup() -> Redirect {
    Redirect::to(LOOKUP_PATH)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "cannot listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
