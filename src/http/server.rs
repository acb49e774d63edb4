//! HTTP server setup and the gateway handler.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all gateway handler
//! - Wire up middleware (tracing, request ID)
//! - Build the upstream HTTP(S) client
//! - Match rules, transform requests, forward, normalize responses
//! - Convert transport failures into the fixed fallback response
//!
//! # Design Decisions
//! - One forwarding attempt per request; no retry, no backoff
//! - Upstream 4xx/5xx statuses are relayed as-is, not treated as errors
//! - Unmatched paths are answered 404 locally and never forwarded
//! - Observability hooks are injected so the pipeline stays testable

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::http::request::{self, InjectedHeaders, RequestIdLayer};
use crate::http::response;
use crate::observability::hooks::{GatewayHooks, TracingHooks};
use crate::resilience::timeouts;
use crate::routing::RuleSet;

/// Application state injected into the gateway handler.
#[derive(Clone)]
pub struct AppState {
    pub rules: Arc<RuleSet>,
    pub injected: Arc<InjectedHeaders>,
    pub client: Client<HttpsConnector<HttpConnector>, Body>,
    pub forward_deadline: Duration,
    pub hooks: Arc<dyn GatewayHooks>,
}

/// HTTP server hosting the proxy gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new server from validated configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        Self::with_hooks(config, Arc::new(TracingHooks))
    }

    /// Create a server with custom observability hooks.
    pub fn with_hooks(
        config: GatewayConfig,
        hooks: Arc<dyn GatewayHooks>,
    ) -> Result<Self, GatewayError> {
        let rules = Arc::new(RuleSet::from_config(
            &config.rules,
            &config.upstream.origin,
        )?);
        let injected = Arc::new(InjectedHeaders::from_config(&config.injected_headers)?);

        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(Duration::from_secs(config.timeouts.connect_secs)));
        connector.enforce_http(false);
        let https = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .wrap_connector(connector);
        let client = Client::builder(TokioExecutor::new()).build(https);

        let state = AppState {
            rules,
            injected,
            client,
            forward_deadline: Duration::from_secs(config.timeouts.request_secs),
            hooks,
        };

        Ok(Self {
            router: Self::build_router(state),
        })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(gateway_handler))
            .route("/", any(gateway_handler))
            .with_state(state)
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "gateway listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("shutdown signal received");
            })
            .await?;

        tracing::info!("gateway stopped");
        Ok(())
    }
}

/// Catch-all gateway handler.
///
/// Per-request pipeline: match rule → transform request → forward with
/// deadline → normalize response. Any transport failure becomes the fixed
/// fallback response.
async fn gateway_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let method = request.method().clone();
    let original_uri = request.uri().clone();

    let Some(matched) = state.rules.match_path(original_uri.path()) else {
        tracing::debug!(method = %method, path = %original_uri.path(), "no rule matched, not proxied");
        return (StatusCode::NOT_FOUND, "No matching proxy rule").into_response();
    };

    let (parts, body) = request.into_parts();
    let outbound = match request::build_upstream_request(
        &parts,
        body,
        matched.rule,
        &matched.rewritten_path,
        &state.injected,
    ) {
        Ok(outbound) => outbound,
        Err(e) => {
            tracing::error!(method = %method, path = %original_uri.path(), error = %e, "failed to build upstream request");
            return response::proxy_error_response();
        }
    };

    state.hooks.on_request(&method, outbound.uri().path());

    match timeouts::with_deadline(state.forward_deadline, state.client.request(outbound)).await {
        Ok(upstream_response) => {
            state
                .hooks
                .on_response(&method, &original_uri, upstream_response.status());

            let (mut parts, body) = upstream_response.into_parts();
            response::normalize_cors(&mut parts.headers);
            Response::from_parts(parts, Body::new(body))
        }
        Err(failure) => {
            state.hooks.on_error(&failure);
            response::proxy_error_response()
        }
    }
}
