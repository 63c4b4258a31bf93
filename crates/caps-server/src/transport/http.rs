//! HTTP Transport
//!
//! Rocket front end over the capability dispatcher. Every request outside the
//! fixed diagnostic routes is turned into a `RequestContext` and routed to a
//! domain function.
//!
//! # Responses
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | Domain success | per route (200/201) | the domain value |
//! | Domain error | from the error kind | `{"error":{"kind":..,"message":..}}` |
//! | Capability resolution failure | 500 | `{"error":{"kind":"capability",..}}` |
//! | Rejected before routing | Rocket's status | `{"error":{"kind":..,"message":..}}` |

use caps_application::{Dispatcher, route_request};
use caps_domain::error::{Error, Result};
use caps_infrastructure::constants::{DEFAULT_HTTP_PORT, DEFAULT_SERVER_HOST};
use rocket::http::Status;
use rocket::http::uri::Origin;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{
    Build, Request, Rocket, State, catch, catchers, delete, get, patch, post, put, routes,
};
use serde_json::{Value, json};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tracing::{debug, error, info};

type JsonResponse = status::Custom<Json<Value>>;

/// HTTP transport configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransportConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

impl HttpTransportConfig {
    /// Create config for localhost with specified port
    pub fn localhost(port: u16) -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port,
        }
    }

    /// Get the socket address
    ///
    /// Falls back to loopback when `host` is not an IP address.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = self
            .host
            .parse::<IpAddr>()
            .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
        SocketAddr::new(ip, self.port)
    }
}

/// Shared state for HTTP handlers
#[derive(Debug, Clone)]
pub struct TransportState {
    /// Dispatcher over the frozen capability set
    pub dispatcher: Dispatcher,
}

/// HTTP transport server
#[derive(Debug)]
pub struct HttpTransport {
    config: HttpTransportConfig,
    state: TransportState,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(config: HttpTransportConfig, dispatcher: Dispatcher) -> Self {
        Self {
            config,
            state: TransportState { dispatcher },
        }
    }

    /// Build the Rocket application
    pub fn rocket(&self) -> Rocket<Build> {
        rocket::build()
            .manage(self.state.clone())
            .mount(
                "/",
                routes![
                    health,
                    capabilities,
                    get_fallback,
                    post_fallback,
                    put_fallback,
                    patch_fallback,
                    delete_fallback
                ],
            )
            .register(
                "/",
                catchers![bad_request, not_found, unprocessable, default_catcher],
            )
    }

    /// Bind and serve until Rocket shuts down (Ctrl+C)
    pub async fn start(self) -> Result<()> {
        let addr = self.config.socket_addr();
        info!("HTTP transport listening on {}", addr);

        // tracing owns logging; keep Rocket's own logger quiet
        let figment = rocket::Config::figment()
            .merge(("address", self.config.host.clone()))
            .merge(("port", self.config.port))
            .merge(("log_level", "critical"));

        self.rocket()
            .configure(figment)
            .launch()
            .await
            .map_err(|e| Error::infrastructure(format!("HTTP server failed: {e}")))?;

        info!("HTTP transport stopped");
        Ok(())
    }
}

/// Liveness check
#[get("/health")]
fn health(state: &State<TransportState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "capabilities": state.dispatcher.capabilities().len(),
    }))
}

/// Bound capabilities with their interface types
#[get("/capabilities")]
fn capabilities(state: &State<TransportState>) -> Json<Value> {
    let bound: Vec<Value> = state
        .dispatcher
        .capabilities()
        .describe()
        .into_iter()
        .map(|(name, interface)| json!({ "name": name, "interface": interface }))
        .collect();
    Json(json!({ "capabilities": bound }))
}

#[get("/<_path..>", rank = 10)]
async fn get_fallback(
    _path: PathBuf,
    uri: &Origin<'_>,
    state: &State<TransportState>,
) -> JsonResponse {
    handle(state, "GET", uri, String::new()).await
}

#[post("/<_path..>", data = "<body>", rank = 10)]
async fn post_fallback(
    _path: PathBuf,
    uri: &Origin<'_>,
    state: &State<TransportState>,
    body: String,
) -> JsonResponse {
    handle(state, "POST", uri, body).await
}

#[put("/<_path..>", data = "<body>", rank = 10)]
async fn put_fallback(
    _path: PathBuf,
    uri: &Origin<'_>,
    state: &State<TransportState>,
    body: String,
) -> JsonResponse {
    handle(state, "PUT", uri, body).await
}

#[patch("/<_path..>", data = "<body>", rank = 10)]
async fn patch_fallback(
    _path: PathBuf,
    uri: &Origin<'_>,
    state: &State<TransportState>,
    body: String,
) -> JsonResponse {
    handle(state, "PATCH", uri, body).await
}

#[delete("/<_path..>", rank = 10)]
async fn delete_fallback(
    _path: PathBuf,
    uri: &Origin<'_>,
    state: &State<TransportState>,
) -> JsonResponse {
    handle(state, "DELETE", uri, String::new()).await
}

/// Build the request context, route it and map the outcome to HTTP
async fn handle(
    state: &TransportState,
    method: &str,
    uri: &Origin<'_>,
    body: String,
) -> JsonResponse {
    let context = state
        .dispatcher
        .context(method, uri.path().as_str(), body);

    match route_request(&context).await {
        Ok(Ok(response)) => {
            debug!(
                request_id = %context.request_id(),
                method,
                path = context.path(),
                status = response.status,
                "Request handled"
            );
            status::Custom(Status::new(response.status), Json(response.body))
        }
        Ok(Err(route_error)) => {
            debug!(
                request_id = %context.request_id(),
                method,
                path = context.path(),
                kind = route_error.kind(),
                "Request rejected by domain"
            );
            status::Custom(Status::new(route_error.status()), Json(route_error.to_body()))
        }
        Err(capability_error) => {
            error!(
                request_id = %context.request_id(),
                method,
                path = context.path(),
                error = %capability_error,
                "Capability resolution failed"
            );
            status::Custom(
                Status::InternalServerError,
                Json(json!({
                    "error": {
                        "kind": "capability",
                        "message": capability_error.to_string(),
                    }
                })),
            )
        }
    }
}

/// Error body for requests Rocket rejects before a handler runs
fn rejection(status: Status, kind: &str, request: &Request<'_>) -> JsonResponse {
    debug!(
        method = %request.method(),
        path = %request.uri().path(),
        status = status.code,
        "Request rejected before routing"
    );
    let message = match status.reason() {
        Some(reason) => format!("{reason}: {} {}", request.method(), request.uri().path()),
        None => format!("{} {}", request.method(), request.uri().path()),
    };
    status::Custom(
        status,
        Json(json!({
            "error": {
                "kind": kind,
                "message": message,
            }
        })),
    )
}

#[catch(400)]
fn bad_request(request: &Request<'_>) -> JsonResponse {
    rejection(Status::BadRequest, "bad_request", request)
}

#[catch(404)]
fn not_found(request: &Request<'_>) -> JsonResponse {
    rejection(Status::NotFound, "route_not_found", request)
}

#[catch(422)]
fn unprocessable(request: &Request<'_>) -> JsonResponse {
    rejection(Status::UnprocessableEntity, "unprocessable_request", request)
}

#[catch(default)]
fn default_catcher(status: Status, request: &Request<'_>) -> JsonResponse {
    rejection(status, "http_error", request)
}
