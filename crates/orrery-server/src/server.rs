//! HTTP server implementation.

use crate::routes::{Route, route};
use orrery_store::PlanetRepository;
use serde::Serialize;
use std::io::Cursor;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tiny_http::{Header, Request, Response, Server, StatusCode};
use tracing::{debug, error, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {address}: {error}")]
    BindError { address: String, error: String },
    #[error("Server is already running")]
    AlreadyRunning,
    #[error("Server thread panicked")]
    ThreadPanic,
    #[error("Invalid response header {0}")]
    InvalidHeader(&'static str),
    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Failed to write response: {0}")]
    Io(#[from] std::io::Error),
}

/// Metadata service. Serves requests on a background thread.
pub struct MetadataServer {
    bind_address: String,
    port: u16,
    actual_port: Option<u16>,
    server: Option<Arc<Server>>,
    handle: Option<JoinHandle<()>>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    uptime_seconds: f64,
}

type HttpResponse = Response<Cursor<Vec<u8>>>;

impl MetadataServer {
    pub fn new(bind_address: impl Into<String>, port: u16) -> Self {
        Self {
            bind_address: bind_address.into(),
            port,
            actual_port: None,
            server: None,
            handle: None,
        }
    }

    /// Bind the listener and start answering requests from `repo`.
    pub fn start<R>(&mut self, repo: R) -> Result<(), ServerError>
    where
        R: PlanetRepository + Send + 'static,
    {
        if self.handle.is_some() {
            return Err(ServerError::AlreadyRunning);
        }

        let address = format!("{}:{}", self.bind_address, self.port);
        let server = Server::http(&address).map_err(|e| ServerError::BindError {
            address: address.clone(),
            error: e.to_string(),
        })?;

        let actual_port = server
            .server_addr()
            .to_ip()
            .map(|addr| addr.port())
            .unwrap_or(self.port);
        self.actual_port = Some(actual_port);
        info!(address = %self.bind_address, port = actual_port, "Metadata server listening");

        let server = Arc::new(server);
        self.server = Some(server.clone());
        let handle = thread::Builder::new()
            .name("metadata-http".to_string())
            .spawn(move || Self::run_server(&server, &repo))?;

        self.handle = Some(handle);
        Ok(())
    }

    /// Unblock the accept loop and wait for the serving thread to exit.
    pub fn stop(&mut self) -> Result<(), ServerError> {
        if let Some(server) = self.server.take() {
            server.unblock();
        }
        self.join()
    }

    /// Block until the serving thread exits.
    pub fn join(&mut self) -> Result<(), ServerError> {
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| ServerError::ThreadPanic),
            None => Ok(()),
        }
    }

    pub fn actual_port(&self) -> u16 {
        self.actual_port.unwrap_or(self.port)
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    fn run_server<R: PlanetRepository>(server: &Server, repo: &R) {
        let started = Instant::now();
        for request in server.incoming_requests() {
            if let Err(e) = Self::handle_request(request, repo, started) {
                warn!("Metadata server error: {e}");
            }
        }
        debug!("Metadata server loop exited");
    }

    fn handle_request<R: PlanetRepository>(
        request: Request,
        repo: &R,
        started: Instant,
    ) -> Result<(), ServerError> {
        let target = route(request.method(), request.url());
        let response = Self::respond_to(&target, repo, started)?;

        debug!(
            method = %request.method(),
            path = request.url(),
            status = response.status_code().0,
            "request"
        );
        request.respond(response)?;
        Ok(())
    }

    fn respond_to<R: PlanetRepository>(
        target: &Route,
        repo: &R,
        started: Instant,
    ) -> Result<HttpResponse, ServerError> {
        match target {
            Route::Planet(name) => match repo.find_by_name(name) {
                Ok(Some(planet)) => json_response(200, &planet),
                Ok(None) => json_response(
                    404,
                    &ErrorBody {
                        error: "Planet not found",
                    },
                ),
                Err(e) => {
                    error!(planet = %name, "Planet lookup failed: {e}");
                    json_response(
                        500,
                        &ErrorBody {
                            error: "Internal server error",
                        },
                    )
                }
            },
            Route::Health => json_response(
                200,
                &HealthResponse {
                    status: "ok",
                    uptime_seconds: started.elapsed().as_secs_f64(),
                },
            ),
            Route::Preflight => Ok(with_cors(Response::from_data(Vec::new()).with_status_code(204))?
                .with_header(header(
                    "Access-Control-Allow-Methods",
                    "GET, HEAD, OPTIONS",
                )?)
                .with_header(header("Access-Control-Allow-Headers", "Content-Type")?)),
            Route::BadRequest => json_response(
                400,
                &ErrorBody {
                    error: "Bad request",
                },
            ),
            Route::NotFound => with_cors(Response::from_string("Not Found").with_status_code(404)),
        }
    }
}

impl Drop for MetadataServer {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            warn!("Metadata server shutdown failed: {e}");
        }
    }
}

fn header(name: &'static str, value: &str) -> Result<Header, ServerError> {
    Header::from_bytes(name.as_bytes(), value.as_bytes())
        .map_err(|()| ServerError::InvalidHeader(name))
}

fn with_cors(response: HttpResponse) -> Result<HttpResponse, ServerError> {
    Ok(response.with_header(header("Access-Control-Allow-Origin", "*")?))
}

fn json_response(status: u16, body: &impl Serialize) -> Result<HttpResponse, ServerError> {
    let json = serde_json::to_string(body)?;
    let response = Response::from_string(json)
        .with_status_code(StatusCode(status))
        .with_header(header("Content-Type", "application/json")?);
    with_cors(response)
}
