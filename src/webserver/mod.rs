//! Health check HTTP server
//!
//! Minimal liveness endpoint for deployment platforms: `GET /` and
//! `GET /health` return 200 with a static body, anything else 404.
//! Unrelated to the holder analysis pipeline. Per-request logging is
//! suppressed; only startup is logged.

use crate::logger::{self, LogTag};
use tiny_http::{Method, Response, Server};
use tokio::task::JoinHandle;

/// Start the health server on the given port.
///
/// tiny_http blocks on accept, so the loop runs on a blocking task.
/// The task lives for the process lifetime; it is not part of graceful
/// shutdown.
pub fn start_health_server(port: u16) -> Result<JoinHandle<()>, String> {
    let server = Server::http(("0.0.0.0", port))
        .map_err(|e| format!("Failed to bind health server on port {}: {}", port, e))?;

    logger::info(
        LogTag::Health,
        &format!("Health check server running on port {}", port),
    );

    let handle = tokio::task::spawn_blocking(move || {
        for request in server.incoming_requests() {
            let ok = request.method() == &Method::Get
                && matches!(request.url(), "/" | "/health");

            let response = if ok {
                Response::from_string("Bot is running!")
            } else {
                Response::from_string("Not Found").with_status_code(404)
            };

            let _ = request.respond(response);
        }
    });

    Ok(handle)
}
