//! Axum web server with WebSocket streaming for the sorting display.

use std::sync::Arc;

use axum::{
    extract::{State, ws::{WebSocket, WebSocketUpgrade, Message}},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sortline_trace::{Algorithm, AlgorithmInfo};
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};

use crate::driver::{Command, Session};
use crate::error::{Error, Result};
use crate::playback::{Playback, PlaybackStatus};
use crate::sequence::SessionConfig;

/// Configuration for the visualization server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on (all interfaces)
    pub port: u16,
    /// Session the server starts with
    pub session: SessionConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            session: SessionConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Parse positional arguments: `[port] [array_size] [algorithm]`.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        if let Some(port) = args.next() {
            let port = port.as_ref();
            config.port = port
                .parse()
                .map_err(|_| Error::InvalidArgument(format!("port: {port:?}")))?;
        }
        if let Some(size) = args.next() {
            let size = size.as_ref();
            let size: usize = size
                .parse()
                .map_err(|_| Error::InvalidArgument(format!("array size: {size:?}")))?;
            config.session = config.session.with_array_size(size);
        }
        if let Some(algorithm) = args.next() {
            let algorithm: Algorithm = algorithm.as_ref().parse()?;
            config.session = config.session.with_algorithm(algorithm);
        }

        Ok(config)
    }
}

/// Visualization server.
pub struct VisServer {
    session: Arc<Session>,
}

impl VisServer {
    /// Create a server around a fresh session.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            session: Session::new(Playback::new(config)),
        }
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/health", get(health_handler))
            .route("/api/algorithms", get(algorithms_handler))
            .route("/api/session", get(status_handler))
            .route("/api/session/start", post(start_handler))
            .route("/api/session/pause", post(pause_handler))
            .route("/api/session/resume", post(resume_handler))
            .route("/api/session/reset", post(reset_handler))
            .route("/api/session/generate", post(generate_handler))
            .route("/api/session/size", post(size_handler))
            .route("/api/session/speed", post(speed_handler))
            .route("/api/session/algorithm", post(algorithm_handler))
            // WebSocket for real-time updates
            .route("/ws", get(ws_handler))
            .layer(CorsLayer::permissive())
            .with_state(self.session.clone())
    }

    /// Spawn the playback driver and serve on the given port.
    pub async fn serve(self, port: u16) -> Result<()> {
        let driver = self.session.spawn_driver();

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Sortline server running on http://localhost:{}", port);
        let served = axum::serve(listener, self.router()).await;

        driver.abort();
        served.map_err(Error::from)
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(Serialize)]
struct AlgorithmEntry {
    id: Algorithm,
    info: AlgorithmInfo,
}

async fn algorithms_handler() -> Json<Vec<AlgorithmEntry>> {
    Json(
        Algorithm::ALL
            .into_iter()
            .map(|id| AlgorithmEntry { id, info: id.info() })
            .collect(),
    )
}

async fn status_handler(State(session): State<Arc<Session>>) -> Json<PlaybackStatus> {
    Json(session.status().await)
}

async fn start_handler(State(session): State<Arc<Session>>) -> Json<PlaybackStatus> {
    Json(session.command(Command::Start).await)
}

async fn pause_handler(State(session): State<Arc<Session>>) -> Json<PlaybackStatus> {
    Json(session.command(Command::Pause).await)
}

async fn resume_handler(State(session): State<Arc<Session>>) -> Json<PlaybackStatus> {
    Json(session.command(Command::Resume).await)
}

async fn reset_handler(State(session): State<Arc<Session>>) -> Json<PlaybackStatus> {
    Json(session.command(Command::Reset).await)
}

async fn generate_handler(State(session): State<Arc<Session>>) -> Json<PlaybackStatus> {
    Json(session.command(Command::Generate).await)
}

#[derive(Deserialize)]
struct SizeRequest {
    size: usize,
}

async fn size_handler(
    State(session): State<Arc<Session>>,
    Json(req): Json<SizeRequest>,
) -> Json<PlaybackStatus> {
    Json(session.command(Command::SetSize { size: req.size }).await)
}

#[derive(Deserialize)]
struct SpeedRequest {
    level: u8,
}

async fn speed_handler(
    State(session): State<Arc<Session>>,
    Json(req): Json<SpeedRequest>,
) -> Json<PlaybackStatus> {
    Json(session.command(Command::SetSpeed { level: req.level }).await)
}

#[derive(Deserialize)]
struct AlgorithmRequest {
    algorithm: Algorithm,
}

async fn algorithm_handler(
    State(session): State<Arc<Session>>,
    Json(req): Json<AlgorithmRequest>,
) -> Json<PlaybackStatus> {
    Json(session.command(Command::SetAlgorithm { algorithm: req.algorithm }).await)
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(session): State<Arc<Session>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, session))
}

fn encode(status: &PlaybackStatus) -> Result<String> {
    Ok(serde_json::to_string(status)?)
}

async fn send_status(socket: &mut WebSocket, status: &PlaybackStatus) -> Result<()> {
    let json = encode(status)?;
    socket
        .send(Message::Text(json.into()))
        .await
        .map_err(|e| Error::Io(std::io::Error::other(e)))
}

async fn handle_ws(mut socket: WebSocket, session: Arc<Session>) {
    debug!("WebSocket client connected");
    let mut updates = session.subscribe();

    let initial = updates.borrow_and_update().clone();
    if let Err(e) = send_status(&mut socket, &initial).await {
        warn!("Failed to send initial status: {}", e);
        return;
    }

    loop {
        tokio::select! {
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        match serde_json::from_str::<Command>(&text) {
                            // The resulting status arrives through `updates`.
                            Ok(cmd) => { session.command(cmd).await; }
                            Err(e) => warn!("Ignoring malformed command: {}", e),
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        warn!("WebSocket error: {}", e);
                        break;
                    }
                    _ => {}
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let status = updates.borrow_and_update().clone();
                if let Err(e) = send_status(&mut socket, &status).await {
                    warn!("Failed to send status: {}", e);
                    break;
                }
            }
        }
    }
    debug!("WebSocket client disconnected");
}
