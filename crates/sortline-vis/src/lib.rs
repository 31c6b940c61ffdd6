//! Sortline Playback
//!
//! Step-by-step replay of sorting traces with pause, resume and reset.
//!
//! # Architecture
//!
//! - **Playback**: Session state machine (Idle, Running, Paused, Completed)
//!   that applies one frame per step and keeps counters and highlights
//! - **Scheduler**: Cancellable single-shot step timer and periodic
//!   elapsed-time ticker, both driven by an explicit `now`
//! - **Driver**: Tokio task that sleeps until the next deadline and polls
//! - **REST API / WebSocket**: Commands in, status snapshots out
//!
//! # Usage
//!
//! ```ignore
//! let config = SessionConfig::default().with_algorithm(Algorithm::Quick);
//! let server = VisServer::new(config);
//! server.serve(3000).await?;
//! ```

mod driver;
mod error;
mod playback;
mod scheduler;
mod sequence;
mod server;

pub use driver::{drive, Command, Session};
pub use error::{Error, Result};
pub use playback::{Playback, PlaybackSpeed, PlaybackState, PlaybackStatus, STEP_DELAYS_MS};
pub use scheduler::{StepTimer, Ticker, TICK_PERIOD};
pub use sequence::{
    clamp_array_size, SequenceGenerator, SessionConfig, MAX_ARRAY_SIZE, MAX_VALUE,
    MIN_ARRAY_SIZE, MIN_VALUE,
};
pub use server::{ServerConfig, VisServer};
pub use sortline_trace::{Algorithm, Frame, FrameKind, Trace, Value};
