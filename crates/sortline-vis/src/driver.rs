//! Async driver: turns playback deadlines into tokio sleeps.
//!
//! One [`Session`] wraps one [`Playback`] behind a lock. Commands mutate it
//! and wake the driver; the driver sleeps until the next deadline, polls,
//! and publishes the new status. Only the driver ever fires a step, so at
//! most one step is pending at any time.

use std::sync::Arc;
use std::time::Instant;

use serde::Deserialize;
use sortline_trace::Algorithm;
use tokio::sync::{watch, Notify, RwLock};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::playback::{Playback, PlaybackSpeed, PlaybackStatus};

/// A user command, as issued by the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Start,
    Pause,
    Resume,
    Reset,
    Generate,
    SetSize { size: usize },
    SetSpeed { level: u8 },
    SetAlgorithm { algorithm: Algorithm },
}

impl Command {
    /// Apply this command to a playback at `now`.
    pub fn apply(self, playback: &mut Playback, now: Instant) {
        match self {
            Command::Start => playback.start(now),
            Command::Pause => playback.pause(now),
            Command::Resume => playback.resume(now),
            Command::Reset => playback.reset(),
            Command::Generate => playback.generate(),
            Command::SetSize { size } => playback.set_array_size(size),
            Command::SetSpeed { level } => playback.set_speed(PlaybackSpeed::from_level(level)),
            Command::SetAlgorithm { algorithm } => playback.set_algorithm(algorithm),
        }
    }
}

/// Shared session state.
pub struct Session {
    playback: RwLock<Playback>,
    wake: Notify,
    updates: watch::Sender<PlaybackStatus>,
}

impl Session {
    pub fn new(playback: Playback) -> Arc<Self> {
        let (updates, _) = watch::channel(PlaybackStatus::from(&playback));
        Arc::new(Self {
            playback: RwLock::new(playback),
            wake: Notify::new(),
            updates,
        })
    }

    /// Apply a command, wake the driver, and return the resulting status.
    pub async fn command(&self, command: Command) -> PlaybackStatus {
        debug!(?command, "command");
        self.update(|playback, now| command.apply(playback, now)).await
    }

    /// Run an arbitrary mutation against the playback.
    pub async fn update<F>(&self, f: F) -> PlaybackStatus
    where
        F: FnOnce(&mut Playback, Instant),
    {
        let status = {
            let mut playback = self.playback.write().await;
            f(&mut playback, Instant::now());
            PlaybackStatus::from(&*playback)
        };
        self.updates.send_replace(status.clone());
        self.wake.notify_one();
        status
    }

    pub async fn status(&self) -> PlaybackStatus {
        PlaybackStatus::from(&*self.playback.read().await)
    }

    /// Receive every status published after a command or a step.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackStatus> {
        self.updates.subscribe()
    }

    /// Spawn the driver task for this session.
    pub fn spawn_driver(self: &Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(drive(Arc::clone(self)))
    }
}

/// Drive a session forever: sleep until due, poll, publish.
pub async fn drive(session: Arc<Session>) {
    loop {
        let deadline = session.playback.read().await.next_deadline();

        match deadline {
            Some(at) => {
                tokio::select! {
                    _ = tokio::time::sleep_until(tokio::time::Instant::from_std(at)) => {}
                    _ = session.wake.notified() => continue,
                }
            }
            None => {
                session.wake.notified().await;
                continue;
            }
        }

        let status = {
            let mut playback = session.playback.write().await;
            playback
                .poll(Instant::now())
                .then(|| PlaybackStatus::from(&*playback))
        };
        if let Some(status) = status {
            session.updates.send_replace(status);
        }
    }
}
