//! Random sequence generation and session configuration.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortline_trace::{Algorithm, Value};

use crate::playback::PlaybackSpeed;

/// Smallest array size a session accepts.
pub const MIN_ARRAY_SIZE: usize = 10;

/// Largest array size a session accepts.
pub const MAX_ARRAY_SIZE: usize = 100;

/// Smallest generated value (inclusive).
pub const MIN_VALUE: Value = 5;

/// Largest generated value (inclusive).
pub const MAX_VALUE: Value = 100;

/// Clamp a requested array size into `MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE`.
pub const fn clamp_array_size(size: usize) -> usize {
    if size < MIN_ARRAY_SIZE {
        MIN_ARRAY_SIZE
    } else if size > MAX_ARRAY_SIZE {
        MAX_ARRAY_SIZE
    } else {
        size
    }
}

/// Configuration for a playback session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Initial array size (clamped on use)
    pub array_size: usize,
    /// Initial speed level
    pub speed: PlaybackSpeed,
    /// Initially selected algorithm
    pub algorithm: Algorithm,
    /// Seed for reproducible sequences; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            array_size: 50,
            speed: PlaybackSpeed::Normal,
            algorithm: Algorithm::Bubble,
            seed: None,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_array_size(mut self, size: usize) -> Self {
        self.array_size = clamp_array_size(size);
        self
    }

    #[must_use]
    pub fn with_speed(mut self, speed: PlaybackSpeed) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Make every generated sequence reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Draws sequences of independent uniform values in `MIN_VALUE..=MAX_VALUE`.
#[derive(Debug)]
pub struct SequenceGenerator {
    rng: StdRng,
}

impl SequenceGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Generate a fresh sequence of `len` values.
    pub fn generate(&mut self, len: usize) -> Vec<Value> {
        (0..len)
            .map(|_| self.rng.gen_range(MIN_VALUE..=MAX_VALUE))
            .collect()
    }
}
