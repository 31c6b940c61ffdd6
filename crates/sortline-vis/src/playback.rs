//! Playback controller for sorting traces.
//!
//! A [`Playback`] owns one session: the visible sequence, the active
//! trace and its cursor, the counters, and the two timers that drive
//! stepping and elapsed-time accounting. Every transition takes `now`
//! explicitly; nothing here reads the clock or spawns tasks.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use sortline_trace::{Algorithm, Frame, Trace, Value};
use tracing::{debug, info, trace};

use crate::scheduler::{StepTimer, Ticker};
use crate::sequence::{clamp_array_size, SequenceGenerator, SessionConfig};

/// Per-step delay, slowest to fastest.
pub const STEP_DELAYS_MS: [u64; 5] = [300, 200, 100, 50, 10];

const _: () = {
    let mut i = 1;
    while i < STEP_DELAYS_MS.len() {
        assert!(STEP_DELAYS_MS[i] < STEP_DELAYS_MS[i - 1]);
        i += 1;
    }
};

/// Speed level, 1 (slowest) through 5 (fastest).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackSpeed {
    /// 300ms per step
    VerySlow,
    /// 200ms per step
    Slow,
    /// 100ms per step
    #[default]
    Normal,
    /// 50ms per step
    Fast,
    /// 10ms per step
    VeryFast,
}

impl PlaybackSpeed {
    const LEVELS: [PlaybackSpeed; 5] = [
        PlaybackSpeed::VerySlow,
        PlaybackSpeed::Slow,
        PlaybackSpeed::Normal,
        PlaybackSpeed::Fast,
        PlaybackSpeed::VeryFast,
    ];

    /// Speed for an ordinal level, clamped into 1..=5.
    pub fn from_level(level: u8) -> Self {
        let index = usize::from(level.clamp(1, 5)) - 1;
        Self::LEVELS[index]
    }

    /// Ordinal level, 1..=5.
    pub fn level(&self) -> u8 {
        *self as u8 + 1
    }

    /// Delay between two applied frames.
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(STEP_DELAYS_MS[*self as usize])
    }
}

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// No trace loaded; a fresh sequence is waiting
    Idle,
    /// Stepping through the trace
    Running,
    /// Started, but stepping is halted
    Paused,
    /// The whole trace has been applied
    Completed,
}

/// Everything the display layer draws: the sequence, the highlight sets
/// and the counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Board {
    values: Vec<Value>,
    comparing: Vec<usize>,
    swapping: Vec<usize>,
    settled: Vec<usize>,
    comparisons: u64,
    swaps: u64,
}

impl Board {
    fn apply(&mut self, frame: &Frame) {
        match frame {
            Frame::Compare { indices, .. } => {
                self.comparing = indices.to_vec();
                self.swapping.clear();
                self.comparisons += 1;
            }
            Frame::Swap { indices, snapshot } => {
                self.comparing.clear();
                self.swapping = indices.to_vec();
                self.swaps += 1;
                self.values.clone_from(snapshot);
            }
            Frame::Settled { index, snapshot } => {
                self.mark_settled(*index);
                self.clear_highlights();
                self.values.clone_from(snapshot);
            }
        }
    }

    fn mark_settled(&mut self, index: usize) {
        if !self.settled.contains(&index) {
            self.settled.push(index);
        }
    }

    fn clear_highlights(&mut self) {
        self.comparing.clear();
        self.swapping.clear();
    }

    /// Clear counters and highlights, keep the sequence.
    fn clear(&mut self) {
        self.clear_highlights();
        self.settled.clear();
        self.comparisons = 0;
        self.swaps = 0;
    }
}

/// Playback controller for one sorting session.
pub struct Playback {
    generator: SequenceGenerator,
    board: Board,
    algorithm: Algorithm,
    array_size: usize,
    speed: PlaybackSpeed,
    state: PlaybackState,
    elapsed: Duration,
    trace: Trace,
    cursor: usize,
    step_timer: StepTimer,
    ticker: Ticker,
}

impl Playback {
    /// Create a session and generate its first sequence.
    pub fn new(config: SessionConfig) -> Self {
        let mut generator = SequenceGenerator::new(config.seed);
        let array_size = clamp_array_size(config.array_size);
        let values = generator.generate(array_size);

        Self {
            generator,
            board: Board {
                values,
                ..Board::default()
            },
            algorithm: config.algorithm,
            array_size,
            speed: config.speed,
            state: PlaybackState::Idle,
            elapsed: Duration::ZERO,
            trace: Trace::default(),
            cursor: 0,
            step_timer: StepTimer::new(),
            ticker: Ticker::default(),
        }
    }

    // --- Observable state ---

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// True between start and completion/reset, paused or not.
    pub fn is_running(&self) -> bool {
        matches!(self.state, PlaybackState::Running | PlaybackState::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlaybackState::Paused
    }

    pub fn values(&self) -> &[Value] {
        &self.board.values
    }

    pub fn comparing(&self) -> &[usize] {
        &self.board.comparing
    }

    pub fn swapping(&self) -> &[usize] {
        &self.board.swapping
    }

    /// Settled indices in the order they were first settled.
    pub fn settled(&self) -> &[usize] {
        &self.board.settled
    }

    pub fn comparisons(&self) -> u64 {
        self.board.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.board.swaps
    }

    /// Active (running, not paused) time as of the last tick or transition.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn array_size(&self) -> usize {
        self.array_size
    }

    pub fn speed(&self) -> PlaybackSpeed {
        self.speed
    }

    /// Index of the next frame to apply.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total_frames(&self) -> usize {
        self.trace.len()
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Fraction of the trace applied so far (0.0 - 1.0).
    pub fn progress(&self) -> f64 {
        if self.trace.is_empty() {
            if self.state == PlaybackState::Completed { 1.0 } else { 0.0 }
        } else {
            self.cursor as f64 / self.trace.len() as f64
        }
    }

    /// Earliest instant at which [`Playback::poll`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.step_timer.deadline(), self.ticker.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // --- Transitions ---

    /// Generate the trace for the current sequence and start stepping.
    ///
    /// Ignored while a session is already running (paused included).
    pub fn start(&mut self, now: Instant) {
        if self.is_running() {
            debug!(state = ?self.state, "start ignored");
            return;
        }
        let trace = self.algorithm.trace(&self.board.values);
        self.begin(trace, now);
    }

    fn begin(&mut self, trace: Trace, now: Instant) {
        self.cancel_timers();
        self.board.clear();
        self.elapsed = Duration::ZERO;
        self.trace = trace;
        self.cursor = 0;
        self.state = PlaybackState::Running;

        info!(
            algorithm = %self.algorithm,
            size = self.board.values.len(),
            frames = self.trace.len(),
            "sort started"
        );

        self.ticker.start(now, Duration::ZERO);
        self.step(now);
    }

    /// Halt stepping, keeping cursor and counters.
    pub fn pause(&mut self, now: Instant) {
        if self.state != PlaybackState::Running {
            debug!(state = ?self.state, "pause ignored");
            return;
        }
        if let Some(elapsed) = self.ticker.elapsed(now) {
            self.elapsed = elapsed;
        }
        self.cancel_timers();
        self.state = PlaybackState::Paused;
        debug!(cursor = self.cursor, "paused");
    }

    /// Continue from the retained cursor, applying the next frame immediately.
    pub fn resume(&mut self, now: Instant) {
        if self.state != PlaybackState::Paused {
            debug!(state = ?self.state, "resume ignored");
            return;
        }
        self.state = PlaybackState::Running;
        self.ticker.start(now, self.elapsed);
        debug!(cursor = self.cursor, "resumed");
        self.step(now);
    }

    /// Cancel everything and start over with a fresh sequence. Allowed in any state.
    pub fn reset(&mut self) {
        self.cancel_timers();
        self.clear_session();
        self.board.values = self.generator.generate(self.array_size);
        debug!(size = self.array_size, "reset");
    }

    /// Draw a fresh sequence. Ignored while running.
    pub fn generate(&mut self) {
        if self.is_running() {
            debug!("generate ignored while running");
            return;
        }
        self.reset();
    }

    /// Change the array size (clamped) and regenerate. Ignored while running.
    pub fn set_array_size(&mut self, size: usize) {
        if self.is_running() {
            debug!(size, "array size change ignored while running");
            return;
        }
        self.array_size = clamp_array_size(size);
        self.reset();
    }

    /// Select another algorithm, keeping the current sequence. Ignored while running.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        if self.is_running() {
            debug!(%algorithm, "algorithm change ignored while running");
            return;
        }
        self.algorithm = algorithm;
        self.clear_session();
    }

    /// Load an explicit sequence instead of a random one. Ignored while running.
    ///
    /// The length is taken as-is; only [`Playback::set_array_size`] clamps.
    pub fn set_sequence(&mut self, values: Vec<Value>) {
        if self.is_running() {
            debug!("sequence change ignored while running");
            return;
        }
        self.cancel_timers();
        self.clear_session();
        self.array_size = values.len();
        self.board.values = values;
    }

    /// Change speed. Takes effect from the next scheduled step.
    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.speed = speed;
    }

    /// Fire whatever is due at `now`. Returns true if observable state changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if let Some(elapsed) = self.ticker.fire(now) {
            self.elapsed = elapsed;
            changed = true;
        }
        if self.step_timer.fire(now) {
            self.step(now);
            changed = true;
        }
        changed
    }

    // --- Internals ---

    /// Apply the frame under the cursor and schedule the next one.
    fn step(&mut self, now: Instant) {
        debug_assert_eq!(self.state, PlaybackState::Running);

        if let Some(frame) = self.trace.get(self.cursor) {
            trace!(cursor = self.cursor, kind = ?frame.kind(), indices = ?frame.indices(), "apply frame");
            self.board.apply(frame);
            self.cursor += 1;
        }

        if self.cursor >= self.trace.len() {
            self.complete(now);
        } else {
            self.step_timer.schedule(now + self.speed.step_delay());
        }
    }

    fn complete(&mut self, now: Instant) {
        if let Some(elapsed) = self.ticker.elapsed(now) {
            self.elapsed = elapsed;
        }
        self.cancel_timers();
        self.state = PlaybackState::Completed;

        for index in 0..self.board.values.len() {
            self.board.mark_settled(index);
        }
        self.board.clear_highlights();

        info!(
            algorithm = %self.algorithm,
            comparisons = self.board.comparisons,
            swaps = self.board.swaps,
            elapsed_ms = self.elapsed.as_millis() as u64,
            "sort completed"
        );
    }

    fn cancel_timers(&mut self) {
        self.step_timer.cancel();
        self.ticker.cancel();
    }

    fn clear_session(&mut self) {
        self.board.clear();
        self.elapsed = Duration::ZERO;
        self.trace = Trace::default();
        self.cursor = 0;
        self.state = PlaybackState::Idle;
    }
}

/// Playback status for sending to frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub state: PlaybackState,
    pub running: bool,
    pub paused: bool,
    pub algorithm: Algorithm,
    pub array_size: usize,
    pub speed: u8,
    pub step_delay_ms: u64,
    pub values: Vec<Value>,
    pub comparing: Vec<usize>,
    pub swapping: Vec<usize>,
    pub settled: Vec<usize>,
    pub comparisons: u64,
    pub swaps: u64,
    pub elapsed_ms: u64,
    pub current_frame: usize,
    pub total_frames: usize,
    pub progress: f64,
}

impl From<&Playback> for PlaybackStatus {
    fn from(playback: &Playback) -> Self {
        Self {
            state: playback.state,
            running: playback.is_running(),
            paused: playback.is_paused(),
            algorithm: playback.algorithm,
            array_size: playback.array_size,
            speed: playback.speed.level(),
            step_delay_ms: playback.speed.step_delay().as_millis() as u64,
            values: playback.board.values.clone(),
            comparing: playback.board.comparing.clone(),
            swapping: playback.board.swapping.clone(),
            settled: playback.board.settled.clone(),
            comparisons: playback.board.comparisons,
            swaps: playback.board.swaps,
            elapsed_ms: playback.elapsed.as_millis() as u64,
            current_frame: playback.cursor,
            total_frames: playback.trace.len(),
            progress: playback.progress(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortline_trace::FrameKind;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn playback_with(values: Vec<Value>, algorithm: Algorithm) -> Playback {
        let mut playback = Playback::new(SessionConfig::default().with_seed(1));
        playback.set_algorithm(algorithm);
        playback.set_sequence(values);
        playback
    }

    /// Poll at every deadline until the session stops running.
    fn run_to_end(playback: &mut Playback, mut now: Instant) -> Instant {
        while let Some(at) = playback.next_deadline() {
            now = now.max(at);
            playback.poll(now);
        }
        now
    }

    #[test]
    fn speed_levels_clamp_and_map() {
        assert_eq!(PlaybackSpeed::from_level(0), PlaybackSpeed::VerySlow);
        assert_eq!(PlaybackSpeed::from_level(3), PlaybackSpeed::Normal);
        assert_eq!(PlaybackSpeed::from_level(9), PlaybackSpeed::VeryFast);
        assert_eq!(PlaybackSpeed::VerySlow.step_delay(), ms(300));
        assert_eq!(PlaybackSpeed::VeryFast.step_delay(), ms(10));
        for level in 1..=5 {
            assert_eq!(PlaybackSpeed::from_level(level).level(), level);
        }
    }

    #[test]
    fn new_session_is_idle_with_sequence() {
        let playback = Playback::new(SessionConfig::default().with_array_size(20).with_seed(3));
        assert_eq!(playback.state(), PlaybackState::Idle);
        assert_eq!(playback.values().len(), 20);
        assert_eq!(playback.next_deadline(), None);
    }

    #[test]
    fn start_applies_first_frame_and_schedules_next() {
        let t0 = Instant::now();
        let mut playback = playback_with(vec![5, 3, 8, 1], Algorithm::Bubble);
        playback.start(t0);

        assert_eq!(playback.state(), PlaybackState::Running);
        assert_eq!(playback.cursor(), 1);
        assert_eq!(playback.comparisons(), 1);
        assert_eq!(playback.comparing(), &[0, 1]);
        assert_eq!(playback.values(), &[5, 3, 8, 1]);
        assert_eq!(playback.next_deadline(), Some(t0 + ms(100)));
    }

    #[test]
    fn swap_frame_replaces_sequence() {
        let t0 = Instant::now();
        let mut playback = playback_with(vec![5, 3, 8, 1], Algorithm::Bubble);
        playback.set_speed(PlaybackSpeed::VerySlow);
        playback.start(t0);

        assert!(playback.poll(t0 + ms(300)));
        assert_eq!(playback.swapping(), &[0, 1]);
        assert!(playback.comparing().is_empty());
        assert_eq!(playback.values(), &[3, 5, 8, 1]);
        assert_eq!(playback.swaps(), 1);
    }

    #[test]
    fn poll_before_deadline_does_nothing() {
        let t0 = Instant::now();
        let mut playback = playback_with(vec![5, 3, 8, 1], Algorithm::Bubble);
        playback.set_speed(PlaybackSpeed::VerySlow);
        playback.start(t0);

        assert!(!playback.poll(t0 + ms(50)));
        assert_eq!(playback.cursor(), 1);
    }

    #[test]
    fn full_playback_counts_match_trace() {
        let input = vec![9, 4, 7, 1, 8, 2, 2, 6, 5, 3];
        for algorithm in Algorithm::ALL {
            let expected = algorithm.trace(&input);
            let mut playback = playback_with(input.clone(), algorithm);
            playback.set_speed(PlaybackSpeed::VeryFast);
            playback.start(Instant::now());
            run_to_end(&mut playback, Instant::now());

            assert_eq!(playback.state(), PlaybackState::Completed, "{algorithm}");
            assert_eq!(playback.comparisons() as usize, expected.compare_count(), "{algorithm}");
            assert_eq!(playback.swaps() as usize, expected.swap_count(), "{algorithm}");
            assert_eq!(playback.values(), &[1, 2, 2, 3, 4, 5, 6, 7, 8, 9]);
            assert_eq!(playback.cursor(), expected.len());
            assert_eq!(playback.progress(), 1.0);
        }
    }

    #[test]
    fn completion_settles_every_index_once() {
        let mut playback = playback_with(vec![2, 1], Algorithm::Insertion);
        playback.start(Instant::now());
        run_to_end(&mut playback, Instant::now());

        // Insertion settles index 0 twice; the set keeps it once.
        let mut settled = playback.settled().to_vec();
        settled.sort_unstable();
        assert_eq!(settled, vec![0, 1]);
        assert!(playback.comparing().is_empty());
        assert!(playback.swapping().is_empty());
        assert_eq!(playback.next_deadline(), None);
    }

    #[test]
    fn completion_covers_indices_the_trace_missed() {
        let t0 = Instant::now();
        let mut playback = playback_with(vec![1, 2, 3], Algorithm::Bubble);
        let partial = Trace::from(vec![
            Frame::Compare { indices: [0, 1], snapshot: vec![1, 2, 3] },
            Frame::Settled { index: 2, snapshot: vec![1, 2, 3] },
        ]);
        playback.begin(partial, t0);
        run_to_end(&mut playback, t0);

        let mut settled = playback.settled().to_vec();
        settled.sort_unstable();
        assert_eq!(settled, vec![0, 1, 2]);
        assert_eq!(playback.state(), PlaybackState::Completed);
    }

    #[test]
    fn empty_sequence_completes_immediately() {
        let mut playback = playback_with(Vec::new(), Algorithm::Quick);
        playback.start(Instant::now());

        assert_eq!(playback.state(), PlaybackState::Completed);
        assert_eq!(playback.comparisons(), 0);
        assert_eq!(playback.next_deadline(), None);
    }

    #[test]
    fn start_while_running_is_ignored() {
        let t0 = Instant::now();
        let mut playback = playback_with(vec![5, 3, 8, 1], Algorithm::Bubble);
        playback.start(t0);
        playback.poll(t0 + ms(100));
        playback.start(t0 + ms(150));

        assert_eq!(playback.cursor(), 2);
        assert_eq!(playback.comparisons(), 1);
        assert_eq!(playback.swaps(), 1);
    }

    #[test]
    fn pause_cancels_pending_step() {
        let t0 = Instant::now();
        let mut playback = playback_with(vec![5, 3, 8, 1], Algorithm::Bubble);
        playback.start(t0);
        playback.pause(t0 + ms(40));

        assert_eq!(playback.state(), PlaybackState::Paused);
        assert!(playback.is_running());
        assert_eq!(playback.next_deadline(), None);
        assert!(!playback.poll(t0 + ms(10_000)));
        assert_eq!(playback.cursor(), 1);
    }

    #[test]
    fn pause_resume_neither_skips_nor_repeats() {
        let input = vec![7, 3, 9, 1, 4];
        let expected = Algorithm::Selection.trace(&input);
        let t0 = Instant::now();
        let mut playback = playback_with(input, Algorithm::Selection);
        playback.start(t0);
        playback.poll(t0 + ms(100));
        playback.poll(t0 + ms(200));

        let before = playback.cursor();
        playback.pause(t0 + ms(250));
        playback.resume(t0 + ms(250));

        assert_eq!(playback.cursor() - 1, before);
        // The frame applied on resume is exactly the one at the old cursor.
        let resumed = expected.get(before).unwrap();
        if resumed.kind() == FrameKind::Compare {
            assert_eq!(playback.comparing(), resumed.indices());
        }
        assert_eq!(playback.values(), resumed.snapshot());
    }

    #[test]
    fn paused_interval_is_excluded_from_elapsed() {
        let t0 = Instant::now();
        let mut playback = playback_with((1..=10).rev().collect(), Algorithm::Bubble);
        playback.set_speed(PlaybackSpeed::VerySlow);
        playback.start(t0);

        playback.poll(t0 + ms(200));
        assert_eq!(playback.elapsed(), ms(200));

        playback.pause(t0 + ms(250));
        assert_eq!(playback.elapsed(), ms(250));

        // Five seconds paused.
        playback.resume(t0 + ms(5250));
        playback.poll(t0 + ms(5350));
        assert_eq!(playback.elapsed(), ms(350));
    }

    #[test]
    fn illegal_transitions_are_noops() {
        let t0 = Instant::now();
        let mut playback = playback_with(vec![3, 2, 1], Algorithm::Bubble);

        playback.pause(t0);
        assert_eq!(playback.state(), PlaybackState::Idle);
        playback.resume(t0);
        assert_eq!(playback.state(), PlaybackState::Idle);

        playback.start(t0);
        playback.resume(t0);
        assert_eq!(playback.cursor(), 1);

        playback.pause(t0);
        playback.pause(t0);
        assert_eq!(playback.state(), PlaybackState::Paused);
    }

    #[test]
    fn reset_is_idempotent() {
        let t0 = Instant::now();
        let mut playback = playback_with(vec![5, 3, 8, 1], Algorithm::Bubble);
        playback.start(t0);
        playback.poll(t0 + ms(100));

        for _ in 0..2 {
            playback.reset();
            assert_eq!(playback.state(), PlaybackState::Idle);
            assert_eq!(playback.comparisons(), 0);
            assert_eq!(playback.swaps(), 0);
            assert_eq!(playback.elapsed(), Duration::ZERO);
            assert_eq!(playback.cursor(), 0);
            assert_eq!(playback.total_frames(), 0);
            assert!(playback.comparing().is_empty());
            assert!(playback.swapping().is_empty());
            assert!(playback.settled().is_empty());
            assert_eq!(playback.next_deadline(), None);
        }
        assert_eq!(playback.values().len(), 4);
    }

    #[test]
    fn reset_cancels_pending_step() {
        let t0 = Instant::now();
        let mut playback = playback_with(vec![5, 3, 8, 1], Algorithm::Bubble);
        playback.start(t0);
        playback.reset();

        assert!(!playback.poll(t0 + ms(1000)));
        assert_eq!(playback.cursor(), 0);
    }

    #[test]
    fn mutations_ignored_while_running() {
        let t0 = Instant::now();
        let mut playback = playback_with(vec![5, 3, 8, 1], Algorithm::Bubble);
        playback.start(t0);
        playback.pause(t0);

        playback.set_array_size(80);
        playback.set_algorithm(Algorithm::Quick);
        playback.set_sequence(vec![1]);
        playback.generate();

        assert_eq!(playback.array_size(), 4);
        assert_eq!(playback.algorithm(), Algorithm::Bubble);
        assert_eq!(playback.values(), &[5, 3, 8, 1]);
        assert_eq!(playback.state(), PlaybackState::Paused);
    }

    #[test]
    fn mutations_allowed_after_completion() {
        let mut playback = playback_with(vec![2, 1], Algorithm::Bubble);
        playback.start(Instant::now());
        run_to_end(&mut playback, Instant::now());

        playback.set_algorithm(Algorithm::Quick);
        assert_eq!(playback.state(), PlaybackState::Idle);
        assert_eq!(playback.values(), &[1, 2]);

        playback.set_array_size(1000);
        assert_eq!(playback.array_size(), 100);
        assert_eq!(playback.values().len(), 100);
    }

    #[test]
    fn speed_change_applies_to_next_schedule() {
        let t0 = Instant::now();
        let mut playback = playback_with(vec![5, 3, 8, 1], Algorithm::Bubble);
        playback.start(t0);
        playback.set_speed(PlaybackSpeed::VeryFast);

        // Already-scheduled step keeps its deadline.
        assert!(playback.poll(t0 + ms(100)));
        assert_eq!(playback.next_deadline(), Some(t0 + ms(110)));
    }

    #[test]
    fn status_reflects_session() {
        let t0 = Instant::now();
        let mut playback = playback_with(vec![5, 3, 8, 1], Algorithm::Bubble);
        playback.set_speed(PlaybackSpeed::Fast);
        playback.start(t0);

        let status = PlaybackStatus::from(&playback);
        assert_eq!(status.state, PlaybackState::Running);
        assert!(status.running);
        assert!(!status.paused);
        assert_eq!(status.speed, 4);
        assert_eq!(status.step_delay_ms, 50);
        assert_eq!(status.current_frame, 1);
        assert_eq!(status.total_frames, 14);
        assert_eq!(status.comparing, vec![0, 1]);

        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"state\":\"running\""));
        assert!(json.contains("\"algorithm\":\"bubble\""));
    }
}
