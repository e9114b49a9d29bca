/// Game loop timing and control system
///
/// Implements a fixed timestep game loop: wall-clock time is accumulated
/// and converted into an integer number of simulation ticks per host
/// invocation, so the simulation advances at a constant logical rate no
/// matter how often the host actually calls in. Rendering is coupled 1:1
/// with ticks (no interpolation); if the host falls behind, ticks run
/// back-to-back and the simulation stays on time at the cost of stutter.
use std::time::{Duration, Instant};

/// Default simulation rate (ticks per second)
pub const DEFAULT_TICK_RATE: u32 = 60;

/// Fixed timestep game loop state
#[derive(Debug)]
pub struct GameLoop {
    /// Duration of one simulation tick
    tick_interval: Duration,

    /// Accumulated time not yet consumed by ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Time when game loop started
    start_time: Instant,

    /// Total ticks executed
    tick_count: u64,

    /// Total host invocations
    frame_count: u64,

    /// Wall time accumulated toward the next rate report
    rate_timer: Duration,

    /// Ticks accumulated toward the next rate report
    rate_ticks: u32,

    /// Most recent measured tick rate (diagnostic only)
    measured_rate: f32,
}

impl GameLoop {
    /// Create a game loop running at the given tick rate
    pub fn new(tick_rate: u32) -> Self {
        let rate = tick_rate.max(1);
        let now = Instant::now();
        Self {
            tick_interval: Duration::from_nanos(1_000_000_000 / u64::from(rate)),
            accumulator: Duration::ZERO,
            last_frame_time: now,
            start_time: now,
            tick_count: 0,
            frame_count: 0,
            rate_timer: Duration::ZERO,
            rate_ticks: 0,
            measured_rate: 0.0,
        }
    }

    /// Begin a new frame, returns the number of simulation ticks to run
    ///
    /// Samples the wall clock; use [`GameLoop::advance`] directly when the
    /// elapsed time comes from somewhere else (tests, replays).
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Feed elapsed time into the accumulator, returns the tick count due
    ///
    /// The accumulator keeps the exact sub-tick remainder, so any partition
    /// of the same total elapsed time yields the same total tick count.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.frame_count += 1;
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.tick_interval {
            self.accumulator -= self.tick_interval;
            ticks += 1;
        }

        self.tick_count += u64::from(ticks);
        self.update_rate(elapsed, ticks);
        ticks
    }

    /// Get the tick interval
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Get total elapsed time since start
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Get total number of ticks executed
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Get total number of host invocations
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the most recent measured ticks-per-second
    ///
    /// Diagnostic only; timing decisions never read this.
    pub fn measured_rate(&self) -> f32 {
        self.measured_rate
    }

    /// Accumulate the per-second tick rate diagnostic
    fn update_rate(&mut self, elapsed: Duration, ticks: u32) {
        self.rate_timer += elapsed;
        self.rate_ticks += ticks;

        if self.rate_timer >= Duration::from_secs(1) {
            self.measured_rate = self.rate_ticks as f32 / self.rate_timer.as_secs_f32();
            log::debug!("simulation rate: {:.1} ticks/s", self.measured_rate);
            self.rate_timer = Duration::ZERO;
            self.rate_ticks = 0;
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_RATE)
    }
}
