//! Frame clock for real-time drivers.

use web_time::{Duration, Instant};

/// Wall clock for real-time drivers: measures the milliseconds between
/// ticks and keeps a smoothed FPS figure for logging.
#[derive(Debug)]
pub struct FrameTiming {
    /// Timestamp of the previous tick.
    last_tick: Instant,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f64,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f64,
    /// Ticks seen since construction.
    ticks: u64,
}

impl FrameTiming {
    /// Clock starting now.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Clock whose first tick is measured from `start`.
    #[must_use]
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_tick: start,
            smoothed_fps: 50.0,
            smoothing: 0.05,
            ticks: 0,
        }
    }

    /// Milliseconds since the previous tick, measured against the current
    /// time.
    pub fn tick(&mut self) -> f64 {
        self.tick_at(Instant::now())
    }

    /// Milliseconds since the previous tick, measured against `now`.
    ///
    /// A `now` earlier than the previous tick yields zero.
    pub fn tick_at(&mut self, now: Instant) -> f64 {
        let elapsed = now
            .checked_duration_since(self.last_tick)
            .unwrap_or(Duration::ZERO);
        self.last_tick = now;
        self.ticks += 1;

        let frame_time = elapsed.as_secs_f64();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time * 1000.0
    }

    /// Smoothed ticks per second.
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.smoothed_fps
    }

    /// Number of ticks taken so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}
