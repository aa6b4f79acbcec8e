use std::time::{Duration, Instant};

/// Measures the time between successive frames.
///
/// `delta` returns the seconds since the previous call (or since
/// construction for the first call) and records the frame duration in a
/// fixed-size rolling history for frame-rate display. Deltas are reported
/// as measured, without clamping.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    history: Vec<Duration>,
    index: usize,
    filled: bool,
}

impl FrameClock {
    /// Default number of frames kept for averaging.
    pub const DEFAULT_HISTORY: usize = 120;

    pub fn new() -> Self {
        Self::with_history(Self::DEFAULT_HISTORY)
    }

    pub fn with_history(capacity: usize) -> Self {
        Self::starting_at(Instant::now(), capacity)
    }

    fn starting_at(start: Instant, capacity: usize) -> Self {
        Self {
            last: start,
            history: vec![Duration::ZERO; capacity.max(1)],
            index: 0,
            filled: false,
        }
    }

    /// Seconds elapsed since the previous call.
    pub fn delta(&mut self) -> f32 {
        self.delta_at(Instant::now())
    }

    fn delta_at(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        self.record(dt);
        dt.as_secs_f32()
    }

    fn record(&mut self, dt: Duration) {
        self.history[self.index] = dt;
        self.index = (self.index + 1) % self.history.len();
        if self.index == 0 {
            self.filled = true;
        }
    }

    /// Number of frames currently in the history.
    pub fn count(&self) -> usize {
        if self.filled {
            self.history.len()
        } else {
            self.index
        }
    }

    /// Mean frame duration over the history.
    pub fn average(&self) -> Duration {
        let count = self.count();
        if count == 0 {
            return Duration::ZERO;
        }
        let total: Duration = self.history[..count].iter().sum();
        total / count as u32
    }

    /// Frames per second derived from the average frame duration.
    pub fn fps(&self) -> f32 {
        let avg = self.average().as_secs_f32();
        if avg > 0.0 { 1.0 / avg } else { 0.0 }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_measures_since_previous_call() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, 4);
        let d1 = clock.delta_at(start + Duration::from_millis(16));
        let d2 = clock.delta_at(start + Duration::from_millis(50));
        assert!((d1 - 0.016).abs() < 1e-6);
        assert!((d2 - 0.034).abs() < 1e-6);
    }

    #[test]
    fn empty_clock_reports_zero() {
        let clock = FrameClock::new();
        assert_eq!(clock.count(), 0);
        assert_eq!(clock.average(), Duration::ZERO);
        assert_eq!(clock.fps(), 0.0);
    }

    #[test]
    fn history_wraps_around() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, 2);
        clock.delta_at(start + Duration::from_millis(10));
        clock.delta_at(start + Duration::from_millis(30));
        clock.delta_at(start + Duration::from_millis(60)); // overwrites the 10ms frame
        assert_eq!(clock.count(), 2);
        assert_eq!(clock.average(), Duration::from_millis(25));
        assert!((clock.fps() - 40.0).abs() < 1e-3);
    }

    #[test]
    fn long_frames_are_not_clamped() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start, 2);
        let d = clock.delta_at(start + Duration::from_secs(3));
        assert!((d - 3.0).abs() < 1e-6);
    }
}
