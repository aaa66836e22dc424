use std::time::Instant;

use crate::host::FrameClock;

/// Clock advanced explicitly by the caller, one `tick` per frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManualClock {
    now: f32,
    delta: f32,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a frame `dt` seconds after the previous one.
    pub fn tick(&mut self, dt: f32) {
        self.delta = dt;
        self.now += dt.max(0.0);
    }
}

impl FrameClock for ManualClock {
    fn current_time_secs(&self) -> f32 {
        self.now
    }

    fn delta_secs(&self) -> f32 {
        self.delta
    }
}

/// Wall clock: `tick` measures the time since the previous frame.
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
    last: Instant,
    delta: f32,
}

impl SystemClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            delta: 0.0,
        }
    }

    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now.duration_since(self.last).as_secs_f32();
        self.last = now;
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn current_time_secs(&self) -> f32 {
        self.last.duration_since(self.start).as_secs_f32()
    }

    fn delta_secs(&self) -> f32 {
        self.delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_accumulates() {
        let mut clock = ManualClock::new();
        clock.tick(0.25);
        clock.tick(0.5);
        assert_eq!(clock.current_time_secs(), 0.75);
        assert_eq!(clock.delta_secs(), 0.5);
    }

    #[test]
    fn manual_clock_never_runs_backwards() {
        let mut clock = ManualClock::new();
        clock.tick(1.0);
        clock.tick(-0.5);
        assert_eq!(clock.current_time_secs(), 1.0);
        assert_eq!(clock.delta_secs(), -0.5, "Raw delta is reported as given");
    }

    #[test]
    fn system_clock_is_monotonic() {
        let mut clock = SystemClock::new();
        clock.tick();
        let t1 = clock.current_time_secs();
        clock.tick();
        assert!(clock.current_time_secs() >= t1);
        assert!(clock.delta_secs() >= 0.0);
    }
}
