//! Fixed-step simulation clock.

/// Simulation time advanced by a constant step once per frame.
///
/// Time starts at zero, only ever increases, and is never reset.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    time_s: f64,
    step_s: f64,
    ticks: u64,
}

impl SimulationClock {
    /// Clock advancing `dt / frames_per_second` seconds per tick
    pub fn new(dt: f64, frames_per_second: f64) -> Self {
        Self {
            time_s: 0.0,
            step_s: dt / frames_per_second,
            ticks: 0,
        }
    }

    /// Current simulation time (seconds)
    pub fn time(&self) -> f64 {
        self.time_s
    }

    pub fn step(&self) -> f64 {
        self.step_s
    }

    /// Number of completed ticks
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance one step and return the new time
    pub fn advance(&mut self) -> f64 {
        self.time_s += self.step_s;
        self.ticks += 1;
        self.time_s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let clock = SimulationClock::new(10.0, 60.0);
        assert_eq!(clock.time(), 0.0);
        assert_eq!(clock.ticks(), 0);
        assert_eq!(clock.step(), 10.0 / 60.0);
    }

    #[test]
    fn test_strictly_increasing_by_step() {
        let mut clock = SimulationClock::new(10.0, 60.0);
        let step = 10.0 / 60.0;

        let mut previous = clock.time();
        for _ in 0..10_000 {
            let now = clock.advance();
            assert!(now > previous);
            assert!((now - previous - step).abs() < 1e-9);
            previous = now;
        }

        assert_eq!(clock.ticks(), 10_000);
        assert!((clock.time() - 10_000.0 * step).abs() < 1e-7);
    }
}
