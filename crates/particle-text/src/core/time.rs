/// Fixed-period interval accumulator.
///
/// Native hosts feed it variable frame deltas; it reports how many whole
/// periods have elapsed, the way a browser `setInterval` would have fired.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    /// Period between firings, in milliseconds.
    period_ms: f32,
    /// Time accumulated since the last firing.
    accumulator: f32,
}

impl IntervalTimer {
    /// Cap on firings reported for a single delta (e.g. after a long stall).
    pub const MAX_FIRES_PER_TICK: u32 = 10;

    pub fn new(period_ms: f32) -> Self {
        Self {
            period_ms: period_ms.max(f32::EPSILON),
            accumulator: 0.0,
        }
    }

    /// Add elapsed time. Returns the number of periods that completed.
    pub fn accumulate(&mut self, elapsed_ms: f32) -> u32 {
        self.accumulator += elapsed_ms.max(0.0);
        // Cap to avoid a burst of mode changes after a stalled host
        self.accumulator = self
            .accumulator
            .min(self.period_ms * Self::MAX_FIRES_PER_TICK as f32);
        let fires = (self.accumulator / self.period_ms) as u32;
        self.accumulator -= fires as f32 * self.period_ms;
        fires
    }

    /// Fraction of the current period already elapsed (0.0 to 1.0).
    pub fn progress(&self) -> f32 {
        self.accumulator / self.period_ms
    }
}
