use super::scale::Scale;
use std::time::Duration;

/// A linear transition of a single scalar, timed against the engine's clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start: Duration,
    duration: Duration,
}

impl Tween {
    pub fn new(from: f64, to: f64, start: Duration, duration: Duration) -> Self {
        Self { from, to, start, duration }
    }

    /// A tween that is already at its target.
    pub fn settled(value: f64, now: Duration) -> Self {
        Self::new(value, value, now, Duration::ZERO)
    }

    /// Progress in `[0, 1]` at time `now`.
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn value_at(&self, now: Duration) -> f64 {
        let progress = self.progress(now);
        // Land exactly on the target rather than wherever float math puts it
        if progress >= 1.0 {
            return self.to;
        }
        Scale::linear([0.0, 1.0], [self.from, self.to]).apply(progress)
    }

    pub fn is_complete(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }

    /// Start a new tween from wherever this one is at `now`.
    pub fn retarget(&self, to: f64, now: Duration, duration: Duration) -> Self {
        Self::new(self.value_at(now), to, now, duration)
    }
}
