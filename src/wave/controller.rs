use super::tween::Tween;
use log::trace;
use serde::Serialize;
use std::time::Duration;

/// Where the rise channel is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RiseState {
    /// Nothing has been started yet.
    Pending,

    /// The wave is moving towards its target level.
    Rising,

    /// The wave is at its target level.
    Settled,
}

/// Where the scroll channel is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ScrollState {
    Idle,
    Scrolling,
}

/// The vertical state of the wave the rise channel animates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveLevel {
    pub vertical_offset: f64,
    pub amplitude: f64,
    pub display_value: f64,
}

#[derive(Debug)]
struct RiseChannel {
    state: RiseState,
    vertical_offset: Tween,
    amplitude: Tween,
    display_value: Tween,
}

impl RiseChannel {
    fn level_at(&self, now: Duration) -> WaveLevel {
        WaveLevel {
            vertical_offset: self.vertical_offset.value_at(now),
            amplitude: self.amplitude.value_at(now),
            display_value: self.display_value.value_at(now),
        }
    }

    fn tween_to(&mut self, from: WaveLevel, to: WaveLevel, now: Duration, duration: Duration) {
        self.vertical_offset = Tween::new(from.vertical_offset, to.vertical_offset, now, duration);
        self.amplitude = Tween::new(from.amplitude, to.amplitude, now, duration);
        self.display_value = Tween::new(from.display_value, to.display_value, now, duration);
        self.state = Self::state_for(duration);
    }

    fn retarget(&mut self, to: WaveLevel, now: Duration, duration: Duration) {
        self.vertical_offset = self.vertical_offset.retarget(to.vertical_offset, now, duration);
        self.amplitude = self.amplitude.retarget(to.amplitude, now, duration);
        self.display_value = self.display_value.retarget(to.display_value, now, duration);
        self.state = Self::state_for(duration);
    }

    fn state_for(duration: Duration) -> RiseState {
        if duration.is_zero() { RiseState::Settled } else { RiseState::Rising }
    }
}

#[derive(Debug)]
struct ScrollChannel {
    state: ScrollState,
    /// The phase the current cycle started at.
    start_phase: f64,
    cycle_start: Duration,
    /// How long the current, possibly partial, cycle lasts.
    cycle_duration: Duration,
    /// How long a full cycle lasts.
    full_cycle: Duration,
    phase: f64,
}

/// Drives the rise and scroll channels of a single wave.
///
/// Both channels are timed against the same clock but are otherwise independent: retargeting the
/// rise channel never restarts the scroll cycle.
#[derive(Debug)]
pub struct WaveAnimationController {
    rise: RiseChannel,
    scroll: ScrollChannel,
    now: Duration,
}

impl WaveAnimationController {
    pub fn new(initial: WaveLevel) -> Self {
        let settled = |value| Tween::settled(value, Duration::ZERO);
        Self {
            rise: RiseChannel {
                state: RiseState::Pending,
                vertical_offset: settled(initial.vertical_offset),
                amplitude: settled(initial.amplitude),
                display_value: settled(initial.display_value),
            },
            scroll: ScrollChannel {
                state: ScrollState::Idle,
                start_phase: 0.0,
                cycle_start: Duration::ZERO,
                cycle_duration: Duration::ZERO,
                full_cycle: Duration::ZERO,
                phase: 0.0,
            },
            now: Duration::ZERO,
        }
    }

    /// Leave the pending state: either animate from `from` to `to` or jump straight to `to`.
    pub fn start(&mut self, from: WaveLevel, to: WaveLevel, rise_duration: Option<Duration>) {
        let now = self.now;
        match rise_duration {
            Some(duration) => self.rise.tween_to(from, to, now, duration),
            None => self.rise.tween_to(to, to, now, Duration::ZERO),
        }
    }

    /// Move the rise channel towards a new target, starting from wherever it is right now.
    pub fn retarget(&mut self, to: WaveLevel, duration: Duration) {
        self.rise.retarget(to, self.now, duration);
    }

    /// Start, restart or stop scrolling.
    ///
    /// A running cycle is not restarted: it continues from its current phase and completes after
    /// `cycle * (1 - phase)`.
    pub fn set_scroll(&mut self, cycle: Option<Duration>) {
        match cycle.filter(|cycle| !cycle.is_zero()) {
            Some(cycle) => {
                let phase = match self.scroll.state {
                    ScrollState::Scrolling => self.scroll.phase,
                    ScrollState::Idle => 0.0,
                };
                self.begin_cycle(phase, cycle, self.now);
            }
            None => self.stop_scroll(),
        }
    }

    /// Stop both channels where they are.
    pub fn stop(&mut self) {
        let level = self.rise.level_at(self.now);
        self.rise.tween_to(level, level, self.now, Duration::ZERO);
        self.scroll.state = ScrollState::Idle;
    }

    /// Advance both channels to `now`. Returns whether anything moved.
    ///
    /// Time never goes backwards: an earlier `now` than the last one is treated as the last one.
    pub fn advance(&mut self, now: Duration) -> bool {
        self.now = self.now.max(now);
        let rose = self.advance_rise();
        let scrolled = self.advance_scroll();
        rose || scrolled
    }

    fn advance_rise(&mut self) -> bool {
        if self.rise.state != RiseState::Rising {
            return false;
        }
        if self.rise.vertical_offset.is_complete(self.now) {
            self.rise.state = RiseState::Settled;
        }
        true
    }

    fn advance_scroll(&mut self) -> bool {
        if self.scroll.state != ScrollState::Scrolling {
            return false;
        }
        let elapsed = self.now.saturating_sub(self.scroll.cycle_start);
        if elapsed < self.scroll.cycle_duration {
            let progress = elapsed.as_secs_f64() / self.scroll.cycle_duration.as_secs_f64();
            self.scroll.phase = self.scroll.start_phase + (1.0 - self.scroll.start_phase) * progress;
            return true;
        }

        // The cycle ended: snap back to phase 0 and keep going with full cycles. Any number of
        // cycles may have gone by since the last tick so skip them in one go.
        let full = self.scroll.full_cycle.as_nanos();
        let overshoot = (elapsed - self.scroll.cycle_duration).as_nanos();
        let cycles = overshoot / full;
        let into_cycle = Duration::from_nanos((overshoot % full) as u64);
        trace!("scroll cycle completed, restarting ({cycles} extra cycles skipped)");
        self.begin_cycle(0.0, self.scroll.full_cycle, self.now.saturating_sub(into_cycle));
        self.scroll.phase = into_cycle.as_secs_f64() / self.scroll.full_cycle.as_secs_f64();
        true
    }

    fn begin_cycle(&mut self, phase: f64, full_cycle: Duration, at: Duration) {
        self.scroll = ScrollChannel {
            state: ScrollState::Scrolling,
            start_phase: phase,
            cycle_start: at,
            cycle_duration: full_cycle.mul_f64(1.0 - phase),
            full_cycle,
            phase,
        };
    }

    fn stop_scroll(&mut self) {
        self.scroll.state = ScrollState::Idle;
        self.scroll.phase = 0.0;
    }

    /// The rise channel's current vertical state.
    pub fn level(&self) -> WaveLevel {
        self.rise.level_at(self.now)
    }

    /// Progress through the current scroll cycle, in `[0, 1)`.
    pub fn phase(&self) -> f64 {
        self.scroll.phase
    }

    pub fn rise_state(&self) -> RiseState {
        self.rise.state
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll.state
    }

    /// The time the channels were last advanced to.
    pub fn now(&self) -> Duration {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn level(vertical_offset: f64) -> WaveLevel {
        WaveLevel { vertical_offset, amplitude: 5.0, display_value: 0.0 }
    }

    #[test]
    fn starts_pending() {
        let controller = WaveAnimationController::new(level(100.0));
        assert_eq!(controller.rise_state(), RiseState::Pending);
        assert_eq!(controller.scroll_state(), ScrollState::Idle);
    }

    #[test]
    fn rise_is_monotonic_and_exact() {
        let mut controller = WaveAnimationController::new(level(105.0));
        controller.start(level(105.0), level(55.0), Some(ms(1000)));
        assert_eq!(controller.rise_state(), RiseState::Rising);

        let mut previous = controller.level().vertical_offset;
        for t in (0..=1100).step_by(50) {
            controller.advance(ms(t));
            let current = controller.level().vertical_offset;
            assert!(current <= previous, "wave moved down at {t}ms");
            previous = current;
        }
        assert_eq!(controller.rise_state(), RiseState::Settled);
        assert_eq!(controller.level().vertical_offset, 55.0);
    }

    #[test]
    fn start_without_rise_settles_immediately() {
        let mut controller = WaveAnimationController::new(level(105.0));
        controller.start(level(105.0), level(55.0), None);
        assert_eq!(controller.rise_state(), RiseState::Settled);
        assert_eq!(controller.level().vertical_offset, 55.0);
        assert!(!controller.advance(ms(10)));
    }

    #[test]
    fn retarget_continues_from_interpolated_position() {
        let mut controller = WaveAnimationController::new(level(100.0));
        controller.start(level(100.0), level(0.0), Some(ms(1000)));
        controller.advance(ms(500));
        controller.retarget(level(100.0), ms(1000));
        assert_eq!(controller.rise_state(), RiseState::Rising);
        assert!((controller.level().vertical_offset - 50.0).abs() < 1e-9);

        controller.advance(ms(1000));
        assert!((controller.level().vertical_offset - 75.0).abs() < 1e-9);
        controller.advance(ms(1500));
        assert_eq!(controller.level().vertical_offset, 100.0);
        assert_eq!(controller.rise_state(), RiseState::Settled);
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(1000, 0.25)]
    #[case(2000, 0.5)]
    #[case(3999, 0.99975)]
    #[case(4000, 0.0)]
    #[case(5000, 0.25)]
    #[case(41000, 0.25)]
    fn scroll_cycles_forever(#[case] at: u64, #[case] expected: f64) {
        let mut controller = WaveAnimationController::new(level(0.0));
        controller.set_scroll(Some(ms(4000)));
        assert!(controller.advance(ms(at)));
        assert!((controller.phase() - expected).abs() < 1e-9, "phase {} at {at}ms", controller.phase());
        assert_eq!(controller.scroll_state(), ScrollState::Scrolling);
    }

    #[test]
    fn scroll_change_uses_remaining_time() {
        let mut controller = WaveAnimationController::new(level(0.0));
        controller.set_scroll(Some(ms(4000)));
        controller.advance(ms(1000));
        assert!((controller.phase() - 0.25).abs() < 1e-9);

        // Twice as fast: the remaining 75% now takes 1500ms
        controller.set_scroll(Some(ms(2000)));
        controller.advance(ms(1750));
        assert!((controller.phase() - 0.625).abs() < 1e-9);
        controller.advance(ms(2500));
        assert!(controller.phase().abs() < 1e-9);
        controller.advance(ms(3000));
        assert!((controller.phase() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn scroll_independent_of_rise() {
        let mut controller = WaveAnimationController::new(level(100.0));
        controller.set_scroll(Some(ms(4000)));
        controller.start(level(100.0), level(0.0), Some(ms(1000)));
        controller.advance(ms(1000));
        controller.retarget(level(50.0), ms(1000));
        controller.advance(ms(2000));
        assert!((controller.phase() - 0.5).abs() < 1e-9);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(Duration::ZERO))]
    fn scroll_disabled(#[case] cycle: Option<Duration>) {
        let mut controller = WaveAnimationController::new(level(0.0));
        controller.set_scroll(Some(ms(1000)));
        controller.advance(ms(300));
        controller.set_scroll(cycle);
        assert_eq!(controller.scroll_state(), ScrollState::Idle);
        assert_eq!(controller.phase(), 0.0);
        assert!(!controller.advance(ms(600)));
    }

    #[test]
    fn stop_freezes_everything() {
        let mut controller = WaveAnimationController::new(level(100.0));
        controller.set_scroll(Some(ms(1000)));
        controller.start(level(100.0), level(0.0), Some(ms(1000)));
        controller.advance(ms(250));
        controller.stop();
        assert!(!controller.advance(ms(800)));
        assert!((controller.level().vertical_offset - 75.0).abs() < 1e-9);
        assert_eq!(controller.scroll_state(), ScrollState::Idle);
    }

    #[test]
    fn time_does_not_go_backwards() {
        let mut controller = WaveAnimationController::new(level(0.0));
        controller.set_scroll(Some(ms(1000)));
        controller.advance(ms(500));
        controller.advance(ms(100));
        assert_eq!(controller.now(), ms(500));
        assert!((controller.phase() - 0.5).abs() < 1e-9);
    }
}
