use super::controller::{RiseState, ScrollState, WaveAnimationController, WaveLevel};
use super::geometry::{Envelope, FillProfile, WaveGeometry, WaveGeometryModel};
use super::task::{CancellationToken, Pollable, PollableState};
use crate::config::{ConfigError, WaveConfig};
use crate::widgets::{ClipTarget, WidgetShapeAdapter};
use log::{debug, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// An animated liquid fill for one gauge.
///
/// The engine recomputes its target geometry synchronously whenever the value or configuration
/// changes, and moves towards it as it's ticked. Dropping the engine stops every task it handed
/// out.
#[derive(Debug)]
pub struct WaveEngine {
    state: Arc<Mutex<EngineState>>,
    token: CancellationToken,
    clip_target: Option<ClipTarget>,
}

#[derive(Debug)]
struct EngineState {
    model: WaveGeometryModel,
    config: WaveConfig,
    /// The clamped target value.
    value: f64,
    fill_fraction: f64,
    controller: WaveAnimationController,
}

impl EngineState {
    /// The rise channel's target for the current value.
    fn target_level(&self) -> WaveLevel {
        let settled = self.model.compute(&self.config, self.value);
        WaveLevel {
            vertical_offset: settled.vertical_offset,
            amplitude: settled.amplitude,
            display_value: self.value,
        }
    }

    fn retarget(&mut self) {
        let target = self.target_level();
        // `wave_rise` only governs the initial rise, later changes always animate
        self.controller.retarget(target, self.config.rise_duration());
    }

    fn display_value(&self) -> f64 {
        match self.config.value_count_up {
            true => self.controller.level().display_value,
            false => self.value,
        }
    }

    fn scroll_cycle(&self) -> Option<Duration> {
        self.config.wave_animate.then(|| self.config.animate_duration())
    }

    fn geometry(&self) -> WaveGeometry {
        let level = self.controller.level();
        let scroll_offset = self.model.scroll_scale(&self.config).apply(self.controller.phase());
        self.model.geometry(&self.config, self.fill_fraction, level.amplitude, level.vertical_offset, scroll_offset)
    }

    fn tick(&mut self, token: &CancellationToken, now: Duration) -> PollableState {
        if token.is_cancelled() {
            return PollableState::Done;
        }
        match self.controller.advance(now) {
            true => PollableState::Modified,
            false => PollableState::Unmodified,
        }
    }
}

impl WaveEngine {
    /// Create an engine filling a plain envelope.
    pub fn create(envelope: Envelope, config: WaveConfig, initial_value: f64) -> Result<Self, ConfigError> {
        Self::build(WaveGeometryModel::new(envelope, FillProfile::FULL), config, initial_value, None)
    }

    /// Create an engine for a widget. The widget's default configuration is used if none is given.
    pub fn for_widget(
        adapter: &dyn WidgetShapeAdapter,
        config: Option<WaveConfig>,
        initial_value: f64,
    ) -> Result<Self, ConfigError> {
        let model = WaveGeometryModel::new(adapter.envelope(), adapter.fill_profile());
        let config = config.unwrap_or_else(|| adapter.default_config());
        Self::build(model, config, initial_value, Some(adapter.clip_target()))
    }

    fn build(
        model: WaveGeometryModel,
        config: WaveConfig,
        initial_value: f64,
        clip_target: Option<ClipTarget>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let value = config.clamp(initial_value);
        let fill_fraction = model.fill_fraction(&config, value);
        let settled = model.compute(&config, value);

        // Rising starts from an empty gauge with the target's amplitude
        let empty = WaveLevel {
            vertical_offset: model.rise_scale(settled.amplitude).apply(0.0),
            amplitude: settled.amplitude,
            display_value: if config.value_count_up { config.min_value } else { value },
        };
        let target = WaveLevel { vertical_offset: settled.vertical_offset, amplitude: settled.amplitude, display_value: value };

        let mut controller = WaveAnimationController::new(empty);
        controller.start(empty, target, config.wave_rise.then(|| config.rise_duration()));
        let mut state = EngineState { model, config, value, fill_fraction, controller };
        let cycle = state.scroll_cycle();
        state.controller.set_scroll(cycle);

        debug!(
            "created wave engine: value {value}, fill {fill_fraction:.3}, rise {:?}, scroll {:?}",
            state.controller.rise_state(),
            state.controller.scroll_state()
        );
        Ok(Self { state: Arc::new(Mutex::new(state)), token: CancellationToken::new(), clip_target })
    }

    fn lock(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Move the gauge to a new value. Values outside the configured bounds are clamped.
    pub fn update(&self, value: f64) {
        if self.is_destroyed() {
            warn!("ignoring update to {value} on a destroyed wave engine");
            return;
        }
        let mut state = self.lock();
        state.value = state.config.clamp(value);
        state.fill_fraction = state.model.fill_fraction(&state.config, state.value);
        state.retarget();
        debug!("wave retargeted to {} (fill {:.3})", state.value, state.fill_fraction);
    }

    /// Replace the configuration wholesale.
    ///
    /// The wave moves to the level the current value has under the new configuration and keeps
    /// scrolling from where it is.
    pub fn reconfigure(&self, config: WaveConfig) -> Result<(), ConfigError> {
        config.validate()?;
        if self.is_destroyed() {
            warn!("ignoring reconfiguration of a destroyed wave engine");
            return Ok(());
        }
        let mut state = self.lock();
        state.value = config.clamp(state.value);
        state.fill_fraction = state.model.fill_fraction(&config, state.value);
        state.config = config;
        state.retarget();
        let cycle = state.scroll_cycle();
        state.controller.set_scroll(cycle);
        debug!("wave engine reconfigured, scroll {:?}", state.controller.scroll_state());
        Ok(())
    }

    /// Stop all animation. Calling this more than once is harmless.
    pub fn destroy(&self) {
        if self.token.cancel() {
            self.lock().controller.stop();
            debug!("wave engine destroyed");
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Advance the animation to `now`, measured from the engine's creation.
    pub fn tick(&self, now: Duration) -> PollableState {
        self.lock().tick(&self.token, now)
    }

    /// A task that drives this engine off the wall clock, once per poll.
    pub fn pollable(&self) -> Box<dyn Pollable> {
        Box::new(WaveAnimationPollable {
            state: self.state.clone(),
            token: self.token.clone(),
            start: None,
        })
    }

    /// A snapshot of the wave as it's currently drawn.
    pub fn current_geometry(&self) -> WaveGeometry {
        self.lock().geometry()
    }

    /// The geometry the wave is moving towards.
    pub fn target_geometry(&self) -> WaveGeometry {
        let state = self.lock();
        state.model.compute(&state.config, state.value)
    }

    /// The value label as currently displayed.
    pub fn display_value(&self) -> String {
        let state = self.lock();
        let places = state.config.decimal_places as usize;
        format!("{:.*}", places, state.display_value())
    }

    /// The level the wave is currently drawn at, after the fill profile.
    pub fn current_level(&self) -> f64 {
        let state = self.lock();
        let level = state.controller.level();
        state.model.level_at(level.amplitude, level.vertical_offset)
    }

    /// The clamped target value.
    pub fn value(&self) -> f64 {
        self.lock().value
    }

    pub fn config(&self) -> WaveConfig {
        self.lock().config.clone()
    }

    pub fn clip_target(&self) -> Option<&ClipTarget> {
        self.clip_target.as_ref()
    }

    pub fn rise_state(&self) -> RiseState {
        self.lock().controller.rise_state()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.lock().controller.scroll_state()
    }

    /// Progress through the current scroll cycle.
    pub fn phase(&self) -> f64 {
        self.lock().controller.phase()
    }
}

impl Drop for WaveEngine {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// The repeating task that keeps a wave moving.
struct WaveAnimationPollable {
    state: Arc<Mutex<EngineState>>,
    token: CancellationToken,
    /// The wall clock instant matching the engine time the task started at.
    start: Option<(Instant, Duration)>,
}

impl Pollable for WaveAnimationPollable {
    fn poll(&mut self) -> PollableState {
        if self.token.is_cancelled() {
            return PollableState::Done;
        }
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        // Initialize start time on first poll, picking up wherever the engine was left
        let (started, base) = *self.start.get_or_insert_with(|| (Instant::now(), state.controller.now()));
        state.tick(&self.token, base + started.elapsed())
    }
}
