use super::scale::Scale;
use crate::config::WaveConfig;
use serde::Serialize;
use std::f64::consts::TAU;

/// Samples taken along each wavelength of the clip contour.
pub const SAMPLES_PER_WAVE: usize = 40;

/// A point in the widget's design viewport. Y grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// The box the liquid has to fill.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Envelope {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Envelope {
    /// A rectangular envelope anchored at the origin.
    pub fn rect(width: f64, height: f64) -> Self {
        Self { x: 0.0, y: 0.0, width, height }
    }

    /// The square envelope around a circle of the given radius.
    pub fn circle(radius: f64) -> Self {
        Self::rect(radius * 2.0, radius * 2.0)
    }

    /// Move this envelope's top left corner.
    pub fn at(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    /// The extent the wave amplitude is relative to.
    pub fn half_extent(&self) -> f64 {
        self.height / 2.0
    }
}

/// Maps the normalized fill fraction onto the part of the envelope the liquid can reach.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FillProfile {
    pub floor: f64,
    pub ceiling: f64,

    /// The level at which the amplitude profile is exhausted. The amplitude follows
    /// `level / amplitude_span`, so a span of 1 makes it follow the level itself.
    pub amplitude_span: f64,
}

impl FillProfile {
    pub const FULL: Self = Self { floor: 0.0, ceiling: 1.0, amplitude_span: 1.0 };

    pub fn level(&self, fill_fraction: f64) -> f64 {
        Scale::linear([0.0, 1.0], [self.floor, self.ceiling]).apply(fill_fraction)
    }

    /// The position along the amplitude profile for a fill fraction, in `[0, 1]` while the level
    /// is within the span.
    pub fn wave_position(&self, fill_fraction: f64) -> f64 {
        self.level(fill_fraction) / self.amplitude_span
    }
}

impl Default for FillProfile {
    fn default() -> Self {
        Self::FULL
    }
}

/// A snapshot of everything needed to draw the wave.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WaveGeometry {
    /// The value's position within `[min, max]`, in `[0, 1]`.
    pub fill_fraction: f64,

    /// The fill fraction after applying the widget's fill profile.
    pub level: f64,

    /// The wave's amplitude in viewport units.
    pub amplitude: f64,

    /// The length of a single wave.
    pub wavelength: f64,

    /// The sampled wave surface, relative to the wave group.
    pub contour: Vec<Point>,

    /// The y coordinate of the bottom edge of the clip region, relative to the wave group.
    pub clip_bottom: f64,

    /// The wave group's vertical translation.
    pub vertical_offset: f64,

    /// The wave group's horizontal translation. Negative, so the oversized contour starts to the left.
    pub horizontal_group_offset: f64,

    /// The distance the contour scrolls during one cycle.
    pub scroll_extent: f64,

    /// The contour's current horizontal translation within the group, in `[0, scroll_extent]`.
    pub scroll_offset: f64,
}

impl WaveGeometry {
    /// The closed clip region: the contour, then back along the bottom edge.
    pub fn clip_region(&self) -> Vec<Point> {
        let mut region = self.contour.clone();
        if let (Some(first), Some(last)) = (self.contour.first(), self.contour.last()) {
            region.push(Point { x: last.x, y: self.clip_bottom });
            region.push(Point { x: first.x, y: self.clip_bottom });
        }
        region
    }
}

/// Computes wave geometry for one envelope.
///
/// The model is shape agnostic: it only knows the envelope and how the fill fraction maps onto it.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveGeometryModel {
    envelope: Envelope,
    profile: FillProfile,
}

impl WaveGeometryModel {
    pub fn new(envelope: Envelope, profile: FillProfile) -> Self {
        Self { envelope, profile }
    }

    /// The clamped, normalized position of `value` within the configured bounds.
    pub fn fill_fraction(&self, config: &WaveConfig, value: f64) -> f64 {
        let value = config.clamp(value);
        Scale::linear([config.min_value, config.max_value], [0.0, 1.0]).apply(value).clamp(0.0, 1.0)
    }

    /// The wave amplitude at a position along the amplitude profile, see [FillProfile::wave_position].
    pub fn amplitude(&self, config: &WaveConfig, position: f64) -> f64 {
        let peak = config.wave_height_fraction * self.envelope.half_extent();
        let scale = if config.wave_height_scaling {
            Scale::piecewise([0.0, 50.0, 100.0], [0.0, peak, 0.0])
        } else {
            Scale::linear([0.0, 100.0], [peak, peak])
        };
        scale.apply(position * 100.0)
    }

    /// The scale mapping a level onto the wave group's vertical translation.
    ///
    /// An empty level pushes the wave entirely below the envelope and a full one covers it.
    pub fn rise_scale(&self, amplitude: f64) -> Scale {
        let Envelope { y, height, .. } = self.envelope;
        Scale::linear([0.0, 1.0], [y + height + amplitude, y + amplitude])
    }

    /// The scale mapping scroll phase onto the contour's horizontal translation.
    pub fn scroll_scale(&self, config: &WaveConfig) -> Scale {
        Scale::linear([0.0, 1.0], [0.0, self.clip_width(config) - self.envelope.width])
    }

    pub fn wavelength(&self, config: &WaveConfig) -> f64 {
        self.envelope.width / config.wave_count.max(1) as f64
    }

    /// The width of the clip contour: one more wavelength than fits in the envelope.
    pub fn clip_width(&self, config: &WaveConfig) -> f64 {
        self.wavelength(config) * (config.wave_count.max(1) + 1) as f64
    }

    /// Sample the wave surface for the given amplitude.
    pub fn contour(&self, config: &WaveConfig, amplitude: f64) -> Vec<Point> {
        let clip_count = config.wave_count.max(1) as usize + 1;
        let total = SAMPLES_PER_WAVE * clip_count;
        let clip_width = self.clip_width(config);
        let phase = TAU * -config.wave_offset + TAU * (1.0 - config.wave_count as f64);
        (0..=total)
            .map(|i| {
                let x = clip_width * i as f64 / total as f64;
                // Position along the contour, in wavelengths
                let waves = i as f64 / SAMPLES_PER_WAVE as f64;
                let y = amplitude * (phase + waves * TAU).sin();
                Point { x, y }
            })
            .collect()
    }

    /// Compute the settled geometry for `value`.
    pub fn compute(&self, config: &WaveConfig, value: f64) -> WaveGeometry {
        let fill_fraction = self.fill_fraction(config, value);
        let level = self.profile.level(fill_fraction);
        let amplitude = self.amplitude(config, self.profile.wave_position(fill_fraction));
        self.geometry(config, fill_fraction, amplitude, self.rise_scale(amplitude).apply(level), 0.0)
    }

    /// Assemble a geometry snapshot from animated quantities.
    pub(crate) fn geometry(
        &self,
        config: &WaveConfig,
        fill_fraction: f64,
        amplitude: f64,
        vertical_offset: f64,
        scroll_offset: f64,
    ) -> WaveGeometry {
        let clip_width = self.clip_width(config);
        WaveGeometry {
            fill_fraction,
            level: self.profile.level(fill_fraction),
            amplitude,
            wavelength: self.wavelength(config),
            contour: self.contour(config, amplitude),
            clip_bottom: self.envelope.height + amplitude,
            vertical_offset,
            horizontal_group_offset: self.envelope.x + self.envelope.width - clip_width,
            scroll_extent: clip_width - self.envelope.width,
            scroll_offset,
        }
    }

    /// The level a vertical offset corresponds to, for a given amplitude.
    pub fn level_at(&self, amplitude: f64, vertical_offset: f64) -> f64 {
        self.rise_scale(amplitude).invert(vertical_offset).unwrap_or(0.0)
    }
}
