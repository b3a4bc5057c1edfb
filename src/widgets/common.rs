use super::WidgetKind;
use crate::config::WaveConfig;
use crate::wave::{Envelope, FillProfile};
use serde::Serialize;

/// The size of a widget's design viewport. Everything is drawn in these units and scaled to the
/// container afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// The viewport shared by the drop, ruler, thermometer and leaf widgets.
pub(crate) const COMPONENT_VIEWPORT: Viewport = Viewport { width: 375.0, height: 315.0 };

/// Where a widget wants its wave mask installed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClipTarget {
    pub id: String,
}

impl ClipTarget {
    pub fn for_widget(widget_id: &str) -> Self {
        Self { id: format!("clipWave{widget_id}") }
    }
}

/// The part of a widget the wave engine talks to.
///
/// The engine never looks at a widget's artwork: it only needs the box to fill and a place to
/// attach the mask.
pub trait WidgetShapeAdapter {
    fn kind(&self) -> WidgetKind;

    fn viewport(&self) -> Viewport;

    /// The box the liquid fills, in viewport units.
    fn envelope(&self) -> Envelope;

    fn clip_target(&self) -> ClipTarget;

    /// How much of the envelope the value range covers.
    fn fill_profile(&self) -> FillProfile {
        FillProfile::FULL
    }

    /// A fresh default configuration for this widget.
    fn default_config(&self) -> WaveConfig {
        WaveConfig::default()
    }
}

/// The envelope of a circular liquid area inscribed in a viewport, inset by the outline's
/// thickness and the gap between the outline and the liquid, both relative to the radius.
pub(crate) fn inset_circle(viewport: Viewport, thickness: f64, gap: f64) -> Envelope {
    let radius = viewport.width.min(viewport.height) / 2.0;
    let margin = (thickness + gap) * radius;
    Envelope::circle(radius - margin).at(margin, margin)
}

/// The defaults shared by the widgets whose wave scrolls once every five seconds and whose value
/// counts up while the wave rises.
pub(crate) fn fast_scroll_config() -> WaveConfig {
    WaveConfig { wave_animate_time_ms: 5000, value_count_up: true, ..Default::default() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_circle_envelope() {
        let envelope = inset_circle(Viewport { width: 375.0, height: 315.0 }, 0.05, 0.05);
        assert!((envelope.x - 15.75).abs() < 1e-9);
        assert!((envelope.y - 15.75).abs() < 1e-9);
        assert!((envelope.width - 283.5).abs() < 1e-9);
        assert_eq!(envelope.width, envelope.height);
    }

    #[test]
    fn clip_target_id() {
        assert_eq!(ClipTarget::for_widget("gauge1").id, "clipWavegauge1");
    }
}
