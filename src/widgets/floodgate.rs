use super::common::{fast_scroll_config, ClipTarget, Viewport, WidgetShapeAdapter};
use super::WidgetKind;
use crate::config::WaveConfig;
use crate::wave::{Envelope, FillProfile};

/// Floodgate - A dam whose reservoir fills up to the gate
pub(crate) struct FloodgateShape {
    pub(crate) id: String,
}

impl WidgetShapeAdapter for FloodgateShape {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Floodgate
    }

    fn viewport(&self) -> Viewport {
        Viewport { width: 158.0, height: 132.0 }
    }

    fn envelope(&self) -> Envelope {
        Envelope::rect(158.0, 132.0)
    }

    fn clip_target(&self) -> ClipTarget {
        ClipTarget::for_widget(&self.id)
    }

    fn fill_profile(&self) -> FillProfile {
        // Only the part below the gate ever holds water
        FillProfile { floor: 0.0, ceiling: 0.6, amplitude_span: 0.6 }
    }

    fn default_config(&self) -> WaveConfig {
        WaveConfig { wave_height_fraction: 0.02, ..fast_scroll_config() }
    }
}
