use super::common::{fast_scroll_config, ClipTarget, Viewport, WidgetShapeAdapter};
use super::WidgetKind;
use crate::config::WaveConfig;
use crate::wave::Envelope;

/// Gate - A round badge with fences and piles over the water
pub(crate) struct GateShape {
    pub(crate) id: String,
}

impl WidgetShapeAdapter for GateShape {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Gate
    }

    fn viewport(&self) -> Viewport {
        Viewport { width: 508.0, height: 508.0 }
    }

    fn envelope(&self) -> Envelope {
        Envelope::circle(254.0)
    }

    fn clip_target(&self) -> ClipTarget {
        ClipTarget::for_widget(&self.id)
    }

    fn default_config(&self) -> WaveConfig {
        fast_scroll_config()
    }
}
