use super::common::{fast_scroll_config, ClipTarget, Viewport, WidgetShapeAdapter};
use super::WidgetKind;
use crate::config::WaveConfig;
use crate::wave::Envelope;

/// Cylinder - A tank drawn inside a translated group, below its lid
pub(crate) struct CylinderShape {
    pub(crate) id: String,
}

impl WidgetShapeAdapter for CylinderShape {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Cylinder
    }

    fn viewport(&self) -> Viewport {
        Viewport { width: 520.0, height: 525.0 }
    }

    fn envelope(&self) -> Envelope {
        // The tank body sits at (81, 75) inside the cylinder group
        Envelope::rect(350.0, 440.0).at(81.0, 75.0)
    }

    fn clip_target(&self) -> ClipTarget {
        ClipTarget::for_widget(&self.id)
    }

    fn default_config(&self) -> WaveConfig {
        WaveConfig { decimal_places: 0, ..fast_scroll_config() }
    }
}
