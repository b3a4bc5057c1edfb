use super::common::{inset_circle, ClipTarget, Viewport, WidgetShapeAdapter};
use super::WidgetKind;
use crate::wave::Envelope;

/// Waterflow - A round pool under a waterfall
pub(crate) struct WaterflowShape {
    pub(crate) id: String,
}

impl WidgetShapeAdapter for WaterflowShape {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Waterflow
    }

    fn viewport(&self) -> Viewport {
        Viewport { width: 315.0, height: 315.0 }
    }

    fn envelope(&self) -> Envelope {
        inset_circle(self.viewport(), 0.03, 0.03)
    }

    fn clip_target(&self) -> ClipTarget {
        ClipTarget::for_widget(&self.id)
    }
}
