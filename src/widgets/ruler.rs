use super::common::{inset_circle, ClipTarget, Viewport, WidgetShapeAdapter, COMPONENT_VIEWPORT};
use super::WidgetKind;
use crate::wave::Envelope;

/// Ruler - A ruler stood on its end, liquid rising between the notches
pub(crate) struct RulerShape {
    pub(crate) id: String,
}

impl WidgetShapeAdapter for RulerShape {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Ruler
    }

    fn viewport(&self) -> Viewport {
        COMPONENT_VIEWPORT
    }

    fn envelope(&self) -> Envelope {
        inset_circle(COMPONENT_VIEWPORT, 0.05, 0.05)
    }

    fn clip_target(&self) -> ClipTarget {
        ClipTarget::for_widget(&self.id)
    }
}
