use super::common::{inset_circle, ClipTarget, Viewport, WidgetShapeAdapter, COMPONENT_VIEWPORT};
use super::WidgetKind;
use crate::wave::Envelope;

/// Leaf - A wet leaf
pub(crate) struct LeafShape {
    pub(crate) id: String,
}

impl WidgetShapeAdapter for LeafShape {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Leaf
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
