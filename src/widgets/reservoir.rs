use super::common::{ClipTarget, Viewport, WidgetShapeAdapter};
use super::WidgetKind;
use crate::wave::Envelope;

/// Reservoir - A plain framed basin
pub(crate) struct ReservoirShape {
    pub(crate) id: String,
}

impl ReservoirShape {
    const MARGIN: f64 = 5.0;
}

impl WidgetShapeAdapter for ReservoirShape {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Reservoir
    }

    fn viewport(&self) -> Viewport {
        Viewport { width: 400.0, height: 200.0 }
    }

    fn envelope(&self) -> Envelope {
        let Viewport { width, height } = self.viewport();
        Envelope::rect(width - Self::MARGIN * 2.0, height - Self::MARGIN * 2.0).at(Self::MARGIN, Self::MARGIN)
    }

    fn clip_target(&self) -> ClipTarget {
        ClipTarget::for_widget(&self.id)
    }
}
