use super::common::{inset_circle, ClipTarget, Viewport, WidgetShapeAdapter, COMPONENT_VIEWPORT};
use super::WidgetKind;
use crate::wave::{Envelope, FillProfile};

/// Thermometer - The bulb is always full, so the value range only covers the tube above it
pub(crate) struct ThermometerShape {
    pub(crate) id: String,
}

impl ThermometerShape {
    /// The share of the envelope taken up by the bulb.
    const BULB: f64 = 0.375;
}

impl WidgetShapeAdapter for ThermometerShape {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Thermometer
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

    fn fill_profile(&self) -> FillProfile {
        // The wave height follows the level, bulb included
        FillProfile { floor: Self::BULB, ..FillProfile::FULL }
    }
}
