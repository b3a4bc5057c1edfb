use super::common::{fast_scroll_config, ClipTarget, Viewport, WidgetShapeAdapter};
use super::WidgetKind;
use crate::config::WaveConfig;
use crate::wave::{Envelope, FillProfile};

/// Flow - Water running past a dam, filling the whole canvas
pub(crate) struct FlowShape {
    pub(crate) id: String,
}

impl WidgetShapeAdapter for FlowShape {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Flow
    }

    fn viewport(&self) -> Viewport {
        Viewport { width: 375.0, height: 315.0 }
    }

    fn envelope(&self) -> Envelope {
        Envelope::rect(375.0, 315.0)
    }

    fn clip_target(&self) -> ClipTarget {
        ClipTarget::for_widget(&self.id)
    }

    fn fill_profile(&self) -> FillProfile {
        // The liquid covers the whole canvas but the wave flattens out at the dam's height
        FillProfile { amplitude_span: 0.6, ..FillProfile::FULL }
    }

    fn default_config(&self) -> WaveConfig {
        fast_scroll_config()
    }
}
