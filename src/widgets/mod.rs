mod common;

// Individual widget modules
mod cylinder;
mod drop;
mod floodgate;
mod flow;
mod gate;
mod leaf;
mod reservoir;
mod ruler;
mod thermometer;
mod waterflow;

pub use common::{ClipTarget, Viewport, WidgetShapeAdapter};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The widget variants a gauge can be drawn as.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "json-schema", derive(schemars::JsonSchema))]
pub enum WidgetKind {
    Drop,
    Ruler,
    Thermometer,
    Leaf,
    Cylinder,
    Floodgate,
    Gate,
    Flow,
    Reservoir,
    Waterflow,
}

/// Get the shape adapter for a given widget kind.
///
/// `id` identifies the widget instance; it's used to name the clip target so several gauges can
/// live in the same document.
pub fn get_adapter(kind: WidgetKind, id: &str) -> Box<dyn WidgetShapeAdapter> {
    let id = id.to_string();
    match kind {
        WidgetKind::Drop => Box::new(drop::DropShape { id }),
        WidgetKind::Ruler => Box::new(ruler::RulerShape { id }),
        WidgetKind::Thermometer => Box::new(thermometer::ThermometerShape { id }),
        WidgetKind::Leaf => Box::new(leaf::LeafShape { id }),
        WidgetKind::Cylinder => Box::new(cylinder::CylinderShape { id }),
        WidgetKind::Floodgate => Box::new(floodgate::FloodgateShape { id }),
        WidgetKind::Gate => Box::new(gate::GateShape { id }),
        WidgetKind::Flow => Box::new(flow::FlowShape { id }),
        WidgetKind::Reservoir => Box::new(reservoir::ReservoirShape { id }),
        WidgetKind::Waterflow => Box::new(waterflow::WaterflowShape { id }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::{FillProfile, WaveGeometryModel};
    use rstest::rstest;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn every_kind_has_a_matching_adapter() {
        for kind in WidgetKind::iter() {
            let adapter = get_adapter(kind, "w");
            assert_eq!(adapter.kind(), kind);
            assert_eq!(adapter.clip_target().id, "clipWavew");
            adapter.default_config().validate().expect("invalid default config");
        }
    }

    #[test]
    fn envelopes_fit_in_viewports() {
        for kind in WidgetKind::iter() {
            let adapter = get_adapter(kind, "w");
            let envelope = adapter.envelope();
            let viewport = adapter.viewport();
            assert!(envelope.x >= 0.0 && envelope.y >= 0.0, "{kind} envelope starts outside");
            assert!(envelope.x + envelope.width <= viewport.width + 1e-9, "{kind} envelope too wide");
            assert!(envelope.y + envelope.height <= viewport.height + 1e-9, "{kind} envelope too tall");
        }
    }

    #[rstest]
    #[case("drop", WidgetKind::Drop)]
    #[case("thermometer", WidgetKind::Thermometer)]
    #[case("waterflow", WidgetKind::Waterflow)]
    fn parse_kind(#[case] input: &str, #[case] expected: WidgetKind) {
        assert_eq!(WidgetKind::from_str(input).expect("parse failed"), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[test]
    fn thermometer_profile() {
        let adapter = get_adapter(WidgetKind::Thermometer, "t");
        let config = adapter.default_config();
        let model = WaveGeometryModel::new(adapter.envelope(), adapter.fill_profile());
        let empty = model.compute(&config, config.min_value);
        let full = model.compute(&config, config.max_value);
        assert_eq!(empty.fill_fraction, 0.0);
        assert!((empty.level - 0.375).abs() < 1e-9);
        assert_eq!(full.fill_fraction, 1.0);
        assert!((full.level - 1.0).abs() < 1e-9);

        // An empty thermometer still shows the wave of a 37.5% full gauge
        let peak = config.wave_height_fraction * adapter.envelope().half_extent();
        assert!((empty.amplitude - 0.75 * peak).abs() < 1e-9);
        assert_eq!(full.amplitude, 0.0);
    }

    #[test]
    fn flow_fills_whole_canvas() {
        let adapter = get_adapter(WidgetKind::Flow, "f");
        let config = adapter.default_config();
        let model = WaveGeometryModel::new(adapter.envelope(), adapter.fill_profile());
        let full = model.compute(&config, config.max_value);
        assert!((full.level - 1.0).abs() < 1e-9);
        assert!(full.vertical_offset.abs() < 1e-9);

        // The wave peaks at 30% and is gone from 60% up
        let peak = config.wave_height_fraction * adapter.envelope().half_extent();
        let value = |fraction: f64| config.min_value + fraction * (config.max_value - config.min_value);
        assert!((model.compute(&config, value(0.3)).amplitude - peak).abs() < 1e-9);
        assert_eq!(model.compute(&config, value(0.6)).amplitude, 0.0);
    }

    #[rstest]
    #[case(WidgetKind::Floodgate, 0.6, 0.6)]
    #[case(WidgetKind::Flow, 1.0, 0.6)]
    #[case(WidgetKind::Cylinder, 1.0, 1.0)]
    fn profile_ceilings(#[case] kind: WidgetKind, #[case] ceiling: f64, #[case] amplitude_span: f64) {
        let profile = get_adapter(kind, "w").fill_profile();
        assert_eq!(profile, FillProfile { floor: 0.0, ceiling, amplitude_span });
    }

    #[test]
    fn defaults_are_not_shared() {
        let adapter = get_adapter(WidgetKind::Gate, "g");
        let mut first = adapter.default_config();
        first.wave_count = 7;
        assert_eq!(adapter.default_config().wave_count, 1);
        assert_eq!(adapter.default_config().wave_animate_time_ms, 5000);
    }
}
