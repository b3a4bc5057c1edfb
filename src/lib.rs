//! Animated liquid fill for gauge widgets.
//!
//! A [WaveEngine] turns a scalar value into the geometry of a scrolling wave clipped to a
//! widget's envelope, and animates it towards new values as they come in.

pub mod config;
pub mod wave;
pub mod widgets;

pub use config::{ConfigError, GaugeFile, WaveConfig};
pub use wave::{Envelope, PollableState, WaveEngine, WaveGeometry};
pub use widgets::{get_adapter, WidgetKind, WidgetShapeAdapter};
