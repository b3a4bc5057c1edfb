mod controller;
mod engine;
mod geometry;
mod scale;
pub mod svg;
mod task;
mod tween;

pub use controller::{RiseState, ScrollState, WaveAnimationController, WaveLevel};
pub use engine::WaveEngine;
pub use geometry::{Envelope, FillProfile, Point, WaveGeometry, WaveGeometryModel, SAMPLES_PER_WAVE};
pub use scale::Scale;
pub use task::{CancellationToken, Pollable, PollableState};
pub use tween::Tween;
