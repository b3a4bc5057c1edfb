use super::geometry::{Envelope, Point, WaveGeometry};
use crate::widgets::{ClipTarget, Viewport};
use itertools::Itertools;

/// The SVG path data for the closed clip region.
pub fn clip_path_data(geometry: &WaveGeometry) -> String {
    let region = geometry.clip_region();
    if region.is_empty() {
        return String::new();
    }
    let points = region.iter().map(|Point { x, y }| format!("{},{}", number(*x), number(*y))).join("L");
    format!("M{points}Z")
}

/// Render the `<clipPath>` element a widget masks its liquid with.
///
/// The whole mask is moved by the wave group's offsets, the path inside it by the scroll offset.
pub fn render_clip_path(target: &ClipTarget, geometry: &WaveGeometry) -> String {
    format!(
        r#"<clipPath id="{}" transform="translate({},{})"><path transform="translate({},0)" d="{}"/></clipPath>"#,
        target.id,
        number(geometry.horizontal_group_offset),
        number(geometry.vertical_offset),
        number(geometry.scroll_offset),
        clip_path_data(geometry),
    )
}

/// Render a standalone document showing the envelope filled up to the wave.
pub fn render_document(viewport: Viewport, envelope: &Envelope, target: &ClipTarget, geometry: &WaveGeometry) -> String {
    let rect = format!(
        r#"x="{}" y="{}" width="{}" height="{}""#,
        number(envelope.x),
        number(envelope.y),
        number(envelope.width),
        number(envelope.height)
    );
    [
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
            number(viewport.width),
            number(viewport.height)
        ),
        format!("<defs>{}</defs>", render_clip_path(target, geometry)),
        format!(r#"<rect {rect} fill="none" stroke="currentColor"/>"#),
        format!(r#"<rect {rect} fill="currentColor" clip-path="url(#{})"/>"#, target.id),
        "</svg>\n".to_string(),
    ]
    .join("\n")
}

/// Format a coordinate with at most 3 decimals and no trailing zeros.
fn number(value: f64) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}
