//! Builds the three children of a gauge: the track, the value arc and the label.

use crate::config::{GaugeConfig, LabelFormat};
use crate::geometry::{is_large_arc, GeometryState, Point, Size};
use crate::scene::{Align, ArcPath, Drawable, Label, Scene, SweepDirection};
use crate::GaugeValue;

/// Near-full ring in the track color, drawn under everything else.
pub fn background_arc(config: &GaugeConfig, geometry: &GeometryState) -> ArcPath {
    ArcPath {
        start: geometry.start,
        end: geometry.track_end(),
        radius: config.radius,
        large_arc: true,
        sweep: SweepDirection::Clockwise,
        stroke: config.track_color,
        stroke_width: config.thickness,
    }
}

/// Filled portion of the ring, from the top round to the value's end point.
pub fn foreground_arc(config: &GaugeConfig, geometry: &GeometryState, angle: f64) -> ArcPath {
    ArcPath {
        start: geometry.start,
        end: geometry.end,
        radius: config.radius,
        large_arc: is_large_arc(angle),
        sweep: SweepDirection::Clockwise,
        stroke: config.fill,
        stroke_width: config.thickness,
    }
}

pub fn label(config: &GaugeConfig, value: &GaugeValue) -> Label {
    let text = match config.label_format {
        LabelFormat::Percent => format!("{}%", format_number(value.percent, config.label_decimals)),
        LabelFormat::Degrees => format!("{}°", format_number(value.angle, config.label_decimals)),
    };
    Label {
        origin: Point::default(),
        size: Size::new(config.radius * 2.0, config.radius * 2.0),
        text,
        font_size: config.radius / 2.0,
        color: config.fill,
        h_align: Align::Center,
        v_align: Align::Center,
    }
}

/// Rebuilds `scene` from scratch: background, foreground, label.
pub fn rebuild(scene: &mut Scene, config: &GaugeConfig, value: &GaugeValue, geometry: &GeometryState) {
    scene.clear();
    scene.add(Drawable::Arc(background_arc(config, geometry)));
    scene.add(Drawable::Arc(foreground_arc(config, geometry, value.angle)));
    scene.add(Drawable::Label(label(config, value)));
}

fn format_number(value: f64, decimals: Option<usize>) -> String {
    match decimals {
        Some(decimals) => format!("{value:.decimals$}"),
        None => format!("{value}"),
    }
}
