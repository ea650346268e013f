// ============================================================================
// CPU RASTERIZER
// ============================================================================

use rusttype::{point, Font, PositionedGlyph, Scale};
use tracing::debug;

use crate::config::Color;
use crate::error::{GaugeError, Result};
use crate::geometry::{angle_of, Point};
use crate::scene::{ArcPath, Drawable, Label, Scene};

/// An RGBA8 frame, row-major, four bytes per pixel.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        debug_assert!(frame.len() >= width * height * 4);
        Self {
            frame,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self, color: Color) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        let mut out = [0; 4];
        out.copy_from_slice(&self.frame[idx..idx + 4]);
        Some(out)
    }

    /// Blends `color` over the pixel at `(x, y)` with the given coverage.
    fn blend(&mut self, x: i64, y: i64, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let a = (coverage * color.opacity()).clamp(0.0, 1.0);
        let src = [color.r as f32, color.g as f32, color.b as f32];
        for (channel, src) in self.frame[idx..idx + 3].iter_mut().zip(src) {
            *channel = (src * a + *channel as f32 * (1.0 - a)).round() as u8;
        }
        self.frame[idx + 3] = 0xff;
    }
}

/// Paints scenes into a [`Canvas`]. Labels need a font; without one they are
/// skipped.
#[derive(Default)]
pub struct Rasterizer {
    font: Option<Font<'static>>,
    background: Option<Color>,
}

impl Rasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(mut self, data: Vec<u8>) -> Result<Self> {
        let font = Font::try_from_vec(data).ok_or(GaugeError::FontLoad)?;
        self.font = Some(font);
        Ok(self)
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Renders `scene` with `origin` mapped to the canvas's top-left pixel.
    pub fn render(&self, scene: &Scene, canvas: &mut Canvas, origin: Point) {
        if let Some(background) = self.background {
            canvas.clear(background);
        }
        for drawable in scene.drawables() {
            match drawable {
                Drawable::Arc(arc) => stroke_arc(canvas, arc, origin),
                Drawable::Label(label) => match &self.font {
                    Some(font) => draw_label(canvas, label, font, origin),
                    None => debug!(text = %label.text, "no font loaded, label skipped"),
                },
            }
        }
    }
}

fn stroke_arc(canvas: &mut Canvas, arc: &ArcPath, origin: Point) {
    let Some(center) = arc.center() else {
        return;
    };
    if arc.stroke_width <= 0.0 || arc.stroke.a == 0 {
        return;
    }
    let r = arc.effective_radius();
    let half = arc.stroke_width / 2.0;
    let reach = r + half + 1.0;

    let min_x = ((center.x - reach - origin.x).floor() as i64).max(0);
    let max_x = ((center.x + reach - origin.x).ceil() as i64).min(canvas.width as i64 - 1);
    let min_y = ((center.y - reach - origin.y).floor() as i64).max(0);
    let max_y = ((center.y + reach - origin.y).ceil() as i64).min(canvas.height as i64 - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let sample = Point::new(x as f64 + 0.5 + origin.x, y as f64 + 0.5 + origin.y);
            let dist = sample.distance(center);
            let aa = 1.0 - ((dist - r).abs() - half).clamp(0.0, 1.0);
            if aa <= 0.0 {
                continue;
            }
            if arc.contains_angle(angle_of(center, sample)) {
                canvas.blend(x, y, arc.stroke, aa as f32);
            }
        }
    }
}

fn draw_label(canvas: &mut Canvas, label: &Label, font: &Font, origin: Point) {
    let scale = Scale::uniform(label.font_size as f32);
    let v_metrics = font.v_metrics(scale);
    let glyphs: Vec<PositionedGlyph> = font
        .layout(&label.text, scale, point(0.0, v_metrics.ascent))
        .collect();

    let Some((min_x, max_x, min_y, max_y)) = glyphs
        .iter()
        .filter_map(|g| g.pixel_bounding_box())
        .map(|bb| (bb.min.x, bb.max.x, bb.min.y, bb.max.y))
        .reduce(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3)))
    else {
        return;
    };

    let anchor = label.anchor();
    let offset_x = (anchor.x - origin.x).round() as i64 - ((max_x - min_x) / 2) as i64;
    let offset_y = (anchor.y - origin.y).round() as i64 - ((max_y - min_y) / 2) as i64;
    for glyph in &glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                let px = offset_x + gx as i64 + (bb.min.x - min_x) as i64;
                let py = offset_y + gy as i64 + (bb.min.y - min_y) as i64;
                canvas.blend(px, py, label.color, v);
            });
        }
    }
}
