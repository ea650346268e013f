// ============================================================================
// RETAINED MODE DRAWABLES
// ============================================================================

use std::fmt::Write as _;

use crate::config::Color;
use crate::geometry::{angle_of, Point, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

/// A single circular arc segment, described the way path APIs take it:
/// endpoints, radius, large-arc flag and sweep direction.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPath {
    pub start: Point,
    pub end: Point,
    pub radius: f64,
    pub large_arc: bool,
    pub sweep: SweepDirection,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl ArcPath {
    /// Radius actually used for drawing. Endpoints further apart than the
    /// diameter scale the radius up until they fit on a half circle.
    pub fn effective_radius(&self) -> f64 {
        let half_chord = self.start.distance(self.end) / 2.0;
        self.radius.abs().max(half_chord)
    }

    /// Center of the circle the arc runs on, or `None` when the endpoints
    /// coincide and the arc is undefined.
    pub fn center(&self) -> Option<Point> {
        let r = self.effective_radius();
        let hx = (self.start.x - self.end.x) / 2.0;
        let hy = (self.start.y - self.end.y) / 2.0;
        let half_chord_sq = hx * hx + hy * hy;
        if half_chord_sq == 0.0 || r == 0.0 {
            return None;
        }

        let clockwise = self.sweep == SweepDirection::Clockwise;
        let sign = if self.large_arc != clockwise { 1.0 } else { -1.0 };
        let coef = sign * ((r * r - half_chord_sq).max(0.0) / half_chord_sq).sqrt();

        Some(Point::new(
            coef * hy + (self.start.x + self.end.x) / 2.0,
            -coef * hx + (self.start.y + self.end.y) / 2.0,
        ))
    }

    /// Clockwise-from-top angle of the start point.
    pub fn start_angle(&self) -> Option<f64> {
        self.center().map(|c| angle_of(c, self.start))
    }

    /// Degrees covered by the arc, walking in its sweep direction.
    pub fn sweep_angle(&self) -> Option<f64> {
        let center = self.center()?;
        let a0 = angle_of(center, self.start);
        let a1 = angle_of(center, self.end);
        Some(match self.sweep {
            SweepDirection::Clockwise => (a1 - a0).rem_euclid(360.0),
            SweepDirection::CounterClockwise => (a0 - a1).rem_euclid(360.0),
        })
    }

    /// Whether a clockwise-from-top `angle` lies on the arc.
    pub fn contains_angle(&self, angle: f64) -> bool {
        let (Some(a0), Some(sweep)) = (self.start_angle(), self.sweep_angle()) else {
            return false;
        };
        let offset = match self.sweep {
            SweepDirection::Clockwise => (angle - a0).rem_euclid(360.0),
            SweepDirection::CounterClockwise => (a0 - angle).rem_euclid(360.0),
        };
        offset <= sweep
    }

    /// SVG path data (`M … A …`) for this arc.
    pub fn svg_path_data(&self) -> String {
        format!(
            "M {} {} A {r} {r} 0 {} {} {} {}",
            self.start.x,
            self.start.y,
            self.large_arc as u8,
            (self.sweep == SweepDirection::Clockwise) as u8,
            self.end.x,
            self.end.y,
            r = self.radius,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

/// Text placed inside a layout box.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub origin: Point,
    pub size: Size,
    pub text: String,
    pub font_size: f64,
    pub color: Color,
    pub h_align: Align,
    pub v_align: Align,
}

impl Label {
    /// Point the text is aligned to within its box.
    pub fn anchor(&self) -> Point {
        let along = |start: f64, extent: f64, align: Align| match align {
            Align::Start => start,
            Align::Center => start + extent / 2.0,
            Align::End => start + extent,
        };
        Point::new(
            along(self.origin.x, self.size.width, self.h_align),
            along(self.origin.y, self.size.height, self.v_align),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Arc(ArcPath),
    Label(Label),
}

/// Drawables in paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    drawables: Vec<Drawable>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, drawable: Drawable) {
        self.drawables.push(drawable);
    }

    pub fn clear(&mut self) {
        self.drawables.clear();
    }

    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    pub fn arcs(&self) -> impl Iterator<Item = &ArcPath> {
        self.drawables.iter().filter_map(|d| match d {
            Drawable::Arc(arc) => Some(arc),
            Drawable::Label(_) => None,
        })
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.drawables.iter().filter_map(|d| match d {
            Drawable::Label(label) => Some(label),
            Drawable::Arc(_) => None,
        })
    }

    /// Standalone SVG document of the scene, with `view_origin` as the top-left
    /// corner of a `view_size` view box.
    pub fn to_svg(&self, view_origin: Point, view_size: Size) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="{} {} {w} {h}">"#,
            view_origin.x,
            view_origin.y,
            w = view_size.width,
            h = view_size.height,
        );
        for drawable in &self.drawables {
            match drawable {
                Drawable::Arc(arc) => {
                    let _ = writeln!(
                        svg,
                        r#"  <path d="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
                        arc.svg_path_data(),
                        arc.stroke.to_hex(),
                        arc.stroke.opacity(),
                        arc.stroke_width,
                    );
                }
                Drawable::Label(label) => {
                    let anchor = label.anchor();
                    let text_anchor = match label.h_align {
                        Align::Start => "start",
                        Align::Center => "middle",
                        Align::End => "end",
                    };
                    let baseline = match label.v_align {
                        Align::Start => "hanging",
                        Align::Center => "central",
                        Align::End => "alphabetic",
                    };
                    let _ = writeln!(
                        svg,
                        r#"  <text x="{}" y="{}" font-size="{}" fill="{}" fill-opacity="{}" text-anchor="{text_anchor}" dominant-baseline="{baseline}">{}</text>"#,
                        anchor.x,
                        anchor.y,
                        label.font_size,
                        label.color.to_hex(),
                        label.color.opacity(),
                        escape_xml(&label.text),
                    );
                }
            }
        }
        svg.push_str("</svg>\n");
        svg
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(end: Point, large_arc: bool, sweep: SweepDirection) -> ArcPath {
        ArcPath {
            start: Point::new(50.0, 0.0),
            end,
            radius: 50.0,
            large_arc,
            sweep,
            stroke: Color::BLACK,
            stroke_width: 2.0,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn quarter_arc_resolves_gauge_center() {
        let quarter = arc(Point::new(100.0, 50.0), false, SweepDirection::Clockwise);
        let center = quarter.center().unwrap();
        assert!(close(center.x, 50.0) && close(center.y, 50.0));
        assert!(close(quarter.sweep_angle().unwrap(), 90.0));
        assert!(quarter.contains_angle(45.0));
        assert!(!quarter.contains_angle(180.0));
    }

    #[test]
    fn large_flag_picks_other_center() {
        let long_way = arc(Point::new(100.0, 50.0), true, SweepDirection::Clockwise);
        let center = long_way.center().unwrap();
        assert!(close(center.x, 100.0) && close(center.y, 0.0));
        assert!(close(long_way.sweep_angle().unwrap(), 270.0));
    }

    #[test]
    fn counter_clockwise_sweep_walks_backwards() {
        let ccw = arc(Point::new(0.0, 50.0), false, SweepDirection::CounterClockwise);
        assert!(close(ccw.sweep_angle().unwrap(), 90.0));
        assert!(ccw.contains_angle(315.0));
        assert!(!ccw.contains_angle(45.0));
    }

    #[test]
    fn coincident_endpoints_have_no_center() {
        let empty = arc(Point::new(50.0, 0.0), false, SweepDirection::Clockwise);
        assert_eq!(empty.center(), None);
        assert!(!empty.contains_angle(0.0));
    }

    #[test]
    fn svg_escapes_label_text() {
        let mut scene = Scene::new();
        scene.add(Drawable::Label(Label {
            origin: Point::default(),
            size: Size::new(10.0, 10.0),
            text: "<50 & up>".to_string(),
            font_size: 5.0,
            color: Color::BLACK,
            h_align: Align::Center,
            v_align: Align::Center,
        }));
        let svg = scene.to_svg(Point::default(), Size::new(10.0, 10.0));
        assert!(svg.contains("&lt;50 &amp; up&gt;"));
        assert!(svg.contains(r#"x="5" y="5""#));
    }
}
