// ============================================================================
// GAUGE WIDGET
// ============================================================================

use std::sync::mpsc::Receiver;

use tracing::{debug, trace};

use crate::config::{validate_radius, validate_thickness, Color, GaugeConfig};
use crate::drawables;
use crate::error::{GaugeError, Result};
use crate::geometry::{percent_to_angle, GeometryState, Point, Size, MAX_SWEEP_ANGLE};
use crate::scene::{Drawable, Scene};

/// Command enum for driving a gauge from another thread
#[derive(Debug, Clone, PartialEq)]
pub enum GaugeCommand {
    SetRadius(f64),
    SetThickness(f64),
    SetFill(Color),
    SetPercent(f64),
    SetAngle(f64),
    /// Same as `SetPercent`; the name data-binding layers use for the value.
    SetValue(f64),
}

/// The value shown by a gauge. `angle` follows `percent` unless set directly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GaugeValue {
    pub percent: f64,
    pub angle: f64,
}

/// Circular percentage gauge.
///
/// Every property write recomputes the derived geometry and rebuilds all
/// children from scratch. Writing `angle` directly leaves `percent` alone, so
/// the label keeps showing the last percent.
#[derive(Debug, Clone)]
pub struct Gauge {
    config: GaugeConfig,
    value: GaugeValue,
    size: Size,
    geometry: GeometryState,
    scene: Scene,
    generation: u64,
}

impl Gauge {
    pub fn new(config: GaugeConfig) -> Result<Self> {
        config.validate()?;
        let mut gauge = Self {
            config,
            value: GaugeValue::default(),
            size: Size::default(),
            geometry: GeometryState::default(),
            scene: Scene::new(),
            generation: 0,
        };
        gauge.update_size();
        gauge.redraw();
        Ok(gauge)
    }

    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    pub fn value(&self) -> GaugeValue {
        self.value
    }

    pub fn radius(&self) -> f64 {
        self.config.radius
    }

    pub fn thickness(&self) -> f64 {
        self.config.thickness
    }

    pub fn fill(&self) -> Color {
        self.config.fill
    }

    pub fn percent(&self) -> f64 {
        self.value.percent
    }

    pub fn angle(&self) -> f64 {
        self.value.angle
    }

    /// Outer size of the control, `radius * 2 + thickness` on both axes.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn geometry(&self) -> &GeometryState {
        &self.geometry
    }

    /// Background arc, foreground arc and label, in paint order.
    pub fn children(&self) -> &[Drawable] {
        self.scene.drawables()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Number of full rebuilds so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Top-left corner of a view box that fits the whole stroke. The ring is
    /// laid out around `(radius, radius)`, so half a stroke spills past zero.
    pub fn view_origin(&self) -> Point {
        let half = self.config.thickness / 2.0;
        Point::new(-half, -half)
    }

    pub fn to_svg(&self) -> String {
        self.scene.to_svg(self.view_origin(), self.size)
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        validate_radius(radius)?;
        self.config.radius = radius;
        self.update_size();
        self.redraw();
        Ok(())
    }

    pub fn set_thickness(&mut self, thickness: f64) -> Result<()> {
        validate_thickness(thickness)?;
        self.config.thickness = thickness;
        self.update_size();
        self.redraw();
        Ok(())
    }

    pub fn set_fill(&mut self, fill: Color) -> Result<()> {
        self.config.fill = fill;
        self.redraw();
        Ok(())
    }

    /// Sets the percent, clamped to `[0, 100]`, and derives the angle from it.
    pub fn set_percent(&mut self, percent: f64) -> Result<()> {
        let percent = finite("percent", percent)?;
        // `+ 0.0` folds a negative zero into zero so the label never reads "-0%".
        self.value.percent = percent.clamp(0.0, 100.0) + 0.0;
        self.value.angle = percent_to_angle(self.value.percent);
        self.redraw();
        Ok(())
    }

    /// Sets the sweep angle directly, clamped to `[0, 359.999]`. The percent is
    /// not touched.
    pub fn set_angle(&mut self, angle: f64) -> Result<()> {
        let angle = finite("angle", angle)?;
        self.value.angle = angle.clamp(0.0, MAX_SWEEP_ANGLE) + 0.0;
        self.redraw();
        Ok(())
    }

    pub fn apply(&mut self, command: GaugeCommand) -> Result<()> {
        trace!(?command, "applying gauge command");
        match command {
            GaugeCommand::SetRadius(radius) => self.set_radius(radius),
            GaugeCommand::SetThickness(thickness) => self.set_thickness(thickness),
            GaugeCommand::SetFill(fill) => self.set_fill(fill),
            GaugeCommand::SetPercent(percent) | GaugeCommand::SetValue(percent) => {
                self.set_percent(percent)
            }
            GaugeCommand::SetAngle(angle) => self.set_angle(angle),
        }
    }

    /// Applies every queued command without blocking. Rejected commands are
    /// logged and skipped. Returns how many commands were applied.
    pub fn apply_pending(&mut self, receiver: &Receiver<GaugeCommand>) -> usize {
        let mut applied = 0;
        while let Ok(command) = receiver.try_recv() {
            match self.apply(command) {
                Ok(()) => applied += 1,
                Err(err) => tracing::warn!(%err, "ignoring gauge command"),
            }
        }
        applied
    }

    fn update_size(&mut self) {
        self.size = Size::of_gauge(self.config.radius, self.config.thickness);
    }

    fn redraw(&mut self) {
        self.geometry = GeometryState::compute(self.config.radius, self.value.angle);
        drawables::rebuild(&mut self.scene, &self.config, &self.value, &self.geometry);
        self.generation += 1;
        debug!(
            generation = self.generation,
            percent = self.value.percent,
            angle = self.value.angle,
            "gauge redrawn"
        );
    }
}

fn finite(property: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GaugeError::NonFinite { property, value })
    }
}
