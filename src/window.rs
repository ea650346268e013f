// ============================================================================
// WINDOW PRESENTATION
// ============================================================================

use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::{Duration, Instant};

use bon::Builder;
use pixels::{Pixels, SurfaceTexture};
use tracing::{error, info};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::config::Color;
use crate::error::Result;
use crate::gauge::{Gauge, GaugeCommand};
use crate::raster::{Canvas, Rasterizer};

#[derive(Debug, Clone, Builder)]
pub struct WindowConfig {
    #[builder(default = "Gauge".to_string())]
    pub title: String,
    #[builder(default = Color::WHITE)]
    pub background: Color,
    /// Logical pixels per gauge unit.
    #[builder(default = 2.0)]
    pub scale: f64,
    #[builder(default = 60.0)]
    pub max_framerate: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

fn buffer_size(gauge: &Gauge) -> (u32, u32) {
    let size = gauge.size();
    (
        (size.width.ceil() as u32).max(1),
        (size.height.ceil() as u32).max(1),
    )
}

/// Opens a window showing `gauge` and blocks until it is closed.
///
/// With a `receiver`, queued [`GaugeCommand`]s are applied at most once per
/// frame and the window repaints only when something changed.
pub fn show(
    mut gauge: Gauge,
    config: &WindowConfig,
    rasterizer: Rasterizer,
    receiver: Option<Receiver<GaugeCommand>>,
) -> Result<()> {
    let rasterizer = rasterizer.with_background(config.background);
    let (mut buffer_width, mut buffer_height) = buffer_size(&gauge);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(LogicalSize::new(
            buffer_width as f64 * config.scale,
            buffer_height as f64 * config.scale,
        ))
        .with_resizable(false)
        .build(&event_loop)?;
    let window = Arc::new(window);
    let window_clone = window.clone();

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(buffer_width, buffer_height, surface_texture)?;
    info!(
        width = buffer_width,
        height = buffer_height,
        title = %config.title,
        "gauge window opened"
    );

    let frame_duration = Duration::from_secs_f64(1.0 / config.max_framerate.max(1.0));
    let mut last_frame = Instant::now();

    event_loop.run(move |event, window_target| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => window_target.exit(),
            WindowEvent::Resized(new_size) => {
                if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                    error!(%err, "failed to resize surface");
                }
            }
            WindowEvent::RedrawRequested => {
                let frame = pixels.frame_mut();
                let mut canvas = Canvas::new(frame, buffer_width as usize, buffer_height as usize);
                rasterizer.render(gauge.scene(), &mut canvas, gauge.view_origin());
                if let Err(err) = pixels.render() {
                    error!(%err, "failed to present frame");
                    window_target.exit();
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            if last_frame.elapsed() < frame_duration {
                window_target.set_control_flow(ControlFlow::WaitUntil(last_frame + frame_duration));
                return;
            }
            last_frame = Instant::now();
            window_target.set_control_flow(ControlFlow::WaitUntil(last_frame + frame_duration));

            let Some(receiver) = &receiver else {
                return;
            };
            if gauge.apply_pending(receiver) == 0 {
                return;
            }
            let (width, height) = buffer_size(&gauge);
            if (width, height) != (buffer_width, buffer_height) {
                match pixels.resize_buffer(width, height) {
                    Ok(()) => (buffer_width, buffer_height) = (width, height),
                    Err(err) => error!(%err, "failed to resize pixel buffer"),
                }
            }
            window_clone.request_redraw();
        }
        _ => {}
    })?;

    Ok(())
}
