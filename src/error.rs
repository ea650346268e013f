//! Gauge errors

use thiserror::Error;

/// Errors raised when a gauge property is rejected or a surface fails
#[derive(Error, Debug)]
pub enum GaugeError {
    #[error("Radius must be finite and greater than zero, got {0}")]
    InvalidRadius(f64),

    #[error("Thickness must be finite and non-negative, got {0}")]
    InvalidThickness(f64),

    #[error("{property} must be a finite number, got {value}")]
    NonFinite { property: &'static str, value: f64 },

    #[error("Invalid color '{0}': expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("Font data could not be parsed")]
    FontLoad,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Window creation failed: {0}")]
    Os(#[from] winit::error::OsError),

    #[error("Pixel surface error: {0}")]
    Pixels(#[from] pixels::Error),
}

pub type Result<T> = std::result::Result<T, GaugeError>;
