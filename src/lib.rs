// ============================================================================
// CRATE CONFIGURATION & MODULES
// ============================================================================

//! A circular percentage gauge.
//!
//! [`Gauge`] holds five properties (radius, thickness, fill, percent, angle) and
//! rebuilds its drawables on every write: a near-full background track, the
//! value arc and a centered label. The drawables can be exported as SVG, painted
//! into an RGBA frame with [`Rasterizer`], or shown in a window with
//! [`window::show`].
//!
//! ```
//! use ringgauge::{Color, Gauge, GaugeConfig};
//!
//! let config = GaugeConfig::builder()
//!     .radius(50.0)
//!     .thickness(2.0)
//!     .fill(Color::rgb(0x1e, 0x90, 0xff))
//!     .build();
//! let mut gauge = Gauge::new(config)?;
//! gauge.set_percent(25.0)?;
//! assert_eq!(gauge.angle(), 90.0);
//! # Ok::<(), ringgauge::GaugeError>(())
//! ```

pub mod config;
pub mod drawables;
pub mod error;
pub mod gauge;
pub mod geometry;
pub mod raster;
pub mod scene;
pub mod window;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use config::{Color, GaugeConfig, LabelFormat};
pub use error::{GaugeError, Result};
pub use gauge::{Gauge, GaugeCommand, GaugeValue};
pub use geometry::{is_large_arc, percent_to_angle, point_on_circle, GeometryState, Point, Size};
pub use raster::{Canvas, Rasterizer};
pub use scene::{Align, ArcPath, Drawable, Label, Scene, SweepDirection};
pub use window::WindowConfig;
