//! Glyphplot - 2D plotting on terminal cell canvases.
//!
//! This crate is the plotting engine: it maps numeric data series onto an
//! integer dot-coordinate canvas, derives tick positions and labels, clips
//! and rasterizes each series in one of four styles, and refits axis
//! bounds to the data on an explicit auto-scale trigger. The canvas itself
//! is an opaque host primitive behind the [`Canvas`] trait; a reference
//! terminal backend lives in the `glyphplot-term` crate.
//!
//! # Example
//!
//! ```ignore
//! use glyphplot::{Color, Plot, PlotConfig, Series, SeriesStyle};
//!
//! let mut config = PlotConfig::new()
//!     .with_x_range(0.0, 5.0)
//!     .with_y_range(-2.0, 2.0);
//! config.series.push(
//!     Series::new(xs, ys)
//!         .with_color(Color::RED)
//!         .with_style(SeriesStyle::PointLine),
//! );
//!
//! let plot = Plot::new();
//! // Each frame, with a canvas sized to the available area:
//! plot.render(&mut config, &mut canvas);
//! ```

mod binding;
mod event;
mod layout;
mod plot;
mod raster;
mod scale;
mod series;

pub mod canvas;
pub mod logging;
pub mod rect;

pub use binding::*;
pub use canvas::*;
pub use event::*;
pub use layout::*;
pub use plot::*;
pub use raster::*;
pub use rect::Rect;
pub use scale::*;
pub use series::*;
