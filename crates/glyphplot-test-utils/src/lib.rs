//! Test utilities for glyphplot.
//!
//! Provides [`RecordingCanvas`], a spy implementation of the engine's
//! `Canvas` trait that records every primitive call instead of drawing.
//! Tests assert on the recorded calls: which primitives ran, where, in
//! what order, with what color.

pub mod recording;

pub use recording::*;
