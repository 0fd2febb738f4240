//! Viewport layout: margins, tick geometry, clipping bounds.
//!
//! Everything here is derived per render pass from the canvas size and the
//! current axis bounds, and nothing is persisted between passes.

use glam::IVec2;

use crate::scale::{Y_TICK_SPACING, linspace, tick_label};

/// Dots between the plot's bottom clipping boundary and the canvas bottom,
/// reserved for the x-tick rows.
pub const BOTTOM_CLIP_RESERVE: i32 = 8;

/// Dots excluded from the vertical mapping span.
pub const Y_SPAN_RESERVE: i32 = 10;

/// X-tick label baseline, in dots above the canvas bottom.
pub const X_LABEL_ROW: i32 = 4;

/// X-tick marker row, in dots above the canvas bottom.
pub const X_MARKER_ROW: i32 = 6;

/// Dots an x-tick label is shifted left of its tick column.
pub const X_LABEL_SHIFT: i32 = 4;

/// The drawable region of one render pass.
///
/// Series x coordinates map into `[x_start, width]`, y coordinates into
/// `[0, height - Y_SPAN_RESERVE]` with the vertical axis inverted (canvas
/// rows grow downward, data y grows upward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Canvas width in dots.
    pub width: i32,
    /// Canvas height in dots.
    pub height: i32,
    /// Left margin in dots, reserved for y-tick labels.
    pub x_start: i32,
}

impl Viewport {
    /// Create a viewport.
    pub fn new(width: i32, height: i32, x_start: i32) -> Self {
        Self {
            width,
            height,
            x_start,
        }
    }

    /// The clipping boundary below which nothing is drawn.
    pub fn clip_bottom(&self) -> i32 {
        self.height - BOTTOM_CLIP_RESERVE
    }

    /// Upper end of the vertical mapping span.
    pub fn y_span(&self) -> i32 {
        self.height - Y_SPAN_RESERVE
    }

    /// Whether a device point is inside the plottable region.
    ///
    /// A point left of the margin, or at or below the bottom boundary, is
    /// out of view and must never reach a draw primitive.
    pub fn in_view(&self, point: IVec2) -> bool {
        point.x >= self.x_start && point.y < self.clip_bottom()
    }
}

/// Y-tick labels for a canvas of the given height, top row first.
///
/// Labels are generated across `[y_min, y_max]` and reversed so the top of
/// the canvas shows the larger value. If fewer than two ticks fit, no
/// labels are produced and the axis contributes no margin.
pub fn y_tick_labels(y_min: f64, y_max: f64, height: i32) -> Vec<String> {
    let count = (height / Y_TICK_SPACING).max(0) as usize;
    if count < 2 {
        return Vec::new();
    }
    let mut labels: Vec<String> = linspace(y_min, y_max, count)
        .into_iter()
        .map(tick_label)
        .collect();
    labels.reverse();
    labels
}

/// Left margin in dots for a set of y-tick labels.
///
/// Sized from the longest label so every label plus its `-` marker fits:
/// `2 * (longest + 4)` dots, 0 when there are no labels.
pub fn left_margin(labels: &[String]) -> i32 {
    labels
        .iter()
        .map(|label| label.len())
        .max()
        .map_or(0, |longest| 2 * (longest as i32 + 4))
}
