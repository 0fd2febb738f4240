//! Spy canvas that records primitive calls for verification in tests.

use glam::IVec2;
use glyphplot::{Canvas, Color};

/// Records a canvas primitive call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Text {
        pos: IVec2,
        text: String,
    },
    Point {
        pos: IVec2,
        color: Color,
    },
    Block {
        pos: IVec2,
        color: Color,
    },
    PointLine {
        from: IVec2,
        to: IVec2,
        color: Color,
    },
    BlockLine {
        from: IVec2,
        to: IVec2,
        color: Color,
    },
}

/// Spy implementation of `Canvas` for testing.
///
/// Every primitive call is appended to an in-order log; nothing is
/// rasterized. Useful for clipping tests ("this point must never reach a
/// primitive") and draw-order tests.
///
/// # Example
///
/// ```
/// use glam::IVec2;
/// use glyphplot::{Canvas, Color};
/// use glyphplot_test_utils::RecordingCanvas;
///
/// let mut spy = RecordingCanvas::new(120, 48);
/// spy.draw_point(IVec2::new(10, 10), Color::RED);
///
/// assert_eq!(spy.count_points(), 1);
/// assert_eq!(spy.call_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    width: i32,
    height: i32,
    calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    /// Create a spy canvas with the given dot-space size.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    /// All recorded calls, in draw order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Count text calls.
    pub fn count_texts(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Text { .. }))
            .count()
    }

    /// Count fine point calls.
    pub fn count_points(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Point { .. }))
            .count()
    }

    /// Count coarse block calls.
    pub fn count_blocks(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Block { .. }))
            .count()
    }

    /// Count fine line calls.
    pub fn count_point_lines(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::PointLine { .. }))
            .count()
    }

    /// Count coarse line calls.
    pub fn count_block_lines(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::BlockLine { .. }))
            .count()
    }

    /// Every dot position any non-text primitive touched (line endpoints
    /// included).
    pub fn touched_positions(&self) -> Vec<IVec2> {
        let mut positions = Vec::new();
        for call in &self.calls {
            match call {
                DrawCall::Point { pos, .. } | DrawCall::Block { pos, .. } => positions.push(*pos),
                DrawCall::PointLine { from, to, .. } | DrawCall::BlockLine { from, to, .. } => {
                    positions.push(*from);
                    positions.push(*to);
                }
                DrawCall::Text { .. } => {}
            }
        }
        positions
    }

    /// The recorded text runs, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn draw_text(&mut self, pos: IVec2, text: &str) {
        self.calls.push(DrawCall::Text {
            pos,
            text: text.to_string(),
        });
    }

    fn draw_point(&mut self, pos: IVec2, color: Color) {
        self.calls.push(DrawCall::Point { pos, color });
    }

    fn draw_block(&mut self, pos: IVec2, color: Color) {
        self.calls.push(DrawCall::Block { pos, color });
    }

    fn draw_point_line(&mut self, from: IVec2, to: IVec2, color: Color) {
        self.calls.push(DrawCall::PointLine { from, to, color });
    }

    fn draw_block_line(&mut self, from: IVec2, to: IVec2, color: Color) {
        self.calls.push(DrawCall::BlockLine { from, to, color });
    }
}
