//! The plot widget: configuration, rendering entry point, interaction.

use glam::IVec2;

use crate::binding::NumericBinding;
use crate::canvas::Canvas;
use crate::event::{PlotEvent, PointerButton, PointerPhase};
use crate::layout::{self, Viewport, X_LABEL_ROW, X_LABEL_SHIFT, X_MARKER_ROW};
use crate::raster;
use crate::rect::Rect;
use crate::scale::{X_TICK_SPACING, Y_TICK_SPACING, linspace, tick_label};
use crate::series::{Samples, Series, data_bounds};

/// Caller-owned plot configuration.
///
/// The engine borrows this per call and retains nothing, so the caller may
/// freely mutate the series data and the bound text between calls — a
/// streaming producer appending samples, a text input editing a bound.
#[derive(Debug, Clone)]
pub struct PlotConfig<S> {
    /// Plotted series; insertion order is draw order (later series paint
    /// over earlier ones).
    pub series: Vec<Series<S>>,
    /// Lower x axis bound.
    pub x_min: NumericBinding,
    /// Upper x axis bound.
    pub x_max: NumericBinding,
    /// Lower y axis bound.
    pub y_min: NumericBinding,
    /// Upper y axis bound.
    pub y_max: NumericBinding,
    /// Whether x ticks are drawn.
    pub show_x_ticks: bool,
    /// Whether y ticks are drawn (and the left margin reserved).
    pub show_y_ticks: bool,
}

impl<S> Default for PlotConfig<S> {
    fn default() -> Self {
        Self {
            series: Vec::new(),
            x_min: NumericBinding::default(),
            x_max: NumericBinding::default(),
            y_min: NumericBinding::default(),
            y_max: NumericBinding::default(),
            show_x_ticks: true,
            show_y_ticks: true,
        }
    }
}

impl<S> PlotConfig<S> {
    /// Create an empty configuration with ticks enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the x axis bounds.
    pub fn with_x_range(mut self, min: f64, max: f64) -> Self {
        self.x_min = NumericBinding::new(min);
        self.x_max = NumericBinding::new(max);
        self
    }

    /// Set the y axis bounds.
    pub fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_min = NumericBinding::new(min);
        self.y_max = NumericBinding::new(max);
        self
    }

    /// Re-derive all four numeric bounds from their text.
    pub fn resolve_bounds(&mut self) {
        self.x_min.resolve();
        self.x_max.resolve();
        self.y_min.resolve();
        self.y_max.resolve();
    }
}

/// Plot widget state: focus and last-reported placement.
///
/// The widget itself is small on purpose; everything that depends on data
/// or canvas size is recomputed inside [`render`](Plot::render) each pass.
#[derive(Debug, Clone, Default)]
pub struct Plot {
    focused: bool,
    bounds: Rect,
}

impl Plot {
    /// Create an unfocused plot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report where the host placed the plot, in cell coordinates.
    ///
    /// Pointer events are tested against these bounds.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// The last-reported placement.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether the plot has click focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Handle one event; returns whether it was consumed.
    ///
    /// A left-button press inside the reported bounds takes focus. The
    /// [`AutoScale`](PlotEvent::AutoScale) trigger refits the axis bounds
    /// regardless of focus and is always consumed. Nothing here ever
    /// relinquishes focus; blur is the host's concern.
    pub fn handle_event<S: Samples>(
        &mut self,
        event: &PlotEvent,
        config: &mut PlotConfig<S>,
    ) -> bool {
        match event {
            PlotEvent::Pointer(pointer)
                if pointer.button == PointerButton::Left
                    && pointer.phase == PointerPhase::Pressed
                    && self.bounds.contains(pointer.pos) =>
            {
                self.focused = true;
                true
            }
            PlotEvent::AutoScale => {
                self.auto_scale(config);
                true
            }
            _ => false,
        }
    }

    /// Fit the axis bounds to the current data extent.
    ///
    /// Writes the new bounds back through the text bindings so the editing
    /// UI reflects them. With no finite data anywhere the bounds are left
    /// untouched.
    pub fn auto_scale<S: Samples>(&mut self, config: &mut PlotConfig<S>) {
        let Some(bounds) = data_bounds(&config.series) else {
            tracing::debug!("auto-scale skipped: no finite data extent");
            return;
        };
        config.x_min.set_value(bounds.x_min);
        config.x_max.set_value(bounds.x_max);
        config.y_min.set_value(bounds.y_min);
        config.y_max.set_value(bounds.y_max);
        tracing::debug!(
            x_min = bounds.x_min,
            x_max = bounds.x_max,
            y_min = bounds.y_min,
            y_max = bounds.y_max,
            "auto-scaled axis bounds"
        );
    }

    /// Render one frame onto a host canvas sized to the available area.
    ///
    /// The configuration is only borrowed for this call; the referenced
    /// data must be stable for its duration (a caller with a concurrent
    /// producer snapshots or locks before invoking).
    pub fn render<S: Samples, C: Canvas>(&self, config: &mut PlotConfig<S>, canvas: &mut C) {
        config.resolve_bounds();

        let (width, height) = (canvas.width(), canvas.height());
        let x_start = self.draw_ticks(config, canvas, width, height);
        let view = Viewport::new(width, height, x_start);

        let x_bounds = (config.x_min.value(), config.x_max.value());
        let y_bounds = (config.y_min.value(), config.y_max.value());
        for series in &config.series {
            raster::draw_series(canvas, series, &view, x_bounds, y_bounds);
        }
    }

    /// Draw tick labels and markers; returns the left margin in dots.
    fn draw_ticks<S: Samples, C: Canvas>(
        &self,
        config: &PlotConfig<S>,
        canvas: &mut C,
        width: i32,
        height: i32,
    ) -> i32 {
        let mut x_start = 0;

        if config.show_y_ticks {
            let labels =
                layout::y_tick_labels(config.y_min.value(), config.y_max.value(), height);
            for (i, label) in labels.iter().enumerate() {
                let row = i as i32 * Y_TICK_SPACING;
                canvas.draw_text(IVec2::new(0, row), &format!("{label}-"));
            }
            x_start = layout::left_margin(&labels);
        }

        if config.show_x_ticks {
            let count = (width / X_TICK_SPACING).max(0) as usize;
            if count >= 2 {
                let ticks = linspace(config.x_min.value(), config.x_max.value(), count);
                for (i, value) in ticks.iter().enumerate() {
                    let column = i as i32 * X_TICK_SPACING + x_start - X_LABEL_SHIFT;
                    canvas.draw_text(IVec2::new(column, height - X_LABEL_ROW), &tick_label(value));
                    canvas.draw_text(IVec2::new(column, height - X_MARKER_ROW), "  |");
                }
            }
        }

        x_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::PointerEvent;

    fn config() -> PlotConfig<Vec<f64>> {
        PlotConfig::new()
            .with_x_range(0.0, 5.0)
            .with_y_range(-2.0, 2.0)
    }

    #[test]
    fn test_focus_on_left_press_inside() {
        let mut plot = Plot::new();
        plot.set_bounds(Rect::new(0, 0, 40, 10));
        let mut cfg = config();

        let inside = PlotEvent::from(PointerEvent::left_press(5, 5));
        assert!(plot.handle_event(&inside, &mut cfg));
        assert!(plot.is_focused());
    }

    #[test]
    fn test_no_focus_outside_or_other_buttons() {
        let mut plot = Plot::new();
        plot.set_bounds(Rect::new(0, 0, 40, 10));
        let mut cfg = config();

        let outside = PlotEvent::from(PointerEvent::left_press(50, 5));
        assert!(!plot.handle_event(&outside, &mut cfg));
        assert!(!plot.is_focused());

        let right = PlotEvent::from(PointerEvent::new(
            PointerButton::Right,
            PointerPhase::Pressed,
            IVec2::new(5, 5),
        ));
        assert!(!plot.handle_event(&right, &mut cfg));

        let moved = PlotEvent::from(PointerEvent::new(
            PointerButton::Left,
            PointerPhase::Moved,
            IVec2::new(5, 5),
        ));
        assert!(!plot.handle_event(&moved, &mut cfg));
        assert!(!plot.is_focused());
    }

    #[test]
    fn test_auto_scale_event_writes_bounds_back() {
        let mut plot = Plot::new();
        let mut cfg = config();
        cfg.series
            .push(Series::new(vec![0.0, 1.0, 2.0], vec![-1.0, 0.0, 1.0]));

        assert!(plot.handle_event(&PlotEvent::AutoScale, &mut cfg));
        assert_eq!(cfg.x_min.text(), "0");
        assert_eq!(cfg.x_max.text(), "2");
        assert_eq!(cfg.y_min.text(), "-1");
        assert_eq!(cfg.y_max.text(), "1");
    }

    #[test]
    fn test_auto_scale_without_data_keeps_bounds() {
        let mut plot = Plot::new();
        let mut cfg = config();

        assert!(plot.handle_event(&PlotEvent::AutoScale, &mut cfg));
        assert_eq!(cfg.x_min.value(), 0.0);
        assert_eq!(cfg.x_max.value(), 5.0);
        assert_eq!(cfg.y_min.text(), "-2");
        assert_eq!(cfg.y_max.text(), "2");
    }
}
