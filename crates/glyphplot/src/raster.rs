//! Series rasterization: device mapping, clipping, style dispatch.

use glam::IVec2;

use crate::canvas::Canvas;
use crate::layout::Viewport;
use crate::scale::linear_map;
use crate::series::{Samples, Series, SeriesStyle};

/// Rasterize one series onto the canvas.
///
/// Every (x, y) pair is mapped through the linear transform into dot
/// coordinates, truncating toward zero on both axes. Points that map to a
/// non-finite coordinate are dropped before the cast. Line styles draw a
/// segment for each adjacent pair whose endpoints are *both* in view —
/// partially visible segments are skipped outright, not clipped to the
/// boundary. Scatter styles draw each in-view point on its own.
pub fn draw_series<S: Samples, C: Canvas>(
    canvas: &mut C,
    series: &Series<S>,
    view: &Viewport,
    x_bounds: (f64, f64),
    y_bounds: (f64, f64),
) {
    let len = series.effective_len();
    let device: Vec<Option<IVec2>> = (0..len)
        .map(|i| map_point(series.x.get(i), series.y.get(i), view, x_bounds, y_bounds))
        .collect();

    match series.style {
        SeriesStyle::PointLine => {
            for (from, to) in visible_segments(&device, view) {
                canvas.draw_point_line(from, to, series.color);
            }
        }
        SeriesStyle::BlockLine => {
            for (from, to) in visible_segments(&device, view) {
                canvas.draw_block_line(from, to, series.color);
            }
        }
        SeriesStyle::PointScatter => {
            for point in visible_points(&device, view) {
                canvas.draw_point(point, series.color);
            }
        }
        SeriesStyle::BlockScatter => {
            for point in visible_points(&device, view) {
                canvas.draw_block(point, series.color);
            }
        }
    }

    tracing::trace!(
        len,
        style = ?series.style,
        "rasterized series"
    );
}

/// Map one data point into dot coordinates, or `None` if it does not land
/// on a finite device position.
fn map_point(
    x: f64,
    y: f64,
    view: &Viewport,
    x_bounds: (f64, f64),
    y_bounds: (f64, f64),
) -> Option<IVec2> {
    let dx = linear_map(x, x_bounds.0, x_bounds.1, view.x_start as f64, view.width as f64);
    let dy = linear_map(y, y_bounds.0, y_bounds.1, 0.0, view.y_span() as f64);
    if !dx.is_finite() || !dy.is_finite() {
        return None;
    }
    // Truncation toward zero, then vertical inversion.
    Some(IVec2::new(dx as i32, view.y_span() - dy as i32))
}

fn visible_segments<'a>(
    device: &'a [Option<IVec2>],
    view: &'a Viewport,
) -> impl Iterator<Item = (IVec2, IVec2)> + 'a {
    device.windows(2).filter_map(move |pair| {
        let (from, to) = (pair[0]?, pair[1]?);
        (view.in_view(from) && view.in_view(to)).then_some((from, to))
    })
}

fn visible_points<'a>(
    device: &'a [Option<IVec2>],
    view: &'a Viewport,
) -> impl Iterator<Item = IVec2> + 'a {
    device
        .iter()
        .copied()
        .filter_map(move |point| point.filter(|p| view.in_view(*p)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> Viewport {
        Viewport::new(100, 48, 20)
    }

    #[test]
    fn test_map_point_truncates_toward_zero() {
        // x in [0, 10] -> [20, 100]; y in [0, 10] -> [0, 38] inverted.
        let p = map_point(1.3, 0.0, &view(), (0.0, 10.0), (0.0, 10.0)).unwrap();
        assert_eq!(p, IVec2::new(30, 38));

        let p = map_point(10.0, 10.0, &view(), (0.0, 10.0), (0.0, 10.0)).unwrap();
        assert_eq!(p, IVec2::new(100, 0));
    }

    #[test]
    fn test_map_point_drops_non_finite() {
        assert!(map_point(f64::NAN, 0.0, &view(), (0.0, 1.0), (0.0, 1.0)).is_none());
        assert!(map_point(0.0, f64::INFINITY, &view(), (0.0, 1.0), (0.0, 1.0)).is_none());
    }

    #[test]
    fn test_visible_segments_skip_partial() {
        let v = view();
        // Middle point is left of the margin: both adjacent segments drop.
        let device = vec![
            Some(IVec2::new(30, 10)),
            Some(IVec2::new(5, 10)),
            Some(IVec2::new(40, 10)),
            Some(IVec2::new(50, 10)),
        ];
        let segments: Vec<_> = visible_segments(&device, &v).collect();
        assert_eq!(segments, vec![(IVec2::new(40, 10), IVec2::new(50, 10))]);
    }

    #[test]
    fn test_visible_segments_include_final_pair() {
        let v = view();
        let device = vec![
            Some(IVec2::new(30, 10)),
            Some(IVec2::new(40, 12)),
            Some(IVec2::new(50, 14)),
        ];
        assert_eq!(visible_segments(&device, &v).count(), 2);
    }

    #[test]
    fn test_visible_points_clip() {
        let v = view();
        let device = vec![
            Some(IVec2::new(30, 10)),
            Some(IVec2::new(19, 10)), // left of margin
            Some(IVec2::new(30, 40)), // at the bottom boundary
            None,
        ];
        let points: Vec<_> = visible_points(&device, &v).collect();
        assert_eq!(points, vec![IVec2::new(30, 10)]);
    }
}
