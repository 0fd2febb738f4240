//! Linear axis mapping and tick generation.

/// Dots between consecutive y-ticks.
pub const Y_TICK_SPACING: i32 = 8;

/// Dots between consecutive x-ticks.
pub const X_TICK_SPACING: i32 = 12;

/// Affine map of `value` from `[src_lo, src_hi]` to `[dst_lo, dst_hi]`.
///
/// A degenerate source interval (`src_hi == src_lo`) maps every input to
/// the midpoint of the destination, so a plot whose min and max bounds are
/// equal still renders deterministically instead of dividing by zero.
///
/// The result is exact; rounding to integer device coordinates happens at
/// the call site, by truncation toward zero on both axes.
pub fn linear_map(value: f64, src_lo: f64, src_hi: f64, dst_lo: f64, dst_hi: f64) -> f64 {
    if src_hi == src_lo {
        return (dst_lo + dst_hi) / 2.0;
    }
    let m = (dst_hi - dst_lo) / (src_hi - src_lo);
    let b = dst_lo - m * src_lo;
    m * value + b
}

/// `count` evenly spaced values from `start` to `stop` inclusive.
///
/// Each value is computed directly as `start + i * step` rather than by
/// repeated addition, so the final element lands on `stop` without drift.
/// Degenerate counts are tolerated: 0 yields nothing, 1 yields `start`.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            (0..count).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// Values from `start` while `<= stop`, advancing by `step`.
///
/// Returned as an iterator so callers can collect into whatever sequence
/// container their series use.
pub fn arange(start: f64, stop: f64, step: f64) -> impl Iterator<Item = f64> {
    let mut value = start;
    std::iter::from_fn(move || {
        if value <= stop {
            let current = value;
            value += step;
            Some(current)
        } else {
            None
        }
    })
}

/// Format a tick value: fixed two decimals, sign-aligned.
///
/// The explicit `+` of positive values is replaced by a space so positive
/// and negative labels occupy equal width:
///
/// ```
/// use glyphplot::tick_label;
///
/// assert_eq!(tick_label(2.5), " 2.50");
/// assert_eq!(tick_label(-1.25), "-1.25");
/// ```
pub fn tick_label(value: f64) -> String {
    format!("{value:+.2}").replace('+', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_map_is_affine() {
        let (a, b, c, d) = (-3.0, 7.0, 10.0, 110.0);
        let slope = (d - c) / (b - a);
        for (x1, x2) in [(0.0, 1.0), (-3.0, 7.0), (2.5, -8.0)] {
            let diff = linear_map(x2, a, b, c, d) - linear_map(x1, a, b, c, d);
            assert!((diff - (x2 - x1) * slope).abs() < 1e-9);
        }
        assert_eq!(linear_map(a, a, b, c, d), c);
        assert_eq!(linear_map(b, a, b, c, d), d);
    }

    #[test]
    fn test_linear_map_degenerate_domain() {
        for value in [-1e9, 0.0, 42.0, f64::NAN] {
            assert_eq!(linear_map(value, 5.0, 5.0, 10.0, 30.0), 20.0);
        }
    }

    #[test]
    fn test_linspace_endpoints() {
        let values = linspace(0.0, 1.0, 5);
        let expected = [0.0, 0.25, 0.5, 0.75, 1.0];
        assert_eq!(values.len(), expected.len());
        for (v, e) in values.iter().zip(expected) {
            assert!((v - e).abs() < 1e-12);
        }
        // The last element is exactly `stop`, not a drifted sum.
        assert_eq!(*linspace(-2.0, 13.0, 7).last().unwrap(), 13.0);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn test_arange() {
        let values: Vec<f64> = arange(0.0, 1.0, 0.25).collect();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(arange(1.0, 0.0, 0.5).count(), 0);
    }

    #[test]
    fn test_tick_label_sign_alignment() {
        assert_eq!(tick_label(2.5), " 2.50");
        assert_eq!(tick_label(-1.25), "-1.25");
        assert_eq!(tick_label(0.0), " 0.00");
        assert_eq!(tick_label(2.5).len(), tick_label(-1.25).len());
    }
}
