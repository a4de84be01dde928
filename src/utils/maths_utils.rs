/// Centred rolling mean with `min_periods = 1`: the window shrinks at the edges.
/// Even windows lean right of centre, as pandas does.
pub(crate) fn smooth_data(data: &[f64], window: usize) -> Vec<f64> {
    if window <= 1 || data.is_empty() {
        return data.to_vec();
    }
    let left = (window - 1) / 2;
    let right = window / 2;
    let mut prefix = Vec::with_capacity(data.len() + 1);
    prefix.push(0.0);
    for v in data {
        prefix.push(prefix.last().copied().unwrap_or(0.0) + v);
    }
    (0..data.len())
        .map(|i| {
            let lo = i.saturating_sub(left);
            let hi = (i + right + 1).min(data.len());
            (prefix[hi] - prefix[lo]) / (hi - lo) as f64
        })
        .collect()
}

/// Piecewise-linear interpolation (numpy `interp` semantics: clamps outside `xs`).
/// `xs` must be ascending and the same length as `ys`.
pub(crate) fn interp_linear(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    match (xs.first(), xs.last()) {
        (Some(&first), Some(&last)) => {
            if x <= first {
                return ys[0];
            }
            if x >= last {
                return ys[ys.len() - 1];
            }
        }
        _ => return f64::NAN,
    }
    // First index whose x is > target; safe because x is strictly inside the range
    let hi = xs.partition_point(|&v| v <= x);
    let lo = hi - 1;
    let span = xs[hi] - xs[lo];
    if span <= 0.0 {
        return ys[hi];
    }
    let frac = (x - xs[lo]) / span;
    ys[lo] + (ys[hi] - ys[lo]) * frac
}

pub(crate) fn round_to(value: f64, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);
    (value * scale).round() / scale
}

/// Centripetal-free (uniform) Catmull-Rom resample of a polyline.
/// Inserts `samples` intermediate points per segment; endpoints are duplicated as phantoms.
/// X must be ascending; the curve passes through every input point.
pub(crate) fn catmull_rom(points: &[[f64; 2]], samples: usize) -> Vec<[f64; 2]> {
    if points.len() < 3 || samples == 0 {
        return points.to_vec();
    }
    let mut out = Vec::with_capacity(points.len() * (samples + 1));
    for i in 0..points.len() - 1 {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(points.len() - 1)];
        out.push(p1);
        for s in 1..=samples {
            let t = s as f64 / (samples + 1) as f64;
            let t2 = t * t;
            let t3 = t2 * t;
            let blend = |a: f64, b: f64, c: f64, d: f64| {
                0.5 * ((2.0 * b)
                    + (-a + c) * t
                    + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2
                    + (-a + 3.0 * b - 3.0 * c + d) * t3)
            };
            // Keep x monotonic by interpolating it linearly; only y is splined
            let x = p1[0] + (p2[0] - p1[0]) * t;
            out.push([x, blend(p0[1], p1[1], p2[1], p3[1])]);
        }
    }
    if let Some(last) = points.last() {
        out.push(*last);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_data_shrinks_window_at_edges() {
        let out = smooth_data(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
        assert_eq!(out, vec![1.5, 2.0, 3.0, 4.0, 4.5]);
    }

    #[test]
    fn smooth_data_window_of_one_is_identity() {
        assert_eq!(smooth_data(&[3.0, 1.0], 1), vec![3.0, 1.0]);
    }

    #[test]
    fn interp_clamps_and_interpolates() {
        let xs = [0.0, 10.0, 20.0];
        let ys = [0.0, 100.0, 50.0];
        assert_eq!(interp_linear(-5.0, &xs, &ys), 0.0);
        assert_eq!(interp_linear(25.0, &xs, &ys), 50.0);
        assert_eq!(interp_linear(5.0, &xs, &ys), 50.0);
        assert_eq!(interp_linear(15.0, &xs, &ys), 75.0);
        assert_eq!(interp_linear(10.0, &xs, &ys), 100.0);
    }

    #[test]
    fn round_to_keeps_precision() {
        assert_eq!(round_to(3.141_59, 2), 3.14);
        assert_eq!(round_to(1455.223_456, 4), 1455.2235);
    }

    #[test]
    fn catmull_rom_passes_through_inputs() {
        let pts = [[0.0, 0.0], [1.0, 2.0], [2.0, 1.0], [3.0, 3.0]];
        let out = catmull_rom(&pts, 3);
        assert_eq!(out.len(), 3 * 4 + 1);
        for p in pts {
            assert!(out.contains(&p));
        }
        assert!(out.windows(2).all(|w| w[0][0] < w[1][0]));
    }

    #[test]
    fn catmull_rom_leaves_short_lines_alone() {
        let pts = [[0.0, 1.0], [1.0, 2.0]];
        assert_eq!(catmull_rom(&pts, 4), pts.to_vec());
    }
}
