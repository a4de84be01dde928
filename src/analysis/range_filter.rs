use crate::domain::TimePoint;
use crate::models::DateWindow;

/// Points whose timestamp lies in the window, bounds inclusive.
/// A pure predicate filter, so unsorted input is handled too; order is preserved.
pub fn filter_by_window(series: &[TimePoint], window: &DateWindow) -> Vec<TimePoint> {
    series
        .iter()
        .filter(|point| window.contains(point.t))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(ts: &[i64]) -> Vec<TimePoint> {
        ts.iter().map(|&t| TimePoint::new(t, Some(t as f64))).collect()
    }

    #[test]
    fn includes_both_boundaries() {
        let window = DateWindow::new(10, 30).unwrap();
        let out = filter_by_window(&series(&[0, 10, 20, 30, 40]), &window);
        assert_eq!(out.iter().map(|p| p.t).collect::<Vec<_>>(), vec![10, 20, 30]);
    }

    #[test]
    fn keeps_null_points_inside_window() {
        let window = DateWindow::new(0, 5).unwrap();
        let input = vec![TimePoint::new(1, None), TimePoint::new(9, Some(1.0))];
        assert_eq!(filter_by_window(&input, &window), vec![TimePoint::new(1, None)]);
    }

    #[test]
    fn unsorted_input_is_filtered_in_place_order() {
        let window = DateWindow::new(10, 20).unwrap();
        let out = filter_by_window(&series(&[20, 5, 10, 25, 15]), &window);
        assert_eq!(out.iter().map(|p| p.t).collect::<Vec<_>>(), vec![20, 10, 15]);
    }

    #[test]
    fn empty_input_or_intersection_is_empty() {
        let window = DateWindow::new(100, 200).unwrap();
        assert!(filter_by_window(&[], &window).is_empty());
        assert!(filter_by_window(&series(&[1, 2, 3]), &window).is_empty());
    }

    #[test]
    fn single_instant_window() {
        let window = DateWindow::new(2, 2).unwrap();
        assert_eq!(filter_by_window(&series(&[1, 2, 3]), &window).len(), 1);
    }
}
