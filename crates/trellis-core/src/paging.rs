//! Pagination windowing and percent-complete clamping.
//!
//! Both functions are total: any combination of numeric inputs produces a
//! well-defined result, so pagination controls and progress bars never
//! have an error path to render.

/// Default number of page links a pagination control shows.
pub const DEFAULT_PAGES_TO_SHOW: usize = 5;

/// Default maximum for percent-complete calculations.
pub const DEFAULT_PERCENT_MAX: f64 = 100.0;

/// Computes the contiguous window of page indices to render as links.
///
/// Pages are 0-indexed. The window slides to keep `current_page` roughly
/// centered, widening toward the nearer bound at the edges, and never
/// leaves `[0, total_pages - 1]`. With an odd `pages_to_show` the window
/// is symmetric; with an even one the extra slot goes ahead of the
/// current page.
///
/// # Example
///
/// ```
/// use trellis_core::pagination_window;
///
/// assert_eq!(pagination_window(0, 10, 5), vec![0, 1, 2, 3, 4]);
/// assert_eq!(pagination_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
/// assert_eq!(pagination_window(9, 10, 5), vec![5, 6, 7, 8, 9]);
/// ```
#[must_use]
pub fn pagination_window(
    current_page: usize,
    total_pages: usize,
    pages_to_show: usize,
) -> Vec<usize> {
    if total_pages == 0 || pages_to_show == 0 {
        return Vec::new();
    }

    // Signed arithmetic: the intermediate start/end can go negative before
    // clamping when the window hangs off the front of the page range.
    let current = current_page as i64;
    let total = total_pages as i64;
    let show = pages_to_show as i64;

    let pages_behind = (show - 1) / 2;
    let pages_ahead = show / 2;

    let start = (current - pages_behind).min(total - show).max(0);
    let end = (current + pages_ahead).max(show - 1).min(total - 1);

    (start..=end).map(|page| page as usize).collect()
}

/// Converts a value within `[0, max]` to an integer percentage `0..=100`.
///
/// The value is clamped into range first, so out-of-range inputs saturate
/// rather than producing nonsense. A zero (or negative) maximum reports
/// 100: there is nothing left to do.
///
/// # Example
///
/// ```
/// use trellis_core::percent_complete;
///
/// assert_eq!(percent_complete(22.0, 50.0), 44);
/// assert_eq!(percent_complete(0.0, 0.0), 100);
/// ```
#[must_use]
pub fn percent_complete(value: f64, max: f64) -> u8 {
    if !(max > 0.0) {
        return 100;
    }

    let clamped = if value.is_finite() {
        value.max(0.0).min(max)
    } else {
        0.0
    };

    // Divide before scaling: the ratio is already in [0, 1], whereas
    // 100.0 * clamped can overflow to infinity near f64::MAX.
    (clamped / max * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn window_at_front_edge() {
        assert_eq!(pagination_window(0, 10, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(pagination_window(1, 10, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(pagination_window(2, 10, 5), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn window_slides_with_current_page() {
        assert_eq!(pagination_window(3, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(pagination_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_at_back_edge() {
        assert_eq!(pagination_window(8, 10, 5), vec![5, 6, 7, 8, 9]);
        assert_eq!(pagination_window(9, 10, 5), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn window_with_fewer_pages_than_requested() {
        assert_eq!(pagination_window(1, 3, 5), vec![0, 1, 2]);
        assert_eq!(pagination_window(0, 1, 5), vec![0]);
    }

    #[test]
    fn empty_page_range_yields_empty_window() {
        assert!(pagination_window(0, 0, 5).is_empty());
        assert!(pagination_window(3, 0, 5).is_empty());
        assert!(pagination_window(0, 10, 0).is_empty());
    }

    #[test]
    fn even_window_leans_ahead() {
        assert_eq!(pagination_window(5, 20, 4), vec![4, 5, 6, 7]);
    }

    #[test]
    fn percent_basic_cases() {
        assert_eq!(percent_complete(22.0, 50.0), 44);
        assert_eq!(percent_complete(50.0, 50.0), 100);
        assert_eq!(percent_complete(0.0, 50.0), 0);
    }

    #[test]
    fn percent_clamps_out_of_range_values() {
        assert_eq!(percent_complete(-10.0, 50.0), 0);
        assert_eq!(percent_complete(500.0, 50.0), 100);
    }

    #[test]
    fn percent_of_nothing_is_complete() {
        assert_eq!(percent_complete(0.0, 0.0), 100);
    }

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(percent_complete(1.0, 3.0), 33);
        assert_eq!(percent_complete(2.0, 3.0), 67);
    }

    #[test]
    fn percent_survives_values_near_f64_max() {
        // Scaling by 100 before dividing would overflow to infinity here.
        assert_eq!(percent_complete(1.0e307, 1.0e307), 100);
        assert_eq!(percent_complete(5.0e307, 1.0e308), 50);
        assert_eq!(percent_complete(f64::MAX, f64::MAX), 100);
        assert_eq!(percent_complete(0.0, f64::MAX), 0);
    }

    proptest! {
        /// The window always stays inside the page range, stays contiguous,
        /// and contains the current page whenever that page exists.
        #[test]
        fn window_invariants(
            current in 0usize..1000,
            total in 0usize..1000,
            show in 1usize..50,
        ) {
            let window = pagination_window(current, total, show);

            if total == 0 {
                prop_assert!(window.is_empty());
                return Ok(());
            }

            prop_assert!(!window.is_empty());
            prop_assert!(window.len() <= show.max(1));
            prop_assert!(*window.first().unwrap() < total);
            prop_assert!(*window.last().unwrap() < total);
            for pair in window.windows(2) {
                prop_assert_eq!(pair[1], pair[0] + 1);
            }
            if current < total {
                prop_assert!(window.contains(&current));
            }
        }

        /// Percent is always within 0..=100 for any finite input,
        /// including magnitudes near the top of the f64 range.
        #[test]
        fn percent_stays_in_range(
            value in -f64::MAX..f64::MAX,
            max in -f64::MAX..f64::MAX,
        ) {
            let percent = percent_complete(value, max);
            prop_assert!(percent <= 100);
        }
    }
}
