/// Minimum search-length tolerance in metres, regardless of mode.
const MIN_LENGTH_TOLERANCE: f64 = 10.0;

/// Upper bound of the shape length the walk may consume while trying
/// to match an edge of `length` metres.
///
/// The tolerance absorbs discretisation differences between a stored
/// edge length and the shape-derived length, while bounding how far a
/// candidate edge is scanned before being ruled out: 5% capped at 25m
/// when matching exact shapes, 10% capped at 100m otherwise, never
/// below [`MIN_LENGTH_TOLERANCE`].
pub fn length_comparison(length: f64, exact_match: bool) -> f64 {
    let (tolerance, cap) = match exact_match {
        true => (length * 0.05, 25.0),
        false => (length * 0.1, 100.0),
    };

    length + tolerance.clamp(MIN_LENGTH_TOLERANCE, cap)
}

#[cfg(test)]
mod test {
    use super::length_comparison;
    use approx::assert_relative_eq;

    #[test]
    fn floors_at_minimum_tolerance() {
        // Short edges always get the 10m floor.
        assert_relative_eq!(length_comparison(0.0, true), 10.0);
        assert_relative_eq!(length_comparison(50.0, true), 60.0);
        assert_relative_eq!(length_comparison(50.0, false), 60.0);
    }

    #[test]
    fn scales_with_length_between_floor_and_cap() {
        // 5% of 300m and 10% of 500m sit between floor and cap.
        assert_relative_eq!(length_comparison(300.0, true), 315.0);
        assert_relative_eq!(length_comparison(500.0, false), 550.0);
    }

    #[test]
    fn caps_long_edges() {
        assert_relative_eq!(length_comparison(1_000.0, true), 1_025.0);
        assert_relative_eq!(length_comparison(5_000.0, false), 5_100.0);
    }

    #[test]
    fn window_dominates_length_and_grows_monotonically() {
        for exact in [true, false] {
            let mut previous = f64::MIN;
            for length in (0..2_000).map(|l| l as f64) {
                let window = length_comparison(length, exact);
                assert!(window >= length + 10.0);
                assert!(window > previous);
                previous = window;
            }
        }
    }
}
