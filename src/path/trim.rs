//! Arc-length trimming of a path.
//!
//! The animator produces a normalized window `[from, to]`; this module cuts
//! the corresponding sub-path out of the full outline so the host can stroke
//! just the "drawn so far" portion. Measurement and splitting use
//! `lyon::algorithms::measure`, which walks curves with a flattening
//! tolerance; the window is interpreted over total arc length across all
//! contours.

use lyon::algorithms::measure::{PathMeasurements, SampleType};
use lyon::path::Path;

/// Flattening tolerance for arc-length measurement.
///
/// Paths handed to the trimmer are already in target-rect units (screen
/// points), so 1e-2 is well below visible error.
const MEASURE_TOLERANCE: f32 = 1e-2;

/// Return the sub-path covering the normalized arc-length range
/// `[from, to]` of `path`.
///
/// Both endpoints are clamped to `[0, 1]`, so a fixed-ratio window that
/// starts at a negative `from` or slides past the end simply yields the
/// visible part. An empty or inverted range yields an empty path, as does
/// an empty input.
pub fn trim_path(path: &Path, from: f32, to: f32) -> Path {
    let from = from.clamp(0.0, 1.0);
    let to = to.clamp(0.0, 1.0);

    if to <= from || path.iter().next().is_none() {
        return Path::builder().build();
    }
    if from == 0.0 && to == 1.0 {
        return path.clone();
    }

    let measurements = PathMeasurements::from_path(path, MEASURE_TOLERANCE);
    let mut sampler = measurements.create_sampler(path, SampleType::Normalized);

    let mut builder = Path::builder();
    sampler.split_range(from..to, &mut builder);
    builder.build()
}

/// Total arc length of a path under the trimmer's tolerance.
pub fn path_length(path: &Path) -> f32 {
    if path.iter().next().is_none() {
        return 0.0;
    }
    PathMeasurements::from_path(path, MEASURE_TOLERANCE).length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon::math::point;

    fn l_shaped_line() -> Path {
        // Two straight segments, total length 30.
        let mut b = Path::builder();
        b.begin(point(0.0, 0.0));
        b.line_to(point(10.0, 0.0));
        b.line_to(point(10.0, 20.0));
        b.end(false);
        b.build()
    }

    #[test]
    fn full_range_is_full_length() {
        let path = l_shaped_line();
        let full = trim_path(&path, 0.0, 1.0);
        assert!((path_length(&full) - 30.0).abs() < 1e-3);
    }

    #[test]
    fn half_range_is_half_length() {
        let path = l_shaped_line();
        let half = trim_path(&path, 0.0, 0.5);
        assert!((path_length(&half) - 15.0).abs() < 1e-2);
    }

    #[test]
    fn inverted_and_empty_ranges_yield_empty_paths() {
        let path = l_shaped_line();
        assert!(trim_path(&path, 0.7, 0.3).iter().next().is_none());
        assert!(trim_path(&path, 0.4, 0.4).iter().next().is_none());
    }

    #[test]
    fn negative_from_is_clamped() {
        // A fixed-ratio window starts at (-ratio, 0): nothing visible yet.
        let path = l_shaped_line();
        assert!(trim_path(&path, -0.2, 0.0).iter().next().is_none());

        // Once the window slides in, the visible part grows from the start.
        let leading = trim_path(&path, -0.1, 0.1);
        assert!((path_length(&leading) - 3.0).abs() < 1e-2);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let empty = Path::builder().build();
        assert!(trim_path(&empty, 0.0, 1.0).iter().next().is_none());
        assert_eq!(path_length(&empty), 0.0);
    }
}
