//! Fitting an assembled outline into a target rectangle.
//!
//! The assembled path lives in layout space (pt, Y-up, baseline at y = 0).
//! Hosts hand us a target rectangle in their own Y-down coordinates. The
//! fit is one affine transform: uniform scale (the smaller of the two axis
//! ratios, so aspect is preserved), centered both ways, Y flipped.

use lyon::math::Box2D;
use lyon::path::Path;

use crate::path::{Affine2x3, append_transformed, is_degenerate, path_bounds};
use crate::text::TextPathError;

/// Compute the transform placing `bounds` centered inside `rect`.
///
/// Fails with [`TextPathError::EmptyBounds`] when `bounds` is degenerate
/// along either axis (empty path, or e.g. a single perfectly vertical
/// stroke): the scale factor would divide by zero.
pub fn fit_transform(bounds: Box2D, rect: Box2D) -> Result<Affine2x3, TextPathError> {
    if is_degenerate(&bounds) {
        return Err(TextPathError::EmptyBounds);
    }

    let scale = (rect.width() / bounds.width()).min(rect.height() / bounds.height());

    // Center horizontally; center vertically *and* flip Y. The Y offset
    // anchors the flipped box so that its (Y-up) max edge lands at the top
    // of the centered band.
    let offset_x = rect.min.x + (rect.width() - bounds.width() * scale) / 2.0
        - bounds.min.x * scale;
    let offset_y = rect.min.y + (rect.height() + bounds.height() * scale) / 2.0
        + bounds.min.y * scale;

    Ok(Affine2x3::flip_y_scale_translate(scale, offset_x, offset_y))
}

/// Fit a path into a rectangle: bounds, transform, re-emit.
pub fn fit_path_into(path: &Path, rect: Box2D) -> Result<Path, TextPathError> {
    let xf = fit_transform(path_bounds(path), rect)?;

    let mut builder = Path::builder();
    append_transformed(&mut builder, path, xf);
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon::math::point;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Box2D {
        Box2D {
            min: point(x, y),
            max: point(x + w, y + h),
        }
    }

    fn wide_path() -> Path {
        // 40 x 10, off-origin, Y-up.
        let mut b = Path::builder();
        b.begin(point(5.0, 2.0));
        b.line_to(point(45.0, 2.0));
        b.line_to(point(45.0, 12.0));
        b.line_to(point(5.0, 12.0));
        b.close();
        b.build()
    }

    fn bounds_center(b: &Box2D) -> (f32, f32) {
        (
            (b.min.x + b.max.x) / 2.0,
            (b.min.y + b.max.y) / 2.0,
        )
    }

    #[test]
    fn fitted_path_is_centered() {
        let target = rect(10.0, 20.0, 100.0, 60.0);
        let fitted = fit_path_into(&wide_path(), target).unwrap();
        let fb = path_bounds(&fitted);

        let (cx, cy) = bounds_center(&fb);
        assert!((cx - 60.0).abs() < 1e-3, "cx = {cx}");
        assert!((cy - 50.0).abs() < 1e-3, "cy = {cy}");
    }

    #[test]
    fn uniform_scale_uses_limiting_axis() {
        // 40x10 into 100x60: width limits, scale = 2.5.
        let fitted = fit_path_into(&wide_path(), rect(0.0, 0.0, 100.0, 60.0)).unwrap();
        let fb = path_bounds(&fitted);

        assert!((fb.width() - 100.0).abs() < 1e-3);
        assert!((fb.height() - 25.0).abs() < 1e-3);
    }

    #[test]
    fn scaling_the_rect_scales_the_result() {
        let small = path_bounds(&fit_path_into(&wide_path(), rect(0.0, 0.0, 50.0, 30.0)).unwrap());
        let large =
            path_bounds(&fit_path_into(&wide_path(), rect(0.0, 0.0, 150.0, 90.0)).unwrap());

        assert!((large.width() - small.width() * 3.0).abs() < 1e-2);
        assert!((large.height() - small.height() * 3.0).abs() < 1e-2);
    }

    #[test]
    fn vertical_axis_is_flipped() {
        // Y-up source: the top edge (max y) must map to the smaller target
        // y (towards the top of a Y-down rect).
        let mut b = Path::builder();
        b.begin(point(0.0, 0.0));
        b.line_to(point(10.0, 0.0));
        b.line_to(point(10.0, 20.0));
        b.close();
        let path = b.build();

        let xf = fit_transform(path_bounds(&path), rect(0.0, 0.0, 10.0, 20.0)).unwrap();
        let top = xf.transform_point(point(10.0, 20.0));
        let bottom = xf.transform_point(point(0.0, 0.0));
        assert!(top.y < bottom.y);
    }

    #[test]
    fn degenerate_bounds_fail() {
        let empty = Path::builder().build();
        assert!(matches!(
            fit_path_into(&empty, rect(0.0, 0.0, 10.0, 10.0)),
            Err(TextPathError::EmptyBounds)
        ));

        let mut b = Path::builder();
        b.begin(point(3.0, 0.0));
        b.line_to(point(3.0, 9.0));
        b.end(false);
        let vertical = b.build();
        assert!(fit_path_into(&vertical, rect(0.0, 0.0, 10.0, 10.0)).is_err());
    }
}
