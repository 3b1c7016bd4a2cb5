//! Lyon path glue shared by the rest of the crate.
//!
//! Everything downstream (glyph layout, ordering, fitting, trimming) works
//! on `lyon::path::Path`. This module keeps the small amount of plumbing
//! those stages share:
//! - `Affine2x3`: a minimal 2D affine transform
//! - `append_transformed`: re-emit a path's events into a builder through a
//!   transform (used to place glyphs at their pen positions and to apply the
//!   final fit transform)
//! - `path_bounds`: bounding box of a path
//! - `svg_path_data`: debug/demo formatting of a path

pub mod trim;

use lyon::algorithms::aabb::bounding_box;
use lyon::math::{Box2D, Point, point};
use lyon::path::{Event, Path};

/// Simple affine transform for 2D points (column-vector convention).
///
/// Matrix:
/// [ a c tx ]
/// [ b d ty ]
/// [ 0 0  1 ]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine2x3 {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Default for Affine2x3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2x3 {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    #[inline]
    pub fn translate(tx: f32, ty: f32) -> Self {
        Self {
            tx,
            ty,
            ..Self::IDENTITY
        }
    }

    /// Uniform scale followed by a translation.
    #[inline]
    pub fn scale_translate(scale: f32, tx: f32, ty: f32) -> Self {
        Self {
            a: scale,
            b: 0.0,
            c: 0.0,
            d: scale,
            tx,
            ty,
        }
    }

    /// Uniform scale with the Y axis flipped, followed by a translation.
    ///
    /// Glyph outlines are Y-up; target rectangles are Y-down. The fit step
    /// composes its whole mapping out of this one constructor.
    #[inline]
    pub fn flip_y_scale_translate(scale: f32, tx: f32, ty: f32) -> Self {
        Self {
            a: scale,
            b: 0.0,
            c: 0.0,
            d: -scale,
            tx,
            ty,
        }
    }

    #[inline]
    pub fn transform_point(&self, p: Point) -> Point {
        point(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }
}

/// Re-emit `path` into `builder`, transforming every point.
///
/// Contours are carried over as-is: open stays open, closed stays closed.
pub fn append_transformed(builder: &mut lyon::path::Builder, path: &Path, xf: Affine2x3) {
    for event in path.iter() {
        match event {
            Event::Begin { at } => {
                builder.begin(xf.transform_point(at));
            }
            Event::Line { to, .. } => {
                builder.line_to(xf.transform_point(to));
            }
            Event::Quadratic { ctrl, to, .. } => {
                builder.quadratic_bezier_to(xf.transform_point(ctrl), xf.transform_point(to));
            }
            Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                builder.cubic_bezier_to(
                    xf.transform_point(ctrl1),
                    xf.transform_point(ctrl2),
                    xf.transform_point(to),
                );
            }
            Event::End { close, .. } => {
                builder.end(close);
            }
        }
    }
}

/// Tight bounding box of a path.
///
/// Degenerate inputs (an empty path) produce an inverted box; callers that
/// care must check [`is_degenerate`].
#[inline]
pub fn path_bounds(path: &Path) -> Box2D {
    bounding_box(path.iter())
}

/// True when the box cannot be fit into a rectangle: empty, or zero-area
/// along either axis.
#[inline]
pub fn is_degenerate(bounds: &Box2D) -> bool {
    !(bounds.max.x > bounds.min.x) || !(bounds.max.y > bounds.min.y)
}

/// Format a path as SVG path data (`M`/`L`/`Q`/`C`/`Z`).
///
/// Intended for the demo binary and for debugging; coordinates are printed
/// with two decimals which is plenty at screen scale.
pub fn svg_path_data(path: &Path) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    for event in path.iter() {
        match event {
            Event::Begin { at } => {
                let _ = write!(out, "M {:.2} {:.2} ", at.x, at.y);
            }
            Event::Line { to, .. } => {
                let _ = write!(out, "L {:.2} {:.2} ", to.x, to.y);
            }
            Event::Quadratic { ctrl, to, .. } => {
                let _ = write!(
                    out,
                    "Q {:.2} {:.2} {:.2} {:.2} ",
                    ctrl.x, ctrl.y, to.x, to.y
                );
            }
            Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => {
                let _ = write!(
                    out,
                    "C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2} ",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                );
            }
            Event::End { close, .. } => {
                if close {
                    out.push_str("Z ");
                }
            }
        }
    }

    out.trim_end().to_string()
}
