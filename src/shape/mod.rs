//! Drawable shape capability.
//!
//! Anything the stroke animation can trace implements [`PathShape`]: give
//! it a target rectangle, get back a path fitted to it. [`TextPathShape`]
//! is the interesting implementation (the glyph pipeline); the geometric
//! shapes exist so quiz screens can trace plain figures with the same
//! machinery.

pub mod stroke;

use lyon::math::{Box2D, point};
use lyon::path::Path;

use crate::font::{FontQuery, FontSystem};
use crate::text::order::{OrderMode, OrderedOutlineSet};
use crate::text::{TextLayoutOptions, TextPathError, layout_glyph_line};

/// A shape that can produce a path fitted to a rectangle.
///
/// Implementations must be pure: the same rectangle yields the same path,
/// so callers may cache per layout size.
pub trait PathShape {
    fn path(&self, rect: Box2D) -> Result<Path, TextPathError>;
}

/// A string's glyph outlines as a traceable shape.
///
/// Layout and ordering happen once, at construction: a `Random` order is
/// picked here and then stays fixed, so re-layout (e.g. a window resize
/// mid-animation) cannot reshuffle the drawing order. `path()` only
/// assembles and fits, and is cheap enough to call per frame.
pub struct TextPathShape {
    set: OrderedOutlineSet,
}

impl TextPathShape {
    /// Lay out `text` (spaces stripped) in the queried font and fix the
    /// visiting order.
    pub fn new(
        fonts: &FontSystem,
        text: &str,
        font: &FontQuery,
        layout: &TextLayoutOptions,
        order: &OrderMode,
    ) -> Result<Self, TextPathError> {
        let face = fonts.resolve(font)?;
        let glyphs = layout_glyph_line(fonts, &face, text, layout)?;
        let set = OrderedOutlineSet::new(glyphs, order)?;
        Ok(Self { set })
    }

    /// Build directly from pre-laid-out outlines. Useful when the caller
    /// already ran layout (or in tests, with synthetic outlines).
    pub fn from_outline_set(set: OrderedOutlineSet) -> Self {
        Self { set }
    }

    /// Number of glyph slots (one per non-space character).
    pub fn glyph_count(&self) -> usize {
        self.set.len()
    }

    /// The visiting order in effect; replay it via [`OrderMode::Explicit`]
    /// to reproduce this shape deterministically.
    pub fn order(&self) -> &[usize] {
        self.set.order()
    }
}

impl PathShape for TextPathShape {
    fn path(&self, rect: Box2D) -> Result<Path, TextPathError> {
        self.set.fitted_path(rect)
    }
}

/// Kappa for approximating a quarter circle with one cubic segment.
const KAPPA: f32 = 0.552_284_8;

/// An ellipse inscribed in the target rectangle.
#[derive(Debug, Default, Copy, Clone)]
pub struct EllipseShape;

impl PathShape for EllipseShape {
    fn path(&self, rect: Box2D) -> Result<Path, TextPathError> {
        let cx = (rect.min.x + rect.max.x) / 2.0;
        let cy = (rect.min.y + rect.max.y) / 2.0;
        let rx = rect.width() / 2.0;
        let ry = rect.height() / 2.0;
        let kx = rx * KAPPA;
        let ky = ry * KAPPA;

        let mut b = Path::builder();
        b.begin(point(cx + rx, cy));
        b.cubic_bezier_to(
            point(cx + rx, cy + ky),
            point(cx + kx, cy + ry),
            point(cx, cy + ry),
        );
        b.cubic_bezier_to(
            point(cx - kx, cy + ry),
            point(cx - rx, cy + ky),
            point(cx - rx, cy),
        );
        b.cubic_bezier_to(
            point(cx - rx, cy - ky),
            point(cx - kx, cy - ry),
            point(cx, cy - ry),
        );
        b.cubic_bezier_to(
            point(cx + kx, cy - ry),
            point(cx + rx, cy - ky),
            point(cx + rx, cy),
        );
        b.close();
        Ok(b.build())
    }
}

/// The target rectangle itself, traced clockwise from its top-left corner.
#[derive(Debug, Default, Copy, Clone)]
pub struct RectShape;

impl PathShape for RectShape {
    fn path(&self, rect: Box2D) -> Result<Path, TextPathError> {
        let mut b = Path::builder();
        b.begin(point(rect.min.x, rect.min.y));
        b.line_to(point(rect.max.x, rect.min.y));
        b.line_to(point(rect.max.x, rect.max.y));
        b.line_to(point(rect.min.x, rect.max.y));
        b.close();
        Ok(b.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::path_bounds;
    use crate::text::GlyphOutline;

    fn rect(w: f32, h: f32) -> Box2D {
        Box2D {
            min: point(0.0, 0.0),
            max: point(w, h),
        }
    }

    fn synthetic_text_shape(order: &OrderMode) -> Result<TextPathShape, TextPathError> {
        let square = |size: f32| {
            let mut b = Path::builder();
            b.begin(point(0.0, 0.0));
            b.line_to(point(size, 0.0));
            b.line_to(point(size, size));
            b.line_to(point(0.0, size));
            b.close();
            b.build()
        };
        let glyphs = vec![
            GlyphOutline {
                outline: square(10.0),
                pen: point(0.0, 0.0),
            },
            GlyphOutline {
                outline: square(10.0),
                pen: point(15.0, 0.0),
            },
        ];
        Ok(TextPathShape::from_outline_set(OrderedOutlineSet::new(
            glyphs, order,
        )?))
    }

    #[test]
    fn text_shape_fits_into_rect() {
        let shape = synthetic_text_shape(&OrderMode::Standard).unwrap();
        assert_eq!(shape.glyph_count(), 2);

        let path = shape.path(rect(100.0, 100.0)).unwrap();
        let b = path_bounds(&path);
        assert!((b.width() - 100.0).abs() < 1e-3);
        assert!(b.min.x >= -1e-3 && b.max.x <= 100.0 + 1e-3);
        assert!(b.min.y >= -1e-3 && b.max.y <= 100.0 + 1e-3);
    }

    #[test]
    fn same_rect_same_path() {
        let shape = synthetic_text_shape(&OrderMode::Random).unwrap();
        let a: Vec<_> = shape.path(rect(80.0, 40.0)).unwrap().iter().collect();
        let b: Vec<_> = shape.path(rect(80.0, 40.0)).unwrap().iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn random_order_is_replayable_as_explicit() {
        let random = synthetic_text_shape(&OrderMode::Random).unwrap();
        let replay = OrderMode::Explicit(random.order().to_vec());
        let explicit = synthetic_text_shape(&replay).unwrap();

        let a: Vec<_> = random.path(rect(64.0, 64.0)).unwrap().iter().collect();
        let b: Vec<_> = explicit.path(rect(64.0, 64.0)).unwrap().iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn ellipse_touches_all_four_sides() {
        let path = EllipseShape.path(rect(60.0, 40.0)).unwrap();
        let b = path_bounds(&path);
        assert!((b.min.x - 0.0).abs() < 1e-3);
        assert!((b.max.x - 60.0).abs() < 1e-3);
        assert!((b.min.y - 0.0).abs() < 1e-3);
        assert!((b.max.y - 40.0).abs() < 1e-3);
    }

    #[test]
    fn rect_shape_is_the_rect() {
        let target = rect(30.0, 20.0);
        let path = RectShape.path(target).unwrap();
        let b = path_bounds(&path);
        assert_eq!(b, target);
    }
}
