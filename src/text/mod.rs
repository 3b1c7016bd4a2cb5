//! Text to glyph-outline layout.
//!
//! This is the first half of the path-building pipeline: a string becomes a
//! sequence of [`GlyphOutline`]s, one per visible character, each carrying
//! its outline (pt units, untranslated) and the pen position it belongs at.
//! Ordering and fitting live in [`order`] and [`fit`].
//!
//! The layout model is a single baseline at y = 0 with the pen advancing
//! left-to-right by each glyph's horizontal advance. No shaping (ligatures,
//! RTL, complex scripts): quiz inputs are short, controlled strings in a
//! single-line tracing font.
//!
//! Space handling: **only plain `' '` characters are stripped** before
//! glyphs are indexed. Other whitespace (tabs, newlines, NBSP) is kept and
//! laid out like any character. Callers index permutations against the
//! stripped string, so generalizing the stripping would silently re-map
//! everyone's indices.

pub mod fit;
pub mod order;

use lyon::math::{Box2D, Point, point};
use lyon::path::Path;

use crate::font::{FontError, FontQuery, FontSystem, ResolvedFace};
use crate::path::{Affine2x3, append_transformed};
use crate::text::order::{OrderMode, OrderedOutlineSet};

/// An immutable outline for one character, plus its pen position.
///
/// The outline is in pt units, Y-up, with the glyph origin at (0, 0); the
/// pen position is where that origin sits within the line. Glyphs with no
/// outline (a kept tab, a metrics-only glyph) hold an empty path so that
/// slot N always corresponds to the N-th non-space character.
#[derive(Debug, Clone)]
pub struct GlyphOutline {
    pub outline: Path,
    pub pen: Point,
}

/// Errors from path building (layout, ordering, fitting).
#[derive(Debug, thiserror::Error)]
pub enum TextPathError {
    #[error("font size must be positive (got {0})")]
    NonPositiveFontSize(f32),

    #[error("cannot order an empty glyph set")]
    NoGlyphs,

    #[error("explicit order {reason} (glyph count is {expected})")]
    InvalidOrder { expected: usize, reason: String },

    #[error("combined outline has a degenerate bounding box; nothing to fit")]
    EmptyBounds,

    #[error(transparent)]
    Font(#[from] FontError),
}

/// Options for [`layout_glyph_line`].
#[derive(Debug, Clone)]
pub struct TextLayoutOptions {
    /// Font size in pt.
    pub font_size_pt: f32,

    /// Extra spacing between glyphs in pt (added after each advance).
    pub letter_spacing_pt: f32,
}

impl Default for TextLayoutOptions {
    fn default() -> Self {
        Self {
            font_size_pt: 80.0,
            letter_spacing_pt: 0.0,
        }
    }
}

/// Remove plain space characters. Exactly `' '`, nothing else.
pub fn strip_spaces(text: &str) -> String {
    text.chars().filter(|&c| c != ' ').collect()
}

/// Lay out a string into per-glyph outlines with pen positions.
///
/// For each non-space character:
/// - look up its glyph id (unmapped characters fall back to `.notdef`)
/// - extract the outline in font units, scale it to pt
/// - record the current pen position
/// - advance the pen by the glyph's advance width plus letter spacing
///
/// The result has exactly one entry per non-space character, outline-less
/// glyphs included.
pub fn layout_glyph_line(
    fonts: &FontSystem,
    face: &ResolvedFace,
    text: &str,
    opts: &TextLayoutOptions,
) -> Result<Vec<GlyphOutline>, TextPathError> {
    if opts.font_size_pt <= 0.0 {
        return Err(TextPathError::NonPositiveFontSize(opts.font_size_pt));
    }

    let scale = face.font_units_to_pt_scale(opts.font_size_pt);
    let to_pt = Affine2x3::scale_translate(scale, 0.0, 0.0);

    let mut glyphs = Vec::new();
    let mut pen_x_pt = 0.0f32;

    for ch in strip_spaces(text).chars() {
        let glyph_id = fonts.glyph_id_for_char(face, ch)?.unwrap_or(0);

        let advance_pt = fonts.glyph_advance(face, glyph_id)? * scale;

        let outline = match fonts.glyph_outline_path(face, glyph_id)? {
            Some(font_units) => {
                let mut b = Path::builder();
                append_transformed(&mut b, &font_units, to_pt);
                b.build()
            }
            None => Path::builder().build(),
        };

        glyphs.push(GlyphOutline {
            outline,
            pen: point(pen_x_pt, 0.0),
        });

        pen_x_pt += advance_pt + opts.letter_spacing_pt;
    }

    Ok(glyphs)
}

/// One-shot path building: lay out, order, assemble, fit.
///
/// Covers the common "give me the whole thing" call. When the order is
/// [`OrderMode::Random`] the chosen permutation is gone after this returns;
/// hosts that re-layout mid-animation should build a
/// [`crate::shape::TextPathShape`] instead and read back its order.
pub fn build_text_path(
    fonts: &FontSystem,
    text: &str,
    font: &FontQuery,
    layout: &TextLayoutOptions,
    order: &OrderMode,
    rect: Box2D,
) -> Result<Path, TextPathError> {
    let face = fonts.resolve(font)?;
    let glyphs = layout_glyph_line(fonts, &face, text, layout)?;
    OrderedOutlineSet::new(glyphs, order)?.fitted_path(rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_plain_spaces_only() {
        assert_eq!(strip_spaces("A B C"), "ABC");
        assert_eq!(strip_spaces("  AB  "), "AB");
        // Tabs, newlines and NBSP survive; this asymmetry is load-bearing
        // for permutation indexing.
        assert_eq!(strip_spaces("A\tB"), "A\tB");
        assert_eq!(strip_spaces("A\nB"), "A\nB");
        assert_eq!(strip_spaces("A\u{a0}B"), "A\u{a0}B");
    }

    #[test]
    fn zero_font_size_is_rejected() {
        let fonts = FontSystem::empty();
        // The size check fires before any face access, so an empty system
        // with a bogus face is fine here.
        let face = dummy_face();
        let opts = TextLayoutOptions {
            font_size_pt: 0.0,
            ..Default::default()
        };
        let err = layout_glyph_line(&fonts, &face, "AB", &opts).unwrap_err();
        assert!(matches!(err, TextPathError::NonPositiveFontSize(_)));
    }

    fn dummy_face() -> crate::font::ResolvedFace {
        use crate::font::{FontFaceId, FontVMetrics};
        crate::font::ResolvedFace {
            face_id: FontFaceId(fontdb::ID::dummy()),
            bytes: std::sync::Arc::from(Vec::new()),
            index: 0,
            v_metrics: FontVMetrics {
                units_per_em: 1000.0,
                ascender: 800.0,
                descender: -200.0,
                line_gap: 0.0,
            },
        }
    }
}
