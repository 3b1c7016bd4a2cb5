//! Font face resolution and glyph outline extraction.
//!
//! The rest of the crate consumes fonts through one small capability:
//! resolve a face by family/weight/style, map characters to glyph ids, and
//! extract per-glyph outlines (as `lyon::path::Path` in font units) plus
//! horizontal advances. Discovery is backed by `fontdb` (system fonts
//! and/or caller-supplied font bytes, e.g. a bundled single-line tracing
//! font); parsing by `ttf-parser`.
//!
//! Coordinate conventions:
//! - Outlines come back in font units, Y-up, untranslated.
//! - `ResolvedFace::font_units_to_pt_scale` maps font units to pt for a
//!   given font size; layout applies it once per glyph.

pub mod register;

use std::sync::Arc;

use fontdb::{Database, Family, ID, Query, Style, Weight};
use lyon::math::point;
use lyon::path::Path;

/// A stable identifier for a selected font face.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontFaceId(pub ID);

/// Simplified font selection query.
#[derive(Debug, Clone)]
pub struct FontQuery {
    /// Preferred font family names, in priority order. The generic names
    /// `serif`, `sans-serif`/`sans` and `monospace`/`mono` select the
    /// database's generic families.
    pub families: Vec<String>,

    /// Weight in CSS terms (100..900); 400 = regular, 700 = bold.
    pub weight: u16,

    /// Italic / oblique.
    pub italic: bool,
}

impl Default for FontQuery {
    fn default() -> Self {
        Self {
            families: vec!["serif".to_string()],
            weight: 400,
            italic: false,
        }
    }
}

impl FontQuery {
    /// Query a single family by name at regular weight.
    pub fn family(name: impl Into<String>) -> Self {
        Self {
            families: vec![name.into()],
            ..Self::default()
        }
    }
}

/// Vertical metrics of a face, in font units.
#[derive(Debug, Copy, Clone)]
pub struct FontVMetrics {
    pub units_per_em: f32,
    pub ascender: f32,
    pub descender: f32,
    pub line_gap: f32,
}

/// A resolved face: the raw font bytes, the face index within a collection,
/// and vertical metrics.
#[derive(Debug, Clone)]
pub struct ResolvedFace {
    pub face_id: FontFaceId,
    pub bytes: Arc<[u8]>,
    pub index: u32,
    pub v_metrics: FontVMetrics,
}

impl ResolvedFace {
    #[inline]
    pub fn units_per_em(&self) -> f32 {
        self.v_metrics.units_per_em
    }

    /// Scale factor mapping font units -> pt at the given font size.
    #[inline]
    pub fn font_units_to_pt_scale(&self, font_size_pt: f32) -> f32 {
        font_size_pt / self.v_metrics.units_per_em
    }

    fn parse(&self) -> Result<ttf_parser::Face<'_>, FontError> {
        ttf_parser::Face::parse(&self.bytes, self.index).map_err(|_| FontError::ParseFailed)
    }
}

/// Errors produced by the font subsystem.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("no font faces available (no system fonts and nothing registered)")]
    NoFontsAvailable,

    #[error("failed to resolve a font face for families {0:?}")]
    ResolveFailed(Vec<String>),

    #[error("font face data for {0:?} could not be loaded")]
    FaceUnavailable(Vec<String>),

    #[error("failed to parse font face")]
    ParseFailed,

    #[error("failed to register font family {family:?}: {reason}")]
    RegisterFailed { family: String, reason: String },
}

/// Owns the font database and answers face/outline queries.
pub struct FontSystem {
    db: Database,
}

impl FontSystem {
    /// Create a font system backed by the system font set.
    ///
    /// Fails when the host has no usable fonts at all; use [`Self::empty`]
    /// plus [`register::ensure_registered`] to run entirely on bundled
    /// bytes.
    pub fn new() -> Result<Self, FontError> {
        let mut db = Database::new();
        db.load_system_fonts();

        if db.faces().next().is_none() {
            return Err(FontError::NoFontsAvailable);
        }

        Ok(Self { db })
    }

    /// Create a font system with no faces; feed it via
    /// [`register::ensure_registered`].
    pub fn empty() -> Self {
        Self {
            db: Database::new(),
        }
    }

    /// Number of discovered faces.
    pub fn face_count(&self) -> usize {
        self.db.faces().count()
    }

    pub(crate) fn db_mut(&mut self) -> &mut Database {
        &mut self.db
    }

    /// Resolve a query to a concrete face.
    ///
    /// Families are tried in order; generic names map to the database's
    /// generic families. There is deliberately no "first face in the
    /// database" fallback: a tracing quiz built around a specific
    /// single-line font would rather fail fast than silently draw a random
    /// serif.
    pub fn resolve(&self, query: &FontQuery) -> Result<ResolvedFace, FontError> {
        if self.db.faces().next().is_none() {
            return Err(FontError::NoFontsAvailable);
        }

        let style = if query.italic {
            Style::Italic
        } else {
            Style::Normal
        };
        let weight = Weight(query.weight.clamp(1, 1000));

        let mut families: Vec<Family<'_>> = Vec::new();
        for f in &query.families {
            let s = f.trim();
            if s.eq_ignore_ascii_case("serif") {
                families.push(Family::Serif);
            } else if s.eq_ignore_ascii_case("sans-serif") || s.eq_ignore_ascii_case("sans") {
                families.push(Family::SansSerif);
            } else if s.eq_ignore_ascii_case("monospace") || s.eq_ignore_ascii_case("mono") {
                families.push(Family::Monospace);
            } else if !s.is_empty() {
                families.push(Family::Name(s));
            }
        }

        let id = self
            .db
            .query(&Query {
                families: &families,
                weight,
                style,
                stretch: fontdb::Stretch::Normal,
            })
            .ok_or_else(|| FontError::ResolveFailed(query.families.clone()))?;

        self.face_from_id(id)
            .ok_or_else(|| FontError::FaceUnavailable(query.families.clone()))?
    }

    /// Build a `ResolvedFace` from a database id, copying the face bytes
    /// out of whatever source backs them (file, shared memory, or bytes
    /// registered at runtime).
    fn face_from_id(&self, id: ID) -> Option<Result<ResolvedFace, FontError>> {
        self.db.with_face_data(id, |data, index| {
            let bytes: Arc<[u8]> = Arc::from(data.to_vec());

            let parsed = match ttf_parser::Face::parse(&bytes, index) {
                Ok(f) => f,
                Err(_) => return Err(FontError::ParseFailed),
            };

            let units_per_em = parsed.units_per_em() as f32;

            // Prefer OS/2 typographic metrics, fall back to hhea.
            let asc = parsed
                .typographic_ascender()
                .unwrap_or_else(|| parsed.ascender()) as f32;
            let desc = parsed
                .typographic_descender()
                .unwrap_or_else(|| parsed.descender()) as f32;
            let gap = parsed
                .typographic_line_gap()
                .unwrap_or_else(|| parsed.line_gap()) as f32;

            Ok(ResolvedFace {
                face_id: FontFaceId(id),
                bytes,
                index,
                v_metrics: FontVMetrics {
                    units_per_em,
                    ascender: asc,
                    descender: desc,
                    line_gap: gap,
                },
            })
        })
    }

    /// Glyph id for a Unicode codepoint, or `None` when the face has no
    /// mapping (the caller decides whether to substitute `.notdef`).
    pub fn glyph_id_for_char(
        &self,
        face: &ResolvedFace,
        ch: char,
    ) -> Result<Option<u16>, FontError> {
        let parsed = face.parse()?;
        Ok(parsed.glyph_index(ch).map(|gid| gid.0))
    }

    /// Extract a glyph outline as a lyon `Path` in font units.
    ///
    /// `Ok(None)` means the glyph exists but has no outline (spaces and
    /// some control glyphs); layout keeps advancing past those.
    pub fn glyph_outline_path(
        &self,
        face: &ResolvedFace,
        glyph_id: u16,
    ) -> Result<Option<Path>, FontError> {
        let parsed = face.parse()?;

        let mut builder = OutlinePathBuilder::new();
        if parsed
            .outline_glyph(ttf_parser::GlyphId(glyph_id), &mut builder)
            .is_none()
        {
            return Ok(None);
        }

        Ok(Some(builder.build()))
    }

    /// Horizontal advance for a glyph, in font units. Faces occasionally
    /// omit metrics for a glyph; those advance by zero.
    pub fn glyph_advance(&self, face: &ResolvedFace, glyph_id: u16) -> Result<f32, FontError> {
        let parsed = face.parse()?;
        Ok(parsed
            .glyph_hor_advance(ttf_parser::GlyphId(glyph_id))
            .unwrap_or(0) as f32)
    }

    /// True when any face in the database carries this family name.
    pub fn has_family(&self, family: &str) -> bool {
        self.db.faces().any(|face| {
            face.families
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case(family))
        })
    }
}

/// Converts `ttf-parser` outline callbacks into a `lyon::path::Path`.
///
/// A glyph may contain multiple contours: `move_to` starts a new one,
/// `close` ends it. A contour left open at the end is closed, since font
/// contours are always meant to be closed.
struct OutlinePathBuilder {
    builder: lyon::path::Builder,
    contour_open: bool,
}

impl OutlinePathBuilder {
    fn new() -> Self {
        Self {
            builder: Path::builder(),
            contour_open: false,
        }
    }

    fn build(mut self) -> Path {
        if self.contour_open {
            self.builder.close();
            self.contour_open = false;
        }
        self.builder.build()
    }
}

impl ttf_parser::OutlineBuilder for OutlinePathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        if self.contour_open {
            self.builder.close();
        }
        self.builder.begin(point(x, y));
        self.contour_open = true;
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(point(x, y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quadratic_bezier_to(point(x1, y1), point(x, y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder
            .cubic_bezier_to(point(x1, y1), point(x2, y2), point(x, y));
    }

    fn close(&mut self) {
        if self.contour_open {
            self.builder.close();
            self.contour_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_system_has_no_faces() {
        let fonts = FontSystem::empty();
        assert_eq!(fonts.face_count(), 0);
        assert!(!fonts.has_family("Anything"));

        let err = fonts.resolve(&FontQuery::default()).unwrap_err();
        assert!(matches!(err, FontError::NoFontsAvailable));
    }

    #[test]
    fn default_query_is_regular_serif() {
        let q = FontQuery::default();
        assert_eq!(q.weight, 400);
        assert!(!q.italic);
        assert_eq!(q.families, vec!["serif".to_string()]);
    }
}
