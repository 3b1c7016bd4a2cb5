//! Glyph visiting order.
//!
//! The drawn-stroke effect reveals the path from its start, so the order in
//! which glyph outlines are concatenated decides the order they get traced:
//! left-to-right for reading practice, shuffled for a guessing quiz.
//!
//! `Random` picks its permutation once, at construction. Callers that need
//! the same order to survive a re-layout (window resize mid-animation) read
//! it back via [`OrderedOutlineSet::order`] and re-supply it as
//! [`OrderMode::Explicit`].

use rand::seq::SliceRandom;

use lyon::math::Box2D;
use lyon::path::Path;

use crate::path::{Affine2x3, append_transformed};
use crate::text::{GlyphOutline, TextPathError, fit};

/// How to visit glyphs when concatenating their outlines.
#[derive(Debug, Clone)]
pub enum OrderMode {
    /// Original string order.
    Standard,
    /// A uniformly random permutation, chosen once.
    Random,
    /// A caller-supplied permutation of `0..N`.
    Explicit(Vec<usize>),
}

impl OrderMode {
    /// Produce the index sequence for `len` glyphs.
    ///
    /// `Random` refuses an empty glyph set: there is no permutation to
    /// pick, and downstream there would be nothing to draw anyway.
    /// `Explicit` orders are validated for length, range and uniqueness
    /// instead of being trusted at indexing time.
    pub fn indices(&self, len: usize) -> Result<Vec<usize>, TextPathError> {
        match self {
            OrderMode::Standard => Ok((0..len).collect()),
            OrderMode::Random => {
                if len == 0 {
                    return Err(TextPathError::NoGlyphs);
                }
                let mut order: Vec<usize> = (0..len).collect();
                order.shuffle(&mut rand::rng());
                Ok(order)
            }
            OrderMode::Explicit(order) => {
                validate_permutation(order, len)?;
                Ok(order.clone())
            }
        }
    }
}

fn validate_permutation(order: &[usize], len: usize) -> Result<(), TextPathError> {
    if order.len() != len {
        return Err(TextPathError::InvalidOrder {
            expected: len,
            reason: format!("has length {}", order.len()),
        });
    }

    let mut seen = vec![false; len];
    for &i in order {
        if i >= len {
            return Err(TextPathError::InvalidOrder {
                expected: len,
                reason: format!("contains out-of-range index {i}"),
            });
        }
        if seen[i] {
            return Err(TextPathError::InvalidOrder {
                expected: len,
                reason: format!("repeats index {i}"),
            });
        }
        seen[i] = true;
    }

    Ok(())
}

/// Glyph outlines paired with a validated visiting order.
///
/// Invariant: `order` is a permutation of `0..outlines.len()`.
#[derive(Debug, Clone)]
pub struct OrderedOutlineSet {
    outlines: Vec<GlyphOutline>,
    order: Vec<usize>,
}

impl OrderedOutlineSet {
    pub fn new(outlines: Vec<GlyphOutline>, mode: &OrderMode) -> Result<Self, TextPathError> {
        let order = mode.indices(outlines.len())?;
        Ok(Self { outlines, order })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.outlines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outlines.is_empty()
    }

    /// The visiting order actually in effect. Re-supply this as
    /// [`OrderMode::Explicit`] to reproduce a random order later.
    #[inline]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    #[inline]
    pub fn outlines(&self) -> &[GlyphOutline] {
        &self.outlines
    }

    /// Concatenate the outlines in visiting order, each translated to its
    /// pen position. Still in layout space (pt, Y-up, baseline at y = 0).
    pub fn assembled_path(&self) -> Path {
        let mut builder = Path::builder();
        for &i in &self.order {
            let glyph = &self.outlines[i];
            append_transformed(
                &mut builder,
                &glyph.outline,
                Affine2x3::translate(glyph.pen.x, glyph.pen.y),
            );
        }
        builder.build()
    }

    /// Assemble and fit into a target rectangle: uniform scale, centered,
    /// vertical axis flipped to the target's Y-down convention.
    pub fn fitted_path(&self, rect: Box2D) -> Result<Path, TextPathError> {
        fit::fit_path_into(&self.assembled_path(), rect)
    }
}
