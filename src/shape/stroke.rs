//! Shape + animator + style, assembled into a per-frame unit.
//!
//! [`StrokeAnimation`] owns everything one animated stroke needs: the shape
//! being traced, the progress animator, and how the host should paint the
//! trimmed segment. The host calls [`StrokeAnimation::frame`] once per
//! display refresh with the elapsed time and the current layout rectangle,
//! and strokes whatever path comes back. Any path-building error means
//! "nothing to draw this frame", never a crash.

use std::time::Duration;

use lyon::math::Box2D;
use lyon::path::Path;

use crate::anim::{Progress, StrokeAnimator};
use crate::path::trim::trim_path;
use crate::shape::PathShape;
use crate::text::TextPathError;

/// Simple RGBA color, linear components in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
}

/// How the host should paint the trimmed segment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeStyle {
    pub line_width: f32,
    pub color: Rgba,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            color: Rgba::BLACK,
        }
    }
}

/// One animated stroke: shape, animator, style.
pub struct StrokeAnimation {
    shape: Box<dyn PathShape>,
    pub animator: StrokeAnimator,
    pub style: StrokeStyle,

    // The fitted path is a pure function of the rect; rebuilt only when the
    // layout size changes.
    cached: Option<(Box2D, Path)>,
}

impl StrokeAnimation {
    pub fn new(shape: Box<dyn PathShape>, animator: StrokeAnimator, style: StrokeStyle) -> Self {
        Self {
            shape,
            animator,
            style,
            cached: None,
        }
    }

    /// Advance by one frame and return the path segment to stroke.
    ///
    /// `Ok(None)` means there is nothing to draw this frame (progress still
    /// at zero, or the window entirely off the path); the host skips the
    /// stroke and keeps ticking. Errors are the builder's fail-fast cases
    /// (degenerate text, unresolvable font); the host should treat them the
    /// same way, as "nothing to draw".
    pub fn frame(
        &mut self,
        rect: Box2D,
        elapsed: Duration,
    ) -> Result<Option<Path>, TextPathError> {
        self.animator.tick(elapsed);
        self.trimmed(rect)
    }

    /// The trimmed segment at the current progress, without ticking.
    pub fn trimmed(&mut self, rect: Box2D) -> Result<Option<Path>, TextPathError> {
        let (from, to) = match self.animator.progress() {
            Progress::Fraction(p) => (0.0, p),
            Progress::Window { from, to } => (from, to),
        };

        let full = self.full_path(rect)?;
        let trimmed = trim_path(full, from, to);
        if trimmed.iter().next().is_none() {
            return Ok(None);
        }
        Ok(Some(trimmed))
    }

    /// Rewind the animation to its initial progress. The fitted path cache
    /// is kept; the shape did not change.
    pub fn restart(&mut self) {
        self.animator.reset();
    }

    fn full_path(&mut self, rect: Box2D) -> Result<&Path, TextPathError> {
        let stale = match &self.cached {
            Some((cached_rect, _)) => *cached_rect != rect,
            None => true,
        };
        if stale {
            let path = self.shape.path(rect)?;
            self.cached = Some((rect, path));
        }

        match &self.cached {
            Some((_, path)) => Ok(path),
            None => unreachable!("cache filled on the stale branch"),
        }
    }
}
