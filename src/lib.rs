//! `ductus` — glyph outlines as traceable, animated stroke paths.
//!
//! The crate turns a string into one fitted vector path (glyphs
//! concatenated in a caller-selectable order, scaled and centered into a
//! target rectangle) and drives a "drawn over time" reveal of that path
//! with a frame-ticked progress animator. It exists to back
//! letter/symbol-tracing quiz UIs; the host framework does the actual
//! stroking.
//!
//! The two cooperating pieces:
//! - [`shape::TextPathShape`] (on top of [`font`] and [`text`]): string +
//!   font + order -> fitted `lyon::path::Path`.
//! - [`anim::StrokeAnimator`]: elapsed frame time -> progress in `[0, 1]`
//!   (or a sliding window), which [`path::trim::trim_path`] turns into the
//!   visible segment.
//!
//! [`shape::stroke::StrokeAnimation`] bundles both for the common case;
//! [`sched::Scheduler`] covers the quiz's cancellable "reveal later"
//! actions. This crate does no rendering and keeps no global state; fonts
//! live in an explicitly owned [`font::FontSystem`].

pub mod anim;
pub mod font;
pub mod path;
pub mod sched;
pub mod shape;
pub mod text;

pub use anim::{AnimationMode, AnimatorConfigError, AnimatorState, Progress, StrokeAnimator};
pub use font::{FontError, FontQuery, FontSystem, ResolvedFace};
pub use shape::stroke::{Rgba, StrokeAnimation, StrokeStyle};
pub use shape::{EllipseShape, PathShape, RectShape, TextPathShape};
pub use text::order::{OrderMode, OrderedOutlineSet};
pub use text::{GlyphOutline, TextLayoutOptions, TextPathError, build_text_path};
