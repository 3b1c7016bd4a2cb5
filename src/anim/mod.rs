//! Stroke progress animation.
//!
//! A [`StrokeAnimator`] is a small state machine holding how much of a path
//! has been "drawn". It is advanced once per display refresh with the
//! elapsed wall-clock time; the host trims the path with the resulting
//! progress and strokes the trimmed segment.
//!
//! Design:
//! - Keep it deterministic: progress moves only through [`StrokeAnimator::tick`],
//!   by `elapsed / total_duration`. No internal clock, no easing.
//! - Exactly one owner mutates it, from the render/update pass. There is no
//!   locking because there is nothing to lock.
//! - Configuration is validated at construction; after that the animator
//!   never errors. A tick that arrives after completion, or while paused,
//!   is a no-op.
//!
//! Two modes:
//! - [`AnimationMode::ProgressiveDraw`]: a fraction in `[0, 1]` revealing
//!   the path from its start; clamps to exactly `1.0` and completes.
//! - [`AnimationMode::FixedRatioMove`]: a constant-length window
//!   `(from, to)` sliding along the path, starting at `(-ratio, 0)`. It
//!   never completes on its own; it models a moving highlight, and the host
//!   bounds total play time or loops via [`StrokeAnimator::reset`].

use std::time::Duration;

/// What kind of reveal the animator drives.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AnimationMode {
    /// Reveal the path from the start; completes at 1.0.
    ProgressiveDraw,
    /// Slide a window whose length is `stroke_ratio` of the path.
    FixedRatioMove { stroke_ratio: f32 },
}

/// Current progress value, as the host should apply it to a trim.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Progress {
    /// Reveal `[0, fraction]`.
    Fraction(f32),
    /// Reveal `[from, to]`; either edge may be outside `[0, 1]` while the
    /// window slides in or out (the trim clamps).
    Window { from: f32, to: f32 },
}

/// Observable animator state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnimatorState {
    /// At the initial value, no tick applied yet.
    Idle,
    Running,
    Paused,
    /// Progressive draw reached exactly 1.0.
    Completed,
}

/// Construction-time configuration errors. The animator itself never
/// raises; everything rejectable is rejected here.
#[derive(Debug, thiserror::Error)]
pub enum AnimatorConfigError {
    #[error("animation duration must be positive (got {0:?})")]
    NonPositiveDuration(Duration),

    #[error("stroke length ratio must be positive (got {0})")]
    NonPositiveRatio(f32),
}

/// Frame-driven progress state machine.
#[derive(Debug, Clone)]
pub struct StrokeAnimator {
    mode: AnimationMode,
    total_secs: f32,
    progress: Progress,
    paused: bool,
    ticked: bool,
}

impl StrokeAnimator {
    /// Create an animator that plays over `total_duration`.
    pub fn new(mode: AnimationMode, total_duration: Duration) -> Result<Self, AnimatorConfigError> {
        let total_secs = total_duration.as_secs_f32();
        if !(total_secs > 0.0) {
            return Err(AnimatorConfigError::NonPositiveDuration(total_duration));
        }
        if let AnimationMode::FixedRatioMove { stroke_ratio } = mode {
            if !(stroke_ratio > 0.0) {
                return Err(AnimatorConfigError::NonPositiveRatio(stroke_ratio));
            }
        }

        Ok(Self {
            mode,
            total_secs,
            progress: Self::initial_progress(mode),
            paused: false,
            ticked: false,
        })
    }

    fn initial_progress(mode: AnimationMode) -> Progress {
        match mode {
            AnimationMode::ProgressiveDraw => Progress::Fraction(0.0),
            AnimationMode::FixedRatioMove { stroke_ratio } => Progress::Window {
                from: -stroke_ratio,
                to: 0.0,
            },
        }
    }

    #[inline]
    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    #[inline]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// True once a progressive draw has reached 1.0. A fixed-ratio window
    /// never completes.
    pub fn is_completed(&self) -> bool {
        matches!(self.progress, Progress::Fraction(p) if p >= 1.0)
    }

    pub fn state(&self) -> AnimatorState {
        if self.is_completed() {
            AnimatorState::Completed
        } else if self.paused {
            AnimatorState::Paused
        } else if !self.ticked {
            AnimatorState::Idle
        } else {
            AnimatorState::Running
        }
    }

    /// Advance by a frame's elapsed wall-clock time.
    ///
    /// No-op while paused and after completion; the guard means a stray
    /// late tick can neither push progress past 1.0 nor restart motion.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.paused || self.is_completed() {
            return;
        }

        let delta = elapsed.as_secs_f32() / self.total_secs;
        self.ticked = true;

        match &mut self.progress {
            Progress::Fraction(p) => {
                *p = (*p + delta).min(1.0);
            }
            Progress::Window { from, to } => {
                *from += delta;
                *to += delta;
            }
        }
    }

    /// Stop ticks from having effect. The stored progress is untouched.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Flip paused/running; the play/stop button and the space key both
    /// funnel here.
    pub fn toggle(&mut self) {
        self.paused = !self.paused;
    }

    /// Back to the mode's initial value: `0`, or `(-ratio, 0)`.
    ///
    /// Clears completion so the animation can play again. The paused flag
    /// is left alone; pausing is a host intent, not part of the playhead.
    pub fn reset(&mut self) {
        self.progress = Self::initial_progress(self.mode);
        self.ticked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    fn progressive(total_s: f32) -> StrokeAnimator {
        StrokeAnimator::new(AnimationMode::ProgressiveDraw, secs(total_s)).unwrap()
    }

    fn fraction(animator: &StrokeAnimator) -> f32 {
        match animator.progress() {
            Progress::Fraction(p) => p,
            other => panic!("expected a fraction, got {other:?}"),
        }
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = StrokeAnimator::new(AnimationMode::ProgressiveDraw, Duration::ZERO).unwrap_err();
        assert!(matches!(err, AnimatorConfigError::NonPositiveDuration(_)));
    }

    #[test]
    fn zero_ratio_is_rejected() {
        let err = StrokeAnimator::new(
            AnimationMode::FixedRatioMove { stroke_ratio: 0.0 },
            secs(10.0),
        )
        .unwrap_err();
        assert!(matches!(err, AnimatorConfigError::NonPositiveRatio(_)));
    }

    #[test]
    fn ab_drawing_sequence() {
        // The end-to-end progression for a two-glyph string over 10s.
        let mut a = progressive(10.0);
        assert_eq!(a.state(), AnimatorState::Idle);

        a.tick(secs(5.0));
        assert!((fraction(&a) - 0.5).abs() < 1e-6);
        assert_eq!(a.state(), AnimatorState::Running);

        a.tick(secs(10.0));
        assert_eq!(fraction(&a), 1.0);
        assert_eq!(a.state(), AnimatorState::Completed);

        a.reset();
        assert_eq!(fraction(&a), 0.0);
        assert_eq!(a.state(), AnimatorState::Idle);
    }

    #[test]
    fn overshoot_clamps_to_exactly_one() {
        let mut a = progressive(2.0);
        a.tick(secs(100.0));
        assert_eq!(fraction(&a), 1.0);

        // A stray late tick neither exceeds 1.0 nor restarts motion.
        a.tick(secs(100.0));
        assert_eq!(fraction(&a), 1.0);
        assert_eq!(a.state(), AnimatorState::Completed);
    }

    #[test]
    fn progress_is_monotonic_while_running() {
        let mut a = progressive(1.0);
        let mut last = fraction(&a);
        for _ in 0..50 {
            a.tick(secs(0.03));
            let now = fraction(&a);
            assert!(now >= last);
            assert!(now <= 1.0);
            last = now;
        }
    }

    #[test]
    fn paused_ticks_change_nothing() {
        let mut a = progressive(10.0);
        a.tick(secs(2.0));
        let before = fraction(&a);

        a.pause();
        assert_eq!(a.state(), AnimatorState::Paused);
        a.tick(secs(5.0));
        a.tick(secs(5.0));
        assert_eq!(fraction(&a), before);

        a.resume();
        a.tick(secs(1.0));
        assert!(fraction(&a) > before);
    }

    #[test]
    fn toggle_flips_pause() {
        let mut a = progressive(10.0);
        a.toggle();
        assert!(a.is_paused());
        a.toggle();
        assert!(!a.is_paused());
    }

    #[test]
    fn reset_is_idempotent_from_any_state() {
        let mut a = progressive(1.0);
        a.tick(secs(0.4));
        a.pause();
        a.reset();
        assert_eq!(fraction(&a), 0.0);

        a.reset();
        assert_eq!(fraction(&a), 0.0);
    }

    #[test]
    fn window_starts_behind_and_never_completes() {
        let ratio = 0.05;
        let mut a = StrokeAnimator::new(
            AnimationMode::FixedRatioMove {
                stroke_ratio: ratio,
            },
            secs(10.0),
        )
        .unwrap();

        match a.progress() {
            Progress::Window { from, to } => {
                assert_eq!(from, -ratio);
                assert_eq!(to, 0.0);
            }
            other => panic!("expected a window, got {other:?}"),
        }

        // The window keeps sliding past the end of the path.
        a.tick(secs(30.0));
        match a.progress() {
            Progress::Window { from, to } => {
                assert!((to - from - ratio).abs() < 1e-5);
                assert!(to > 1.0);
            }
            other => panic!("expected a window, got {other:?}"),
        }
        assert!(!a.is_completed());
        assert_eq!(a.state(), AnimatorState::Running);

        a.reset();
        assert_eq!(
            a.progress(),
            Progress::Window {
                from: -ratio,
                to: 0.0
            }
        );
    }
}
