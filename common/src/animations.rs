//! Startup animation driver.
//!
//! The animated face grows its radius from 0 to [`FINAL_RADIUS`] once per
//! launch. This module models the host's animation service:
//!
//! 1. An [`Animation`] is scheduled with a duration, delay and curve
//! 2. The host polls it with the elapsed time since scheduling
//! 3. Each poll yields [`AnimationEvent`]s: `Started` once, `Progress` on
//!    every step, `Stopped` once when the curve reaches the end
//!
//! Progress is normalized to `0..=ANIMATION_NORMALIZED_MAX` and already has
//! the easing curve applied, so consumers only scale it.
//!
//! # Easing
//!
//! ```text
//! ease_in_out(t) = 2t^2             for t < 1/2
//!                = 1 - 2(1 - t)^2   otherwise
//! ```
//!
//! Computed in fixed point so the curve is exact at both ends and never
//! decreases.

use heapless::Vec;

use crate::config::{ANIMATION_DELAY_MS, ANIMATION_DURATION_MS, ANIMATION_NORMALIZED_MAX, FINAL_RADIUS};

const MAX: u64 = ANIMATION_NORMALIZED_MAX as u64;

// =============================================================================
// Curves
// =============================================================================

/// Timing curve applied to linear progress.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Curve {
    Linear,
    EaseInOut,
}

impl Curve {
    /// Map normalized linear progress through the curve.
    pub fn apply(
        self,
        progress: u32,
    ) -> u32 {
        let t = u64::from(progress).min(MAX);
        let eased = match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < MAX / 2 {
                    2 * t * t / MAX
                } else {
                    let rest = MAX - t;
                    MAX - 2 * rest * rest / MAX
                }
            }
        };
        eased as u32
    }
}

// =============================================================================
// Animation
// =============================================================================

/// Callback delivered by [`Animation::poll`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AnimationEvent {
    Started,
    /// Curved progress in `0..=ANIMATION_NORMALIZED_MAX`.
    Progress(u32),
    Stopped,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    Scheduled,
    Running,
    Finished,
}

/// One-shot animation, polled with the time elapsed since it was scheduled.
#[derive(Clone, Debug)]
pub struct Animation {
    duration_ms: u32,
    delay_ms: u32,
    curve: Curve,
    phase: Phase,
}

impl Animation {
    pub const fn new(
        duration_ms: u32,
        delay_ms: u32,
        curve: Curve,
    ) -> Self {
        Self {
            duration_ms,
            delay_ms,
            curve,
            phase: Phase::Scheduled,
        }
    }

    /// The radius growth played when the face launches.
    pub const fn startup() -> Self { Self::new(ANIMATION_DURATION_MS, ANIMATION_DELAY_MS, Curve::EaseInOut) }

    /// Advance to `elapsed_ms` and return the callbacks that fire.
    ///
    /// Once finished, further polls return nothing.
    pub fn poll(
        &mut self,
        elapsed_ms: u32,
    ) -> Vec<AnimationEvent, 3> {
        let mut events = Vec::new();

        if self.phase == Phase::Finished || elapsed_ms < self.delay_ms {
            return events;
        }

        if self.phase == Phase::Scheduled {
            self.phase = Phase::Running;
            events.push(AnimationEvent::Started).ok();
        }

        let running_ms = u64::from(elapsed_ms - self.delay_ms);
        let linear = if self.duration_ms == 0 {
            MAX
        } else {
            (running_ms * MAX / u64::from(self.duration_ms)).min(MAX)
        };
        events.push(AnimationEvent::Progress(self.curve.apply(linear as u32))).ok();

        if linear >= MAX {
            self.phase = Phase::Finished;
            events.push(AnimationEvent::Stopped).ok();
        }

        events
    }

    #[inline]
    pub fn is_finished(&self) -> bool { self.phase == Phase::Finished }

    #[inline]
    pub fn is_running(&self) -> bool { self.phase == Phase::Running }
}

/// Scale normalized progress to a radius in `0..=FINAL_RADIUS`, truncating.
#[inline]
pub fn radius_for_progress(progress: u32) -> i32 {
    (u64::from(progress).min(MAX) * FINAL_RADIUS as u64 / MAX) as i32
}
