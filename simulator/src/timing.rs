//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the common crate.

use std::time::Duration;

/// Target frame time (~50 FPS). The window loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Simulated time step between headless frames, in milliseconds.
pub const HEADLESS_FRAME_MS: u32 = 20;

/// Save every n-th headless animation frame.
pub const HEADLESS_FRAME_STRIDE: u32 = 5;

/// Upper bound on headless frames, in case an animation never finishes.
pub const HEADLESS_MAX_FRAMES: u32 = 500;
