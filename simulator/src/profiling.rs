//! Frame timing and redraw counters for the debug page.
//!
//! The `DebugLog` type is in the common crate since it doesn't need time.

use std::time::{Duration, Instant};

use heapless::String;
use watchface_common::debug_log::push_u32;

/// Frame timing and render statistics for profiling.
pub struct ProfilingMetrics {
    // Frame timing (microseconds)
    pub frame_time_us: u32,
    pub render_time_us: u32,

    frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,

    // Counters
    pub total_frames: u64,
    pub face_redraws: u32,
    pub idle_frames: u32,

    start_time: Instant,
}

impl ProfilingMetrics {
    const EMA_ALPHA: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            face_redraws: 0,
            idle_frames: 0,
            start_time: Instant::now(),
        }
    }

    /// Record timing for one frame. `redrawn` is whether the face drew anything.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        redrawn: bool,
    ) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        if redrawn {
            self.face_redraws += 1;
        } else {
            self.idle_frames += 1;
        }
        self.total_frames += 1;
    }

    /// Fastest frame so far, 0 before the first frame.
    #[inline]
    pub const fn frame_time_min_us(&self) -> u32 {
        if self.total_frames == 0 { 0 } else { self.frame_time_min_us }
    }

    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    #[inline]
    pub fn uptime(&self) -> Duration { self.start_time.elapsed() }

    /// Format uptime as HH:MM:SS.
    pub fn uptime_string(&self) -> String<12> { format_hms(self.uptime().as_secs()) }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}

fn format_hms(total_secs: u64) -> String<12> {
    let mut s = String::new();
    let parts = [total_secs / 3600, (total_secs % 3600) / 60, total_secs % 60];
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            s.push(':').ok();
        }
        if part < 10 {
            s.push('0').ok();
        }
        push_u32(&mut s, part as u32);
    }
    s
}
