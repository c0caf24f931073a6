//! Stdout stand-ins for the vibration motor and the device log.

use watchface_common::Vibrator;
use watchface_common::debug_log::DebugLog;

/// Prints what the motor would do.
#[derive(Default)]
pub struct ConsoleVibrator {
    pub pulses: u32,
    pub patterns: u32,
}

impl Vibrator for ConsoleVibrator {
    fn short_pulse(&mut self) {
        self.pulses += 1;
        println!("[vibe] short pulse");
    }

    fn play_pattern(
        &mut self,
        segments_ms: &[u32],
    ) {
        self.patterns += 1;
        println!("[vibe] pattern {segments_ms:?}");
    }
}

/// Echoes new [`DebugLog`] lines to stdout.
#[derive(Default)]
pub struct LogMirror {
    printed: u32,
}

impl LogMirror {
    /// Lines pushed since the last call, oldest first. Lines that already
    /// fell out of the ring buffer are skipped.
    pub fn pending<'a>(
        &mut self,
        log: &'a DebugLog,
    ) -> impl Iterator<Item = &'a str> {
        let fresh = log.total().wrapping_sub(self.printed) as usize;
        self.printed = log.total();
        log.latest(fresh.min(log.len()))
    }

    pub fn print(
        &mut self,
        log: &DebugLog,
    ) {
        for line in self.pending(log) {
            println!("[log] {line}");
        }
    }
}
