//! Phone connection watcher and haptic output.
//!
//! The layered face alerts the wearer when the phone disconnects by playing
//! [`DISCONNECT_VIBE_PATTERN`], if vibrate-on-disconnect is enabled. Every
//! disconnect event triggers the pattern, including repeated ones; reconnects
//! never vibrate.

use crate::config::DISCONNECT_VIBE_PATTERN;

/// Host vibration motor.
pub trait Vibrator {
    /// Short single buzz.
    fn short_pulse(&mut self);

    /// Play alternating buzz / pause segments, durations in milliseconds.
    fn play_pattern(
        &mut self,
        segments_ms: &[u32],
    );
}

/// Tracks the last reported connection state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ConnectionWatcher {
    connected: bool,
}

impl ConnectionWatcher {
    /// Start out assuming the phone is connected.
    pub const fn new() -> Self { Self { connected: true } }

    #[inline]
    pub const fn is_connected(&self) -> bool { self.connected }

    /// Record a connection event.
    ///
    /// Returns the pattern to play, if any.
    pub fn on_change(
        &mut self,
        connected: bool,
        vibrate_on_disconnect: bool,
    ) -> Option<&'static [u32]> {
        self.connected = connected;
        (!connected && vibrate_on_disconnect).then_some(&DISCONNECT_VIBE_PATTERN[..])
    }
}

impl Default for ConnectionWatcher {
    fn default() -> Self { Self::new() }
}
