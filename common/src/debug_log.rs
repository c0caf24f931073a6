//! Debug log ring buffer.
//!
//! Every state change of the face (settings, connection, animation) pushes
//! a short line here. Hosts can mirror new lines to their own output and the
//! simulator shows the buffer on its debug page.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! log.push("Face loaded");
//!
//! let mut line: String<LOG_LINE_LENGTH> = String::new();
//! line.push_str("Theme: ").ok();
//! push_u32(&mut line, 3);
//! log.push(&line);
//! ```

use heapless::{Deque, String};

/// Maximum number of log lines to keep in the ring buffer.
pub const LOG_BUFFER_SIZE: usize = 8;

/// Maximum characters per log line.
pub const LOG_LINE_LENGTH: usize = 32;

/// Ring buffer for debug log messages.
///
/// Old messages are dropped when the buffer is full. [`DebugLog::total`]
/// keeps counting so hosts can tell which lines are new.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
    total: u32,
}

impl DebugLog {
    pub const fn new() -> Self {
        Self {
            buffer: Deque::new(),
            total: 0,
        }
    }

    /// Push a log message, truncated to fit a line.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }

        self.buffer.push_back(line).ok();
        self.total = self.total.wrapping_add(1);
    }

    /// Iterate over log messages (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    /// The most recent `count` lines, oldest first.
    pub fn latest(
        &self,
        count: usize,
    ) -> impl Iterator<Item = &str> {
        self.iter().skip(self.buffer.len().saturating_sub(count))
    }

    /// Number of messages ever pushed.
    #[inline]
    pub const fn total(&self) -> u32 { self.total }

    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

/// Build a log line from a label and a number without `format!`.
pub fn labeled_u32(
    label: &str,
    val: u32,
) -> String<LOG_LINE_LENGTH> {
    let mut line = String::new();
    line.push_str(label).ok();
    push_u32(&mut line, val);
    line
}

/// Push a u32 value to a heapless string (no format! macro).
pub fn push_u32<const N: usize>(
    s: &mut String<N>,
    mut val: u32,
) {
    if val == 0 {
        s.push('0').ok();
        return;
    }

    let mut digits = [0u8; 10];
    let mut i = 0;
    while val > 0 {
        digits[i] = (val % 10) as u8;
        val /= 10;
        i += 1;
    }

    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
    }
}
