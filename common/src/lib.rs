//! Core of the analog "arc" watch face.
//!
//! Everything here is platform-agnostic and shared by the desktop simulator
//! and any watch host that can provide a framebuffer, a key-value store and
//! a vibration motor:
//!
//! - [`colors`]: RGB565 palette constants
//! - [`config`]: Geometry, timing and message key constants
//! - [`clock`]: 12-hour time and hand angles
//! - [`theme`]: Color themes and their inverted pairs
//! - [`geometry`]: Hand segment and arc sweep layout
//! - [`face`]: Drawing routines for both face variants
//! - [`animations`]: Startup radius animation
//! - [`settings`]: Persisted settings and configuration messages
//! - [`connectivity`]: Disconnect vibration
//! - [`render`]: Layer dirty tracking
//! - [`debug_log`]: Ring buffer of recent events
//! - [`watchface`]: Session state and event dispatch
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` compatible. Hosts supply time through
//! [`chrono::Timelike`] and storage through [`settings::PersistentStore`].

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod animations;
pub mod clock;
pub mod colors;
pub mod config;
pub mod connectivity;
pub mod debug_log;
pub mod face;
pub mod geometry;
pub mod render;
pub mod settings;
pub mod theme;
pub mod watchface;

#[cfg(test)]
mod test_display;

// Re-export commonly used items
pub use animations::{Animation, AnimationEvent};
pub use clock::{ClockTime, TickUnit};
pub use colors::*;
pub use config::*;
pub use connectivity::Vibrator;
pub use settings::{ConfigMessage, MemoryStore, PersistentStore, Settings};
pub use theme::{Theme, ThemeColors};
pub use watchface::{FaceVariant, WatchEvent, WatchFace};
