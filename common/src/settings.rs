//! User settings, persistence and the configuration update protocol.
//!
//! Settings live in three integer slots of the host's persistent storage
//! (see [`KEY_COLORS`], [`KEY_INVERSE`], [`KEY_VIBRATE`]). They are read
//! once when the window loads and written back on every configuration
//! message that touches them.
//!
//! # Update Rules
//!
//! | Key | Present | Absent |
//! |-----|---------|--------|
//! | theme | stored as-is | unchanged |
//! | inversion (layered face) | `value > 0` | reset to `false` |
//! | vibrate (layered face) | `value > 0` | reset to `false` |
//!
//! The animated face only understands the theme key.

use heapless::LinearMap;

use crate::config::{KEY_COLORS, KEY_INVERSE, KEY_VIBRATE};
use crate::theme::{DEFAULT_THEME, Theme};
use crate::watchface::FaceVariant;

/// Maximum number of entries in a single configuration message.
pub const CONFIG_MESSAGE_CAPACITY: usize = 4;

// =============================================================================
// Persistent Storage
// =============================================================================

/// Host key-value storage for small integers.
///
/// Writes are fire-and-forget: there is no acknowledgement or rollback.
pub trait PersistentStore {
    /// Read a slot, `None` if it was never written.
    fn read_int(
        &self,
        key: u32,
    ) -> Option<i32>;

    /// Overwrite a slot.
    fn write_int(
        &mut self,
        key: u32,
        value: i32,
    );

    fn exists(
        &self,
        key: u32,
    ) -> bool {
        self.read_int(key).is_some()
    }

    fn read_bool(
        &self,
        key: u32,
    ) -> Option<bool> {
        self.read_int(key).map(|v| v != 0)
    }

    fn write_bool(
        &mut self,
        key: u32,
        value: bool,
    ) {
        self.write_int(key, i32::from(value));
    }
}

/// Number of slots a [`MemoryStore`] can hold.
pub const MEMORY_STORE_SLOTS: usize = 8;

/// Fixed-capacity in-memory store.
///
/// Used for tests and by hosts that persist the whole store elsewhere.
/// Writes beyond [`MEMORY_STORE_SLOTS`] distinct keys are dropped.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: LinearMap<u32, i32, MEMORY_STORE_SLOTS>,
}

impl MemoryStore {
    pub const fn new() -> Self { Self { slots: LinearMap::new() } }

    #[inline]
    pub fn len(&self) -> usize { self.slots.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.slots.is_empty() }
}

impl PersistentStore for MemoryStore {
    fn read_int(
        &self,
        key: u32,
    ) -> Option<i32> {
        self.slots.get(&key).copied()
    }

    fn write_int(
        &mut self,
        key: u32,
        value: i32,
    ) {
        self.slots.insert(key, value).ok();
    }
}

// =============================================================================
// Settings
// =============================================================================

/// User-configurable settings.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Settings {
    /// Theme index; may hold an unrecognized value (see [`Theme::from_index`]).
    pub color_theme: u8,
    /// Light background (layered face only).
    pub inverted: bool,
    /// Vibrate when the phone disconnects (layered face only).
    pub vibrate_on_disconnect: bool,
}

impl Settings {
    pub const fn new() -> Self {
        Self {
            color_theme: DEFAULT_THEME,
            inverted: false,
            vibrate_on_disconnect: false,
        }
    }

    /// Load settings, falling back to defaults for slots never written.
    ///
    /// The animated face only reads the theme slot.
    pub fn load<S: PersistentStore + ?Sized>(
        store: &S,
        variant: FaceVariant,
    ) -> Self {
        let mut settings = Self::new();
        if let Some(theme) = store.read_int(KEY_COLORS) {
            // Out-of-range slots stay unknown instead of wrapping onto a theme
            settings.color_theme = u8::try_from(theme).unwrap_or(0);
        }
        if variant == FaceVariant::Layered {
            settings.inverted = store.read_bool(KEY_INVERSE).unwrap_or(false);
            settings.vibrate_on_disconnect = store.read_bool(KEY_VIBRATE).unwrap_or(false);
        }
        settings
    }

    #[inline]
    pub const fn theme(&self) -> Option<Theme> { Theme::from_index(self.color_theme) }

    /// Apply a configuration message and persist every slot it changes.
    ///
    /// Returns what the message touched so the caller can refresh colors
    /// and log.
    pub fn apply_message<S: PersistentStore + ?Sized>(
        &mut self,
        message: &ConfigMessage,
        variant: FaceVariant,
        store: &mut S,
    ) -> SettingsUpdate {
        let mut update = SettingsUpdate::default();

        if let Some(theme) = message.get(KEY_COLORS) {
            self.color_theme = theme as u8;
            store.write_int(KEY_COLORS, i32::from(self.color_theme));
            update.theme = true;
        }

        if variant == FaceVariant::Layered {
            // Absent flags mean "off", unlike the theme
            let inverted = message.get(KEY_INVERSE).is_some_and(|v| v > 0);
            let vibrate = message.get(KEY_VIBRATE).is_some_and(|v| v > 0);

            update.inverted = inverted != self.inverted;
            update.vibrate = vibrate != self.vibrate_on_disconnect;

            self.inverted = inverted;
            self.vibrate_on_disconnect = vibrate;
            store.write_bool(KEY_INVERSE, inverted);
            store.write_bool(KEY_VIBRATE, vibrate);
        }

        update
    }
}

impl Default for Settings {
    fn default() -> Self { Self::new() }
}

/// What a configuration message changed.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct SettingsUpdate {
    /// The theme key was present (even if it carried the same value).
    pub theme: bool,
    /// The inversion flag flipped.
    pub inverted: bool,
    /// The vibrate flag flipped.
    pub vibrate: bool,
}

impl SettingsUpdate {
    /// Whether the colors need resolving again.
    #[inline]
    pub const fn colors_changed(&self) -> bool { self.theme || self.inverted }
}

// =============================================================================
// Configuration Messages
// =============================================================================

/// Key-value record delivered by the companion channel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigMessage {
    entries: LinearMap<u32, i32, CONFIG_MESSAGE_CAPACITY>,
}

impl ConfigMessage {
    pub const fn new() -> Self {
        Self {
            entries: LinearMap::new(),
        }
    }

    /// Builder-style [`ConfigMessage::insert`].
    #[must_use]
    pub fn with(
        mut self,
        key: u32,
        value: i32,
    ) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a key, replacing any previous value. Keys past capacity are dropped.
    pub fn insert(
        &mut self,
        key: u32,
        value: i32,
    ) {
        self.entries.insert(key, value).ok();
    }

    #[inline]
    pub fn get(
        &self,
        key: u32,
    ) -> Option<i32> {
        self.entries.get(&key).copied()
    }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeColors;
    use crate::colors::{BLUE_MOON, OXFORD_BLUE};

    // -------------------------------------------------------------------------
    // Store Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_memory_store_read_write() {
        let mut store = MemoryStore::new();
        assert!(!store.exists(KEY_COLORS), "Fresh store is empty");
        store.write_int(KEY_COLORS, 3);
        assert_eq!(store.read_int(KEY_COLORS), Some(3));
        store.write_int(KEY_COLORS, 4);
        assert_eq!(store.read_int(KEY_COLORS), Some(4), "Writes overwrite");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_bools() {
        let mut store = MemoryStore::new();
        store.write_bool(KEY_INVERSE, true);
        assert_eq!(store.read_int(KEY_INVERSE), Some(1), "true is stored as 1");
        assert_eq!(store.read_bool(KEY_INVERSE), Some(true));
        assert_eq!(store.read_bool(KEY_VIBRATE), None);
    }

    #[test]
    fn test_memory_store_capacity() {
        let mut store = MemoryStore::new();
        for key in 0..(MEMORY_STORE_SLOTS as u32 + 2) {
            store.write_int(key, 1);
        }
        assert_eq!(store.len(), MEMORY_STORE_SLOTS, "Extra keys are dropped");
    }

    // -------------------------------------------------------------------------
    // Loading
    // -------------------------------------------------------------------------

    #[test]
    fn test_load_defaults_on_first_run() {
        let store = MemoryStore::new();
        for variant in [FaceVariant::Animated, FaceVariant::Layered] {
            let settings = Settings::load(&store, variant);
            assert_eq!(settings, Settings::new(), "{variant:?} should use defaults");
            assert_eq!(settings.theme(), Some(Theme::Green), "Default theme is green");
        }
    }

    #[test]
    fn test_theme_survives_restart() {
        let mut store = MemoryStore::new();
        let mut settings = Settings::load(&store, FaceVariant::Animated);
        settings.apply_message(&ConfigMessage::new().with(KEY_COLORS, 3), FaceVariant::Animated, &mut store);

        // Simulated restart: nothing but the store carries over
        let reloaded = Settings::load(&store, FaceVariant::Animated);
        assert_eq!(reloaded.color_theme, 3);
        let colors = ThemeColors::resolve(reloaded.color_theme, reloaded.inverted);
        assert_eq!((colors.hand, colors.trim), (BLUE_MOON, OXFORD_BLUE), "Theme 3 is blue");
    }

    #[test]
    fn test_animated_face_ignores_stored_flags() {
        let mut store = MemoryStore::new();
        store.write_bool(KEY_INVERSE, true);
        store.write_bool(KEY_VIBRATE, true);
        let settings = Settings::load(&store, FaceVariant::Animated);
        assert!(!settings.inverted && !settings.vibrate_on_disconnect);
        let settings = Settings::load(&store, FaceVariant::Layered);
        assert!(settings.inverted && settings.vibrate_on_disconnect);
    }

    // -------------------------------------------------------------------------
    // Update Protocol
    // -------------------------------------------------------------------------

    #[test]
    fn test_absent_theme_is_preserved() {
        let mut store = MemoryStore::new();
        let mut settings = Settings::new();
        settings.apply_message(&ConfigMessage::new().with(KEY_COLORS, 2), FaceVariant::Layered, &mut store);
        let update = settings.apply_message(&ConfigMessage::new().with(KEY_INVERSE, 1), FaceVariant::Layered, &mut store);
        assert!(!update.theme, "Theme key was absent");
        assert_eq!(settings.color_theme, 2, "Theme should be unchanged");
        assert_eq!(store.read_int(KEY_COLORS), Some(2));
    }

    #[test]
    fn test_theme_only_message_clears_flags() {
        let mut store = MemoryStore::new();
        let mut settings = Settings::new();
        let on = ConfigMessage::new().with(KEY_INVERSE, 1).with(KEY_VIBRATE, 1);
        settings.apply_message(&on, FaceVariant::Layered, &mut store);
        assert!(settings.inverted && settings.vibrate_on_disconnect);

        let update = settings.apply_message(&ConfigMessage::new().with(KEY_COLORS, 4), FaceVariant::Layered, &mut store);
        assert!(!settings.inverted, "Missing inversion key turns inversion off");
        assert!(!settings.vibrate_on_disconnect, "Missing vibrate key turns vibration off");
        assert!(update.inverted && update.vibrate, "Both flags flipped");
        assert_eq!(store.read_bool(KEY_INVERSE), Some(false), "Cleared flag is persisted");
        assert_eq!(store.read_bool(KEY_VIBRATE), Some(false), "Cleared flag is persisted");
    }

    #[test]
    fn test_flag_values() {
        let mut store = MemoryStore::new();
        let mut settings = Settings::new();
        settings.apply_message(&ConfigMessage::new().with(KEY_INVERSE, 0), FaceVariant::Layered, &mut store);
        assert!(!settings.inverted, "0 means off");
        settings.apply_message(&ConfigMessage::new().with(KEY_INVERSE, 5), FaceVariant::Layered, &mut store);
        assert!(settings.inverted, "Any positive value means on");
        settings.apply_message(&ConfigMessage::new().with(KEY_INVERSE, -1), FaceVariant::Layered, &mut store);
        assert!(!settings.inverted, "Negative values are not positive");
    }

    #[test]
    fn test_animated_face_ignores_flag_keys() {
        let mut store = MemoryStore::new();
        let mut settings = Settings::new();
        let msg = ConfigMessage::new().with(KEY_INVERSE, 1).with(KEY_VIBRATE, 1);
        let update = settings.apply_message(&msg, FaceVariant::Animated, &mut store);
        assert_eq!(update, SettingsUpdate::default(), "Nothing changes on the animated face");
        assert!(store.is_empty(), "Nothing is persisted");
    }

    #[test]
    fn test_out_of_range_stored_theme_is_unknown() {
        let mut store = MemoryStore::new();
        store.write_int(KEY_COLORS, 259);
        let settings = Settings::load(&store, FaceVariant::Layered);
        assert_eq!(settings.theme(), None, "259 must not wrap onto blue");

        let mut colors = ThemeColors::new();
        colors.apply(settings.color_theme, settings.inverted);
        assert_eq!(colors, ThemeColors::new(), "Unknown stored theme keeps the default colors");
    }

    #[test]
    fn test_unknown_theme_is_stored() {
        let mut store = MemoryStore::new();
        let mut settings = Settings::new();
        settings.apply_message(&ConfigMessage::new().with(KEY_COLORS, 7), FaceVariant::Animated, &mut store);
        assert_eq!(settings.color_theme, 7, "Index is stored without validation");
        assert_eq!(settings.theme(), None);
    }

    #[test]
    fn test_config_message_replaces_keys() {
        let msg = ConfigMessage::new().with(KEY_COLORS, 1).with(KEY_COLORS, 2);
        assert_eq!(msg.get(KEY_COLORS), Some(2));
        assert_eq!(msg.get(KEY_VIBRATE), None);
        assert!(ConfigMessage::new().is_empty());
    }
}
