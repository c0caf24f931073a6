//! Phone-side settings page glue.
//!
//! The settings page returns JSON like `{"colors": 2, "inverse": true}`.
//! It is forwarded to the watch as a [`ConfigMessage`] only when it names
//! a theme; flags become 0/1.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use watchface_common::config::{KEY_COLORS, KEY_INVERSE, KEY_VIBRATE};
use watchface_common::{ConfigMessage, Settings, Theme};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct CompanionSettings {
    #[serde(default)]
    pub colors: Option<i32>,
    #[serde(default)]
    pub inverse: Option<bool>,
    #[serde(default)]
    pub vibrate: Option<bool>,
}

impl CompanionSettings {
    /// Parse the settings page response.
    pub fn from_json(json: &str) -> Result<Self> { serde_json::from_str(json).context("parsing companion settings") }

    /// What the settings page would show for the face's current settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            colors: Some(i32::from(settings.color_theme)),
            inverse: Some(settings.inverted),
            vibrate: Some(settings.vibrate_on_disconnect),
        }
    }

    /// Build the message to send, or `None` if there is no theme.
    ///
    /// A theme of 0 counts as missing.
    pub fn to_message(&self) -> Option<ConfigMessage> {
        let colors = self.colors.filter(|&c| c != 0)?;
        Some(
            ConfigMessage::new()
                .with(KEY_COLORS, colors)
                .with(KEY_INVERSE, i32::from(self.inverse == Some(true)))
                .with(KEY_VIBRATE, i32::from(self.vibrate == Some(true))),
        )
    }

    /// Advance to the next theme, wrapping after the last one.
    pub fn next_theme(&mut self) {
        let current = self
            .colors
            .and_then(|c| u8::try_from(c).ok())
            .and_then(Theme::from_index)
            .unwrap_or(Theme::Green);
        self.colors = Some(i32::from(current.next().index()));
    }

    pub fn toggle_inverse(&mut self) { self.inverse = Some(self.inverse != Some(true)); }

    pub fn toggle_vibrate(&mut self) { self.vibrate = Some(self.vibrate != Some(true)); }
}
