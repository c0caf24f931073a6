//! Color constants for the watch face.
//!
//! The watch display has a 64-color palette: every channel is one of
//! `0x00`, `0x55`, `0xAA` or `0xFF`. The constants below are those palette
//! entries expressed as `Rgb565`, converted at compile time by [`palette`].
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! A 2-bit palette level `0x55` maps to 10 (red/blue) or 21 (green).

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Convert an 8-bit-per-channel palette color into `Rgb565`.
pub const fn palette(
    r: u8,
    g: u8,
    b: u8,
) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

// =============================================================================
// Backgrounds
// =============================================================================

/// Pure black. Background when the face is not inverted.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Background when the face is inverted, grey theme hand color.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Green Theme
// =============================================================================

/// Medium spring green (0x00FFAA). Green hands.
pub const SPRING_GREEN: Rgb565 = palette(0x00, 0xFF, 0xAA);

/// Midnight green (0x005555). Green grid.
pub const MIDNIGHT_GREEN: Rgb565 = palette(0x00, 0x55, 0x55);

/// Dark green (0x005500). Green hands on a light background.
pub const DARK_GREEN: Rgb565 = palette(0x00, 0x55, 0x00);

/// Medium aquamarine (0x55FFAA). Green grid on a light background.
pub const MEDIUM_AQUAMARINE: Rgb565 = palette(0x55, 0xFF, 0xAA);

// =============================================================================
// Red Theme
// =============================================================================

/// Pure red (0xFF0000). Red hands.
pub const RED: Rgb565 = Rgb565::RED;

/// Bulgarian rose (0x550000), the darkest red. Red grid, inverted red hands.
pub const DARK_RED: Rgb565 = palette(0x55, 0x00, 0x00);

/// Melon (0xFFAAAA). Red grid on a light background.
pub const MELON: Rgb565 = palette(0xFF, 0xAA, 0xAA);

// =============================================================================
// Blue Theme
// =============================================================================

/// Blue moon (0x0055FF). Blue hands.
pub const BLUE_MOON: Rgb565 = palette(0x00, 0x55, 0xFF);

/// Oxford blue (0x000055). Blue grid, inverted blue hands.
pub const OXFORD_BLUE: Rgb565 = palette(0x00, 0x00, 0x55);

/// Baby blue eyes (0xAAAAFF). Blue grid on a light background.
pub const LIGHT_BLUE: Rgb565 = palette(0xAA, 0xAA, 0xFF);

// =============================================================================
// Grey Theme
// =============================================================================

/// Dark grey (0x555555). Grey grid, inverted grey hands.
pub const DARK_GREY: Rgb565 = palette(0x55, 0x55, 0x55);

/// Light grey (0xAAAAAA). Grey grid on a light background.
pub const LIGHT_GREY: Rgb565 = palette(0xAA, 0xAA, 0xAA);
