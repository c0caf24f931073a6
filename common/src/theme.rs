//! Color theme resolution.
//!
//! A theme index selects a hand color and a trim (grid) color. Inversion
//! switches to a light background and a darker hand / lighter trim pairing
//! per theme, rather than simply swapping the two.
//!
//! | Index | Theme | Hand / Trim | Inverted Hand / Trim |
//! |-------|-------|-------------|----------------------|
//! | 1 | Green | spring green / midnight green | dark green / medium aquamarine |
//! | 2 | Red | red / dark red | dark red / melon |
//! | 3 | Blue | blue moon / oxford blue | oxford blue / light blue |
//! | 4 | Grey | white / dark grey | dark grey / light grey |

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{
    BLACK,
    BLUE_MOON,
    DARK_GREEN,
    DARK_GREY,
    DARK_RED,
    LIGHT_BLUE,
    LIGHT_GREY,
    MEDIUM_AQUAMARINE,
    MELON,
    MIDNIGHT_GREEN,
    OXFORD_BLUE,
    RED,
    SPRING_GREEN,
    WHITE,
};

/// Theme index used when nothing is stored.
pub const DEFAULT_THEME: u8 = 1;

/// Known color themes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Green,
    Red,
    Blue,
    Grey,
}

impl Theme {
    /// Look up a theme by its stored index. Unknown indices return `None`.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Green),
            2 => Some(Self::Red),
            3 => Some(Self::Blue),
            4 => Some(Self::Grey),
            _ => None,
        }
    }

    /// Stored index of this theme.
    pub const fn index(self) -> u8 {
        match self {
            Self::Green => 1,
            Self::Red => 2,
            Self::Blue => 3,
            Self::Grey => 4,
        }
    }

    /// Next theme in index order, wrapping from grey back to green.
    pub const fn next(self) -> Self {
        match self {
            Self::Green => Self::Red,
            Self::Red => Self::Blue,
            Self::Blue => Self::Grey,
            Self::Grey => Self::Green,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Grey => "grey",
        }
    }

    /// `(hand, trim)` colors for this theme.
    pub const fn pair(
        self,
        inverted: bool,
    ) -> (Rgb565, Rgb565) {
        match (self, inverted) {
            (Self::Green, false) => (SPRING_GREEN, MIDNIGHT_GREEN),
            (Self::Green, true) => (DARK_GREEN, MEDIUM_AQUAMARINE),
            (Self::Red, false) => (RED, DARK_RED),
            (Self::Red, true) => (DARK_RED, MELON),
            (Self::Blue, false) => (BLUE_MOON, OXFORD_BLUE),
            (Self::Blue, true) => (OXFORD_BLUE, LIGHT_BLUE),
            (Self::Grey, false) => (WHITE, DARK_GREY),
            (Self::Grey, true) => (DARK_GREY, LIGHT_GREY),
        }
    }
}

/// Resolved colors consumed by the draw routine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ThemeColors {
    pub background: Rgb565,
    pub hand: Rgb565,
    pub trim: Rgb565,
}

impl ThemeColors {
    /// Colors shown before any theme has been applied (green on black).
    pub const fn new() -> Self {
        Self {
            background: BLACK,
            hand: SPRING_GREEN,
            trim: MIDNIGHT_GREEN,
        }
    }

    /// Apply a theme index and inversion flag.
    ///
    /// The background always follows `inverted`. Hand and trim colors are
    /// only replaced for a known theme index; an unknown index keeps the
    /// previous pair. Returns `true` if the index was recognized.
    pub fn apply(
        &mut self,
        index: u8,
        inverted: bool,
    ) -> bool {
        self.background = if inverted { WHITE } else { BLACK };
        match Theme::from_index(index) {
            Some(theme) => {
                (self.hand, self.trim) = theme.pair(inverted);
                true
            }
            None => false,
        }
    }

    /// Colors for a theme index starting from the defaults.
    pub fn resolve(
        index: u8,
        inverted: bool,
    ) -> Self {
        let mut colors = Self::new();
        colors.apply(index, inverted);
        colors
    }
}

impl Default for ThemeColors {
    fn default() -> Self { Self::new() }
}
