//! Watch face configuration constants.
//!
//! Layout values are compile-time constants derived from the 180x180 round
//! display, so the draw routine never recomputes them per frame.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 180;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 180;

// =============================================================================
// Face Geometry
// =============================================================================

/// Radius the startup animation grows to (and the fixed radius afterwards).
pub const FINAL_RADIUS: i32 = 88;

/// Stroke width of both hands and of the connecting arc band.
pub const HAND_WIDTH: u32 = 6;

/// Gap between the hand tips and the animated radius.
pub const HAND_MARGIN_OUTER: i32 = 16;

/// Distance from the center where the hands start.
pub const HAND_MARGIN_INNER: i32 = 50;

/// Fraction of the radius the hour hand is shorter than the minute hand.
pub const HOUR_HAND_SHRINK: f32 = 0.35;

/// Grid pitch in pixels, both directions.
pub const GRID_SPACING: u32 = 18;

/// Inset from the screen bounds of the circle carrying the variant 1 arc band.
pub const ARC_FRAME_INSET: u32 = 37;

/// Degrees the arc extends past each hand so it tucks under the hand tips.
pub const ARC_OVERLAP_DEG: i32 = 1;

// Fixed rings of the layered face, as insets from the screen bounds.

/// Minute hand tip ring (radius 72).
pub const RING_OUTER_INSET: u32 = 18;

/// Hand base and arc ring (radius 50).
pub const RING_MIDDLE_INSET: u32 = 40;

/// Hour hand tip ring (radius 41).
pub const RING_INNER_INSET: u32 = 49;

const _: () = assert!(RING_OUTER_INSET < RING_MIDDLE_INSET);
const _: () = assert!(RING_MIDDLE_INSET < RING_INNER_INSET);
const _: () = assert!(2 * RING_INNER_INSET < SCREEN_WIDTH);

// =============================================================================
// Startup Animation
// =============================================================================

/// Radius growth animation length in milliseconds.
pub const ANIMATION_DURATION_MS: u32 = 400;

/// Delay before the radius growth starts, in milliseconds.
pub const ANIMATION_DELAY_MS: u32 = 100;

/// Upper bound of normalized animation progress.
pub const ANIMATION_NORMALIZED_MAX: u32 = 65_535;

// =============================================================================
// Persistent Storage Keys
// =============================================================================

/// Color theme index (also the config message key).
pub const KEY_COLORS: u32 = 0;

/// Inversion flag.
pub const KEY_INVERSE: u32 = 1;

/// Vibrate-on-disconnect flag.
pub const KEY_VIBRATE: u32 = 2;

// =============================================================================
// Haptics
// =============================================================================

/// Disconnect alert: buzz, pause, buzz, pause, buzz (milliseconds).
pub const DISCONNECT_VIBE_PATTERN: [u32; 5] = [200, 200, 50, 150, 200];
