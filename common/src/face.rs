//! Watch face drawing.
//!
//! Both faces draw the same primitives in the same order:
//!
//! 1. Background fill
//! 2. Grid (1px trim lines every [`GRID_SPACING`] pixels)
//! 3. Hour hand, then minute hand ([`HAND_WIDTH`] wide)
//! 4. Arc between the hands
//!
//! The animated face does all of it in one pass. The layered face splits
//! steps 1-2 ([`draw_layered_background`]) from steps 3-4
//! ([`draw_layered_hands`]) so settings changes and ticks can redraw
//! independently.
//!
//! Drawing errors are ignored (`.ok()`): the face has nothing better to do
//! than try again on the next redraw.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Line, PrimitiveStyle, Rectangle};

use crate::clock::ClockTime;
use crate::config::{GRID_SPACING, HAND_WIDTH};
use crate::geometry::{ArcSweep, HandLayout, animated_hands, arc_band_radius, face_center, middle_ring_radius, ring_hands};
use crate::theme::ThemeColors;

/// Ring an arc is stroked along.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ArcBand {
    /// Radius of the stroke's center line.
    pub radius: i32,
    pub width: u32,
}

// =============================================================================
// Background
// =============================================================================

/// Fill `bounds` with the background color and draw the grid over it.
pub fn draw_layered_background<D>(
    display: &mut D,
    bounds: Rectangle,
    colors: &ThemeColors,
) where
    D: DrawTarget<Color = Rgb565>,
{
    bounds
        .into_styled(PrimitiveStyle::with_fill(colors.background))
        .draw(display)
        .ok();
    draw_grid(display, bounds, colors.trim);
}

/// Vertical lines across the width and horizontal lines down the height,
/// each spanning the whole of `bounds`.
pub fn draw_grid<D>(
    display: &mut D,
    bounds: Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(color, 1);
    let origin = bounds.top_left;
    let (width, height) = (bounds.size.width as i32, bounds.size.height as i32);

    for x in (0..width).step_by(GRID_SPACING as usize) {
        Line::new(origin + Point::new(x, 0), origin + Point::new(x, height))
            .into_styled(style)
            .draw(display)
            .ok();
    }
    for y in (0..height).step_by(GRID_SPACING as usize) {
        Line::new(origin + Point::new(0, y), origin + Point::new(width, y))
            .into_styled(style)
            .draw(display)
            .ok();
    }
}

// =============================================================================
// Hands
// =============================================================================

/// Draw the visible parts of `layout`.
pub fn draw_hands<D>(
    display: &mut D,
    center: Point,
    layout: &HandLayout,
    band: ArcBand,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let hand_style = PrimitiveStyle::with_stroke(color, HAND_WIDTH);

    for hand in [layout.hour, layout.minute].into_iter().flatten() {
        Line::new(hand.inner, hand.outer)
            .into_styled(hand_style)
            .draw(display)
            .ok();
    }

    if let Some(sweep) = layout.arc {
        draw_arc(display, center, sweep, band, color);
    }
}

/// Stroke `sweep` along `band`.
///
/// Sweep angles start at 12 o'clock; embedded-graphics starts at 3 o'clock,
/// both run clockwise.
pub fn draw_arc<D>(
    display: &mut D,
    center: Point,
    sweep: ArcSweep,
    band: ArcBand,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if band.radius <= 0 {
        return;
    }
    let start = (sweep.start_deg - 90) as f32;
    Arc::with_center(center, (band.radius * 2) as u32, start.deg(), (sweep.sweep_deg() as f32).deg())
        .into_styled(PrimitiveStyle::with_stroke(color, band.width))
        .draw(display)
        .ok();
}

// =============================================================================
// Faces
// =============================================================================

/// Arc band of the animated face: a [`HAND_WIDTH`] band inside the inset
/// frame circle.
pub fn animated_arc_band(bounds: &Rectangle) -> ArcBand {
    ArcBand {
        radius: arc_band_radius(bounds) - (HAND_WIDTH / 2) as i32,
        width: HAND_WIDTH,
    }
}

/// Arc band of the layered face: one pixel wider than a hand, on the
/// middle ring.
pub fn layered_arc_band(bounds: &Rectangle) -> ArcBand {
    ArcBand {
        radius: middle_ring_radius(bounds),
        width: HAND_WIDTH + 1,
    }
}

/// Draw the whole animated face for the current animation `radius`.
pub fn draw_animated_face<D>(
    display: &mut D,
    bounds: Rectangle,
    time: ClockTime,
    colors: &ThemeColors,
    radius: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_layered_background(display, bounds, colors);

    let center = face_center(&bounds);
    let layout = animated_hands(center, radius, time);
    draw_hands(display, center, &layout, animated_arc_band(&bounds), colors.hand);
}

/// Draw the hands layer of the layered face.
pub fn draw_layered_hands<D>(
    display: &mut D,
    bounds: Rectangle,
    time: ClockTime,
    colors: &ThemeColors,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let layout = ring_hands(&bounds, time);
    draw_hands(display, face_center(&bounds), &layout, layered_arc_band(&bounds), colors.hand);
}
