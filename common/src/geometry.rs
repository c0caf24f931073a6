//! Hand and arc geometry.
//!
//! Converts clock angles into screen points around the face center.
//! Angles are degrees clockwise from 12 o'clock; screen Y grows downwards,
//! so a point at angle `a` and distance `d` is `(sin(a) * d, -cos(a) * d)`.
//!
//! Two layouts exist:
//! - [`animated_hands`]: hand lengths follow the startup animation radius.
//! - [`ring_hands`]: hands span fixed concentric rings.

use core::f32::consts::PI;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use micromath::F32;

use crate::clock::{ClockTime, hour_hand_angle, minute_hand_angle};
use crate::config::{
    ARC_FRAME_INSET,
    ARC_OVERLAP_DEG,
    HAND_MARGIN_INNER,
    HAND_MARGIN_OUTER,
    HOUR_HAND_SHRINK,
    RING_INNER_INSET,
    RING_MIDDLE_INSET,
    RING_OUTER_INSET,
};

// =============================================================================
// Polar Placement
// =============================================================================

/// Place a point `distance` pixels from `center` along `angle_deg`.
pub fn polar(
    center: Point,
    angle_deg: f32,
    distance: f32,
) -> Point {
    let rad = F32(angle_deg * PI / 180.0);
    let dx = F32(rad.sin().0 * distance).round().0 as i32;
    let dy = F32(-rad.cos().0 * distance).round().0 as i32;
    Point::new(center.x + dx, center.y + dy)
}

/// Center of `bounds`, rounding half pixels down and to the right.
pub fn face_center(bounds: &Rectangle) -> Point {
    bounds.top_left + Point::new((bounds.size.width / 2) as i32, (bounds.size.height / 2) as i32)
}

/// Radius of the circle inscribed in `bounds` after insetting every edge.
pub fn inset_radius(
    bounds: &Rectangle,
    inset: u32,
) -> i32 {
    let side = bounds.size.width.min(bounds.size.height);
    (side.saturating_sub(2 * inset) / 2) as i32
}

// =============================================================================
// Hands
// =============================================================================

/// A hand drawn as a straight line from `inner` to `outer`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HandSegment {
    pub inner: Point,
    pub outer: Point,
}

/// Everything the hands layer draws for one frame. `None` parts are hidden.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HandLayout {
    pub hour: Option<HandSegment>,
    pub minute: Option<HandSegment>,
    pub arc: Option<ArcSweep>,
}

impl HandLayout {
    /// Layout with nothing visible.
    pub const fn hidden() -> Self {
        Self {
            hour: None,
            minute: None,
            arc: None,
        }
    }

    #[inline]
    pub const fn is_hidden(&self) -> bool { self.hour.is_none() && self.minute.is_none() && self.arc.is_none() }
}

/// Hands scaled to the startup animation `radius`.
///
/// Nothing is drawn until `radius - HAND_MARGIN_OUTER` clears the inner
/// margin. Past that point the hour hand also needs `radius` above twice the
/// outer margin and the minute hand `radius` above the outer margin.
pub fn animated_hands(
    center: Point,
    radius: i32,
    time: ClockTime,
) -> HandLayout {
    if radius - HAND_MARGIN_OUTER <= HAND_MARGIN_INNER {
        return HandLayout::hidden();
    }

    let minute_angle = minute_hand_angle(time);
    let hour_angle = hour_hand_angle(time);

    // Truncated like the rest of the integer layout math
    let hour_length = (radius as f32 - HAND_MARGIN_OUTER as f32 - HOUR_HAND_SHRINK * radius as f32) as i32;

    let hour = (radius > 2 * HAND_MARGIN_OUTER).then(|| HandSegment {
        inner: polar(center, hour_angle, HAND_MARGIN_INNER as f32),
        outer: polar(center, hour_angle, hour_length as f32),
    });
    let minute = (radius > HAND_MARGIN_OUTER).then(|| HandSegment {
        inner: polar(center, minute_angle, (HAND_MARGIN_INNER + 1) as f32),
        outer: polar(center, minute_angle, (radius - HAND_MARGIN_OUTER) as f32),
    });

    HandLayout {
        hour,
        minute,
        arc: Some(ArcSweep::between(time.hour_degrees(), time.minute_degrees())),
    }
}

/// Hands projected onto the fixed rings of the layered face.
///
/// The minute hand runs from the middle ring out to the outer ring, the hour
/// hand from the middle ring in to the inner ring.
pub fn ring_hands(
    bounds: &Rectangle,
    time: ClockTime,
) -> HandLayout {
    let center = face_center(bounds);
    let outer = inset_radius(bounds, RING_OUTER_INSET) as f32;
    let middle = inset_radius(bounds, RING_MIDDLE_INSET) as f32;
    let inner = inset_radius(bounds, RING_INNER_INSET) as f32;

    let minute_angle = minute_hand_angle(time);
    let hour_angle = hour_hand_angle(time);

    HandLayout {
        hour: Some(HandSegment {
            inner: polar(center, hour_angle, middle),
            outer: polar(center, hour_angle, inner),
        }),
        minute: Some(HandSegment {
            inner: polar(center, minute_angle, middle),
            outer: polar(center, minute_angle, outer),
        }),
        arc: Some(ArcSweep::between(time.hour_degrees(), time.minute_degrees())),
    }
}

// =============================================================================
// Arc Sweep
// =============================================================================

/// Arc connecting the two hands, in degrees clockwise from 12 o'clock.
///
/// `start_deg <= end_deg` always holds; `end_deg` may exceed 360 when the
/// short path crosses 12 o'clock.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ArcSweep {
    pub start_deg: i32,
    pub end_deg: i32,
}

impl ArcSweep {
    /// Arc along the shorter path between the hour and minute angles.
    ///
    /// Whichever angle trails the other by more than 180 degrees is moved a
    /// full turn forward, then the arc runs from the smaller to the larger
    /// angle, extended by [`ARC_OVERLAP_DEG`] at both ends.
    pub const fn between(
        hour_deg: i32,
        minute_deg: i32,
    ) -> Self {
        let mut hour_deg = hour_deg;
        let mut minute_deg = minute_deg;
        if minute_deg > hour_deg && minute_deg - hour_deg > 180 {
            hour_deg += 360;
        } else if minute_deg < hour_deg && hour_deg - minute_deg > 180 {
            minute_deg += 360;
        }

        if minute_deg < hour_deg {
            Self {
                start_deg: minute_deg - ARC_OVERLAP_DEG,
                end_deg: hour_deg + ARC_OVERLAP_DEG,
            }
        } else {
            Self {
                start_deg: hour_deg - ARC_OVERLAP_DEG,
                end_deg: minute_deg + ARC_OVERLAP_DEG,
            }
        }
    }

    /// Drawn sweep including the overlap at both ends.
    #[inline]
    pub const fn sweep_deg(&self) -> i32 { self.end_deg - self.start_deg }

    /// Angular distance between the two hands.
    #[inline]
    pub const fn hand_gap_deg(&self) -> i32 { self.sweep_deg() - 2 * ARC_OVERLAP_DEG }
}

/// Radius of the circle the animated face's arc band sits on.
pub fn arc_band_radius(bounds: &Rectangle) -> i32 { inset_radius(bounds, ARC_FRAME_INSET) }

/// Radius of the layered face's middle ring.
pub fn middle_ring_radius(bounds: &Rectangle) -> i32 { inset_radius(bounds, RING_MIDDLE_INSET) }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ClockTime;
    use crate::config::{FINAL_RADIUS, SCREEN_HEIGHT, SCREEN_WIDTH};

    const BOUNDS: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    const CENTER: Point = Point::new(90, 90);

    // -------------------------------------------------------------------------
    // Polar Placement
    // -------------------------------------------------------------------------

    #[test]
    fn test_polar_cardinal_points() {
        assert_eq!(polar(CENTER, 0.0, 50.0), Point::new(90, 40), "12 o'clock is straight up");
        assert_eq!(polar(CENTER, 90.0, 50.0), Point::new(140, 90), "3 o'clock is to the right");
        assert_eq!(polar(CENTER, 180.0, 50.0), Point::new(90, 140), "6 o'clock is straight down");
        assert_eq!(polar(CENTER, 270.0, 50.0), Point::new(40, 90), "9 o'clock is to the left");
    }

    #[test]
    fn test_polar_distance() {
        for deg in (0..360).step_by(15) {
            let p = polar(CENTER, deg as f32, 72.0) - CENTER;
            let dist_sq = p.x * p.x + p.y * p.y;
            assert!(
                (70 * 70..=74 * 74).contains(&dist_sq),
                "{deg} deg: point {p:?} should be about 72px from center"
            );
        }
    }

    #[test]
    fn test_face_center() {
        assert_eq!(face_center(&BOUNDS), CENTER);
        let odd = Rectangle::new(Point::new(10, 20), Size::new(5, 7));
        assert_eq!(face_center(&odd), Point::new(12, 23));
    }

    #[test]
    fn test_inset_radius() {
        assert_eq!(inset_radius(&BOUNDS, 0), 90);
        assert_eq!(inset_radius(&BOUNDS, 37), 53, "Arc band circle");
        assert_eq!(inset_radius(&BOUNDS, 200), 0, "Oversized inset clamps to zero");
    }

    // -------------------------------------------------------------------------
    // Animated Hands
    // -------------------------------------------------------------------------

    #[test]
    fn test_animated_hands_hidden_at_small_radius() {
        let time = ClockTime::new(10, 10);
        for radius in 0..=(HAND_MARGIN_INNER + HAND_MARGIN_OUTER) {
            assert!(
                animated_hands(CENTER, radius, time).is_hidden(),
                "Radius {radius} should hide the hands"
            );
        }
    }

    #[test]
    fn test_animated_hands_never_drawn_below_margins() {
        let time = ClockTime::new(4, 20);
        for radius in 0..=40 {
            let layout = animated_hands(CENTER, radius, time);
            assert!(layout.minute.is_none(), "No minute hand at radius {radius}");
            assert!(layout.hour.is_none(), "No hour hand at radius {radius}");
        }
    }

    #[test]
    fn test_animated_hands_visible_at_final_radius() {
        let layout = animated_hands(CENTER, FINAL_RADIUS, ClockTime::new(0, 0));
        let minute = layout.minute.expect("minute hand visible");
        let hour = layout.hour.expect("hour hand visible");

        assert_eq!(minute.inner, Point::new(90, 39), "Minute hand starts past the inner margin");
        assert_eq!(minute.outer, Point::new(90, 18), "Minute hand reaches radius - outer margin");
        assert_eq!(hour.inner, Point::new(90, 40), "Hour hand starts at the inner margin");
        assert_eq!(hour.outer, Point::new(90, 49), "Hour hand tip at 88 - 16 - 30.8 = 41");
        assert!(layout.arc.is_some(), "Arc drawn with the hands");
    }

    #[test]
    fn test_animated_hands_follow_time() {
        let layout = animated_hands(CENTER, FINAL_RADIUS, ClockTime::new(3, 0));
        let hour = layout.hour.unwrap();
        assert_eq!(hour.inner, Point::new(140, 90), "3 o'clock hour hand points right");
        let minute = layout.minute.unwrap();
        assert_eq!(minute.outer, Point::new(90, 18), "Minute hand at :00 points up");
    }

    // -------------------------------------------------------------------------
    // Ring Hands
    // -------------------------------------------------------------------------

    #[test]
    fn test_ring_hands_span_rings() {
        let layout = ring_hands(&BOUNDS, ClockTime::new(6, 0));
        let minute = layout.minute.unwrap();
        let hour = layout.hour.unwrap();
        assert_eq!(minute.inner, Point::new(90, 40), "Minute base on the middle ring");
        assert_eq!(minute.outer, Point::new(90, 18), "Minute tip on the outer ring");
        assert_eq!(hour.inner, Point::new(90, 140), "Hour base on the middle ring");
        assert_eq!(hour.outer, Point::new(90, 131), "Hour tip on the inner ring");
    }

    #[test]
    fn test_ring_hands_always_visible() {
        for hour in 0..12u8 {
            for minute in (0..60u8).step_by(7) {
                let layout = ring_hands(&BOUNDS, ClockTime::new(hour, minute));
                assert!(layout.hour.is_some() && layout.minute.is_some() && layout.arc.is_some());
            }
        }
    }

    // -------------------------------------------------------------------------
    // Arc Sweep
    // -------------------------------------------------------------------------

    #[test]
    fn test_arc_simple_order() {
        let arc = ArcSweep::between(90, 180);
        assert_eq!(arc, ArcSweep { start_deg: 89, end_deg: 181 });
        let arc = ArcSweep::between(180, 90);
        assert_eq!(arc, ArcSweep { start_deg: 89, end_deg: 181 }, "Order of hands does not matter");
    }

    #[test]
    fn test_arc_wraps_through_twelve() {
        // 11:55 -> hour 357, minute 330: no wrap needed
        assert_eq!(ArcSweep::between(357, 330).hand_gap_deg(), 27);
        // 0:50 -> hour 25, minute 300: hour moves a full turn forward
        let arc = ArcSweep::between(25, 300);
        assert_eq!(arc, ArcSweep { start_deg: 299, end_deg: 386 });
        // 11:05 -> hour 332, minute 30: minute moves a full turn forward
        let arc = ArcSweep::between(332, 30);
        assert_eq!(arc, ArcSweep { start_deg: 331, end_deg: 391 });
    }

    #[test]
    fn test_arc_never_exceeds_half_turn() {
        for hour_deg in 0..360 {
            for minute_deg in (0..360).step_by(6) {
                let arc = ArcSweep::between(hour_deg, minute_deg);
                assert!(
                    (0..=180).contains(&arc.hand_gap_deg()),
                    "{hour_deg}/{minute_deg}: gap {} out of range",
                    arc.hand_gap_deg()
                );
                assert!(arc.start_deg < arc.end_deg, "{hour_deg}/{minute_deg}: arc must not be reversed");
            }
        }
    }

    #[test]
    fn test_arc_equal_angles() {
        let arc = ArcSweep::between(120, 120);
        assert_eq!(arc.hand_gap_deg(), 0, "Equal angles give a zero-length arc");
        assert_eq!(arc.sweep_deg(), 2 * ARC_OVERLAP_DEG, "Only the overlap is drawn");
    }

    #[test]
    fn test_arc_radii() {
        assert_eq!(arc_band_radius(&BOUNDS), 53);
        assert_eq!(middle_ring_radius(&BOUNDS), 50);
    }
}
