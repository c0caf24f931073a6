//! Clock time tracking and hand angle math.
//!
//! Angles are measured in degrees, clockwise from 12 o'clock. The integer
//! helpers match the arc sweep selection; [`hour_hand_angle`] and
//! [`minute_hand_angle`] are the continuous angles used to place the hands.

use chrono::Timelike;

/// Hour shown while the face runs in debug (emulator) mode.
pub const DEBUG_HOURS: u8 = 8;

/// How often the host delivers ticks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TickUnit {
    /// Normal operation: one tick per minute.
    Minute,
    /// Debug mode: one tick per second, minutes follow the seconds.
    Second,
}

/// Time currently shown by the face.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ClockTime {
    /// Hours in 12-hour form (see [`ClockTime::from_24h`] for the 12 quirk).
    pub hours: u8,
    /// Minutes, 0-59.
    pub minutes: u8,
}

impl ClockTime {
    pub const fn new(
        hours: u8,
        minutes: u8,
    ) -> Self {
        Self { hours, minutes }
    }

    /// Build from a 24-hour clock reading.
    ///
    /// Hours above 12 have 12 subtracted, so 13 becomes 1 and 24 becomes 12,
    /// while 12 and 0 are kept as-is.
    pub const fn from_24h(
        hours: u8,
        minutes: u8,
    ) -> Self {
        let hours = if hours > 12 { hours - 12 } else { hours };
        Self { hours, minutes }
    }

    /// Build from a host time reading for the given tick unit.
    ///
    /// In [`TickUnit::Second`] mode the hour is pinned to [`DEBUG_HOURS`] and
    /// the minute hand follows the seconds so a full sweep takes one minute.
    pub fn from_tick<T: Timelike>(
        time: &T,
        unit: TickUnit,
    ) -> Self {
        match unit {
            TickUnit::Minute => Self::from_24h(time.hour() as u8, time.minute() as u8),
            TickUnit::Second => Self::new(DEBUG_HOURS, time.second() as u8),
        }
    }

    /// Integer minute angle in degrees.
    #[inline]
    pub const fn minute_degrees(self) -> i32 { minute_degrees(self.minutes) }

    /// Integer hour angle in degrees, including the minute creep.
    #[inline]
    pub const fn hour_degrees(self) -> i32 { hour_degrees(self.hours, self.minutes) }
}

// =============================================================================
// Angle Math
// =============================================================================

/// Minute angle: 360 degrees over 60 minutes.
#[inline]
pub const fn minute_degrees(minute: u8) -> i32 { (minute as i32 * 360) / 60 }

/// Hour angle: 360 degrees over 12 hours, plus a twelfth of the minute angle
/// so the hour hand creeps between hour marks. Wrapped into `[0, 360)`.
#[inline]
pub const fn hour_degrees(
    hour: u8,
    minute: u8,
) -> i32 {
    ((hour as i32 * 360) / 12 + minute_degrees(minute) / 12) % 360
}

/// Continuous minute hand angle in degrees.
#[inline]
pub fn minute_hand_angle(time: ClockTime) -> f32 { f32::from(time.minutes) * 6.0 }

/// Continuous hour hand angle in degrees.
#[inline]
pub fn hour_hand_angle(time: ClockTime) -> f32 { f32::from(time.hours) * 30.0 + f32::from(time.minutes) * 0.5 }
