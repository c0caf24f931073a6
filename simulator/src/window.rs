//! Interactive SDL window.
//!
//! Keys: T next theme, I invert, V vibrate on disconnect, C toggle the
//! phone connection, P debug page, Esc/Q quit.

use std::thread;
use std::time::Instant;

use anyhow::Result;
use chrono::{Local, Timelike};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use watchface_common::colors::BLACK;
use watchface_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use watchface_common::{Animation, FaceVariant, TickUnit};

use crate::companion::CompanionSettings;
use crate::options::Options;
use crate::profiling::ProfilingMetrics;
use crate::screens::draw_debug_page;
use crate::session::Session;
use crate::timing::FRAME_TIME;

pub fn run(options: &Options) -> Result<()> {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Arc Angle", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut session = Session::start(options, display.bounding_box())?;
    let mut companion = CompanionSettings::from_settings(session.face.settings());
    let mut metrics = ProfilingMetrics::new();

    let started = Instant::now();
    let mut animation = (options.variant == FaceVariant::Animated).then(Animation::startup);
    let mut last_tick = tick_key(session.face.tick_unit());
    let mut show_debug = false;

    loop {
        let frame_start = Instant::now();
        let mut send = false;

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::T => {
                            companion.next_theme();
                            send = true;
                        }
                        Keycode::I => {
                            companion.toggle_inverse();
                            send = true;
                        }
                        Keycode::V => {
                            companion.toggle_vibrate();
                            send = true;
                        }
                        Keycode::C => session.toggle_connection(),
                        Keycode::P => {
                            show_debug = !show_debug;
                            session.face.invalidate();
                        }
                        Keycode::Escape | Keycode::Q => return Ok(()),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if send {
            session.send(&companion)?;
        }

        if let Some(animation) = animation.as_mut() {
            let elapsed_ms = u32::try_from(started.elapsed().as_millis()).unwrap_or(u32::MAX);
            for event in animation.poll(elapsed_ms) {
                session.face.on_animation(event);
            }
        }

        let key = tick_key(session.face.tick_unit());
        if key != last_tick {
            last_tick = key;
            session.tick();
        }

        let render_start = Instant::now();
        let redrawn = if show_debug {
            draw_debug_page(&mut display, &session.face, &metrics);
            true
        } else {
            session.face.render(&mut display)
        };
        let render_time = render_start.elapsed();
        session.mirror_log();

        window.update(&display);

        if let Some(rest) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
        metrics.record_frame(frame_start.elapsed(), render_time, redrawn);
    }
}

/// The clock field whose change triggers a tick.
fn tick_key(unit: TickUnit) -> u32 {
    let now = Local::now();
    match unit {
        TickUnit::Minute => now.minute(),
        TickUnit::Second => now.second(),
    }
}
