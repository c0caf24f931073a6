//! Headless run: render the startup sequence to PNG files.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettings, OutputSettingsBuilder, SimulatorDisplay};
use watchface_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use watchface_common::{Animation, FaceVariant};

use crate::options::Options;
use crate::profiling::ProfilingMetrics;
use crate::screens::draw_debug_page;
use crate::session::Session;
use crate::timing::{HEADLESS_FRAME_MS, HEADLESS_FRAME_STRIDE, HEADLESS_MAX_FRAMES};

pub fn run(options: &Options) -> Result<()> {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    std::fs::create_dir_all(&options.output).with_context(|| format!("creating {}", options.output.display()))?;

    let mut session = Session::start(options, display.bounding_box())?;
    let mut metrics = ProfilingMetrics::new();

    let mut animation = (options.variant == FaceVariant::Animated).then(Animation::startup);
    let mut frame = 0u32;
    let mut saved = 0u32;

    loop {
        if let Some(animation) = animation.as_mut() {
            for event in animation.poll(frame * HEADLESS_FRAME_MS) {
                session.face.on_animation(event);
            }
        }

        let render_start = Instant::now();
        let redrawn = session.face.render(&mut display);
        let render_time = render_start.elapsed();
        metrics.record_frame(render_time, render_time, redrawn);
        session.mirror_log();

        if animation.is_some() && redrawn && frame % HEADLESS_FRAME_STRIDE == 0 {
            save_png(&display, &output_settings, &options.output.join(format!("frame_{frame:03}.png")))?;
            saved += 1;
        }

        frame += 1;
        if animation.as_ref().is_none_or(Animation::is_finished) || frame >= HEADLESS_MAX_FRAMES {
            break;
        }
    }

    // The last animation step may not have landed on the stride
    session.face.render(&mut display);
    save_png(&display, &output_settings, &options.output.join("face.png"))?;

    if options.debug_page {
        draw_debug_page(&mut display, &session.face, &metrics);
        save_png(&display, &output_settings, &options.output.join("debug.png"))?;
    }

    session.mirror_log();
    println!(
        "{} face: {saved} animation frames and face.png written to {}",
        options.variant.label(),
        options.output.display()
    );
    Ok(())
}

fn save_png(
    display: &SimulatorDisplay<Rgb565>,
    output_settings: &OutputSettings,
    path: &Path,
) -> Result<()> {
    display
        .to_rgb_output_image(output_settings)
        .save_png(path)
        .with_context(|| format!("writing {}", path.display()))
}
