//! Desktop simulator for the arc-angle watch face.
//!
//! Without the `with-sdl` feature (or with `--headless`) the startup
//! sequence is rendered to PNG files. With it, the face runs in a window.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod companion;
mod console;
mod headless;
mod options;
mod profiling;
mod screens;
mod session;
mod store;
mod timing;
#[cfg(feature = "with-sdl")]
mod window;

use anyhow::Result;

fn main() -> Result<()> {
    let options = options::parse_args(std::env::args().skip(1))?;

    #[cfg(feature = "with-sdl")]
    if !options.headless {
        return window::run(&options);
    }

    headless::run(&options)
}
