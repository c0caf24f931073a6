//! Command-line options.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::NaiveTime;
use watchface_common::FaceVariant;

use crate::companion::CompanionSettings;

pub const USAGE: &str = "\
usage: simulator [options]
  --variant <animated|layered>  face to run (default animated)
  --debug                       tick every second, show 8:<seconds>
  --time <HH:MM>                fixed start time instead of the clock
  --config <json>               settings page response to send at startup
  --disconnect                  report a phone disconnect after startup
  --store <file>                settings file (default watchface-settings.json)
  --out <dir>                   headless output directory (default out)
  --debug-page                  also save the debug page (headless)
  --headless                    render PNGs even when a window is available";

#[derive(Debug)]
pub struct Options {
    pub variant: FaceVariant,
    pub debug: bool,
    pub time: Option<NaiveTime>,
    pub config: Option<CompanionSettings>,
    pub disconnect: bool,
    pub store: PathBuf,
    pub output: PathBuf,
    pub debug_page: bool,
    pub headless: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            variant: FaceVariant::Animated,
            debug: false,
            time: None,
            config: None,
            disconnect: false,
            store: PathBuf::from("watchface-settings.json"),
            output: PathBuf::from("out"),
            debug_page: false,
            headless: false,
        }
    }
}

/// Parse arguments, not including the program name.
pub fn parse_args<I>(args: I) -> Result<Options>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = || args.next().with_context(|| format!("{arg} needs a value"));
        match arg.as_str() {
            "--variant" => options.variant = parse_variant(&value()?)?,
            "--debug" => options.debug = true,
            "--time" => {
                let text = value()?;
                let time = NaiveTime::parse_from_str(&text, "%H:%M").with_context(|| format!("bad time {text:?}"))?;
                options.time = Some(time);
            }
            "--config" => options.config = Some(CompanionSettings::from_json(&value()?)?),
            "--disconnect" => options.disconnect = true,
            "--store" => options.store = PathBuf::from(value()?),
            "--out" => options.output = PathBuf::from(value()?),
            "--debug-page" => options.debug_page = true,
            "--headless" => options.headless = true,
            other => bail!("unknown option {other:?}\n{USAGE}"),
        }
    }

    Ok(options)
}

fn parse_variant(text: &str) -> Result<FaceVariant> {
    match text {
        "animated" | "1" => Ok(FaceVariant::Animated),
        "layered" | "2" => Ok(FaceVariant::Layered),
        _ => bail!("unknown variant {text:?}, expected animated or layered"),
    }
}
