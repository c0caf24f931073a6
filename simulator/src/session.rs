//! Startup sequence shared by the headless and window runs.

use anyhow::Result;
use chrono::{Local, NaiveTime};
use embedded_graphics::primitives::Rectangle;
use watchface_common::WatchFace;

use crate::companion::CompanionSettings;
use crate::console::{ConsoleVibrator, LogMirror};
use crate::options::Options;
use crate::store::FileStore;

/// A running face with the host services it borrows.
pub struct Session {
    pub face: WatchFace,
    pub store: FileStore,
    pub vibrator: ConsoleVibrator,
    mirror: LogMirror,
    fixed_time: Option<NaiveTime>,
}

impl Session {
    /// Init the face the way the watch does: one tick with the current
    /// time, then window load, then whatever the phone sends.
    pub fn start(
        options: &Options,
        bounds: Rectangle,
    ) -> Result<Self> {
        let store = FileStore::open(&options.store)?;
        let mut session = Self {
            face: WatchFace::new(options.variant, options.debug),
            store,
            vibrator: ConsoleVibrator::default(),
            mirror: LogMirror::default(),
            fixed_time: options.time,
        };

        session.tick();
        session.face.window_load(bounds, &session.store);

        if let Some(settings) = options.config {
            session.send(&settings)?;
        }
        if options.disconnect {
            session.face.on_connection(false, &mut session.vibrator);
        }
        session.mirror_log();
        Ok(session)
    }

    /// Deliver a tick with the fixed start time, or the wall clock.
    pub fn tick(&mut self) {
        match self.fixed_time {
            Some(time) => self.face.on_tick(&time),
            None => self.face.on_tick(&Local::now()),
        }
    }

    /// Forward a settings page response and persist the result.
    ///
    /// Responses without a theme are dropped, like the phone does.
    pub fn send(
        &mut self,
        settings: &CompanionSettings,
    ) -> Result<()> {
        if let Some(message) = settings.to_message() {
            self.face.on_config(&message, &mut self.store, &mut self.vibrator);
            self.store.flush()?;
        }
        Ok(())
    }

    /// Flip the phone connection relative to what the face last saw.
    pub fn toggle_connection(&mut self) {
        let connected = !self.face.is_connected();
        self.face.on_connection(connected, &mut self.vibrator);
    }

    pub fn mirror_log(&mut self) { self.mirror.print(self.face.log()); }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::*;
    use watchface_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use watchface_common::{ClockTime, FaceVariant, PersistentStore};

    use super::*;

    fn options(name: &str) -> Options {
        let dir = std::env::temp_dir().join(format!("watchface-session-{}", std::process::id()));
        Options {
            variant: FaceVariant::Layered,
            time: NaiveTime::from_hms_opt(15, 20, 0),
            store: dir.join(name),
            ..Options::default()
        }
    }

    fn bounds() -> Rectangle { Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)) }

    #[test]
    fn test_start_uses_fixed_time() {
        let session = Session::start(&options("time.json"), bounds()).unwrap();
        assert_eq!(session.face.time(), ClockTime::new(3, 20), "Initial tick happens before load");
    }

    #[test]
    fn test_startup_config_is_persisted() {
        let mut opts = options("config.json");
        opts.config = Some(CompanionSettings::from_json(r#"{"colors":2,"inverse":true}"#).unwrap());
        opts.disconnect = true;

        let session = Session::start(&opts, bounds()).unwrap();
        assert_eq!(session.face.settings().color_theme, 2);
        assert!(session.face.settings().inverted);
        assert_eq!(session.vibrator.pulses, 1, "Layered face acknowledges the update");
        assert_eq!(session.vibrator.patterns, 0, "Vibrate on disconnect is off");

        let reopened = FileStore::open(&opts.store).unwrap();
        assert_eq!(reopened.read_int(watchface_common::config::KEY_COLORS), Some(2));
        std::fs::remove_file(&opts.store).ok();
    }

    #[test]
    fn test_toggle_after_startup_disconnect_reconnects() {
        let mut opts = options("toggle.json");
        opts.disconnect = true;
        let mut session = Session::start(&opts, bounds()).unwrap();
        assert!(!session.face.is_connected());

        session.toggle_connection();
        assert!(session.face.is_connected(), "First toggle after --disconnect reconnects");
        session.toggle_connection();
        assert!(!session.face.is_connected());
    }

    #[test]
    fn test_send_without_theme_is_dropped() {
        let mut session = Session::start(&options("drop.json"), bounds()).unwrap();
        let settings = CompanionSettings {
            inverse: Some(true),
            ..CompanionSettings::default()
        };
        session.send(&settings).unwrap();
        assert!(!session.face.settings().inverted);
        assert_eq!(session.vibrator.pulses, 0, "Nothing reached the watch");
        assert!(!session.store.path().exists(), "Nothing written");
    }
}
