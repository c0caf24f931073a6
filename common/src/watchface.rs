//! Watch face session state and event dispatch.
//!
//! [`WatchFace`] owns everything the face knows: the displayed time, the
//! settings and their resolved colors, the startup animation radius, the
//! connection state, layer dirty flags and the debug log. The host calls
//! one handler per event type, in order, from a single thread:
//!
//! | Event | Handler | Effect |
//! |-------|---------|--------|
//! | tick | [`WatchFace::on_tick`] | new time, hands dirty |
//! | config message | [`WatchFace::on_config`] | settings persisted, colors resolved, redraw |
//! | animation step | [`WatchFace::on_animation`] | radius grows, hands dirty |
//! | connection change | [`WatchFace::on_connection`] | optional vibration |
//!
//! [`WatchFace::handle`] routes a [`WatchEvent`] to the matching handler.
//! Host services (storage, vibration motor, display) are borrowed per call.

use chrono::Timelike;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::animations::{AnimationEvent, radius_for_progress};
use crate::clock::{ClockTime, TickUnit};
use crate::config::{FINAL_RADIUS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::connectivity::{ConnectionWatcher, Vibrator};
use crate::debug_log::{DebugLog, labeled_u32, push_u32};
use crate::face::{draw_animated_face, draw_layered_background, draw_layered_hands};
use crate::render::{Layer, RenderState};
use crate::settings::{ConfigMessage, PersistentStore, Settings};
use crate::theme::ThemeColors;

/// Which face is running.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FaceVariant {
    /// Single layer, hands grow in at launch, theme setting only.
    Animated,
    /// Background and hands layers on fixed rings, with inversion,
    /// vibrate-on-disconnect and haptic acknowledgement of settings.
    Layered,
}

impl FaceVariant {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Animated => "animated",
            Self::Layered => "layered",
        }
    }
}

/// A host event, for hosts that queue events before dispatching them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WatchEvent {
    Tick(ClockTime),
    Config(ConfigMessage),
    Animation(AnimationEvent),
    Connection(bool),
}

/// Complete state of one face session.
pub struct WatchFace {
    variant: FaceVariant,
    tick_unit: TickUnit,
    bounds: Rectangle,

    time: ClockTime,
    settings: Settings,
    colors: ThemeColors,

    /// Animated face only: current hand radius, never decreases.
    radius: i32,
    animating: bool,

    connection: ConnectionWatcher,
    render: RenderState,
    log: DebugLog,
}

impl WatchFace {
    /// New session. `debug` selects second ticks (emulator mode).
    pub fn new(
        variant: FaceVariant,
        debug: bool,
    ) -> Self {
        Self {
            variant,
            tick_unit: if debug { TickUnit::Second } else { TickUnit::Minute },
            bounds: Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)),
            time: ClockTime::default(),
            settings: Settings::new(),
            colors: ThemeColors::new(),
            radius: match variant {
                FaceVariant::Animated => 0,
                FaceVariant::Layered => FINAL_RADIUS,
            },
            animating: false,
            connection: ConnectionWatcher::new(),
            render: RenderState::new(),
            log: DebugLog::new(),
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Create the layers for `bounds` and load persisted settings.
    pub fn window_load<S: PersistentStore + ?Sized>(
        &mut self,
        bounds: Rectangle,
        store: &S,
    ) {
        self.bounds = bounds;
        self.settings = Settings::load(store, self.variant);
        self.colors.apply(self.settings.color_theme, self.settings.inverted);
        self.render.load();

        let mut line = labeled_u32("Loaded, theme ", u32::from(self.settings.color_theme));
        if self.settings.inverted {
            line.push_str(" inv").ok();
        }
        self.log.push(&line);
    }

    /// Destroy the layers. Settings stay in the store.
    pub fn window_unload(&mut self) {
        self.render.unload();
        self.log.push("Unloaded");
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    /// Route `event` to its handler.
    pub fn handle<S, V>(
        &mut self,
        event: &WatchEvent,
        store: &mut S,
        vibrator: &mut V,
    ) where
        S: PersistentStore + ?Sized,
        V: Vibrator + ?Sized,
    {
        match event {
            WatchEvent::Tick(time) => self.set_time(*time),
            WatchEvent::Config(message) => self.on_config(message, store, vibrator),
            WatchEvent::Animation(step) => self.on_animation(*step),
            WatchEvent::Connection(connected) => self.on_connection(*connected, vibrator),
        }
    }

    /// Host tick with the current wall-clock time.
    pub fn on_tick<T: Timelike>(
        &mut self,
        now: &T,
    ) {
        self.set_time(ClockTime::from_tick(now, self.tick_unit));
    }

    fn set_time(
        &mut self,
        time: ClockTime,
    ) {
        self.time = time;
        self.render.mark_dirty(Layer::Hands);

        // Debug mode ticks every second, too chatty to log
        if self.tick_unit == TickUnit::Minute {
            let mut line = labeled_u32("Tick ", u32::from(time.hours));
            line.push(':').ok();
            if time.minutes < 10 {
                line.push('0').ok();
            }
            push_u32(&mut line, u32::from(time.minutes));
            self.log.push(&line);
        }
    }

    /// Configuration message from the companion channel.
    pub fn on_config<S, V>(
        &mut self,
        message: &ConfigMessage,
        store: &mut S,
        vibrator: &mut V,
    ) where
        S: PersistentStore + ?Sized,
        V: Vibrator + ?Sized,
    {
        let update = self.settings.apply_message(message, self.variant, store);

        if update.colors_changed() {
            self.colors.apply(self.settings.color_theme, self.settings.inverted);
        }
        if update.theme {
            self.log.push(&labeled_u32("Theme: ", u32::from(self.settings.color_theme)));
        }
        if update.inverted {
            self.log.push(if self.settings.inverted { "Invert: ON" } else { "Invert: OFF" });
        }
        if update.vibrate {
            self.log
                .push(if self.settings.vibrate_on_disconnect { "Vibrate: ON" } else { "Vibrate: OFF" });
        }

        match self.variant {
            FaceVariant::Animated => self.render.mark_dirty(Layer::Hands),
            FaceVariant::Layered => {
                self.render.mark_all_dirty();
                vibrator.short_pulse();
            }
        }
    }

    /// Startup animation callback. Ignored by the layered face.
    pub fn on_animation(
        &mut self,
        event: AnimationEvent,
    ) {
        if self.variant != FaceVariant::Animated {
            return;
        }
        match event {
            AnimationEvent::Started => {
                self.animating = true;
                self.log.push("Anim start");
            }
            AnimationEvent::Progress(progress) => {
                self.radius = self.radius.max(radius_for_progress(progress));
                self.render.mark_dirty(Layer::Hands);
            }
            AnimationEvent::Stopped => {
                self.animating = false;
                self.log.push(&labeled_u32("Anim stop, r=", self.radius as u32));
            }
        }
    }

    /// Phone connection change. Only the layered face watches it.
    pub fn on_connection<V: Vibrator + ?Sized>(
        &mut self,
        connected: bool,
        vibrator: &mut V,
    ) {
        if self.variant != FaceVariant::Layered {
            return;
        }
        if let Some(pattern) = self.connection.on_change(connected, self.settings.vibrate_on_disconnect) {
            vibrator.play_pattern(pattern);
        }
        self.log.push(if connected { "Connected" } else { "Disconnected" });
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Request a full redraw, e.g. after something else drew over the screen.
    pub fn invalidate(&mut self) { self.render.mark_all_dirty(); }

    /// Redraw if any layer is dirty. Returns `true` if something was drawn.
    ///
    /// A single framebuffer has no compositing, so any dirty layer redraws
    /// the whole stack bottom-up.
    pub fn render<D>(
        &mut self,
        display: &mut D,
    ) -> bool
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if !self.render.take_dirty() {
            return false;
        }

        match self.variant {
            FaceVariant::Animated => draw_animated_face(display, self.bounds, self.time, &self.colors, self.radius),
            FaceVariant::Layered => {
                draw_layered_background(display, self.bounds, &self.colors);
                draw_layered_hands(display, self.bounds, self.time, &self.colors);
            }
        }
        true
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub const fn variant(&self) -> FaceVariant { self.variant }

    #[inline]
    pub const fn tick_unit(&self) -> TickUnit { self.tick_unit }

    #[inline]
    pub const fn time(&self) -> ClockTime { self.time }

    #[inline]
    pub const fn settings(&self) -> &Settings { &self.settings }

    #[inline]
    pub const fn colors(&self) -> &ThemeColors { &self.colors }

    #[inline]
    pub const fn radius(&self) -> i32 { self.radius }

    #[inline]
    pub const fn is_animating(&self) -> bool { self.animating }

    #[inline]
    pub const fn is_connected(&self) -> bool { self.connection.is_connected() }

    #[inline]
    pub const fn render_state(&self) -> &RenderState { &self.render }

    #[inline]
    pub const fn log(&self) -> &DebugLog { &self.log }
}
