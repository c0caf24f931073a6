//! Layer dirty tracking.
//!
//! The host redraws at its own cadence; the face only marks layers dirty
//! when what they show has changed. This module tracks which layers need
//! redrawing and whether they exist at all.
//!
//! # Layers
//!
//! | Layer | Content | Dirtied by |
//! |-------|---------|------------|
//! | Background | fill + grid | settings change |
//! | Hands | hands + arc (animated face: everything) | tick, settings, animation step |
//!
//! The animated face draws everything in its single hands layer.

/// A drawable surface of the face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Layer {
    Background,
    Hands,
}

impl Layer {
    const fn bit(self) -> u8 {
        match self {
            Self::Background => 0b01,
            Self::Hands => 0b10,
        }
    }
}

/// Tracks layer lifetime and pending redraws.
pub struct RenderState {
    /// Layers exist between window load and unload.
    loaded: bool,

    /// Bitmask of layers waiting for a redraw.
    dirty: u8,
}

impl RenderState {
    pub const fn new() -> Self {
        Self {
            loaded: false,
            dirty: 0,
        }
    }

    /// Create the layers. Everything starts dirty.
    pub fn load(&mut self) {
        self.loaded = true;
        self.dirty = Layer::Background.bit() | Layer::Hands.bit();
    }

    /// Destroy the layers. Pending redraws are discarded.
    pub fn unload(&mut self) {
        self.loaded = false;
        self.dirty = 0;
    }

    /// Request a redraw of `layer`. Ignored while no layers exist.
    pub fn mark_dirty(
        &mut self,
        layer: Layer,
    ) {
        if self.loaded {
            self.dirty |= layer.bit();
        }
    }

    /// Request a redraw of every layer.
    pub fn mark_all_dirty(&mut self) {
        self.mark_dirty(Layer::Background);
        self.mark_dirty(Layer::Hands);
    }

    #[inline]
    pub const fn is_dirty(
        &self,
        layer: Layer,
    ) -> bool {
        self.dirty & layer.bit() != 0
    }

    #[inline]
    pub const fn needs_redraw(&self) -> bool { self.dirty != 0 }

    /// Clear pending redraws. Returns `true` if any layer was dirty.
    pub fn take_dirty(&mut self) -> bool {
        let dirty = self.dirty != 0;
        self.dirty = 0;
        dirty
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_render_state() {
        let state = RenderState::new();
        assert!(!state.needs_redraw(), "Nothing to draw before load");
    }

    #[test]
    fn test_load_marks_everything_dirty() {
        let mut state = RenderState::new();
        state.load();
        assert!(state.is_dirty(Layer::Background));
        assert!(state.is_dirty(Layer::Hands));
    }

    #[test]
    fn test_take_dirty_clears() {
        let mut state = RenderState::new();
        state.load();
        assert!(state.take_dirty(), "Load leaves work pending");
        assert!(!state.needs_redraw(), "Taking dirty layers clears them");
        assert!(!state.take_dirty());
    }

    #[test]
    fn test_mark_single_layer() {
        let mut state = RenderState::new();
        state.load();
        state.take_dirty();
        state.mark_dirty(Layer::Hands);
        assert!(state.is_dirty(Layer::Hands));
        assert!(!state.is_dirty(Layer::Background), "Background untouched");
    }

    #[test]
    fn test_mark_dirty_ignored_when_unloaded() {
        let mut state = RenderState::new();
        state.mark_all_dirty();
        assert!(!state.needs_redraw(), "No layers, nothing to redraw");

        state.load();
        state.unload();
        assert!(!state.needs_redraw(), "Unload discards pending redraws");
        state.mark_dirty(Layer::Hands);
        assert!(!state.needs_redraw());
    }
}
