//! Full-screen pages shown instead of the face.

mod debug;

pub use debug::draw_debug_page;
