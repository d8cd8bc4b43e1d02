use super::constants::RING_EASE;
use glam::Vec2;

/// Selectors whose hover expands the cursor ring.
pub const INTERACTIVE_SELECTORS: &str = "a, button, .project-card, .software-item, .doc-card, .filter-btn";

/// Raw pointer position plus the eased ring that trails it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorFollower {
    pub pointer: Vec2,
    pub ring: Vec2,
    pub expanded: bool,
}

impl CursorFollower {
    #[inline]
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Advance the ring one animation frame toward the pointer.
    #[inline]
    pub fn step(&mut self) -> Vec2 {
        self.ring += (self.pointer - self.ring) * RING_EASE;
        self.ring
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }
}
