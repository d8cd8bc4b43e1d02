use super::constants::{MAGNET_STRENGTH, TILT_DIVISOR, TILT_LIFT_PX, TILT_PERSPECTIVE_PX};
use glam::Vec2;

pub const TILT_RESET_CSS: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";
pub const MAGNET_RESET_CSS: &str = "translate(0, 0)";

/// Viewport-relative bounding box of a hovered element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementRect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl ElementRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }
}

/// Card rotation in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl Tilt {
    /// Rotation proportional to the pointer's offset from the card center.
    pub fn from_pointer(pointer: Vec2, rect: ElementRect) -> Self {
        let offset = pointer - rect.center();
        Self {
            rotate_x: offset.y / TILT_DIVISOR,
            rotate_y: -offset.x / TILT_DIVISOR,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateY({}px)",
            TILT_PERSPECTIVE_PX, self.rotate_x, self.rotate_y, TILT_LIFT_PX
        )
    }
}

/// Translation pulling a button toward the pointer.
#[inline]
pub fn magnet_offset(pointer: Vec2, rect: ElementRect) -> Vec2 {
    (pointer - rect.center()) * MAGNET_STRENGTH
}

pub fn magnet_css(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}
