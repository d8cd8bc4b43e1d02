pub mod nav;
pub mod pointer;
pub mod scroll;

pub use nav::{wire_anchors, wire_back_to_top, wire_menu};
pub use pointer::{wire_cursor, wire_magnetic, wire_tilt};
