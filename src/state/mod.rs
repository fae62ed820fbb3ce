pub mod drag;
pub mod spin;

pub use drag::DragRotation;
pub use spin::Spin;
