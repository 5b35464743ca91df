mod is_valid;
mod outline;

pub use is_valid::{audit_solid, IsValid};
pub use outline::{FaceOutline, Outline};
