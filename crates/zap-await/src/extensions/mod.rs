// extensions/mod.rs
//
// Value math used by frame interpolations.
// No dependency on the scheduler, just math.

pub mod easing;
pub mod lerp;

pub use easing::Easing;
pub use lerp::{lerp, Lerp};
