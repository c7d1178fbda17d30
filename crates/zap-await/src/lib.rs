pub mod api;
pub mod core;
pub mod driver;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use crate::api::config::DriverConfig;
pub use crate::api::error::{AwaitResult, Cancelled};
pub use crate::api::types::{Color, TaskId};
pub use crate::core::scheduler::{FrameScheduler, Spawner};
pub use crate::core::time::{FrameClock, FrameTime, Frames, NextFrame};
pub use crate::driver::{FrameDriver, Interpolate, WaitCondition};
pub use crate::extensions::{lerp, Easing, Lerp};

pub use tokio_util::sync::CancellationToken;
