//! Frame awaitables: condition waits, delays and interpolations that resume
//! once per frame.
//!
//! Every awaitable resolves to [`AwaitResult`](crate::AwaitResult): `Ok(())` when it ran to the end,
//! `Err(Cancelled)` when the driver's token fired first. They rely on a
//! [`FrameScheduler`](crate::FrameScheduler) polling them once per tick and
//! make no progress under other executors.

mod interpolate;
mod wait;

pub use interpolate::Interpolate;
pub use wait::WaitCondition;

use tokio_util::sync::CancellationToken;

use crate::core::time::Frames;
use crate::extensions::lerp::Lerp;

/// Hands out frame awaitables bound to one scheduler's frames and one
/// cancellation token. Cheap to clone; move a clone into each task.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    frames: Frames,
    cancel: CancellationToken,
    default_speed: f32,
}

impl FrameDriver {
    pub fn new(frames: Frames, cancel: CancellationToken) -> Self {
        Self {
            frames,
            cancel,
            default_speed: 1.0,
        }
    }

    /// Speed used by interpolations that don't call `with_speed`.
    pub fn with_default_speed(mut self, speed: f32) -> Self {
        self.default_speed = speed;
        self
    }

    /// Re-bind to another token, e.g. a child of a per-entity token.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// A driver cancelled by this one's token and by its own `cancel()`.
    pub fn child(&self) -> Self {
        self.clone().with_cancellation(self.cancel.child_token())
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Stop every awaitable created from this driver (and its children).
    /// They resolve to `Err(Cancelled)` on their next poll without sampling.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn frames(&self) -> &Frames {
        &self.frames
    }

    pub fn default_speed(&self) -> f32 {
        self.default_speed
    }

    /// Suspend one frame at a time until `condition` returns true.
    /// A condition that never turns true suspends until cancelled.
    pub fn wait_until<C>(&self, condition: C) -> WaitCondition<C>
    where
        C: FnMut() -> bool,
    {
        WaitCondition::new(self.frames.clone(), self.cancel.clone(), condition, true)
    }

    /// Suspend one frame at a time while `condition` returns true.
    pub fn wait_while<C>(&self, condition: C) -> WaitCondition<C>
    where
        C: FnMut() -> bool,
    {
        WaitCondition::new(self.frames.clone(), self.cancel.clone(), condition, false)
    }

    /// Resolve once `count` more frames have started. `u64::MAX` waits until cancelled.
    pub fn wait_frames(&self, count: u64) -> WaitCondition<impl FnMut() -> bool> {
        let frames = self.frames.clone();
        let resume_at = frames.index().saturating_add(count);
        self.wait_until(move || frames.index() >= resume_at)
    }

    pub fn next_frame(&self) -> WaitCondition<impl FnMut() -> bool> {
        self.wait_frames(1)
    }

    /// Drive `value_at` from step 0 to step 1 over `duration` seconds.
    /// See [`Interpolate`] for the exact sampling contract.
    pub fn interpolate<T, V, S>(&self, duration: f32, on_sample: S, value_at: V) -> Interpolate<T, V, S>
    where
        V: FnMut(f32) -> T,
        S: FnMut(T),
    {
        Interpolate::new(
            self.frames.clone(),
            self.cancel.clone(),
            duration,
            self.default_speed,
            value_at,
            on_sample,
        )
    }

    /// Linearly interpolate from `start` to `end` over `duration` seconds.
    /// The last sample is exactly `start.lerp(end, 1.0)`.
    pub fn lerp<T, S>(
        &self,
        start: T,
        end: T,
        duration: f32,
        on_sample: S,
    ) -> Interpolate<T, impl FnMut(f32) -> T, S>
    where
        T: Lerp,
        S: FnMut(T),
    {
        self.interpolate(duration, on_sample, move |step| start.lerp(end, step))
    }

    /// Wait `duration` seconds of scaled frame time.
    pub fn delay(&self, duration: f32) -> Interpolate<(), impl FnMut(f32), impl FnMut(())> {
        self.interpolate(duration, |_: ()| {}, |_: f32| {})
    }
}
