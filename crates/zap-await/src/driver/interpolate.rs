use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio_util::sync::CancellationToken;

use crate::api::error::{AwaitResult, Cancelled};
use crate::core::time::{Frames, NextFrame};
use crate::extensions::easing::Easing;

/// Drives `value_at(step)` from step 0 to step 1 over `duration` seconds,
/// handing every produced value to `on_sample`.
///
/// Each frame while `elapsed < duration` it samples `value_at(elapsed / duration)`,
/// suspends for one frame, then accrues `delta * speed`. After the loop it samples
/// `value_at(1.0)` exactly once, so the end value is always delivered even when the
/// last in-loop step fell short of 1.
///
/// A `speed <= 0` never accrues time and the interpolation only ends through
/// cancellation.
#[must_use = "futures do nothing unless awaited"]
pub struct Interpolate<T, V, S> {
    frames: Frames,
    cancel: CancellationToken,
    duration: f32,
    speed: f32,
    easing: Option<Easing>,
    value_at: V,
    on_sample: S,
    elapsed: f32,
    next: Option<NextFrame>,
    _value: PhantomData<fn() -> T>,
}

// No field is structurally pinned.
impl<T, V, S> Unpin for Interpolate<T, V, S> {}

impl<T, V, S> Interpolate<T, V, S>
where
    V: FnMut(f32) -> T,
    S: FnMut(T),
{
    pub(crate) fn new(
        frames: Frames,
        cancel: CancellationToken,
        duration: f32,
        speed: f32,
        value_at: V,
        on_sample: S,
    ) -> Self {
        Self {
            frames,
            cancel,
            duration,
            speed,
            easing: None,
            value_at,
            on_sample,
            elapsed: 0.0,
            next: None,
            _value: PhantomData,
        }
    }

    /// Multiplier on time accrual (>1 faster, <1 slower).
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Remap in-loop steps through an easing curve. The final sample still uses step 1.
    ///
    /// Samples follow the curve, so non-monotonic curves such as `BackOut` and
    /// `BounceOut` give samples out of step order, and `BackOut` passes the end
    /// value before settling on it.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Seconds accrued so far.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
}

impl<T, V, S> Future for Interpolate<T, V, S>
where
    V: FnMut(f32) -> T,
    S: FnMut(T),
{
    type Output = AwaitResult;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<AwaitResult> {
        let this = self.get_mut();

        if this.cancel.is_cancelled() {
            return Poll::Ready(Err(Cancelled));
        }

        if let Some(next) = this.next.as_mut() {
            if Pin::new(next).poll(cx).is_pending() {
                return Poll::Pending;
            }
            this.next = None;
            this.elapsed += (this.frames.delta() * this.speed).max(0.0);
        }

        if this.elapsed < this.duration {
            let step = this.elapsed / this.duration;
            let step = match this.easing {
                Some(easing) => easing.apply(step),
                None => step,
            };
            (this.on_sample)((this.value_at)(step));
            this.next = Some(this.frames.next_frame());
            return Poll::Pending;
        }

        (this.on_sample)((this.value_at)(1.0));
        Poll::Ready(Ok(()))
    }
}
