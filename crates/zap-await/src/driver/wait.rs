use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio_util::sync::CancellationToken;

use crate::api::error::{AwaitResult, Cancelled};
use crate::core::time::{Frames, NextFrame};

/// Polls a condition once per frame until it returns `until`.
///
/// Built by [`FrameDriver::wait_until`](super::FrameDriver::wait_until) and
/// [`FrameDriver::wait_while`](super::FrameDriver::wait_while).
#[must_use = "futures do nothing unless awaited"]
pub struct WaitCondition<C> {
    frames: Frames,
    cancel: CancellationToken,
    condition: C,
    until: bool,
    next: Option<NextFrame>,
}

// No field is structurally pinned.
impl<C> Unpin for WaitCondition<C> {}

impl<C> WaitCondition<C>
where
    C: FnMut() -> bool,
{
    pub(crate) fn new(frames: Frames, cancel: CancellationToken, condition: C, until: bool) -> Self {
        Self {
            frames,
            cancel,
            condition,
            until,
            next: None,
        }
    }
}

impl<C> Future for WaitCondition<C>
where
    C: FnMut() -> bool,
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
        }

        if (this.condition)() == this.until {
            return Poll::Ready(Ok(()));
        }

        this.next = Some(this.frames.next_frame());
        Poll::Pending
    }
}
