use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use crate::api::config::DriverConfig;

/// Frame timing snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Number of frames advanced so far (0 before the first tick).
    pub index: u64,
    /// Scaled delta of the current frame, in seconds.
    pub delta: f32,
    /// Sum of all scaled deltas, in seconds.
    pub time: f64,
}

#[derive(Debug, Default)]
struct FrameState {
    index: Cell<u64>,
    delta: Cell<f32>,
    time: Cell<f64>,
}

/// Owns the frame counter and turns host deltas into the deltas tasks observe.
/// Only the scheduler advances it; everything else reads through [`Frames`].
#[derive(Debug)]
pub struct FrameClock {
    state: Rc<FrameState>,
    time_scale: f32,
    max_delta: Option<f32>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_config(&DriverConfig::default())
    }

    pub fn with_config(config: &DriverConfig) -> Self {
        Self {
            state: Rc::new(FrameState::default()),
            time_scale: config.time_scale,
            max_delta: config.max_delta,
        }
    }

    /// Start a new frame with the host's delta (seconds since the previous frame).
    ///
    /// Negative and NaN deltas count as zero; `max_delta` caps the raw delta before
    /// `time_scale` is applied.
    pub fn advance(&mut self, dt: f32) -> FrameTime {
        let mut dt = dt.max(0.0);
        if let Some(max) = self.max_delta {
            dt = dt.min(max);
        }
        let delta = (dt * self.time_scale).max(0.0);

        let state = &self.state;
        state.index.set(state.index.get() + 1);
        state.delta.set(delta);
        state.time.set(state.time.get() + delta as f64);
        self.now()
    }

    pub fn now(&self) -> FrameTime {
        FrameTime {
            index: self.state.index.get(),
            delta: self.state.delta.get(),
            time: self.state.time.get(),
        }
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Takes effect from the next `advance`.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale;
    }

    /// A read-only handle for awaitables.
    pub fn frames(&self) -> Frames {
        Frames {
            state: Rc::clone(&self.state),
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only, cloneable view of a [`FrameClock`].
#[derive(Debug, Clone)]
pub struct Frames {
    state: Rc<FrameState>,
}

impl Frames {
    pub fn index(&self) -> u64 {
        self.state.index.get()
    }

    /// Delta of the current frame in seconds.
    pub fn delta(&self) -> f32 {
        self.state.delta.get()
    }

    pub fn time(&self) -> f64 {
        self.state.time.get()
    }

    /// Resolves on the first poll after the next frame starts.
    pub fn next_frame(&self) -> NextFrame {
        self.wait_frames(1)
    }

    /// Resolves once `count` more frames have started. `count == 0` is ready at once.
    pub fn wait_frames(&self, count: u64) -> NextFrame {
        NextFrame {
            frames: self.clone(),
            resume_at: self.index().saturating_add(count),
        }
    }
}

/// Suspends the awaiting task until a given frame index is reached.
///
/// It never registers a waker: it relies on the scheduler polling every live
/// task once per frame.
#[derive(Debug)]
#[must_use = "futures do nothing unless awaited"]
pub struct NextFrame {
    frames: Frames,
    resume_at: u64,
}

impl Future for NextFrame {
    type Output = ();

    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
        if self.frames.index() >= self.resume_at {
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    }
}
