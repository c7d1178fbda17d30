// core/scheduler.rs
//
// Cooperative per-frame executor. The host calls `tick(dt)` once per rendered
// frame; every live task is polled exactly once per tick, in submission order.
//
// Usage:
//   let mut scheduler = FrameScheduler::new();
//   let driver = scheduler.driver();
//   scheduler.spawn(async move {
//       let _ = driver.lerp(0.0, 1.0, 0.5, |v| set_alpha(v)).await;
//   });
//   scheduler.tick(dt);  // from the host's frame callback

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::future::Future;
use std::rc::Rc;
use std::task::Context;

use futures::future::{FutureExt, LocalBoxFuture};
use futures::task::noop_waker_ref;
use tokio_util::sync::CancellationToken;

use crate::api::config::DriverConfig;
use crate::api::types::TaskId;
use crate::core::time::{FrameClock, FrameTime, Frames};
use crate::driver::FrameDriver;

struct Task {
    future: LocalBoxFuture<'static, ()>,
    /// Paused tasks stay registered but are skipped by `tick`.
    playing: bool,
}

/// Id allocation and the queue of tasks spawned through a [`Spawner`].
#[derive(Default)]
struct SpawnQueue {
    next_id: Cell<u32>,
    pending: RefCell<Vec<(TaskId, Task)>>,
}

impl SpawnQueue {
    fn allocate(&self) -> TaskId {
        let id = TaskId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        id
    }
}

/// Cloneable handle for spawning tasks from inside running tasks.
///
/// Tasks spawned here are admitted at the next frame boundary and first
/// polled on the following tick.
#[derive(Clone)]
pub struct Spawner {
    queue: Rc<SpawnQueue>,
}

impl Spawner {
    pub fn spawn<F>(&self, future: F) -> TaskId
    where
        F: Future<Output = ()> + 'static,
    {
        let id = self.queue.allocate();
        let task = Task {
            future: future.boxed_local(),
            playing: true,
        };
        self.queue.pending.borrow_mut().push((id, task));
        log::debug!("task {:?} queued", id);
        id
    }
}

/// Owns all spawned tasks and the frame clock they observe.
pub struct FrameScheduler {
    tasks: BTreeMap<TaskId, Task>,
    queue: Rc<SpawnQueue>,
    clock: FrameClock,
    config: DriverConfig,
    /// Parent of every token handed out through `driver()`.
    root: CancellationToken,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::with_config(DriverConfig::default())
    }

    pub fn with_config(config: DriverConfig) -> Self {
        Self {
            tasks: BTreeMap::new(),
            queue: Rc::new(SpawnQueue::default()),
            clock: FrameClock::with_config(&config),
            config,
            root: CancellationToken::new(),
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// A driver bound to this scheduler's frames and cancelled by `cancel_all`.
    pub fn driver(&self) -> FrameDriver {
        FrameDriver::new(self.frames(), self.root.child_token())
            .with_default_speed(self.config.default_speed)
    }

    pub fn spawner(&self) -> Spawner {
        Spawner {
            queue: Rc::clone(&self.queue),
        }
    }

    pub fn frames(&self) -> Frames {
        self.clock.frames()
    }

    /// Number of ticks so far.
    pub fn frame_index(&self) -> u64 {
        self.clock.now().index
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.config.time_scale = scale;
        self.clock.set_time_scale(scale);
    }

    /// Register a task. It first runs on the next `tick`.
    pub fn spawn<F>(&mut self, future: F) -> TaskId
    where
        F: Future<Output = ()> + 'static,
    {
        let id = self.queue.allocate();
        self.tasks.insert(
            id,
            Task {
                future: future.boxed_local(),
                playing: true,
            },
        );
        log::debug!("task {:?} spawned", id);
        id
    }

    /// Advance one frame and poll every playing task once.
    /// Returns the number of tasks that finished this tick.
    pub fn tick(&mut self, dt: f32) -> usize {
        self.admit_spawned();
        let FrameTime { index, delta, .. } = self.clock.advance(dt);
        log::trace!(
            "frame {}: dt {:.4}, polling {} tasks",
            index,
            delta,
            self.tasks.len()
        );

        let mut cx = Context::from_waker(noop_waker_ref());
        let mut completed = Vec::new();

        for (&id, task) in self.tasks.iter_mut() {
            if !task.playing {
                continue;
            }
            if task.future.as_mut().poll(&mut cx).is_ready() {
                completed.push(id);
            }
        }

        let count = completed.len();
        for id in completed {
            self.tasks.remove(&id);
            log::debug!("task {:?} finished on frame {}", id, index);
        }

        self.admit_spawned();
        count
    }

    fn admit_spawned(&mut self) {
        let pending = std::mem::take(&mut *self.queue.pending.borrow_mut());
        self.tasks.extend(pending);
    }

    /// Drop a task. It gets no further polls, so no further callbacks run.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let removed = self.tasks.remove(&id).is_some() || self.remove_pending(id);
        if removed {
            log::debug!("task {:?} cancelled", id);
        }
        removed
    }

    fn remove_pending(&mut self, id: TaskId) -> bool {
        let removed = {
            let mut pending = self.queue.pending.borrow_mut();
            pending
                .iter()
                .position(|(queued, _)| *queued == id)
                .map(|idx| pending.remove(idx))
        };
        // Dropped outside the borrow: a future's Drop may spawn.
        removed.is_some()
    }

    /// Cancel every driver handed out so far and drop every task.
    /// Drivers created afterwards use a fresh token.
    pub fn cancel_all(&mut self) {
        self.root.cancel();
        self.root = CancellationToken::new();

        // Dropping a future may queue another task through a Spawner; keep
        // draining until nothing is left.
        let mut count = 0;
        loop {
            let pending = std::mem::take(&mut *self.queue.pending.borrow_mut());
            let tasks = std::mem::take(&mut self.tasks);
            if pending.is_empty() && tasks.is_empty() {
                break;
            }
            count += pending.len() + tasks.len();
            drop(pending);
            drop(tasks);
        }
        log::debug!("cancelled all tasks ({})", count);
    }

    /// Stop polling a task until `resume`. Works for queued tasks too.
    pub fn pause(&mut self, id: TaskId) {
        self.set_playing(id, false);
    }

    pub fn resume(&mut self, id: TaskId) {
        self.set_playing(id, true);
    }

    pub fn pause_all(&mut self) {
        self.set_all_playing(false);
    }

    pub fn resume_all(&mut self) {
        self.set_all_playing(true);
    }

    fn set_playing(&mut self, id: TaskId, playing: bool) {
        if let Some(task) = self.tasks.get_mut(&id) {
            task.playing = playing;
            return;
        }
        if let Some((_, task)) = self
            .queue
            .pending
            .borrow_mut()
            .iter_mut()
            .find(|(queued, _)| *queued == id)
        {
            task.playing = playing;
        }
    }

    fn set_all_playing(&mut self, playing: bool) {
        for task in self.tasks.values_mut() {
            task.playing = playing;
        }
        for (_, task) in self.queue.pending.borrow_mut().iter_mut() {
            task.playing = playing;
        }
    }

    /// Whether a task is registered and not yet finished or cancelled.
    pub fn is_running(&self, id: TaskId) -> bool {
        self.tasks.contains_key(&id)
            || self
                .queue
                .pending
                .borrow()
                .iter()
                .any(|(queued, _)| *queued == id)
    }

    pub fn is_paused(&self, id: TaskId) -> bool {
        if let Some(task) = self.tasks.get(&id) {
            return !task.playing;
        }
        self.queue
            .pending
            .borrow()
            .iter()
            .any(|(queued, task)| *queued == id && !task.playing)
    }

    /// Number of live tasks, including ones queued through a `Spawner`.
    pub fn len(&self) -> usize {
        self.tasks.len() + self.queue.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}
