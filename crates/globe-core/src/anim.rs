//! Frame loop and mount/unmount lifecycle.
//!
//! The host supplies a [`FrameScheduler`] (requestAnimationFrame in the
//! browser, a cooperative [`FrameQueue`] on native). [`start`] schedules the
//! first frame and returns a [`LoopHandle`]; each frame renders, hands the
//! grid to the sink, then requests the next frame. Once
//! [`LoopHandle::stop`] returns, no further frame runs. Dropping the handle
//! stops the loop as well.
//!
//! Everything is single threaded. A scheduler must never invoke a callback
//! from inside `request_frame`; callbacks run later, one frame at a time.

use crate::config::Shading;
use crate::grid::{FrameBuffers, Grid};
use crate::raster::Rasterizer;
use crate::rotation::Rotation;
use crate::stats::FrameStats;
use rand::prelude::*;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

pub type FrameCallback = Box<dyn FnOnce()>;

pub trait FrameScheduler {
    type Id: Copy + fmt::Debug;

    /// Run `callback` once at the next frame boundary. `None` means the
    /// host refused the request and the callback will never run.
    fn request_frame(&self, callback: FrameCallback) -> Option<Self::Id>;

    /// Forget a pending request. Unknown or already-fired ids are ignored.
    fn cancel_frame(&self, id: Self::Id);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for Rc<S> {
    type Id = S::Id;

    fn request_frame(&self, callback: FrameCallback) -> Option<Self::Id> {
        (**self).request_frame(callback)
    }

    fn cancel_frame(&self, id: Self::Id) {
        (**self).cancel_frame(id)
    }
}

/// Rasterizer plus the rotation state of one mounted globe.
pub struct Animator {
    raster: Rasterizer,
    rotation: Rotation,
    buffers: FrameBuffers,
    rng: StdRng,
}

impl Animator {
    pub fn new(raster: Rasterizer) -> Self {
        let rng = match raster.config().shading {
            Shading::Sparkle => StdRng::from_entropy(),
            Shading::Stable { seed } => StdRng::seed_from_u64(seed),
        };
        Self::with_rng(raster, rng)
    }

    pub fn with_rng(raster: Rasterizer, rng: StdRng) -> Self {
        let rotation = Rotation::new(raster.config().step);
        let buffers = raster.buffers();
        Self {
            raster,
            rotation,
            buffers,
            rng,
        }
    }

    pub fn rasterizer(&self) -> &Rasterizer {
        &self.raster
    }

    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// Render at the current angle, then advance by one step.
    pub fn tick(&mut self) -> &Grid {
        let angle = self.rotation.angle();
        self.raster
            .render_into(&mut self.buffers, angle, &mut self.rng);
        self.rotation.advance();
        self.buffers.grid()
    }

    /// Back to angle zero, as on a fresh mount.
    pub fn reset(&mut self) {
        self.rotation.reset();
    }
}

type Sink = Box<dyn FnMut(&Grid)>;

struct LoopState<S: FrameScheduler> {
    scheduler: S,
    animator: Animator,
    sink: Option<Sink>,
    pending: Option<S::Id>,
    stats: FrameStats,
}

// Readable while a frame holds the state borrow, i.e. from inside the sink.
#[derive(Default)]
struct Progress {
    stopped: Cell<bool>,
    frames: Cell<u64>,
    angle: Cell<f64>,
}

/// Opaque handle to a running frame loop.
pub struct LoopHandle<S: FrameScheduler + 'static> {
    state: Rc<RefCell<LoopState<S>>>,
    progress: Rc<Progress>,
}

pub fn start<S, F>(scheduler: S, animator: Animator, sink: F) -> LoopHandle<S>
where
    S: FrameScheduler + 'static,
    F: FnMut(&Grid) + 'static,
{
    let cfg = animator.rasterizer().config();
    log::info!(
        "globe loop starting ({}x{}, step {:.3} rad)",
        cfg.width,
        cfg.height,
        cfg.step
    );
    let state = Rc::new(RefCell::new(LoopState {
        scheduler,
        animator,
        sink: Some(Box::new(sink)),
        pending: None,
        stats: FrameStats::default(),
    }));
    let progress = Rc::new(Progress::default());
    schedule_next(&state, &progress);
    LoopHandle { state, progress }
}

fn schedule_next<S: FrameScheduler + 'static>(
    state: &Rc<RefCell<LoopState<S>>>,
    progress: &Rc<Progress>,
) {
    let weak: Weak<RefCell<LoopState<S>>> = Rc::downgrade(state);
    let shared = progress.clone();
    let callback: FrameCallback = Box::new(move || {
        if shared.stopped.get() {
            return;
        }
        if let Some(state) = weak.upgrade() {
            run_frame(&state, &shared);
        }
    });
    let mut st = state.borrow_mut();
    match st.scheduler.request_frame(callback) {
        Some(id) => st.pending = Some(id),
        None => {
            progress.stopped.set(true);
            st.sink = None;
            log::warn!(
                "frame request refused; globe loop stopped after {} frames",
                progress.frames.get()
            );
        }
    }
}

fn run_frame<S: FrameScheduler + 'static>(
    state: &Rc<RefCell<LoopState<S>>>,
    progress: &Rc<Progress>,
) {
    {
        let mut guard = state.borrow_mut();
        let st = &mut *guard;
        st.pending = None;
        let frames = progress.frames.get() + 1;
        progress.frames.set(frames);
        let grid = st.animator.tick();
        if let Some(sink) = st.sink.as_mut() {
            sink(grid);
        }
        progress.angle.set(st.animator.rotation().angle());
        if let Some(fps) = st.stats.record() {
            log::debug!("globe: {:.1} fps over {} frames", fps, frames);
        }
        if progress.stopped.get() {
            // stop() was called from inside the sink
            st.sink = None;
            log::info!("globe loop stopped after {} frames", frames);
            return;
        }
    }
    schedule_next(state, progress);
}

impl<S: FrameScheduler + 'static> LoopHandle<S> {
    /// Stop the loop. No frame callback runs after this returns.
    pub fn stop(&self) {
        if self.progress.stopped.replace(true) {
            return;
        }
        // Borrowed only when called from within a frame; run_frame then
        // sees the flag and tears down itself.
        if let Ok(mut st) = self.state.try_borrow_mut() {
            if let Some(id) = st.pending.take() {
                st.scheduler.cancel_frame(id);
            }
            st.sink = None;
            log::info!("globe loop stopped after {} frames", self.progress.frames.get());
        }
    }

    pub fn is_running(&self) -> bool {
        !self.progress.stopped.get()
    }

    /// Frames rendered so far, counting the one being drawn.
    pub fn frames(&self) -> u64 {
        self.progress.frames.get()
    }

    /// Rotation angle of the next frame to render. Inside the sink this is
    /// still the angle of the grid being drawn.
    pub fn angle(&self) -> f64 {
        self.progress.angle.get()
    }
}

impl<S: FrameScheduler + 'static> Drop for LoopHandle<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Cooperative scheduler: callbacks queue up until the host calls
/// [`run_pending`](FrameQueue::run_pending) at its frame boundary.
#[derive(Default)]
pub struct FrameQueue {
    next_id: Cell<u64>,
    queue: RefCell<VecDeque<(u64, FrameCallback)>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every callback that was queued before this call. Callbacks
    /// requested while running wait for the next call.
    pub fn run_pending(&self) -> usize {
        let ids: Vec<u64> = self.queue.borrow().iter().map(|(id, _)| *id).collect();
        let mut ran = 0;
        for id in ids {
            let entry = {
                let mut q = self.queue.borrow_mut();
                q.iter()
                    .position(|(i, _)| *i == id)
                    .and_then(|pos| q.remove(pos))
            };
            if let Some((_, callback)) = entry {
                callback();
                ran += 1;
            }
        }
        ran
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl FrameScheduler for FrameQueue {
    type Id = u64;

    fn request_frame(&self, callback: FrameCallback) -> Option<u64> {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        self.queue.borrow_mut().push_back((id, callback));
        Some(id)
    }

    fn cancel_frame(&self, id: u64) {
        self.queue.borrow_mut().retain(|(i, _)| *i != id);
    }
}
