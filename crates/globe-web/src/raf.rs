use globe_core::{FrameCallback, FrameScheduler};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame`-backed scheduler.
///
/// A single persistent JS closure is registered with the browser; it runs
/// whatever callback is parked in `slot`. The frame loop only ever has one
/// request outstanding, so a new request replaces (and cancels) the old one.
pub struct RafScheduler {
    window: web::Window,
    slot: Rc<RefCell<Option<FrameCallback>>>,
    pending: Cell<Option<i32>>,
    tick: Closure<dyn FnMut()>,
}

impl RafScheduler {
    pub fn new() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let slot_tick = slot.clone();
        let tick = Closure::wrap(Box::new(move || {
            // release the slot before running; the callback requests the next frame
            let callback = slot_tick.borrow_mut().take();
            if let Some(callback) = callback {
                callback();
            }
        }) as Box<dyn FnMut()>);
        Ok(Self {
            window,
            slot,
            pending: Cell::new(None),
            tick,
        })
    }
}

impl FrameScheduler for RafScheduler {
    type Id = i32;

    fn request_frame(&self, callback: FrameCallback) -> Option<i32> {
        if let Some(prev) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(prev);
        }
        *self.slot.borrow_mut() = Some(callback);
        match self
            .window
            .request_animation_frame(self.tick.as_ref().unchecked_ref())
        {
            Ok(id) => {
                self.pending.set(Some(id));
                Some(id)
            }
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                self.slot.borrow_mut().take();
                None
            }
        }
    }

    fn cancel_frame(&self, id: i32) {
        let _ = self.window.cancel_animation_frame(id);
        if self.pending.get() == Some(id) {
            self.pending.set(None);
            self.slot.borrow_mut().take();
        }
    }
}

impl Drop for RafScheduler {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}
