use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Long stalls (hidden tab, debugger) would otherwise snap every eased value.
const MAX_FRAME_DT_SEC: f32 = 0.1;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop handing the callback the seconds since the
/// previous frame. Cancelled, pending frame included, when dropped.
pub struct FrameLoop {
    tick: Tick,
    pending: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f32) + 'static) -> Option<Self> {
        web::window()?;
        let tick: Tick = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let stopped = Rc::new(Cell::new(false));

        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        let stopped_tick = stopped.clone();
        let mut last_instant = Instant::now();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if stopped_tick.get() {
                return;
            }
            let now = Instant::now();
            let dt_sec = (now - last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
            last_instant = now;
            on_frame(dt_sec);
            pending_tick.set(request(&tick_clone));
        }) as Box<dyn FnMut()>));

        pending.set(request(&tick));
        if pending.get().is_none() {
            log::error!("[frame] requestAnimationFrame unavailable");
        }
        Some(Self {
            tick,
            pending,
            stopped,
        })
    }

    pub fn cancel(&self) {
        self.stopped.set(true);
        if let Some(handle) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(handle);
            }
            log::debug!("[frame] cancelled pending frame {}", handle);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
        // breaks the closure's reference to itself
        self.tick.borrow_mut().take();
    }
}

fn request(tick: &Tick) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let callback = tick.as_ref()?;
    w.request_animation_frame(callback.as_ref().unchecked_ref()).ok()
}
