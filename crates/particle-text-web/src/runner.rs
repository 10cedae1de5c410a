//! Owned browser scheduling handles.
//!
//! Each handle registers its callback on creation and unregisters it on drop,
//! so tearing down the element cannot leave a timer or listener behind.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

/// A `setInterval` registration. Dropping it clears the interval.
pub struct IntervalHandle {
    window: Window,
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl IntervalHandle {
    pub fn start(window: &Window, period_ms: i32, on_fire: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut()>::new(on_fire);
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms,
        )?;
        Ok(Self {
            window: window.clone(),
            id,
            _callback: callback,
        })
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.id);
    }
}

/// A self-rescheduling `requestAnimationFrame` loop. Dropping it cancels the pending frame.
pub struct AnimationLoop {
    window: Window,
    inner: Rc<LoopInner>,
}

struct LoopInner {
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
    request_id: Cell<Option<i32>>,
}

impl LoopInner {
    fn request(&self, window: &Window) -> Result<(), JsValue> {
        if let Some(callback) = self.callback.borrow().as_ref() {
            let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
            self.request_id.set(Some(id));
        }
        Ok(())
    }
}

impl AnimationLoop {
    pub fn start(window: &Window, mut on_frame: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let inner = Rc::new(LoopInner {
            callback: RefCell::new(None),
            request_id: Cell::new(None),
        });

        // The closure only holds a weak ref, so the loop dies with its handle
        let weak = Rc::downgrade(&inner);
        let frame_window = window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.request_id.set(None);
            on_frame();
            if let Err(e) = inner.request(&frame_window) {
                log::warn!("requestAnimationFrame failed, frame loop stopped: {:?}", e);
            }
        });
        *inner.callback.borrow_mut() = Some(callback);
        inner.request(window)?;

        Ok(Self {
            window: window.clone(),
            inner,
        })
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(id) = self.inner.request_id.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
        self.inner.callback.borrow_mut().take();
    }
}

/// A DOM event listener registration. Dropping it removes the listener.
pub struct EventListener {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl EventListener {
    pub fn new(
        target: &web_sys::EventTarget,
        event: &'static str,
        on_event: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut()>::new(on_event);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let removed = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        if let Err(e) = removed {
            log::warn!("removeEventListener({}) failed: {:?}", self.event, e);
        }
    }
}
