//! Scroll and intersection listeners scoped to a component's lifetime.
//!
//! Each subscription is created in a mount effect and dropped by the effect's
//! destructor. Dropping removes the browser listener and revokes the Rust
//! callback, so an event the browser already queued lands on a dead handle
//! and does nothing.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("no browser window available")]
    NoWindow,
    #[error("failed to register {kind} listener: {reason}")]
    Register { kind: &'static str, reason: String },
}

impl ListenerError {
    fn register(kind: &'static str, err: JsValue) -> Self {
        ListenerError::Register {
            kind,
            reason: format!("{:?}", err),
        }
    }
}

type Slot<T> = RefCell<Option<Box<dyn FnMut(T)>>>;

/// Owner of a revocable callback. Handles fire it until [`Guarded::revoke`]
/// is called or the owner is dropped.
pub struct Guarded<T> {
    slot: Rc<Slot<T>>,
}

impl<T: 'static> Guarded<T> {
    pub fn new(callback: impl FnMut(T) + 'static) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(Box::new(callback)))),
        }
    }

    pub fn handle(&self) -> GuardedHandle<T> {
        GuardedHandle {
            slot: Rc::downgrade(&self.slot),
        }
    }

    /// Drops the callback and everything it captured.
    pub fn revoke(&self) {
        // Take first so the callback's captures drop outside the borrow.
        let callback = self.slot.borrow_mut().take();
        drop(callback);
    }

    #[cfg(test)]
    pub fn is_live(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

pub struct GuardedHandle<T> {
    slot: Weak<Slot<T>>,
}

impl<T> Clone for GuardedHandle<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T> GuardedHandle<T> {
    /// Returns whether the callback ran.
    pub fn fire(&self, value: T) -> bool {
        let Some(slot) = self.slot.upgrade() else {
            return false;
        };
        let Ok(mut callback) = slot.try_borrow_mut() else {
            return false;
        };
        match callback.as_mut() {
            Some(callback) => {
                callback(value);
                true
            }
            None => false,
        }
    }
}

/// Window `scroll` listener forwarding `scroll_y` on every native event.
pub struct ScrollSubscription {
    window: Window,
    closure: Closure<dyn FnMut()>,
    guard: Guarded<f64>,
}

impl ScrollSubscription {
    pub fn attach(on_scroll: impl FnMut(f64) + 'static) -> Result<Self, ListenerError> {
        let window = web_sys::window().ok_or(ListenerError::NoWindow)?;
        let guard = Guarded::new(on_scroll);
        let handle = guard.handle();

        let reader = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Ok(offset) = reader.scroll_y() {
                handle.fire(offset);
            }
        }) as Box<dyn FnMut()>);

        window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .map_err(|e| ListenerError::register("scroll", e))?;

        Ok(Self {
            window,
            closure,
            guard,
        })
    }

    /// Runs the callback once with the current offset, for state on mount.
    pub fn emit_current(&self) {
        if let Ok(offset) = self.window.scroll_y() {
            self.guard.handle().fire(offset);
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.guard.revoke();
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref());
    }
}

/// `IntersectionObserver` on one element, forwarding its intersection ratio.
pub struct VisibilitySubscription {
    observer: IntersectionObserver,
    _closure: Closure<dyn FnMut(Array, IntersectionObserver)>,
    guard: Guarded<f64>,
}

impl VisibilitySubscription {
    pub fn attach(
        target: &Element,
        threshold: f64,
        on_ratio: impl FnMut(f64) + 'static,
    ) -> Result<Self, ListenerError> {
        let guard = Guarded::new(on_ratio);
        let handle = guard.handle();

        let closure = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                handle.fire(ratio);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        // Zero is included so leaving the viewport is reported as well.
        let thresholds = Array::of2(&JsValue::from_f64(0.0), &JsValue::from_f64(threshold));
        let options = IntersectionObserverInit::new();
        options.set_threshold(&thresholds);

        let callback: &Function = closure.as_ref().unchecked_ref();
        let observer = IntersectionObserver::new_with_options(callback, &options)
            .map_err(|e| ListenerError::register("intersection", e))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _closure: closure,
            guard,
        })
    }
}

impl Drop for VisibilitySubscription {
    fn drop(&mut self) {
        self.guard.revoke();
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn handle_fires_while_live() {
        let seen = Rc::new(Cell::new(0.0));
        let guard = {
            let seen = seen.clone();
            Guarded::new(move |offset: f64| seen.set(offset))
        };
        let handle = guard.handle();
        assert!(handle.fire(120.0));
        assert_eq!(seen.get(), 120.0);
        assert!(guard.is_live());
    }

    #[test]
    fn fire_after_revoke_is_a_noop() {
        let calls = Rc::new(Cell::new(0));
        let guard = {
            let calls = calls.clone();
            Guarded::new(move |_: f64| calls.set(calls.get() + 1))
        };
        let handle = guard.handle();
        handle.fire(10.0);
        guard.revoke();
        assert!(!handle.fire(300.0));
        assert_eq!(calls.get(), 1);
        assert!(!guard.is_live());
    }

    #[test]
    fn fire_after_owner_dropped_is_a_noop() {
        let calls = Rc::new(Cell::new(0));
        let guard = {
            let calls = calls.clone();
            Guarded::new(move |_: f64| calls.set(calls.get() + 1))
        };
        let handle = guard.handle();
        let cloned = handle.clone();
        drop(guard);
        assert!(!handle.fire(300.0));
        assert!(!cloned.fire(300.0));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn revoke_releases_captured_state() {
        let state = Rc::new(Cell::new(false));
        let guard = {
            let state = state.clone();
            Guarded::new(move |_: f64| state.set(true))
        };
        assert_eq!(Rc::strong_count(&state), 2);
        guard.revoke();
        assert_eq!(Rc::strong_count(&state), 1);
    }

    #[test]
    fn reentrant_fire_is_skipped() {
        let inner: Rc<RefCell<Option<GuardedHandle<f64>>>> = Rc::new(RefCell::new(None));
        let reentered = Rc::new(Cell::new(None));
        let guard = {
            let inner = inner.clone();
            let reentered = reentered.clone();
            Guarded::new(move |_: f64| {
                if let Some(handle) = inner.borrow().as_ref() {
                    reentered.set(Some(handle.fire(1.0)));
                }
            })
        };
        *inner.borrow_mut() = Some(guard.handle());
        assert!(guard.handle().fire(0.0));
        assert_eq!(reentered.get(), Some(false));
    }
}
