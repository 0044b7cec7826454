//! Eased in-page scrolling to a section, stopping short of the fixed nav bar.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use web_sys::js_sys::Date;

use crate::config::ScrollSettings;

const FRAME_MS: u32 = 16;

pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Where the window should land so the section sits just below the nav bar.
pub fn anchor_target(section_top: f64, nav_offset: f64) -> f64 {
    (section_top - nav_offset).max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTween {
    from: f64,
    to: f64,
    duration_ms: f64,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms: f64::from(duration_ms),
        }
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }

    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        if self.is_finished(elapsed_ms) {
            return self.to;
        }
        let progress = ease_in_out_cubic(elapsed_ms / self.duration_ms);
        self.from + (self.to - self.from) * progress
    }
}

/// Drives one scroll animation at a time. Starting a new one, or dropping the
/// scroller, cancels whatever is running.
#[derive(Default)]
pub struct SmoothScroller {
    running: Rc<RefCell<Option<Interval>>>,
}

impl SmoothScroller {
    pub fn cancel(&self) {
        self.running.borrow_mut().take();
    }

    pub fn scroll_to_section(&self, id: &str, settings: &ScrollSettings) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(element) = window.document().and_then(|d| d.get_element_by_id(id)) else {
            warn!("No section with id {}", id);
            return;
        };

        let from = window.scroll_y().unwrap_or(0.0);
        let top = element.get_bounding_client_rect().top() + from;
        let tween = ScrollTween::new(
            from,
            anchor_target(top, settings.nav_offset_px),
            settings.scroll_duration_ms,
        );
        debug!("Scrolling to #{} ({:?})", id, tween);

        self.cancel();
        let started = Date::now();
        let running = Rc::downgrade(&self.running);
        let interval = Interval::new(FRAME_MS, move || {
            let elapsed = Date::now() - started;
            window.scroll_to_with_x_and_y(0.0, tween.position_at(elapsed));
            if tween.is_finished(elapsed) {
                if let Some(running) = running.upgrade() {
                    // wasm-bindgen frees the tick closure only after this call returns.
                    if let Ok(mut slot) = running.try_borrow_mut() {
                        slot.take();
                    }
                }
            }
        });
        *self.running.borrow_mut() = Some(interval);
    }
}

impl Drop for SmoothScroller {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-9);
        assert_eq!(ease_in_out_cubic(-3.0), 0.0);
        assert_eq!(ease_in_out_cubic(7.0), 1.0);
    }

    #[test]
    fn anchor_target_subtracts_nav_height() {
        assert_eq!(anchor_target(1000.0, 80.0), 920.0);
        assert_eq!(anchor_target(40.0, 80.0), 0.0);
    }

    #[test]
    fn tween_runs_from_start_to_target() {
        let tween = ScrollTween::new(100.0, 900.0, 800);
        assert_eq!(tween.position_at(0.0), 100.0);
        assert_eq!(tween.position_at(800.0), 900.0);
        assert_eq!(tween.position_at(2000.0), 900.0);
        assert!(!tween.is_finished(799.0));
        assert!(tween.is_finished(800.0));
    }

    #[test]
    fn tween_is_monotonic() {
        let tween = ScrollTween::new(0.0, 2400.0, 800);
        let mut last = tween.position_at(0.0);
        for step in 1..=50 {
            let next = tween.position_at(f64::from(step) * 16.0);
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn tween_scrolls_upward_too() {
        let tween = ScrollTween::new(3000.0, 0.0, 500);
        assert!(tween.position_at(250.0) < 3000.0);
        assert_eq!(tween.position_at(500.0), 0.0);
    }

    #[test]
    fn zero_duration_jumps() {
        let tween = ScrollTween::new(10.0, 500.0, 0);
        assert_eq!(tween.position_at(0.0), 500.0);
    }
}
