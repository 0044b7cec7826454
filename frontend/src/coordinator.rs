//! Scroll and visibility state behind the landing page.
//!
//! The coordinator is plain data. The landing page owns one through
//! `use_reducer`, listeners feed it [`PageAction`]s, and the nav bar and
//! sections read it back to pick their classes.

use std::collections::HashMap;
use std::rc::Rc;

use log::debug;
use yew::functional::Reducible;

use crate::config::ScrollSettings;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub scrolled_past_threshold: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    NotShown,
    Shown,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct SectionVisibility {
    threshold: f64,
    state: Visibility,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Coordinator {
    nav_threshold: f64,
    default_reveal: f64,
    scroll: ScrollState,
    active_section: Option<String>,
    sections: HashMap<String, SectionVisibility>,
    menu_open: bool,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new(&ScrollSettings::default())
    }
}

impl Coordinator {
    pub fn new(settings: &ScrollSettings) -> Self {
        Self {
            nav_threshold: settings.nav_threshold_px,
            default_reveal: settings.reveal_threshold,
            scroll: ScrollState::default(),
            active_section: None,
            sections: HashMap::new(),
            menu_open: false,
        }
    }

    pub fn scrolled_past_threshold(&self) -> bool {
        self.scroll.scrolled_past_threshold
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn visibility(&self, id: &str) -> Visibility {
        self.sections
            .get(id)
            .map(|s| s.state)
            .unwrap_or_default()
    }

    pub fn has_been_shown(&self, id: &str) -> bool {
        self.visibility(id) == Visibility::Shown
    }

    /// Returns true when the nav bar style flips. An offset of exactly the
    /// threshold still counts as "not scrolled".
    pub fn on_scroll(&mut self, offset_px: f64) -> bool {
        let past = offset_px > self.nav_threshold;
        let changed = past != self.scroll.scrolled_past_threshold;
        self.scroll.scrolled_past_threshold = past;
        changed
    }

    pub fn set_active_section(&mut self, id: Option<String>) -> bool {
        if self.active_section == id {
            return false;
        }
        self.active_section = id;
        true
    }

    /// Sets the reveal threshold for a section. A section that is still
    /// waiting takes the new threshold; a shown one stays shown.
    pub fn register_section(&mut self, id: &str, threshold: f64) {
        let section = self
            .sections
            .entry(id.to_string())
            .or_insert(SectionVisibility {
                threshold,
                state: Visibility::NotShown,
            });
        if section.state == Visibility::NotShown {
            section.threshold = threshold;
        }
    }

    /// Feeds a visibility ratio for a section. Returns true only on the one
    /// `NotShown -> Shown` transition; every later call is ignored.
    pub fn observe_section(&mut self, id: &str, ratio: f64) -> bool {
        let default_reveal = self.default_reveal;
        let section = self
            .sections
            .entry(id.to_string())
            .or_insert(SectionVisibility {
                threshold: default_reveal,
                state: Visibility::NotShown,
            });

        if section.state == Visibility::Shown || ratio < section.threshold {
            return false;
        }
        section.state = Visibility::Shown;
        debug!("Section {} shown at ratio {:.2}", id, ratio);
        true
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Choosing a link never leaves the mobile menu open.
    pub fn select_link(&mut self, target: &str) {
        debug!("Navigating to #{}", target);
        self.close_menu();
    }

    fn would_change(&self, action: &PageAction) -> bool {
        match action {
            PageAction::Scrolled { offset, active } => {
                (*offset > self.nav_threshold) != self.scroll.scrolled_past_threshold
                    || active.as_deref() != self.active_section()
            }
            PageAction::SectionRegistered { id, threshold } => match self.sections.get(id) {
                Some(section) => {
                    section.state == Visibility::NotShown && section.threshold != *threshold
                }
                None => true,
            },
            PageAction::SectionVisible { id, ratio } => match self.sections.get(id) {
                Some(section) => {
                    section.state == Visibility::NotShown && *ratio >= section.threshold
                }
                None => *ratio >= self.default_reveal,
            },
            PageAction::ToggleMenu => true,
            PageAction::CloseMenu | PageAction::Navigated(_) => self.menu_open,
        }
    }

    fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::Scrolled { offset, active } => {
                self.on_scroll(offset);
                self.set_active_section(active);
            }
            PageAction::SectionRegistered { id, threshold } => {
                self.register_section(&id, threshold)
            }
            PageAction::SectionVisible { id, ratio } => {
                self.observe_section(&id, ratio);
            }
            PageAction::ToggleMenu => self.toggle_menu(),
            PageAction::CloseMenu => self.close_menu(),
            PageAction::Navigated(target) => self.select_link(&target),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    Scrolled { offset: f64, active: Option<String> },
    SectionRegistered { id: String, threshold: f64 },
    SectionVisible { id: String, ratio: f64 },
    ToggleMenu,
    CloseMenu,
    Navigated(String),
}

impl Reducible for Coordinator {
    type Action = PageAction;

    // Scroll events arrive dozens of times a second; handing back the same
    // Rc for no-op actions keeps Yew from re-rendering on each one.
    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if !self.would_change(&action) {
            return self;
        }
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// An observed ratio can never exceed `viewport_h / element_h`, so a section
/// taller than the viewport would never reach a higher threshold. Caps the
/// threshold a little under that ceiling; unknown heights leave it as is.
pub fn reachable_threshold(threshold: f64, viewport_h: f64, element_h: f64) -> f64 {
    if !(viewport_h > 0.0 && element_h > 0.0) {
        return threshold;
    }
    threshold.min(REACHABLE_MARGIN * viewport_h / element_h)
}

const REACHABLE_MARGIN: f64 = 0.95;

/// Scroll-spy: the last section whose top is at or above `line`, where
/// `sections` holds document-space tops in page order.
pub fn active_section<'a>(line: f64, sections: &[(&'a str, f64)]) -> Option<&'a str> {
    sections
        .iter()
        .take_while(|(_, top)| *top <= line)
        .last()
        .map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinator() -> Coordinator {
        Coordinator::default()
    }

    #[test]
    fn nav_threshold_boundary_is_exclusive() {
        let mut c = coordinator();
        for offset in [0.0, 10.0, 49.9, 50.0] {
            c.on_scroll(offset);
            assert!(!c.scrolled_past_threshold(), "offset {}", offset);
        }
        for offset in [50.1, 51.0, 120.0, 10_000.0] {
            c.on_scroll(offset);
            assert!(c.scrolled_past_threshold(), "offset {}", offset);
        }
    }

    #[test]
    fn scroll_state_is_reversible() {
        let mut c = coordinator();
        c.on_scroll(0.0);
        assert!(!c.scrolled_past_threshold());
        assert!(c.on_scroll(120.0));
        assert!(c.scrolled_past_threshold());
        assert!(c.on_scroll(10.0));
        assert!(!c.scrolled_past_threshold());
        assert!(!c.on_scroll(5.0));
    }

    #[test]
    fn section_reveals_exactly_once() {
        let mut c = coordinator();
        c.register_section("about", 0.1);
        let transitions = [0.0, 0.15, 0.0, 0.20]
            .iter()
            .filter(|ratio| c.observe_section("about", **ratio))
            .count();
        assert_eq!(transitions, 1);
        assert!(c.has_been_shown("about"));
        c.observe_section("about", 0.0);
        assert_eq!(c.visibility("about"), Visibility::Shown);
    }

    #[test]
    fn twelve_percent_crosses_ten_percent_threshold() {
        let mut c = coordinator();
        c.register_section("services", 0.1);
        assert!(!c.has_been_shown("services"));
        assert!(c.observe_section("services", 0.12));
        assert!(c.has_been_shown("services"));
        assert!(!c.observe_section("services", 0.12));
    }

    #[test]
    fn ratio_equal_to_threshold_reveals() {
        let mut c = coordinator();
        c.register_section("packages", 0.2);
        assert!(!c.observe_section("packages", 0.19));
        assert!(c.observe_section("packages", 0.2));
    }

    #[test]
    fn sections_are_independent() {
        let mut c = coordinator();
        c.register_section("about", 0.1);
        c.register_section("services", 0.2);
        assert!(c.observe_section("about", 0.15));
        assert!(!c.observe_section("services", 0.15));
        assert!(!c.has_been_shown("services"));
    }

    #[test]
    fn unregistered_section_uses_default_threshold() {
        let mut c = coordinator();
        assert!(!c.observe_section("contact", 0.05));
        assert!(c.observe_section("contact", 0.1));
    }

    #[test]
    fn reregistering_keeps_shown_state() {
        let mut c = coordinator();
        c.register_section("about", 0.1);
        c.observe_section("about", 0.5);
        c.register_section("about", 0.9);
        assert!(c.has_been_shown("about"));
    }

    #[test]
    fn ratios_below_threshold_never_reveal() {
        let peaks = [0.0, 0.12, 0.15, 0.0];

        let mut c = coordinator();
        c.register_section("services", 0.2);
        assert!(!peaks.iter().any(|ratio| c.observe_section("services", *ratio)));
        assert!(!c.has_been_shown("services"));

        // 2540px of cards on a 375px landscape phone peaks at about 0.148.
        let mut c = coordinator();
        c.register_section("services", reachable_threshold(0.2, 375.0, 2540.0));
        let transitions = peaks
            .iter()
            .filter(|ratio| c.observe_section("services", **ratio))
            .count();
        assert_eq!(transitions, 1);
        assert!(c.has_been_shown("services"));
    }

    #[test]
    fn reachable_threshold_caps_tall_sections() {
        assert_eq!(reachable_threshold(0.1, 800.0, 600.0), 0.1);
        assert!((reachable_threshold(0.2, 800.0, 4000.0) - 0.19).abs() < 1e-9);
        let capped = reachable_threshold(0.2, 375.0, 2540.0);
        assert!(capped < 375.0 / 2540.0, "{}", capped);
        assert!(capped > 0.12, "{}", capped);
        assert_eq!(reachable_threshold(0.2, 0.0, 2540.0), 0.2);
        assert_eq!(reachable_threshold(0.2, 800.0, 0.0), 0.2);
        assert_eq!(reachable_threshold(0.2, f64::NAN, 100.0), 0.2);
    }

    #[test]
    fn reregistering_lowers_pending_threshold() {
        let state = Rc::new(coordinator()).reduce(PageAction::SectionRegistered {
            id: "services".to_string(),
            threshold: 0.2,
        });
        let same = state.clone().reduce(PageAction::SectionRegistered {
            id: "services".to_string(),
            threshold: 0.2,
        });
        assert!(Rc::ptr_eq(&state, &same));

        let lowered = state.reduce(PageAction::SectionRegistered {
            id: "services".to_string(),
            threshold: 0.14,
        });
        let shown = lowered.reduce(PageAction::SectionVisible {
            id: "services".to_string(),
            ratio: 0.15,
        });
        assert!(shown.has_been_shown("services"));
    }

    #[test]
    fn close_menu_action_closes_open_drawer() {
        let open = Rc::new(coordinator()).reduce(PageAction::ToggleMenu);
        let closed = open.clone().reduce(PageAction::CloseMenu);
        assert!(!Rc::ptr_eq(&open, &closed));
        assert!(!closed.is_menu_open());
    }

    #[test]
    fn selecting_a_link_closes_the_menu() {
        let mut c = coordinator();
        c.toggle_menu();
        assert!(c.is_menu_open());
        c.select_link("about");
        assert!(!c.is_menu_open());
        c.select_link("contact");
        assert!(!c.is_menu_open());
    }

    #[test]
    fn toggle_and_close_menu() {
        let mut c = coordinator();
        c.toggle_menu();
        c.toggle_menu();
        assert!(!c.is_menu_open());
        c.toggle_menu();
        c.close_menu();
        c.close_menu();
        assert!(!c.is_menu_open());
    }

    #[test]
    fn reducer_reuses_state_for_noop_actions() {
        let state = Rc::new(coordinator());
        let next = state.clone().reduce(PageAction::Scrolled {
            offset: 20.0,
            active: None,
        });
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(PageAction::CloseMenu);
        assert!(Rc::ptr_eq(&state, &next));

        let scrolled = state.clone().reduce(PageAction::Scrolled {
            offset: 300.0,
            active: Some("about".to_string()),
        });
        assert!(!Rc::ptr_eq(&state, &scrolled));
        assert!(scrolled.scrolled_past_threshold());
        assert_eq!(scrolled.active_section(), Some("about"));
    }

    #[test]
    fn reducer_ignores_visibility_after_reveal() {
        let state = Rc::new(coordinator())
            .reduce(PageAction::SectionRegistered {
                id: "about".to_string(),
                threshold: 0.1,
            })
            .reduce(PageAction::SectionVisible {
                id: "about".to_string(),
                ratio: 0.3,
            });
        assert!(state.has_been_shown("about"));

        let next = state.clone().reduce(PageAction::SectionVisible {
            id: "about".to_string(),
            ratio: 0.0,
        });
        assert!(Rc::ptr_eq(&state, &next));
        assert!(next.has_been_shown("about"));
    }

    #[test]
    fn navigating_with_open_menu_closes_it() {
        let open = Rc::new(coordinator()).reduce(PageAction::ToggleMenu);
        assert!(open.is_menu_open());
        let after = open.reduce(PageAction::Navigated("services".to_string()));
        assert!(!after.is_menu_open());
    }

    #[test]
    fn scroll_spy_picks_last_section_above_line() {
        let sections = [("home", 0.0), ("about", 900.0), ("services", 1800.0)];
        assert_eq!(active_section(0.0, &sections), Some("home"));
        assert_eq!(active_section(899.0, &sections), Some("home"));
        assert_eq!(active_section(900.0, &sections), Some("about"));
        assert_eq!(active_section(5000.0, &sections), Some("services"));
        assert_eq!(active_section(-1.0, &sections), None);
    }
}
