//! Scroll-triggered entrance animations.
//!
//! Elements carrying one of the reveal classes start hidden (see the page
//! stylesheet) and get `active` once at least 10% of them has been on screen.
//! `active` is never removed. Stagger children inside a target are activated
//! together with it; their CSS transition delays do the staggering.
//!
//! The page root owns the [`RevealController`]. It is built when the page
//! reaches [`PagePhase::Observing`] and disconnects when dropped.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const REVEAL_THRESHOLD: f64 = 0.1;
// Browsers round the reported ratio to layout pixels.
const RATIO_TOLERANCE: f64 = 0.005;

pub const SPLASH_MS: u32 = 1200;
pub const SETTLE_MS: u32 = 150;

pub const REVEAL_CLASSES: [&str; 4] = ["reveal", "reveal-left", "reveal-right", "reveal-scale"];
pub const STAGGER_SELECTOR: &str = ".stagger-1, .stagger-2, .stagger-3, .stagger-4, .stagger-5";
pub const ACTIVE_CLASS: &str = "active";
const MAX_STAGGER: usize = 5;
const ID_ATTRIBUTE: &str = "data-reveal-id";

/// Selector matching every reveal target.
///
/// A target's `class` attribute must not change across renders: Yew rewrites
/// the whole attribute on change and `active` lives outside the virtual DOM.
pub fn reveal_selector() -> String {
    REVEAL_CLASSES
        .iter()
        .map(|class| format!(".{}", class))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `stagger-N` class for a 1-based position, clamped to the styled range.
pub fn stagger(position: usize) -> String {
    format!("stagger-{}", position.clamp(1, MAX_STAGGER))
}

/// Where the page is in its startup sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagePhase {
    /// Splash overlay shown, sections not mounted.
    Splash,
    /// Sections mounted, layout settling; nothing observed yet.
    Settling,
    /// Reveal controller live.
    Observing,
}

impl PagePhase {
    /// Delay until the next phase, and that phase.
    pub fn advance(self) -> Option<(u32, PagePhase)> {
        match self {
            PagePhase::Splash => Some((SPLASH_MS, PagePhase::Settling)),
            PagePhase::Settling => Some((SETTLE_MS, PagePhase::Observing)),
            PagePhase::Observing => None,
        }
    }

    pub fn shows_splash(self) -> bool {
        self == PagePhase::Splash
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Intersection {
    pub fn entered(self) -> bool {
        self.is_intersecting && self.ratio + RATIO_TOLERANCE >= REVEAL_THRESHOLD
    }
}

/// Which targets have been revealed. Membership only grows.
#[derive(Debug)]
pub struct RevealState<K> {
    visible: HashSet<K>,
}

impl<K: Eq + Hash + Clone> Default for RevealState<K> {
    fn default() -> Self {
        Self {
            visible: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> RevealState<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an observation; true only the first time `key` enters.
    pub fn record(&mut self, key: K, intersection: Intersection) -> bool {
        if !intersection.entered() {
            return false;
        }
        self.visible.insert(key)
    }

    pub fn is_visible(&self, key: &K) -> bool {
        self.visible.contains(key)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }
}

pub struct RevealController {
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
    state: Rc<RefCell<RevealState<u32>>>,
    next_id: Cell<u32>,
}

impl RevealController {
    pub fn new() -> Result<Self, JsValue> {
        let state = Rc::new(RefCell::new(RevealState::new()));

        let on_intersect = {
            let state = state.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(id) = target
                        .get_attribute(ID_ATTRIBUTE)
                        .and_then(|v| v.parse::<u32>().ok())
                    else {
                        continue;
                    };

                    let intersection = Intersection {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    if state.borrow_mut().record(id, intersection) {
                        activate(&target);
                        observer.unobserve(&target);
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let mut options = IntersectionObserverInit::new();
        options.threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            observer,
            _on_intersect: on_intersect,
            state,
            next_id: Cell::new(0),
        })
    }

    /// Starts watching every reveal target under `root`. Targets already
    /// marked active are left alone. Returns how many were added.
    pub fn observe_within(&self, root: &Element) -> usize {
        let targets = match root.query_selector_all(&reveal_selector()) {
            Ok(targets) => targets,
            Err(e) => {
                log::error!("Reveal target query failed: {:?}", e);
                return 0;
            }
        };

        let mut observed = 0;
        for i in 0..targets.length() {
            let Some(element) = targets.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            if element.class_list().contains(ACTIVE_CLASS) {
                continue;
            }

            let id = self.next_id.get();
            self.next_id.set(id + 1);
            if element.set_attribute(ID_ATTRIBUTE, &id.to_string()).is_err() {
                continue;
            }
            self.observer.observe(&element);
            observed += 1;
        }

        info!("Observing {} reveal targets", observed);
        observed
    }

    pub fn revealed_count(&self) -> usize {
        self.state.borrow().visible_count()
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        debug!("Disconnecting reveal observer after {} reveals", self.revealed_count());
        self.observer.disconnect();
    }
}

fn mark_active(element: &Element) {
    if let Err(e) = element.class_list().add_1(ACTIVE_CLASS) {
        warn!("Failed to mark reveal target active: {:?}", e);
    }
}

fn activate(target: &Element) {
    mark_active(target);

    let Ok(children) = target.query_selector_all(STAGGER_SELECTOR) else {
        return;
    };
    for i in 0..children.length() {
        if let Some(child) = children.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            mark_active(&child);
        }
    }
}

/// Shows every reveal target under `root` at once. Used when the browser
/// has no IntersectionObserver.
pub fn reveal_all(root: &Element) {
    let Ok(targets) = root.query_selector_all(&reveal_selector()) else {
        return;
    };
    for i in 0..targets.length() {
        if let Some(target) = targets.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            activate(&target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_covers_every_reveal_class() {
        assert_eq!(reveal_selector(), ".reveal, .reveal-left, .reveal-right, .reveal-scale");
    }

    const VIEWPORT: f64 = 800.0;

    struct Block {
        key: &'static str,
        top: f64,
        height: f64,
    }

    const PAGE: [Block; 3] = [
        Block { key: "hero", top: 0.0, height: 800.0 },
        Block { key: "about", top: 900.0, height: 800.0 },
        Block { key: "faq", top: 2400.0, height: 600.0 },
    ];

    fn intersection(block: &Block, scroll_y: f64) -> Intersection {
        let top = block.top.max(scroll_y);
        let bottom = (block.top + block.height).min(scroll_y + VIEWPORT);
        let visible = (bottom - top).max(0.0);
        Intersection {
            is_intersecting: visible > 0.0,
            ratio: visible / block.height,
        }
    }

    /// Feeds one observer callback for `scroll_y`; returns the keys revealed by it.
    fn scroll_to(state: &mut RevealState<&'static str>, scroll_y: f64) -> Vec<&'static str> {
        PAGE.iter()
            .filter(|block| state.record(block.key, intersection(block, scroll_y)))
            .map(|block| block.key)
            .collect()
    }

    #[test]
    fn entry_needs_ten_percent() {
        assert!(!Intersection { is_intersecting: false, ratio: 0.0 }.entered());
        assert!(!Intersection { is_intersecting: true, ratio: 0.05 }.entered());
        assert!(Intersection { is_intersecting: true, ratio: 0.1 }.entered());
        assert!(Intersection { is_intersecting: true, ratio: 0.098 }.entered());
        assert!(Intersection { is_intersecting: true, ratio: 1.0 }.entered());
    }

    #[test]
    fn reveal_happens_once_and_sticks() {
        let mut state = RevealState::new();
        let inside = Intersection { is_intersecting: true, ratio: 0.5 };
        let outside = Intersection { is_intersecting: false, ratio: 0.0 };

        assert!(state.record("about", inside));
        assert!(!state.record("about", inside));
        assert!(!state.record("about", outside));
        assert!(state.is_visible(&"about"));
        assert_eq!(state.visible_count(), 1);
    }

    #[test]
    fn startup_phases_run_splash_then_settle() {
        assert_eq!(PagePhase::Splash.advance(), Some((1200, PagePhase::Settling)));
        assert_eq!(PagePhase::Settling.advance(), Some((150, PagePhase::Observing)));
        assert_eq!(PagePhase::Observing.advance(), None);
        assert!(PagePhase::Splash.shows_splash());
        assert!(!PagePhase::Settling.shows_splash());
    }

    #[test]
    fn about_section_reveals_exactly_once_while_scrolling() {
        let mut phase = PagePhase::Splash;
        let mut elapsed = 0;
        while let Some((delay, next)) = phase.advance() {
            elapsed += delay;
            phase = next;
            if phase == PagePhase::Settling {
                assert!(!phase.shows_splash());
            }
        }
        assert_eq!(phase, PagePhase::Observing);
        assert_eq!(elapsed, 1350);

        // Sections are mounted but nothing below the fold is revealed yet.
        let mut state = RevealState::new();
        assert_eq!(scroll_to(&mut state, 0.0), vec!["hero"]);
        assert!(!state.is_visible(&"about"));

        // 50px of About showing is 6.25%: not yet.
        assert!(scroll_to(&mut state, 150.0).is_empty());

        let mut about_reveals = 0;
        for scroll_y in [300.0, 600.0, 900.0, 1200.0] {
            about_reveals += scroll_to(&mut state, scroll_y)
                .iter()
                .filter(|key| **key == "about")
                .count();
        }
        assert_eq!(about_reveals, 1);

        // Scrolling back to the top leaves it visible.
        assert!(scroll_to(&mut state, 0.0).is_empty());
        assert!(state.is_visible(&"about"));
        assert!(!state.is_visible(&"faq"));
    }

    #[test]
    fn stagger_classes_are_clamped() {
        assert_eq!(stagger(1), "stagger-1");
        assert_eq!(stagger(3), "stagger-3");
        assert_eq!(stagger(0), "stagger-1");
        assert_eq!(stagger(9), "stagger-5");
    }
}
