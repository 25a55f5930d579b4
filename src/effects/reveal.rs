//! IntersectionObserver-driven behaviors: fade-in reveal of sections and
//! cards, the particles/footer visibility swap, and a run-once visibility
//! trigger for the growth animation.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::browser;

const REVEAL_SELECTOR: &str =
    ".section, .advantage-card, .plan-card, .service-card, .portfolio-item, .team-member";

/// An observer plus the closure backing it; disconnects on drop.
struct Observed {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl Drop for Observed {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn make_observer(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entries: impl FnMut(Vec<IntersectionObserverEntry>) + 'static,
) -> Option<Observed> {
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        let entries: Vec<_> = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .collect();
        on_entries(entries);
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    Some(Observed {
        observer,
        _callback: callback,
    })
}

/// Adds `fade-in` to sections and cards as they scroll into view.
pub struct Reveal {
    _observed: Observed,
}

impl Reveal {
    pub fn init() -> Option<Self> {
        let observed = make_observer(0.1, Some("0px 0px -50px 0px"), |entries| {
            for entry in entries {
                if entry.is_intersecting() {
                    let _ = entry.target().class_list().add_1("fade-in");
                }
            }
        })?;
        for element in browser::query_all(REVEAL_SELECTOR) {
            observed.observer.observe(&element);
        }
        Some(Self { _observed: observed })
    }
}

/// Hides the particles backdrop while the footer is in view, so the
/// canvas never paints behind it.
pub struct FooterParticlesSwap {
    _observed: Observed,
}

impl FooterParticlesSwap {
    pub fn init() -> Option<Self> {
        browser::element_by_id("particles-js")?;
        let footer = browser::query(".footer")?;

        let observed = make_observer(0.0, Some("0px"), |entries| {
            let Some(first) = entries.first() else {
                return;
            };
            let Some(particles) = browser::element_by_id("particles-js")
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let style = particles.style();
            if first.is_intersecting() {
                let _ = style.set_property("display", "none");
            } else {
                let _ = style.remove_property("display");
            }
        })?;
        observed.observer.observe(&footer);
        Some(Self { _observed: observed })
    }
}

/// Fires `on_visible` the first time `target` crosses `threshold`
/// visibility; later crossings are ignored.
pub struct VisibilityOnce {
    _observed: Observed,
}

impl VisibilityOnce {
    pub fn init(target: &Element, threshold: f64, on_visible: impl FnOnce() + 'static) -> Option<Self> {
        let mut pending = Some(on_visible);
        let observed = make_observer(threshold, None, move |entries| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                if let Some(callback) = pending.take() {
                    callback();
                }
            }
        })?;
        observed.observer.observe(target);
        Some(Self { _observed: observed })
    }
}
