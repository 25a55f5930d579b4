//! Thin helpers over `web_sys`. Every lookup degrades to a no-op when the
//! window, document, or element is missing, so a page variant without a
//! given element simply does not get that behavior.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok()?
}

/// All elements matching `selector`, already cast to `Element`.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Current viewport size in CSS px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

pub fn viewport() -> Viewport {
    let (width, height) = window()
        .map(|w| {
            (
                w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
                w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
            )
        })
        .unwrap_or((0.0, 0.0));
    Viewport { width, height }
}

pub fn storage_get(key: &str) -> Option<String> {
    window()?.local_storage().ok()??.get_item(key).ok()?
}

pub fn storage_set(key: &str, value: &str) {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Smooth-scrolls the element with `id` into view, replacing the default
/// jump of an in-page anchor.
pub fn smooth_scroll_to(id: &str) {
    if let Some(element) = element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn set_transform(element: &HtmlElement, transform: &str) {
    let _ = element.style().set_property("transform", transform);
}

/// Trailing-edge debounce: each call re-arms the timer, and only the last
/// call within the window actually runs. Dropping all clones cancels a
/// pending run.
#[derive(Clone)]
pub struct Debounced {
    delay_ms: u32,
    run: Rc<dyn Fn()>,
    timer: Rc<RefCell<Option<Timeout>>>,
}

impl Debounced {
    pub fn new(delay_ms: u32, run: impl Fn() + 'static) -> Self {
        Self {
            delay_ms,
            run: Rc::new(run),
            timer: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call(&self) {
        let run = Rc::clone(&self.run);
        let timer = Rc::clone(&self.timer);
        let timeout = Timeout::new(self.delay_ms, move || {
            timer.borrow_mut().take();
            run();
        });
        // Replacing the slot drops (and cancels) any timer still pending.
        *self.timer.borrow_mut() = Some(timeout);
    }
}
