//! Material-style click ripple for `.btn` buttons.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::browser;

const RIPPLE_LIFETIME_MS: u32 = 600;

const RIPPLE_CSS: &str = r#"
.ripple {
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.6);
  transform: scale(0);
  animation: rippleEffect 0.6s ease-out;
  pointer-events: none;
}
@keyframes rippleEffect {
  to { transform: scale(2); opacity: 0; }
}
"#;

/// Appends the ripple keyframes to `<head>` once per page.
pub fn inject_ripple_style() {
    let Some(document) = browser::document() else {
        return;
    };
    if document.get_element_by_id("rippleStyle").is_some() {
        return;
    }
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id("rippleStyle");
    style.set_text_content(Some(RIPPLE_CSS));
    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}

/// Spawns a ripple span inside the clicked button, centered on the click,
/// and removes it once the animation has played out.
pub fn spawn(event: &MouseEvent) {
    let Some(button) = event
        .current_target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let Some(document) = browser::document() else {
        return;
    };
    let Ok(span) = document.create_element("span") else {
        return;
    };
    let Ok(span) = span.dyn_into::<HtmlElement>() else {
        return;
    };

    let rect = button.get_bounding_client_rect();
    let size = rect.width().max(rect.height());
    let x = event.client_x() as f64 - rect.left() - size / 2.0;
    let y = event.client_y() as f64 - rect.top() - size / 2.0;

    let style = span.style();
    let _ = style.set_property("width", &format!("{size}px"));
    let _ = style.set_property("height", &format!("{size}px"));
    let _ = style.set_property("left", &format!("{x}px"));
    let _ = style.set_property("top", &format!("{y}px"));
    let _ = span.class_list().add_1("ripple");

    let _ = button.append_child(&span);
    Timeout::new(RIPPLE_LIFETIME_MS, move || span.remove()).forget();
}

/// Ready-made onclick handler for ripple-enabled buttons.
pub fn onclick() -> Callback<MouseEvent> {
    Callback::from(|event: MouseEvent| spawn(&event))
}
