//! Backdrop blur on the navbar once the page is scrolled at all.

use gloo_events::EventListener;

use crate::browser;
use crate::scheduler::{ScheduledUpdate, SharedScheduler};

pub fn blurred(scroll_y: f64) -> bool {
    scroll_y > 0.0
}

fn update_navbar_blur() {
    if let Some(navbar) = browser::query(".navbar") {
        let _ = navbar
            .class_list()
            .toggle_with_force("navbar-blur", blurred(browser::scroll_y()));
    }
}

pub struct NavbarBlur {
    _scroll: EventListener,
}

impl NavbarBlur {
    pub fn init(scheduler: &SharedScheduler) -> Option<Self> {
        // No navbar on this page variant: nothing to wire.
        browser::query(".navbar")?;
        let window = browser::window()?;

        let update = ScheduledUpdate::new(update_navbar_blur);
        update.run_now();

        let scheduler = SharedScheduler::clone(scheduler);
        let scroll = EventListener::new(&window, "scroll", move |_| scheduler.trigger(&update));
        Some(Self { _scroll: scroll })
    }
}

#[cfg(test)]
mod tests {
    use super::blurred;

    #[test]
    fn blur_applies_only_when_scrolled() {
        assert!(!blurred(0.0));
        assert!(blurred(1.0));
        assert!(blurred(500.0));
    }

    #[test]
    fn decision_is_idempotent_for_unchanged_scroll() {
        // Same input, same answer: applying it twice toggles nothing.
        assert_eq!(blurred(0.0), blurred(0.0));
        assert_eq!(blurred(120.0), blurred(120.0));
    }
}
