//! Scrollspy: keeps the nav link of the section currently under the
//! navbar highlighted while the page scrolls.

use gloo_events::EventListener;
use web_sys::Element;

use crate::browser::{self, Debounced};
use crate::config;
use crate::scheduler::{ScheduledUpdate, SharedScheduler};

/// Index of the section that should be highlighted: the last section
/// whose top edge has scrolled above the navbar's bottom edge. Before the
/// first section reaches the navbar the first one is highlighted.
pub fn active_section(navbar_bottom: f64, section_tops: &[f64]) -> Option<usize> {
    if section_tops.is_empty() {
        return None;
    }
    Some(
        section_tops
            .iter()
            .rposition(|top| *top < navbar_bottom)
            .unwrap_or(0),
    )
}

fn update_active_nav() {
    let navbar_bottom = browser::element_by_id("mainNavbar")
        .map(|navbar| navbar.get_bounding_client_rect().bottom())
        .unwrap_or(0.0);
    let tops: Vec<f64> = config::NAV_SECTIONS
        .iter()
        .filter_map(|(id, _)| browser::element_by_id(id))
        .map(|section| section.get_bounding_client_rect().top())
        .collect();

    let Some(active) = active_section(navbar_bottom, &tops) else {
        return;
    };

    apply_active_class(&browser::query_all("#navbarMenu .nav-link"), active);
    apply_active_class(&browser::query_all("#mobileDrawer .nav-link"), active);
}

fn apply_active_class(links: &[Element], active: usize) {
    for (idx, link) in links.iter().enumerate() {
        let _ = link.class_list().toggle_with_force("active", idx == active);
    }
}

/// Scroll/resize wiring for the scrollspy. Dropping it unregisters both
/// listeners.
pub struct Scrollspy {
    _scroll: EventListener,
    _resize: EventListener,
}

impl Scrollspy {
    pub fn init(scheduler: &SharedScheduler) -> Option<Self> {
        let window = browser::window()?;
        let update = ScheduledUpdate::new(update_active_nav);
        update.run_now();

        let scroll = {
            let scheduler = SharedScheduler::clone(scheduler);
            let update = update.clone();
            EventListener::new(&window, "scroll", move |_| scheduler.trigger(&update))
        };

        // Resize is bursty rather than continuous, so it gets a trailing
        // debounce instead of frame coalescing.
        let debounced = Debounced::new(100, update_active_nav);
        let resize = EventListener::new(&window, "resize", move |_| debounced.call());

        Some(Self {
            _scroll: scroll,
            _resize: resize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::active_section;

    #[test]
    fn no_sections_means_no_selection() {
        assert_eq!(active_section(64.0, &[]), None);
    }

    #[test]
    fn first_section_active_before_any_scrolling() {
        // All tops below the navbar: nothing has been scrolled past yet.
        assert_eq!(active_section(64.0, &[100.0, 700.0, 1400.0]), Some(0));
    }

    #[test]
    fn last_section_above_navbar_wins() {
        assert_eq!(active_section(64.0, &[-600.0, 10.0, 700.0]), Some(1));
        assert_eq!(active_section(64.0, &[-1300.0, -600.0, 10.0]), Some(2));
    }

    #[test]
    fn section_exactly_at_navbar_bottom_is_not_yet_active() {
        assert_eq!(active_section(64.0, &[-600.0, 64.0, 700.0]), Some(0));
    }
}
