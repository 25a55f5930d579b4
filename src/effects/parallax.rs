//! Parallax translation of the hero backdrop.
//!
//! On desktop the hero drifts up at half scroll speed. On mobile the
//! offset instead follows how far the `why-business` section has entered
//! the viewport, clamped so the hero never travels more than 150px.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::browser::{self, Viewport};
use crate::config;
use crate::scheduler::{ScheduledUpdate, SharedScheduler};

const SCROLL_RATE: f64 = -0.5;
const MOBILE_MAX_OFFSET: f64 = -150.0;

/// Vertical offset in px for the hero element. `marker_top` is the
/// bounding-rect top of the mobile marker section, when it exists.
pub fn parallax_offset(viewport: Viewport, scroll_y: f64, marker_top: Option<f64>) -> f64 {
    if viewport.width <= config::MOBILE_BREAKPOINT {
        match marker_top {
            Some(top) if top <= viewport.height => {
                let visible_px = viewport.height - top;
                (visible_px * SCROLL_RATE).max(MOBILE_MAX_OFFSET)
            }
            _ => 0.0,
        }
    } else {
        scroll_y * SCROLL_RATE
    }
}

fn update_hero_parallax() {
    let Some(hero) = browser::query(".hero-2") else {
        return;
    };
    let Ok(hero) = hero.dyn_into::<HtmlElement>() else {
        return;
    };
    let marker_top = browser::element_by_id("why-business")
        .map(|marker| marker.get_bounding_client_rect().top());
    let offset = parallax_offset(browser::viewport(), browser::scroll_y(), marker_top);
    browser::set_transform(&hero, &format!("translateY({offset}px)"));
}

pub struct Parallax {
    _scroll: EventListener,
}

impl Parallax {
    pub fn init(scheduler: &SharedScheduler) -> Option<Self> {
        browser::query(".hero-2")?;
        let window = browser::window()?;

        let update = ScheduledUpdate::new(update_hero_parallax);
        update.run_now();

        let scheduler = SharedScheduler::clone(scheduler);
        let scroll = EventListener::new(&window, "scroll", move |_| scheduler.trigger(&update));
        Some(Self { _scroll: scroll })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };
    const MOBILE: Viewport = Viewport {
        width: 375.0,
        height: 700.0,
    };

    #[test]
    fn desktop_tracks_half_scroll_speed_upward() {
        assert_eq!(parallax_offset(DESKTOP, 0.0, None), 0.0);
        assert_eq!(parallax_offset(DESKTOP, 100.0, None), -50.0);
        assert_eq!(parallax_offset(DESKTOP, 601.0, Some(10.0)), -300.5);
    }

    #[test]
    fn mobile_is_static_until_marker_enters_viewport() {
        assert_eq!(parallax_offset(MOBILE, 400.0, Some(900.0)), 0.0);
        assert_eq!(parallax_offset(MOBILE, 400.0, None), 0.0);
    }

    #[test]
    fn mobile_follows_marker_visibility() {
        // Marker 100px into the viewport: 100 visible px at half speed.
        assert_eq!(parallax_offset(MOBILE, 400.0, Some(600.0)), -50.0);
    }

    #[test]
    fn mobile_offset_is_clamped() {
        assert_eq!(parallax_offset(MOBILE, 2000.0, Some(-500.0)), -150.0);
    }

    #[test]
    fn breakpoint_boundary_is_mobile() {
        let boundary = Viewport {
            width: config::MOBILE_BREAKPOINT,
            height: 700.0,
        };
        assert_eq!(parallax_offset(boundary, 300.0, None), 0.0);
    }
}
