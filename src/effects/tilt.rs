//! Pointer-driven 3D tilt on the hero card.
//!
//! The tilt eases toward the pointer each frame rather than snapping, so
//! this effect runs its own animation-frame loop while the pointer is
//! over the card instead of coalescing discrete events: there is work to
//! do every frame even when no event arrives.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::AnimationFrame;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, TouchEvent};

use crate::browser::{self, Debounced};

const EASE: f64 = 0.12;
const MAX_TILT_DEG: f64 = 18.0;
const RESET_TRANSITION: &str = "transform 0.7s cubic-bezier(.22,1,.36,1)";
const RESET_TRANSITION_MS: u32 = 800;

/// Eased pointer-follow state. `step` advances the current position a
/// fixed fraction toward the target; `transform` maps the position to a
/// perspective rotation capped at [`MAX_TILT_DEG`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltAnimation {
    width: f64,
    height: f64,
    current_x: f64,
    current_y: f64,
    target_x: f64,
    target_y: f64,
}

impl TiltAnimation {
    pub fn new(width: f64, height: f64) -> Self {
        let mut tilt = Self {
            width,
            height,
            current_x: 0.0,
            current_y: 0.0,
            target_x: 0.0,
            target_y: 0.0,
        };
        tilt.rest();
        tilt
    }

    /// New card dimensions; recenters both positions.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.rest();
    }

    /// Centers current and target, i.e. zero tilt.
    pub fn rest(&mut self) {
        self.current_x = self.width / 2.0;
        self.current_y = self.height / 2.0;
        self.target_x = self.current_x;
        self.target_y = self.current_y;
    }

    /// Pointer position relative to the card's top-left corner.
    pub fn point_to(&mut self, x: f64, y: f64) {
        self.target_x = x;
        self.target_y = y;
    }

    pub fn step(&mut self) {
        self.current_x += (self.target_x - self.current_x) * EASE;
        self.current_y += (self.target_y - self.current_y) * EASE;
    }

    pub fn transform(&self) -> String {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let tilt_x = if half_h > 0.0 {
            (self.current_y - half_h) / half_h * MAX_TILT_DEG
        } else {
            0.0
        };
        let tilt_y = if half_w > 0.0 {
            (self.current_x - half_w) / half_w * MAX_TILT_DEG
        } else {
            0.0
        };
        format!("perspective(900px) rotateX({}deg) rotateY({}deg)", -tilt_x, tilt_y)
    }
}

fn animate(
    state: Rc<RefCell<TiltAnimation>>,
    content: HtmlElement,
    running: Rc<Cell<bool>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
) {
    if !running.get() {
        return;
    }
    let transform = {
        let mut tilt = state.borrow_mut();
        tilt.step();
        tilt.transform()
    };
    browser::set_transform(&content, &transform);

    let handle = {
        let state = Rc::clone(&state);
        let content = content.clone();
        let running = Rc::clone(&running);
        let frame = Rc::clone(&frame);
        gloo_render::request_animation_frame(move |_| animate(state, content, running, frame))
    };
    *frame.borrow_mut() = Some(handle);
}

fn pointer_in(parent: &Element, client_x: f64, client_y: f64) -> (f64, f64) {
    let rect = parent.get_bounding_client_rect();
    (client_x - rect.left(), client_y - rect.top())
}

fn size_of(parent: &Element) -> (f64, f64) {
    let rect = parent.get_bounding_client_rect();
    (rect.width(), rect.height())
}

pub struct HeroTilt {
    _listeners: Vec<EventListener>,
    running: Rc<Cell<bool>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
}

impl HeroTilt {
    pub fn init() -> Option<Self> {
        let parent = browser::query(".hero-tilt-parent")?;
        let content = browser::query(".hero-tilt-content")?
            .dyn_into::<HtmlElement>()
            .ok()?;
        let window = browser::window()?;

        let (width, height) = size_of(&parent);
        let state = Rc::new(RefCell::new(TiltAnimation::new(width, height)));
        let running = Rc::new(Cell::new(false));
        let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

        let mut listeners = Vec::new();

        {
            let state = Rc::clone(&state);
            let parent = parent.clone();
            let resize = Debounced::new(100, move || {
                let (width, height) = size_of(&parent);
                state.borrow_mut().set_size(width, height);
            });
            listeners.push(EventListener::new(&window, "resize", move |_| {
                resize.call()
            }));
        }

        {
            let state = Rc::clone(&state);
            let parent_el = parent.clone();
            listeners.push(EventListener::new(&parent, "mousemove", move |event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    let (x, y) =
                        pointer_in(&parent_el, event.client_x() as f64, event.client_y() as f64);
                    state.borrow_mut().point_to(x, y);
                }
            }));
        }

        {
            let state = Rc::clone(&state);
            let parent_el = parent.clone();
            let content = content.clone();
            let running = Rc::clone(&running);
            let frame = Rc::clone(&frame);
            listeners.push(EventListener::new(&parent, "mouseenter", move |_| {
                let (width, height) = size_of(&parent_el);
                state.borrow_mut().set_size(width, height);
                running.set(true);
                animate(
                    Rc::clone(&state),
                    content.clone(),
                    Rc::clone(&running),
                    Rc::clone(&frame),
                );
            }));
        }

        {
            let state = Rc::clone(&state);
            let parent_el = parent.clone();
            let content = content.clone();
            let running = Rc::clone(&running);
            let frame = Rc::clone(&frame);
            listeners.push(EventListener::new(&parent, "touchstart", move |event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let Some(touch) = event.touches().get(0) else {
                    return;
                };
                let (width, height) = size_of(&parent_el);
                let (x, y) =
                    pointer_in(&parent_el, touch.client_x() as f64, touch.client_y() as f64);
                {
                    let mut tilt = state.borrow_mut();
                    tilt.set_size(width, height);
                    tilt.point_to(x, y);
                }
                running.set(true);
                animate(
                    Rc::clone(&state),
                    content.clone(),
                    Rc::clone(&running),
                    Rc::clone(&frame),
                );
            }));
        }

        {
            let state = Rc::clone(&state);
            let parent_el = parent.clone();
            listeners.push(EventListener::new(&parent, "touchmove", move |event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let Some(touch) = event.touches().get(0) else {
                    return;
                };
                let (x, y) =
                    pointer_in(&parent_el, touch.client_x() as f64, touch.client_y() as f64);
                state.borrow_mut().point_to(x, y);
            }));
        }

        for leave_event in ["mouseleave", "touchend"] {
            let state = Rc::clone(&state);
            let content = content.clone();
            let running = Rc::clone(&running);
            let frame = Rc::clone(&frame);
            listeners.push(EventListener::new(&parent, leave_event, move |_| {
                running.set(false);
                frame.borrow_mut().take();
                state.borrow_mut().rest();

                let style = content.style();
                let _ = style.set_property("transition", RESET_TRANSITION);
                let _ = style.set_property(
                    "transform",
                    "perspective(900px) rotateX(0deg) rotateY(0deg)",
                );
                let content = content.clone();
                Timeout::new(RESET_TRANSITION_MS, move || {
                    let _ = content.style().remove_property("transition");
                })
                .forget();
            }));
        }

        Some(Self {
            _listeners: listeners,
            running,
            frame,
        })
    }
}

impl Drop for HeroTilt {
    fn drop(&mut self) {
        // Stop the loop; dropping the handle cancels any queued frame.
        self.running.set(false);
        self.frame.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_means_no_tilt() {
        let tilt = TiltAnimation::new(400.0, 200.0);
        assert_eq!(
            tilt.transform(),
            "perspective(900px) rotateX(-0deg) rotateY(0deg)"
        );
    }

    #[test]
    fn steps_converge_toward_the_pointer() {
        let mut tilt = TiltAnimation::new(400.0, 200.0);
        tilt.point_to(400.0, 200.0);
        for _ in 0..200 {
            tilt.step();
        }
        // Bottom-right corner: full positive rotateY, full negative rotateX.
        let transform = tilt.transform();
        assert!(transform.contains("rotateY(17.9"), "{transform}");
        assert!(transform.contains("rotateX(-17.9"), "{transform}");
    }

    #[test]
    fn single_step_moves_a_fixed_fraction() {
        let mut tilt = TiltAnimation::new(100.0, 100.0);
        tilt.point_to(150.0, 50.0);
        tilt.step();
        // current_x: 50 + (150 - 50) * 0.12 = 62, so 12/50 * 18 = 4.32 deg
        let transform = tilt.transform();
        assert!(transform.contains("rotateY(4.3"), "{transform}");
    }

    #[test]
    fn rest_recenters_after_movement() {
        let mut tilt = TiltAnimation::new(400.0, 200.0);
        tilt.point_to(0.0, 0.0);
        for _ in 0..10 {
            tilt.step();
        }
        tilt.rest();
        assert_eq!(
            tilt.transform(),
            "perspective(900px) rotateX(-0deg) rotateY(0deg)"
        );
    }

    #[test]
    fn degenerate_size_produces_identity_transform() {
        let tilt = TiltAnimation::new(0.0, 0.0);
        assert_eq!(
            tilt.transform(),
            "perspective(900px) rotateX(-0deg) rotateY(0deg)"
        );
    }
}
