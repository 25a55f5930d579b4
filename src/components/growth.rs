//! Growth journey illustration: three stages cycled on a timer, started
//! the first time the sketch scrolls into view.

use gloo_timers::callback::Interval;
use web_sys::Element;
use yew::prelude::*;

use crate::effects::VisibilityOnce;

const STAGE_COUNT: usize = 3;
const STAGE_INTERVAL_MS: u32 = 3000;

const STAGE_LABELS: [&str; STAGE_COUNT] = [
    "Launch your website",
    "Reach local customers",
    "Grow your revenue",
];

#[function_component(GrowthJourney)]
pub fn growth_journey() -> Html {
    let container_ref = use_node_ref();
    let started = use_state(|| false);
    let stage = use_state(|| None::<usize>);

    {
        let container_ref = container_ref.clone();
        let started = started.clone();
        use_effect_with_deps(
            move |_| {
                let guard = container_ref
                    .cast::<Element>()
                    .and_then(|el| VisibilityOnce::init(&el, 0.3, move || started.set(true)));
                move || drop(guard)
            },
            (),
        );
    }

    {
        let stage = stage.clone();
        use_effect_with_deps(
            move |started: &bool| {
                let interval = if *started {
                    stage.set(Some(0));
                    let stage = stage.clone();
                    // The interval keeps its own counter; the state handle
                    // it captured never observes later renders.
                    let mut current = 0;
                    Some(Interval::new(STAGE_INTERVAL_MS, move || {
                        current = (current + 1) % STAGE_COUNT;
                        stage.set(Some(current));
                    }))
                } else {
                    None
                };
                move || drop(interval)
            },
            *started,
        );
    }

    html! {
        <div id="sketchContainer" class="growth-sketch" ref={container_ref}>
            { for (0..STAGE_COUNT).map(|idx| {
                let visible = *stage == Some(idx);
                let style = if visible {
                    "transition: opacity 1s ease-in-out, transform 1s ease-in-out; \
                     opacity: 1; transform: scale(1)"
                } else {
                    "transition: opacity 1s ease-in-out, transform 1s ease-in-out; \
                     opacity: 0; transform: scale(0.9)"
                };
                html! {
                    <div id={format!("stage{}", idx + 1)} class="growth-stage" {style}>
                        <img
                            src={format!("/assets/growth-stage-{}.svg", idx + 1)}
                            alt={STAGE_LABELS[idx]}
                            loading="lazy"
                        />
                        <p>{STAGE_LABELS[idx]}</p>
                    </div>
                }
            })}
        </div>
    }
}
