//! Third-party bootstraps: the Tawk.to chat widget script and the
//! particles.js backdrop. Both degrade to no-ops when the environment
//! lacks the relevant hook.

use gloo_timers::callback::Timeout;
use js_sys::{Function, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlScriptElement;

use crate::browser;
use crate::config;

/// Loads the chat widget at idle priority so it never competes with the
/// initial render.
pub fn schedule_widget_load() {
    let Some(window) = browser::window() else {
        return;
    };
    if Reflect::has(&window, &JsValue::from_str("requestIdleCallback")).unwrap_or(false) {
        let callback = Closure::once_into_js(load_chat_widget);
        let _ = window.request_idle_callback(callback.unchecked_ref());
    } else {
        Timeout::new(0, load_chat_widget).forget();
    }
}

fn load_chat_widget() {
    let Some(document) = browser::document() else {
        return;
    };
    let Ok(script) = document.create_element("script") else {
        return;
    };
    let Ok(script) = script.dyn_into::<HtmlScriptElement>() else {
        return;
    };
    script.set_async(true);
    script.set_src(config::TAWK_EMBED_URL);
    script.set_charset("UTF-8");
    let _ = script.set_attribute("crossorigin", "*");

    if let Ok(Some(first)) = document.query_selector("script") {
        if let Some(parent) = first.parent_node() {
            let _ = parent.insert_before(&script, Some(&first));
            return;
        }
    }
    if let Some(head) = document.head() {
        let _ = head.append_child(&script);
    } else {
        log::warn!("no attachment point for the chat widget script");
    }
}

#[derive(Serialize)]
struct ParticlesConfig {
    particles: ParticleSettings,
    interactivity: Interactivity,
    retina_detect: bool,
}

#[derive(Serialize)]
struct ParticleSettings {
    number: ParticleNumber,
    color: ParticleColor,
    opacity: ParticleOpacity,
    size: ParticleSize,
    line_linked: LineLinked,
    #[serde(rename = "move")]
    movement: Movement,
}

#[derive(Serialize)]
struct ParticleNumber {
    value: u32,
    density: Density,
}

#[derive(Serialize)]
struct Density {
    enable: bool,
    value_area: u32,
}

#[derive(Serialize)]
struct ParticleColor {
    value: Vec<&'static str>,
}

#[derive(Serialize)]
struct ParticleOpacity {
    value: f64,
    random: bool,
}

#[derive(Serialize)]
struct ParticleSize {
    value: f64,
    random: bool,
}

#[derive(Serialize)]
struct LineLinked {
    enable: bool,
    distance: u32,
    color: &'static str,
    opacity: f64,
    width: f64,
}

#[derive(Serialize)]
struct Movement {
    enable: bool,
    speed: f64,
    direction: &'static str,
    random: bool,
    straight: bool,
    out_mode: &'static str,
    bounce: bool,
}

#[derive(Serialize)]
struct Interactivity {
    detect_on: &'static str,
    events: InteractivityEvents,
}

#[derive(Serialize)]
struct InteractivityEvents {
    onhover: Toggle,
    onclick: Toggle,
}

#[derive(Serialize)]
struct Toggle {
    enable: bool,
}

fn particles_config() -> ParticlesConfig {
    ParticlesConfig {
        particles: ParticleSettings {
            number: ParticleNumber {
                value: 80,
                density: Density {
                    enable: true,
                    value_area: 1000,
                },
            },
            color: ParticleColor {
                value: vec!["#f472b6", "#ec4899", "#e11d48", "#f9a8d4"],
            },
            opacity: ParticleOpacity {
                value: 0.7,
                random: false,
            },
            size: ParticleSize {
                value: 5.5,
                random: true,
            },
            line_linked: LineLinked {
                enable: true,
                distance: 130,
                color: "#ec4899",
                opacity: 0.5,
                width: 2.2,
            },
            movement: Movement {
                enable: true,
                speed: 1.1,
                direction: "none",
                random: true,
                straight: false,
                out_mode: "out",
                bounce: false,
            },
        },
        interactivity: Interactivity {
            detect_on: "canvas",
            events: InteractivityEvents {
                onhover: Toggle { enable: false },
                onclick: Toggle { enable: false },
            },
        },
        retina_detect: true,
    }
}

/// Boots particles.js against the `particles-js` container when the
/// vendored script has defined the global.
pub fn init_particles() {
    let Some(window) = browser::window() else {
        return;
    };
    let Ok(init) = Reflect::get(&window, &JsValue::from_str("particlesJS")) else {
        return;
    };
    let Ok(init) = init.dyn_into::<Function>() else {
        return;
    };
    let Ok(config_json) = serde_json::to_string(&particles_config()) else {
        return;
    };
    let Ok(config) = js_sys::JSON::parse(&config_json) else {
        return;
    };
    if let Err(err) = init.call2(&JsValue::NULL, &JsValue::from_str("particles-js"), &config) {
        log::warn!("particles.js init failed: {err:?}");
    }
}
