//! Hero section: parallax backdrop, tilting showcase card, and the
//! primary call-to-action buttons.

use yew::prelude::*;

use crate::browser;
use crate::components::ripple;

#[function_component(Hero)]
pub fn hero() -> Html {
    let cta_click = {
        Callback::from(move |event: MouseEvent| {
            ripple::spawn(&event);
            browser::smooth_scroll_to("growbiz-ai-assistant");
        })
    };
    let services_click = {
        Callback::from(move |event: MouseEvent| {
            ripple::spawn(&event);
            browser::smooth_scroll_to("services");
        })
    };

    html! {
        <section id="home" class="section hero-section">
            <div class="hero-2">
                <div class="hero-backdrop"></div>
            </div>
            <div class="hero-inner">
                <h1 class="hero-title">{"Websites that grow Nagpur businesses"}</h1>
                <p class="hero-subtitle">
                    {"Design, hosting, SEO, and support - delivered in days, not months."}
                </p>
                <div class="hero-actions">
                    <button class="btn btn-primary" onclick={cta_click}>
                        {"Get a free quote"}
                    </button>
                    <button class="btn btn-outline" onclick={services_click}>
                        {"See our services"}
                    </button>
                </div>
                <div class="hero-tilt-parent">
                    <div class="hero-tilt-content">
                        <img src="/assets/hero-showcase.webp" alt="Website showcase" loading="lazy" />
                    </div>
                </div>
            </div>
        </section>
    }
}
