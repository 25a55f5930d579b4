//! The single marketing page: section markup plus the wiring of every
//! scroll-driven effect through one shared frame scheduler.

use yew::prelude::*;

use crate::chat::ChatAssistant;
use crate::components::faq::FaqItem;
use crate::components::growth::GrowthJourney;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::plans::PlanCard;
use crate::components::ripple;
use crate::effects::{FooterParticlesSwap, HeroTilt, NavbarBlur, Parallax, Reveal};
use crate::quote::QuoteCalculator;
use crate::scheduler;
use crate::scrollspy::Scrollspy;
use crate::third_party;

#[function_component(Landing)]
pub fn landing() -> Html {
    use_effect_with_deps(
        |_| {
            ripple::inject_ripple_style();

            // One scheduler for every scroll-driven update, so each effect
            // coalesces to at most one run per frame independently.
            let scheduler = scheduler::shared();
            let guards = (
                Scrollspy::init(&scheduler),
                NavbarBlur::init(&scheduler),
                Parallax::init(&scheduler),
                HeroTilt::init(),
                Reveal::init(),
                FooterParticlesSwap::init(),
            );

            third_party::init_particles();
            third_party::schedule_widget_load();

            move || drop(guards)
        },
        (),
    );

    html! {
        <>
            <div id="particles-js" class="particles-backdrop"></div>
            <Navbar />
            <Hero />

            <section id="clientreview" class="section reviews-section">
                <h2>{"What our clients say"}</h2>
                <div class="review-grid">
                    <blockquote class="advantage-card">
                        <p>{"Our tuition center doubled its inquiries within two months of the new website going live."}</p>
                        <footer>{"Anjali, Sharma Classes"}</footer>
                    </blockquote>
                    <blockquote class="advantage-card">
                        <p>{"Online booking alone paid for the whole project. Fast, friendly, and they actually answer the phone."}</p>
                        <footer>{"Rohit, Mirage Salon"}</footer>
                    </blockquote>
                    <blockquote class="advantage-card">
                        <p>{"They handled everything - design, hosting, even our Google listing."}</p>
                        <footer>{"Meena, Spice Route Restaurant"}</footer>
                    </blockquote>
                </div>
            </section>

            <section id="services" class="section services-section">
                <h2>{"Services"}</h2>
                <div class="service-grid">
                    <div class="service-card">
                        <i class="fas fa-laptop-code"></i>
                        <h3>{"Business websites"}</h3>
                        <p>{"Mobile-first sites with hosting, SSL, and SEO included."}</p>
                    </div>
                    <div class="service-card">
                        <i class="fas fa-shopping-cart"></i>
                        <h3>{"E-commerce"}</h3>
                        <p>{"Online stores with payments, inventory, and order tracking."}</p>
                    </div>
                    <div class="service-card">
                        <i class="fas fa-bullhorn"></i>
                        <h3>{"Digital marketing"}</h3>
                        <p>{"Google Ads, social campaigns, and review management."}</p>
                    </div>
                </div>
            </section>

            <section id="why-business" class="section why-section">
                <h2>{"Why your business needs a website"}</h2>
                <GrowthJourney />
            </section>

            <section id="about" class="section about-section">
                <h2>{"About GrowBiz"}</h2>
                <p>
                    {"We are a Nagpur web studio that has shipped 200+ projects for tuition \
                      centers, salons, restaurants, retail stores, and professional services."}
                </p>
                <div class="plan-grid">
                    <PlanCard
                        name="Basic Business"
                        price={6_999}
                        features={vec![
                            AttrValue::from("5-page responsive website"),
                            AttrValue::from("1 year free hosting + SSL"),
                            AttrValue::from("Local SEO setup"),
                        ]}
                        extra_features={vec![
                            AttrValue::from("Google My Business listing"),
                            AttrValue::from("WhatsApp contact button"),
                            AttrValue::from("Monthly backup"),
                        ]}
                    />
                    <PlanCard
                        name="Premium E-commerce"
                        price={19_999}
                        features={vec![
                            AttrValue::from("Full online store"),
                            AttrValue::from("Payment gateway integration"),
                            AttrValue::from("Product management training"),
                        ]}
                        extra_features={vec![
                            AttrValue::from("Order notifications"),
                            AttrValue::from("Coupon engine"),
                            AttrValue::from("Priority support"),
                        ]}
                    />
                </div>
            </section>

            <section id="growbiz-ai-assistant" class="section assistant-section">
                <h2>{"Ask our AI assistant"}</h2>
                <div class="assistant-grid">
                    <ChatAssistant />
                    <QuoteCalculator />
                </div>
            </section>

            <section class="section faq-section">
                <h2>{"Frequently asked questions"}</h2>
                <FaqItem question="How long does a website take?">
                    <p>{"Most business websites ship in 5-7 business days; e-commerce sites take 10-14 days."}</p>
                </FaqItem>
                <FaqItem question="Is hosting included?">
                    <p>{"Yes - every package includes a year of hosting, SSL, and daily backups."}</p>
                </FaqItem>
                <FaqItem question="Do you offer payment plans?">
                    <p>{"50% advance and 50% on completion, with EMI options for larger projects."}</p>
                </FaqItem>
            </section>

            <footer class="footer">
                <p>{"GrowBiz Web Solutions, Nagpur"}</p>
                <p>
                    {"Call "}{crate::config::CONTACT_PHONE}
                    {" or WhatsApp "}{crate::config::CONTACT_WHATSAPP}
                </p>
            </footer>
        </>
    }
}
