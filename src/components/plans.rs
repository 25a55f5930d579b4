//! Pricing plan card with the collapsible full feature list.

use yew::prelude::*;

use crate::components::ripple;
use crate::quote::format_inr;

#[derive(Properties, PartialEq)]
pub struct PlanCardProps {
    pub name: AttrValue,
    pub price: u32,
    /// Features always shown.
    pub features: Vec<AttrValue>,
    /// Features behind the "see full features" toggle.
    #[prop_or_default]
    pub extra_features: Vec<AttrValue>,
}

#[function_component(PlanCard)]
pub fn plan_card(props: &PlanCardProps) -> Html {
    let expanded = use_state(|| false);

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_| expanded.set(!*expanded))
    };

    let (toggle_icon, toggle_label) = if *expanded {
        ("fas fa-chevron-up mr-2", "Hide features")
    } else {
        ("fas fa-eye mr-2", "See full features")
    };

    html! {
        <div class="plan-card">
            <h3 class="plan-name">{&props.name}</h3>
            <p class="plan-price">{format_inr(props.price)}</p>
            <ul class="plan-features">
                { for props.features.iter().map(|feature| html! {
                    <li><i class="fas fa-check"></i>{feature}</li>
                })}
                { for props.extra_features.iter().filter(|_| *expanded).map(|feature| html! {
                    <li class="hidden-feature"><i class="fas fa-check"></i>{feature}</li>
                })}
            </ul>
            if !props.extra_features.is_empty() {
                <button class="plan-toggle" onclick={toggle}>
                    <i class={toggle_icon}></i>{toggle_label}
                </button>
            }
            <button class="btn plan-cta" onclick={ripple::onclick()}>{"Get started"}</button>
        </div>
    }
}
