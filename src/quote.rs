//! Quick-quote calculator: fixed price list plus the form component.

use std::collections::BTreeSet;

use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::browser;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WebsiteType {
    Static,
    Dynamic,
}

impl WebsiteType {
    pub fn base_price(self) -> u32 {
        match self {
            WebsiteType::Static => 6_999,
            WebsiteType::Dynamic => 19_999,
        }
    }

    fn from_value(value: &str) -> Option<Self> {
        match value {
            "static" => Some(WebsiteType::Static),
            "dynamic" => Some(WebsiteType::Dynamic),
            _ => None,
        }
    }
}

/// Optional add-ons, with form value, label, and price.
pub const ADD_ONS: &[(&str, &str, u32)] = &[
    ("ecommerce", "E-commerce store", 5_000),
    ("booking", "Online booking", 3_000),
    ("seo", "Advanced SEO", 2_000),
    ("marketing", "Digital marketing setup", 4_000),
];

fn add_on_price(key: &str) -> u32 {
    ADD_ONS
        .iter()
        .find(|(value, _, _)| *value == key)
        .map(|(_, _, price)| *price)
        .unwrap_or(0)
}

/// Total quote: base price for the website type plus every selected
/// add-on. Unknown add-on keys cost nothing.
pub fn quote_total<'a>(website_type: WebsiteType, add_ons: impl IntoIterator<Item = &'a str>) -> u32 {
    website_type.base_price() + add_ons.into_iter().map(add_on_price).sum::<u32>()
}

/// Indian-style digit grouping with a rupee sign: the last three digits,
/// then pairs. 1234567 formats as ₹12,34,567.
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::new();
    let head_chars: Vec<char> = head.chars().collect();
    let first_group = head_chars.len() % 2;
    if first_group == 1 {
        grouped.push(head_chars[0]);
    }
    for pair in head_chars[first_group..].chunks(2) {
        if !grouped.is_empty() {
            grouped.push(',');
        }
        grouped.extend(pair);
    }
    format!("₹{grouped},{tail}")
}

#[function_component(QuoteCalculator)]
pub fn quote_calculator() -> Html {
    let website_type = use_state(|| None::<WebsiteType>);
    let selected: UseStateHandle<BTreeSet<&'static str>> = use_state(BTreeSet::new);
    let total = use_state(|| None::<u32>);
    let result_ref = use_node_ref();

    let on_type_change = {
        let website_type = website_type.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                website_type.set(WebsiteType::from_value(&input.value()));
            }
        })
    };

    let on_add_on_change = {
        let selected = selected.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(&(key, _, _)) = ADD_ONS.iter().find(|(value, _, _)| *value == input.value())
            else {
                return;
            };
            let mut next = (*selected).clone();
            if input.checked() {
                next.insert(key);
            } else {
                next.remove(key);
            }
            selected.set(next);
        })
    };

    let onsubmit = {
        let website_type = website_type.clone();
        let selected = selected.clone();
        let total = total.clone();
        let result_ref = result_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let Some(website_type) = *website_type else {
                if let Some(window) = browser::window() {
                    let _ = window.alert_with_message("Please select a website type");
                }
                return;
            };

            let amount = quote_total(website_type, (*selected).iter().copied());
            log::info!("quote generated: {website_type:?} + {:?} = {amount}", *selected);
            total.set(Some(amount));

            if let Some(result) = result_ref.cast::<web_sys::Element>() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Center);
                result.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })
    };

    html! {
        <form id="quickQuoteForm" class="quote-form" {onsubmit}>
            <fieldset class="quote-type">
                <legend>{"What kind of website do you need?"}</legend>
                <label>
                    <input
                        type="radio"
                        name="website_type"
                        value="static"
                        onchange={on_type_change.clone()}
                        checked={*website_type == Some(WebsiteType::Static)}
                    />
                    {"Business website (static)"}
                </label>
                <label>
                    <input
                        type="radio"
                        name="website_type"
                        value="dynamic"
                        onchange={on_type_change}
                        checked={*website_type == Some(WebsiteType::Dynamic)}
                    />
                    {"Dynamic website / web app"}
                </label>
            </fieldset>
            <fieldset class="quote-add-ons">
                <legend>{"Anything extra?"}</legend>
                { for ADD_ONS.iter().map(|(value, label, price)| html! {
                    <label key={*value}>
                        <input
                            type="checkbox"
                            name="requirements"
                            value={*value}
                            onchange={on_add_on_change.clone()}
                            checked={selected.contains(value)}
                        />
                        { format!("{label} (+{})", format_inr(*price)) }
                    </label>
                })}
            </fieldset>
            <button type="submit" class="btn quote-submit">{"Get instant quote"}</button>
            <div
                id="quoteResult"
                ref={result_ref}
                class={classes!("quote-result", total.is_none().then_some("hidden"))}
            >
                <p>{"Your estimated price:"}</p>
                <span id="quoteAmount" class="quote-amount">
                    { (*total).map(format_inr).unwrap_or_default() }
                </span>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_prices_without_add_ons() {
        assert_eq!(quote_total(WebsiteType::Static, []), 6_999);
        assert_eq!(quote_total(WebsiteType::Dynamic, []), 19_999);
    }

    #[test]
    fn add_ons_accumulate() {
        assert_eq!(quote_total(WebsiteType::Static, ["ecommerce"]), 11_999);
        assert_eq!(
            quote_total(WebsiteType::Dynamic, ["ecommerce", "booking", "seo", "marketing"]),
            33_999
        );
    }

    #[test]
    fn unknown_add_on_is_free() {
        assert_eq!(quote_total(WebsiteType::Static, ["blockchain"]), 6_999);
    }

    #[test]
    fn inr_grouping_groups_last_three_then_pairs() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(6_999), "₹6,999");
        assert_eq!(format_inr(19_999), "₹19,999");
        assert_eq!(format_inr(123_456), "₹1,23,456");
        assert_eq!(format_inr(1_234_567), "₹12,34,567");
        assert_eq!(format_inr(12_345_678), "₹1,23,45,678");
    }
}
