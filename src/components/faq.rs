//! FAQ accordion item with the max-height slide animation.

use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    pub children: Children,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let open = use_state(|| false);
    let content_ref = use_node_ref();

    // The slide needs a concrete max-height, so measure the content after
    // each toggle renders.
    {
        let content_ref = content_ref.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if let Some(content) = content_ref.cast::<HtmlElement>() {
                    let max_height = if *open {
                        format!("{}px", content.scroll_height())
                    } else {
                        "0px".to_string()
                    };
                    let _ = content.style().set_property("max-height", &max_height);
                }
                || ()
            },
            *open,
        );
    }

    let toggle = {
        let open = open.clone();
        Callback::from(move |_| open.set(!*open))
    };

    let icon_class = if *open { "fas fa-minus" } else { "fas fa-plus" };
    let icon_style = if *open {
        "transform: rotate(180deg)"
    } else {
        "transform: rotate(0deg)"
    };

    html! {
        <div class={classes!("faq-item", "bg-white", open.then_some("faq-active"))}>
            <button class="faq-question" onclick={toggle}>
                <span>{&props.question}</span>
                <i class={icon_class} style={icon_style}></i>
            </button>
            <div
                ref={content_ref}
                class={classes!("faq-answer", (!*open).then_some("hidden"))}
            >
                { for props.children.iter() }
            </div>
        </div>
    }
}
