//! Navbar with scrollspy-tracked links, blog dropdowns (desktop and
//! mobile), the slide-in mobile drawer, and the theme toggle.

use yew::prelude::*;

use crate::browser;
use crate::config;
use crate::theme;

const BLOG_LINKS: &[(&str, &str)] = &[
    ("/blog/growbusiness.html", "How to Grow Your Business Online"),
    ("/blog/seo-basics.html", "SEO Basics for Local Businesses"),
    ("/blog/website-checklist.html", "Website Launch Checklist"),
];

fn dropdown_classes(open: bool) -> Classes {
    if open {
        classes!("dropdown-menu", "opacity-100", "pointer-events-auto", "scale-100")
    } else {
        classes!("dropdown-menu", "opacity-0", "pointer-events-none", "scale-95")
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let theme_state = use_state(theme::saved);
    let blog_open = use_state(|| false);
    let mobile_blog_open = use_state(|| false);
    let drawer_open = use_state(|| false);

    // Apply the persisted theme before the first paint settles.
    {
        let theme_state = theme_state.clone();
        use_effect_with_deps(
            move |_| {
                theme::apply(*theme_state);
                || ()
            },
            (),
        );
    }

    let on_theme_toggle = {
        let theme_state = theme_state.clone();
        Callback::from(move |_| {
            let next = theme_state.toggled();
            theme::apply(next);
            theme::store(next);
            theme_state.set(next);
        })
    };

    let toggle_blog = {
        let blog_open = blog_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            blog_open.set(!*blog_open);
        })
    };
    let close_blog = {
        let blog_open = blog_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            blog_open.set(false);
        })
    };

    let toggle_mobile_blog = {
        let mobile_blog_open = mobile_blog_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            mobile_blog_open.set(!*mobile_blog_open);
        })
    };
    let close_mobile_blog = {
        let mobile_blog_open = mobile_blog_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            mobile_blog_open.set(false);
        })
    };

    let toggle_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_| drawer_open.set(!*drawer_open))
    };
    let close_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_| drawer_open.set(false))
    };

    // In-page nav links smooth-scroll instead of jumping; tapping one in
    // the drawer also closes it.
    let nav_link = |section_id: &'static str, label: &'static str, close: Option<Callback<()>>| {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            browser::smooth_scroll_to(section_id);
            if let Some(close) = &close {
                close.emit(());
            }
        });
        html! {
            <a class="nav-link" href={format!("#{section_id}")} {onclick}>{label}</a>
        }
    };

    let drawer_transform = if *drawer_open {
        "transform: translateX(0)"
    } else {
        "transform: translateX(-100%)"
    };

    let drawer_close = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |_| drawer_open.set(false))
    };

    html! {
        <nav id="mainNavbar" class="navbar">
            <a class="navbar-brand" href="/">{"GrowBiz"}</a>

            <div id="navbarMenu" class="navbar-menu">
                { for config::NAV_SECTIONS.iter().map(|&(id, label)| nav_link(id, label, None)) }

                <div class="dropdown">
                    <button id="blogDropdownBtn" class="dropdown-toggle" onclick={toggle_blog}>
                        {"Blog"} <i class="fas fa-chevron-down"></i>
                    </button>
                    <div id="blogDropdownMenu" class={dropdown_classes(*blog_open)}>
                        { for BLOG_LINKS.iter().map(|&(href, title)| html! {
                            <a class="dropdown-item" {href}>{title}</a>
                        })}
                        <button id="closeBlogDropdownBtn" class="dropdown-close" onclick={close_blog}>
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                </div>

                <button class="theme-toggle" onclick={on_theme_toggle} aria-label="Toggle theme">
                    <i class={theme_state.icon_class()}></i>
                </button>
            </div>

            <button id="mobileMenuBtn" class="mobile-menu-btn" onclick={toggle_drawer} aria-label="Open menu">
                <i class="fas fa-bars"></i>
            </button>

            <div id="mobileDrawer" class="mobile-drawer" style={drawer_transform}>
                <button id="closeDrawerBtn" class="drawer-close" onclick={close_drawer} aria-label="Close menu">
                    <i class="fas fa-times"></i>
                </button>
                { for config::NAV_SECTIONS.iter().map(|&(id, label)| {
                    nav_link(id, label, Some(drawer_close.clone()))
                })}

                <div class="dropdown">
                    <button id="mobileBlogDropdownBtn" class="dropdown-toggle" onclick={toggle_mobile_blog}>
                        {"Blog"} <i id="mobileBlogDropdownIcon" class="fas fa-chevron-down"></i>
                    </button>
                    <div id="mobileBlogDropdownMenu" class={dropdown_classes(*mobile_blog_open)}>
                        { for BLOG_LINKS.iter().map(|&(href, title)| html! {
                            <a class="dropdown-item" {href}>{title}</a>
                        })}
                        <button
                            id="closeMobileBlogDropdownBtn"
                            class="dropdown-close"
                            onclick={close_mobile_blog}
                        >
                            <i class="fas fa-times"></i>
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}
