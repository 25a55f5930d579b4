pub mod browser;
pub mod chat;
pub mod components;
pub mod config;
pub mod effects;
pub mod pages;
pub mod quote;
pub mod scheduler;
pub mod scrollspy;
pub mod theme;
pub mod third_party;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"Page not found"}</h1>
                <a href="/">{"Back to GrowBiz home"}</a>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
