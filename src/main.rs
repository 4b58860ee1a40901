use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod scroll;
mod contact {
    pub mod client;
    pub mod controller;
    pub mod form;
    pub mod status;
    pub mod timer;
    pub mod view;
}
mod pages {
    pub mod content;
    pub mod landing;
}

use pages::{
    content::{BRAND, NAV_ANCHORS},
    landing::{scroll_home, scroll_link, Landing},
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = Closure::wrap(Box::new({
                let window = window.clone();
                move || {
                    if let Some(window) = window.as_ref() {
                        let scroll_y = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll::nav_is_solid(scroll_y));
                    }
                }
            }) as Box<dyn FnMut()>);

            if let Some(window) = window.as_ref() {
                if window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()).is_err() {
                    log::warn!("Could not register scroll listener");
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>{NAV_CSS}</style>
            <div class="nav-content">
                <a href="/" class="nav-logo" onclick={scroll_home()}>
                    {BRAND}
                </a>
                <div class="nav-right">
                    { for NAV_ANCHORS.iter().map(|anchor| html! {
                        <a href={format!("#{}", anchor.id)} class="nav-link" onclick={scroll_link(anchor.id)}>
                            {anchor.label}
                        </a>
                    }) }
                </div>
            </div>
        </nav>
    }
}

const NAV_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 50;
        padding: 1.5rem 0;
        transition: all 0.3s;
    }
    .top-nav.scrolled {
        background: rgba(0, 0, 0, 0.9);
        backdrop-filter: blur(12px);
        padding: 1rem 0;
    }
    .nav-content {
        max-width: 1280px;
        margin: 0 auto;
        padding: 0 2rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .nav-logo {
        color: #fff;
        font-size: 1.5rem;
        font-weight: bold;
        letter-spacing: 0.05em;
        text-decoration: none;
    }
    .nav-right {
        display: flex;
        gap: 3rem;
        font-size: 0.875rem;
        letter-spacing: 0.05em;
    }
    .nav-link {
        color: #fff;
        text-decoration: none;
    }
    .nav-link:hover {
        color: #f43f5e;
    }
    @media (max-width: 768px) {
        .nav-right {
            display: none;
        }
    }
"#;


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
