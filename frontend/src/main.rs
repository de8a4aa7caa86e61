use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod leads {
    pub mod submission;
    pub mod transport;
    pub mod form;
}
mod components {
    pub mod lead_capture;
    pub mod molecular_graphic;
    pub mod waitlist_modal;
}
mod pages {
    pub mod landing;
}

use config::SiteConfig;
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route, config: &SiteConfig) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing config={config.clone()} /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: SiteConfig,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let config = props.config.clone();

    html! {
        <BrowserRouter>
            <Switch<Route> render={move |route: Route| switch(route, &config)} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let config = SiteConfig::from_build_env();
    info!("Starting application, leads backend at {}", config.backend_url());
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
