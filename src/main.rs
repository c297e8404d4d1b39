use log::{info, Level};
use yew::prelude::*;

mod config;
mod stats;
mod tracking {
    pub mod analytics;
    pub mod counter;
    pub mod event_log;
    pub mod keys;
    pub mod time;
    pub mod tracker;
}
mod ui {
    pub mod overlay;
    pub mod press;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
