use std::rc::Rc;

use log::{error, info, Level};
use yew::prelude::*;

mod config;
mod coordinator;
mod listeners;
mod smooth_scroll;
mod theme;
mod components {
    pub mod anchor;
    pub mod animated_section;
    pub mod footer;
    pub mod nav;
    pub mod newsletter;
}
mod pages {
    pub mod landing;
    pub mod sections;
}

use config::SiteConfig;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    let config = use_memo(
        |_| match SiteConfig::bundled() {
            Ok(config) => Some(Rc::new(config)),
            Err(e) => {
                error!("Invalid site configuration: {}", e);
                None
            }
        },
        (),
    );

    // Kept alive by the memo for as long as the app is mounted.
    let _theme = use_memo(
        |config| {
            let config = config.as_ref()?;
            theme::mount(&config.theme)
                .map_err(|e| error!("Theme stylesheet rejected: {}", e))
                .ok()
        },
        (*config).clone(),
    );

    match (*config).clone() {
        Some(config) => html! { <Landing {config} /> },
        None => html! {},
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
