use dioxus::prelude::*;

mod components;
mod config;
mod error;
mod models;
mod services;

use components::{CountryDialog, WorldMap};
use models::CountryFeature;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut selection = use_signal(|| None::<CountryFeature>);

    // Polygon dataset is loaded exactly once on mount. A failed load is
    // non-fatal: the map renders without clickable regions.
    let features = use_resource(|| async {
        match services::geo_service::load_country_features().await {
            Ok(features) => {
                log::info!("Loaded {} country polygons", features.len());
                features
            }
            Err(e) => {
                log::error!("Failed to load country polygons: {}", e);
                Vec::new()
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "width: 100vw; height: 100vh; display: flex; justify-content: center; align-items: center; background: #1b2a38;",
            WorldMap {
                features: features().unwrap_or_default(),
                on_select: move |feature: CountryFeature| {
                    // Re-clicking the selected country closes the dialog.
                    let same = selection()
                        .map(|current| current.iso_a3 == feature.iso_a3)
                        .unwrap_or(false);
                    if same {
                        selection.set(None);
                    } else {
                        selection.set(Some(feature));
                    }
                },
            }

            CountryDialog { selection }
        }
    }
}
