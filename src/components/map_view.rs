use crate::models::geo::{CountryFeature, MAP_HEIGHT, MAP_WIDTH};
use dioxus::prelude::*;

/// The world map: an SVG layer of country polygons over a flat ocean
/// background. Clicking a polygon reports that feature upward; there is
/// no other interaction.
#[component]
pub fn WorldMap(features: Vec<CountryFeature>, on_select: EventHandler<CountryFeature>) -> Element {
    rsx! {
        svg {
            view_box: "0 0 {MAP_WIDTH} {MAP_HEIGHT}",
            preserve_aspect_ratio: "xMidYMid meet",
            style: "width: 94%; height: 94%; background: #27455c; border-radius: 10px;",

            for feature in features {
                path {
                    key: "{feature.iso_a3}",
                    class: "country",
                    d: "{feature.path_data}",
                    fill_rule: "evenodd",
                    onclick: move |_| on_select.call(feature.clone()),
                }
            }
        }
    }
}
