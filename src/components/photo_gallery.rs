use crate::models::Photo;
use dioxus::prelude::*;

/// Grid of stock photo thumbnails with the photographer as credit.
#[component]
pub fn PhotoGallery(photos: Vec<Photo>) -> Element {
    if photos.is_empty() {
        return rsx! {
            div { style: "padding: 24px; text-align: center; color: #999;", "No photos found" }
        };
    }

    rsx! {
        div { class: "photo-grid",
            for photo in photos {
                img {
                    key: "{photo.id}",
                    class: "photo-thumb",
                    src: "{photo.thumbnail_url}",
                    alt: "{photo.credit}",
                    title: "{photo.credit}",
                    loading: "lazy",
                }
            }
        }
    }
}
