use crate::models::{CountryFeature, CountryInfo, Photo};
use crate::services::request_cache::{FetchStatus, RequestCache, RequestKey};
use crate::services::{country_service, photo_service};
use dioxus::prelude::*;

/// Dialog states, driven by {selection present} x {info fetch status}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Loading,
    Ready,
    Error,
}

/// Pure state derivation. A missing status means the fetch for the
/// current key has not been recorded yet, which renders as loading.
pub fn dialog_state<T>(selection_present: bool, info: Option<&FetchStatus<T>>) -> DialogState {
    if !selection_present {
        return DialogState::Closed;
    }
    match info {
        None | Some(FetchStatus::Loading) => DialogState::Loading,
        Some(FetchStatus::Ready(_)) => DialogState::Ready,
        Some(FetchStatus::Failed(_)) => DialogState::Error,
    }
}

/// Modal dialog for the selected country: facts from the info fetch plus
/// a photo gallery, each with its own loading/error state.
///
/// Both fetches live in keyed request caches. The info fetch is keyed by
/// the ISO-3 code, the photo fetch by the resolved country name; on
/// re-selection the keys change and late results for the old keys are
/// dropped by the cache, never rendered.
#[component]
pub fn CountryDialog(mut selection: Signal<Option<CountryFeature>>) -> Element {
    let mut info_cache = use_signal(RequestCache::<CountryInfo>::new);
    let mut photo_cache = use_signal(RequestCache::<Vec<Photo>>::new);

    use_effect(move || {
        let Some(feature) = selection() else {
            // Close cascades to cache invalidation for both fetches
            info_cache.write().invalidate();
            photo_cache.write().invalidate();
            return;
        };

        let key = RequestKey::country_info(&feature.iso_a3);
        if info_cache.peek().matches(&key) {
            return;
        }

        info_cache.write().begin(key.clone());
        photo_cache.write().invalidate();

        spawn(async move {
            match country_service::fetch_country_info(&feature.iso_a3).await {
                Ok(info) => {
                    let name = info.name.clone();
                    let accepted = info_cache.write().complete(&key, Ok(info));

                    // The photo query needs the resolved name, so it starts
                    // only once the info fetch lands and only if its result
                    // still belongs to the current selection.
                    if accepted && !name.trim().is_empty() {
                        let photo_key = RequestKey::photos(&name);
                        photo_cache.write().begin(photo_key.clone());
                        let result = photo_service::search_country_photos(&name)
                            .await
                            .map_err(|e| e.to_string());
                        if !photo_cache.write().complete(&photo_key, result) {
                            log::debug!("Dropped stale photo result for {:?}", name);
                        }
                    }
                }
                Err(e) => {
                    log::error!("Country info fetch failed for {}: {}", feature.iso_a3, e);
                    info_cache.write().complete(&key, Err(e.to_string()));
                }
            }
        });
    });

    let Some(feature) = selection() else {
        return rsx! {};
    };

    let info_key = RequestKey::country_info(&feature.iso_a3);
    let info_status = info_cache.read().status_for(&info_key).cloned();
    let state = dialog_state(true, info_status.as_ref());

    rsx! {
        // Clicking outside the dialog closes it
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0,0,0,0.6); z-index: 100; display: flex; align-items: center; justify-content: center;",
            onclick: move |_| selection.set(None),

            div {
                style: "width: 80%; height: 80%; background: white; border-radius: 12px; padding: 24px; display: flex; flex-direction: column; overflow: hidden;",
                onclick: move |e| e.stop_propagation(),

                div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                    h2 { style: "margin: 0; font-size: 24px; color: #333;", "Country Information" }
                    button {
                        style: "padding: 8px 16px; background: #000; color: #fff; border-radius: 5px; cursor: pointer;",
                        onclick: move |_| selection.set(None),
                        "Close"
                    }
                }

                match state {
                    DialogState::Loading => rsx! {
                        div { style: "flex: 1; display: flex; align-items: center; justify-content: center; color: #666;",
                            "Loading..."
                        }
                    },
                    DialogState::Error => rsx! {
                        div { style: "flex: 1; display: flex; align-items: center; justify-content: center; color: #c33;",
                            if let Some(FetchStatus::Failed(msg)) = &info_status {
                                "An error occurred: {msg}"
                            }
                        }
                    },
                    DialogState::Ready => rsx! {
                        if let Some(FetchStatus::Ready(info)) = &info_status {
                            CountryDetails {
                                info: info.clone(),
                                // An empty name never starts a photo fetch,
                                // so render it as an empty gallery
                                photos: if info.name.trim().is_empty() {
                                    Some(FetchStatus::Ready(Vec::new()))
                                } else {
                                    photo_cache.read().status_for(&RequestKey::photos(&info.name)).cloned()
                                },
                            }
                        }
                    },
                    // Unreachable here: a missing selection returns early above
                    DialogState::Closed => rsx! {},
                }
            }
        }
    }
}

/// Resolved country facts plus the photo pane with its own fetch state.
#[component]
fn CountryDetails(info: CountryInfo, photos: Option<FetchStatus<Vec<Photo>>>) -> Element {
    let flag_url = info.flag_url();

    rsx! {
        div { style: "flex: 1; display: flex; gap: 24px; overflow: hidden;",

            div { style: "flex: 1; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 24px;",
                img {
                    src: "{flag_url}",
                    alt: "Flag of {info.name}",
                    style: "width: 70%; height: auto; object-fit: cover; box-shadow: 0 0 10px #000;",
                }
                div { style: "display: flex; flex-direction: column; gap: 10px; font-size: 16px; color: #333;",
                    p { style: "margin: 0;", strong { "Country Name: " } "{info.name}" }
                    p { style: "margin: 0;", strong { "ISO Code: " } "{info.iso_a3}" }
                    p { style: "margin: 0;", strong { "Region: " } "{info.region}" }
                    p { style: "margin: 0;", strong { "Capital City: " } "{info.capital_city}" }
                    p { style: "margin: 0;",
                        strong { "Latitude: " }
                        "{info.latitude}"
                        strong { " Longitude: " }
                        "{info.longitude}"
                    }
                }
            }

            div { style: "flex: 1; overflow-y: auto;",
                match photos {
                    None | Some(FetchStatus::Loading) => rsx! {
                        div { style: "padding: 24px; text-align: center; color: #666;", "Loading photos..." }
                    },
                    Some(FetchStatus::Failed(msg)) => rsx! {
                        div { style: "padding: 24px; text-align: center; color: #c33;", "An error occurred: {msg}" }
                    },
                    Some(FetchStatus::Ready(photos)) => rsx! {
                        crate::components::PhotoGallery { photos }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_without_selection_regardless_of_status() {
        assert_eq!(dialog_state::<()>(false, None), DialogState::Closed);
        assert_eq!(
            dialog_state(false, Some(&FetchStatus::<()>::Loading)),
            DialogState::Closed
        );
        assert_eq!(
            dialog_state(false, Some(&FetchStatus::Ready(1))),
            DialogState::Closed
        );
        assert_eq!(
            dialog_state::<()>(false, Some(&FetchStatus::Failed("x".to_string()))),
            DialogState::Closed
        );
    }

    #[test]
    fn test_open_states_follow_fetch_status() {
        assert_eq!(dialog_state::<()>(true, None), DialogState::Loading);
        assert_eq!(
            dialog_state(true, Some(&FetchStatus::<()>::Loading)),
            DialogState::Loading
        );
        assert_eq!(
            dialog_state(true, Some(&FetchStatus::Ready(1))),
            DialogState::Ready
        );
        assert_eq!(
            dialog_state::<()>(true, Some(&FetchStatus::Failed("x".to_string()))),
            DialogState::Error
        );
    }

    #[test]
    fn test_reselection_never_shows_previous_country() {
        // Japan resolved, then the user clicks France: the status for the
        // new key is None, so the dialog shows loading, not Japan's data.
        let mut cache = RequestCache::new();
        let japan = RequestKey::country_info("JPN");
        cache.begin(japan.clone());
        cache.complete(&japan, Ok("japan data"));

        let france = RequestKey::country_info("FRA");
        cache.begin(france.clone());

        assert_eq!(
            dialog_state(true, cache.status_for(&france)),
            DialogState::Loading
        );
        assert_eq!(cache.status_for(&japan), None);
    }

    #[test]
    fn test_error_state_after_failed_fetch() {
        let mut cache: RequestCache<&str> = RequestCache::new();
        let key = RequestKey::country_info("XYZ");
        cache.begin(key.clone());
        cache.complete(&key, Err("no country data in response".to_string()));

        assert_eq!(
            dialog_state(true, cache.status_for(&key)),
            DialogState::Error
        );
    }
}
