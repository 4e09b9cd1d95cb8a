pub mod country_service;
pub mod geo_service;
pub mod photo_service;
pub mod request_cache;

use crate::error::AppError;

/// Shared HTTP client for all services.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn http_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .connect_timeout(std::time::Duration::from_secs(10))
        .user_agent("CountryAtlas/0.1.0")
        .build()
        .map_err(|e| AppError::Network(format!("Client build failed: {}", e)))
}

// The wasm client is driven by the browser's fetch; timeouts and the
// user agent are not configurable there.
#[cfg(target_arch = "wasm32")]
pub(crate) fn http_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::new())
}
