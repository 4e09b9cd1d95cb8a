use crate::config::config;
use crate::error::AppError;
use crate::models::geo::{parse_country_features, CountryFeature};

/// Fetches and parses the country polygon dataset.
///
/// Called once on mount. The caller treats a failure as non-fatal and
/// renders the map without clickable regions.
pub async fn load_country_features() -> Result<Vec<CountryFeature>, AppError> {
    let url = &config().countries_url;
    log::debug!("Loading country polygons from {}", url);

    let client = super::http_client()?;
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(AppError::Network(format!(
            "Polygon dataset returned status: {}",
            response.status()
        )));
    }

    let raw = response.text().await?;
    parse_country_features(&raw)
}
