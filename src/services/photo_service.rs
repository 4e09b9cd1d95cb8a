use crate::config::config;
use crate::error::AppError;
use crate::models::photo::{Photo, PhotoSearchResponse, PHOTOS_PER_COUNTRY};

/// Searches stock photos for a country name. At most
/// [`PHOTOS_PER_COUNTRY`] results.
///
/// An empty name short-circuits to an empty list: the name only becomes
/// known once the info fetch resolves, and an empty query would burn an
/// API call on meaningless results.
pub async fn search_country_photos(country_name: &str) -> Result<Vec<Photo>, AppError> {
    if country_name.trim().is_empty() {
        log::debug!("Skipping photo search for empty country name");
        return Ok(Vec::new());
    }

    let api_key = &config().pexels_api_key;
    if api_key.is_empty() {
        return Err(AppError::Validation(
            "Photo API key not configured (set PEXELS_API_KEY or atlas.toml)".to_string(),
        ));
    }

    let url = format!("{}/search", config().pexels_url);
    log::debug!("Searching photos for {:?}", country_name);

    let per_page = PHOTOS_PER_COUNTRY.to_string();
    let client = super::http_client()?;
    let response = client
        .get(&url)
        .header("Authorization", api_key)
        .query(&[("query", country_name), ("per_page", per_page.as_str())])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(AppError::Network(format!(
            "Photo API returned status: {}",
            response.status()
        )));
    }

    let body: PhotoSearchResponse = response
        .json()
        .await
        .map_err(|e| AppError::Json(format!("Failed to parse response: {}", e)))?;

    Ok(body.into_photos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_name_yields_no_photos_and_no_request() {
        let photos = search_country_photos("").await.unwrap();
        assert!(photos.is_empty());
    }

    #[tokio::test]
    async fn test_missing_api_key_is_a_validation_error() {
        // The test environment has no atlas.toml and no PEXELS_API_KEY
        if config().pexels_api_key.is_empty() {
            let err = search_country_photos("Japan").await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }
}
