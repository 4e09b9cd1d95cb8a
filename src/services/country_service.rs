use crate::config::config;
use crate::error::AppError;
use crate::models::CountryInfo;

/// Fetches country facts for one ISO-3 code from the World Bank API.
pub async fn fetch_country_info(iso_a3: &str) -> Result<CountryInfo, AppError> {
    if iso_a3.trim().is_empty() {
        return Err(AppError::Validation(
            "ISO code must not be empty".to_string(),
        ));
    }

    let url = format!("{}/country/{}?format=json", config().worldbank_url, iso_a3);
    log::debug!("Fetching country info: {}", url);

    let client = super::http_client()?;
    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(AppError::Network(format!(
            "Country API returned status: {}",
            response.status()
        )));
    }

    let body: serde_json::Value = response
        .json()
        .await
        .map_err(|e| AppError::Json(format!("Failed to parse response: {}", e)))?;

    CountryInfo::from_api_response(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_iso_code_is_rejected_without_a_request() {
        let err = fetch_country_info("   ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
