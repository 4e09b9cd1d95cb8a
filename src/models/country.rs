use crate::error::AppError;
use serde_json::Value;

/// Basic country facts, reshaped from the World Bank country endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryInfo {
    pub name: String,
    pub iso_a3: String,
    /// ISO 3166-1 alpha-2 code, lower-cased (flag CDN convention)
    pub iso_a2: String,
    pub capital_city: String,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CountryInfo {
    /// Reshapes the API's two-element response (`[metadata, [country]]`)
    /// into a flat record.
    ///
    /// The shape is validated field by field instead of indexed blindly:
    /// any missing piece is a `MalformedResponse`, so a changed upstream
    /// format surfaces as a clear error rather than a panic.
    pub fn from_api_response(response: &Value) -> Result<Self, AppError> {
        let envelope = response
            .as_array()
            .filter(|a| a.len() >= 2)
            .ok_or_else(|| malformed("expected a two-element array"))?;

        let country = envelope[1]
            .as_array()
            .and_then(|list| list.first())
            .ok_or_else(|| malformed("no country data in response"))?;

        let name = string_field(country, "name")?;
        let iso_a3 = string_field(country, "id")?;
        let iso_a2 = string_field(country, "iso2Code")?.to_lowercase();
        let capital_city = string_field(country, "capitalCity")?;

        let region = country
            .get("region")
            .and_then(|r| r.get("value"))
            .and_then(|v| v.as_str())
            .ok_or_else(|| malformed("missing region.value"))?
            .to_string();

        let latitude = number_field(country, "latitude")?;
        let longitude = number_field(country, "longitude")?;

        Ok(CountryInfo {
            name,
            iso_a3,
            iso_a2,
            capital_city,
            region,
            latitude,
            longitude,
        })
    }

    /// Flag image URL on the public flag CDN, keyed by the lower-cased
    /// two-letter code.
    pub fn flag_url(&self) -> String {
        format!("https://flagcdn.com/{}.svg", self.iso_a2)
    }
}

fn malformed(msg: &str) -> AppError {
    AppError::MalformedResponse(msg.to_string())
}

fn string_field(country: &Value, key: &str) -> Result<String, AppError> {
    country
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| malformed(&format!("missing field {}", key)))
}

/// The API serializes coordinates as strings ("36.3"); accept numbers too.
fn number_field(country: &Value, key: &str) -> Result<f64, AppError> {
    let value = country
        .get(key)
        .ok_or_else(|| malformed(&format!("missing field {}", key)))?;

    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| malformed(&format!("field {} is not a finite number", key))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| malformed(&format!("field {} is not numeric: {:?}", key, s))),
        _ => Err(malformed(&format!("field {} is not numeric", key))),
    }
}
