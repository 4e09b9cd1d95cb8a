use crate::error::AppError;
use geojson::{GeoJson, PolygonType, Value};

/// Width/height of the SVG viewBox the polygons are projected into.
pub const MAP_WIDTH: f64 = 360.0;
pub const MAP_HEIGHT: f64 = 180.0;

/// One clickable country polygon, parsed from the GeoJSON dataset.
///
/// `path_data` is the precomputed SVG path for all rings of the feature
/// (exterior and holes), so rendering is a plain attribute interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryFeature {
    /// ISO 3166-1 alpha-3 code, the join key for the info fetch
    pub iso_a3: String,
    /// Display name from the dataset, falls back to the ISO code
    pub name: String,
    pub path_data: String,
}

/// Equirectangular projection into the `0 0 360 180` viewBox.
/// Longitude -180..180 maps to x 0..360, latitude 90..-90 to y 0..180.
pub fn project(lon: f64, lat: f64) -> (f64, f64) {
    (lon + 180.0, 90.0 - lat)
}

/// Parses the country polygon dataset.
///
/// Features are skipped (not errors) when they carry no usable `ISO_A3`
/// property or no polygon geometry; the dataset mixes in disputed areas
/// marked `-99` which cannot be joined to the info API.
pub fn parse_country_features(raw: &str) -> Result<Vec<CountryFeature>, AppError> {
    let geojson: GeoJson = raw
        .parse()
        .map_err(|e| AppError::MalformedResponse(format!("invalid GeoJSON: {}", e)))?;

    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        _ => {
            return Err(AppError::MalformedResponse(
                "expected a GeoJSON FeatureCollection".to_string(),
            ))
        }
    };

    let mut features = Vec::new();
    for feature in collection.features {
        let properties = match feature.properties.as_ref() {
            Some(p) => p,
            None => continue,
        };

        let iso_a3 = match properties.get("ISO_A3").and_then(|v| v.as_str()) {
            Some(code) if code != "-99" => code.to_string(),
            _ => continue,
        };

        let name = properties
            .get("ADMIN")
            .or_else(|| properties.get("NAME"))
            .and_then(|v| v.as_str())
            .unwrap_or(&iso_a3)
            .to_string();

        let geometry = match feature.geometry {
            Some(g) => g,
            None => continue,
        };

        let path_data = match geometry.value {
            Value::Polygon(polygon) => polygon_path(&polygon),
            Value::MultiPolygon(polygons) => polygons
                .iter()
                .map(|p| polygon_path(p))
                .collect::<Vec<_>>()
                .join(" "),
            _ => continue,
        };

        if path_data.is_empty() {
            continue;
        }

        features.push(CountryFeature {
            iso_a3,
            name,
            path_data,
        });
    }

    Ok(features)
}

/// SVG path for one polygon, all rings included. Holes render correctly
/// with `fill-rule: evenodd`.
fn polygon_path(polygon: &PolygonType) -> String {
    let mut path = String::new();
    for ring in polygon {
        if ring.len() < 3 {
            continue;
        }
        for (i, position) in ring.iter().enumerate() {
            if position.len() < 2 {
                continue;
            }
            let (x, y) = project(position[0], position[1]);
            if i == 0 {
                path.push_str(&format!("M{:.2},{:.2}", x, y));
            } else {
                path.push_str(&format!(" L{:.2},{:.2}", x, y));
            }
        }
        path.push('Z');
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(features: &str) -> String {
        format!(r#"{{"type":"FeatureCollection","features":[{}]}}"#, features)
    }

    fn square_feature(iso: &str) -> String {
        format!(
            r#"{{"type":"Feature","properties":{{"ISO_A3":"{}","ADMIN":"Testland"}},
                "geometry":{{"type":"Polygon","coordinates":[[[0,0],[10,0],[10,10],[0,10],[0,0]]]}}}}"#,
            iso
        )
    }

    #[test]
    fn test_project_corners() {
        assert_eq!(project(-180.0, 90.0), (0.0, 0.0));
        assert_eq!(project(180.0, -90.0), (MAP_WIDTH, MAP_HEIGHT));
        assert_eq!(project(0.0, 0.0), (180.0, 90.0));
    }

    #[test]
    fn test_parse_single_polygon() {
        let raw = collection(&square_feature("JPN"));
        let features = parse_country_features(&raw).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].iso_a3, "JPN");
        assert_eq!(features[0].name, "Testland");
        assert!(features[0].path_data.starts_with("M180.00,90.00"));
        assert!(features[0].path_data.ends_with('Z'));
    }

    #[test]
    fn test_multipolygon_produces_one_path_per_part() {
        let raw = collection(
            r#"{"type":"Feature","properties":{"ISO_A3":"IDN"},
                "geometry":{"type":"MultiPolygon","coordinates":[
                    [[[0,0],[5,0],[5,5],[0,0]]],
                    [[[20,20],[25,20],[25,25],[20,20]]]]}}"#,
        );
        let features = parse_country_features(&raw).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].path_data.matches('M').count(), 2);
        assert_eq!(features[0].path_data.matches('Z').count(), 2);
    }

    #[test]
    fn test_skips_missing_and_placeholder_iso_codes() {
        let no_iso = r#"{"type":"Feature","properties":{"ADMIN":"Nowhere"},
            "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}}"#;
        let raw = collection(&format!(
            "{},{},{}",
            square_feature("-99"),
            no_iso,
            square_feature("FRA")
        ));
        let features = parse_country_features(&raw).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].iso_a3, "FRA");
    }

    #[test]
    fn test_skips_non_polygon_geometry() {
        let raw = collection(
            r#"{"type":"Feature","properties":{"ISO_A3":"PNT"},
                "geometry":{"type":"Point","coordinates":[1,2]}}"#,
        );
        let features = parse_country_features(&raw).unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(parse_country_features("not geojson").is_err());
        assert!(parse_country_features(r#"{"type":"Point","coordinates":[1,2]}"#).is_err());
    }
}
