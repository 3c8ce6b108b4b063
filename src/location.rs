use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Text shown for a field the endpoint did not send.
pub const MISSING_TEXT: &str = "undefined";

/// Geolocation metadata for the current request, as returned by the
/// `/location` endpoint. Every field is a pass-through: nothing is
/// validated, nothing is owned beyond the lifetime of one display run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub colo: Option<String>,
    #[serde(default)]
    pub asn: Option<u32>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
    /// Latitude then longitude; extra entries are tolerated and ignored.
    #[serde(default)]
    pub coordinates: Option<Vec<f64>>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub metro_code: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub region_code: Option<String>,
    #[serde(default)]
    pub http_version: Option<String>,
}

impl Location {
    /// All display slots in page order, each paired with its rendered text.
    pub fn fields(&self) -> [(&'static str, String); 11] {
        [
            ("colo", field_text(&self.colo)),
            ("asn", field_text(&self.asn)),
            ("country", field_text(&self.country)),
            ("city", field_text(&self.city)),
            ("continent", field_text(&self.continent)),
            ("coordinates", coordinates_text(&self.coordinates)),
            ("postalcode", field_text(&self.postal_code)),
            ("metrocode", field_text(&self.metro_code)),
            ("region", field_text(&self.region)),
            ("regioncode", field_text(&self.region_code)),
            ("httpversion", field_text(&self.http_version)),
        ]
    }
}

fn field_text<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => MISSING_TEXT.to_owned(),
    }
}

fn coordinates_text(coordinates: &Option<Vec<f64>>) -> String {
    match coordinates {
        Some(values) => values
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(","),
        None => MISSING_TEXT.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAYLOAD: &str = r#"{
        "colo": "LHR",
        "asn": 13335,
        "country": "GB",
        "city": "London",
        "continent": "EU",
        "coordinates": [51.5, -0.12],
        "postal_code": "SW1A",
        "metro_code": "0",
        "region": "England",
        "region_code": "ENG",
        "http_version": "HTTP/2"
    }"#;

    #[test]
    fn full_payload_renders_every_field() {
        let location: Location = serde_json::from_str(FULL_PAYLOAD).unwrap();
        let expected = [
            ("colo", "LHR"),
            ("asn", "13335"),
            ("country", "GB"),
            ("city", "London"),
            ("continent", "EU"),
            ("coordinates", "51.5,-0.12"),
            ("postalcode", "SW1A"),
            ("metrocode", "0"),
            ("region", "England"),
            ("regioncode", "ENG"),
            ("httpversion", "HTTP/2"),
        ];
        for ((id, text), (expected_id, expected_text)) in
            location.fields().iter().zip(expected.iter())
        {
            assert_eq!(id, expected_id);
            assert_eq!(text, expected_text);
        }
    }

    #[test]
    fn omitted_fields_render_as_undefined() {
        let location: Location = serde_json::from_str(r#"{"colo": "DFW"}"#).unwrap();
        let fields = location.fields();
        assert_eq!(fields[0], ("colo", "DFW".to_owned()));
        for (_, text) in &fields[1..] {
            assert_eq!(text, MISSING_TEXT);
        }
    }

    #[test]
    fn empty_payload_is_well_formed() {
        let location: Location = serde_json::from_str("{}").unwrap();
        for (_, text) in location.fields() {
            assert_eq!(text, MISSING_TEXT);
        }
    }

    #[test]
    fn unknown_payload_fields_are_ignored() {
        let location: Location =
            serde_json::from_str(r#"{"colo": "SYD", "time": 1693000000000}"#).unwrap();
        assert_eq!(location.colo.as_deref(), Some("SYD"));
    }

    #[test]
    fn invalid_payload_is_rejected() {
        assert!(serde_json::from_str::<Location>("<html>not json</html>").is_err());
    }
}
