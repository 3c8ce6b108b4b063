use crate::location::Location;

use serde::Deserialize;
use smallvec::{smallvec, SmallVec};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MapError {
    #[error("location has no coordinates to center the map on")]
    CoordinatesMissing,
    #[error("coordinates need a latitude and a longitude, got {0} value(s)")]
    CoordinatesIncomplete(usize),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MapConfig {
    #[serde(default = "MapConfig::default_container")]
    pub container: String,
    #[serde(default = "MapConfig::default_zoom")]
    pub zoom: u8,
    #[serde(default = "MapConfig::default_tile_url")]
    pub tile_url: String,
    #[serde(default = "MapConfig::default_max_zoom")]
    pub max_zoom: u8,
    #[serde(default = "MapConfig::default_attribution")]
    pub attribution: String,
}

impl MapConfig {
    fn default_container() -> String {
        "map".into()
    }

    fn default_zoom() -> u8 {
        10
    }

    fn default_tile_url() -> String {
        "https://tile.openstreetmap.org/{z}/{x}/{y}.png".into()
    }

    fn default_max_zoom() -> u8 {
        19
    }

    fn default_attribution() -> String {
        r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#
            .into()
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            container: Self::default_container(),
            zoom: Self::default_zoom(),
            tile_url: Self::default_tile_url(),
            max_zoom: Self::default_max_zoom(),
            attribution: Self::default_attribution(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub url_template: String,
    pub max_zoom: u8,
    pub attribution: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: (f64, f64),
}

/// What a tile-rendering widget would be handed: a centered, zoomed view
/// with one base tile layer and its markers. Tile fetching itself is the
/// widget's business, not ours.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    container: String,
    center: (f64, f64),
    zoom: u8,
    tile_layer: TileLayer,
    markers: SmallVec<[Marker; 1]>,
}

impl MapView {
    /// Centers a view on the location's coordinates and drops a single
    /// marker there. Coordinates beyond the leading pair are ignored.
    pub fn from_location(config: &MapConfig, location: &Location) -> Result<Self, MapError> {
        let coordinates = location
            .coordinates
            .as_deref()
            .ok_or(MapError::CoordinatesMissing)?;
        let center = match *coordinates {
            [latitude, longitude, ..] => (latitude, longitude),
            _ => return Err(MapError::CoordinatesIncomplete(coordinates.len())),
        };
        Ok(Self {
            container: config.container.clone(),
            center,
            zoom: config.zoom,
            tile_layer: TileLayer {
                url_template: config.tile_url.clone(),
                max_zoom: config.max_zoom,
                attribution: config.attribution.clone(),
            },
            markers: smallvec![Marker { position: center }],
        })
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn tile_layer(&self) -> &TileLayer {
        &self.tile_layer
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location_at(coordinates: Vec<f64>) -> Location {
        Location {
            coordinates: Some(coordinates),
            ..Default::default()
        }
    }

    #[test]
    fn view_is_centered_with_one_marker() {
        let view =
            MapView::from_location(&MapConfig::default(), &location_at(vec![51.5, -0.12]))
                .unwrap();
        assert_eq!(view.center(), (51.5, -0.12));
        assert_eq!(view.zoom(), 10);
        assert_eq!(view.container(), "map");
        assert_eq!(
            view.markers(),
            [Marker {
                position: (51.5, -0.12)
            }]
        );
        assert_eq!(view.tile_layer().max_zoom, 19);
        assert!(view.tile_layer().attribution.contains("OpenStreetMap"));
    }

    #[test]
    fn extra_coordinate_entries_are_ignored() {
        let view =
            MapView::from_location(&MapConfig::default(), &location_at(vec![1.0, 2.0, 3.0]))
                .unwrap();
        assert_eq!(view.center(), (1.0, 2.0));
    }

    #[test]
    fn missing_coordinates_are_an_error() {
        let error = MapView::from_location(&MapConfig::default(), &Location::default())
            .unwrap_err();
        assert_eq!(error, MapError::CoordinatesMissing);
    }

    #[test]
    fn short_coordinates_are_an_error() {
        let error = MapView::from_location(&MapConfig::default(), &location_at(vec![51.5]))
            .unwrap_err();
        assert_eq!(error, MapError::CoordinatesIncomplete(1));
    }

    #[test]
    fn config_defaults_match_empty_table() {
        let config: MapConfig = toml::from_str("").unwrap();
        assert_eq!(config, MapConfig::default());
    }

    #[test]
    fn config_rejects_unknown_keys() {
        assert!(toml::from_str::<MapConfig>("tile_size = 512").is_err());
    }
}
