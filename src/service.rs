use crate::config::Config;
use crate::fetch::{FetchError, LocationFetcher};
use crate::location::Location;
use crate::map::{MapConfig, MapError, MapView};
use crate::page::{Page, PageError, PageTrait};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Page(#[from] PageError),
    #[error(transparent)]
    Map(#[from] MapError),
}

/// The display controller: one fetch, one render, per run. Holds no
/// per-run state, so consecutive runs are fully independent.
pub struct DisplayService {
    fetcher: LocationFetcher,
    map: Option<MapConfig>,
}

impl DisplayService {
    pub fn from_config(config: Config) -> Self {
        let Config { endpoint, map, .. } = config;
        Self {
            fetcher: LocationFetcher::new(endpoint),
            map,
        }
    }

    /// Fetches the location and renders it into `page`. The render starts
    /// only after the single await point resolves, so slot text is never
    /// written from partial data.
    pub async fn run(&self, page: &mut Page) -> Result<Location, ServiceError> {
        let location = self.fetcher.fetch().await?;
        self.display(&location, page)?;
        Ok(location)
    }

    fn display(&self, location: &Location, page: &mut Page) -> Result<(), ServiceError> {
        render_fields(location, page)?;
        if let Some(map_config) = &self.map {
            let view = MapView::from_location(map_config, location)?;
            page.mount_map(view)?;
        }
        log_location(location);
        Ok(())
    }
}

/// Writes every field into its slot, in page order. A missing slot aborts
/// the rest of the sequence, leaving later slots untouched.
pub fn render_fields(location: &Location, page: &mut Page) -> Result<(), PageError> {
    for (id, text) in location.fields() {
        page.set_text(id, &text)?;
    }
    Ok(())
}

pub fn log_location(location: &Location) {
    log::info!("location: {:?}", location);
}
