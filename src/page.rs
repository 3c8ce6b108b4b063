use crate::map::MapView;

use enum_dispatch::enum_dispatch;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PageError {
    #[error("no display slot with id {0:?}")]
    NoSuchSlot(String),
    #[error("no map container with id {0:?}")]
    NoSuchContainer(String),
}

/// Write access to the named output slots of a host page.
#[enum_dispatch(Page)]
pub trait PageTrait {
    fn set_text(&mut self, id: &str, text: &str) -> Result<(), PageError>;
    fn mount_map(&mut self, view: MapView) -> Result<(), PageError>;
}

#[enum_dispatch]
pub enum Page {
    Slots(SlotPage),
    Console(ConsolePage),
}

/// An in-memory page: a fixed set of text slots and map containers.
/// Writes to ids the page does not have fail the same way a missing
/// element would on a real page.
#[derive(Debug, Default)]
pub struct SlotPage {
    slots: HashMap<String, String>,
    containers: HashSet<String>,
    map: Option<MapView>,
}

impl SlotPage {
    pub fn with_slots<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slots: ids
                .into_iter()
                .map(|id| (id.into(), String::new()))
                .collect(),
            containers: HashSet::new(),
            map: None,
        }
    }

    pub fn add_container<S: Into<String>>(mut self, id: S) -> Self {
        self.containers.insert(id.into());
        self
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.slots.get(id).map(String::as_str)
    }

    pub fn map(&self) -> Option<&MapView> {
        self.map.as_ref()
    }
}

impl PageTrait for SlotPage {
    fn set_text(&mut self, id: &str, text: &str) -> Result<(), PageError> {
        match self.slots.get_mut(id) {
            Some(slot) => {
                text.clone_into(slot);
                Ok(())
            }
            None => Err(PageError::NoSuchSlot(id.to_owned())),
        }
    }

    fn mount_map(&mut self, view: MapView) -> Result<(), PageError> {
        if !self.containers.contains(view.container()) {
            return Err(PageError::NoSuchContainer(view.container().to_owned()));
        }
        self.map = Some(view);
        Ok(())
    }
}

/// A page rendered to stdout, one `id: text` line per slot. Every id
/// exists here, so writes never fail.
#[derive(Debug, Default)]
pub struct ConsolePage;

impl ConsolePage {
    pub fn new() -> Self {
        Self
    }
}

impl PageTrait for ConsolePage {
    fn set_text(&mut self, id: &str, text: &str) -> Result<(), PageError> {
        println!("{id}: {text}");
        Ok(())
    }

    fn mount_map(&mut self, view: MapView) -> Result<(), PageError> {
        let (latitude, longitude) = view.center();
        println!(
            "{}: centered at {latitude},{longitude} zoom {}, {} marker(s)",
            view.container(),
            view.zoom(),
            view.markers().len(),
        );
        Ok(())
    }
}
