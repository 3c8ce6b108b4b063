pub mod config;
pub mod fetch;
pub mod location;
pub mod map;
pub mod page;
pub mod service;
mod uri_tools;
