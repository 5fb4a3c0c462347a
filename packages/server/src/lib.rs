// IRRES Locations API - Core
//
// Scrapes the location labels offered by the IRRES listings search form and
// serves them as JSON. One fixed upstream page, one selector, one endpoint.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
