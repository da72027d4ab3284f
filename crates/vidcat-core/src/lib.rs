pub mod config;
pub mod logging;

pub mod catalog_db;
pub mod error;
pub mod search;
pub mod video;
pub mod youtube;
