//! Video CRUD on [`super::CatalogDb`].

mod read;
mod write;
