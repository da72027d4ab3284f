//! Persistent video catalog (SQLite via sqlx).
//!
//! Stores validated videos keyed by an integer id, with a unique index on the
//! YouTube video id.

pub mod db;
mod videos;

pub use db::*;
