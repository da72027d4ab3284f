//! Case-insensitive name search with deterministic ordering.

use crate::video::VideoRecord;

/// Filters `records` by `search_term` and orders them by name, ignoring case.
///
/// `records` is expected newest first (as [`crate::catalog_db::CatalogDb::list_videos`]
/// returns them); the sort is stable, so equal names keep that order. A
/// missing or whitespace-only term keeps every record.
pub fn filter_and_sort(records: Vec<VideoRecord>, search_term: Option<&str>) -> Vec<VideoRecord> {
    let needle = search_term
        .filter(|t| !t.trim().is_empty())
        .map(str::to_lowercase);

    let mut keyed: Vec<(String, VideoRecord)> = records
        .into_iter()
        .map(|r| (r.name.to_lowercase(), r))
        .filter(|(name, _)| needle.as_deref().map_or(true, |n| name.contains(n)))
        .collect();

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, r)| r).collect()
}
