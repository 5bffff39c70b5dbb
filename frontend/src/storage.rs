use gloo::storage::{LocalStorage, Storage};
use log::{info, warn};
use shared::share::SHARE_PARAM;
use shared::{decode_entries, validate_entries, Entry, Preset, ShareError};

use crate::config::query_param;

pub fn entries_key(preset: Preset) -> String {
    format!("wheel_entries:{}", preset.slug())
}

pub fn load_entries(preset: Preset) -> Option<Vec<Entry>> {
    let entries: Vec<Entry> = LocalStorage::get(entries_key(preset)).ok()?;
    accept_stored(preset, entries)
}

/// Stored lists are kept as saved, including an empty one.
fn accept_stored(preset: Preset, entries: Vec<Entry>) -> Option<Vec<Entry>> {
    match validate_entries(&entries) {
        Ok(()) => Some(entries),
        Err(err) => {
            warn!("Ignoring stored entries for {}: {}", preset.slug(), err);
            None
        }
    }
}

pub fn save_entries(preset: Preset, entries: &[Entry]) {
    if let Err(err) = LocalStorage::set(entries_key(preset), entries) {
        warn!("Failed to save entries for {}: {}", preset.slug(), err);
    }
}

/// A share code wins over stored entries, which win over the preset.
pub fn resolve_initial_entries(
    shared: Option<Result<Vec<Entry>, ShareError>>,
    stored: Option<Vec<Entry>>,
    preset: Preset,
) -> Vec<Entry> {
    match shared {
        Some(Ok(entries)) => {
            info!("Loaded {} entries from share link", entries.len());
            return entries;
        }
        Some(Err(err)) => warn!("Ignoring share link: {}", err),
        None => {}
    }
    stored.unwrap_or_else(|| preset.entries())
}

pub fn initial_entries(preset: Preset) -> Vec<Entry> {
    let shared = query_param(SHARE_PARAM).map(|code| decode_entries(&code));
    resolve_initial_entries(shared, load_entries(preset), preset)
}
