//! Simple logging helper functions for selection events

/// Logs a media source change
pub fn log_media_change(previous_levels: usize) {
    tracing::info!(
        "Media change started, discarding {} quality level(s)",
        previous_levels
    );
}

/// Logs a quality level accepted into the catalog
pub fn log_level_ingested(id: usize, dimension: &str, bitrate: u64) {
    tracing::debug!("Discovered level {}: {} @ {} bps", id, dimension, bitrate);
}

/// Logs a level event that was missing width, height or bitrate
pub fn log_level_dropped(id: usize) {
    tracing::debug!("Dropping level {}: incomplete dimensions or bitrate", id);
}

/// Logs a level disabled by the configured height bounds
pub fn log_level_excluded(id: usize, height: u32) {
    tracing::debug!("Level {} excluded by height bounds ({}p)", id, height);
}

/// Logs an explicit level pin
pub fn log_level_pinned(id: usize, enabled: usize) {
    tracing::info!("Pinned quality level {} ({} level(s) enabled)", id, enabled);
}

/// Logs the result of a publish pass
pub fn log_selection_published(label: &str, items: usize, auto_mode: bool) {
    tracing::debug!(
        "Selected quality {} ({} menu item(s), auto: {})",
        label,
        items,
        auto_mode
    );
}
