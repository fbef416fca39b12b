use super::level::{QualityLevel, RawLevel};
use crate::config::{SelectorOptions, SortOrder};
use crate::utils::logging::{log_level_dropped, log_level_excluded, log_level_ingested};

/// Result of offering a raw level to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Level was added and takes part in selection
    Added,
    /// Level was recorded but sits outside the height bounds; the host
    /// must keep it disabled
    Excluded,
    /// Width, height or bitrate was missing
    Dropped,
}

/// Quality levels known for the currently loaded source
#[derive(Debug, Clone, Default)]
pub struct LevelCatalog {
    levels: Vec<QualityLevel>,
    excluded: Vec<QualityLevel>,
}

impl LevelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets every level of the previous source
    pub fn reset(&mut self) {
        self.levels.clear();
        self.excluded.clear();
    }

    pub fn ingest(&mut self, raw: &RawLevel, options: &SelectorOptions) -> IngestOutcome {
        let Some(level) = QualityLevel::from_raw(raw) else {
            log_level_dropped(raw.id);
            return IngestOutcome::Dropped;
        };

        if !options.height_in_bounds(level.height) {
            log_level_excluded(level.id, level.height);
            self.excluded.push(level);
            return IngestOutcome::Excluded;
        }

        log_level_ingested(level.id, &level.dimension, level.bitrate);
        self.levels.push(level);
        IngestOutcome::Added
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Selectable levels in catalog order
    pub fn levels(&self) -> &[QualityLevel] {
        &self.levels
    }

    /// Levels rejected by the height bounds, in discovery order
    pub fn excluded(&self) -> &[QualityLevel] {
        &self.excluded
    }

    pub fn iter(&self) -> impl Iterator<Item = &QualityLevel> {
        self.levels.iter()
    }

    pub fn get(&self, id: usize) -> Option<&QualityLevel> {
        self.levels.iter().find(|level| level.id == id)
    }

    pub fn contains(&self, id: usize) -> bool {
        self.get(id).is_some()
    }

    /// First level with the smallest unique id
    pub fn lowest(&self) -> Option<&QualityLevel> {
        self.levels
            .iter()
            .reduce(|res, level| if level.unique_id < res.unique_id { level } else { res })
    }

    /// First level with the largest unique id
    pub fn highest(&self) -> Option<&QualityLevel> {
        self.levels
            .iter()
            .reduce(|res, level| if level.unique_id > res.unique_id { level } else { res })
    }

    pub fn clear_current(&mut self) {
        for level in &mut self.levels {
            level.is_current = false;
        }
    }

    /// Marks `id` current, along with its duplicates under the active filters.
    ///
    /// Returns false if `id` is not in the catalog.
    pub fn mark_current(&mut self, id: usize, options: &SelectorOptions) -> bool {
        let Some(selected) = self.get(id).map(|level| (level.unique_id, level.height)) else {
            return false;
        };
        let (unique_id, height) = selected;

        for level in &mut self.levels {
            level.is_current = level.id == id
                || (options.filter_duplicates && level.unique_id == unique_id)
                || (options.filter_duplicate_heights && level.height == height);
        }

        true
    }

    /// Reorders the catalog for presentation. Stable.
    pub fn sort(&mut self, options: &SelectorOptions) {
        if options.sort_enabled {
            match options.sort {
                SortOrder::Descending => self.levels.sort_by(|a, b| b.unique_id.cmp(&a.unique_id)),
                SortOrder::Ascending => self.levels.sort_by(|a, b| a.unique_id.cmp(&b.unique_id)),
            }
        } else {
            self.levels.sort_by_key(|level| level.id);
        }
    }
}
