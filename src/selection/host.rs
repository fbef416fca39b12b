use crate::levels::RawLevel;
use serde::{Deserialize, Serialize};

/// The host player's level list, as seen by the selection engine.
///
/// Ids are positions in the host list. The host's adaptive logic only picks
/// among enabled levels.
pub trait LevelHost {
    fn level_count(&self) -> usize;

    /// Height of the host level, if the host knows it
    fn level_height(&self, id: usize) -> Option<u32>;

    fn is_enabled(&self, id: usize) -> bool;

    fn set_enabled(&mut self, id: usize, enabled: bool);

    fn selected_index(&self) -> Option<usize>;

    fn set_selected_index(&mut self, id: Option<usize>);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostLevel {
    pub level: RawLevel,
    pub enabled: bool,
}

/// Level list kept in memory, used by the replay harness and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryHost {
    levels: Vec<HostLevel>,
    selected: Option<usize>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a level and returns it with its assigned id
    pub fn add_level(
        &mut self,
        width: Option<u32>,
        height: Option<u32>,
        bitrate: Option<u64>,
    ) -> RawLevel {
        let level = RawLevel {
            id: self.levels.len(),
            width,
            height,
            bitrate,
        };
        self.levels.push(HostLevel {
            level,
            enabled: true,
        });
        level
    }

    pub fn clear(&mut self) {
        self.levels.clear();
        self.selected = None;
    }

    pub fn levels(&self) -> &[HostLevel] {
        &self.levels
    }

    pub fn enabled_ids(&self) -> Vec<usize> {
        self.levels
            .iter()
            .filter(|host_level| host_level.enabled)
            .map(|host_level| host_level.level.id)
            .collect()
    }
}

impl LevelHost for InMemoryHost {
    fn level_count(&self) -> usize {
        self.levels.len()
    }

    fn level_height(&self, id: usize) -> Option<u32> {
        self.levels.get(id).and_then(|host_level| host_level.level.height)
    }

    fn is_enabled(&self, id: usize) -> bool {
        self.levels
            .get(id)
            .map(|host_level| host_level.enabled)
            .unwrap_or(false)
    }

    fn set_enabled(&mut self, id: usize, enabled: bool) {
        if let Some(host_level) = self.levels.get_mut(id) {
            host_level.enabled = enabled;
        }
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn set_selected_index(&mut self, id: Option<usize>) {
        self.selected = id;
    }
}
