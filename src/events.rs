use crate::levels::RawLevel;
use serde::{Deserialize, Serialize};

/// Events the host player dispatches to the selection engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PlayerEvent {
    /// The host's adaptive-streaming layer reported a new level
    LevelDiscovered(RawLevel),
    /// The host switched to a different level; `None` when it reports none
    SelectionChanged {
        #[serde(default)]
        selected_index: Option<usize>,
    },
    /// A new source started loading
    MediaChangeStart,
    /// Every level of the current source has been reported
    MediaReady,
}

impl PlayerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LevelDiscovered(_) => "level_discovered",
            Self::SelectionChanged { .. } => "selection_changed",
            Self::MediaChangeStart => "media_change_start",
            Self::MediaReady => "media_ready",
        }
    }
}
