use crate::config::SelectorOptions;
use crate::format::display_string;
use crate::levels::{LevelCatalog, UniqueId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// What a menu entry selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelChoice {
    /// Hand control back to the host's adaptive switching
    Auto,
    /// Pin a host level id
    Level(usize),
}

impl LevelChoice {
    /// Maps a signed host index; negative values select automatic mode
    pub fn from_index(index: i64) -> Self {
        usize::try_from(index).map_or(Self::Auto, Self::Level)
    }

    pub fn as_index(&self) -> i64 {
        match self {
            Self::Auto => -1,
            Self::Level(id) => *id as i64,
        }
    }
}

impl From<i64> for LevelChoice {
    fn from(index: i64) -> Self {
        Self::from_index(index)
    }
}

impl fmt::Display for LevelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Level(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub target: LevelChoice,
    pub text: String,
    pub selected: bool,
}

/// UI capability the engine publishes to.
///
/// Implementors render a labelled button with a list of clickable items and
/// route clicks back through [`QualitySelector::change_level`].
///
/// [`QualitySelector::change_level`]: crate::selection::QualitySelector::change_level
pub trait QualityMenu {
    fn show(&mut self, label: &str, items: &[MenuItem]);

    fn hide(&mut self);
}

/// Builds menu entries from a catalog that is already in presentation order
pub fn build_menu_items(
    catalog: &LevelCatalog,
    options: &SelectorOptions,
    auto_mode: bool,
) -> Vec<MenuItem> {
    let mut items = Vec::new();

    if !auto_mode && !options.disable_auto {
        items.push(MenuItem {
            target: LevelChoice::Auto,
            text: options.auto_label.clone(),
            selected: false,
        });
    }

    let mut seen_ids: HashSet<UniqueId> = HashSet::new();
    let mut seen_heights: HashSet<u32> = HashSet::new();

    for level in catalog.iter() {
        let new_id = seen_ids.insert(level.unique_id);
        if options.filter_duplicates && !new_id {
            continue;
        }

        let new_height = seen_heights.insert(level.height);
        if options.filter_duplicate_heights && !new_height {
            continue;
        }

        items.push(MenuItem {
            target: LevelChoice::Level(level.id),
            text: display_string(level, options, auto_mode),
            selected: level.is_current,
        });
    }

    if !options.show_single_item_menu && items.len() == 1 {
        items.clear();
    }

    items
}

/// Menu that keeps the last published state in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingMenu {
    pub visible: bool,
    pub label: String,
    pub items: Vec<MenuItem>,
    pub publish_count: usize,
}

impl RecordingMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_items(&self) -> Vec<&MenuItem> {
        self.items.iter().filter(|item| item.selected).collect()
    }
}

impl QualityMenu for RecordingMenu {
    fn show(&mut self, label: &str, items: &[MenuItem]) {
        self.visible = true;
        self.label = label.to_string();
        self.items = items.to_vec();
        self.publish_count += 1;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}
