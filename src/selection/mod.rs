//! Quality selection engine and the two boundaries it talks through

pub mod engine;
pub mod host;
pub mod menu;

pub use engine::QualitySelector;
pub use host::{HostLevel, InMemoryHost, LevelHost};
pub use menu::{build_menu_items, LevelChoice, MenuItem, QualityMenu, RecordingMenu};
