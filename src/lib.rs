pub mod cli;
pub mod config;
pub mod events;
pub mod format;
pub mod levels;
pub mod selection;
pub mod utils;

pub use config::{Config, DefaultQuality, DisplayMode, Labels, SelectorOptions, SortOrder};
pub use events::PlayerEvent;
pub use levels::{LevelCatalog, QualityLevel, RawLevel, UniqueId};
pub use selection::{
    InMemoryHost, LevelChoice, LevelHost, MenuItem, QualityMenu, QualitySelector,
};
pub use utils::{Error, Result};
