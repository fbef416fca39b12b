pub mod catalog;
pub mod level;

pub use catalog::{IngestOutcome, LevelCatalog};
pub use level::{QualityLevel, RawLevel, UniqueId};
