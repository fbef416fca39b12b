//! Pure mappings from level dimensions and bitrates to display text

pub mod bitrate;
pub mod dimension;
pub mod display;

pub use bitrate::readable_bitrate;
pub use dimension::{dimension_english_name, dimension_marketing_name, ResolutionClass};
pub use display::{display_string, level_name};
