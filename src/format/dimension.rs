use serde::{Deserialize, Serialize};
use std::fmt;

/// Short categorical label derived from a level's pixel height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionClass {
    VeryLow,
    Low,
    Standard,
    High,
    FullHigh,
    QuadHigh,
    UltraHigh,
    NotAvailable,
}

impl ResolutionClass {
    /// Looks up the class for `height`; unlisted heights map to `NotAvailable`
    pub fn from_height(height: u32) -> Self {
        match height {
            108 | 144 | 180 | 234 | 240 | 252 => Self::VeryLow,
            360 => Self::Low,
            480 | 486 | 540 => Self::Standard,
            720 => Self::High,
            1080 => Self::FullHigh,
            1440 => Self::QuadHigh,
            2160 | 2304 => Self::UltraHigh,
            _ => Self::NotAvailable,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::VeryLow => "VLQ",
            Self::Low => "LQ",
            Self::Standard => "SD",
            Self::High => "HD",
            Self::FullHigh => "FHD",
            Self::QuadHigh => "QHD",
            Self::UltraHigh => "UHD",
            Self::NotAvailable => "N/A",
        }
    }
}

impl fmt::Display for ResolutionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// English resolution class name for a height (e.g. "FHD")
pub fn dimension_english_name(height: u32) -> &'static str {
    ResolutionClass::from_height(height).code()
}

/// Marketing name for a height (e.g. "1080p", "4k")
pub fn dimension_marketing_name(height: u32) -> String {
    match height {
        2160 => "4k".to_string(),
        2304 => "True 4k".to_string(),
        _ => format!("{}p", height),
    }
}
