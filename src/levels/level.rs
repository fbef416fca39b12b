use crate::format::{dimension_english_name, dimension_marketing_name, readable_bitrate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Level description as reported by the host's level list.
///
/// Any of the dimensions may be missing on malformed sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLevel {
    pub id: usize,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub bitrate: Option<u64>,
}

impl RawLevel {
    pub fn new(id: usize, width: u32, height: u32, bitrate: u64) -> Self {
        Self {
            id,
            width: Some(width),
            height: Some(height),
            bitrate: Some(bitrate),
        }
    }
}

/// Key identifying content-identical levels.
///
/// Equality compares every component, so distinct triples with the same
/// width + height + bitrate sum never collide. Ordering follows that sum and
/// falls back to the components on ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniqueId {
    pub width: u32,
    pub height: u32,
    pub bitrate: u64,
}

impl UniqueId {
    pub fn new(width: u32, height: u32, bitrate: u64) -> Self {
        Self {
            width,
            height,
            bitrate,
        }
    }

    pub fn sum(&self) -> u128 {
        self.width as u128 + self.height as u128 + self.bitrate as u128
    }
}

impl Ord for UniqueId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sum()
            .cmp(&other.sum())
            .then(self.width.cmp(&other.width))
            .then(self.height.cmp(&other.height))
            .then(self.bitrate.cmp(&other.bitrate))
    }
}

impl PartialOrd for UniqueId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A normalized quality level held by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityLevel {
    pub id: usize,
    pub unique_id: UniqueId,
    pub width: u32,
    pub height: u32,
    pub bitrate: u64,
    pub dimension: String,
    pub dimension_english_name: &'static str,
    pub dimension_marketing_name: String,
    pub bitrate_name: String,
    pub is_current: bool,
}

impl QualityLevel {
    pub fn new(id: usize, width: u32, height: u32, bitrate: u64) -> Self {
        Self {
            id,
            unique_id: UniqueId::new(width, height, bitrate),
            width,
            height,
            bitrate,
            dimension: format!("{}x{}", width, height),
            dimension_english_name: dimension_english_name(height),
            dimension_marketing_name: dimension_marketing_name(height),
            bitrate_name: readable_bitrate(bitrate),
            is_current: false,
        }
    }

    /// Builds a level if width, height and bitrate are all present
    pub fn from_raw(raw: &RawLevel) -> Option<Self> {
        match (raw.width, raw.height, raw.bitrate) {
            (Some(width), Some(height), Some(bitrate)) => {
                Some(Self::new(raw.id, width, height, bitrate))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_level_derived_fields() {
        let level = QualityLevel::new(2, 1920, 1080, 5_000_000);
        assert_eq!(level.id, 2);
        assert_eq!(level.dimension, "1920x1080");
        assert_eq!(level.dimension_english_name, "FHD");
        assert_eq!(level.dimension_marketing_name, "1080p");
        assert_eq!(level.bitrate_name, "4.8 Mbps");
        assert!(!level.is_current);
    }

    #[test]
    fn test_from_raw_requires_all_fields() {
        let complete = RawLevel::new(0, 640, 360, 800_000);
        assert!(QualityLevel::from_raw(&complete).is_some());

        let missing_width = RawLevel {
            width: None,
            ..complete
        };
        let missing_height = RawLevel {
            height: None,
            ..complete
        };
        let missing_bitrate = RawLevel {
            bitrate: None,
            ..complete
        };
        assert!(QualityLevel::from_raw(&missing_width).is_none());
        assert!(QualityLevel::from_raw(&missing_height).is_none());
        assert!(QualityLevel::from_raw(&missing_bitrate).is_none());
    }

    #[test]
    fn test_identical_triples_share_unique_id() {
        let a = QualityLevel::new(0, 1280, 720, 2_500_000);
        let b = QualityLevel::new(1, 1280, 720, 2_500_000);
        assert_eq!(a.unique_id, b.unique_id);
    }

    #[test]
    fn test_equal_sums_do_not_collide() {
        let a = UniqueId::new(640, 480, 1000);
        let b = UniqueId::new(640, 479, 1001);
        assert_eq!(a.sum(), b.sum());
        assert_ne!(a, b);
        assert_ne!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn test_unique_id_orders_by_sum() {
        let low = UniqueId::new(640, 360, 800_000);
        let high = UniqueId::new(1280, 720, 2_500_000);
        assert!(low < high);

        // a wider but lower bitrate level still sorts by the total
        let wide = UniqueId::new(3840, 2160, 100);
        assert!(wide < low);
    }
}
