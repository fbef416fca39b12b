use crate::utils::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which level is selected when a new source starts playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "EnumValue")]
pub enum DefaultQuality {
    /// Keep the host's initial choice
    #[default]
    Default,
    Lowest,
    Highest,
}

impl DefaultQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Lowest => "lowest",
            Self::Highest => "highest",
        }
    }

    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "lowest" => Some(Self::Lowest),
            "highest" => Some(Self::Highest),
            _ => None,
        }
    }

    pub fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(Self::Default),
            1 => Some(Self::Lowest),
            2 => Some(Self::Highest),
            _ => None,
        }
    }
}

/// How a level's dimensions are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "EnumValue")]
pub enum DisplayMode {
    /// Marketing name annotated with the resolution class
    #[default]
    Both,
    /// Marketing name only (e.g. "720p")
    Resolution,
    /// Resolution class only (e.g. "HD")
    Name,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Resolution => "resolution",
            Self::Name => "name",
        }
    }

    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "both" => Some(Self::Both),
            "resolution" => Some(Self::Resolution),
            "name" => Some(Self::Name),
            _ => None,
        }
    }

    pub fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(Self::Both),
            1 => Some(Self::Resolution),
            2 => Some(Self::Name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "EnumValue")]
pub enum SortOrder {
    #[default]
    Descending,
    Ascending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Descending => "descending",
            Self::Ascending => "ascending",
        }
    }

    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "descending" => Some(Self::Descending),
            "ascending" => Some(Self::Ascending),
            _ => None,
        }
    }

    pub fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(Self::Descending),
            1 => Some(Self::Ascending),
            _ => None,
        }
    }
}

/// Enum option as written in a config: a name or its numeric index
#[derive(Deserialize)]
#[serde(untagged)]
enum EnumValue {
    Index(u64),
    Name(String),
}

impl EnumValue {
    fn resolve<T>(
        self,
        from_string: fn(&str) -> Option<T>,
        from_index: fn(u64) -> Option<T>,
    ) -> std::result::Result<T, String> {
        match self {
            Self::Index(index) => {
                from_index(index).ok_or_else(|| format!("unknown index {}", index))
            }
            Self::Name(name) => from_string(&name)
                .or_else(|| name.trim().parse().ok().and_then(from_index))
                .ok_or_else(|| format!("unknown value '{}'", name)),
        }
    }
}

impl TryFrom<EnumValue> for DefaultQuality {
    type Error = String;

    fn try_from(value: EnumValue) -> std::result::Result<Self, Self::Error> {
        value.resolve(Self::from_string, Self::from_index)
    }
}

impl TryFrom<EnumValue> for DisplayMode {
    type Error = String;

    fn try_from(value: EnumValue) -> std::result::Result<Self, Self::Error> {
        value.resolve(Self::from_string, Self::from_index)
    }
}

impl TryFrom<EnumValue> for SortOrder {
    type Error = String;

    fn try_from(value: EnumValue) -> std::result::Result<Self, Self::Error> {
        value.resolve(Self::from_string, Self::from_index)
    }
}

/// Label overrides keyed by host level id.
///
/// Accepts either a list (`["High", "Low"]`, ids 0 and 1) or a sparse map
/// (`{0: High, 8: Medium}`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawLabels", into = "BTreeMap<usize, String>")]
pub struct Labels(BTreeMap<usize, String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabels {
    List(Vec<String>),
    Map(BTreeMap<LabelKey, String>),
}

// JSON object keys arrive as strings, YAML keys as integers
#[derive(Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(untagged)]
enum LabelKey {
    Id(usize),
    Text(String),
}

impl From<RawLabels> for Labels {
    fn from(raw: RawLabels) -> Self {
        match raw {
            RawLabels::List(list) => Self(list.into_iter().enumerate().collect()),
            RawLabels::Map(map) => Self(
                map.into_iter()
                    .filter_map(|(key, label)| {
                        let id = match key {
                            LabelKey::Id(id) => id,
                            LabelKey::Text(text) => text.trim().parse().ok()?,
                        };
                        Some((id, label))
                    })
                    .collect(),
            ),
        }
    }
}

impl From<Labels> for BTreeMap<usize, String> {
    fn from(labels: Labels) -> Self {
        labels.0
    }
}

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: usize) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }

    pub fn insert<S: Into<String>>(&mut self, id: usize, label: S) {
        self.0.insert(id, label.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(usize, S)> for Labels {
    fn from_iter<I: IntoIterator<Item = (usize, S)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, s)| (id, s.into())).collect())
    }
}

/// Options recognised by the selection engine.
///
/// Keys accept both snake_case and the camelCase spelling used by player
/// plugin configs; unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorOptions {
    #[serde(alias = "autoLabel")]
    pub auto_label: String,
    #[serde(alias = "defaultQuality")]
    pub default_quality: DefaultQuality,
    #[serde(alias = "displayMode")]
    pub display_mode: DisplayMode,
    /// 0 means unbounded
    #[serde(alias = "minHeight")]
    pub min_height: u32,
    /// 0 means unbounded
    #[serde(alias = "maxHeight")]
    pub max_height: u32,
    pub labels: Labels,
    #[serde(alias = "disableAuto")]
    pub disable_auto: bool,
    #[serde(alias = "filterDuplicates")]
    pub filter_duplicates: bool,
    #[serde(alias = "filterDuplicateHeights")]
    pub filter_duplicate_heights: bool,
    #[serde(alias = "showSingleItemMenu")]
    pub show_single_item_menu: bool,
    #[serde(alias = "showBitrates")]
    pub show_bitrates: bool,
    #[serde(alias = "sortEnabled")]
    pub sort_enabled: bool,
    pub sort: SortOrder,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            auto_label: "Auto".to_string(),
            default_quality: DefaultQuality::Default,
            display_mode: DisplayMode::Both,
            min_height: 0,
            max_height: 0,
            labels: Labels::new(),
            disable_auto: false,
            filter_duplicates: true,
            filter_duplicate_heights: true,
            show_single_item_menu: false,
            show_bitrates: false,
            sort_enabled: true,
            sort: SortOrder::Descending,
        }
    }
}

impl SelectorOptions {
    /// Returns true if `height` lies inside the configured bounds
    pub fn height_in_bounds(&self, height: u32) -> bool {
        let below_min = self.min_height != 0 && height < self.min_height;
        let above_max = self.max_height != 0 && height > self.max_height;
        !(below_min || above_max)
    }

    /// Sets a single option by name from a JSON value.
    ///
    /// Enum options accept either their name or their numeric index.
    pub fn set(&mut self, name: &str, value: &serde_json::Value) -> Result<()> {
        let unsupported =
            || Error::option(format!("Unsupported value for option '{}': {}", name, value));

        match name {
            "auto_label" | "autoLabel" => {
                self.auto_label = match value {
                    serde_json::Value::String(label) => label.clone(),
                    // `--set autoLabel=1080` arrives as a number
                    serde_json::Value::Number(_) | serde_json::Value::Bool(_) => {
                        value.to_string()
                    }
                    _ => return Err(unsupported()),
                };
            }
            "default_quality" | "defaultQuality" => {
                self.default_quality =
                    serde_json::from_value(value.clone()).map_err(|_| unsupported())?;
            }
            "display_mode" | "displayMode" => {
                self.display_mode =
                    serde_json::from_value(value.clone()).map_err(|_| unsupported())?;
            }
            "sort" => {
                self.sort = serde_json::from_value(value.clone()).map_err(|_| unsupported())?;
            }
            "min_height" | "minHeight" => {
                self.min_height = parse_height(value).ok_or_else(unsupported)?;
            }
            "max_height" | "maxHeight" => {
                self.max_height = parse_height(value).ok_or_else(unsupported)?;
            }
            "labels" => {
                self.labels = serde_json::from_value(value.clone())?;
            }
            "disable_auto" | "disableAuto" => {
                self.disable_auto = value.as_bool().ok_or_else(unsupported)?;
            }
            "filter_duplicates" | "filterDuplicates" => {
                self.filter_duplicates = value.as_bool().ok_or_else(unsupported)?;
            }
            "filter_duplicate_heights" | "filterDuplicateHeights" => {
                self.filter_duplicate_heights = value.as_bool().ok_or_else(unsupported)?;
            }
            "show_single_item_menu" | "showSingleItemMenu" => {
                self.show_single_item_menu = value.as_bool().ok_or_else(unsupported)?;
            }
            "show_bitrates" | "showBitrates" => {
                self.show_bitrates = value.as_bool().ok_or_else(unsupported)?;
            }
            "sort_enabled" | "sortEnabled" => {
                self.sort_enabled = value.as_bool().ok_or_else(unsupported)?;
            }
            _ => return Err(Error::option(format!("Unknown option '{}'", name))),
        }

        Ok(())
    }

    /// Returns the options that differ from the defaults, keyed by camelCase name
    pub fn non_default_values(&self) -> Result<serde_json::Map<String, serde_json::Value>> {
        let current = serde_json::to_value(self)?;
        let defaults = serde_json::to_value(Self::default())?;

        let mut changed = serde_json::Map::new();
        if let (serde_json::Value::Object(current), serde_json::Value::Object(defaults)) =
            (current, defaults)
        {
            for (key, value) in current {
                if defaults.get(&key) != Some(&value) {
                    changed.insert(camel_case(&key), value);
                }
            }
        }

        Ok(changed)
    }
}

fn parse_height(value: &serde_json::Value) -> Option<u32> {
    value.as_u64().and_then(|h| u32::try_from(h).ok())
}

fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub show_timestamps: bool,
    pub colored_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            show_timestamps: false,
            colored_output: true,
        }
    }
}
