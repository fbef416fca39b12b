use crate::config::{DisplayMode, Labels, SelectorOptions};
use crate::levels::QualityLevel;

/// Returns the label override for `id`, or `fallback` unchanged
pub fn level_name<'a>(labels: &'a Labels, id: usize, fallback: &'a str) -> &'a str {
    labels.get(id).unwrap_or(fallback)
}

/// Builds the text shown for a level in the button and the menu.
///
/// `auto_mode` is the engine's current auto-selection state; the current level
/// is wrapped in the auto label while it holds.
pub fn display_string(level: &QualityLevel, options: &SelectorOptions, auto_mode: bool) -> String {
    let mut display = match options.display_mode {
        DisplayMode::Resolution => level.dimension_marketing_name.clone(),
        DisplayMode::Name => level.dimension_english_name.to_string(),
        DisplayMode::Both => format!(
            "{}<sup>{}</sup>",
            level.dimension_marketing_name, level.dimension_english_name
        ),
    };

    if auto_mode && level.is_current {
        display = format!("{}({})", options.auto_label, display);
    }

    if options.show_bitrates {
        display.push_str(&format!(" ({})", level.bitrate_name));
    }

    level_name(&options.labels, level.id, &display).to_string()
}
