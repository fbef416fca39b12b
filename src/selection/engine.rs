use super::host::LevelHost;
use super::menu::{build_menu_items, LevelChoice, MenuItem, QualityMenu};
use crate::config::{DefaultQuality, SelectorOptions};
use crate::events::PlayerEvent;
use crate::format::{display_string, level_name};
use crate::levels::{IngestOutcome, LevelCatalog, RawLevel};
use crate::utils::logging::{log_level_pinned, log_media_change, log_selection_published};
use tracing::{debug, info};

/// State published by the last successful update pass
#[derive(Debug, Clone, PartialEq, Eq)]
struct Published {
    label: String,
    items: Vec<MenuItem>,
}

/// Quality level selection engine for one player instance.
///
/// Owns the level catalog, reads and writes the host's level list through
/// [`LevelHost`], and publishes the button label and menu through
/// [`QualityMenu`]. All work happens synchronously inside the event handlers.
#[derive(Debug)]
pub struct QualitySelector<H, M> {
    options: SelectorOptions,
    host: H,
    menu: M,
    catalog: LevelCatalog,
    selected: Option<usize>,
    auto_mode: bool,
    default_pending: bool,
    published: Option<Published>,
}

impl<H: LevelHost, M: QualityMenu> QualitySelector<H, M> {
    pub fn new(host: H, menu: M, options: SelectorOptions) -> Self {
        Self {
            options,
            host,
            menu,
            catalog: LevelCatalog::new(),
            selected: None,
            auto_mode: true,
            default_pending: false,
            published: None,
        }
    }

    pub fn handle_event(&mut self, event: &PlayerEvent) {
        match event {
            PlayerEvent::MediaChangeStart => self.handle_media_change(),
            PlayerEvent::LevelDiscovered(raw) => self.handle_level_discovered(raw),
            PlayerEvent::SelectionChanged { selected_index } => {
                self.handle_selection_changed(*selected_index)
            }
            PlayerEvent::MediaReady => self.handle_media_ready(),
        }
    }

    fn handle_media_change(&mut self) {
        log_media_change(self.catalog.len());
        self.catalog.reset();
        self.selected = None;
        self.update();
        self.default_pending = self.options.default_quality != DefaultQuality::Default;
    }

    fn handle_level_discovered(&mut self, raw: &RawLevel) {
        if self.catalog.ingest(raw, &self.options) == IngestOutcome::Excluded {
            self.host.set_enabled(raw.id, false);
        }
    }

    fn handle_selection_changed(&mut self, selected_index: Option<usize>) {
        debug!("Handling quality change: {:?}", selected_index);

        if self.default_pending {
            let preferred = match self.options.default_quality {
                DefaultQuality::Lowest => self.catalog.lowest(),
                DefaultQuality::Highest => self.catalog.highest(),
                DefaultQuality::Default => None,
            }
            .map(|level| level.id);

            if let Some(id) = preferred {
                info!(
                    "Default quality override: pinning {} level {}",
                    self.options.default_quality.as_str(),
                    id
                );
                self.default_pending = false;
                self.selected = Some(id);
                self.host.set_selected_index(Some(id));
                self.change_level(LevelChoice::Level(id));
                self.update();
                return;
            }
        }

        self.selected = selected_index;
        self.update();
    }

    fn handle_media_ready(&mut self) {
        info!("Media ready with {} quality level(s)", self.catalog.len());

        if self.selected.is_none() {
            if let Some(id) = self.host.selected_index() {
                self.selected = Some(id);
                self.update();
            }
        }
    }

    /// Recomputes current flags and republishes the label and menu.
    ///
    /// Hides the control when no catalog level is selected.
    pub fn update(&mut self) {
        let enabled = self
            .catalog
            .iter()
            .filter(|level| self.host.is_enabled(level.id))
            .count();
        self.auto_mode = enabled == self.catalog.len();
        self.catalog.clear_current();

        let Some(selected) = self.selected.filter(|id| self.catalog.contains(*id)) else {
            self.hide();
            return;
        };

        if self.auto_mode && self.options.disable_auto {
            self.auto_mode = false;
            self.change_level(LevelChoice::Level(selected));
        }

        self.catalog.mark_current(selected, &self.options);

        let label = self
            .catalog
            .get(selected)
            .map(|level| display_string(level, &self.options, self.auto_mode))
            .unwrap_or_default();

        self.catalog.sort(&self.options);
        let items = build_menu_items(&self.catalog, &self.options, self.auto_mode);

        log_selection_published(&label, items.len(), self.auto_mode);
        self.menu.show(&label, &items);
        self.published = Some(Published { label, items });
    }

    /// Pins a level, or hands control back to automatic switching.
    pub fn change_level(&mut self, choice: LevelChoice) {
        let target = match choice {
            LevelChoice::Auto => {
                info!("Automatic selection requested");
                for id in 0..self.host.level_count() {
                    let in_bounds = self
                        .host
                        .level_height(id)
                        .map_or(true, |height| self.options.height_in_bounds(height));
                    self.host.set_enabled(id, in_bounds);
                }
                self.update();
                return;
            }
            LevelChoice::Level(id) => id,
        };

        let Some(selected) = self.catalog.get(target) else {
            debug!("Ignoring change to unknown level {}", target);
            return;
        };
        let (unique_id, height) = (selected.unique_id, selected.height);

        let mut enabled_count = 0;
        for level in self.catalog.iter() {
            let enabled = level.id == target
                || (self.options.filter_duplicates && level.unique_id == unique_id)
                || (self.options.filter_duplicate_heights && level.height == height);
            if enabled {
                enabled_count += 1;
            }
            self.host.set_enabled(level.id, enabled);
        }
        log_level_pinned(target, enabled_count);

        if self.auto_mode {
            self.update();
        }
    }

    /// Display strings for every catalog level, in catalog order
    pub fn level_names(&self) -> Vec<String> {
        self.catalog
            .iter()
            .map(|level| display_string(level, &self.options, self.auto_mode))
            .collect()
    }

    /// Label override for `id`, or `fallback` unchanged
    pub fn level_name<'a>(&'a self, id: usize, fallback: &'a str) -> &'a str {
        level_name(&self.options.labels, id, fallback)
    }

    /// Replaces the options and republishes
    pub fn reconfigure(&mut self, options: SelectorOptions) {
        self.options = options;
        self.update();
    }

    /// Sets one option by name and republishes.
    ///
    /// Unknown names and unsupported values are logged and ignored; returns
    /// whether the option was applied.
    pub fn set_option(&mut self, name: &str, value: &serde_json::Value) -> bool {
        match self.options.set(name, value) {
            Ok(()) => {
                self.update();
                true
            }
            Err(e) => {
                debug!("Ignoring option {}: {}", name, e);
                false
            }
        }
    }

    fn hide(&mut self) {
        self.published = None;
        self.menu.hide();
    }

    pub fn current_label(&self) -> Option<&str> {
        self.published.as_ref().map(|p| p.label.as_str())
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        self.published
            .as_ref()
            .map(|p| p.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_visible(&self) -> bool {
        self.published.is_some()
    }

    pub fn is_auto_mode(&self) -> bool {
        self.auto_mode
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    pub fn options(&self) -> &SelectorOptions {
        &self.options
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn menu(&self) -> &M {
        &self.menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DisplayMode, SortOrder};
    use crate::selection::host::InMemoryHost;
    use crate::selection::menu::RecordingMenu;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    type Selector = QualitySelector<InMemoryHost, RecordingMenu>;

    /// Starts a source and reports every level through the host
    fn load_source(selector: &mut Selector, levels: &[(u32, u32, u64)]) {
        selector.handle_event(&PlayerEvent::MediaChangeStart);
        for &(width, height, bitrate) in levels {
            let raw = selector
                .host_mut()
                .add_level(Some(width), Some(height), Some(bitrate));
            selector.handle_event(&PlayerEvent::LevelDiscovered(raw));
        }
    }

    fn select(selector: &mut Selector, id: usize) {
        selector.handle_event(&PlayerEvent::SelectionChanged {
            selected_index: Some(id),
        });
    }

    fn selector_with(options: SelectorOptions) -> Selector {
        QualitySelector::new(InMemoryHost::new(), RecordingMenu::new(), options)
    }

    const LADDER: [(u32, u32, u64); 3] = [
        (640, 360, 800_000),
        (1280, 720, 2_500_000),
        (1920, 1080, 5_000_000),
    ];

    fn current_ids(selector: &Selector) -> Vec<usize> {
        let mut ids: Vec<usize> = selector
            .catalog()
            .iter()
            .filter(|level| level.is_current)
            .map(|level| level.id)
            .collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_end_to_end_default_options() {
        let mut selector = selector_with(SelectorOptions::default());
        load_source(&mut selector, &LADDER);
        select(&mut selector, 1);

        assert!(selector.is_auto_mode());
        assert_eq!(
            selector.level_names(),
            vec![
                "1080p<sup>FHD</sup>".to_string(),
                "Auto(720p<sup>HD</sup>)".to_string(),
                "360p<sup>LQ</sup>".to_string(),
            ]
        );
        assert_eq!(current_ids(&selector), vec![1]);
        assert_eq!(selector.current_label(), Some("Auto(720p<sup>HD</sup>)"));

        let menu = selector.menu();
        assert!(menu.visible);
        assert_eq!(
            menu.items
                .iter()
                .map(|item| item.target)
                .collect::<Vec<_>>(),
            vec![
                LevelChoice::Level(2),
                LevelChoice::Level(1),
                LevelChoice::Level(0)
            ]
        );
        assert_eq!(menu.selected_items().len(), 1);
    }

    #[test]
    fn test_pinning_a_level_leaves_auto_mode() {
        let mut selector = selector_with(SelectorOptions::default());
        load_source(&mut selector, &LADDER);
        select(&mut selector, 1);

        selector.change_level(LevelChoice::Level(2));
        assert_eq!(selector.host().enabled_ids(), vec![2]);
        assert!(!selector.is_auto_mode());
        // host has not switched yet
        assert_eq!(selector.current_label(), Some("720p<sup>HD</sup>"));
        assert_eq!(selector.menu_items()[0].target, LevelChoice::Auto);
        assert_eq!(selector.menu_items().len(), 4);

        select(&mut selector, 2);
        assert_eq!(selector.current_label(), Some("1080p<sup>FHD</sup>"));
        assert_eq!(current_ids(&selector), vec![2]);
    }

    #[test]
    fn test_returning_to_auto() {
        let mut selector = selector_with(SelectorOptions::default());
        load_source(&mut selector, &LADDER);
        select(&mut selector, 1);
        selector.change_level(LevelChoice::Level(0));
        assert!(!selector.is_auto_mode());

        selector.change_level(LevelChoice::from_index(-1));
        assert_eq!(selector.host().enabled_ids(), vec![0, 1, 2]);
        assert!(selector.is_auto_mode());
        assert!(selector
            .menu_items()
            .iter()
            .all(|item| item.target != LevelChoice::Auto));
    }

    #[test]
    fn test_auto_mode_flips_when_one_level_is_disabled() {
        let mut selector = selector_with(SelectorOptions::default());
        load_source(&mut selector, &LADDER);
        select(&mut selector, 1);
        assert!(selector.is_auto_mode());

        selector.host_mut().set_enabled(0, false);
        selector.update();
        assert!(!selector.is_auto_mode());

        selector.host_mut().set_enabled(0, true);
        selector.update();
        assert!(selector.is_auto_mode());
    }

    #[test]
    fn test_duplicate_triples_are_both_current() {
        let options = SelectorOptions {
            filter_duplicate_heights: false,
            ..SelectorOptions::default()
        };
        let mut selector = selector_with(options);
        load_source(
            &mut selector,
            &[
                (1280, 720, 2_500_000),
                (1280, 720, 2_500_000),
                (640, 360, 800_000),
            ],
        );
        select(&mut selector, 1);

        assert_eq!(current_ids(&selector), vec![0, 1]);
        assert_eq!(selector.menu_items().len(), 2);

        selector.change_level(LevelChoice::Level(1));
        assert_eq!(selector.host().enabled_ids(), vec![0, 1]);
    }

    #[test]
    fn test_equal_heights_are_both_current() {
        let options = SelectorOptions {
            filter_duplicates: false,
            ..SelectorOptions::default()
        };
        let mut selector = selector_with(options);
        load_source(
            &mut selector,
            &[
                (1280, 720, 2_500_000),
                (1280, 720, 1_800_000),
                (640, 360, 800_000),
            ],
        );
        select(&mut selector, 0);

        assert_eq!(current_ids(&selector), vec![0, 1]);

        selector.change_level(LevelChoice::Level(1));
        assert_eq!(selector.host().enabled_ids(), vec![0, 1]);
    }

    #[test]
    fn test_min_height_keeps_level_disabled_in_auto() {
        let options = SelectorOptions {
            min_height: 480,
            ..SelectorOptions::default()
        };
        let mut selector = selector_with(options);
        load_source(&mut selector, &LADDER);

        assert!(!selector.host().is_enabled(0));
        assert_eq!(selector.catalog().len(), 2);
        assert_eq!(selector.catalog().excluded().len(), 1);

        select(&mut selector, 1);
        assert!(selector.is_auto_mode());

        selector.change_level(LevelChoice::Level(2));
        selector.change_level(LevelChoice::Auto);
        assert!(!selector.host().is_enabled(0));
        assert_eq!(selector.host().enabled_ids(), vec![1, 2]);
        assert!(selector.is_auto_mode());
        assert!(selector
            .level_names()
            .iter()
            .all(|name| !name.contains("360p")));
    }

    #[test]
    fn test_disable_auto_pins_reported_level() {
        let options = SelectorOptions {
            disable_auto: true,
            ..SelectorOptions::default()
        };
        let mut selector = selector_with(options);
        load_source(&mut selector, &LADDER);
        select(&mut selector, 1);

        assert!(!selector.is_auto_mode());
        assert_eq!(selector.host().enabled_ids(), vec![1]);
        assert_eq!(selector.current_label(), Some("720p<sup>HD</sup>"));
        assert!(selector
            .menu_items()
            .iter()
            .all(|item| item.target != LevelChoice::Auto));
        assert_eq!(selector.menu_items().len(), 3);
    }

    #[test]
    fn test_unknown_selection_hides_control() {
        let mut selector = selector_with(SelectorOptions::default());
        load_source(&mut selector, &LADDER);
        select(&mut selector, 1);
        assert!(selector.menu().visible);

        select(&mut selector, 9);
        assert!(!selector.menu().visible);
        assert!(!selector.is_visible());
        assert_eq!(selector.current_label(), None);
        assert!(selector.menu_items().is_empty());
        assert!(current_ids(&selector).is_empty());
    }

    #[test]
    fn test_empty_catalog_stays_hidden() {
        let mut selector = selector_with(SelectorOptions::default());
        selector.handle_event(&PlayerEvent::MediaChangeStart);
        selector.update();
        select(&mut selector, 0);

        assert!(!selector.menu().visible);
        assert!(selector.level_names().is_empty());
    }

    #[test]
    fn test_malformed_levels_are_dropped() {
        let mut selector = selector_with(SelectorOptions::default());
        selector.handle_event(&PlayerEvent::MediaChangeStart);
        let raw = selector.host_mut().add_level(None, Some(720), Some(2_500_000));
        selector.handle_event(&PlayerEvent::LevelDiscovered(raw));

        assert!(selector.catalog().is_empty());
        assert!(selector.host().is_enabled(0));
    }

    #[test]
    fn test_media_change_resets_catalog_and_selection() {
        let mut selector = selector_with(SelectorOptions::default());
        load_source(&mut selector, &LADDER);
        select(&mut selector, 1);
        assert!(selector.menu().visible);

        selector.handle_event(&PlayerEvent::MediaChangeStart);
        assert!(selector.catalog().is_empty());
        assert_eq!(selector.selected_index(), None);
        assert!(!selector.menu().visible);
    }

    #[test]
    fn test_default_quality_highest_fires_once() {
        let options = SelectorOptions {
            default_quality: DefaultQuality::Highest,
            ..SelectorOptions::default()
        };
        let mut selector = selector_with(options);
        load_source(&mut selector, &LADDER);
        select(&mut selector, 0);

        assert_eq!(selector.selected_index(), Some(2));
        assert_eq!(selector.host().selected_index(), Some(2));
        assert_eq!(selector.host().enabled_ids(), vec![2]);
        assert_eq!(selector.current_label(), Some("1080p<sup>FHD</sup>"));

        select(&mut selector, 0);
        assert_eq!(selector.selected_index(), Some(0));
        assert_eq!(selector.current_label(), Some("360p<sup>LQ</sup>"));
    }

    #[test]
    fn test_default_quality_lowest_rearms_per_source() {
        let options = SelectorOptions {
            default_quality: DefaultQuality::Lowest,
            ..SelectorOptions::default()
        };
        let mut selector = selector_with(options);
        load_source(&mut selector, &LADDER);
        select(&mut selector, 2);
        assert_eq!(selector.selected_index(), Some(0));

        selector.host_mut().clear();
        load_source(&mut selector, &[(1920, 1080, 5_000_000), (1280, 720, 2_500_000)]);
        select(&mut selector, 0);
        assert_eq!(selector.selected_index(), Some(1));
    }

    #[test]
    fn test_default_quality_waits_for_levels() {
        let options = SelectorOptions {
            default_quality: DefaultQuality::Highest,
            ..SelectorOptions::default()
        };
        let mut selector = selector_with(options);
        selector.handle_event(&PlayerEvent::MediaChangeStart);
        select(&mut selector, 0);
        assert!(!selector.menu().visible);

        for &(width, height, bitrate) in &LADDER {
            let raw = selector
                .host_mut()
                .add_level(Some(width), Some(height), Some(bitrate));
            selector.handle_event(&PlayerEvent::LevelDiscovered(raw));
        }
        select(&mut selector, 0);
        assert_eq!(selector.selected_index(), Some(2));
    }

    #[test]
    fn test_media_ready_adopts_host_selection() {
        let mut selector = selector_with(SelectorOptions::default());
        load_source(&mut selector, &LADDER);
        selector.host_mut().set_selected_index(Some(2));

        selector.handle_event(&PlayerEvent::MediaReady);
        assert_eq!(selector.selected_index(), Some(2));
        assert!(selector.menu().visible);
    }

    #[test]
    fn test_sort_options_change_presentation() {
        let mut selector = selector_with(SelectorOptions {
            display_mode: DisplayMode::Resolution,
            ..SelectorOptions::default()
        });
        load_source(&mut selector, &LADDER);
        select(&mut selector, 0);

        assert!(selector.set_option("sort", &json!("ascending")));
        assert_eq!(selector.options().sort, SortOrder::Ascending);
        assert_eq!(
            selector.level_names(),
            vec!["Auto(360p)", "720p", "1080p"]
        );

        assert!(selector.set_option("sortEnabled", &json!(false)));
        let ids: Vec<usize> = selector.catalog().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_set_option_ignores_bad_values() {
        let mut selector = selector_with(SelectorOptions::default());
        load_source(&mut selector, &LADDER);
        select(&mut selector, 0);
        let publishes = selector.menu().publish_count;

        assert!(!selector.set_option("showBitrates", &json!("sometimes")));
        assert!(!selector.set_option("index", &json!(-2)));
        assert_eq!(selector.options(), &SelectorOptions::default());
        assert_eq!(selector.menu().publish_count, publishes);
    }

    #[test]
    fn test_labels_override_display() {
        let mut selector = selector_with(SelectorOptions::default());
        load_source(&mut selector, &LADDER);
        select(&mut selector, 2);

        let options = SelectorOptions {
            labels: [(2, "Source"), (0, "Data saver")].into_iter().collect(),
            show_bitrates: true,
            ..SelectorOptions::default()
        };
        selector.reconfigure(options);

        assert_eq!(selector.current_label(), Some("Source"));
        assert_eq!(selector.level_name(0, "360p"), "Data saver");
        assert_eq!(selector.level_name(1, "720p"), "720p");
        assert_eq!(
            selector.level_names(),
            vec![
                "Source".to_string(),
                "720p<sup>HD</sup> (2.4 Mbps)".to_string(),
                "Data saver".to_string(),
            ]
        );
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut selector = selector_with(SelectorOptions::default());
        load_source(&mut selector, &LADDER);
        select(&mut selector, 1);

        let label = selector.current_label().map(str::to_string);
        let items = selector.menu_items().to_vec();
        selector.update();
        selector.update();

        assert_eq!(selector.current_label().map(str::to_string), label);
        assert_eq!(selector.menu_items(), items.as_slice());
    }

    #[test]
    fn test_change_to_unknown_level_is_ignored() {
        let mut selector = selector_with(SelectorOptions::default());
        load_source(&mut selector, &LADDER);
        select(&mut selector, 1);

        selector.change_level(LevelChoice::Level(42));
        assert_eq!(selector.host().enabled_ids(), vec![0, 1, 2]);
        assert!(selector.is_auto_mode());
    }
}
