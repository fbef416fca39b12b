use crate::config::SelectorOptions;
use crate::events::PlayerEvent;
use crate::selection::{
    InMemoryHost, LevelChoice, LevelHost, MenuItem, QualityMenu, QualitySelector,
};
use crate::utils::{Error, Result};
use console::style;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// One entry of a recorded session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionStep {
    /// A new source starts; the host forgets its levels
    MediaChangeStart,
    /// The host reports a level; ids are assigned in report order
    LevelDiscovered {
        #[serde(default)]
        width: Option<u32>,
        #[serde(default)]
        height: Option<u32>,
        #[serde(default)]
        bitrate: Option<u64>,
    },
    /// The host switches levels
    SelectionChanged {
        #[serde(default)]
        selected_index: Option<usize>,
    },
    MediaReady,
    /// The viewer clicks a menu entry; negative targets select automatic mode
    Click { target: i64 },
    /// The viewer changes an option at runtime
    SetOption {
        name: String,
        value: serde_json::Value,
    },
}

pub fn load_session<P: AsRef<Path>>(path: P) -> Result<Vec<SessionStep>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let steps: Vec<SessionStep> = serde_yaml::from_str(&content)?;

    if steps.is_empty() {
        return Err(Error::session(format!(
            "Session file contains no steps: {}",
            path.display()
        )));
    }

    Ok(steps)
}

/// Applies one step to the selector and its in-memory host
pub fn apply_step<M: QualityMenu>(
    selector: &mut QualitySelector<InMemoryHost, M>,
    step: &SessionStep,
) {
    match step {
        SessionStep::MediaChangeStart => {
            selector.host_mut().clear();
            selector.handle_event(&PlayerEvent::MediaChangeStart);
        }
        SessionStep::LevelDiscovered {
            width,
            height,
            bitrate,
        } => {
            let raw = selector.host_mut().add_level(*width, *height, *bitrate);
            selector.handle_event(&PlayerEvent::LevelDiscovered(raw));
        }
        SessionStep::SelectionChanged { selected_index } => {
            selector.host_mut().set_selected_index(*selected_index);
            selector.handle_event(&PlayerEvent::SelectionChanged {
                selected_index: *selected_index,
            });
        }
        SessionStep::MediaReady => selector.handle_event(&PlayerEvent::MediaReady),
        SessionStep::Click { target } => {
            debug!("Viewer clicked {}", LevelChoice::from_index(*target));
            selector.change_level(LevelChoice::from_index(*target));
        }
        SessionStep::SetOption { name, value } => {
            if !selector.set_option(name, value) {
                warn!("Option {} was not applied", name);
            }
        }
    }
}

/// Runs every step against a fresh host and returns the final selector
pub fn replay<M: QualityMenu>(
    steps: &[SessionStep],
    options: SelectorOptions,
    menu: M,
) -> QualitySelector<InMemoryHost, M> {
    let mut selector = QualitySelector::new(InMemoryHost::new(), menu, options);
    for step in steps {
        apply_step(&mut selector, step);
    }
    selector
}

/// Prints every publish to stdout
#[derive(Debug, Clone, Default)]
pub struct ConsoleMenu {
    colored: bool,
}

impl ConsoleMenu {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn paint(&self, text: &str, selected: bool) -> String {
        if !self.colored {
            return text.to_string();
        }
        if selected {
            style(text).green().bold().to_string()
        } else {
            style(text).dim().to_string()
        }
    }
}

impl QualityMenu for ConsoleMenu {
    fn show(&mut self, label: &str, items: &[MenuItem]) {
        println!("[{}]", self.paint(label, true));
        for item in items {
            let marker = if item.selected { "*" } else { " " };
            println!(
                "  {} {:>4}  {}",
                marker,
                item.target.to_string(),
                self.paint(&item.text, item.selected)
            );
        }
    }

    fn hide(&mut self) {
        println!("{}", self.paint("(quality control hidden)", false));
    }
}
