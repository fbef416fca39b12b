//! Styling and formatting for log messages

use console::style;
use tracing::Level;

use super::levels::EventLevel;

/// Formats a log level with appropriate styling
pub fn format_level(level: &Level, use_color: bool) -> String {
    if !use_color {
        match *level {
            Level::ERROR => "ERROR".to_string(),
            Level::WARN => "WARN ".to_string(),
            Level::INFO => "".to_string(), // INFO is implied
            Level::DEBUG => "DEBUG".to_string(),
            Level::TRACE => "TRACE".to_string(),
        }
    } else {
        match *level {
            Level::ERROR => style("ERROR").red().bold().to_string(),
            Level::WARN => style("WARN ").yellow().to_string(),
            Level::INFO => "".to_string(),
            Level::DEBUG => style("DEBUG").blue().to_string(),
            Level::TRACE => style("TRACE").magenta().to_string(),
        }
    }
}

/// Gets the tree prefix symbol for a given event level
pub fn get_tree_prefix(level: EventLevel) -> &'static str {
    match level {
        EventLevel::Root => "▶",
        EventLevel::Stage => "●",
        EventLevel::Step => " ",
        EventLevel::Detail => " ",
    }
}

/// Applies styling to message content based on event level
pub fn style_message(message: &str, level: EventLevel, use_color: bool) -> String {
    if !use_color {
        return message.to_string();
    }

    match level {
        EventLevel::Root => style(message).bold().cyan().to_string(),
        EventLevel::Stage => style(message).bold().green().to_string(),
        EventLevel::Step => style(message).cyan().to_string(),
        EventLevel::Detail => style(message).dim().to_string(),
    }
}
