//! Tree-style console formatter for selector events

pub mod levels;
pub mod styling;

use chrono::Local;
use console::style;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

use levels::determine_event_level;
use styling::{format_level, get_tree_prefix, style_message};

/// Renders each event as one line: optional clock, tree marker, level tag
/// (omitted for INFO) and the styled message.
pub struct TreeFormatter {
    show_timestamps: bool,
    use_color: bool,
}

impl TreeFormatter {
    pub fn new(show_timestamps: bool, use_color: bool) -> Self {
        Self {
            show_timestamps,
            use_color,
        }
    }

    fn clock(&self) -> Option<String> {
        if !self.show_timestamps {
            return None;
        }
        let now = Local::now().format("%H:%M:%S").to_string();
        Some(if self.use_color {
            format!("[{}]", style(now).dim())
        } else {
            format!("[{}]", now)
        })
    }

    fn render(&self, message: &str, level: &Level) -> String {
        let event_level = determine_event_level(message);

        let mut parts: Vec<String> = Vec::with_capacity(4);
        parts.extend(self.clock());
        parts.push(get_tree_prefix(event_level).to_string());

        let tag = format_level(level, self.use_color);
        if !tag.is_empty() {
            parts.push(tag);
        }
        parts.push(style_message(message, event_level, self.use_color));

        parts.join(" ")
    }
}

impl<S, N> FormatEvent<S, N> for TreeFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut message = MessageField::default();
        event.record(&mut message);

        writeln!(writer, "{}", self.render(&message.0, event.metadata().level()))
    }
}

#[derive(Default)]
struct MessageField(String);

impl Visit for MessageField {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.0 = value.to_string();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}
