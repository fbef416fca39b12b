/// Event level determination for hierarchical log output

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLevel {
    Root,   // Source lifecycle
    Stage,  // Selection decisions
    Step,   // Catalog changes
    Detail, // Everything else
}

/// Determines the level of a log message based on its content
pub fn determine_event_level(message: &str) -> EventLevel {
    if message.contains("Media change started") || message.contains("Media ready") {
        return EventLevel::Root;
    }

    if message.contains("Pinned quality level")
        || message.contains("Selected quality")
        || message.contains("Default quality override")
        || message.contains("Automatic selection")
    {
        return EventLevel::Stage;
    }

    if message.contains("Discovered level")
        || message.contains("Dropping level")
        || message.contains("excluded by height bounds")
    {
        return EventLevel::Step;
    }

    EventLevel::Detail
}
