//! Hints for commands the interpreter is unsure about.

use hc_taxonomy::CategoryCatalog;

use crate::config::ProcessorConfig;
use crate::matcher::find_matches;
use crate::snapshot::Snapshot;

/// Suggestions are generated when overall confidence is below this.
pub const SUGGESTION_THRESHOLD: f64 = 0.6;

pub const HINT_DEVICE_ID: &str = r#"Try using device ID like "turn on device 5""#;
pub const HINT_ROOM: &str = r#"Specify room name like "living room lights""#;
pub const HINT_DEVICE_TYPE: &str = r#"Use device type like "all sensors" or "bedroom lights""#;
pub const HINT_ACTIONS: &str =
    "Available actions: turn on/off, set brightness, change color, open/close";

/// Build user-facing hints for a low-confidence command.
///
/// Device matches are recomputed from the text; when none exist, the three
/// targeting hints come first. The action list is always last.
pub fn suggest(
    normalized: &str,
    snapshot: &Snapshot,
    catalog: &dyn CategoryCatalog,
    config: &ProcessorConfig,
) -> Vec<String> {
    let mut hints = Vec::with_capacity(4);

    if find_matches(normalized, snapshot, catalog, config).is_empty() {
        hints.push(HINT_DEVICE_ID.to_string());
        hints.push(HINT_ROOM.to_string());
        hints.push(HINT_DEVICE_TYPE.to_string());
    }

    hints.push(HINT_ACTIONS.to_string());
    hints
}
