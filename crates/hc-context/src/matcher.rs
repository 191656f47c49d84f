//! Multi-signal device matching.
//!
//! Each device accumulates additive weights for every signal it hits:
//!
//! | signal     | weight |
//! |------------|--------|
//! | exact name | 0.8    |
//! | fuzzy name | 0.6    |
//! | explicit id| 0.9    |
//! | type       | 0.4    |
//! | room       | 0.5    |
//!
//! Scores are deliberately left unclamped; ranking relies on the raw sums.

use std::sync::LazyLock;

use regex::Regex;

use hc_protocol::{Capabilities, DeviceMatch, DeviceRecord, MatchReason, RoomMap, SuggestedAction};
use hc_taxonomy::CategoryCatalog;

use crate::config::ProcessorConfig;
use crate::snapshot::Snapshot;

pub const EXACT_NAME_WEIGHT: f64 = 0.8;
pub const FUZZY_NAME_WEIGHT: f64 = 0.6;
pub const ID_WEIGHT: f64 = 0.9;
pub const TYPE_WEIGHT: f64 = 0.4;
pub const ROOM_WEIGHT: f64 = 0.5;

// "number 5", "số 12", "id7", "device 5", "thiết bị 3"
static RE_DEVICE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:number|số|id|device|thiết bị)\s*([0-9]+)\b").unwrap()
});

/// Score every device in the snapshot and return the best candidates,
/// highest first. Ties keep snapshot order.
pub fn find_matches(
    normalized: &str,
    snapshot: &Snapshot,
    catalog: &dyn CategoryCatalog,
    config: &ProcessorConfig,
) -> Vec<DeviceMatch> {
    let requested_id = requested_device_id(normalized);

    let mut matches: Vec<DeviceMatch> = snapshot
        .devices()
        .iter()
        .map(|device| score_device(device, normalized, requested_id, snapshot.rooms(), catalog))
        .filter(|m| m.confidence > config.min_match_confidence)
        .collect();

    // Stable: equal scores stay in snapshot order.
    matches.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    matches.truncate(config.max_matches);
    matches
}

/// First explicit id mention in the text, if any.
///
/// Digit runs that overflow `u64` cannot name a device and are ignored.
pub fn requested_device_id(normalized: &str) -> Option<u64> {
    RE_DEVICE_ID
        .captures(normalized)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Score one device against normalized text.
pub fn score_device(
    device: &DeviceRecord,
    normalized: &str,
    requested_id: Option<u64>,
    rooms: &RoomMap,
    catalog: &dyn CategoryCatalog,
) -> DeviceMatch {
    let mut confidence = 0.0;
    let mut matched_by = Vec::new();

    let name = device.name.to_lowercase();
    if normalized.contains(&name) {
        confidence += EXACT_NAME_WEIGHT;
        matched_by.push(MatchReason::ExactName);
    } else if fuzzy_name_match(&name, normalized) {
        confidence += FUZZY_NAME_WEIGHT;
        matched_by.push(MatchReason::FuzzyName);
    }

    if requested_id == Some(u64::from(device.id)) {
        confidence += ID_WEIGHT;
        matched_by.push(MatchReason::Id);
    }

    if type_match(device, normalized, catalog) {
        confidence += TYPE_WEIGHT;
        matched_by.push(MatchReason::Type);
    }

    let room = device
        .room_id
        .and_then(|id| rooms.get(&id))
        .map(|name| name.to_lowercase());
    if let Some(room) = room
        && !room.is_empty()
        && normalized.contains(&room)
    {
        confidence += ROOM_WEIGHT;
        matched_by.push(MatchReason::Room);
    }

    DeviceMatch {
        device: device.clone(),
        confidence,
        matched_by,
        suggested_actions: suggested_actions(device.capabilities.as_ref()),
    }
}

/// Any space-separated name word longer than two characters appears in the text.
fn fuzzy_name_match(name: &str, normalized: &str) -> bool {
    name.split(' ')
        .any(|word| word.chars().count() > 2 && normalized.contains(word))
}

fn type_match(device: &DeviceRecord, normalized: &str, catalog: &dyn CategoryCatalog) -> bool {
    let display = catalog.display_name(device.category).to_lowercase();
    normalized.contains(&display)
        || catalog
            .keywords(device.category)
            .iter()
            .any(|keyword| normalized.contains(keyword))
}

/// Actions the capability flags allow, in a fixed order.
pub fn suggested_actions(capabilities: Option<&Capabilities>) -> Vec<SuggestedAction> {
    let Some(caps) = capabilities else {
        return Vec::new();
    };

    [
        (caps.can_turn_on, SuggestedAction::TurnOn),
        (caps.can_turn_off, SuggestedAction::TurnOff),
        (caps.can_set_brightness, SuggestedAction::SetBrightness),
        (caps.can_set_color, SuggestedAction::SetColor),
        (caps.can_set_position, SuggestedAction::SetPosition),
        (caps.can_set_temperature, SuggestedAction::SetTemperature),
    ]
    .into_iter()
    .filter_map(|(allowed, action)| allowed.then_some(action))
    .collect()
}
