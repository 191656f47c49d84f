//! Parameter extraction: numbers, colors, rooms and cover movements.
//!
//! Which fields are filled depends on the intent; room extraction always runs.

use std::sync::LazyLock;

use regex::Regex;

use hc_protocol::{ColorName, CoverAction, Intent, Parameters, RoomMap};

static RE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)%?").unwrap());

// Checked in order; a later hit overwrites an earlier one.
static COVER_ACTIONS: LazyLock<Vec<(Regex, CoverAction)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"\b(open|mở)\b").unwrap(), CoverAction::Open),
        (Regex::new(r"\b(close|đóng)\b").unwrap(), CoverAction::Close),
        (Regex::new(r"\b(stop|dừng)\b").unwrap(), CoverAction::Stop),
    ]
});

/// Bilingual color words, scanned in order by substring.
const COLORS: &[(&str, ColorName)] = &[
    ("red", ColorName::Red),
    ("đỏ", ColorName::Red),
    ("green", ColorName::Green),
    ("xanh lá", ColorName::Green),
    ("blue", ColorName::Blue),
    ("xanh dương", ColorName::Blue),
    ("yellow", ColorName::Yellow),
    ("vàng", ColorName::Yellow),
    ("purple", ColorName::Purple),
    ("tím", ColorName::Purple),
    ("pink", ColorName::Pink),
    ("hồng", ColorName::Pink),
    ("orange", ColorName::Orange),
    ("cam", ColorName::Orange),
    ("white", ColorName::White),
    ("trắng", ColorName::White),
    ("cyan", ColorName::Cyan),
    ("magenta", ColorName::Magenta),
];

/// Generic room words used when no known room name matches.
const ROOM_KEYWORDS: &[&str] = &[
    "living room",
    "bedroom",
    "kitchen",
    "bathroom",
    "phòng khách",
    "phòng ngủ",
    "nhà bếp",
    "phòng tắm",
];

/// Extract control parameters from normalized text for the given intent.
pub fn extract(normalized: &str, intent: Intent, rooms: &RoomMap) -> Parameters {
    let mut params = Parameters::default();

    if let Some(value) = first_number(normalized) {
        match intent {
            Intent::SetBrightness => params.brightness = Some(percent(value)),
            Intent::SetTemperature => {
                params.temperature = Some(i64::try_from(value).unwrap_or(i64::MAX))
            }
            Intent::ControlCover => params.position = Some(percent(value)),
            _ => {}
        }
    }

    if intent == Intent::SetColor {
        params.color = Some(extract_color(normalized));
    }

    params.room = extract_room(normalized, rooms);

    if intent == Intent::ControlCover {
        for (re, action) in COVER_ACTIONS.iter() {
            if re.is_match(normalized) {
                params.action = Some(*action);
            }
        }
    }

    params
}

/// First run of digits anywhere in the text. Saturates instead of overflowing.
pub fn first_number(normalized: &str) -> Option<u64> {
    RE_NUMBER
        .captures(normalized)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().parse().unwrap_or(u64::MAX))
}

fn percent(value: u64) -> u8 {
    // min(100) always fits in u8
    value.min(100) as u8
}

/// First color word found, as its canonical name.
pub fn extract_color(normalized: &str) -> Option<ColorName> {
    COLORS
        .iter()
        .find(|(word, _)| normalized.contains(word))
        .map(|(_, color)| *color)
}

/// A known room name (as displayed) or, failing that, a generic room word.
pub fn extract_room(normalized: &str, rooms: &RoomMap) -> Option<String> {
    // Empty names would match any text; skip them and fall through to keywords.
    let known = rooms
        .values()
        .find(|name| !name.is_empty() && normalized.contains(&name.to_lowercase()));
    if let Some(name) = known {
        return Some(name.clone());
    }

    ROOM_KEYWORDS
        .iter()
        .find(|keyword| normalized.contains(*keyword))
        .map(|keyword| keyword.to_string())
}
