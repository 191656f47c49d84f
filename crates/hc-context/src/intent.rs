//! Rule-based intent classification.
//!
//! An ordered table of `(Intent, patterns)` rules. The first rule with any
//! matching pattern wins, so declaration order decides ambiguous phrases
//! ("mở" is turn_on before it is control_cover). No match → `Intent::Unknown`.

use std::sync::LazyLock;

use regex::Regex;

use hc_protocol::Intent;

/// One classification rule: any pattern firing selects `intent`.
struct IntentRule {
    intent: Intent,
    patterns: Vec<Regex>,
}

fn rule(intent: Intent, patterns: &[&str]) -> IntentRule {
    IntentRule {
        intent,
        patterns: patterns.iter().map(|p| Regex::new(p).unwrap()).collect(),
    }
}

// Checked in order; earlier rules take priority.
static INTENT_RULES: LazyLock<Vec<IntentRule>> = LazyLock::new(|| {
    vec![
        rule(
            Intent::TurnOn,
            &[
                r"\b(turn on|switch on|bật|mở)\b",
                r"\b(start|khởi động)\b.*\b(light|đèn|switch|công tắc)\b",
            ],
        ),
        rule(
            Intent::TurnOff,
            &[
                r"\b(turn off|switch off|tắt|đóng)\b",
                r"\b(stop|dừng)\b.*\b(light|đèn|switch|công tắc)\b",
            ],
        ),
        rule(
            Intent::SetBrightness,
            &[
                r"\b(brightness|độ sáng|dim|brighten)\b",
                r"\b(set|chỉnh|điều chỉnh)\b.*\b([0-9]+%|[0-9]+ percent|level)\b",
            ],
        ),
        rule(
            Intent::SetColor,
            &[
                r"\b(color|màu|colour)\b",
                r"\b(red|green|blue|yellow|purple|pink|orange|đỏ|xanh|vàng|tím|hồng|cam)\b",
            ],
        ),
        rule(
            Intent::ControlCover,
            &[
                r"\b(open|close|mở|đóng)\b.*\b(blind|curtain|shutter|rèm|cửa sổ)\b",
                r"\b(roller|venetian|garage)\b",
            ],
        ),
        rule(
            Intent::SetTemperature,
            &[
                r"\b(temperature|nhiệt độ|thermostat)\b",
                r"\b(heat|cool|warm|cold|nóng|lạnh)\b",
            ],
        ),
        rule(Intent::Lock, &[r"\b(lock|khóa|secure)\b"]),
        rule(Intent::Unlock, &[r"\b(unlock|mở khóa|unsecure)\b"]),
        rule(
            Intent::GetStatus,
            &[
                r"\b(status|trạng thái|state|check|kiểm tra)\b",
                r"\b(show|hiển thị|display|list)\b.*\b(all|tất cả)\b",
            ],
        ),
        rule(
            Intent::GetSensorData,
            &[
                r"\b(sensor|cảm biến|reading|đọc)\b",
                r"\b(temperature|humidity|motion|nhiệt độ|độ ẩm|chuyển động)\b",
            ],
        ),
    ]
});

/// Classify normalized text into exactly one intent.
pub fn classify(normalized: &str) -> Intent {
    for rule in INTENT_RULES.iter() {
        if let Some(idx) = rule.patterns.iter().position(|re| re.is_match(normalized)) {
            tracing::trace!(intent = %rule.intent, pattern = idx, "intent rule fired");
            return rule.intent;
        }
    }
    Intent::Unknown
}
