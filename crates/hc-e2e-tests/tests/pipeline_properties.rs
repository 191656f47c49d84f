//! E2E tests for the interpretation pipeline over the sample home.

mod helpers;

use hc_protocol::{CoverAction, Intent, MatchReason, SuggestedAction};

use helpers::TestHarness;

const COMMANDS: &[&str] = &[
    "turn on device 5",
    "Set the living room light brightness to 40%",
    "bật đèn phòng ngủ",
    "đặt độ sáng 40%",
    "open the living room shutter",
    "close the garage door",
    "lock the front door",
    "set the hall thermostat to 22",
    "read the bedroom motion sensor",
    "make the kitchen strip blue",
    "turn on the lights",
    "xyz123",
    "",
    "!!!",
    "set brightness to 99999999999999999999999999",
];

/// Confidence is always a probability, candidates are ranked and capped,
/// and suggestions appear exactly when confidence is low.
#[test]
fn e2e_structural_properties_hold_for_every_command() {
    let h = TestHarness::with_sample_home();

    for text in COMMANDS {
        let ctx = h.interpret(text);
        assert!((0.0..=1.0).contains(&ctx.confidence), "{text}: {}", ctx.confidence);
        assert!(ctx.device_matches.len() <= 5, "{text}");
        assert!(
            ctx.device_matches
                .windows(2)
                .all(|w| w[0].confidence >= w[1].confidence),
            "{text}: matches not ranked"
        );
        assert_eq!(ctx.suggestions.is_some(), ctx.confidence < 0.6, "{text}");
        assert!(ctx.device_matches.iter().all(|m| m.confidence > 0.1));
    }
}

/// Same text, same snapshot, same answer.
#[test]
fn e2e_interpretation_is_idempotent() {
    let h = TestHarness::with_sample_home();
    for text in COMMANDS {
        assert_eq!(h.interpret(text), h.interpret(text), "{text}");
    }
}

#[test]
fn e2e_turn_on_by_id() {
    let h = TestHarness::with_sample_home();
    let ctx = h.interpret("turn on device 5");

    assert_eq!(ctx.intent, Intent::TurnOn);
    let top = ctx.top_match().unwrap();
    assert_eq!(top.device.id, 5);
    assert_eq!(top.matched_by, vec![MatchReason::Id]);
    assert!(top.confidence >= 0.9);
    assert_eq!(ctx.device_matches.len(), 1);
    assert!((ctx.confidence - 0.8).abs() < 1e-9);
    assert!(ctx.suggestions.is_none());
}

#[test]
fn e2e_brightness_with_room_ranks_all_signals() {
    let h = TestHarness::with_sample_home();
    let ctx = h.interpret("Set the living room light brightness to 40%");

    assert_eq!(ctx.intent, Intent::SetBrightness);
    assert_eq!(ctx.parameters.brightness, Some(40));
    assert_eq!(ctx.parameters.room.as_deref(), Some("Living Room"));
    assert_eq!(h.match_ids("Set the living room light brightness to 40%"), vec![5, 20, 12]);

    let top = ctx.top_match().unwrap();
    assert_eq!(
        top.matched_by,
        vec![MatchReason::ExactName, MatchReason::Type, MatchReason::Room]
    );
    assert!((top.confidence - 1.7).abs() < 1e-9);
    assert_eq!(
        top.suggested_actions,
        vec![
            SuggestedAction::TurnOn,
            SuggestedAction::TurnOff,
            SuggestedAction::SetBrightness
        ]
    );
    assert!((ctx.confidence - 1.0).abs() < 1e-9);
}

#[test]
fn e2e_vietnamese_turn_on_with_room_keyword() {
    let h = TestHarness::with_sample_home();
    let ctx = h.interpret("bật đèn phòng ngủ");

    assert_eq!(ctx.intent, Intent::TurnOn);
    assert_eq!(ctx.parameters.room.as_deref(), Some("phòng ngủ"));
    let top = ctx.top_match().unwrap();
    assert_eq!(top.device.id, 12);
    assert_eq!(top.matched_by, vec![MatchReason::Type]);
}

#[test]
fn e2e_vietnamese_brightness_without_device() {
    let h = TestHarness::with_sample_home();
    let ctx = h.interpret("đặt độ sáng 40%");

    assert_eq!(ctx.intent, Intent::SetBrightness);
    assert_eq!(ctx.parameters.brightness, Some(40));
    assert!(ctx.device_matches.is_empty());
    assert!((ctx.confidence - 0.5).abs() < 1e-9);
    assert_eq!(ctx.suggestions.as_ref().map(Vec::len), Some(4));
}

#[test]
fn e2e_brightness_is_clamped() {
    let h = TestHarness::with_sample_home();
    assert_eq!(h.interpret("set brightness to 150").parameters.brightness, Some(100));
    assert_eq!(
        h.interpret("set brightness to 99999999999999999999999999")
            .parameters
            .brightness,
        Some(100)
    );
}

#[test]
fn e2e_cover_commands() {
    let h = TestHarness::with_sample_home();

    let ctx = h.interpret("open the living room shutter");
    assert_eq!(ctx.intent, Intent::ControlCover);
    assert_eq!(ctx.parameters.action, Some(CoverAction::Open));
    assert_eq!(ctx.top_match().unwrap().device.id, 20);

    let ctx = h.interpret("close the garage door");
    assert_eq!(ctx.intent, Intent::ControlCover);
    assert_eq!(ctx.parameters.action, Some(CoverAction::Close));
    assert_eq!(ctx.parameters.room.as_deref(), Some("Garage"));
    assert_eq!(h.match_ids("close the garage door"), vec![50, 40]);
}

#[test]
fn e2e_color_and_temperature() {
    let h = TestHarness::with_sample_home();

    let ctx = h.interpret("make the kitchen strip blue");
    assert_eq!(ctx.intent, Intent::SetColor);
    assert_eq!(ctx.parameters.color().map(|c| c.as_str()), Some("blue"));
    assert_eq!(ctx.top_match().unwrap().device.id, 14);

    let ctx = h.interpret("set the hall thermostat to 22");
    assert_eq!(ctx.intent, Intent::SetTemperature);
    assert_eq!(ctx.parameters.temperature, Some(22));
    assert_eq!(ctx.top_match().unwrap().device.id, 31);
}

#[test]
fn e2e_gibberish_is_unknown() {
    let h = TestHarness::with_sample_home();
    let ctx = h.interpret("xyz123");

    assert_eq!(ctx.intent, Intent::Unknown);
    assert!(ctx.parameters.is_empty());
    assert!(ctx.device_matches.is_empty());
    let hints = ctx.suggestions.unwrap();
    assert_eq!(hints.len(), 4);
    assert!(hints[0].contains("turn on device 5"));
}

#[test]
fn e2e_disabled_devices_are_never_matched() {
    let h = TestHarness::with_sample_home();
    assert!(!h.match_ids("turn off the old heater in the kitchen").contains(&60));
}

#[test]
fn e2e_empty_inventory() {
    let h = TestHarness::empty();
    let ctx = h.interpret("turn on the kitchen light");
    assert_eq!(ctx.intent, Intent::TurnOn);
    assert!(ctx.device_matches.is_empty());
    assert_eq!(ctx.parameters.room.as_deref(), Some("kitchen"));
}

/// The JSON shape callers depend on.
#[test]
fn e2e_context_serializes_to_snake_case_json() {
    let h = TestHarness::with_sample_home();
    let ctx = h.interpret("Set the living room light brightness to 40%");
    let json = serde_json::to_value(&ctx).unwrap();

    assert_eq!(json["intent"], "set_brightness");
    assert_eq!(json["parameters"]["brightness"], 40);
    assert_eq!(json["parameters"]["room"], "Living Room");
    assert!(json["parameters"].get("color").is_none());
    assert_eq!(json["device_matches"][0]["device"]["category"], "dimmer");
    assert_eq!(json["device_matches"][0]["matched_by"][0], "exact_name");
    assert!(json.get("suggestions").is_none());
}
