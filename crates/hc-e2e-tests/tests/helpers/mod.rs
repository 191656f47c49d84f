//! Shared test harness for E2E integration tests.
//!
//! Loads a sample hub export through the real inventory path and wires it
//! into a `ContextProcessor`.

#![allow(dead_code)]

use hc_cli::inventory::Inventory;
use hc_context::{ContextProcessor, DispatchOptions, DispatchResult};
use hc_protocol::{ControlPlan, ProcessedContext};
use hc_taxonomy::StaticCatalog;

/// Hub export for a small two-storey house. Device 60 is disabled.
pub const SAMPLE_HOME: &str = r#"{
    "devices": [
        {"id": 5,  "name": "Living Room Light",   "type": "com.fibaro.multilevelSwitch", "roomID": 1},
        {"id": 12, "name": "Bedroom Lamp",        "type": "com.fibaro.light",            "roomID": 2},
        {"id": 14, "name": "Kitchen Strip",       "type": "com.fibaro.colorController",  "roomID": 3},
        {"id": 20, "name": "Living Room Shutter", "type": "com.fibaro.rollerShutter",    "roomID": 1},
        {"id": 31, "name": "Hall Thermostat",     "type": "com.fibaro.thermostat",       "roomID": 0},
        {"id": 40, "name": "Front Door Lock",     "type": "com.fibaro.doorLock",         "roomID": 0},
        {"id": 41, "name": "Bedroom Motion",      "type": "com.fibaro.motionSensor",     "roomID": 2},
        {"id": 50, "name": "Garage Door",         "type": "com.fibaro.garageDoor",       "roomID": 4},
        {"id": 60, "name": "Old Heater",          "type": "com.fibaro.wallPlug",         "roomID": 3, "enabled": false}
    ],
    "rooms": [
        {"id": 1, "name": "Living Room", "sectionID": 1},
        {"id": 2, "name": "Bedroom",     "sectionID": 2},
        {"id": 3, "name": "Kitchen",     "sectionID": 1},
        {"id": 4, "name": "Garage",      "sectionID": 1}
    ]
}"#;

/// End-to-end harness around a processor loaded with `SAMPLE_HOME`.
pub struct TestHarness {
    pub processor: ContextProcessor,
}

impl TestHarness {
    pub fn with_sample_home() -> Self {
        let inventory = Inventory::from_json(SAMPLE_HOME, &StaticCatalog).unwrap();
        Self {
            processor: ContextProcessor::new(inventory.devices, inventory.rooms),
        }
    }

    pub fn empty() -> Self {
        Self {
            processor: ContextProcessor::default(),
        }
    }

    pub fn interpret(&self, text: &str) -> ProcessedContext {
        self.processor.process_context(text)
    }

    pub fn plan(&self, text: &str) -> DispatchResult<ControlPlan> {
        self.processor.plan(text, &DispatchOptions::default())
    }

    pub fn plan_forced(&self, text: &str, device_id: u32) -> DispatchResult<ControlPlan> {
        self.processor.plan(text, &DispatchOptions::forced(device_id))
    }

    /// Ids of the ranked candidates, best first.
    pub fn match_ids(&self, text: &str) -> Vec<u32> {
        self.interpret(text)
            .device_matches
            .iter()
            .map(|m| m.device.id)
            .collect()
    }
}
