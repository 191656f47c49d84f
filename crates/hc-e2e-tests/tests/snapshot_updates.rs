//! E2E tests for live inventory updates while commands are interpreted.

mod helpers;

use hc_protocol::{DeviceCategory, DeviceRecord, Intent, RoomMap};

use helpers::TestHarness;

#[test]
fn e2e_device_update_changes_results() {
    let h = TestHarness::with_sample_home();
    assert_eq!(h.match_ids("turn on the porch light"), vec![5, 12]);

    let mut devices = h.processor.snapshot().devices().to_vec();
    devices.push(DeviceRecord::new(70, "Porch Light", DeviceCategory::Light));
    h.processor.update_devices(devices);

    assert_eq!(h.match_ids("turn on the porch light")[0], 70);
    let plan = h.plan("turn on the porch light").unwrap();
    assert_eq!(plan.device_id, 70);
}

#[test]
fn e2e_room_rename_keeps_devices() {
    let h = TestHarness::with_sample_home();
    let mut rooms = h.processor.snapshot().rooms().clone();
    rooms.insert(2, "Phòng Ngủ".to_string());
    h.processor.update_rooms(rooms);

    let ctx = h.interpret("bật đèn phòng ngủ");
    assert_eq!(ctx.intent, Intent::TurnOn);
    assert_eq!(ctx.parameters.room.as_deref(), Some("Phòng Ngủ"));
    assert_eq!(h.match_ids("bật đèn phòng ngủ"), vec![12, 41]);
}

/// Readers on several threads always see a consistent device/room pair
/// while a writer flips between two homes.
#[test]
fn e2e_concurrent_updates_are_atomic() {
    let h = TestHarness::with_sample_home();
    let home_a = h.processor.snapshot();
    let home_b = (
        vec![DeviceRecord::new(900, "Studio Lamp", DeviceCategory::Light).in_room(90)],
        RoomMap::from([(90, "Studio".to_string())]),
    );

    std::thread::scope(|s| {
        s.spawn(|| {
            for i in 0..100 {
                if i % 2 == 0 {
                    h.processor.replace_snapshot(home_b.0.clone(), home_b.1.clone());
                } else {
                    h.processor
                        .replace_snapshot(home_a.devices().to_vec(), home_a.rooms().clone());
                }
            }
        });

        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..100 {
                    let snapshot = h.processor.snapshot();
                    for device in snapshot.devices() {
                        if let Some(room) = device.room_id {
                            assert!(snapshot.room_name(room).is_some(), "torn snapshot");
                        }
                    }
                    let ctx = h.interpret("turn on the lamp");
                    assert_eq!(ctx.intent, Intent::TurnOn);
                    assert!(!ctx.device_matches.is_empty());
                }
            });
        }
    });
}
