//! A full morning: announce, ring, auto-stop, snooze

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use rouse_core::{
    AlarmDraft, AlarmEvent, AlarmTime, DaySet, FakeClock, FakeOracle, MinuteTick, RecordingSink,
};
use rouse_engine::AlarmClock;
use rouse_storage::MemoryAlarmStore;
use similar_asserts::assert_eq;
use std::time::Duration;

// 2021-12-16 was a Thursday
fn thursday(h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 12, 16)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn draft(hour: u8, minute: u8, timeout: u32, volume: u8, days: DaySet) -> AlarmDraft {
    AlarmDraft {
        time: Some(AlarmTime { hour, minute }),
        days: Some(days),
        non_working_days: Some(false),
        timeout: Some(timeout),
        volume: Some(volume),
        repeat: Some(false),
        shuffle: Some(false),
    }
}

#[tokio::test(start_paused = true)]
async fn a_full_morning_produces_the_expected_event_stream() {
    let store = MemoryAlarmStore::new();
    let clock = FakeClock::new(thursday(6, 50));
    let sink = RecordingSink::new();
    let engine = AlarmClock::new(store.clone(), FakeOracle::new(), clock.clone(), sink.clone());
    engine.start().await;

    // 06:50 — the early alarm goes in and becomes the announced next
    let early = engine
        .add_alarm(draft(7, 0, 1, 30, DaySet::only(&[Weekday::Thu])))
        .unwrap();

    // 07:00 — it fires; nothing else qualifies today or tomorrow
    clock.set(thursday(7, 0));
    engine
        .on_minute_tick(MinuteTick::new(7, 0, Weekday::Thu))
        .await;
    assert!(engine.is_ringing(&early));

    // Its one-minute timeout expires on its own
    tokio::time::sleep(Duration::from_secs(61)).await;
    tokio::task::yield_now().await;
    assert!(!engine.is_ringing(&early));

    // Still 07:00 — a later alarm arrives and is announced next
    let late = engine
        .add_alarm(draft(7, 5, 10, 50, DaySet::all()))
        .unwrap();

    // 07:05 — it fires and gets snoozed by hand
    clock.set(thursday(7, 5));
    engine
        .on_minute_tick(MinuteTick::new(7, 5, Weekday::Thu))
        .await;
    engine.snooze_alarm(&late);

    assert_eq!(
        sink.events(),
        vec![
            AlarmEvent::Scheduled {
                hour: 7,
                minute: 0,
                timeout: 1,
                volume: 30,
                count: 1,
                repeat: false,
                shuffle: false,
            },
            AlarmEvent::Triggered {
                hour: 7,
                minute: 0,
                timeout: 1,
                volume: 30,
                repeat: false,
                shuffle: false,
            },
            AlarmEvent::Stopped {
                hour: 7,
                minute: 0,
                timeout: 1,
                volume: 30,
                snoozed: false,
            },
            AlarmEvent::Scheduled {
                hour: 7,
                minute: 5,
                timeout: 10,
                volume: 50,
                count: 2,
                repeat: false,
                shuffle: false,
            },
            AlarmEvent::Triggered {
                hour: 7,
                minute: 5,
                timeout: 10,
                volume: 50,
                repeat: false,
                shuffle: false,
            },
            // The trigger re-announces the same alarm for tomorrow
            AlarmEvent::Scheduled {
                hour: 7,
                minute: 5,
                timeout: 10,
                volume: 50,
                count: 2,
                repeat: false,
                shuffle: false,
            },
            AlarmEvent::Stopped {
                hour: 7,
                minute: 5,
                timeout: 10,
                volume: 50,
                snoozed: true,
            },
        ]
    );
}
