//! Scheduling scenario specs, matching the behaviors promised to
//! consumers of the announcement events

use chrono::{NaiveDate, NaiveDateTime};
use rouse_adapters::StaticCalendar;
use rouse_core::{
    AlarmEvent, AlarmId, AlarmStore, AlarmTime, DaySet, FakeClock, FakeOracle, NewAlarm,
    RecordingSink,
};
use rouse_engine::AlarmClock;
use rouse_storage::MemoryAlarmStore;
use similar_asserts::assert_eq;
use std::sync::Arc;

type Engine = Arc<AlarmClock<MemoryAlarmStore, FakeOracle, FakeClock, RecordingSink>>;

struct World {
    engine: Engine,
    store: MemoryAlarmStore,
    oracle: FakeOracle,
    sink: RecordingSink,
}

// 2021-12-16 was a Thursday
fn thursday(h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 12, 16)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn world(now: NaiveDateTime) -> World {
    let store = MemoryAlarmStore::new();
    let oracle = FakeOracle::new();
    let sink = RecordingSink::new();
    let engine = AlarmClock::new(
        store.clone(),
        oracle.clone(),
        FakeClock::new(now),
        sink.clone(),
    );
    World {
        engine,
        store,
        oracle,
        sink,
    }
}

fn alarm(hour: u8, minute: u8) -> NewAlarm {
    NewAlarm {
        time: AlarmTime { hour, minute },
        days: DaySet::all(),
        non_working_days: false,
        enabled: true,
        timeout: 10,
        volume: 50,
        repeat: false,
        shuffle: false,
    }
}

#[tokio::test]
async fn next_alarm_today_is_announced_with_its_fields() {
    let w = world(thursday(12, 0));
    w.store.add(alarm(12, 10)).unwrap();

    w.engine.schedule_next();

    assert_eq!(
        w.sink.events(),
        vec![AlarmEvent::Scheduled {
            hour: 12,
            minute: 10,
            timeout: 10,
            volume: 50,
            count: 1,
            repeat: false,
            shuffle: false,
        }]
    );
}

#[tokio::test]
async fn a_disabled_alarm_is_never_announced() {
    let w = world(thursday(12, 0));
    w.store
        .add(NewAlarm {
            enabled: false,
            ..alarm(12, 10)
        })
        .unwrap();

    w.engine.schedule_next();

    assert_eq!(w.sink.events(), Vec::<AlarmEvent>::new());
}

#[tokio::test]
async fn on_a_non_working_day_the_later_opted_in_alarm_wins_today() {
    // Two alarms opted into non-working days; 14:10 is still ahead at
    // 12:00, 10:10 has passed. The today pass settles it: exactly one
    // announcement, for 14:10.
    let w = world(thursday(12, 0));
    w.store
        .add(NewAlarm {
            non_working_days: true,
            ..alarm(14, 10)
        })
        .unwrap();
    w.store
        .add(NewAlarm {
            non_working_days: true,
            ..alarm(10, 10)
        })
        .unwrap();
    w.oracle
        .set_non_working(NaiveDate::from_ymd_opt(2021, 12, 16).unwrap(), true);

    w.engine.start().await;

    let scheduled = w.sink.named("alarm:scheduled");
    assert_eq!(scheduled.len(), 1);
    assert!(matches!(
        scheduled[0],
        AlarmEvent::Scheduled { hour: 14, minute: 10, .. }
    ));
}

#[tokio::test]
async fn stopping_an_unknown_alarm_is_silent() {
    let w = world(thursday(12, 0));

    w.engine.stop_alarm(&AlarmId::new("gone"));

    assert_eq!(w.sink.events(), Vec::<AlarmEvent>::new());
}

#[tokio::test]
async fn a_weekend_calendar_suppresses_weekday_alarms() {
    // 2021-12-18 was a Saturday; with the weekends rule on, both
    // horizon days are non-working and nothing is announced
    let saturday = NaiveDate::from_ymd_opt(2021, 12, 18)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let store = MemoryAlarmStore::new();
    let sink = RecordingSink::new();
    let engine = AlarmClock::new(
        store.clone(),
        StaticCalendar::new([], true),
        FakeClock::new(saturday),
        sink.clone(),
    );
    store.add(alarm(12, 10)).unwrap();

    engine.start().await;

    assert_eq!(sink.named("alarm:scheduled").len(), 0);
}

#[tokio::test]
async fn an_oracle_outage_falls_back_to_cached_working_days() {
    // The calendar is down from the start: both days keep their
    // cached (working) flags and scheduling proceeds normally.
    let w = world(thursday(12, 0));
    w.store.add(alarm(12, 10)).unwrap();
    w.oracle.set_failing(true);

    w.engine.start().await;

    assert_eq!(w.sink.named("alarm:scheduled").len(), 1);
}
