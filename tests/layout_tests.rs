use gymsched::core::layout::{ColumnPacker, DayLayout, LayoutOptions, WeekLayout, derive_time_slots};
use gymsched::errors::AppError;
use gymsched::models::clock::ClockTime;
use gymsched::models::day::Day;
use gymsched::models::gym_class::{ClassDirectory, GymClass};
use gymsched::models::session::{RawSession, Session};
use gymsched::models::snapshot::{ScheduleSnapshot, group_by_day};

fn raw(id: i64, class_id: i64, day: &str, start: &str, end: &str) -> RawSession {
    RawSession {
        id,
        class_id,
        day_of_week: day.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

fn session(id: i64, day: &str, start: &str, end: &str) -> Session {
    raw(id, 1, day, start, end).validate().expect("valid session")
}

fn classes() -> Vec<GymClass> {
    vec![
        GymClass {
            id: 1,
            name: "Spinning".into(),
        },
        GymClass {
            id: 2,
            name: "Yoga".into(),
        },
    ]
}

fn layout(sessions: Vec<Session>) -> WeekLayout {
    WeekLayout::from_sessions(sessions, &classes(), &LayoutOptions::default()).expect("layout")
}

fn hours(layout: &WeekLayout) -> Vec<u16> {
    layout.slots.iter().map(|s| s.hour()).collect()
}

/// (session id, column) for every placed session of the day, in emit order.
fn columns(day: &DayLayout) -> Vec<(i64, usize)> {
    day.placed().map(|p| (p.session.id, p.col_index)).collect()
}

fn max_concurrency(sessions: &[&Session]) -> usize {
    sessions
        .iter()
        .map(|s| {
            sessions
                .iter()
                .filter(|o| o.start_time <= s.start_time && s.start_time < o.end_time)
                .count()
        })
        .max()
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Time slots
// ---------------------------------------------------------------------------

#[test]
fn test_slots_empty_week() {
    let by_day = group_by_day(Vec::new());
    assert!(derive_time_slots(&by_day).is_empty());
}

#[test]
fn test_slots_cover_partial_hours() {
    // 09:30-10:30 touches 09 and 10
    let by_day = group_by_day(vec![session(1, "Monday", "09:30", "10:30")]);
    let slots = derive_time_slots(&by_day);

    let hours: Vec<u16> = slots.iter().map(|s| s.hour()).collect();
    assert_eq!(hours, vec![9, 10]);
    assert_eq!(slots[0].label(), "09:00 - 10:00");
    assert_eq!(slots[1].label(), "10:00 - 11:00");
}

#[test]
fn test_slots_exact_end_hour_adds_no_row() {
    let by_day = group_by_day(vec![session(1, "Monday", "09:00", "10:00")]);
    let slots = derive_time_slots(&by_day);
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].hour(), 9);
}

#[test]
fn test_slots_shared_across_days_with_gaps() {
    let by_day = group_by_day(vec![
        session(1, "Friday", "18:00", "19:00"),
        session(2, "Monday", "08:00", "09:00"),
    ]);
    let slots = derive_time_slots(&by_day);

    let hours: Vec<u16> = slots.iter().map(|s| s.hour()).collect();
    assert_eq!(hours, vec![8, 18]);
}

#[test]
fn test_slots_end_of_day_has_no_phantom_row() {
    let by_day = group_by_day(vec![session(1, "Sunday", "23:00", "24:00")]);
    let slots = derive_time_slots(&by_day);

    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].hour(), 23);
    assert_eq!(slots[0].label(), "23:00 - 00:00");
}

// ---------------------------------------------------------------------------
// Column packing
// ---------------------------------------------------------------------------

#[test]
fn test_overlap_opens_second_column() {
    let week = layout(vec![
        session(1, "Monday", "09:00", "10:00"),
        session(2, "Monday", "09:30", "10:30"),
    ]);

    assert_eq!(hours(&week), vec![9, 10]);

    let monday = week.day(Day::Monday).expect("monday");
    assert_eq!(monday.column_count, 2);
    assert_eq!(monday.rows.len(), 2);

    let first_row = &monday.rows[0].blocks;
    assert_eq!(first_row.len(), 2);

    assert_eq!(first_row[0].session.id, 1);
    assert_eq!(first_row[0].col_index, 0);
    assert_eq!(first_row[0].top, 0);
    assert_eq!(first_row[0].height, 60);
    assert_eq!(first_row[0].left, 0);
    assert_eq!(first_row[0].class_name, "Spinning");

    assert_eq!(first_row[1].session.id, 2);
    assert_eq!(first_row[1].col_index, 1);
    assert_eq!(first_row[1].top, 30);
    assert_eq!(first_row[1].height, 60);
    assert_eq!(first_row[1].left, 120);

    assert!(monday.rows[1].blocks.is_empty());
}

#[test]
fn test_back_to_back_sessions_share_column() {
    let week = layout(vec![
        session(1, "Tuesday", "09:00", "10:00"),
        session(2, "Tuesday", "10:00", "11:00"),
    ]);

    let tuesday = week.day(Day::Tuesday).expect("tuesday");
    assert_eq!(tuesday.column_count, 1);
    assert_eq!(columns(tuesday), vec![(1, 0), (2, 0)]);

    // the second one is emitted in its own row, at the top
    let second = &tuesday.rows[1].blocks[0];
    assert_eq!(second.session.id, 2);
    assert_eq!(second.top, 0);
}

#[test]
fn test_three_way_overlap_uses_three_columns() {
    let week = layout(vec![
        session(1, "Wednesday", "09:00", "11:00"),
        session(2, "Wednesday", "09:15", "10:00"),
        session(3, "Wednesday", "09:30", "10:30"),
    ]);

    let wed = week.day(Day::Wednesday).expect("wednesday");
    assert_eq!(wed.column_count, 3);
    assert_eq!(columns(wed), vec![(1, 0), (2, 1), (3, 2)]);

    let lefts: Vec<u32> = wed.placed().map(|p| p.left).collect();
    assert_eq!(lefts, vec![0, 120, 240]);
}

#[test]
fn test_staggered_hour_sessions_use_three_columns() {
    let week = layout(vec![
        session(1, "Monday", "09:00", "10:00"),
        session(2, "Monday", "09:15", "10:15"),
        session(3, "Monday", "09:30", "10:30"),
    ]);

    let monday = week.day(Day::Monday).expect("monday");
    assert_eq!(monday.column_count, 3);
    assert_eq!(columns(monday), vec![(1, 0), (2, 1), (3, 2)]);

    let tops: Vec<i64> = monday.placed().map(|p| p.top).collect();
    assert_eq!(tops, vec![0, 15, 30]);
}

#[test]
fn test_lowest_free_column_is_reused() {
    // A ends at 10:00, so C (10:00) goes back into column 0 while B keeps 1
    let week = layout(vec![
        session(1, "Thursday", "09:00", "10:00"),
        session(2, "Thursday", "09:30", "11:00"),
        session(3, "Thursday", "10:00", "11:00"),
    ]);

    let thu = week.day(Day::Thursday).expect("thursday");
    assert_eq!(thu.column_count, 2);
    assert_eq!(columns(thu), vec![(1, 0), (2, 1), (3, 0)]);
}

#[test]
fn test_column_freed_mid_row_is_reused() {
    let week = layout(vec![
        session(1, "Friday", "09:00", "09:30"),
        session(2, "Friday", "09:00", "10:00"),
        session(3, "Friday", "09:30", "10:00"),
    ]);

    let fri = week.day(Day::Friday).expect("friday");
    assert_eq!(fri.column_count, 2);
    assert_eq!(columns(fri), vec![(1, 0), (2, 1), (3, 0)]);
}

#[test]
fn test_empty_week_layout() {
    let week = layout(Vec::new());

    assert!(week.is_empty());
    assert!(week.slots.is_empty());
    assert_eq!(week.days.len(), 7);
    for day in &week.days {
        assert_eq!(day.column_count, 0);
        assert!(day.rows.is_empty());
    }
}

#[test]
fn test_every_day_gets_every_row() {
    let week = layout(vec![
        session(1, "Monday", "08:00", "09:00"),
        session(2, "Saturday", "18:00", "19:30"),
    ]);

    assert_eq!(hours(&week), vec![8, 18, 19]);
    for day in &week.days {
        assert_eq!(day.rows.len(), 3, "{} rows", day.day);
    }

    let sunday = week.day(Day::Sunday).expect("sunday");
    assert!(sunday.is_empty());
    assert_eq!(sunday.column_count, 0);
}

#[test]
fn test_end_of_day_session_is_placed() {
    let week = layout(vec![session(7, "Sunday", "23:00", "24:00")]);

    let sunday = week.day(Day::Sunday).expect("sunday");
    assert_eq!(sunday.rows.len(), 1);

    let p = &sunday.rows[0].blocks[0];
    assert_eq!(p.session.id, 7);
    assert_eq!(p.top, 0);
    assert_eq!(p.height, 60);
}

#[test]
fn test_unknown_class_gets_fallback_label() {
    let s = raw(1, 99, "Monday", "09:00", "10:00")
        .validate()
        .expect("valid");
    let week = layout(vec![s]);

    let p = week
        .day(Day::Monday)
        .and_then(|d| d.placed().next())
        .expect("placed");
    assert_eq!(p.class_name, "Unknown class #99");
}

#[test]
fn test_input_order_does_not_matter() {
    let sorted = vec![
        session(1, "Monday", "08:00", "09:30"),
        session(2, "Monday", "08:30", "09:00"),
        session(3, "Monday", "09:00", "10:00"),
        session(4, "Monday", "09:15", "11:00"),
    ];
    let mut shuffled = sorted.clone();
    shuffled.reverse();
    shuffled.swap(0, 2);

    let a = layout(sorted);
    let b = layout(shuffled);

    assert_eq!(columns(a.day(Day::Monday).unwrap()), columns(b.day(Day::Monday).unwrap()));
    assert_eq!(a.slots, b.slots);
}

#[test]
fn test_layout_is_idempotent() {
    let snapshot = ScheduleSnapshot {
        classes: classes(),
        sessions: vec![
            raw(1, 1, "Monday", "09:00", "10:00"),
            raw(2, 2, "Monday", "09:30", "10:30"),
            raw(3, 1, "Friday", "17:45", "19:00"),
        ],
    };
    let opts = LayoutOptions::default();

    let first = WeekLayout::build(&snapshot, &opts).expect("first");
    let second = WeekLayout::build(&snapshot, &opts).expect("second");
    assert_eq!(first, second);
}

#[test]
fn test_packing_invariants_on_busy_day() {
    let sessions = vec![
        session(1, "Saturday", "07:00", "08:30"),
        session(2, "Saturday", "07:30", "08:00"),
        session(3, "Saturday", "08:00", "09:00"),
        session(4, "Saturday", "08:15", "08:45"),
        session(5, "Saturday", "08:15", "10:00"),
        session(6, "Saturday", "09:00", "09:45"),
        session(7, "Saturday", "09:30", "11:00"),
        session(8, "Saturday", "10:00", "10:30"),
        session(9, "Saturday", "12:00", "13:00"),
    ];
    let refs: Vec<&Session> = sessions.iter().collect();
    let expected_columns = max_concurrency(&refs);

    let week = layout(sessions.clone());
    let sat = week.day(Day::Saturday).expect("saturday");

    // every session exactly once, with positive height
    let mut ids: Vec<i64> = sat.placed().map(|p| p.session.id).collect();
    ids.sort();
    assert_eq!(ids, (1..=9).collect::<Vec<_>>());
    assert!(sat.placed().all(|p| p.height > 0));

    // emitted in the row its start falls in
    for row in &sat.rows {
        for p in &row.blocks {
            assert_eq!(p.session.start_time.floor_hour(), row.slot.hour());
            assert!((0..60).contains(&p.top));
        }
    }

    // no two sessions in one column overlap
    let placed: Vec<_> = sat.placed().collect();
    for (i, a) in placed.iter().enumerate() {
        for b in placed.iter().skip(i + 1) {
            if a.col_index == b.col_index {
                assert!(
                    !a.session.overlaps(&b.session),
                    "#{} and #{} share column {}",
                    a.session.id,
                    b.session.id,
                    a.col_index
                );
            }
        }
    }

    assert_eq!(sat.column_count, expected_columns);
    assert!(placed.iter().all(|p| p.col_index < sat.column_count));
}

#[test]
fn test_packer_rejects_session_outside_rows() {
    let s = session(1, "Monday", "09:00", "10:00");
    let packer = ColumnPacker::default();

    let err = packer
        .pack(&[s], &[], &ClassDirectory::new(&classes()))
        .unwrap_err();
    assert!(matches!(err, AppError::Layout(_)));
}

#[test]
fn test_custom_session_width() {
    let opts = LayoutOptions {
        session_width: 80,
        column_warning_threshold: 6,
    };
    let week = WeekLayout::from_sessions(
        vec![
            session(1, "Monday", "09:00", "10:00"),
            session(2, "Monday", "09:00", "10:00"),
        ],
        &classes(),
        &opts,
    )
    .expect("layout");

    let lefts: Vec<u32> = week.day(Day::Monday).unwrap().placed().map(|p| p.left).collect();
    assert_eq!(lefts, vec![0, 80]);
}

#[test]
fn test_oversized_session_width_is_a_layout_error() {
    let opts = LayoutOptions {
        session_width: 3_000_000_000,
        column_warning_threshold: 6,
    };
    let result = WeekLayout::from_sessions(
        vec![
            session(1, "Monday", "09:00", "10:00"),
            session(2, "Monday", "09:00", "10:00"),
            session(3, "Monday", "09:00", "10:00"),
        ],
        &classes(),
        &opts,
    );

    assert!(matches!(result, Err(AppError::Layout(_))));
}

#[test]
fn test_large_width_that_fits_is_accepted() {
    let opts = LayoutOptions {
        session_width: 2_000_000_000,
        column_warning_threshold: 6,
    };
    let week = WeekLayout::from_sessions(
        vec![
            session(1, "Monday", "09:00", "10:00"),
            session(2, "Monday", "09:00", "10:00"),
        ],
        &classes(),
        &opts,
    )
    .expect("layout");

    let lefts: Vec<u32> = week.day(Day::Monday).unwrap().placed().map(|p| p.left).collect();
    assert_eq!(lefts, vec![0, 2_000_000_000]);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_inverted_interval_is_rejected() {
    let err = raw(3, 1, "Monday", "10:00", "09:00").validate().unwrap_err();
    assert!(matches!(err, AppError::InvertedInterval { id: 3, .. }));

    let err = raw(4, 1, "Monday", "10:00", "10:00").validate().unwrap_err();
    assert!(matches!(err, AppError::InvertedInterval { id: 4, .. }));
}

#[test]
fn test_malformed_time_is_rejected() {
    for bad in ["9", "09:60", "25:00", "24:30", "ab:cd", "", "09:0"] {
        let err = raw(1, 1, "Monday", bad, "23:00").validate().unwrap_err();
        assert!(matches!(err, AppError::InvalidTime(_)), "{bad:?} accepted");
    }
}

#[test]
fn test_unknown_day_is_rejected() {
    let err = raw(1, 1, "Funday", "09:00", "10:00").validate().unwrap_err();
    assert!(matches!(err, AppError::InvalidDay(_)));
}

#[test]
fn test_invalid_snapshot_fails_whole_layout() {
    let snapshot = ScheduleSnapshot {
        classes: classes(),
        sessions: vec![
            raw(1, 1, "Monday", "09:00", "10:00"),
            raw(2, 1, "Monday", "11:00", "10:00"),
        ],
    };

    assert!(WeekLayout::build(&snapshot, &LayoutOptions::default()).is_err());
}

#[test]
fn test_min_duration_is_inclusive() {
    let thirty = session(1, "Monday", "09:00", "09:30");
    assert!(thirty.ensure_min_duration(30).is_ok());

    let short = session(2, "Monday", "09:00", "09:20");
    let err = short.ensure_min_duration(30).unwrap_err();
    assert!(matches!(
        err,
        AppError::SessionTooShort {
            id: 2,
            minutes: 20,
            min: 30
        }
    ));
}

// ---------------------------------------------------------------------------
// Value types
// ---------------------------------------------------------------------------

#[test]
fn test_clock_parsing_and_rounding() {
    let t: ClockTime = "9:05".parse().expect("clock");
    assert_eq!(t.minutes(), 545);
    assert_eq!(t.to_string(), "09:05");
    assert_eq!(t.floor_hour(), 9);
    assert_eq!(t.ceil_hour(), 10);

    let exact: ClockTime = "10:00".parse().expect("clock");
    assert_eq!(exact.ceil_hour(), 10);

    let end: ClockTime = "24:00".parse().expect("clock");
    assert!(end.is_end_of_day());
    assert_eq!(end.to_string(), "24:00");
    assert_eq!(end.end_label(), "00:00");
    assert_eq!(end.ceil_hour(), 24);
}

#[test]
fn test_day_parsing() {
    assert_eq!(Day::parse("monday").unwrap(), Day::Monday);
    assert_eq!(Day::parse("TUE").unwrap(), Day::Tuesday);
    assert_eq!(Day::parse(" Sunday ").unwrap(), Day::Sunday);
    assert!(Day::parse("mo").is_err());
    assert!(Day::Monday < Day::Sunday);
}

#[test]
fn test_snapshot_from_json() {
    let json = r#"{
        "classes": [{"id": 1, "name": "Spinning"}],
        "sessions": [
            {"id": 10, "class_id": 1, "day_of_week": "Monday",
             "start_time": "09:00", "end_time": "10:00"}
        ]
    }"#;

    let snapshot = ScheduleSnapshot::from_json(json).expect("snapshot");
    assert_eq!(snapshot.classes.len(), 1);

    let week = WeekLayout::build(&snapshot, &LayoutOptions::default()).expect("layout");
    assert_eq!(week.session_count(), 1);
}

#[test]
fn test_layout_json_shape() {
    let week = layout(vec![session(5, "Sunday", "23:00", "24:00")]);
    let value = serde_json::to_value(&week).expect("json");

    assert_eq!(value["slots"][0]["hour_start"], "23:00");
    assert_eq!(value["slots"][0]["hour_end"], "00:00");

    let sunday = &value["days"][6];
    assert_eq!(sunday["day"], "Sunday");
    assert_eq!(sunday["column_count"], 1);

    let block = &sunday["rows"][0]["blocks"][0];
    assert_eq!(block["id"], 5);
    assert_eq!(block["class_name"], "Spinning");
    assert_eq!(block["start_time"], "23:00");
    assert_eq!(block["end_time"], "24:00");
    assert_eq!(block["col_index"], 0);
    assert_eq!(block["top"], 0);
    assert_eq!(block["height"], 60);
    assert_eq!(block["left"], 0);
}
