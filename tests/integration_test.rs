// Integration tests for the scheduling board engine
// Exercises the grid, layout, view axis, drag controller and store together

mod fixtures;

use pretty_assertions::assert_eq;

use egui::{pos2, vec2, Rect};
use salon_board::drag::{DragController, DragOutcome, DropTarget};
use salon_board::grid::TimeGrid;
use salon_board::layout::column_layout;
use salon_board::models::appointment::AppointmentStatus;
use salon_board::services::schedule::{AppointmentDraft, ScheduleStore};
use salon_board::view::{ColumnKey, ViewAxis, WeekStart};

use fixtures::{appointment, dates, team};

#[test]
fn salon_grid_has_51_slots_from_open_to_close() {
    let grid = TimeGrid::salon_default();
    assert_eq!(grid.len(), 51);
    assert_eq!(grid.slot(0), Some("7:30 AM"));
    assert_eq!(grid.slot(50), Some("8:00 PM"));
}

#[test]
fn chained_overlaps_form_one_two_lane_cluster() {
    // A 9:00-9:45, B 9:15-10:00, C 9:45-10:15: one cluster, two lanes, with
    // A and C stacked in the same lane since they never overlap each other.
    let appointments = vec![
        appointment("a", "9:00 AM", 45),
        appointment("b", "9:15 AM", 45),
        appointment("c", "9:45 AM", 30),
    ];
    let refs: Vec<_> = appointments.iter().collect();
    let layout = column_layout(&refs);

    for id in ["a", "b", "c"] {
        assert_eq!(layout[id].count, 2);
    }
    assert_eq!(layout["a"].index, layout["c"].index);
    assert_ne!(layout["a"].index, layout["b"].index);

    // Lane offsets are distinct multiples of the uniform width.
    assert_eq!(layout["a"].left(), 0.0);
    assert_eq!(layout["b"].left(), 0.5);
    assert_eq!(layout["a"].width(), 0.5);
}

#[test]
fn drag_to_another_stylist_and_slot_keeps_payload() {
    let mut store = ScheduleStore::new();
    store
        .create(AppointmentDraft {
            stylist_id: "1".into(),
            date: dates::monday(),
            start_label: "9:00 AM".into(),
            duration_minutes: 45,
            status: AppointmentStatus::Confirmed,
            client_name: "Dana Reyes".into(),
            client_id: Some("c1".into()),
            service: "Haircut".into(),
            price: 65.0,
        })
        .unwrap();
    let original = store.appointments()[0].clone();

    let mut controller = DragController::new();
    let rect = Rect::from_min_size(pos2(100.0, 200.0), vec2(140.0, 144.0));
    controller.pointer_down(&original, pos2(120.0, 220.0), rect);
    controller.pointer_move(pos2(320.0, 400.0));

    let outcome = controller.pointer_up(Some(&DropTarget {
        stylist_id: "2".into(),
        date: dates::monday(),
        slot_label: "10:30 AM".into(),
    }));
    let DragOutcome::Committed(moved) = outcome else {
        panic!("expected commit");
    };
    store.update(moved).unwrap();

    let stored = store.get(&original.id).unwrap();
    assert_eq!(stored.stylist_id, "2");
    assert_eq!(stored.start_label, "10:30 AM");
    assert_eq!(stored.date, dates::monday());
    assert_eq!(stored.duration_minutes, original.duration_minutes);
    assert_eq!(stored.status, original.status);
    assert_eq!(stored.client_name, original.client_name);
    assert_eq!(stored.price, original.price);

    // The appointment left the old column and appears in the new one.
    assert!(store
        .for_column(&ColumnKey::new("1", dates::monday()))
        .is_empty());
    assert_eq!(
        store.for_column(&ColumnKey::new("2", dates::monday())).len(),
        1
    );
}

#[test]
fn cancelled_drag_leaves_layout_untouched() {
    let mut store = ScheduleStore::with_appointments(vec![
        appointment("a", "9:00 AM", 45),
        appointment("b", "9:15 AM", 45),
    ]);

    let key = ColumnKey::new("1", dates::monday());
    let before = column_layout(&store.for_column(&key));

    let grabbed = store.get("a").unwrap().clone();
    let mut controller = DragController::new();
    let rect = Rect::from_min_size(pos2(100.0, 200.0), vec2(140.0, 144.0));
    controller.pointer_down(&grabbed, pos2(110.0, 210.0), rect);
    controller.pointer_move(pos2(900.0, 900.0));
    assert_eq!(controller.pointer_up(None), DragOutcome::Discarded);

    let after = column_layout(&store.for_column(&key));
    assert_eq!(before, after);
}

#[test]
fn team_and_week_views_resolve_columns() {
    let stylists = team();

    let team_view = ViewAxis::Resource {
        date: dates::monday(),
    };
    let team_columns = team_view.columns(&stylists);
    assert_eq!(team_columns.len(), 2);
    assert_eq!(team_columns[0].title, "Jordan");
    assert!(team_columns.iter().all(|c| c.key.date == dates::monday()));

    let week_view = ViewAxis::Week {
        stylist_id: "1".into(),
        reference: dates::monday(),
        week_start: WeekStart::Rolling,
    };
    let week_columns = week_view.columns(&stylists);
    assert_eq!(week_columns.len(), 7);
    assert_eq!(week_columns[0].key.date, dates::monday());
    assert_eq!(week_columns[1].key.date, dates::tuesday());
    assert!(week_columns.iter().all(|c| c.key.stylist_id == "1"));

    // Paging moves exactly one week; team view paging changes nothing.
    let next_week = week_view.next().columns(&stylists);
    assert_eq!(
        next_week[0].key.date,
        dates::monday() + chrono::Duration::days(7)
    );
    assert_eq!(team_view.next(), team_view);
}

#[test]
fn blocked_time_occupies_the_grid_like_a_booking() {
    let grid = TimeGrid::salon_default();
    let mut store = ScheduleStore::new();

    // Front desk blocks lunch using a duration offered for that slot.
    let options = grid.block_durations_from("12:00 PM");
    assert!(options.contains(&60));
    store
        .create_block("1", dates::monday(), "12:00 PM", 60, "Lunch")
        .unwrap();

    store
        .create(AppointmentDraft {
            stylist_id: "1".into(),
            date: dates::monday(),
            start_label: "12:30 PM".into(),
            duration_minutes: 45,
            status: AppointmentStatus::Confirmed,
            client_name: "Walk-in".into(),
            client_id: None,
            service: "Blowout".into(),
            price: 45.0,
        })
        .unwrap();

    let key = ColumnKey::new("1", dates::monday());
    let layout = column_layout(&store.for_column(&key));
    // The block and the booking collide, so both get half the column.
    assert!(layout.values().all(|lane| lane.count == 2));
}

#[test]
fn appointments_round_trip_through_json() {
    let original = appointment("a", "9:00 AM", 45);
    let json = serde_json::to_string(&original).unwrap();
    let back: salon_board::models::appointment::Appointment =
        serde_json::from_str(&json).unwrap();
    assert_eq!(back, original);
    assert!(json.contains("\"confirmed\""));
}
