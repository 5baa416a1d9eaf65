mod common;
use common::{day, event, owned_event, viewer};

use chrono::Weekday;
use crewcal::core::render::{Bar, LayoutSettings, RenderContext, RenderModel, render};
use crewcal::models::event::Event;
use crewcal::models::role::Role;
use crewcal::models::viewer::Viewer;
use crewcal::ui::month_view::MonthView;
use crewcal::utils::date::YearMonth;

fn june() -> YearMonth {
    YearMonth::new(2024, 6).expect("valid month")
}

fn render_june(v: &Viewer, events: &[Event], settings: LayoutSettings) -> RenderModel {
    let ctx = RenderContext {
        viewer: v,
        month: june(),
        events,
        settings,
        today: Some(day("2024-06-15")),
    };
    render(&ctx)
}

fn bar<'a>(model: &'a RenderModel, id: i64, d: &str) -> &'a Bar {
    model
        .bars
        .iter()
        .find(|b| b.event_id == id && b.day == day(d))
        .unwrap_or_else(|| panic!("no bar for #{id} on {d}"))
}

#[test]
fn test_window_is_whole_weeks_from_monday() {
    let v = viewer("u1", Role::Leader);
    let model = render_june(&v, &[], LayoutSettings::default());

    assert_eq!(model.window_start, day("2024-05-27"));
    assert_eq!(model.window_end, day("2024-06-30"));
    assert_eq!(model.cells.len(), 35);
    assert_eq!(model.weeks().count(), 5);
    assert!(!model.cells[0].in_month);
    assert!(model.cells[5].in_month);
    assert_eq!(model.cells.iter().filter(|c| c.is_today).count(), 1);
    assert_eq!(model.rows, 0);
}

#[test]
fn test_window_follows_week_start() {
    let v = viewer("u1", Role::Leader);
    let settings = LayoutSettings {
        week_start: Weekday::Sun,
        ..LayoutSettings::default()
    };
    let model = render_june(&v, &[], settings);

    assert_eq!(model.window_start, day("2024-05-26"));
    assert_eq!(model.window_end, day("2024-07-06"));
    assert_eq!(model.cells.len(), 42);
}

#[test]
fn test_bar_per_covered_day_with_row_offsets() {
    let v = viewer("u1", Role::Leader);
    let events = vec![
        event(1, "2024-06-01", "2024-06-05"),
        event(2, "2024-06-02", "2024-06-03"),
    ];
    let model = render_june(&v, &events, LayoutSettings::default());

    assert_eq!(model.rows, 2);
    assert_eq!(model.bars.iter().filter(|b| b.event_id == 1).count(), 5);
    assert_eq!(model.bars.iter().filter(|b| b.event_id == 2).count(), 2);

    assert_eq!(bar(&model, 1, "2024-06-03").offset, 24);
    assert_eq!(bar(&model, 2, "2024-06-03").offset, 42);
    assert_eq!(bar(&model, 2, "2024-06-03").visual_row, 1);
}

#[test]
fn test_label_on_start_and_week_heads_only() {
    let v = viewer("u1", Role::Leader);
    // Sat 06-01 to Wed 06-05, crossing the Monday 06-03 week boundary.
    let events = vec![event(1, "2024-06-01", "2024-06-05")];
    let model = render_june(&v, &events, LayoutSettings::default());

    let first = bar(&model, 1, "2024-06-01");
    assert!(first.is_start && first.show_label && !first.is_end);

    let sunday = bar(&model, 1, "2024-06-02");
    assert!(!sunday.is_start && !sunday.show_label);

    let monday = bar(&model, 1, "2024-06-03");
    assert!(!monday.is_start && monday.show_label);

    let last = bar(&model, 1, "2024-06-05");
    assert!(last.is_end && !last.show_label);
}

#[test]
fn test_event_clipped_at_window_start() {
    let v = viewer("u1", Role::Leader);
    let events = vec![event(1, "2024-05-20", "2024-05-28")];
    let model = render_june(&v, &events, LayoutSettings::default());

    let days: Vec<_> = model.bars.iter().map(|b| b.day).collect();
    assert_eq!(days, vec![day("2024-05-27"), day("2024-05-28")]);

    let head = bar(&model, 1, "2024-05-27");
    assert!(!head.is_start);
    assert!(head.show_label);
}

#[test]
fn test_events_outside_window_are_dropped() {
    let v = viewer("u1", Role::Leader);
    let events = vec![
        event(1, "2024-04-01", "2024-04-30"),
        event(2, "2024-06-10", "2024-06-10"),
        event(3, "2024-07-10", "2024-07-12"),
    ];
    let model = render_june(&v, &events, LayoutSettings::default());

    let ids: Vec<i64> = model.events.iter().map(|p| p.event.id).collect();
    assert_eq!(ids, vec![2]);
    assert_eq!(model.events[0].visual_row, 0);
}

#[test]
fn test_member_view_hides_other_members() {
    let events = vec![
        owned_event(1, "2024-06-01", "2024-06-02", "lead", Role::Leader),
        owned_event(2, "2024-06-01", "2024-06-02", "u2", Role::Member),
        owned_event(3, "2024-06-01", "2024-06-02", "u3", Role::Member),
    ];

    let member = viewer("u2", Role::Member);
    let model = render_june(&member, &events, LayoutSettings::default());
    let mut ids: Vec<i64> = model.events_on(day("2024-06-01")).iter().map(|p| p.event.id).collect();
    ids.sort();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(model.rows, 2);
    assert!(model.bars.iter().all(|b| b.event_id != 3));

    let leader = viewer("lead", Role::Leader);
    let model = render_june(&leader, &events, LayoutSettings::default());
    assert_eq!(model.events_on(day("2024-06-02")).len(), 3);
    assert_eq!(model.rows, 3);
}

#[test]
fn test_bars_sorted_by_day_then_row() {
    let v = viewer("u1", Role::Leader);
    let events = vec![
        event(2, "2024-06-04", "2024-06-04"),
        event(1, "2024-06-03", "2024-06-06"),
    ];
    let model = render_june(&v, &events, LayoutSettings::default());

    let on_fourth: Vec<usize> = model.bars_on(day("2024-06-04")).map(|b| b.visual_row).collect();
    assert_eq!(on_fourth, vec![0, 1]);
    for pair in model.bars.windows(2) {
        assert!((pair[0].day, pair[0].visual_row) <= (pair[1].day, pair[1].visual_row));
    }
}

#[test]
fn test_month_view_prints_labels_and_continuations() {
    let v = viewer("u1", Role::Leader);
    let events = vec![event(1, "2024-06-11", "2024-06-13")];
    let model = render_june(&v, &events, LayoutSettings::default());

    let text = MonthView {
        model: &model,
        viewer: &v,
        cell_width: 12,
        use_color: false,
    }
    .render();

    assert!(text.starts_with("Mon"));
    assert!(text.contains("▌event 1"));
    assert!(text.contains(&"─".repeat(12)));
    assert!(!text.contains('\x1b'));
}
