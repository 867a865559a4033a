//! Rendering tests

use chrono::{DateTime, TimeZone, Utc};
use claude_usage_line::render::bar::{filled_cells, EMPTY, FILLED};
use claude_usage_line::render::{label_color, render_bar, time_until, Color};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 9, 12, 45, 0).unwrap()
}

fn cells(bar: &str) -> (usize, usize) {
    let filled = bar.chars().filter(|c| *c == FILLED).count();
    let empty = bar.chars().filter(|c| *c == EMPTY).count();
    (filled, empty)
}

#[test]
fn test_bar_has_exact_width_for_all_percentages() {
    for width in [1usize, 7, 10, 20] {
        for step in 0..=1000 {
            let percent = step as f64 / 10.0;
            let (filled, empty) = cells(&render_bar(percent, width));
            let expected = (width as f64 * percent / 100.0).floor() as usize;

            assert_eq!(filled + empty, width, "width {width} percent {percent}");
            assert_eq!(filled, expected, "width {width} percent {percent}");
            assert_eq!(filled_cells(percent, width), expected);
        }
    }
}

#[test]
fn test_out_of_range_saturates() {
    for percent in [-0.1, -50.0, f64::NEG_INFINITY] {
        assert_eq!(render_bar(percent, 10), render_bar(0.0, 10));
    }
    for percent in [100.1, 250.0, f64::INFINITY] {
        assert_eq!(render_bar(percent, 10), render_bar(100.0, 10));
    }
}

#[test]
fn test_label_color_thresholds() {
    let cases = [
        (0.0, Color::Green),
        (69.0, Color::Green),
        (69.99, Color::Green),
        (70.0, Color::Yellow),
        (89.0, Color::Yellow),
        (90.0, Color::Red),
        (100.0, Color::Red),
    ];

    for (percent, want) in cases {
        assert_eq!(label_color(percent), want, "percent {percent}");
    }
}

#[test]
fn test_filled_cells_colored_by_position() {
    // 50% of 10 cells: indices 0..5 all sit below the 0.5 breakpoint
    let bar = render_bar(50.0, 10);
    assert_eq!(bar.matches(&Color::Green.fg()).count(), 5);
    assert!(!bar.contains(&Color::Lime.fg()));

    // 95% of 20 cells reaches the orange band but not red
    let bar = render_bar(95.0, 20);
    assert!(bar.contains(&Color::Orange.fg()));
    assert!(!bar.contains(&Color::Red.fg()));
}

#[test]
fn test_time_until() {
    assert_eq!(time_until("2026-01-09T15:00:00Z", now()), "2h15m");
    assert_eq!(time_until("2026-01-09T10:00:00Z", now()), "now");
    assert_eq!(time_until("2026-01-09T12:45:00Z", now()), "now");
    assert_eq!(time_until("2026-01-09T12:45:30Z", now()), "now");
    assert_eq!(time_until("2026-01-09T13:00:59Z", now()), "15m");
    assert_eq!(time_until("2026-01-09T14:45:00Z", now()), "2h");
    assert_eq!(time_until("not-a-date", now()), "unknown");
    assert_eq!(time_until("", now()), "unknown");
}
