//! Gradient progress bar and threshold label colors

use super::palette::{Color, RESET};

/// Glyph for a filled cell
pub const FILLED: char = '█';
/// Glyph for an empty cell
pub const EMPTY: char = '░';

/// Color of a filled cell at `position` (cell index / bar width, in [0, 1)).
///
/// Colors follow the cell's place in the bar, so a nearly full bar shows
/// the whole green-to-red spectrum.
pub fn gradient_color(position: f64) -> Color {
    if position < 0.5 {
        Color::Green
    } else if position < 0.7 {
        Color::Lime
    } else if position < 0.85 {
        Color::Yellow
    } else if position < 0.95 {
        Color::Orange
    } else {
        Color::Red
    }
}

/// Clamp to [0, 100]; NaN counts as 0
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// Number of filled cells: floor(width * percent / 100)
pub fn filled_cells(percent: f64, width: usize) -> usize {
    let filled = (width as f64 * clamp_percent(percent) / 100.0).floor() as usize;
    filled.min(width)
}

/// Render a `width`-cell bar with ANSI colors
pub fn render_bar(percent: f64, width: usize) -> String {
    let filled = filled_cells(percent, width);
    let empty = width - filled;

    let mut bar = String::new();
    for i in 0..filled {
        let position = i as f64 / width as f64;
        bar.push_str(&gradient_color(position).fg());
        bar.push(FILLED);
    }

    if empty > 0 {
        bar.push_str(&Color::DimGray.fg());
        bar.extend(std::iter::repeat(EMPTY).take(empty));
    }

    bar.push_str(RESET);
    bar
}

/// Label color from the overall percentage: <70 green, <90 yellow, else red
pub fn label_color(percent: f64) -> Color {
    if percent < 70.0 {
        Color::Green
    } else if percent < 90.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}
