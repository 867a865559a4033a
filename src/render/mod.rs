//! Rendering module
//!
//! Maps utilization percentages to colored bars, labels and reset countdowns

pub mod bar;
pub mod duration;
pub mod line;
pub mod palette;

pub use bar::{gradient_color, label_color, render_bar};
pub use duration::{format_duration, time_until};
pub use line::format_status_line;
pub use palette::Color;
