//! Rendering is split by concern: colors, the line layout, and stripping colors back out.

mod color;
mod line;
mod strip;

pub use color::{AnsiColor, colorize};
pub use line::{HUMAN_DATE_FORMAT, human_date, render_line, render_line_at, rfc3339};
pub use strip::{has_ansi, strip_ansi};
