//! Interactive terminal interface

mod app;
mod rendering;

pub use app::{App, COLUMNS, Message, MessageStyle, Screen, run_tui};
pub use rendering::{level_color, ui};
