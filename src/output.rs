//! Output formatting: terminal-aware styling and report formatters

pub mod emoji;
pub mod human;
pub mod json;
pub mod style;
pub mod terminal;

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use style::{Formatter, Style};
pub use terminal::{FixedTerminal, StdoutTerminal, TerminalCapabilities};
