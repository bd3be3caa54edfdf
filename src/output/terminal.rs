//! Terminal capability providers
//!
//! The formatter never inspects the process environment itself; it asks a
//! [`TerminalCapabilities`] implementation instead.

use std::io::IsTerminal;
use termcolor::{ColorChoice, StandardStream, WriteColor};

/// Answers whether styled output is appropriate
pub trait TerminalCapabilities {
    /// Whether output is attached to an interactive terminal
    fn is_interactive_output(&self) -> bool;

    /// Whether the terminal supports color escape sequences
    fn is_color_capable(&self) -> bool;

    /// Styling is applied only when both capabilities are present
    fn supports_styling(&self) -> bool {
        self.is_interactive_output() && self.is_color_capable()
    }
}

/// Capabilities of the process's standard output
///
/// Color support follows termcolor's automatic detection, which honors
/// `NO_COLOR` and `TERM=dumb`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutTerminal;

impl TerminalCapabilities for StdoutTerminal {
    fn is_interactive_output(&self) -> bool {
        std::io::stdout().is_terminal()
    }

    fn is_color_capable(&self) -> bool {
        StandardStream::stdout(ColorChoice::Auto).supports_color()
    }
}

/// Fixed capabilities, used for `--color always|never` and in tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTerminal {
    pub interactive: bool,
    pub color: bool,
}

impl FixedTerminal {
    /// An interactive, color-capable terminal
    pub fn color() -> Self {
        FixedTerminal {
            interactive: true,
            color: true,
        }
    }

    /// A terminal without styling support
    pub fn plain() -> Self {
        FixedTerminal {
            interactive: false,
            color: false,
        }
    }
}

impl TerminalCapabilities for FixedTerminal {
    fn is_interactive_output(&self) -> bool {
        self.interactive
    }

    fn is_color_capable(&self) -> bool {
        self.color
    }
}

impl<T: TerminalCapabilities + ?Sized> TerminalCapabilities for &T {
    fn is_interactive_output(&self) -> bool {
        (**self).is_interactive_output()
    }

    fn is_color_capable(&self) -> bool {
        (**self).is_color_capable()
    }
}

impl<T: TerminalCapabilities + ?Sized> TerminalCapabilities for Box<T> {
    fn is_interactive_output(&self) -> bool {
        (**self).is_interactive_output()
    }

    fn is_color_capable(&self) -> bool {
        (**self).is_color_capable()
    }
}
