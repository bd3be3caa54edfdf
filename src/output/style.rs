#![forbid(unsafe_code)]

//! Terminal-aware string styling
//!
//! On terminals that support styling, text is wrapped in ANSI color sequences and
//! emoji are left alone. Everywhere else the text is returned without color codes
//! and with emoji removed, since minimal terminals tend to garble them.

use super::emoji::{contains_emoji, remove_emoji};
use super::terminal::{StdoutTerminal, TerminalCapabilities};
use std::io::{self, Write};
use termcolor::{Ansi, Color, ColorSpec, WriteColor};

/// Semantic styles understood by the formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Title,
    Link,
    Bold,
    BoldTitle,
    Comment,
    Red,
    Yellow,
    Green,
}

impl Style {
    /// The color and weight used to render this style
    pub fn color_spec(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match self {
            Style::Title | Style::Green => spec.set_fg(Some(Color::Green)),
            Style::Link => spec.set_fg(Some(Color::Cyan)),
            Style::Bold => spec.set_bold(true),
            Style::BoldTitle => spec.set_fg(Some(Color::Green)).set_bold(true),
            // Bright black renders as gray
            Style::Comment => spec.set_fg(Some(Color::Black)).set_intense(true),
            Style::Red => spec.set_fg(Some(Color::Red)),
            Style::Yellow => spec.set_fg(Some(Color::Yellow)),
        };
        spec
    }
}

/// Applies [`Style`]s according to the capabilities of a terminal
#[derive(Debug, Clone, Default)]
pub struct Formatter<T = StdoutTerminal> {
    terminal: T,
}

impl<T: TerminalCapabilities> Formatter<T> {
    /// Creates a formatter backed by the given capability provider
    pub fn new(terminal: T) -> Self {
        Formatter { terminal }
    }

    /// The capability provider in use
    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Style `text`, or strip its emoji when the terminal cannot render styles
    pub fn style(&self, text: &str, style: Style) -> String {
        if !self.terminal.supports_styling() {
            return strip_emoji(text);
        }

        render(text, &style.color_spec()).unwrap_or_else(|_| text.to_string())
    }

    /// Remove emoji on terminals without styling support, without adding any style
    pub fn remove_emoji_if_unsupported(&self, text: &str) -> String {
        if self.terminal.supports_styling() {
            text.to_string()
        } else {
            strip_emoji(text)
        }
    }

    pub fn title(&self, text: &str) -> String {
        self.style(text, Style::Title)
    }

    pub fn link(&self, text: &str) -> String {
        self.style(text, Style::Link)
    }

    pub fn bold(&self, text: &str) -> String {
        self.style(text, Style::Bold)
    }

    pub fn bold_title(&self, text: &str) -> String {
        self.style(text, Style::BoldTitle)
    }

    pub fn comment(&self, text: &str) -> String {
        self.style(text, Style::Comment)
    }

    pub fn red(&self, text: &str) -> String {
        self.style(text, Style::Red)
    }

    pub fn yellow(&self, text: &str) -> String {
        self.style(text, Style::Yellow)
    }

    pub fn green(&self, text: &str) -> String {
        self.style(text, Style::Green)
    }
}

fn strip_emoji(text: &str) -> String {
    if contains_emoji(text) {
        remove_emoji(text)
    } else {
        text.to_string()
    }
}

/// Render `text` wrapped in the ANSI sequences for `spec`, followed by a reset
fn render(text: &str, spec: &ColorSpec) -> io::Result<String> {
    let mut ansi = Ansi::new(Vec::new());
    ansi.set_color(spec)?;
    ansi.write_all(text.as_bytes())?;
    ansi.reset()?;

    String::from_utf8(ansi.into_inner()).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
