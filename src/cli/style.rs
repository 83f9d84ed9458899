//! Terminal colors for both demos. Purely cosmetic: with colors off every
//! helper returns the plain text unchanged.

use std::fmt::Display;

use owo_colors::{OwoColorize, Style};

use crate::domain::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: impl Display, style: Style) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn success(&self, text: impl Display) -> String {
        self.paint(text, Style::new().green().bold())
    }

    pub fn error(&self, text: impl Display) -> String {
        self.paint(text, Style::new().red().bold())
    }

    pub fn header(&self, text: impl Display) -> String {
        self.paint(text, Style::new().bold())
    }

    pub fn muted(&self, text: impl Display) -> String {
        self.paint(text, Style::new().dimmed())
    }

    pub fn mark(&self, mark: Mark) -> String {
        let style = match mark {
            Mark::X => Style::new().red().bold(),
            Mark::O => Style::new().cyan().bold(),
        };
        self.paint(mark, style)
    }
}
