//! Terminal highlighting for generated declarations.
//!
//! Each role maps to one standard 16-color ANSI code, so the output stays
//! readable on light and dark backgrounds alike.

/// ANSI escape sequences by syntactic role. All empty when disabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    /// Declared names and `extends` bases.
    pub name: &'static str,
    /// The generated-code header.
    pub comment: &'static str,
    /// Keywords and punctuation.
    pub syntax: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        name: "\x1b[34m",
        comment: "\x1b[32m",
        syntax: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        name: "",
        comment: "",
        syntax: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    pub fn paint_name(&self, text: &str) -> String {
        self.paint(self.name, text)
    }

    pub fn paint_comment(&self, text: &str) -> String {
        self.paint(self.comment, text)
    }

    pub fn paint_syntax(&self, text: &str) -> String {
        self.paint(self.syntax, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        format!("{code}{text}{}", self.reset)
    }
}
