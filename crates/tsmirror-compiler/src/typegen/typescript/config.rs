//! Emission options.

use tsmirror_core::Colors;

/// What to do with a field whose tag resolves to an empty name
/// (`json:"-"`, `json:""`, or a tag without the configured key).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyFieldName {
    /// Keep the empty property name and log a warning.
    #[default]
    Emit,
    /// Fall back to the Go field name.
    FieldName,
    /// Leave the field out.
    Skip,
}

/// Configuration for TypeScript emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Prefix declarations with `export`
    pub(crate) export: bool,
    /// Emit the generated-code header line
    pub(crate) header: bool,
    /// Tag key that supplies property names
    pub(crate) tag_key: String,
    pub(crate) empty_field_names: EmptyFieldName,
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export: true,
            header: true,
            tag_key: "json".to_owned(),
            empty_field_names: EmptyFieldName::default(),
            colors: Colors::OFF,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether declarations are exported.
    pub fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }

    /// Set whether the generated-code header is written.
    pub fn header(mut self, value: bool) -> Self {
        self.header = value;
        self
    }

    /// Set the tag key used for property names (`json` by default).
    pub fn tag_key(mut self, key: impl Into<String>) -> Self {
        self.tag_key = key.into();
        self
    }

    pub fn empty_field_names(mut self, policy: EmptyFieldName) -> Self {
        self.empty_field_names = policy;
        self
    }

    /// Set whether to use colored output.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }
}
