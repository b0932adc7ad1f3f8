//! Declarations produced by source extraction.
//!
//! The serde shape is the interchange format between an extractor and the
//! translator:
//!
//! ```json
//! {
//!   "records": [{ "name": "User", "fields": [{ "name": "ID", "rawType": "int", "tag": "json:\"id\"" }], "genericParams": [] }],
//!   "aliases": [{ "name": "Email", "genericParams": [], "underlyingRawType": "string" }]
//! }
//! ```

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// A single field of a record declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDecl {
    pub name: String,
    /// Type expression in the canonical grammar (`*T`, `[]T`, `map[K]V`, ...).
    #[serde(default)]
    pub raw_type: String,
    /// Metadata tag without its surrounding delimiters, e.g. `json:"id"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Embedded (anonymous) field; `name` holds the embedded type's leaf name.
    #[serde(default, skip_serializing_if = "is_false")]
    pub embedded: bool,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_type: raw_type.into(),
            tag: None,
            embedded: false,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }
}

/// A record (struct) declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDecl {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
    #[serde(default)]
    pub generic_params: Vec<String>,
}

impl RecordDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn generic_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.generic_params = params.into_iter().map(Into::into).collect();
        self
    }
}

/// A named alias for another type expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliasDecl {
    pub name: String,
    #[serde(default)]
    pub generic_params: Vec<String>,
    #[serde(default)]
    pub underlying_raw_type: String,
}

impl AliasDecl {
    pub fn new(name: impl Into<String>, underlying: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generic_params: Vec::new(),
            underlying_raw_type: underlying.into(),
        }
    }

    pub fn generic_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.generic_params = params.into_iter().map(Into::into).collect();
        self
    }
}

/// Everything extracted for one conversion run, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declarations {
    #[serde(default)]
    pub records: Vec<RecordDecl>,
    #[serde(default)]
    pub aliases: Vec<AliasDecl>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.aliases.is_empty()
    }

    /// Append another set, keeping order (used when merging files).
    pub fn extend(&mut self, other: Declarations) {
        self.records.extend(other.records);
        self.aliases.extend(other.aliases);
    }

    pub fn record(&self, name: &str) -> Option<&RecordDecl> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn alias_table(&self) -> AliasTable {
        AliasTable::from_decls(&self.aliases)
    }

    pub fn record_table(&self) -> RecordTable {
        RecordTable::from_decls(&self.records)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Alias name → underlying type expression, one level deep.
///
/// Chains are resolved by repeated lookup, never pre-flattened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: IndexMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from declarations. A repeated name keeps the last definition.
    pub fn from_decls(aliases: &[AliasDecl]) -> Self {
        let mut table = Self::new();
        for alias in aliases {
            table.insert(&alias.name, &alias.underlying_raw_type);
        }
        table
    }

    pub fn insert(&mut self, name: impl Into<String>, underlying: impl Into<String>) {
        self.entries.insert(name.into(), underlying.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, underlying) in iter {
            table.insert(name, underlying);
        }
        table
    }
}

/// Names of the records emitted in this run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    names: IndexSet<String>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_decls(records: &[RecordDecl]) -> Self {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RecordTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::new();
        for name in iter {
            table.insert(name);
        }
        table
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
