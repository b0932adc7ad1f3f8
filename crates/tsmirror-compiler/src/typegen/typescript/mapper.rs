//! Go type expression → TypeScript type text.
//!
//! Resolution order is fixed, first match wins:
//!
//! 1. cycle guard (expression already on the active path ⇒ `any`)
//! 2. generic parameter substitution
//! 3. empty input ⇒ empty output
//! 4. literal overrides (`[]byte`, `struct{}`, `func`, `*time.Time`, ...)
//! 5. enclosing generic parameter ⇒ itself
//! 6. `*T` ⇒ `T | null`
//! 7. `[]T` ⇒ `T[]` (index signatures parenthesized)
//! 8. `map[K]V` ⇒ `{ [key: K]: V }`
//! 9. `struct{ ... }` ⇒ inline object type
//! 10. `Base[A, B]` ⇒ `Base<A, B>`
//! 11. alias lookup (self-alias ⇒ `any`)
//! 12. primitive table
//! 13. foreign names (qualified, stray sigils) ⇒ `any`
//! 14. pass-through
//!
//! Literal overrides run before the primitive table and the foreign-name
//! heuristic because names like `*time.Time` would otherwise become `any`.
//! Mapping never fails: anything unrepresentable degrades to `any`.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use tsmirror_core::{AliasTable, RecordTable};

use super::builtins::{
    self, ANY, INDEX_SIGNATURE_PREFIX, NULLABLE_SUFFIX, UNION_MARKER,
};
use super::generics::split_generic_type;

/// Generic parameter name → TypeScript text it stands for.
pub type Substitutions = HashMap<String, String>;

/// Expressions on the active resolution path.
///
/// An entry lives only while its expression is being resolved, so the same
/// expression reached again along an independent path is not a cycle.
pub type VisitedSet = HashSet<String>;

static GENERIC_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9_]+\[.*\]").expect("generic pattern is valid"));

static NO_SUBSTITUTIONS: LazyLock<Substitutions> = LazyLock::new(Substitutions::new);

/// Maps type expressions in the context of one declaration.
#[derive(Clone, Copy, Debug)]
pub struct TypeMapper<'a> {
    aliases: &'a AliasTable,
    records: &'a RecordTable,
    /// Generic parameters of the enclosing declaration.
    type_params: &'a [String],
    substitutions: &'a Substitutions,
}

impl<'a> TypeMapper<'a> {
    pub fn new(aliases: &'a AliasTable, records: &'a RecordTable) -> Self {
        Self {
            aliases,
            records,
            type_params: &[],
            substitutions: &NO_SUBSTITUTIONS,
        }
    }

    /// Set the enclosing declaration's generic parameter names.
    pub fn type_params(mut self, params: &'a [String]) -> Self {
        self.type_params = params;
        self
    }

    /// Set the generic parameter substitutions.
    pub fn substitutions(mut self, substitutions: &'a Substitutions) -> Self {
        self.substitutions = substitutions;
        self
    }

    /// Map one expression with a fresh cycle guard.
    pub fn map(&self, expr: &str) -> String {
        let mut visited = VisitedSet::new();
        self.map_with(expr, &mut visited)
    }

    /// Map one expression, sharing the caller's cycle guard.
    pub fn map_with(&self, expr: &str, visited: &mut VisitedSet) -> String {
        let expr = expr.trim();
        if visited.contains(expr) {
            tracing::trace!(expr, "cycle detected");
            return ANY.to_owned();
        }

        visited.insert(expr.to_owned());
        let mapped = self.resolve(expr, visited);
        visited.remove(expr);
        mapped
    }

    /// Whether `name` is a record emitted in this run.
    pub fn is_known_record(&self, name: &str) -> bool {
        self.records.contains(name)
    }

    fn resolve(&self, expr: &str, visited: &mut VisitedSet) -> String {
        if let Some(mapped) = self.substitutions.get(expr) {
            return mapped.clone();
        }

        if expr.is_empty() {
            return String::new();
        }

        if let Some(special) = builtins::special_case(expr) {
            return special.to_owned();
        }

        if self.type_params.iter().any(|p| p == expr) {
            return expr.to_owned();
        }

        if let Some(inner) = expr.strip_prefix('*') {
            return self.map_with(inner, visited) + NULLABLE_SUFFIX;
        }

        if let Some(elem) = expr.strip_prefix("[]") {
            return self.map_slice(elem, visited);
        }

        if expr.starts_with("map[") {
            return self.map_map(expr, visited);
        }

        if expr.starts_with("struct{") {
            return self.map_inline_struct(expr, visited);
        }

        if GENERIC_PATTERN.is_match(expr) {
            return self.map_generic(expr, visited);
        }

        if let Some(target) = self.aliases.get(expr) {
            if target == expr {
                return ANY.to_owned();
            }
            let resolved = self.map_with(target, visited);
            if !resolved.is_empty() {
                return resolved;
            }
        }

        if let Some(basic) = builtins::basic_type(expr) {
            return basic.to_owned();
        }

        if builtins::is_foreign(expr) {
            return ANY.to_owned();
        }

        if builtins::is_exported_name(expr) && !self.is_known_record(expr) {
            tracing::trace!(name = expr, "passing through name not declared in this run");
        }
        expr.to_owned()
    }

    fn map_slice(&self, elem: &str, visited: &mut VisitedSet) -> String {
        let elem = self.map_with(elem, visited);
        if elem.starts_with(INDEX_SIGNATURE_PREFIX) {
            format!("({elem})[]")
        } else {
            format!("{elem}[]")
        }
    }

    fn map_map(&self, expr: &str, visited: &mut VisitedSet) -> String {
        let Some((raw_key, raw_value)) = split_map(expr) else {
            return ANY.to_owned();
        };

        let key = self.map_key(raw_key, visited);

        let mut value = self.map_with(raw_value, visited);
        if value.contains(UNION_MARKER) && !value.ends_with("[]") && !value.starts_with('(') {
            value = format!("({value})");
        }

        format!("{{ [key: {key}]: {value} }}")
    }

    /// Index signature keys can only be `string`, `number` or `symbol`.
    fn map_key(&self, raw_key: &str, visited: &mut VisitedSet) -> String {
        if raw_key.starts_with("struct{") {
            return "string".to_owned();
        }
        if builtins::is_numeric_key(raw_key) {
            return "number".to_owned();
        }

        let resolved = self.resolve_alias_chain(raw_key);
        let key = self.map_with(resolved, visited);
        if builtins::is_index_key(&key) {
            key
        } else {
            "string".to_owned()
        }
    }

    /// Follow alias entries until a name with no (or a self) entry.
    ///
    /// Has its own guard; the outer cycle guard is not involved.
    fn resolve_alias_chain<'s>(&'s self, name: &'s str) -> &'s str {
        let mut seen = HashSet::new();
        let mut current = name;
        while seen.insert(current) {
            match self.aliases.get(current) {
                Some(next) if next != current => current = next,
                _ => break,
            }
        }
        current
    }

    /// `struct{ A int; B string }` ⇒ `{ A: number; B: string }`.
    ///
    /// An entry without a separate type (an embedded field) becomes
    /// `unknown: any`.
    pub(super) fn map_inline_struct(&self, expr: &str, visited: &mut VisitedSet) -> String {
        let body = expr.strip_prefix("struct{").unwrap_or(expr);
        let body = body.strip_suffix('}').unwrap_or(body);

        let mut fields = Vec::new();
        for entry in split_top_level(body, ';') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }
            let parts: Vec<&str> = entry.split_whitespace().collect();
            if parts.len() < 2 {
                fields.push("unknown: any".to_owned());
                continue;
            }
            let ty = self.map_with(&parts[1..].join(" "), visited);
            fields.push(format!("{}: {}", parts[0], ty));
        }

        format!("{{ {} }}", fields.join("; "))
    }

    /// `Base[A, B]` ⇒ `Base<A', B'>`.
    ///
    /// An aliased base is itself mapped before the arguments are attached.
    pub(super) fn map_generic(&self, expr: &str, visited: &mut VisitedSet) -> String {
        let (base, params) = split_generic_type(expr);

        let args: Vec<String> = params
            .unwrap_or_default()
            .into_iter()
            .map(|param| {
                let ts = self.map_with(param, visited);
                if ts.is_empty() { ANY.to_owned() } else { ts }
            })
            .collect();

        let base = match self.aliases.get(base) {
            Some(target) if target != base => self.map_with(target, visited),
            _ => base.to_owned(),
        };

        format!("{}<{}>", base, args.join(", "))
    }
}

/// Split `map[K]V` at the `]` matching the opening bracket.
fn split_map(expr: &str) -> Option<(&str, &str)> {
    let inner = expr.strip_prefix("map[")?;
    let mut depth = 0usize;
    for (i, c) in inner.char_indices() {
        match c {
            '[' => depth += 1,
            ']' if depth == 0 => return Some((inner[..i].trim(), inner[i + 1..].trim())),
            ']' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Split on `sep` outside of any `{}` or `[]` nesting.
fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '{' | '[' => depth += 1,
            '}' | ']' => depth = depth.saturating_sub(1),
            c if c == sep && depth == 0 => {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}
