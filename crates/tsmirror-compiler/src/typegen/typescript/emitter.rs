//! Core emitter struct and main emit logic.

use std::collections::HashSet;

use tsmirror_core::{AliasDecl, AliasTable, Colors, Declarations, FieldDecl, RecordDecl, RecordTable};

use super::builtins::ANY;
use super::generics::split_generic_type;
use super::mapper::TypeMapper;
use super::tags::field_name_from_tag;
use super::{Config, EmptyFieldName};

pub(super) const HEADER: &str = "// Code generated by tsmirror. DO NOT EDIT.";

/// TypeScript emitter over one run's declarations.
pub struct Emitter<'a> {
    pub(super) decls: &'a Declarations,
    pub(super) config: Config,

    pub(super) aliases: AliasTable,
    pub(super) records: RecordTable,
    /// Alias names already written; later duplicates are skipped
    pub(super) emitted_aliases: HashSet<String>,
    /// Output buffer
    pub(super) output: String,
}

/// One record member after name resolution and type mapping.
pub(super) struct RenderedField {
    pub(super) name: String,
    pub(super) ty: String,
}

impl<'a> Emitter<'a> {
    pub fn new(decls: &'a Declarations, config: Config) -> Self {
        Self {
            decls,
            config,
            aliases: decls.alias_table(),
            records: decls.record_table(),
            emitted_aliases: HashSet::new(),
            output: String::new(),
        }
    }

    pub(super) fn c(&self) -> Colors {
        self.config.colors
    }

    /// Emit aliases (input order) followed by records (input order).
    pub fn emit(mut self) -> String {
        if self.config.header {
            let header = self.c().paint_comment(HEADER);
            self.output.push_str(&header);
            self.output.push_str("\n\n");
        }

        let decls = self.decls;
        for alias in &decls.aliases {
            if !self.emitted_aliases.insert(alias.name.clone()) {
                tracing::debug!(name = %alias.name, "skipping duplicate alias");
                continue;
            }
            self.emit_alias(alias);
        }

        for record in &decls.records {
            self.emit_record(record);
        }

        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }

    fn emit_alias(&mut self, alias: &AliasDecl) {
        let mapped = TypeMapper::new(&self.aliases, &self.records)
            .type_params(&alias.generic_params)
            .map(&alias.underlying_raw_type);
        let body = if mapped.is_empty() { ANY.to_owned() } else { mapped };

        tracing::debug!(name = %alias.name, %body, "emitting alias");
        let name = declared_name(&alias.name, &alias.generic_params);
        self.emit_type_decl(&name, &body);
    }

    fn emit_record(&mut self, record: &RecordDecl) {
        let mapper =
            TypeMapper::new(&self.aliases, &self.records).type_params(&record.generic_params);
        let (extends, fields) = self.record_members(record, mapper);

        tracing::debug!(
            name = %record.name,
            fields = fields.len(),
            extends = extends.len(),
            "emitting record"
        );
        let name = declared_name(&record.name, &record.generic_params);
        self.emit_interface(&name, &extends, &fields);
    }

    /// Resolve a record's `extends` clauses and properties with `mapper`.
    pub(super) fn record_members(
        &self,
        record: &RecordDecl,
        mapper: TypeMapper<'_>,
    ) -> (Vec<String>, Vec<RenderedField>) {
        let mut extends = Vec::new();
        let mut fields = Vec::new();
        for field in &record.fields {
            let tag_name = self.tag_name(field);

            if field.embedded && tag_name.as_deref().is_none_or(str::is_empty) {
                match self.embedded_base(field) {
                    Some(base) => extends.push(mapper.map(base)),
                    None => tracing::warn!(
                        record = %record.name,
                        embedded = %field.raw_type,
                        "dropping embedded type that is not a record of this run"
                    ),
                }
                continue;
            }

            let Some(name) = self.field_name(record, field, tag_name) else {
                continue;
            };

            let ty = match mapper.map(&field.raw_type) {
                ty if ty.is_empty() => ANY.to_owned(),
                ty => ty,
            };
            fields.push(RenderedField { name, ty });
        }
        (extends, fields)
    }

    /// Name from the field's tag, `None` when the field carries no tag.
    fn tag_name(&self, field: &FieldDecl) -> Option<String> {
        let raw = field
            .tag
            .as_deref()?
            .trim_matches(|c: char| c == '`' || c.is_whitespace());
        if raw.is_empty() {
            return None;
        }
        Some(field_name_from_tag(raw, &self.config.tag_key))
    }

    /// Property name for a regular field, `None` when the field is skipped.
    fn field_name(
        &self,
        record: &RecordDecl,
        field: &FieldDecl,
        tag_name: Option<String>,
    ) -> Option<String> {
        let name = tag_name.unwrap_or_else(|| field.name.clone());
        if !name.is_empty() {
            return Some(name);
        }

        match self.config.empty_field_names {
            EmptyFieldName::Emit => {
                tracing::warn!(
                    record = %record.name,
                    field = %field.name,
                    "tag resolves to an empty property name"
                );
                Some(name)
            }
            EmptyFieldName::FieldName => Some(field.name.clone()),
            EmptyFieldName::Skip => {
                tracing::debug!(record = %record.name, field = %field.name, "skipping field");
                None
            }
        }
    }

    /// Type expression of an embedded field that names a record of this run.
    ///
    /// `*Base`, `Base` and `Base[T]` qualify; the pointer is dropped since
    /// `extends` has no nullable form.
    fn embedded_base<'f>(&self, field: &'f FieldDecl) -> Option<&'f str> {
        let expr = field.raw_type.trim();
        let expr = expr.strip_prefix('*').unwrap_or(expr);
        let (base, _) = split_generic_type(expr);
        self.records.contains(base).then_some(expr)
    }
}

/// `Name` or `Name<P1, P2>`.
pub(super) fn declared_name(name: &str, params: &[String]) -> String {
    if params.is_empty() {
        name.to_owned()
    } else {
        format!("{}<{}>", name, params.join(", "))
    }
}
