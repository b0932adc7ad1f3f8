//! Structural type expressions and their canonical text form.
//!
//! Extraction builds a [`TypeNode`] from the source syntax tree; the mapper
//! only ever sees the normalized string. Grammar:
//!
//! | node                 | text                          |
//! |----------------------|-------------------------------|
//! | identifier           | `Name`                        |
//! | pointer              | `*T`                          |
//! | qualified name       | `pkg.Name`                    |
//! | array / slice        | `[]T`                         |
//! | map                  | `map[K]V`                     |
//! | generic instance     | `Base[A, B]`                  |
//! | inline record        | `struct{ a A; b B }` / `struct{}` |
//! | interface / any      | `interface{}`                 |
//! | function             | `func`                        |
//! | anything else        | empty string                  |
//!
//! An unknown part anywhere inside a node empties the whole text.

use std::fmt::Write;

/// One field of an inline record type.
///
/// `names` is empty for an embedded field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    pub names: Vec<String>,
    pub ty: TypeNode,
}

impl StructField {
    pub fn named(name: impl Into<String>, ty: TypeNode) -> Self {
        Self {
            names: vec![name.into()],
            ty,
        }
    }

    pub fn embedded(ty: TypeNode) -> Self {
        Self { names: vec![], ty }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeNode {
    Ident(String),
    Pointer(Box<TypeNode>),
    Qualified { package: String, name: String },
    Slice(Box<TypeNode>),
    Map { key: Box<TypeNode>, value: Box<TypeNode> },
    Generic { base: Box<TypeNode>, args: Vec<TypeNode> },
    Struct(Vec<StructField>),
    Interface,
    Func,
    /// A shape the normalizer has no text for (channels, unions, ...).
    Unknown,
}

impl TypeNode {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    pub fn pointer(inner: TypeNode) -> Self {
        Self::Pointer(Box::new(inner))
    }

    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Qualified {
            package: package.into(),
            name: name.into(),
        }
    }

    pub fn slice(elem: TypeNode) -> Self {
        Self::Slice(Box::new(elem))
    }

    pub fn map(key: TypeNode, value: TypeNode) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn generic(base: TypeNode, args: Vec<TypeNode>) -> Self {
        Self::Generic {
            base: Box::new(base),
            args,
        }
    }

    /// Leaf name used for an embedded field of this type.
    ///
    /// `*pkg.Base[T]` embeds as `Base`.
    pub fn embedded_name(&self) -> Option<&str> {
        match self {
            TypeNode::Ident(name) => Some(name),
            TypeNode::Qualified { name, .. } => Some(name),
            TypeNode::Pointer(inner) => inner.embedded_name(),
            TypeNode::Generic { base, .. } => base.embedded_name(),
            _ => None,
        }
    }

    /// Canonical text of this node, empty when any part is [`TypeNode::Unknown`].
    pub fn normalize(&self) -> String {
        let mut out = String::new();
        if self.is_known() {
            self.write_normalized(&mut out);
        }
        out
    }

    /// Whether no part of this node is [`TypeNode::Unknown`].
    pub fn is_known(&self) -> bool {
        match self {
            TypeNode::Unknown => false,
            TypeNode::Pointer(inner) | TypeNode::Slice(inner) => inner.is_known(),
            TypeNode::Map { key, value } => key.is_known() && value.is_known(),
            TypeNode::Generic { base, args } => base.is_known() && args.iter().all(Self::is_known),
            TypeNode::Struct(fields) => fields.iter().all(|f| f.ty.is_known()),
            TypeNode::Ident(_) | TypeNode::Qualified { .. } | TypeNode::Interface | TypeNode::Func => {
                true
            }
        }
    }

    fn write_normalized(&self, out: &mut String) {
        match self {
            TypeNode::Ident(name) => out.push_str(name),
            TypeNode::Pointer(inner) => {
                out.push('*');
                inner.write_normalized(out);
            }
            TypeNode::Qualified { package, name } => {
                let _ = write!(out, "{package}.{name}");
            }
            TypeNode::Slice(elem) => {
                out.push_str("[]");
                elem.write_normalized(out);
            }
            TypeNode::Map { key, value } => {
                out.push_str("map[");
                key.write_normalized(out);
                out.push(']');
                value.write_normalized(out);
            }
            TypeNode::Generic { base, args } => {
                base.write_normalized(out);
                out.push('[');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    arg.write_normalized(out);
                }
                out.push(']');
            }
            TypeNode::Struct(fields) => write_struct(fields, out),
            TypeNode::Interface => out.push_str("interface{}"),
            TypeNode::Func => out.push_str("func"),
            TypeNode::Unknown => {}
        }
    }
}

fn write_struct(fields: &[StructField], out: &mut String) {
    if fields.is_empty() {
        out.push_str("struct{}");
        return;
    }

    // One `name type` entry per declared name: the mapper reads the first
    // token of an entry as the field name.
    let mut entries = Vec::new();
    for field in fields {
        let ty = field.ty.normalize();
        if field.names.is_empty() {
            entries.push(ty);
            continue;
        }
        for name in &field.names {
            entries.push(format!("{name} {ty}"));
        }
    }

    out.push_str("struct{ ");
    out.push_str(&entries.join("; "));
    out.push_str(" }");
}
