//! Go syntax tree → declarations.
//!
//! Only top-level `type` declarations are read. `type X struct{...}` becomes
//! a record, every other type spec (including `type X = T`) an alias.

use std::path::Path;

use arborium_tree_sitter::{Language, Node, Parser};
use tsmirror_core::{AliasDecl, Declarations, FieldDecl, RecordDecl, StructField, TypeNode};

use crate::typegen::typescript::tags;

use super::ExtractError;

/// A tree-sitter parser loaded with the Go grammar.
pub struct GoParser {
    parser: Parser,
}

/// One `field_declaration` of a struct body.
struct ParsedField {
    /// Empty for an embedded field.
    names: Vec<String>,
    ty: TypeNode,
    tag: Option<String>,
}

impl GoParser {
    pub fn new() -> Result<Self, ExtractError> {
        let language: Language = arborium_go::language().into();
        let mut parser = Parser::new();
        parser.set_language(&language)?;
        Ok(Self { parser })
    }

    /// Parse one file. Any syntax error aborts the whole file.
    pub fn parse_file(&mut self, path: &Path, source: &str) -> Result<Declarations, ExtractError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ExtractError::NoTree {
                path: path.to_path_buf(),
            })?;

        let root = tree.root_node();
        if root.has_error() {
            let at = first_error(root).unwrap_or(root).start_position();
            return Err(ExtractError::Syntax {
                path: path.to_path_buf(),
                line: at.row + 1,
                column: at.column + 1,
            });
        }

        let mut decls = Declarations::new();
        let mut cursor = root.walk();
        for node in root.named_children(&mut cursor) {
            if node.kind() == "type_declaration" {
                collect_type_declaration(node, source, &mut decls);
            }
        }

        tracing::debug!(
            path = %path.display(),
            records = decls.records.len(),
            aliases = decls.aliases.len(),
            "extracted file"
        );
        Ok(decls)
    }
}

/// Depth-first search for the first `ERROR` or `MISSING` node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

/// A single `type X ...` or a grouped `type ( ... )` block.
fn collect_type_declaration(node: Node<'_>, source: &str, decls: &mut Declarations) {
    let mut cursor = node.walk();
    for spec in node.named_children(&mut cursor) {
        let is_alias = match spec.kind() {
            "type_spec" => false,
            "type_alias" => true,
            _ => continue,
        };
        let Some(name) = spec.child_by_field_name("name") else {
            continue;
        };
        let name = text(name, source);
        let params = type_parameters(spec, source);
        let Some(ty) = spec.child_by_field_name("type") else {
            continue;
        };

        if !is_alias && ty.kind() == "struct_type" {
            let record = struct_fields(ty, source)
                .into_iter()
                .flat_map(field_decls)
                .fold(RecordDecl::new(name), RecordDecl::field)
                .generic_params(params);
            decls.records.push(record);
        } else {
            let underlying = type_node(ty, source).normalize();
            decls
                .aliases
                .push(AliasDecl::new(name, underlying).generic_params(params));
        }
    }
}

/// Names of `[K comparable, V any]`, in declaration order.
fn type_parameters(spec: Node<'_>, source: &str) -> Vec<String> {
    let Some(list) = spec.child_by_field_name("type_parameters") else {
        return Vec::new();
    };

    let mut params = Vec::new();
    let mut cursor = list.walk();
    let decls: Vec<_> = list.named_children(&mut cursor).collect();
    for decl in decls {
        let mut names = decl.walk();
        params.extend(
            decl.children_by_field_name("name", &mut names)
                .map(|n| text(n, source).to_owned()),
        );
    }
    params
}

/// Record fields: one per declared name; embedded fields keep their leaf name.
fn field_decls(field: ParsedField) -> Vec<FieldDecl> {
    let raw = field.ty.normalize();
    let with_tag = |decl: FieldDecl| match &field.tag {
        Some(tag) => decl.with_tag(tag.clone()),
        None => decl,
    };

    if field.names.is_empty() {
        let name = field.ty.embedded_name().unwrap_or_default();
        return vec![with_tag(FieldDecl::new(name, raw).embedded())];
    }

    field
        .names
        .iter()
        .map(|name| with_tag(FieldDecl::new(name.as_str(), raw.as_str())))
        .collect()
}

/// Fields of a `struct_type` node.
fn struct_fields(node: Node<'_>, source: &str) -> Vec<ParsedField> {
    let mut cursor = node.walk();
    let Some(list) = node
        .named_children(&mut cursor)
        .find(|n| n.kind() == "field_declaration_list")
    else {
        return Vec::new();
    };

    let mut cursor = list.walk();
    let decls: Vec<_> = list
        .named_children(&mut cursor)
        .filter(|n| n.kind() == "field_declaration")
        .collect();
    decls
        .into_iter()
        .map(|decl| parsed_field(decl, source))
        .collect()
}

fn parsed_field(decl: Node<'_>, source: &str) -> ParsedField {
    let mut cursor = decl.walk();
    let names: Vec<String> = decl
        .children_by_field_name("name", &mut cursor)
        .map(|n| text(n, source).to_owned())
        .collect();

    let mut ty = decl
        .child_by_field_name("type")
        .map_or(TypeNode::Unknown, |t| type_node(t, source));

    // Embedded `*Base` carries the star as a direct child.
    if names.is_empty() {
        let mut cursor = decl.walk();
        let starred = decl.children(&mut cursor).any(|c| c.kind() == "*");
        if starred {
            ty = pointer(ty);
        }
    }

    let tag = decl
        .child_by_field_name("tag")
        .map(|t| tag_text(t, source));

    ParsedField { names, ty, tag }
}

/// Tag literal without its delimiters.
fn tag_text(node: Node<'_>, source: &str) -> String {
    let raw = text(node, source);
    match node.kind() {
        "interpreted_string_literal" => tags::unquote(raw).unwrap_or_else(|| {
            let inner = raw.strip_prefix('"').unwrap_or(raw);
            inner.strip_suffix('"').unwrap_or(inner).to_owned()
        }),
        _ => {
            let inner = raw.strip_prefix('`').unwrap_or(raw);
            inner.strip_suffix('`').unwrap_or(inner).to_owned()
        }
    }
}

/// Structural node for a type expression; unsupported shapes are `Unknown`.
fn type_node(node: Node<'_>, source: &str) -> TypeNode {
    match node.kind() {
        "type_identifier" | "identifier" => TypeNode::ident(text(node, source)),
        "pointer_type" => first_named(node).map_or(TypeNode::Unknown, |inner| {
            pointer(type_node(inner, source))
        }),
        "qualified_type" => {
            match (
                node.child_by_field_name("package"),
                node.child_by_field_name("name"),
            ) {
                (Some(package), Some(name)) => {
                    TypeNode::qualified(text(package, source), text(name, source))
                }
                _ => TypeNode::Unknown,
            }
        }
        "slice_type" | "array_type" | "implicit_length_array_type" => {
            match field_type(node, "element", source) {
                TypeNode::Unknown => TypeNode::Unknown,
                elem => TypeNode::slice(elem),
            }
        }
        "map_type" => {
            match (
                field_type(node, "key", source),
                field_type(node, "value", source),
            ) {
                (TypeNode::Unknown, _) | (_, TypeNode::Unknown) => TypeNode::Unknown,
                (key, value) => TypeNode::map(key, value),
            }
        }
        "generic_type" => generic(node, source),
        "struct_type" => {
            let fields: Vec<_> = struct_fields(node, source)
                .into_iter()
                .map(|f| StructField { names: f.names, ty: f.ty })
                .collect();
            if fields.iter().any(|f| f.ty == TypeNode::Unknown) {
                TypeNode::Unknown
            } else {
                TypeNode::Struct(fields)
            }
        }
        "interface_type" => TypeNode::Interface,
        "function_type" => TypeNode::Func,
        "parenthesized_type" => {
            first_named(node).map_or(TypeNode::Unknown, |inner| type_node(inner, source))
        }
        _ => TypeNode::Unknown,
    }
}

/// `Base[A, B]`. Any `Unknown` argument, including a union constraint
/// (`A | B`), makes the whole instance `Unknown`.
fn generic(node: Node<'_>, source: &str) -> TypeNode {
    let base = field_type(node, "type", source);
    if base == TypeNode::Unknown {
        return TypeNode::Unknown;
    }

    let Some(arguments) = node.child_by_field_name("type_arguments") else {
        return base;
    };
    let mut cursor = arguments.walk();
    let children: Vec<_> = arguments
        .named_children(&mut cursor)
        .filter(|n| n.kind() != "comment")
        .collect();

    let args = children
        .into_iter()
        .map(|arg| {
            if arg.kind() != "type_elem" {
                return type_node(arg, source);
            }
            let mut cursor = arg.walk();
            let parts: Vec<_> = arg
                .named_children(&mut cursor)
                .filter(|n| n.kind() != "comment")
                .collect();
            match parts.as_slice() {
                [single] => type_node(*single, source),
                _ => TypeNode::Unknown,
            }
        })
        .collect::<Vec<_>>();

    if args.contains(&TypeNode::Unknown) {
        return TypeNode::Unknown;
    }
    TypeNode::generic(base, args)
}

fn pointer(inner: TypeNode) -> TypeNode {
    match inner {
        TypeNode::Unknown => TypeNode::Unknown,
        inner => TypeNode::pointer(inner),
    }
}

fn field_type(node: Node<'_>, field: &str, source: &str) -> TypeNode {
    node.child_by_field_name(field)
        .map_or(TypeNode::Unknown, |n| type_node(n, source))
}

fn first_named(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|n| n.kind() != "comment");
    found
}

fn text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    &source[node.byte_range()]
}
