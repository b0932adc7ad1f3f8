//! Fixed Go → TypeScript tables.

pub(super) const ANY: &str = "any";
pub(super) const NULLABLE_SUFFIX: &str = " | null";
pub(super) const UNION_MARKER: &str = " | ";
pub(super) const INDEX_SIGNATURE_PREFIX: &str = "{ [key:";

/// Exact-match overrides checked before every structural rule.
///
/// Pointers to time/URL values still serialize as plain strings.
pub(super) fn special_case(expr: &str) -> Option<&'static str> {
    match expr {
        "[]byte" => Some("Uint8Array"),
        "struct{}" => Some(ANY),
        "func" => Some("(...args: any[]) => any"),
        "*time.Time" | "*url.URL" => Some("string"),
        _ => None,
    }
}

/// Primitive and well-known named types.
pub(super) fn basic_type(expr: &str) -> Option<&'static str> {
    let ts = match expr {
        "string" => "string",
        "int" | "int8" | "int16" | "int32" | "int64" | "uint" | "uint8" | "uint16" | "uint32"
        | "uint64" | "uintptr" | "byte" | "rune" | "float32" | "float64" => "number",
        "bool" => "boolean",
        "time.Time" | "url.URL" => "string",
        "interface{}" | "*interface{}" | "interface {}" | "*interface {}" => ANY,
        "complex64" | "complex128" => ANY,
        "decimal.Decimal" | "primitive.ObjectID" | "primitive.Decimal128" | "uuid.UUID"
        | "pgtype.UUID" => "string",
        "sql.NullString" => "string | null",
        "sql.NullInt64" | "sql.NullInt32" | "sql.NullFloat64" => "number | null",
        "pq.NullTime" | "sql.NullTime" => "string | null",
        "sql.NullBool" => "boolean | null",
        "unsafe.Pointer" => ANY,
        "error" => "Error",
        _ => return None,
    };
    Some(ts)
}

/// Integer key types that index a map by number.
pub(super) fn is_numeric_key(expr: &str) -> bool {
    matches!(
        expr,
        "int"
            | "int8"
            | "int16"
            | "int32"
            | "int64"
            | "uint"
            | "uint8"
            | "uint16"
            | "uint32"
            | "uint64"
    )
}

/// TypeScript only allows these as index signature key types.
pub(super) fn is_index_key(ts: &str) -> bool {
    matches!(ts, "string" | "number" | "symbol")
}

/// Names the tables above do not know and that cannot be passed through:
/// other packages' types and leftover pointer/array syntax.
pub(super) fn is_foreign(expr: &str) -> bool {
    expr.contains('.') || expr.contains(['*', '[', ']'])
}

/// Exported Go names start with an upper-case letter.
pub(super) fn is_exported_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}
