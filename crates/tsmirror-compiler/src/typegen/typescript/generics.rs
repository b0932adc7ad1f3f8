//! Splitting of generic instantiations.

/// Split `Base[P1, P2, ...]` into the base name and its type arguments.
///
/// Only commas at bracket depth zero separate arguments, so
/// `Pair[Map[K, V], T]` yields `["Map[K, V]", "T"]`. Arguments are trimmed
/// and empty ones dropped.
///
/// Returns `None` for the arguments when the text is not generic: no `[`, or
/// the last `]` does not come after the first `[` (`Broken[Param`).
///
/// `Base[]` is generic with zero written arguments and yields exactly one
/// empty argument, which the mapper renders as `any`.
pub fn split_generic_type(expr: &str) -> (&str, Option<Vec<&str>>) {
    let (Some(open), Some(close)) = (expr.find('['), expr.rfind(']')) else {
        return (expr, None);
    };
    if close <= open {
        return (expr, None);
    }

    let base = &expr[..open];
    let inner = &expr[open + 1..close];
    if inner.is_empty() {
        return (base, Some(vec![""]));
    }

    let mut params = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                push_trimmed(&mut params, &inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    push_trimmed(&mut params, &inner[start..]);

    (base, Some(params))
}

fn push_trimmed<'a>(params: &mut Vec<&'a str>, part: &'a str) {
    let part = part.trim();
    if !part.is_empty() {
        params.push(part);
    }
}
