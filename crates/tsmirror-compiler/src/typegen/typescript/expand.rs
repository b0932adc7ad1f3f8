//! Inline expansion of an instantiated generic record.

use tsmirror_core::Declarations;

use super::builtins::ANY;
use super::mapper::{Substitutions, TypeMapper};
use super::render::inline_object;
use super::{Config, Emitter};

/// Render record `name` instantiated with `args` as an inline object type.
///
/// Each generic parameter is replaced by the mapped text of the matching
/// argument, so `Page[T]` with an `Items []T` field expanded by `User`
/// renders `{ items: User[] }`.
/// Embedded records become an intersection: `Base & { ... }`.
///
/// Returns `None` for an unknown record or a wrong argument count.
pub fn expand_record(
    decls: &Declarations,
    config: &Config,
    name: &str,
    args: &[&str],
) -> Option<String> {
    let record = decls.record(name)?;
    if record.generic_params.len() != args.len() {
        tracing::debug!(
            record = name,
            expected = record.generic_params.len(),
            given = args.len(),
            "argument count mismatch"
        );
        return None;
    }

    let emitter = Emitter::new(decls, config.clone());
    let outer = TypeMapper::new(&emitter.aliases, &emitter.records);
    let substitutions: Substitutions = record
        .generic_params
        .iter()
        .zip(args)
        .map(|(param, arg)| {
            let ts = outer.map(arg);
            (param.clone(), if ts.is_empty() { ANY.to_owned() } else { ts })
        })
        .collect();

    let mapper = outer.substitutions(&substitutions);
    let (extends, fields) = emitter.record_members(record, mapper);

    let mut parts = extends;
    parts.push(inline_object(&fields));
    Some(parts.join(" & "))
}
