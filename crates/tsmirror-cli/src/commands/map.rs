use std::io::Write;
use std::path::PathBuf;

use tsmirror_compiler::typegen::typescript::{TypeMapper, expand_record, split_generic_type};
use tsmirror_compiler::{Config, EmptyFieldName};
use tsmirror_core::Declarations;

use super::{CommandError, load_declarations};

pub struct MapArgs {
    pub expr: String,
    pub decls: Option<PathBuf>,
    pub params: Vec<String>,
    /// Comma-separated type arguments; `Some("")` expands without arguments.
    pub expand: Option<String>,
    pub tag_key: String,
    pub empty_names: EmptyFieldName,
}

pub fn run(args: MapArgs) -> Result<(), CommandError> {
    let text = render(&args)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}")?;
    Ok(())
}

/// Mapped TypeScript text for `args.expr`.
pub fn render(args: &MapArgs) -> Result<String, CommandError> {
    let decls = match &args.decls {
        Some(input) => load_declarations(input)?,
        None => Declarations::new(),
    };

    if let Some(expand) = &args.expand {
        let config = Config::new()
            .tag_key(args.tag_key.as_str())
            .empty_field_names(args.empty_names);
        let name = args.expr.trim();
        let type_args = split_type_args(name, expand);
        let type_args: Vec<&str> = type_args.iter().map(String::as_str).collect();
        return expand_record(&decls, &config, name, &type_args).ok_or_else(|| {
            CommandError::Expand {
                name: args.expr.clone(),
            }
        });
    }

    let aliases = decls.alias_table();
    let records = decls.record_table();
    let mapper = TypeMapper::new(&aliases, &records).type_params(&args.params);
    Ok(mapper.map(&args.expr))
}

/// Split `--expand` text on top-level commas, so `Map[K, V], T` is two arguments.
fn split_type_args(name: &str, expand: &str) -> Vec<String> {
    let expand = expand.trim();
    if expand.is_empty() {
        return Vec::new();
    }

    let wrapped = format!("{name}[{expand}]");
    match split_generic_type(&wrapped) {
        (_, Some(parts)) => parts.into_iter().map(str::to_owned).collect(),
        (_, None) => vec![expand.to_owned()],
    }
}
