//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

pub const DEFAULT_INPUT: &str = "./internal/model";

/// Go package directory, single `.go` file, or declarations JSON (positional).
pub fn input_path_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .value_parser(value_parser!(PathBuf))
        .default_value(DEFAULT_INPUT)
        .help("Go source directory, .go file, or declarations .json")
}

/// Declarations used as context for `map` (--decls).
pub fn decls_arg() -> Arg {
    Arg::new("decls")
        .long("decls")
        .value_name("INPUT")
        .value_parser(value_parser!(PathBuf))
        .help("Resolve aliases and records from this input")
}

/// Type expression (positional, required).
pub fn expr_arg() -> Arg {
    Arg::new("expr")
        .value_name("EXPR")
        .required(true)
        .help("Go type expression, or a record name with --expand")
}

/// Generic parameter in scope (--param, repeatable).
pub fn param_arg() -> Arg {
    Arg::new("param")
        .long("param")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Treat NAME as a generic parameter in scope")
}

/// Instantiate a generic record (--expand).
pub fn expand_arg() -> Arg {
    Arg::new("expand")
        .long("expand")
        .value_name("ARGS")
        .num_args(0..=1)
        .default_missing_value("")
        .help("Expand EXPR as a record with comma-separated type arguments")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file (atomically) instead of stdout")
}

/// Don't export declarations (--no-export).
pub fn no_export_arg() -> Arg {
    Arg::new("no_export")
        .long("no-export")
        .action(ArgAction::SetTrue)
        .help("Don't export declarations")
}

/// Don't write the generated-code header (--no-header).
pub fn no_header_arg() -> Arg {
    Arg::new("no_header")
        .long("no-header")
        .action(ArgAction::SetTrue)
        .help("Don't write the generated-code header")
}

/// Struct tag key for property names (--tag).
pub fn tag_arg() -> Arg {
    Arg::new("tag")
        .long("tag")
        .value_name("KEY")
        .default_value("json")
        .help("Struct tag key that supplies property names")
}

/// Empty property name policy (--empty-names).
pub fn empty_names_arg() -> Arg {
    Arg::new("empty_names")
        .long("empty-names")
        .value_name("POLICY")
        .default_value("emit")
        .value_parser(["emit", "fallback", "skip"])
        .help("Fields whose tag yields no name: emit as-is, fall back to the Go name, or skip")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}
