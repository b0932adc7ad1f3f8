//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("tsmirror")
        .about("TypeScript declarations from Go structs and type aliases")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(map_command())
        .subcommand(dump_command())
}

/// Convert a Go package to a TypeScript declaration file.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate TypeScript declarations")
        .override_usage(
            "\
  tsmirror generate [INPUT]
  tsmirror generate [INPUT] -o <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  tsmirror generate                         # ./internal/model to stdout
  tsmirror generate ./model -o types.ts     # write file
  tsmirror generate decls.json --no-header  # from extracted declarations
  tsmirror generate ./model --tag db        # names from `db:"..."` tags"#,
        )
        .arg(input_path_arg())
        .arg(output_file_arg())
        .arg(no_export_arg())
        .arg(no_header_arg())
        .arg(tag_arg())
        .arg(empty_names_arg())
        .arg(color_arg())
}

/// Map a single type expression.
pub fn map_command() -> Command {
    Command::new("map")
        .about("Map one Go type expression to TypeScript")
        .override_usage(
            "\
  tsmirror map <EXPR> [--decls <INPUT>] [--param <NAME>]...
  tsmirror map <RECORD> --decls <INPUT> --expand <ARGS>",
        )
        .after_help(
            r#"EXAMPLES:
  tsmirror map 'map[string][]int'               # { [key: string]: number[] }
  tsmirror map '*[]string'                      # string[] | null
  tsmirror map 'Result[T]' --param T            # Result<T>
  tsmirror map UserID --decls ./model           # resolve aliases from a package
  tsmirror map Page --decls ./model --expand 'User'"#,
        )
        .arg(expr_arg())
        .arg(decls_arg())
        .arg(param_arg())
        .arg(expand_arg())
        .arg(tag_arg())
        .arg(empty_names_arg())
}

/// Print extracted declarations as JSON.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Print extracted declarations as JSON")
        .override_usage("  tsmirror dump [INPUT] [--compact]")
        .arg(input_path_arg())
        .arg(compact_arg())
}
