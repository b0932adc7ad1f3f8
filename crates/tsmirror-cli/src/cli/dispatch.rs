//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but keep clap-level choices
//! (color mode, policy names) until the `Into<*Args>` bridge resolves them.

use std::path::PathBuf;

use clap::ArgMatches;
use tsmirror_compiler::EmptyFieldName;

use super::ColorChoice;
use super::args::DEFAULT_INPUT;
use crate::commands::dump::DumpArgs;
use crate::commands::generate::GenerateArgs;
use crate::commands::map::MapArgs;

pub struct GenerateParams {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub export: bool,
    pub header: bool,
    pub tag_key: String,
    pub empty_names: EmptyFieldName,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            export: !m.get_flag("no_export"),
            header: !m.get_flag("no_header"),
            tag_key: parse_tag(m),
            empty_names: parse_empty_names(m),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        // Files never get escape codes, whatever the terminal says.
        let color = p.output.is_none() && p.color.should_colorize();
        Self {
            input: p.input,
            output: p.output,
            export: p.export,
            header: p.header,
            tag_key: p.tag_key,
            empty_names: p.empty_names,
            color,
        }
    }
}

pub struct MapParams {
    pub expr: String,
    pub decls: Option<PathBuf>,
    pub params: Vec<String>,
    pub expand: Option<String>,
    pub tag_key: String,
    pub empty_names: EmptyFieldName,
}

impl MapParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr: m.get_one::<String>("expr").cloned().unwrap_or_default(),
            decls: m.get_one::<PathBuf>("decls").cloned(),
            params: m
                .get_many::<String>("param")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            expand: m.get_one::<String>("expand").cloned(),
            tag_key: parse_tag(m),
            empty_names: parse_empty_names(m),
        }
    }
}

impl From<MapParams> for MapArgs {
    fn from(p: MapParams) -> Self {
        Self {
            expr: p.expr,
            decls: p.decls,
            params: p.params,
            expand: p.expand,
            tag_key: p.tag_key,
            empty_names: p.empty_names,
        }
    }
}

pub struct DumpParams {
    pub input: PathBuf,
    pub compact: bool,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            compact: m.get_flag("compact"),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            input: p.input,
            compact: p.compact,
        }
    }
}

fn parse_input(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("input")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
}

fn parse_tag(m: &ArgMatches) -> String {
    m.get_one::<String>("tag")
        .cloned()
        .unwrap_or_else(|| "json".to_owned())
}

fn parse_empty_names(m: &ArgMatches) -> EmptyFieldName {
    match m.get_one::<String>("empty_names").map(|s| s.as_str()) {
        Some("fallback") => EmptyFieldName::FieldName,
        Some("skip") => EmptyFieldName::Skip,
        _ => EmptyFieldName::Emit,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
