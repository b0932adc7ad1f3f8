use std::io::Write;
use std::path::PathBuf;

use super::{CommandError, load_declarations};

pub struct DumpArgs {
    pub input: PathBuf,
    pub compact: bool,
}

pub fn run(args: DumpArgs) -> Result<(), CommandError> {
    let json = render(&args)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

/// Extracted declarations as JSON, loadable again as `.json` input.
pub fn render(args: &DumpArgs) -> Result<String, CommandError> {
    let decls = load_declarations(&args.input)?;
    let json = if args.compact {
        serde_json::to_string(&decls)?
    } else {
        decls.to_json_pretty()?
    };
    Ok(json)
}
