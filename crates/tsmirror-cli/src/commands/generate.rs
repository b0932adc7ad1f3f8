use std::io::Write;
use std::path::PathBuf;

use tsmirror_compiler::typegen::typescript;
use tsmirror_compiler::{Config, EmptyFieldName, convert_with_config};

use super::{CommandError, load_declarations};

pub struct GenerateArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub export: bool,
    pub header: bool,
    pub tag_key: String,
    pub empty_names: EmptyFieldName,
    pub color: bool,
}

impl GenerateArgs {
    fn config(&self) -> Config {
        Config::new()
            .export(self.export)
            .header(self.header)
            .tag_key(self.tag_key.as_str())
            .empty_field_names(self.empty_names)
            .colored(self.color)
    }
}

pub fn run(args: GenerateArgs) -> Result<(), CommandError> {
    if let Some(output) = &args.output {
        convert_with_config(&args.input, output, args.config())?;
        return Ok(());
    }

    let text = render(&args)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// TypeScript text for `args.input`, as it would be printed to stdout.
pub fn render(args: &GenerateArgs) -> Result<String, CommandError> {
    let decls = load_declarations(&args.input)?;
    Ok(typescript::emit_with_config(&decls, args.config()))
}
