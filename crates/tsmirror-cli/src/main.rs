mod cli;
mod commands;
mod logging;

use cli::{DumpParams, GenerateParams, MapParams, build_cli};

fn main() {
    logging::init();
    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into())
        }
        Some(("map", m)) => {
            let params = MapParams::from_matches(m);
            commands::map::run(params.into())
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into())
        }
        _ => unreachable!("clap should have caught this"),
    };

    if let Err(err) = result {
        commands::report(&err);
        std::process::exit(1);
    }
}
