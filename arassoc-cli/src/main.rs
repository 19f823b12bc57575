mod all;
mod common;
mod great;
mod tad;

use anyhow::Result;
use clap::{ArgAction, Command, arg};
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "arassoc";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Associate noncoding elements with the genes they could regulate, via TADs or GREAT-style regulatory domains.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose ...)
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v info, -vv debug)"),
        )
        .subcommand(tad::cli::create_tad_cli())
        .subcommand(great::cli::create_great_cli())
        .subcommand(all::cli::create_all_cli())
}

/// `-v` sets the baseline level; filters from `env` (normally `RUST_LOG`)
/// are applied on top of it.
fn logging_builder<'a>(verbosity: u8, env: impl Into<Env<'a>>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(match verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .parse_env(env);
    builder
}

fn init_logging(verbosity: u8) {
    logging_builder(verbosity, Env::default()).init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        //
        // TAD PROJECTION
        //
        Some((tad::cli::TAD_CMD, matches)) => {
            tad::handlers::run_tad(matches)?;
        }

        //
        // REGULATORY DOMAINS
        //
        Some((great::cli::GREAT_CMD, matches)) => {
            great::handlers::run_great(matches)?;
        }

        //
        // BOTH POLICIES
        //
        Some((all::cli::ALL_CMD, matches)) => {
            all::handlers::run_all(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
