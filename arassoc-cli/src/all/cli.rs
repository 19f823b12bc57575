use clap::{Command, arg};

use crate::common::with_output_args;
use crate::great::cli::great_input_args;
use crate::tad::cli::tad_input_args;

pub const ALL_CMD: &str = "all";

pub fn create_all_cli() -> Command {
    let cmd = Command::new(ALL_CMD)
        .about("Run both the TAD and the regulatory-domain policies into one report.")
        .arg_required_else_help(true)
        .arg(
            arg!(--genes <GENES>)
                .required(true)
                .help("Gene table: chr, start, end, name"),
        )
        .arg(
            arg!(--elements <ELEMENTS>)
                .required(true)
                .help("Element (e.g. accelerated region) table: chr, start, end, id"),
        );
    with_output_args(great_input_args(tad_input_args(cmd)))
}
