use clap::{Command, arg};

use crate::common::with_output_args;

pub const TAD_CMD: &str = "tad";

pub fn tad_input_args(cmd: Command) -> Command {
    cmd.arg(
        arg!(--tads <TADS>)
            .required(true)
            .help("TAD table: chr, start, end"),
    )
}

pub fn create_tad_cli() -> Command {
    let cmd = Command::new(TAD_CMD)
        .about("Associate elements with genes through the TADs the genes fall in.")
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
    with_output_args(tad_input_args(cmd))
}
