use clap::{Arg, Command, arg, value_parser};

use crate::common::with_output_args;

pub const GREAT_CMD: &str = "great";

pub fn great_input_args(cmd: Command) -> Command {
    cmd.arg(
        arg!(--tss <TSS>)
            .required(true)
            .help("TSS table: chr, start, end, strand, gene name"),
    )
    .arg(
        arg!(--config <CONFIG>)
            .required(false)
            .help("TOML file with basal_upstream, basal_downstream and max_extension"),
    )
    .arg(
        Arg::new("basal-upstream")
            .long("basal-upstream")
            .required(false)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64))
            .help("Basal window upstream of the TSS [default: 5000]"),
    )
    .arg(
        Arg::new("basal-downstream")
            .long("basal-downstream")
            .required(false)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64))
            .help("Basal window downstream of the TSS [default: 1000]"),
    )
    .arg(
        Arg::new("max-extension")
            .long("max-extension")
            .required(false)
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i64))
            .help("Extension applied on both sides of the basal window [default: 1000000]"),
    )
    .arg(
        Arg::new("chrom-sizes")
            .long("chrom-sizes")
            .required(false)
            .help("chrom.sizes file; when given, domains are clamped to chromosome bounds"),
    )
}

pub fn create_great_cli() -> Command {
    let cmd = Command::new(GREAT_CMD)
        .about("Associate elements with genes through GREAT-style regulatory domains.")
        .arg_required_else_help(true)
        .arg(
            arg!(--genes <GENES>)
                .required(true)
                .help("Gene table: chr, start, end, name (defines the gene universe)"),
        )
        .arg(
            arg!(--elements <ELEMENTS>)
                .required(true)
                .help("Element (e.g. accelerated region) table: chr, start, end, id"),
        );
    with_output_args(great_input_args(cmd))
}
