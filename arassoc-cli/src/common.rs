use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, arg};
use log::info;

use arassoc_core::models::IntervalStore;
use arassoc_core::utils::{read_elements, read_genes};
use arassoc_domains::report::AssociationReport;

/// Output flags every association subcommand accepts.
pub fn with_output_args(cmd: Command) -> Command {
    cmd.arg(arg!(-o --output <OUTPUT>).required(false).help("Output path (default: stdout)"))
        .arg(
            arg!(--json)
                .action(ArgAction::SetTrue)
                .help("Write the report as JSON instead of TSV"),
        )
        .arg(
            Arg::new("genome")
                .long("genome")
                .required(false)
                .help("Genome build label echoed in the report (e.g. hg38)"),
        )
}

pub fn required_path<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a Path> {
    matches
        .get_one::<String>(name)
        .map(Path::new)
        .with_context(|| format!("--{} is required", name))
}

pub fn load_genes(matches: &ArgMatches) -> Result<IntervalStore> {
    let path = required_path(matches, "genes")?;
    read_genes(path).with_context(|| format!("Failed to load genes from {}", path.display()))
}

pub fn load_elements(matches: &ArgMatches) -> Result<IntervalStore> {
    let path = required_path(matches, "elements")?;
    read_elements(path).with_context(|| format!("Failed to load elements from {}", path.display()))
}

pub fn new_report(matches: &ArgMatches) -> AssociationReport {
    AssociationReport::new(matches.get_one::<String>("genome").cloned())
}

pub fn write_report(matches: &ArgMatches, report: &AssociationReport) -> Result<()> {
    let as_json = matches.get_flag("json");

    let mut writer: Box<dyn Write> = match matches.get_one::<String>("output") {
        Some(path) => {
            info!("writing report to {}", path);
            let file =
                File::create(path).with_context(|| format!("Failed to create output file {}", path))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    if as_json {
        serde_json::to_writer_pretty(&mut writer, report).context("Failed to serialize report")?;
        writeln!(writer)?;
    } else {
        report.write_tsv(&mut writer)?;
    }
    writer.flush()?;

    Ok(())
}
