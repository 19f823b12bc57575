//! Demo: run both association policies on gene, TAD, TSS and element tables.
//!
//! Usage:
//!   cargo run -p arassoc-domains --example association_demo -- <genes> <tads> <tss> <elements>
//!
//! Prints the top 20 genes of each policy and the share of the gene universe
//! that picked up at least one element.

use std::env;
use std::path::Path;

use arassoc_core::utils::{read_elements, read_genes, read_tads, read_tss};
use arassoc_domains::models::{CountTable, RegulatoryDomainParams};
use arassoc_domains::{aggregate, extend_domains, project_tads, proportion};

fn print_table(label: &str, table: &CountTable, universe: usize, max: usize) {
    let pct = proportion(table, universe).expect("gene universe is empty");
    println!(
        "\n=== {} ({} of {} genes, {:.2}%) ===",
        label,
        table.len(),
        universe,
        pct
    );
    for row in table.iter().take(max) {
        println!("{}\t{}", row.label, row.count);
    }
    if table.len() > max {
        println!("... ({} more)", table.len() - max);
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 5 {
        eprintln!("Usage: association_demo <genes> <tads> <tss> <elements>");
        std::process::exit(1);
    }

    let genes = read_genes(Path::new(&args[1])).expect("Failed to load genes");
    let tads = read_tads(Path::new(&args[2])).expect("Failed to load TADs");
    let tss = read_tss(Path::new(&args[3])).expect("Failed to load TSS records");
    let elements = read_elements(Path::new(&args[4])).expect("Failed to load elements");

    let universe = genes.labels();

    let tad_counts = aggregate(&project_tads(&genes, &tads), &elements).expect("TAD aggregation");
    print_table("TAD policy", &tad_counts, universe.len(), 20);

    let domains = extend_domains(&tss, &universe, &RegulatoryDomainParams::default())
        .expect("regulatory domain construction");
    let great_counts = aggregate(&domains, &elements).expect("regulatory domain aggregation");
    print_table("Regulatory domain policy", &great_counts, universe.len(), 20);
}
