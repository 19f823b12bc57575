use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use arassoc_core::models::IntervalStore;
use arassoc_core::utils::read_tads;
use arassoc_domains::report::{AssociationPolicy, PolicyReport};
use arassoc_domains::{aggregate, project_tads};

use crate::common::{load_elements, load_genes, new_report, required_path, write_report};

/// TAD policy on already-loaded genes and elements.
pub fn tad_policy(
    matches: &ArgMatches,
    genes: &IntervalStore,
    elements: &IntervalStore,
) -> Result<PolicyReport> {
    let path = required_path(matches, "tads")?;
    let tads = read_tads(path).with_context(|| format!("Failed to load TADs from {}", path.display()))?;

    let projected = project_tads(genes, &tads);
    let counts = aggregate(&projected, elements)?;
    let universe = genes.labels().len();

    info!(
        "tad policy: {} of {} genes have associated elements",
        counts.len(),
        universe
    );

    Ok(PolicyReport::new(AssociationPolicy::Tad, counts, universe)?)
}

pub fn run_tad(matches: &ArgMatches) -> Result<()> {
    let genes = load_genes(matches)?;
    let elements = load_elements(matches)?;

    let mut report = new_report(matches);
    report.push(tad_policy(matches, &genes, &elements)?);

    write_report(matches, &report)
}
