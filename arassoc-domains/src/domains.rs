//! Construction of gene-labelled candidate regulatory territories.
//!
//! Two independent policies are provided:
//!
//! - [`project_tads`]: every TAD a gene touches becomes, in full, that gene's
//!   territory.
//! - [`extend_domains`]: a GREAT-style basal window around each TSS, widened
//!   by a fixed extension on both sides.
//!
//! Both return new [`DerivedInterval`] values and never modify their inputs.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap};

use log::{debug, info, trace};

use arassoc_core::models::IntervalStore;
use arassoc_overlaprs::overlap;

use crate::errors::DomainError;
use crate::models::{DerivedInterval, RegulatoryDomainParams};

///
/// Re-label TADs with the genes they overlap.
///
/// For every (gene, TAD) overlap pair one [`DerivedInterval`] is emitted,
/// spanning the whole TAD and carrying the gene's label. Any overlap, however
/// small, attributes the entire TAD to the gene, so a TAD touching two genes
/// appears twice with different labels. No deduplication happens here: the
/// output length equals the number of overlap pairs.
///
pub fn project_tads(genes: &IntervalStore, tads: &IntervalStore) -> Vec<DerivedInterval> {
    let projected: Vec<DerivedInterval> = overlap(genes, tads)
        .into_iter()
        .map(|pair| {
            let gene = &genes[pair.query_index];
            let tad = &tads[pair.subject_index];
            DerivedInterval {
                chr: tad.chr.clone(),
                start: tad.start,
                end: tad.end,
                label: gene.label.clone(),
                source: tad.label.clone(),
            }
        })
        .collect();

    info!(
        "projected {} TADs onto {} genes: {} gene-labelled TAD spans",
        tads.len(),
        genes.len(),
        projected.len()
    );

    projected
}

///
/// Build basal-plus-extension regulatory domains around transcription start
/// sites.
///
/// Only sites whose label is in `gene_filter` are used. For each site the
/// domain is
///
/// ```text
/// [start - basal_upstream - max_extension, end + basal_downstream + max_extension)
/// ```
///
/// This deliberately diverges from canonical GREAT in two ways:
///
/// - the basal offsets are applied to the literal start and end whatever the
///   strand, so a minus-strand gene gets its "upstream" window on the left;
/// - the full `max_extension` is always applied, without stopping at the
///   basal domain of a neighbouring gene.
///
/// Reported association numbers depend on exactly this construction, so it
/// is kept as is. Coordinates may go negative or run past the chromosome end;
/// see [`trim_domains`] for optional clamping.
///
pub fn extend_domains<S>(
    tss: &IntervalStore,
    gene_filter: &BTreeSet<S>,
    params: &RegulatoryDomainParams,
) -> Result<Vec<DerivedInterval>, DomainError>
where
    S: Borrow<str> + Ord,
{
    params.validate()?;

    let upstream = params.basal_upstream.saturating_add(params.max_extension);
    let downstream = params.basal_downstream.saturating_add(params.max_extension);

    let domains: Vec<DerivedInterval> = tss
        .all()
        .filter(|site| gene_filter.contains(site.label.as_str()))
        .map(|site| DerivedInterval {
            chr: site.chr.clone(),
            start: site.start.saturating_sub(upstream),
            end: site.end.saturating_add(downstream),
            label: site.label.clone(),
            source: format!("{}:{}-{}", site.chr, site.start, site.end),
        })
        .collect();

    for domain in &domains {
        trace!("regulatory domain {}", domain);
    }

    debug!(
        "extended {} of {} TSS records into regulatory domains ({:?})",
        domains.len(),
        tss.len(),
        params
    );

    Ok(domains)
}

///
/// Clamp domains to `[0, chrom_size)`.
///
/// Domains on chromosomes missing from `chrom_sizes` are dropped, as are
/// domains left empty after clamping. This is never applied implicitly.
///
pub fn trim_domains(
    domains: &[DerivedInterval],
    chrom_sizes: &HashMap<String, i64>,
) -> Vec<DerivedInterval> {
    domains
        .iter()
        .filter_map(|d| {
            let chrom_size = *chrom_sizes.get(&d.chr)?;
            let start = d.start.clamp(0, chrom_size);
            let end = d.end.clamp(0, chrom_size);
            if start >= end {
                None
            } else {
                Some(DerivedInterval {
                    start,
                    end,
                    ..d.clone()
                })
            }
        })
        .collect()
}
