//! Counting which elements fall into which gene's derived domains.

use std::collections::BTreeSet;

use log::{debug, trace, warn};

use arassoc_core::models::{GenomicInterval, IntervalStore};
use arassoc_overlaprs::OverlapJoin;

use crate::errors::DomainError;
use crate::models::{AssociationRecord, CountTable, DerivedInterval};

///
/// Deduplicated `(gene, element)` associations between derived domains and
/// an element store.
///
/// Elements are the query side of the join and domains the subject side. An
/// element overlapping several domain fragments that carry the same gene
/// label yields a single record.
///
/// Fails only when a hand-built [`DerivedInterval`] is malformed (`start >
/// end` or no chromosome); domains from this crate's builders always pass.
///
pub fn associations(
    domains: &[DerivedInterval],
    elements: &IntervalStore,
) -> Result<BTreeSet<AssociationRecord>, DomainError> {
    let domain_store = IntervalStore::build_sites(domains.iter().map(GenomicInterval::from))?;
    let pairs = elements.find_overlaps_par(&domain_store);
    let n_pairs = pairs.len();

    let records: BTreeSet<AssociationRecord> = pairs
        .into_iter()
        .map(|pair| {
            let element = &elements[pair.query_index];
            let domain = &domain_store[pair.subject_index];
            trace!("{} overlaps {}", element, domain);
            AssociationRecord {
                subject_label: domain.label.clone(),
                query_label: element.label.clone(),
            }
        })
        .collect();

    debug!(
        "{} element/domain overlap pairs collapsed to {} associations",
        n_pairs,
        records.len()
    );

    Ok(records)
}

///
/// Count, per gene, the distinct elements overlapping its domains.
///
/// The table is sorted by count descending with ties broken by gene label, so
/// repeated runs on the same input give identical tables. An empty table is
/// a valid result; see [`CountTable::empty_warning`].
///
pub fn aggregate(
    domains: &[DerivedInterval],
    elements: &IntervalStore,
) -> Result<CountTable, DomainError> {
    let records = associations(domains, elements)?;
    let table = CountTable::from_records(&records);

    if let Some(warning) = table.empty_warning() {
        warn!("{}", warning);
    }

    Ok(table)
}

///
/// Percentage of a universe (e.g. all genes considered) represented in the
/// table: `table.len() / universe_size * 100`.
///
pub fn proportion(table: &CountTable, universe_size: usize) -> Result<f64, DomainError> {
    if universe_size == 0 {
        return Err(DomainError::DivisionByZero {
            numerator: table.len(),
        });
    }
    Ok(table.len() as f64 / universe_size as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::{extend_domains, project_tads};
    use crate::models::RegulatoryDomainParams;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn iv(chr: &str, start: i64, end: i64, label: &str) -> GenomicInterval {
        GenomicInterval::new(chr, start, end, label)
    }

    fn domain(chr: &str, start: i64, end: i64, gene: &str) -> DerivedInterval {
        DerivedInterval {
            chr: chr.to_string(),
            start,
            end,
            label: gene.to_string(),
            source: format!("{}:{}-{}", chr, start, end),
        }
    }

    fn rows(table: &CountTable) -> Vec<(String, usize)> {
        table.iter().map(|r| (r.label.clone(), r.count)).collect()
    }

    #[fixture]
    fn ars() -> IntervalStore {
        IntervalStore::build(vec![
            iv("chr1", 300, 310, "AR1"),
            iv("chr1", 600, 610, "AR2"),
        ])
        .unwrap()
    }

    #[rstest]
    fn test_tad_policy_example(ars: IntervalStore) {
        let genes = IntervalStore::build(vec![iv("chr1", 100, 200, "GJB2")]).unwrap();
        let tads = IntervalStore::build(vec![iv("chr1", 50, 500, "chr1:50-500")]).unwrap();

        let table = aggregate(&project_tads(&genes, &tads), &ars).unwrap();
        assert_eq!(rows(&table), vec![("GJB2".to_string(), 1)]);

        let records = associations(&project_tads(&genes, &tads), &ars).unwrap();
        let elements: Vec<&str> = records.iter().map(|r| r.query_label.as_str()).collect();
        assert_eq!(elements, vec!["AR1"]);
    }

    #[rstest]
    fn test_regulatory_domain_example() {
        let tss = IntervalStore::build_sites(vec![iv("chr1", 1000, 1000, "MYO15A")]).unwrap();
        let elements = IntervalStore::build(vec![
            iv("chr1", 50_000, 50_010, "AR_IN"),
            iv("chr1", 110_000, 110_010, "AR_OUT"),
        ])
        .unwrap();
        let params = RegulatoryDomainParams::new(5000, 1000, 100_000).unwrap();
        let gene_filter: BTreeSet<&str> = ["MYO15A"].into_iter().collect();

        let domains = extend_domains(&tss, &gene_filter, &params).unwrap();
        let records = associations(&domains, &elements).unwrap();
        assert_eq!(
            records.into_iter().collect::<Vec<_>>(),
            vec![AssociationRecord {
                subject_label: "MYO15A".to_string(),
                query_label: "AR_IN".to_string(),
            }]
        );
    }

    #[rstest]
    fn test_overlapping_fragments_count_once(ars: IntervalStore) {
        let domains = vec![
            domain("chr1", 250, 350, "GENE"),
            domain("chr1", 290, 320, "GENE"),
            domain("chr1", 305, 400, "GENE"),
        ];
        let table = aggregate(&domains, &ars).unwrap();
        assert_eq!(rows(&table), vec![("GENE".to_string(), 1)]);
    }

    #[rstest]
    fn test_duplicate_element_does_not_inflate_count() {
        let domains = vec![domain("chr1", 0, 1000, "GENE")];
        let once = IntervalStore::build(vec![iv("chr1", 300, 310, "AR1")]).unwrap();
        let twice = IntervalStore::build(vec![
            iv("chr1", 300, 310, "AR1"),
            iv("chr1", 300, 310, "AR1"),
        ])
        .unwrap();

        assert_eq!(aggregate(&domains, &once).unwrap(), aggregate(&domains, &twice).unwrap());
    }

    #[rstest]
    fn test_aggregate_is_deterministic() {
        let domains = vec![
            domain("chr1", 0, 1000, "B"),
            domain("chr1", 0, 1000, "A"),
            domain("chr2", 0, 1000, "C"),
        ];
        let elements = IntervalStore::build(vec![
            iv("chr1", 10, 20, "e1"),
            iv("chr1", 30, 40, "e2"),
            iv("chr2", 10, 20, "e3"),
            iv("chr2", 50, 60, "e4"),
        ])
        .unwrap();

        let first = aggregate(&domains, &elements).unwrap();
        let second = aggregate(&domains, &elements).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            rows(&first),
            vec![
                ("A".to_string(), 2),
                ("B".to_string(), 2),
                ("C".to_string(), 2)
            ]
        );
    }

    #[rstest]
    fn test_no_overlap_is_empty_not_error(ars: IntervalStore) {
        let domains = vec![domain("chr9", 0, 1_000_000, "FAR")];
        let table = aggregate(&domains, &ars).unwrap();
        assert!(table.is_empty());
        assert!(table.empty_warning().is_some());
    }

    #[rstest]
    fn test_malformed_domain_is_rejected(ars: IntervalStore) {
        let domains = vec![domain("chr1", 500, 100, "BROKEN")];
        assert!(matches!(
            aggregate(&domains, &ars),
            Err(DomainError::Validation(_))
        ));
    }

    #[rstest]
    #[case(1, 4, 25.0)]
    #[case(2, 2, 100.0)]
    #[case(0, 10, 0.0)]
    fn test_proportion(#[case] n_genes: usize, #[case] universe: usize, #[case] expected: f64) {
        let records: Vec<AssociationRecord> = (0..n_genes)
            .map(|i| AssociationRecord {
                subject_label: format!("G{}", i),
                query_label: "AR".to_string(),
            })
            .collect();
        let table = CountTable::from_records(&records);
        assert_eq!(proportion(&table, universe).unwrap(), expected);
    }

    #[rstest]
    fn test_proportion_of_empty_universe() {
        let table = CountTable::default();
        assert_eq!(
            proportion(&table, 0),
            Err(DomainError::DivisionByZero { numerator: 0 })
        );
    }
}
