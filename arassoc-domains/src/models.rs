use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use arassoc_core::ValidationError;
use arassoc_core::models::GenomicInterval;

/// Default GREAT basal domain: 5 kb upstream of the TSS.
pub const DEFAULT_BASAL_UPSTREAM: i64 = 5_000;
/// Default GREAT basal domain: 1 kb downstream of the TSS.
pub const DEFAULT_BASAL_DOWNSTREAM: i64 = 1_000;
/// Default GREAT extension: up to 1 Mb on each side.
pub const DEFAULT_MAX_EXTENSION: i64 = 1_000_000;

///
/// An interval whose coordinates come from one collection (a TAD, or a window
/// around a TSS) and whose label names a gene from another.
///
/// The same region legitimately appears once per associated gene.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DerivedInterval {
    pub chr: String,
    pub start: i64,
    pub end: i64,
    /// Gene the region is attributed to.
    pub label: String,
    /// Label of the record the coordinates were taken from.
    pub source: String,
}

impl From<&DerivedInterval> for GenomicInterval {
    fn from(value: &DerivedInterval) -> Self {
        GenomicInterval::new(&value.chr, value.start, value.end, &value.label)
    }
}

impl Display for DerivedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.chr, self.start, self.end, self.label, self.source
        )
    }
}

/// Window sizes for basal-plus-extension regulatory domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegulatoryDomainParams {
    pub basal_upstream: i64,
    pub basal_downstream: i64,
    pub max_extension: i64,
}

impl Default for RegulatoryDomainParams {
    fn default() -> Self {
        RegulatoryDomainParams {
            basal_upstream: DEFAULT_BASAL_UPSTREAM,
            basal_downstream: DEFAULT_BASAL_DOWNSTREAM,
            max_extension: DEFAULT_MAX_EXTENSION,
        }
    }
}

impl RegulatoryDomainParams {
    pub fn new(
        basal_upstream: i64,
        basal_downstream: i64,
        max_extension: i64,
    ) -> Result<Self, ValidationError> {
        let params = RegulatoryDomainParams {
            basal_upstream,
            basal_downstream,
            max_extension,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            ("basal_upstream", self.basal_upstream),
            ("basal_downstream", self.basal_downstream),
            ("max_extension", self.max_extension),
        ] {
            if value < 0 {
                return Err(ValidationError::NegativeParameter { name, value });
            }
        }
        Ok(())
    }
}

/// "Element `query_label` intersects the domain of gene `subject_label`."
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AssociationRecord {
    pub subject_label: String,
    pub query_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountRow {
    pub label: String,
    pub count: usize,
}

///
/// Per-label counts ordered by count descending, ties broken by label.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CountTable {
    rows: Vec<CountRow>,
}

impl CountTable {
    /// Count distinct `query_label`s per `subject_label`. Duplicate records
    /// are counted once.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a AssociationRecord>,
    {
        let mut groups: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for record in records {
            groups
                .entry(record.subject_label.as_str())
                .or_default()
                .insert(record.query_label.as_str());
        }

        let mut rows: Vec<CountRow> = groups
            .into_iter()
            .map(|(label, members)| CountRow {
                label: label.to_string(),
                count: members.len(),
            })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));

        CountTable { rows }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CountRow> {
        self.rows.iter()
    }

    /// Number of distinct labels in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.rows.iter().find(|r| r.label == label).map(|r| r.count)
    }

    /// Sum of all counts, i.e. the number of distinct associations.
    pub fn total(&self) -> usize {
        self.rows.iter().map(|r| r.count).sum()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.label.as_str())
    }

    /// A zero-association outcome is data, not a failure; this surfaces it
    /// for callers that want to report it.
    pub fn empty_warning(&self) -> Option<EmptyResultWarning> {
        self.is_empty().then_some(EmptyResultWarning)
    }
}

impl<'a> IntoIterator for &'a CountTable {
    type Item = &'a CountRow;
    type IntoIter = std::slice::Iter<'a, CountRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Returned by [`CountTable::empty_warning`] when no element overlapped any
/// domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyResultWarning;

impl Display for EmptyResultWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no element overlapped any domain; the count table is empty")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn rec(gene: &str, element: &str) -> AssociationRecord {
        AssociationRecord {
            subject_label: gene.to_string(),
            query_label: element.to_string(),
        }
    }

    #[rstest]
    fn test_derived_interval_display_and_conversion() {
        let domain = DerivedInterval {
            chr: "chr1".to_string(),
            start: -104_000,
            end: 102_000,
            label: "GENE_X".to_string(),
            source: "chr1:1000-1000".to_string(),
        };
        assert_eq!(
            domain.to_string(),
            "chr1\t-104000\t102000\tGENE_X\tchr1:1000-1000"
        );

        let iv = GenomicInterval::from(&domain);
        assert_eq!((iv.start, iv.end, iv.label.as_str()), (-104_000, 102_000, "GENE_X"));
    }

    #[rstest]
    fn test_count_table_ordering() {
        let records = vec![
            rec("B", "ar1"),
            rec("A", "ar1"),
            rec("C", "ar1"),
            rec("C", "ar2"),
            rec("C", "ar3"),
            rec("A", "ar2"),
            rec("B", "ar9"),
        ];
        let table = CountTable::from_records(&records);
        let rows: Vec<(&str, usize)> = table.iter().map(|r| (r.label.as_str(), r.count)).collect();
        assert_eq!(rows, vec![("C", 3), ("A", 2), ("B", 2)]);
        assert_eq!(table.total(), 7);
        assert_eq!(table.get("A"), Some(2));
        assert_eq!(table.get("Z"), None);
    }

    #[rstest]
    fn test_count_table_ignores_duplicates() {
        let records = vec![rec("A", "ar1"), rec("A", "ar1"), rec("A", "ar1")];
        let table = CountTable::from_records(&records);
        assert_eq!(table.get("A"), Some(1));
    }

    #[rstest]
    fn test_empty_warning() {
        let table = CountTable::from_records(&Vec::<AssociationRecord>::new());
        assert!(table.is_empty());
        assert_eq!(table.empty_warning(), Some(EmptyResultWarning));
        let table = CountTable::from_records(&[rec("A", "ar1")]);
        assert_eq!(table.empty_warning(), None);
    }

    #[rstest]
    #[case(-1, 0, 0, "basal_upstream")]
    #[case(0, -1, 0, "basal_downstream")]
    #[case(0, 0, -5, "max_extension")]
    fn test_params_reject_negative(
        #[case] up: i64,
        #[case] down: i64,
        #[case] ext: i64,
        #[case] expected: &str,
    ) {
        match RegulatoryDomainParams::new(up, down, ext) {
            Err(ValidationError::NegativeParameter { name, .. }) => assert_eq!(name, expected),
            other => panic!("expected NegativeParameter, got {:?}", other),
        }
    }

    #[rstest]
    fn test_params_deserialize_fills_defaults() {
        let params: RegulatoryDomainParams = serde_json::from_str(r#"{"max_extension": 100000}"#).unwrap();
        assert_eq!(params.max_extension, 100_000);
        assert_eq!(params.basal_upstream, DEFAULT_BASAL_UPSTREAM);
        assert_eq!(params.basal_downstream, DEFAULT_BASAL_DOWNSTREAM);
    }
}
