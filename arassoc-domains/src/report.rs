//! Presentation model for association results.
//!
//! Nothing here computes associations; it only bundles finished
//! [`CountTable`]s with their universe statistics and renders them.

use std::fmt::{self, Display};
use std::io::{self, Write};

use serde::Serialize;

use crate::aggregate::proportion;
use crate::errors::DomainError;
use crate::models::CountTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssociationPolicy {
    /// Whole TADs attributed to the genes they contain.
    Tad,
    /// Basal-plus-extension windows around TSSs.
    RegulatoryDomain,
}

impl Display for AssociationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssociationPolicy::Tad => write!(f, "tad"),
            AssociationPolicy::RegulatoryDomain => write!(f, "regulatory_domain"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PolicyReport {
    pub policy: AssociationPolicy,
    pub universe_size: usize,
    pub associated_genes: usize,
    pub associations: usize,
    /// Percentage of the universe with at least one association.
    pub proportion: f64,
    pub counts: CountTable,
}

impl PolicyReport {
    pub fn new(
        policy: AssociationPolicy,
        counts: CountTable,
        universe_size: usize,
    ) -> Result<Self, DomainError> {
        let proportion = proportion(&counts, universe_size)?;
        Ok(PolicyReport {
            policy,
            universe_size,
            associated_genes: counts.len(),
            associations: counts.total(),
            proportion,
            counts,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AssociationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genome: Option<String>,
    pub policies: Vec<PolicyReport>,
}

impl AssociationReport {
    pub fn new(genome: Option<String>) -> Self {
        AssociationReport {
            genome,
            policies: Vec::new(),
        }
    }

    pub fn push(&mut self, policy: PolicyReport) {
        self.policies.push(policy);
    }

    ///
    /// Write the report as tab-separated text: a `#` summary line per policy,
    /// then `policy  label  count` rows.
    ///
    pub fn write_tsv<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        if let Some(genome) = &self.genome {
            writeln!(writer, "# genome: {}", genome)?;
        }
        for p in &self.policies {
            writeln!(
                writer,
                "# {}: {} of {} genes associated ({:.2}%), {} associations",
                p.policy, p.associated_genes, p.universe_size, p.proportion, p.associations
            )?;
        }
        writeln!(writer, "policy\tlabel\tcount")?;
        for p in &self.policies {
            for row in &p.counts {
                writeln!(writer, "{}\t{}\t{}", p.policy, row.label, row.count)?;
            }
        }
        Ok(())
    }
}
