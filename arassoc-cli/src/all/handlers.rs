use anyhow::Result;
use clap::ArgMatches;

use crate::common::{load_elements, load_genes, new_report, write_report};
use crate::great::handlers::great_policy;
use crate::tad::handlers::tad_policy;

pub fn run_all(matches: &ArgMatches) -> Result<()> {
    let genes = load_genes(matches)?;
    let elements = load_elements(matches)?;

    let mut report = new_report(matches);
    report.push(tad_policy(matches, &genes, &elements)?);
    report.push(great_policy(matches, &genes, &elements)?);

    write_report(matches, &report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::all::cli::create_all_cli;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::fs;

    #[rstest]
    fn test_run_all_reports_both_policies() {
        let dir = tempfile::tempdir().unwrap();
        let path = |name: &str| dir.path().join(name).to_string_lossy().into_owned();

        fs::write(path("genes.bed"), "chr1\t100\t200\tGJB2\nchr1\t900000\t900100\tFAR\n").unwrap();
        fs::write(path("tads.bed"), "chr1\t50\t500\n").unwrap();
        fs::write(path("tss.bed"), "chr1\t100\t100\t+\tGJB2\nchr1\t900000\t900000\t-\tFAR\n").unwrap();
        fs::write(path("ars.bed"), "chr1\t300\t310\tAR1\nchr1\t600\t610\tAR2\n").unwrap();

        let matches = create_all_cli().get_matches_from([
            "all".to_string(),
            "--genes".to_string(),
            path("genes.bed"),
            "--tads".to_string(),
            path("tads.bed"),
            "--tss".to_string(),
            path("tss.bed"),
            "--elements".to_string(),
            path("ars.bed"),
            "--max-extension".to_string(),
            "0".to_string(),
            "--output".to_string(),
            path("out.tsv"),
        ]);
        run_all(&matches).unwrap();

        let text = fs::read_to_string(path("out.tsv")).unwrap();
        let rows: Vec<&str> = text.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(
            rows,
            vec![
                "policy\tlabel\tcount",
                "tad\tGJB2\t1",
                "regulatory_domain\tGJB2\t2",
            ]
        );
    }
}
