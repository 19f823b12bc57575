use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{debug, info};

use arassoc_core::models::IntervalStore;
use arassoc_core::utils::{read_chrom_sizes, read_tss};
use arassoc_domains::models::RegulatoryDomainParams;
use arassoc_domains::report::{AssociationPolicy, PolicyReport};
use arassoc_domains::{aggregate, extend_domains, trim_domains};

use crate::common::{load_elements, load_genes, new_report, required_path, write_report};

/// Resolve domain parameters: defaults, then the `--config` file, then
/// individual flags.
pub fn domain_params(matches: &ArgMatches) -> Result<RegulatoryDomainParams> {
    let mut params = match matches.get_one::<String>("config") {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path))?;
            toml::from_str::<RegulatoryDomainParams>(&text)
                .with_context(|| format!("Failed to parse config file {}", path))?
        }
        None => RegulatoryDomainParams::default(),
    };

    if let Some(v) = matches.get_one::<i64>("basal-upstream") {
        params.basal_upstream = *v;
    }
    if let Some(v) = matches.get_one::<i64>("basal-downstream") {
        params.basal_downstream = *v;
    }
    if let Some(v) = matches.get_one::<i64>("max-extension") {
        params.max_extension = *v;
    }

    params.validate()?;
    debug!("regulatory domain parameters: {:?}", params);

    Ok(params)
}

/// Regulatory-domain policy on already-loaded genes and elements.
pub fn great_policy(
    matches: &ArgMatches,
    genes: &IntervalStore,
    elements: &IntervalStore,
) -> Result<PolicyReport> {
    let params = domain_params(matches)?;

    let path = required_path(matches, "tss")?;
    let tss = read_tss(path).with_context(|| format!("Failed to load TSS records from {}", path.display()))?;

    let universe = genes.labels();
    let mut domains = extend_domains(&tss, &universe, &params)?;

    if let Some(sizes_path) = matches.get_one::<String>("chrom-sizes") {
        let sizes = read_chrom_sizes(Path::new(sizes_path))
            .with_context(|| format!("Failed to load chrom sizes from {}", sizes_path))?;
        let before = domains.len();
        domains = trim_domains(&domains, &sizes);
        info!("trimmed domains to chromosome bounds: {} -> {}", before, domains.len());
    }

    let counts = aggregate(&domains, elements)?;

    info!(
        "regulatory domain policy: {} of {} genes have associated elements",
        counts.len(),
        universe.len()
    );

    Ok(PolicyReport::new(
        AssociationPolicy::RegulatoryDomain,
        counts,
        universe.len(),
    )?)
}

pub fn run_great(matches: &ArgMatches) -> Result<()> {
    let genes = load_genes(matches)?;
    let elements = load_elements(matches)?;

    let mut report = new_report(matches);
    report.push(great_policy(matches, &genes, &elements)?);

    write_report(matches, &report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::great::cli::create_great_cli;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn write(dir: &Path, name: &str, contents: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    struct Inputs {
        _dir: tempfile::TempDir,
        genes: String,
        tss: String,
        elements: String,
        out: String,
    }

    #[fixture]
    fn inputs() -> Inputs {
        let dir = tempfile::tempdir().unwrap();
        let genes = write(dir.path(), "genes.bed", "chr1\t1000\t30000\tMYO15A\nchr2\t10\t20\tOTHER\n");
        let tss = write(
            dir.path(),
            "tss.bed",
            "chr1\t1000\t1000\t+\tMYO15A.1\nchr3\t1000\t1000\t+\tNOT_IN_UNIVERSE\n",
        );
        let elements = write(
            dir.path(),
            "ars.bed",
            "chr1\t50000\t50010\tAR_IN\nchr1\t110000\t110010\tAR_OUT\nchr3\t1000\t1010\tAR_FILTERED\n",
        );
        let out = dir.path().join("out.json").to_string_lossy().into_owned();
        Inputs {
            _dir: dir,
            genes,
            tss,
            elements,
            out,
        }
    }

    #[rstest]
    fn test_run_great_json(inputs: Inputs) {
        let matches = create_great_cli().get_matches_from([
            "great",
            "--genes",
            inputs.genes.as_str(),
            "--tss",
            inputs.tss.as_str(),
            "--elements",
            inputs.elements.as_str(),
            "--max-extension",
            "100000",
            "--genome",
            "hg38",
            "--json",
            "-o",
            inputs.out.as_str(),
        ]);
        run_great(&matches).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&inputs.out).unwrap()).unwrap();
        assert_eq!(value["genome"], "hg38");
        let policy = &value["policies"][0];
        assert_eq!(policy["policy"], "regulatory_domain");
        assert_eq!(policy["universe_size"], 2);
        assert_eq!(policy["proportion"], 50.0);
        assert_eq!(policy["counts"][0]["label"], "MYO15A");
        assert_eq!(policy["counts"][0]["count"], 1);
    }

    #[rstest]
    fn test_domain_params_layering(inputs: Inputs) {
        let config = Path::new(&inputs.out).with_file_name("params.toml");
        fs::write(&config, "basal_upstream = 2000\nmax_extension = 50000\n").unwrap();

        let matches = create_great_cli().get_matches_from([
            "great",
            "--genes",
            inputs.genes.as_str(),
            "--tss",
            inputs.tss.as_str(),
            "--elements",
            inputs.elements.as_str(),
            "--config",
            config.to_str().unwrap(),
            "--max-extension",
            "7",
        ]);
        let params = domain_params(&matches).unwrap();
        assert_eq!(
            params,
            RegulatoryDomainParams {
                basal_upstream: 2000,
                basal_downstream: 1000,
                max_extension: 7,
            }
        );
    }

    #[rstest]
    fn test_negative_extension_is_rejected(inputs: Inputs) {
        let matches = create_great_cli().get_matches_from([
            "great",
            "--genes",
            inputs.genes.as_str(),
            "--tss",
            inputs.tss.as_str(),
            "--elements",
            inputs.elements.as_str(),
            "--max-extension",
            "-1",
        ]);
        let err = run_great(&matches).unwrap_err();
        assert!(err.to_string().contains("max_extension"));
    }
}
