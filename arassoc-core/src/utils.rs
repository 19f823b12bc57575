use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::LazyLock;

use flate2::read::MultiGzDecoder;
use log::{debug, info};
use regex::Regex;

use crate::errors::LoadError;
use crate::models::{GenomicInterval, IntervalStore, Strand};

/// Trailing transcript copy suffix on TSS names, e.g. `MYO15A.2` or `GJB2_1`.
static NUMERIC_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)[._]\d+$").expect("static regex"));

/// Column layouts understood by [`read_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// `chr  start  end  name`
    Genes,
    /// `chr  start  end`; labelled `chr:start-end`
    Tads,
    /// `chr  start  end  id`
    Elements,
    /// `chr  start  end  strand  name`
    Tss,
}

impl TableKind {
    fn min_columns(&self) -> usize {
        match self {
            TableKind::Tads => 3,
            TableKind::Genes | TableKind::Elements => 4,
            TableKind::Tss => 5,
        }
    }
}

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>, LoadError> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).map_err(|source| LoadError::FileRead {
        path: path.display().to_string(),
        source,
    })?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Remove a trailing `.N` or `_N` copy number from a gene name.
///
/// Hyphenated names such as `NKX2-1` are left untouched.
pub fn strip_numeric_suffix(name: &str) -> &str {
    match NUMERIC_SUFFIX.captures(name).and_then(|c| c.get(1)) {
        Some(m) => m.as_str(),
        None => name,
    }
}

fn parse_coord(field: &str, line: usize, what: &str) -> Result<i64, LoadError> {
    field.trim().parse::<i64>().map_err(|e| LoadError::Parse {
        line,
        reason: format!("invalid {} '{}': {}", what, field, e),
    })
}

fn parse_line(
    parts: &[&str],
    kind: TableKind,
    line: usize,
) -> Result<GenomicInterval, LoadError> {
    if parts.len() < kind.min_columns() {
        return Err(LoadError::Parse {
            line,
            reason: format!(
                "expected at least {} columns, found {}",
                kind.min_columns(),
                parts.len()
            ),
        });
    }

    let chr = parts[0].trim();
    let start = parse_coord(parts[1], line, "start")?;
    let end = parse_coord(parts[2], line, "end")?;

    let interval = match kind {
        TableKind::Tads => {
            GenomicInterval::new(chr, start, end, &format!("{}:{}-{}", chr, start, end))
        }
        TableKind::Genes | TableKind::Elements => {
            GenomicInterval::new(chr, start, end, parts[3].trim())
        }
        TableKind::Tss => {
            let strand: Strand = parts[3].trim().parse()?;
            GenomicInterval::new(chr, start, end, strip_numeric_suffix(parts[4].trim()))
                .with_strand(strand)
        }
    };

    Ok(interval)
}

fn is_header_row(parts: &[&str]) -> bool {
    parts.len() >= 3
        && parts[1].trim().parse::<i64>().is_err()
        && parts[2].trim().parse::<i64>().is_err()
}

///
/// Parse a tab-delimited coordinate table.
///
/// `browser`, `track` and `#` lines are skipped, as is a leading column
/// header row, recognised when neither its start nor its end column is a
/// number. A first row with only one bad coordinate is a parse error, not a
/// header. Columns beyond the ones required by `kind` are ignored.
///
pub fn read_table<R: BufRead>(reader: R, kind: TableKind) -> Result<Vec<GenomicInterval>, LoadError> {
    let mut intervals = Vec::new();
    let mut first_data_line = true;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = i + 1;

        if line.trim().is_empty()
            || line.starts_with("browser")
            || line.starts_with("track")
            || line.starts_with('#')
        {
            continue;
        }

        let parts: Vec<&str> = line.split('\t').collect();

        if first_data_line {
            first_data_line = false;
            if is_header_row(&parts) {
                debug!("skipping header row: {}", line);
                continue;
            }
        }

        intervals.push(parse_line(&parts, kind, line_no)?);
    }

    Ok(intervals)
}

fn read_path(path: &Path, kind: TableKind) -> Result<Vec<GenomicInterval>, LoadError> {
    let reader = get_dynamic_reader(path)?;
    let intervals = read_table(reader, kind)?;
    info!("read {} {:?} records from {}", intervals.len(), kind, path.display());
    Ok(intervals)
}

/// Load a gene coordinate table into a store.
pub fn read_genes(path: &Path) -> Result<IntervalStore, LoadError> {
    Ok(IntervalStore::build(read_path(path, TableKind::Genes)?)?)
}

/// Load a TAD coordinate table into a store.
pub fn read_tads(path: &Path) -> Result<IntervalStore, LoadError> {
    Ok(IntervalStore::build(read_path(path, TableKind::Tads)?)?)
}

/// Load an accelerated-region (or any labelled element) table into a store.
pub fn read_elements(path: &Path) -> Result<IntervalStore, LoadError> {
    Ok(IntervalStore::build(read_path(path, TableKind::Elements)?)?)
}

/// Load a TSS/promoter table into a site store. Zero-width records are
/// allowed and gene names lose any numeric copy suffix.
pub fn read_tss(path: &Path) -> Result<IntervalStore, LoadError> {
    Ok(IntervalStore::build_sites(read_path(path, TableKind::Tss)?)?)
}

///
/// Read a two-column `chrom  size` file.
///
pub fn read_chrom_sizes(path: &Path) -> Result<HashMap<String, i64>, LoadError> {
    let reader = get_dynamic_reader(path)?;
    let mut chrom_sizes: HashMap<String, i64> = HashMap::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let (Some(chr), Some(size)) = (parts.next(), parts.next()) else {
            continue;
        };
        chrom_sizes.insert(chr.to_string(), parse_coord(size, i + 1, "chromosome size")?);
    }

    Ok(chrom_sizes)
}
