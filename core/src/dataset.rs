//! Loading benchmark results from a list of candidate files

use crate::error::{Error, Result};
use crate::record::BenchmarkRecord;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Benchmark results loaded from one CSV file
#[derive(Debug, Clone)]
pub struct BenchmarkDataset {
    source: PathBuf,
    records: Vec<BenchmarkRecord>,
}

impl BenchmarkDataset {
    /// Build a dataset from records already in memory
    pub fn new(source: impl Into<PathBuf>, records: Vec<BenchmarkRecord>) -> Self {
        Self {
            source: source.into(),
            records,
        }
    }

    /// Parse a results CSV
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(path, file)
    }

    /// Parse results from any reader; `source` is only used for reporting
    pub fn from_reader<R: Read>(source: impl Into<PathBuf>, reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let records = reader
            .deserialize()
            .collect::<std::result::Result<Vec<BenchmarkRecord>, _>>()?;
        Ok(Self::new(source, records))
    }

    /// Try each candidate in order and return the first one that parses
    pub fn load_first<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        for candidate in candidates {
            let path = candidate.as_ref();
            match Self::from_path(path) {
                Ok(dataset) => {
                    tracing::info!(
                        path = %path.display(),
                        records = dataset.len(),
                        "Loaded benchmark results"
                    );
                    return Ok(dataset);
                }
                Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "Candidate not found");
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable candidate");
                }
            }
        }

        Err(Error::InputNotFound {
            attempted: candidates.iter().map(|p| p.as_ref().to_path_buf()).collect(),
        })
    }

    /// File the records were read from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in file order
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Successful runs in file order
    pub fn successful(&self) -> impl Iterator<Item = &BenchmarkRecord> {
        self.records.iter().filter(|r| r.is_success())
    }

    /// Number of successful runs
    pub fn successful_count(&self) -> usize {
        self.successful().count()
    }

    /// Distinct algorithm names over all rows, in order of first appearance
    pub fn algorithms(&self) -> Vec<&str> {
        first_appearance(self.records.iter())
    }

    /// Distinct algorithm names over successful rows, in order of first appearance
    pub fn successful_algorithms(&self) -> Vec<&str> {
        first_appearance(self.successful())
    }

    /// Distinct sizes over all rows, ascending
    pub fn sizes(&self) -> Vec<u64> {
        self.records
            .iter()
            .map(|r| r.size)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct sizes over successful rows, ascending
    pub fn successful_sizes(&self) -> Vec<u64> {
        self.successful()
            .map(|r| r.size)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Largest size over all rows
    pub fn max_size(&self) -> Option<u64> {
        self.records.iter().map(|r| r.size).max()
    }

    /// Successful `(size, time)` observations of one algorithm, in file order
    pub fn observations(&self, algorithm: &str) -> Vec<(f64, f64)> {
        self.successful()
            .filter(|r| r.algorithm == algorithm)
            .map(|r| (r.size as f64, r.time_ms))
            .collect()
    }
}

fn first_appearance<'a>(records: impl Iterator<Item = &'a BenchmarkRecord>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for record in records {
        if !seen.contains(&record.algorithm.as_str()) {
            seen.push(record.algorithm.as_str());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const RESULTS: &str = "\
Algoritmo,Tempo_ms,Tamanho_Array,Sucesso
Insertion Sort,1.250,1000,Sim
std::sort,0.080,1000,Sim
Insertion Sort,30.000,5000,Nao
std::sort,0.450,5000,Sim
Quick Sort,0.300,5000,Sim
";

    fn dataset() -> BenchmarkDataset {
        BenchmarkDataset::from_reader("results.csv", RESULTS.as_bytes()).unwrap()
    }

    #[test]
    fn test_parse_results() {
        let data = dataset();
        assert_eq!(data.len(), 5);
        assert_eq!(data.successful_count(), 4);
        assert_eq!(data.source(), Path::new("results.csv"));
    }

    #[test]
    fn test_algorithms_keep_first_appearance_order() {
        let data = dataset();
        assert_eq!(data.algorithms(), vec!["Insertion Sort", "std::sort", "Quick Sort"]);
    }

    #[test]
    fn test_sizes_and_max_size() {
        let data = dataset();
        assert_eq!(data.sizes(), vec![1000, 5000]);
        assert_eq!(data.successful_sizes(), vec![1000, 5000]);
        assert_eq!(data.max_size(), Some(5000));
    }

    #[test]
    fn test_observations_skip_failed_runs() {
        let data = dataset();
        assert_eq!(data.observations("Insertion Sort"), vec![(1000.0, 1.25)]);
        assert_eq!(
            data.observations("std::sort"),
            vec![(1000.0, 0.08), (5000.0, 0.45)]
        );
        assert!(data.observations("Heap Sort").is_empty());
    }

    #[test]
    fn test_load_first_prefers_earlier_candidates() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");
        fs::write(&first, RESULTS).unwrap();
        fs::write(
            &second,
            "Algoritmo,Tempo_ms,Tamanho_Array,Sucesso\nstd::sort,1.0,10,Sim\n",
        )
        .unwrap();

        let missing = dir.path().join("missing.csv");
        let data = BenchmarkDataset::load_first(&[&missing, &first, &second]).unwrap();
        assert_eq!(data.source(), first.as_path());
        assert_eq!(data.len(), 5);
    }

    #[test]
    fn test_load_first_skips_unparseable_candidate() {
        let dir = TempDir::new().unwrap();
        let broken = dir.path().join("broken.csv");
        let good = dir.path().join("good.csv");
        fs::write(&broken, "a,b\n1,2\n").unwrap();
        fs::write(&good, RESULTS).unwrap();

        let data = BenchmarkDataset::load_first(&[&broken, &good]).unwrap();
        assert_eq!(data.source(), good.as_path());
    }

    #[test]
    fn test_load_first_reports_every_attempt() {
        let dir = TempDir::new().unwrap();
        let candidates = vec![dir.path().join("a.csv"), dir.path().join("b.csv")];

        match BenchmarkDataset::load_first(&candidates) {
            Err(Error::InputNotFound { attempted }) => assert_eq!(attempted, candidates),
            other => panic!("Expected InputNotFound, got {:?}", other),
        }
    }
}
