//! Aggregates behind the text report and the complexity chart

use serde::Serialize;
use sortbench_core::BenchmarkDataset;
use std::collections::BTreeMap;

/// Fastest successful run at one input size
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestEntry {
    /// Input size
    pub size: u64,
    /// Winning algorithm
    pub algorithm: String,
    /// Its time in milliseconds
    pub time_ms: f64,
}

/// One line of the overall ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry {
    /// Algorithm name
    pub algorithm: String,
    /// Mean time over every successful run
    pub mean_ms: f64,
    /// Number of successful runs averaged
    pub runs: usize,
}

/// Everything the text and JSON reports print
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    /// Source file of the results
    pub source: String,
    /// Rows in the file
    pub total_runs: usize,
    /// Rows with `Sucesso == "Sim"`
    pub successful_runs: usize,
    /// Algorithms over all rows, in order of first appearance
    pub algorithms: Vec<String>,
    /// Sizes over all rows, ascending
    pub sizes: Vec<u64>,
    /// Fastest algorithm per successful size, ascending by size
    pub best_per_size: Vec<BestEntry>,
    /// Algorithms by mean time, fastest first
    pub ranking: Vec<RankEntry>,
}

impl ReportSummary {
    /// Aggregate a dataset
    pub fn from_dataset(dataset: &BenchmarkDataset) -> Self {
        Self {
            source: dataset.source().display().to_string(),
            total_runs: dataset.len(),
            successful_runs: dataset.successful_count(),
            algorithms: dataset.algorithms().into_iter().map(String::from).collect(),
            sizes: dataset.sizes(),
            best_per_size: best_per_size(dataset),
            ranking: ranking(dataset),
        }
    }
}

/// Fastest successful algorithm at each size
///
/// On equal times the run that appears first in the file wins. NaN times
/// are skipped.
pub fn best_per_size(dataset: &BenchmarkDataset) -> Vec<BestEntry> {
    let mut best: BTreeMap<u64, BestEntry> = BTreeMap::new();

    for record in dataset.successful().filter(|r| !r.time_ms.is_nan()) {
        match best.get_mut(&record.size) {
            Some(current) if record.time_ms < current.time_ms => {
                current.algorithm = record.algorithm.clone();
                current.time_ms = record.time_ms;
            }
            Some(_) => {}
            None => {
                best.insert(
                    record.size,
                    BestEntry {
                        size: record.size,
                        algorithm: record.algorithm.clone(),
                        time_ms: record.time_ms,
                    },
                );
            }
        }
    }

    best.into_values().collect()
}

/// Algorithms ordered by mean successful time, ascending
///
/// Equal means keep lexicographic name order. NaN times are left out of the
/// mean.
pub fn ranking(dataset: &BenchmarkDataset) -> Vec<RankEntry> {
    let mut totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for record in dataset.successful().filter(|r| !r.time_ms.is_nan()) {
        let entry = totals.entry(record.algorithm.as_str()).or_insert((0.0, 0));
        entry.0 += record.time_ms;
        entry.1 += 1;
    }

    let mut ranking: Vec<RankEntry> = totals
        .into_iter()
        .map(|(algorithm, (sum, runs))| RankEntry {
            algorithm: algorithm.to_string(),
            mean_ms: sum / runs as f64,
            runs,
        })
        .collect();

    ranking.sort_by(|a, b| a.mean_ms.total_cmp(&b.mean_ms));
    ranking
}

/// Growth rate assumed for an algorithm when drawing its reference curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityClass {
    /// O(n²)
    Quadratic,
    /// O(n log n)
    Linearithmic,
}

impl ComplexityClass {
    /// Quadratic for insertion sort, linearithmic for everything else
    pub fn assumed_for(algorithm: &str) -> Self {
        if algorithm.contains("Insertion Sort") {
            ComplexityClass::Quadratic
        } else {
            ComplexityClass::Linearithmic
        }
    }

    /// Unscaled growth at size `n`
    pub fn growth(self, n: f64) -> f64 {
        match self {
            ComplexityClass::Quadratic => n * n,
            ComplexityClass::Linearithmic => n * n.log2(),
        }
    }

    /// Legend label
    pub fn label(self) -> &'static str {
        match self {
            ComplexityClass::Quadratic => "O(n²)",
            ComplexityClass::Linearithmic => "O(n log n)",
        }
    }

    /// Panel subtitle
    pub fn description(self) -> &'static str {
        match self {
            ComplexityClass::Quadratic => "Quadratic complexity",
            ComplexityClass::Linearithmic => "Linearithmic complexity",
        }
    }
}

/// `samples` evenly spaced values from `start` to `end`, both included
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (samples - 1) as f64;
            (0..samples).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Reference curve for visual comparison against observed points
///
/// The curve is scaled so that it passes through the first observation
/// and spans the observed size range. Returns `None` when there are fewer
/// than `min_points` observations or the anchor gives no finite scale
/// (e.g. a linearithmic anchor at size 1).
pub fn reference_curve(
    points: &[(f64, f64)],
    class: ComplexityClass,
    samples: usize,
    min_points: usize,
) -> Option<Vec<(f64, f64)>> {
    if points.len() < min_points.max(1) {
        return None;
    }

    let (n0, t0) = points[0];
    let scale = t0 / class.growth(n0);
    if !scale.is_finite() {
        return None;
    }

    let min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);

    Some(
        linspace(min, max, samples)
            .into_iter()
            .map(|n| (n, class.growth(n) * scale))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::BenchmarkRecord;

    fn example() -> BenchmarkDataset {
        BenchmarkDataset::new(
            "example.csv",
            vec![
                BenchmarkRecord::new("QuickSort", 1000, 5.0, true),
                BenchmarkRecord::new("std::sort", 1000, 2.0, true),
                BenchmarkRecord::new("InsertionSort", 1000, 50.0, true),
            ],
        )
    }

    #[test]
    fn test_example_best_and_ranking() {
        let data = example();

        let best = best_per_size(&data);
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].algorithm, "std::sort");
        assert_eq!(best[0].time_ms, 2.0);

        let ranked = ranking(&data);
        let order: Vec<&str> = ranked.iter().map(|r| r.algorithm.as_str()).collect();
        assert_eq!(order, vec!["std::sort", "QuickSort", "InsertionSort"]);
    }

    #[test]
    fn test_best_tie_goes_to_first_row() {
        let data = BenchmarkDataset::new(
            "tie.csv",
            vec![
                BenchmarkRecord::new("Shell Sort", 1000, 1.0, true),
                BenchmarkRecord::new("Quick Sort", 1000, 1.0, true),
                BenchmarkRecord::new("std::sort", 1000, 0.5, false),
            ],
        );
        let best = best_per_size(&data);
        assert_eq!(best[0].algorithm, "Shell Sort");
    }

    #[test]
    fn test_nan_time_never_wins() {
        let data = BenchmarkDataset::new(
            "nan.csv",
            vec![
                BenchmarkRecord::new("Heap Sort", 1000, f64::NAN, true),
                BenchmarkRecord::new("Quick Sort", 1000, 0.3, true),
                BenchmarkRecord::new("Heap Sort", 5000, 1.5, true),
                BenchmarkRecord::new("std::sort", 5000, 0.4, true),
            ],
        );

        let best = best_per_size(&data);
        assert_eq!(best[0].algorithm, "Quick Sort");
        assert_eq!(best[1].algorithm, "std::sort");

        let ranked = ranking(&data);
        let heap = ranked.iter().find(|r| r.algorithm == "Heap Sort").unwrap();
        assert_eq!(heap.mean_ms, 1.5);
        assert_eq!(heap.runs, 1);
    }

    #[test]
    fn test_ranking_is_non_decreasing() {
        let data = BenchmarkDataset::new(
            "many.csv",
            vec![
                BenchmarkRecord::new("Insertion Sort", 1000, 1.2, true),
                BenchmarkRecord::new("Insertion Sort", 5000, 30.0, true),
                BenchmarkRecord::new("Shell Sort", 1000, 0.4, true),
                BenchmarkRecord::new("Shell Sort", 5000, 2.2, true),
                BenchmarkRecord::new("Quick Sort", 1000, 0.3, true),
                BenchmarkRecord::new("Quick Sort", 5000, 99.0, false),
                BenchmarkRecord::new("std::sort", 1000, 0.1, true),
                BenchmarkRecord::new("std::sort", 5000, 0.4, true),
            ],
        );

        let ranking = ranking(&data);
        assert_eq!(ranking.len(), 4);
        assert!(ranking.windows(2).all(|w| w[0].mean_ms <= w[1].mean_ms));
        assert_eq!(ranking[0].algorithm, "std::sort");
        assert_eq!(ranking[1].algorithm, "Quick Sort");
        assert_eq!(ranking[1].runs, 1);
    }

    #[test]
    fn test_summary_counts() {
        let mut records = example().records().to_vec();
        records.push(BenchmarkRecord::new("Heap Sort", 5000, 0.0, false));
        let summary = ReportSummary::from_dataset(&BenchmarkDataset::new("r.csv", records));

        assert_eq!(summary.total_runs, 4);
        assert_eq!(summary.successful_runs, 3);
        assert_eq!(
            summary.algorithms,
            vec!["QuickSort", "std::sort", "InsertionSort", "Heap Sort"]
        );
        assert_eq!(summary.sizes, vec![1000, 5000]);
        assert_eq!(summary.best_per_size.len(), 1);
    }

    #[test]
    fn test_assumed_complexity() {
        assert_eq!(
            ComplexityClass::assumed_for("Insertion Sort"),
            ComplexityClass::Quadratic
        );
        assert_eq!(
            ComplexityClass::assumed_for("Insertion Sort (binary)"),
            ComplexityClass::Quadratic
        );
        assert_eq!(
            ComplexityClass::assumed_for("InsertionSort"),
            ComplexityClass::Linearithmic
        );
        assert_eq!(
            ComplexityClass::assumed_for("std::sort"),
            ComplexityClass::Linearithmic
        );
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 10.0, 3), vec![0.0, 5.0, 10.0]);
        assert_eq!(linspace(2.0, 2.0, 1), vec![2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_reference_curve_quadratic_anchor() {
        let points = [(1000.0, 2.0), (2000.0, 7.5), (4000.0, 33.0)];
        let curve = reference_curve(&points, ComplexityClass::Quadratic, 4, 3).unwrap();

        assert_eq!(curve.len(), 4);
        assert_eq!(curve[0].0, 1000.0);
        assert!((curve[0].1 - 2.0).abs() < 1e-9);
        assert_eq!(curve[3].0, 4000.0);
        assert!((curve[3].1 - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_reference_curve_linearithmic_anchor() {
        let points = [(1024.0, 10.0), (2048.0, 21.0), (4096.0, 45.0)];
        let curve = reference_curve(&points, ComplexityClass::Linearithmic, 100, 3).unwrap();

        assert_eq!(curve.len(), 100);
        assert!((curve[0].1 - 10.0).abs() < 1e-9);
        // 10 * (4096 * 12) / (1024 * 10)
        assert!((curve[99].1 - 48.0).abs() < 1e-9);
    }

    #[test]
    fn test_reference_curve_needs_enough_points() {
        let points = [(1000.0, 1.0), (2000.0, 2.0)];
        assert!(reference_curve(&points, ComplexityClass::Linearithmic, 100, 3).is_none());
        assert!(reference_curve(&[], ComplexityClass::Quadratic, 100, 0).is_none());
    }

    #[test]
    fn test_reference_curve_degenerate_anchor() {
        let points = [(1.0, 0.1), (10.0, 1.0), (100.0, 10.0)];
        assert!(reference_curve(&points, ComplexityClass::Linearithmic, 10, 3).is_none());
    }
}
