// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::algorithm::ALGORITHMS;
use crate::{Algorithm, Sample, SampleTable};

use strum::IntoEnumIterator;

use std::collections::BTreeMap;

/// Mean and sample standard deviation of one algorithm's timings for one
/// input size. `std` is `None` when the partition holds a single sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Moments {
    pub mean: f64,
    pub std: Option<f64>,
}

impl Moments {
    /// `values` must not be empty.
    fn of(values: &[f64]) -> Self {
        let count = values.len() as f64;
        let mean = values.iter().sum::<f64>() / count;

        let std = if values.len() > 1 {
            let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
            Some((ss / (count - 1.0)).sqrt())
        } else {
            None
        };

        Self { mean, std }
    }
}

/// Aggregate row for a single input size.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    n: u64,
    count: usize,
    moments: [Moments; ALGORITHMS],
}

impl Summary {
    /// Input size shared by every sample in this row.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Number of samples the row was computed from.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn get(&self, algorithm: Algorithm) -> Moments {
        self.moments[algorithm.index()]
    }

    pub fn mean(&self, algorithm: Algorithm) -> f64 {
        self.get(algorithm).mean
    }

    pub fn std(&self, algorithm: Algorithm) -> Option<f64> {
        self.get(algorithm).std
    }
}

/// One `Summary` per distinct input size, ordered by ascending `n`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AggregateTable {
    rows: Vec<Summary>,
}

impl AggregateTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Summary] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Summary> {
        self.rows.iter()
    }

    /// The row for input size `n`, if any sample had it.
    pub fn get(&self, n: u64) -> Option<&Summary> {
        self.rows
            .binary_search_by_key(&n, |row| row.n)
            .ok()
            .map(|i| &self.rows[i])
    }

    /// Rows with `n` strictly greater than `threshold`.
    pub fn large_n(&self, threshold: u64) -> AggregateTable {
        AggregateTable {
            rows: self
                .rows
                .iter()
                .filter(|row| row.n > threshold)
                .cloned()
                .collect(),
        }
    }

    /// Log the table, one line per input size.
    pub fn print(&self) {
        info!("-----");
        info!("Aggregates: {} input sizes", self.rows.len());
        for row in &self.rows {
            let cells: Vec<String> = Algorithm::iter()
                .map(|a| {
                    let m = row.get(a);
                    let std = m
                        .std
                        .map(|s| format!("{:.1}", s))
                        .unwrap_or_else(|| "n/a".to_string());
                    format!("{}: {:.1} ± {} μs", a.label(), m.mean, std)
                })
                .collect();
            info!("n={} samples={} | {}", row.n, row.count, cells.join(" | "));
        }
    }
}

/// Group `samples` by input size and compute per-algorithm moments for each
/// group.
pub fn aggregate(samples: &SampleTable) -> AggregateTable {
    let mut groups: BTreeMap<u64, Vec<&Sample>> = BTreeMap::new();
    for sample in samples.iter() {
        groups.entry(sample.n).or_default().push(sample);
    }

    let rows = groups
        .into_iter()
        .map(|(n, group)| {
            let mut moments = [Moments::default(); ALGORITHMS];
            for algorithm in Algorithm::iter() {
                let values: Vec<f64> = group.iter().map(|s| s.time(algorithm)).collect();
                moments[algorithm.index()] = Moments::of(&values);
            }
            Summary {
                n,
                count: group.len(),
                moments,
            }
        })
        .collect();

    AggregateTable { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn table(rows: &[(u64, f64, f64, f64)]) -> SampleTable {
        rows.iter()
            .map(|&(n, j, g, c)| Sample::new(n, j, g, c))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn two_samples_same_n() {
        let aggregates = aggregate(&table(&[(10, 5.0, 3.0, 1.0), (10, 7.0, 3.0, 2.0)]));
        assert_eq!(aggregates.len(), 1);

        let row = aggregates.get(10).unwrap();
        assert_eq!(row.count(), 2);
        assert!((row.mean(Algorithm::Jarvis) - 6.0).abs() < EPSILON);
        assert!((row.std(Algorithm::Jarvis).unwrap() - 2f64.sqrt()).abs() < EPSILON);
        assert!((row.mean(Algorithm::Graham) - 3.0).abs() < EPSILON);
        assert_eq!(row.std(Algorithm::Graham), Some(0.0));
        assert!((row.mean(Algorithm::Chan) - 1.5).abs() < EPSILON);
    }

    #[test]
    fn single_sample_has_undefined_std() {
        let aggregates = aggregate(&table(&[(500, 40.0, 12.0, 9.0)]));
        let row = aggregates.get(500).unwrap();
        assert_eq!(row.count(), 1);
        assert_eq!(row.mean(Algorithm::Chan), 9.0);
        for algorithm in Algorithm::iter() {
            assert_eq!(row.std(algorithm), None);
        }
    }

    #[test]
    fn one_row_per_distinct_n_in_ascending_order() {
        let aggregates = aggregate(&table(&[
            (5000, 9.0, 1.0, 1.0),
            (10, 1.0, 1.0, 1.0),
            (100, 2.0, 1.0, 1.0),
            (10, 3.0, 1.0, 1.0),
            (5000, 11.0, 1.0, 1.0),
            (2000, 4.0, 1.0, 1.0),
        ]));

        let ns: Vec<u64> = aggregates.iter().map(|r| r.n()).collect();
        assert_eq!(ns, vec![10, 100, 2000, 5000]);
        let counts: Vec<usize> = aggregates.iter().map(|r| r.count()).collect();
        assert_eq!(counts, vec![2, 1, 1, 2]);
        assert!((aggregates.get(5000).unwrap().mean(Algorithm::Jarvis) - 10.0).abs() < EPSILON);
        assert!((aggregates.get(10).unwrap().mean(Algorithm::Jarvis) - 2.0).abs() < EPSILON);
    }

    #[test]
    fn mean_matches_partition_average() {
        let samples = table(&[
            (1000, 120.0, 30.0, 41.0),
            (1000, 130.0, 33.0, 40.0),
            (1000, 125.0, 36.0, 45.0),
            (1000, 131.0, 29.0, 42.0),
            (1000, 119.0, 31.0, 44.0),
            (50, 1.0, 2.0, 3.0),
        ]);
        let aggregates = aggregate(&samples);
        let row = aggregates.get(1000).unwrap();

        for algorithm in Algorithm::iter() {
            let values: Vec<f64> = samples
                .iter()
                .filter(|s| s.n == 1000)
                .map(|s| s.time(algorithm))
                .collect();
            let expected = values.iter().sum::<f64>() / values.len() as f64;
            assert!((row.mean(algorithm) - expected).abs() < EPSILON);
        }
        // sample variance of 120, 130, 125, 131, 119 is 30.5
        assert!((row.std(Algorithm::Jarvis).unwrap() - 30.5f64.sqrt()).abs() < EPSILON);
    }

    #[test]
    fn empty() {
        let aggregates = aggregate(&SampleTable::default());
        assert!(aggregates.is_empty());
        assert!(aggregates.large_n(1000).is_empty());
    }

    #[test]
    fn large_n_is_strict() {
        let aggregates = aggregate(&table(&[
            (10, 1.0, 1.0, 1.0),
            (100, 1.0, 1.0, 1.0),
            (1000, 1.0, 1.0, 1.0),
            (2000, 1.0, 1.0, 1.0),
            (5000, 1.0, 1.0, 1.0),
        ]));

        let large = aggregates.large_n(1000);
        let ns: Vec<u64> = large.iter().map(|r| r.n()).collect();
        assert_eq!(ns, vec![2000, 5000]);
        assert!(large.get(1000).is_none());
    }
}
