// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The two comparison charts produced from an `AggregateTable`.

use crate::{AggregateTable, Algorithm, Error};

use hullgraph::{Marker, PlotConfig, Point, Scale, Series};
use strum::IntoEnumIterator;

use std::path::{Path, PathBuf};

/// Full range chart: log-log axes with error bars.
pub const FULL_RANGE_FILE: &str = "performance_comparison.png";

/// Chart restricted to inputs larger than `LARGE_N_THRESHOLD`.
pub const LARGE_N_FILE: &str = "large_n_performance.png";

pub const LARGE_N_THRESHOLD: u64 = 1000;

const DPI: u32 = 300;
// inches
const FIGURE_SIZE: (f64, f64) = (10.0, 6.0);

fn marker(algorithm: Algorithm) -> Marker {
    match algorithm {
        Algorithm::Jarvis => Marker::Circle,
        Algorithm::Graham => Marker::Square,
        Algorithm::Chan => Marker::Triangle,
    }
}

/// Mean time against input size for each algorithm, with the standard
/// deviation as error bar where one is defined.
pub fn full_range_series(table: &AggregateTable) -> Vec<Series> {
    Algorithm::iter()
        .map(|algorithm| {
            let mut series = Series::new(algorithm.label(), marker(algorithm));
            for row in table.iter() {
                let m = row.get(algorithm);
                series.push(Point::with_error(row.n() as f64, m.mean, m.std));
            }
            series
        })
        .collect()
}

/// Mean time against input size for each algorithm, for inputs larger than
/// `LARGE_N_THRESHOLD` only.
pub fn large_n_series(table: &AggregateTable) -> Vec<Series> {
    let large = table.large_n(LARGE_N_THRESHOLD);
    Algorithm::iter()
        .map(|algorithm| {
            let mut series = Series::new(algorithm.label(), Marker::Circle);
            for row in large.iter() {
                series.push(Point::new(row.n() as f64, row.mean(algorithm)));
            }
            series
        })
        .collect()
}

pub fn full_range_chart() -> PlotConfig {
    let mut config = PlotConfig::new();
    config
        .caption("Convex Hull Algorithm Performance")
        .x_desc("Number of Points (log scale)")
        .y_desc("Execution Time (μs, log scale)")
        .size(FIGURE_SIZE.0, FIGURE_SIZE.1)
        .dpi(DPI)
        .x_scale(Scale::Log)
        .y_scale(Scale::Log)
        .error_bars(true)
        .minor_grid(true);
    config
}

pub fn large_n_chart() -> PlotConfig {
    let mut config = PlotConfig::new();
    config
        .caption("Performance on Large Datasets")
        .x_desc("Number of Points")
        .y_desc("Time (μs)")
        .size(FIGURE_SIZE.0, FIGURE_SIZE.1)
        .dpi(DPI)
        .x_scale(Scale::Linear)
        .y_scale(Scale::Linear);
    config
}

/// Render both charts into `directory` and return the paths written.
pub fn render(table: &AggregateTable, directory: &Path) -> Result<Vec<PathBuf>, Error> {
    let full_range = directory.join(FULL_RANGE_FILE);
    plot(&full_range_chart(), &full_range, &full_range_series(table))?;

    let large_n = directory.join(LARGE_N_FILE);
    plot(&large_n_chart(), &large_n, &large_n_series(table))?;

    Ok(vec![full_range, large_n])
}

fn plot(config: &PlotConfig, path: &Path, series: &[Series]) -> Result<(), Error> {
    if series.iter().all(|s| s.points.is_empty()) {
        warn!("{}: no data points, rendering empty chart", path.display());
    }

    for s in series {
        let skipped = s.points.len() - config.visible(s).points.len();
        if skipped > 0 {
            warn!(
                "{}: {}: skipping {} points that cannot be placed on the axes",
                path.display(),
                s.label,
                skipped
            );
        }
    }

    config.plot(path, series).map_err(|e| Error::Render {
        path: path.to_owned(),
        reason: e.to_string(),
    })?;

    info!("Chart saved: {}", path.display());
    Ok(())
}
