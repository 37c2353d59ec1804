// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Aggregates convex hull benchmark timings and renders comparison charts.
//!
//! The pipeline has three stages which can be used on their own:
//! [`samples::load`] reads the timing table, [`stats::aggregate`] reduces it
//! to per input size moments and [`render::render`] draws the charts.

#[macro_use]
extern crate log;

mod algorithm;
mod config;
mod display;
mod error;
mod logger;
pub mod render;
pub mod samples;
pub mod stats;

pub use crate::algorithm::Algorithm;
pub use crate::config::{Config, NAME, VERSION};
pub use crate::error::Error;
pub use crate::logger::Logger;
pub use crate::samples::{Sample, SampleTable};
pub use crate::stats::{AggregateTable, Moments, Summary};

use std::path::PathBuf;

/// Name of the timing table inside the configured directory.
pub const INPUT_FILE: &str = "timings.csv";

/// Run the whole pipeline and return the paths of the charts written.
pub fn run(config: &Config) -> Result<Vec<PathBuf>, Error> {
    let input = config.input();

    info!("-----");
    info!("Loading: {}", input.display());
    let samples = samples::load(&input)?;
    info!("Loaded {} samples", samples.len());

    let table = stats::aggregate(&samples);
    table.print();

    info!("-----");
    let charts = render::render(&table, config.directory())?;

    if config.display() {
        if display::available() {
            for chart in &charts {
                display::show(chart);
            }
        } else {
            debug!("no display available, not opening charts");
        }
    }

    Ok(charts)
}
