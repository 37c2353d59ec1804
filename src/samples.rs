// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Loading of the raw benchmark table.
//!
//! The table is a CSV file with a header row naming the columns `n`,
//! `jarvis_time`, `graham_time` and `chan_time` in any order. The benchmark
//! harness also writes a `trial` column, which is accepted and ignored by
//! aggregation. Any other column, and any row that fails to parse, rejects
//! the whole file.

use crate::{Algorithm, Error};

use csv::{ReaderBuilder, StringRecord, Trim};
use serde_derive::Deserialize;
use strum::IntoEnumIterator;

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const REQUIRED_COLUMNS: &[&str] = &["n", "jarvis_time", "graham_time", "chan_time"];
const OPTIONAL_COLUMNS: &[&str] = &["trial"];

/// One benchmark run: the input size and the time each algorithm took, in
/// microseconds.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Sample {
    pub n: u64,
    #[serde(default)]
    pub trial: Option<u32>,
    pub jarvis_time: f64,
    pub graham_time: f64,
    pub chan_time: f64,
}

impl Sample {
    pub fn new(n: u64, jarvis_time: f64, graham_time: f64, chan_time: f64) -> Self {
        Self {
            n,
            trial: None,
            jarvis_time,
            graham_time,
            chan_time,
        }
    }

    pub fn time(&self, algorithm: Algorithm) -> f64 {
        match algorithm {
            Algorithm::Jarvis => self.jarvis_time,
            Algorithm::Graham => self.graham_time,
            Algorithm::Chan => self.chan_time,
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.n == 0 {
            return Err("n must be positive".to_owned());
        }
        for algorithm in Algorithm::iter() {
            let time = self.time(algorithm);
            if !time.is_finite() {
                return Err(format!("{} is not a finite number: {}", algorithm.column(), time));
            }
            if time < 0.0 {
                return Err(format!("{} is negative: {}", algorithm.column(), time));
            }
        }
        Ok(())
    }
}

/// Samples in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleTable {
    samples: Vec<Sample>,
}

impl SampleTable {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}

impl From<Vec<Sample>> for SampleTable {
    fn from(samples: Vec<Sample>) -> Self {
        Self::new(samples)
    }
}

/// Read the sample table at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<SampleTable, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    parse(file, path)
}

/// Read a sample table from an arbitrary stream. Errors name the stream `-`.
pub fn from_reader<R: Read>(reader: R) -> Result<SampleTable, Error> {
    parse(reader, Path::new("-"))
}

fn parse<R: Read>(reader: R, path: &Path) -> Result<SampleTable, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| Error::Header {
            path: path.to_owned(),
            reason: e.to_string(),
        })?
        .clone();

    check_headers(&headers).map_err(|reason| Error::Header {
        path: path.to_owned(),
        reason,
    })?;
    debug!("{}: header ok: {:?}", path.display(), headers);

    let mut samples = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| Error::Row {
            path: path.to_owned(),
            line: line_of(&source),
            source,
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let sample: Sample = record
            .deserialize(Some(&headers))
            .map_err(|source| Error::Row {
                path: path.to_owned(),
                line,
                source,
            })?;
        sample.validate().map_err(|reason| Error::InvalidValue {
            path: path.to_owned(),
            line,
            reason,
        })?;

        trace!("{}:{}: {:?}", path.display(), line, sample);
        samples.push(sample);
    }

    Ok(SampleTable::new(samples))
}

fn line_of(error: &csv::Error) -> u64 {
    error.position().map(|p| p.line()).unwrap_or(0)
}

fn check_headers(headers: &StringRecord) -> Result<(), String> {
    let mut seen = HashSet::new();
    for name in headers.iter() {
        if !REQUIRED_COLUMNS.contains(&name) && !OPTIONAL_COLUMNS.contains(&name) {
            return Err(format!("unexpected column '{}'", name));
        }
        if !seen.insert(name) {
            return Err(format!("duplicate column '{}'", name));
        }
    }
    for name in REQUIRED_COLUMNS {
        if !seen.contains(name) {
            return Err(format!("missing column '{}'", name));
        }
    }
    Ok(())
}
