// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::path::PathBuf;

use thiserror::Error;

/// Every failure is fatal to a run. Variants carry the file they concern.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}: malformed header: {reason}", .path.display())]
    Header { path: PathBuf, reason: String },
    #[error("{}:{line}: malformed row: {source}", .path.display())]
    Row {
        path: PathBuf,
        line: u64,
        source: csv::Error,
    },
    #[error("{}:{line}: invalid value: {reason}", .path.display())]
    InvalidValue {
        path: PathBuf,
        line: u64,
        reason: String,
    },
    #[error("{}: failed to render chart: {reason}", .path.display())]
    Render { path: PathBuf, reason: String },
    #[error("{}: invalid config: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}
