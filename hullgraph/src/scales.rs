// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::ops::Range;

/// Fraction of the data span added on each side of a linear axis.
const LINEAR_PADDING: f64 = 0.05;

/// How values are mapped onto an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scale {
    Linear,
    Log,
}

impl Scale {
    /// Whether `value` can be placed on an axis with this scale.
    pub fn admits(self, value: f64) -> bool {
        match self {
            Scale::Linear => value.is_finite(),
            Scale::Log => value.is_finite() && value > 0.0,
        }
    }

    /// Axis range covering all admissible `values`.
    pub fn range<I>(self, values: I) -> Range<f64>
    where
        I: IntoIterator<Item = f64>,
    {
        match self {
            Scale::Linear => linear_range(values),
            Scale::Log => log_range(values),
        }
    }
}

fn bounds<I>(values: I, scale: Scale) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| scale.admits(*v))
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Range snapped outwards to whole decades. Non-positive values are ignored.
pub fn log_range<I>(values: I) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = match bounds(values, Scale::Log) {
        Some(b) => b,
        None => return 1.0..10.0,
    };

    let lo = min.log10().floor();
    let mut hi = max.log10().ceil();
    if hi <= lo {
        hi = lo + 1.0;
    }

    10f64.powi(lo as i32)..10f64.powi(hi as i32)
}

/// Range padded by a fixed fraction of the data span on both sides.
pub fn linear_range<I>(values: I) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = match bounds(values, Scale::Linear) {
        Some(b) => b,
        None => return 0.0..1.0,
    };

    let span = max - min;
    if span == 0.0 {
        let pad = (min.abs() * 0.5).max(0.5);
        return (min - pad)..(max + pad);
    }

    let pad = span * LINEAR_PADDING;
    (min - pad)..(max + pad)
}
