// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use hull_perf::render::{self, full_range_series, large_n_series};
use hull_perf::{samples, stats, Algorithm, Config, Error, Sample, SampleTable};

use tempfile::TempDir;

use std::fs;
use std::path::Path;

fn config_for(dir: &Path) -> Config {
    Config::from_args(vec![
        "hull-perf".into(),
        "--directory".into(),
        dir.as_os_str().to_owned(),
        "--no-display".into(),
    ])
    .unwrap()
}

const HARNESS_OUTPUT: &str = "n,trial,jarvis_time,graham_time,chan_time
10,0,5,3,4
10,1,7,3,6
100,0,61,22,30
100,1,59,18,28
2000,0,1210,401,455
5000,0,3100,1020,1100
5000,1,2900,980,1080
";

#[test]
fn load_aggregate_filter() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("timings.csv"), HARNESS_OUTPUT).unwrap();

    let config = config_for(dir.path());
    assert_eq!(config.input(), dir.path().join("timings.csv"));

    let samples = samples::load(config.input()).unwrap();
    assert_eq!(samples.len(), 7);

    let table = stats::aggregate(&samples);
    let ns: Vec<u64> = table.iter().map(|r| r.n()).collect();
    assert_eq!(ns, vec![10, 100, 2000, 5000]);

    let row = table.get(10).unwrap();
    assert!((row.mean(Algorithm::Jarvis) - 6.0).abs() < 1e-9);
    assert!((row.std(Algorithm::Jarvis).unwrap() - 1.414_213_562).abs() < 1e-6);
    assert!((row.mean(Algorithm::Graham) - 3.0).abs() < 1e-9);
    assert_eq!(row.std(Algorithm::Graham), Some(0.0));

    // a single sample at n=2000
    assert_eq!(table.get(2000).unwrap().std(Algorithm::Chan), None);

    let full = full_range_series(&table);
    assert_eq!(full.len(), 3);
    assert!(full.iter().all(|s| s.points.len() == 4));
    assert!(full.iter().all(|s| s.points[2].yerr.is_none()));

    let large = large_n_series(&table);
    for series in &large {
        let xs: Vec<f64> = series.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2000.0, 5000.0]);
    }
    assert!((large[0].points[1].y - 3000.0).abs() < 1e-9);
}

#[test]
fn aggregation_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("timings.csv");
    fs::write(&input, HARNESS_OUTPUT).unwrap();

    let first = stats::aggregate(&samples::load(&input).unwrap());
    let second = stats::aggregate(&samples::load(&input).unwrap());
    assert_eq!(first, second);
}

#[test]
fn malformed_table_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("timings.csv"),
        "n,jarvis_time,graham_time,chan_time\n10,5,3,4\n20,5,oops,4\n",
    )
    .unwrap();

    let config = config_for(dir.path());

    match hull_perf::run(&config) {
        Err(Error::Row { line, .. }) => assert_eq!(line, 3),
        other => panic!("unexpected result: {:?}", other),
    }
    // nothing is rendered when loading fails
    assert!(!dir.path().join(render::FULL_RANGE_FILE).exists());
}

#[test]
fn missing_table_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    let config = config_for(dir.path());

    match hull_perf::run(&config) {
        Err(Error::Io { path, .. }) => assert_eq!(path, dir.path().join("timings.csv")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn run_writes_both_charts() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("timings.csv"), HARNESS_OUTPUT).unwrap();

    let charts = hull_perf::run(&config_for(dir.path())).unwrap();
    assert_eq!(
        charts,
        vec![
            dir.path().join(render::FULL_RANGE_FILE),
            dir.path().join(render::LARGE_N_FILE),
        ]
    );
    for chart in &charts {
        assert_eq!(image::image_dimensions(chart).unwrap(), (3000, 1800));
    }
}

#[test]
fn single_samples_and_no_large_n_still_render() {
    // two samples at n=10 with a zero Jarvis mean, one sample at n=500,
    // nothing above the large-n threshold
    let table = stats::aggregate(&SampleTable::from(vec![
        Sample::new(10, 0.0, 3.0, 4.0),
        Sample::new(10, 0.0, 5.0, 6.0),
        Sample::new(500, 40.0, 12.0, 9.0),
    ]));
    assert!(table.large_n(render::LARGE_N_THRESHOLD).is_empty());

    let dir = TempDir::new().unwrap();
    let charts = render::render(&table, dir.path()).unwrap();
    assert_eq!(charts.len(), 2);
    for chart in &charts {
        assert_eq!(image::image_dimensions(chart).unwrap(), (3000, 1800));
    }
}

#[test]
fn rendering_is_reproducible() {
    let table = stats::aggregate(&samples::from_reader(HARNESS_OUTPUT.as_bytes()).unwrap());

    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let a = render::render(&table, first.path()).unwrap();
    let b = render::render(&table, second.path()).unwrap();

    for (a, b) in a.iter().zip(&b) {
        assert_eq!(fs::read(a).unwrap(), fs::read(b).unwrap());
    }
}
