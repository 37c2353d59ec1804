// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[macro_use]
extern crate log;

use hull_perf::{Config, Logger, VERSION};

fn main() {
    let config = match Config::new() {
        Ok(config) => config,
        Err(e) => {
            println!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = Logger::new()
        .label("hull_perf")
        .level(config.logging())
        .init()
    {
        println!("ERROR: failed to initialize logger: {}", e);
        std::process::exit(1);
    }

    info!("hull-perf {} initializing...", VERSION);
    config.print();

    if let Err(e) = hull_perf::run(&config) {
        error!("{}", e);
        std::process::exit(1);
    }
}
