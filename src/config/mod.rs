// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod general;

use crate::config::general::General;
use crate::render::{FULL_RANGE_FILE, LARGE_N_FILE, LARGE_N_THRESHOLD};
use crate::{Error, INPUT_FILE};

use clap::{App, Arg, ArgMatches};
use log::Level;
use serde_derive::Deserialize;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    general: General,
}

fn app() -> App<'static, 'static> {
    App::new(NAME)
        .version(VERSION)
        .author("Brian Martin <bmartin@twitter.com>")
        .about("Plot convex hull benchmark timings")
        .arg(
            Arg::with_name("config")
                .long("config")
                .value_name("FILE")
                .help("TOML config file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("directory")
                .long("directory")
                .value_name("DIR")
                .help("Directory holding timings.csv, charts are written here too")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("no-display")
                .long("no-display")
                .help("Do not open the charts in an image viewer"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Increase verbosity by one level. Can be used more than once")
                .multiple(true),
        )
}

impl Config {
    /// parse command line options and return `Config`
    pub fn new() -> Result<Config, Error> {
        Self::from_args(std::env::args_os())
    }

    /// parse the given argument list, the first item being the program name
    pub fn from_args<I, T>(args: I) -> Result<Config, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().get_matches_from(args);

        let mut config = if let Some(file) = matches.value_of_os("config") {
            Config::load_from_file(file)?
        } else {
            Default::default()
        };

        config.apply(&matches);
        Ok(config)
    }

    pub fn load_from_file(filename: impl AsRef<Path>) -> Result<Config, Error> {
        let path = filename.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// parse TOML config text, `path` is only used to report errors
    pub fn parse(path: &Path, content: &str) -> Result<Config, Error> {
        toml::from_str(content).map_err(|e| Error::Config {
            path: path.to_owned(),
            reason: e.to_string(),
        })
    }

    fn apply(&mut self, matches: &ArgMatches) {
        if let Some(directory) = matches.value_of_os("directory") {
            self.general.set_directory(PathBuf::from(directory));
        }

        if matches.is_present("no-display") {
            self.general.set_display(false);
        }

        match matches.occurrences_of("verbose") {
            0 => {}
            1 => self.general.set_logging(Level::Debug),
            _ => self.general.set_logging(Level::Trace),
        }
    }

    /// get logging level
    pub fn logging(&self) -> Level {
        self.general.logging()
    }

    /// directory holding the input table and receiving the charts
    pub fn directory(&self) -> &Path {
        self.general.directory()
    }

    /// path of the timing table
    pub fn input(&self) -> PathBuf {
        self.directory().join(INPUT_FILE)
    }

    /// whether charts should be opened in a viewer after rendering
    pub fn display(&self) -> bool {
        self.general.display()
    }

    pub fn print(&self) {
        info!("-----");
        info!("Config: Input: {}", self.input().display());
        info!(
            "Config: Output: {} {}",
            self.directory().join(FULL_RANGE_FILE).display(),
            self.directory().join(LARGE_N_FILE).display(),
        );
        info!(
            "Config: Large-n Threshold: {} Display: {} Logging: {}",
            LARGE_N_THRESHOLD,
            self.display(),
            self.logging(),
        );
    }
}
