// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use log::Level;
use serde_derive::Deserialize;

use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct General {
    #[serde(with = "LevelDef")]
    #[serde(default = "default_logging_level")]
    logging: Level,
    #[serde(default = "default_directory")]
    directory: PathBuf,
    #[serde(default = "default_display")]
    display: bool,
}

impl Default for General {
    fn default() -> General {
        General {
            logging: default_logging_level(),
            directory: default_directory(),
            display: default_display(),
        }
    }
}

impl General {
    pub fn logging(&self) -> Level {
        self.logging
    }

    pub fn set_logging(&mut self, level: Level) {
        self.logging = level;
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn set_directory(&mut self, directory: PathBuf) {
        self.directory = directory;
    }

    pub fn display(&self) -> bool {
        self.display
    }

    pub fn set_display(&mut self, display: bool) {
        self.display = display;
    }
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
#[serde(remote = "Level")]
enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

fn default_logging_level() -> Level {
    Level::Info
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_display() -> bool {
    true
}
