// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hands rendered charts to the platform image viewer.

use std::path::Path;
use std::process::{Command, Stdio};

/// Whether a graphical session is available to show charts in.
#[cfg(any(target_os = "macos", target_os = "windows"))]
pub fn available() -> bool {
    true
}

/// Whether a graphical session is available to show charts in.
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub fn available() -> bool {
    std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
}

#[cfg(target_os = "macos")]
fn viewer(path: &Path) -> Command {
    let mut command = Command::new("open");
    command.arg(path);
    command
}

#[cfg(target_os = "windows")]
fn viewer(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(&["/C", "start", ""]).arg(path);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer(path: &Path) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(path);
    command
}

/// Open `path` in the viewer without waiting for it. Failure is logged and
/// otherwise ignored.
pub fn show(path: &Path) {
    let spawned = viewer(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    // not waited on: the viewer may outlive this process, and the openers
    // that fork and exit are reaped by init once we exit
    match spawned {
        Ok(child) => debug!("viewer started for {} (pid {})", path.display(), child.id()),
        Err(e) => warn!("could not open {}: {}", path.display(), e),
    }
}
