// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Data directory resolution for the desktop/headless shell.

use std::path::PathBuf;

/// Directory holding `config.json` and the preferences database, created on
/// first use. Mobile embedders pass their platform documents directory to the
/// store directly and never call this.
pub fn data_dir() -> PathBuf {
    let dir = base_dir().join("kiss-my-plan");
    std::fs::create_dir_all(&dir).ok();
    dir
}

/// `$XDG_DATA_HOME` when set, `~/.local/share` otherwise, `/tmp` as the last
/// resort for environments without a home.
fn base_dir() -> PathBuf {
    std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("share"))
        })
        .unwrap_or_else(|| PathBuf::from("/tmp"))
}
