// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Config file persistence.

use std::path::Path;

use kmp_core::AppConfig;
use kmp_core::error::Result;

const CONFIG_FILE: &str = "config.json";

/// Load the persisted config, or `None` when absent or unreadable (the
/// caller falls back to defaults).
pub fn load_config(data_dir: &Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    serde_json::from_str(&data).ok()
}

/// Persist the config as pretty JSON.
pub fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");

        let mut config = AppConfig::default();
        config.default_path = "friends".into();
        persist_config(dir.path(), &config).expect("persist");

        let loaded = load_config(dir.path()).expect("load");
        assert_eq!(loaded.default_path, "friends");
        assert_eq!(loaded.base_url, config.base_url);
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_config(dir.path()).is_none());
    }
}
