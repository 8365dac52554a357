// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

/// Persistent application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the web application. Referral links and clipboard content
    /// are only honored when prefixed by this value.
    pub base_url: String,
    /// Domain used to decide whether an incoming deep link belongs to us.
    pub app_domain: String,
    /// Path loaded when neither a deep link nor a referral provides one.
    pub default_path: String,
    /// Development server override for the initial load (LAN address of a
    /// local frontend). `None` in production builds.
    pub dev_server: Option<String>,
}

impl AppConfig {
    /// The base URL the shell actually loads from, honoring the dev override.
    pub fn effective_base_url(&self) -> &str {
        self.dev_server.as_deref().unwrap_or(&self.base_url)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "https://kiss-my-plan.com".into(),
            app_domain: "kiss-my-plan.com".into(),
            default_path: "plans".into(),
            dev_server: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_server_overrides_base_url() {
        let mut config = AppConfig::default();
        assert_eq!(config.effective_base_url(), "https://kiss-my-plan.com");

        config.dev_server = Some("http://192.168.178.49:3617".into());
        assert_eq!(config.effective_base_url(), "http://192.168.178.49:3617");
    }
}
