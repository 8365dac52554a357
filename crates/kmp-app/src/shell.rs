// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shell session around the embedded web surface: initial navigation target,
// environment injection, splash timing, and back-navigation policy.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use kmp_bridge::traits::{PlatformBridge, SplashControl};
use kmp_core::AppConfig;
use kmp_gateway::{Gateway, WebRenderer};

/// Injected before the initial load so the frontend knows it runs natively.
pub const INIT_SCRIPT: &str = r#"window.ENV.APP_PLATFORM = "native";"#;

/// The splash stays up this long after first paint, whether or not any
/// capability request has completed. A fixed timer, not a completion signal.
pub const SPLASH_HIDE_DELAY: Duration = Duration::from_secs(2);

/// Environment flag injected after the first load end.
pub fn platform_os_script(bridge: &dyn PlatformBridge) -> String {
    format!(
        r#"window.ENV.PLATFORM_OS = "{}";"#,
        bridge.platform_family().as_str()
    )
}

/// Compose the initial navigation target.
///
/// A deep link is honored only when it belongs to our own domain; its path
/// then replaces the default one. Foreign links, unparseable links, and
/// links without a path all fall back to the default path.
pub fn initial_url(config: &AppConfig, deep_link: Option<&str>) -> String {
    let path = deep_link
        .filter(|link| link.contains(&config.app_domain))
        .and_then(|link| Url::parse(link).ok())
        .map(|link| link.path().trim_matches('/').to_string())
        .filter(|path| !path.is_empty());

    format!(
        "{}/{}",
        config.effective_base_url(),
        path.as_deref().unwrap_or(&config.default_path)
    )
}

/// One running shell around the embedded renderer.
pub struct ShellSession {
    gateway: Gateway,
    renderer: Arc<dyn WebRenderer>,
    bridge: Arc<dyn PlatformBridge>,
    initial_url: String,
}

impl ShellSession {
    pub fn new(
        gateway: Gateway,
        renderer: Arc<dyn WebRenderer>,
        bridge: Arc<dyn PlatformBridge>,
        config: &AppConfig,
        deep_link: Option<&str>,
    ) -> Self {
        let initial_url = initial_url(config, deep_link);
        Self {
            gateway,
            renderer,
            bridge,
            initial_url,
        }
    }

    /// The URL the renderer should currently display: an accepted clipboard
    /// referral overrides the composed initial target.
    pub fn current_url(&self) -> String {
        self.gateway.navigation_target(&self.initial_url)
    }

    /// Hook for the renderer's load-end event: inject the platform flag and
    /// arm the fixed splash timer.
    pub fn on_load_end(&self) {
        self.renderer.receive(&platform_os_script(self.bridge.as_ref()));

        let bridge = Arc::clone(&self.bridge);
        tokio::spawn(async move {
            tokio::time::sleep(SPLASH_HIDE_DELAY).await;
            bridge.hide_splash();
        });
    }

    /// Hardware back signal. Consumed (renderer navigates back) only while a
    /// back step is available; otherwise the default handling applies.
    pub fn on_back_pressed(&self) -> bool {
        if self.renderer.can_go_back() {
            self.renderer.go_back();
            return true;
        }
        false
    }
}
