// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Kiss My Plan — native WebView shell
//
// Entry point. Initialises logging, the preferences store, the capability
// gateway, and the shell session. On platforms without an embedded renderer
// the shell runs headless: inbound message tokens are read line-by-line from
// stdin and injected scripts are echoed through the log — the same gateway
// code path the mobile embedders drive.

mod services;
mod shell;

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use kmp_bridge::traits::{PlatformBridge, SplashControl};
use kmp_gateway::{Gateway, PrefsStore, ResponseChannel, WebRenderer};

use services::{data_dir, settings};
use shell::ShellSession;

/// Renderer used on platforms without an embedded web surface: injected
/// scripts are echoed to the log instead of executed.
struct HeadlessRenderer;

impl WebRenderer for HeadlessRenderer {
    fn receive(&self, script: &str) {
        tracing::info!(script, "inject");
    }

    fn can_go_back(&self) -> bool {
        false
    }

    fn go_back(&self) {}
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Kiss My Plan shell starting");

    let dir = data_dir::data_dir();
    let config = match settings::load_config(&dir) {
        Some(config) => config,
        None => {
            // First run: write the defaults so the dev-server override can
            // be edited in place.
            let config = kmp_core::AppConfig::default();
            if let Err(e) = settings::persist_config(&dir, &config) {
                tracing::warn!(error = %e, "could not write default config");
            }
            config
        }
    };

    let bridge: Arc<dyn PlatformBridge> = Arc::from(kmp_bridge::platform_bridge());
    bridge.prevent_auto_hide();

    let store = match PrefsStore::open(dir.join("prefs.db")) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "persistent store failed — using in-memory fallback");
            PrefsStore::open_in_memory().expect("even fallback store failed")
        }
    };

    let renderer = Arc::new(HeadlessRenderer);
    let gateway = Gateway::new(
        Arc::clone(&bridge),
        ResponseChannel::new(renderer.clone()),
        store,
        config.clone(),
    );

    if let Err(e) = gateway.record_opening() {
        tracing::warn!(error = %e, "could not record cold start");
    }

    let deep_link = std::env::args().nth(1);
    let session = ShellSession::new(
        gateway.clone(),
        renderer.clone(),
        Arc::clone(&bridge),
        &config,
        deep_link.as_deref(),
    );

    renderer.receive(shell::INIT_SCRIPT);
    tracing::info!(url = %session.current_url(), "initial navigation target");
    session.on_load_end();

    // Dev harness loop: one wire token per line. The literal line "back"
    // stands in for the hardware back signal; unconsumed, it exits the shell
    // the way the default handler would.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let token = line.trim();
                if token.is_empty() {
                    continue;
                }
                if token == "back" {
                    if !session.on_back_pressed() {
                        break;
                    }
                    continue;
                }
                gateway.route(token);
                tracing::debug!(url = %session.current_url(), "navigation target");
            }
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "stdin read failed");
                break;
            }
        }
    }

    tracing::info!("shell exiting");
}
