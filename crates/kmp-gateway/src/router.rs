// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The message router — single entry point for all inbound web-to-native
// traffic.
//
// UI-sync tokens are handled synchronously in the caller's tick. Capability
// tokens are dispatched fire-and-forget onto the blocking pool (permission
// prompts and rusqlite both park the thread) and the router returns
// immediately; responses flow back through the response channel whenever the
// handler finishes. Two in-flight requests are never coordinated, so
// same-capability responses may arrive in either order.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use kmp_bridge::traits::PlatformBridge;
use kmp_core::config::AppConfig;
use kmp_core::error::Result;
use kmp_core::types::Background;

use crate::handlers::REFERRAL_SPLASH_DELAY;
use crate::message::InboundMessage;
use crate::response::ResponseChannel;
use crate::session::SessionState;
use crate::store::PrefsStore;

/// Everything a handler needs, shared across dispatched tasks.
pub(crate) struct GatewayInner {
    pub(crate) bridge: Arc<dyn PlatformBridge>,
    pub(crate) channel: ResponseChannel,
    pub(crate) store: Mutex<PrefsStore>,
    pub(crate) session: Mutex<SessionState>,
    pub(crate) config: AppConfig,
    pub(crate) referral_splash_delay: Duration,
}

/// The native capability gateway.
///
/// Cheaply cloneable; clones share the same session state, store, and
/// response channel.
#[derive(Clone)]
pub struct Gateway {
    inner: Arc<GatewayInner>,
}

impl Gateway {
    /// Assemble the gateway. The channel decides the escaping policy (see
    /// [`ResponseChannel::with_escaper`]).
    pub fn new(
        bridge: Arc<dyn PlatformBridge>,
        channel: ResponseChannel,
        store: PrefsStore,
        config: AppConfig,
    ) -> Self {
        Self {
            inner: Arc::new(GatewayInner {
                bridge,
                channel,
                store: Mutex::new(store),
                session: Mutex::new(SessionState::new()),
                config,
                referral_splash_delay: REFERRAL_SPLASH_DELAY,
            }),
        }
    }

    /// Route one inbound message.
    ///
    /// Unknown tokens are dropped silently. Capability requests are spawned
    /// onto the blocking pool, so this must be called from within a tokio
    /// runtime; UI-sync messages complete before this returns.
    pub fn route(&self, raw: &str) {
        match InboundMessage::parse(raw) {
            None => {}
            Some(InboundMessage::UiSync(sync)) => self.inner.handle_ui_sync(sync),
            Some(InboundMessage::Capability(request)) => {
                let inner = Arc::clone(&self.inner);
                tokio::task::spawn_blocking(move || inner.handle_capability(request));
            }
        }
    }

    /// Bump the persisted open counter. Called once per cold start, before
    /// any first-opening clipboard request can arrive.
    pub fn record_opening(&self) -> Result<u32> {
        self.inner
            .store
            .lock()
            .expect("store lock poisoned")
            .record_opening()
    }

    /// Current safe-area background, for the view layer.
    pub fn background(&self) -> Background {
        self.inner
            .session
            .lock()
            .expect("session lock poisoned")
            .background()
    }

    /// The URL the shell should display: the accepted referral override if
    /// any, else `initial`.
    pub fn navigation_target(&self, initial: &str) -> String {
        self.inner
            .session
            .lock()
            .expect("session lock poisoned")
            .navigation_target(initial)
            .to_string()
    }
}

// ---------------------------------------------------------------------------
// Test support
// ---------------------------------------------------------------------------

#[cfg(test)]
impl GatewayInner {
    /// Inner gateway with an in-memory store and no referral splash delay.
    pub(crate) fn for_tests(
        bridge: Arc<dyn PlatformBridge>,
        channel: ResponseChannel,
        config: AppConfig,
    ) -> Self {
        Self {
            bridge,
            channel,
            store: Mutex::new(PrefsStore::open_in_memory().expect("in-memory store")),
            session: Mutex::new(SessionState::new()),
            config,
            referral_splash_delay: Duration::ZERO,
        }
    }
}
