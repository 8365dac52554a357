// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Per-capability request handlers.
//
// Every handler runs on the blocking task pool, performs its permission
// check through the platform bridge, and answers through the response
// channel. Failure is structural, never an error value crossing into the web
// context: denied permissions surface as alerts and sentinel payloads,
// malformed data is dropped, and a missing push token simply produces no
// callback at all.

use std::time::Duration;

use tracing::{debug, warn};

use kmp_bridge::traits::*;
use kmp_core::prompts;
use kmp_core::types::{Background, PlatformFamily, Position};

use crate::contacts;
use crate::message::{
    CB_CLIPBOARD_TEXT, CB_CONTACTS, CB_CURRENT_POSITION, CB_INSET_BOTTOM_HEIGHT, CB_PUSH_TOKEN,
    CB_UN_ZOOM, Capability, CapabilityRequest, RequestVariant, UiSync,
};
use crate::referral;
use crate::router::GatewayInner;
use crate::store::CONTACTS_PERMISSION_KEY;

/// Delay between delivering an accepted referral and hiding the splash,
/// giving the web content time to paint the referred page.
pub(crate) const REFERRAL_SPLASH_DELAY: Duration = Duration::from_millis(1500);

impl GatewayInner {
    /// Synchronous UI-sync path: no capability provider, answered (if at
    /// all) within the same tick.
    pub(crate) fn handle_ui_sync(&self, sync: UiSync) {
        match sync {
            UiSync::SetBackgroundBlack => self.set_background(Background::Black),
            UiSync::SetBackgroundWhite => self.set_background(Background::White),
            UiSync::GetInsetBottomHeight => {
                let inset = self.bridge.inset_bottom();
                self.channel
                    .deliver_text(CB_INSET_BOTTOM_HEIGHT, &inset.to_string());
            }
        }
    }

    fn set_background(&self, background: Background) {
        let mut session = self.session.lock().expect("session lock poisoned");
        session.set_background(background);
        debug!(color = background.css(), "safe-area background changed");
    }

    /// Asynchronous capability path, dispatched from the router.
    pub(crate) fn handle_capability(&self, request: CapabilityRequest) {
        let span = tracing::info_span!(
            "capability",
            id = %request.request_id,
            kind = ?request.capability,
        );
        let _guard = span.enter();

        match request.capability {
            Capability::Push => self.handle_push(request.variant),
            Capability::Location => self.handle_location(request.variant),
            Capability::Contacts => self.handle_contacts(),
            Capability::Clipboard => self.handle_clipboard(request.variant),
        }
    }

    // -- Push ----------------------------------------------------------------

    /// Two independent booleans drive the flow: whether to actively prompt,
    /// and whether the caller wants the cross-platform token. A denied or
    /// missing token produces no response at all, not even a failure marker.
    fn handle_push(&self, variant: RequestVariant) {
        let force = matches!(
            variant,
            RequestVariant::PushPrompt | RequestVariant::ExpoPushPrompt
        );
        let want_expo = matches!(
            variant,
            RequestVariant::ExpoPushPrompt | RequestVariant::ExpoPushToken
        );

        let outcome = if force || want_expo {
            self.bridge.request_push_permission()
        } else {
            self.bridge.push_permissions()
        };
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "push permission check failed");
                return;
            }
        };
        if !outcome.granted {
            return;
        }

        let token = if want_expo {
            self.bridge.expo_push_token()
        } else {
            self.bridge.device_push_token()
        };
        match token {
            Ok(Some(token)) => self.channel.deliver(CB_PUSH_TOKEN, &token),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "push token fetch failed"),
        }
    }

    // -- Location ------------------------------------------------------------

    /// Always requests (never passively checks) foreground permission. On
    /// denial both variants deliver the `{0, 0}` sentinel and the un-zoom
    /// signal; only the force variant additionally raises the settings alert.
    fn handle_location(&self, variant: RequestVariant) {
        let granted = match self.bridge.request_foreground_permission() {
            Ok(outcome) => outcome.granted,
            Err(e) => {
                warn!(error = %e, "location permission request failed");
                false
            }
        };

        if !granted {
            if variant == RequestVariant::ForceCurrentPosition {
                self.bridge.alert_open_settings(&prompts::LOCATION_DENIED);
            }
            self.channel
                .deliver(CB_CURRENT_POSITION, &Position::center_of_the_world());
            self.channel.invoke(CB_UN_ZOOM);
            return;
        }

        match self.bridge.current_position() {
            Ok(position) => self.channel.deliver(CB_CURRENT_POSITION, &position),
            Err(e) => warn!(error = %e, "position fetch failed"),
        }
    }

    // -- Contacts ------------------------------------------------------------

    /// Android requires a prominent disclosure before the native prompt, so
    /// the flow first consults the passive permission state, the historical
    /// "never ask" flag, and the can-ask-again bit; bailing out of any of
    /// those produces no response at all. The native prompt then runs on
    /// every platform; a refusal there gets the settings alert and an empty
    /// contact list.
    fn handle_contacts(&self) {
        if self.bridge.platform_family() == PlatformFamily::Android {
            let permission = match self.bridge.contacts_permissions() {
                Ok(permission) => permission,
                Err(e) => {
                    warn!(error = %e, "contacts permission check failed");
                    return;
                }
            };
            if !permission.granted {
                if self.pref(CONTACTS_PERMISSION_KEY).as_deref() == Some("never") {
                    return;
                }
                if !permission.can_ask_again {
                    return;
                }
                let accepted = self
                    .bridge
                    .confirm(&prompts::CONTACTS_RATIONALE)
                    .unwrap_or(false);
                if !accepted {
                    return;
                }
            }
        }

        let granted = match self.bridge.request_contacts_permission() {
            Ok(outcome) => outcome.granted,
            Err(e) => {
                warn!(error = %e, "contacts permission request failed");
                return;
            }
        };

        let records = if granted {
            let raw = match self.bridge.fetch_contacts() {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(error = %e, "contact fetch failed");
                    return;
                }
            };
            contacts::flatten_contacts(&raw)
        } else {
            self.bridge.alert_open_settings(&prompts::CONTACTS_DENIED);
            Vec::new()
        };

        debug!(records = records.len(), "delivering contact list");
        self.channel.deliver(CB_CONTACTS, &records);
    }

    // -- Clipboard -----------------------------------------------------------

    /// Plain variant: read the clipboard unconditionally. First-opening
    /// variant: consult the open counter first (repeat openings answer with
    /// a marker and never touch the clipboard), then ask the one-time
    /// rationale. Content not prefixed by our base URL just ends the startup
    /// loading state; a matching link overrides the session's navigation
    /// target and is echoed back verbatim.
    fn handle_clipboard(&self, variant: RequestVariant) {
        if variant == RequestVariant::ClipboardTextOnFirstOpening {
            let count = self.open_count();
            if referral::is_repeat_opening(count) {
                self.channel
                    .deliver_text(CB_CLIPBOARD_TEXT, &referral::opening_marker(count));
                self.bridge.hide_splash();
                return;
            }

            let accepted = self
                .bridge
                .confirm(&prompts::CLIPBOARD_RATIONALE)
                .unwrap_or(false);
            if !accepted {
                return;
            }
        }

        let text = match self.bridge.clipboard_text() {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "clipboard read failed");
                return;
            }
        };

        let base = self.config.effective_base_url();
        let Some(link) = referral::referral_url(&text, base) else {
            self.bridge.hide_splash();
            return;
        };

        {
            let mut session = self.session.lock().expect("session lock poisoned");
            session.accept_referral(link);
        }
        self.channel.deliver_text(CB_CLIPBOARD_TEXT, link);

        std::thread::sleep(self.referral_splash_delay);
        self.bridge.hide_splash();
    }

    // -- Store access --------------------------------------------------------

    fn pref(&self, key: &str) -> Option<String> {
        let store = self.store.lock().expect("store lock poisoned");
        match store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "preference read failed");
                None
            }
        }
    }

    fn open_count(&self) -> u32 {
        self.store
            .lock()
            .expect("store lock poisoned")
            .open_count()
    }
}
