// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for desktop/CI builds where native mobile APIs are unavailable.
//
// Permission-style methods return `PlatformUnavailable`; geometry and splash
// methods degrade to harmless defaults so the headless shell stays usable.

use kmp_core::error::{KmpError, Result};
use kmp_core::prompts::DialogCopy;
use kmp_core::types::{PermissionOutcome, PlatformFamily, Position, RawContact};

use crate::traits::*;

/// No-op bridge returned on non-mobile platforms.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_family(&self) -> PlatformFamily {
        PlatformFamily::Desktop
    }
}

impl PushNotifications for StubBridge {
    fn push_permissions(&self) -> Result<PermissionOutcome> {
        Err(KmpError::PlatformUnavailable)
    }

    fn request_push_permission(&self) -> Result<PermissionOutcome> {
        tracing::warn!("PushNotifications::request_push_permission called on stub bridge");
        Err(KmpError::PlatformUnavailable)
    }

    fn device_push_token(&self) -> Result<Option<String>> {
        Err(KmpError::PlatformUnavailable)
    }

    fn expo_push_token(&self) -> Result<Option<String>> {
        Err(KmpError::PlatformUnavailable)
    }
}

impl Geolocation for StubBridge {
    fn request_foreground_permission(&self) -> Result<PermissionOutcome> {
        tracing::warn!("Geolocation::request_foreground_permission called on stub bridge");
        Err(KmpError::PlatformUnavailable)
    }

    fn current_position(&self) -> Result<Position> {
        Err(KmpError::PlatformUnavailable)
    }
}

impl ContactsProvider for StubBridge {
    fn contacts_permissions(&self) -> Result<PermissionOutcome> {
        Err(KmpError::PlatformUnavailable)
    }

    fn request_contacts_permission(&self) -> Result<PermissionOutcome> {
        tracing::warn!("ContactsProvider::request_contacts_permission called on stub bridge");
        Err(KmpError::PlatformUnavailable)
    }

    fn fetch_contacts(&self) -> Result<Vec<RawContact>> {
        Err(KmpError::PlatformUnavailable)
    }
}

impl ClipboardAccess for StubBridge {
    fn clipboard_text(&self) -> Result<String> {
        Err(KmpError::PlatformUnavailable)
    }
}

impl NativeDialogs for StubBridge {
    fn confirm(&self, copy: &DialogCopy) -> Result<bool> {
        tracing::warn!(title = copy.title, "NativeDialogs::confirm called on stub bridge");
        Err(KmpError::PlatformUnavailable)
    }

    fn alert_open_settings(&self, copy: &DialogCopy) {
        tracing::warn!(title = copy.title, "alert suppressed on stub bridge");
    }
}

impl SafeAreaInsets for StubBridge {
    fn inset_bottom(&self) -> f64 {
        0.0
    }
}

impl SplashControl for StubBridge {
    fn prevent_auto_hide(&self) {}

    fn hide_splash(&self) {
        tracing::debug!("splash hide requested on stub bridge");
    }
}
