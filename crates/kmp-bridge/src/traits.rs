// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities.
//
// Each capability the web content can request is an independent trait so a
// platform backend can be assembled piecemeal. The gateway only ever sees
// the unified `PlatformBridge` supertrait.

use kmp_core::error::Result;
use kmp_core::prompts::DialogCopy;
use kmp_core::types::{PermissionOutcome, PlatformFamily, Position, RawContact};

/// Unified bridge that groups all native capabilities.
///
/// All methods are synchronous; the gateway invokes them from the blocking
/// task pool so a dialog or permission prompt may park the calling thread
/// until the user answers.
pub trait PlatformBridge:
    PushNotifications
    + Geolocation
    + ContactsProvider
    + ClipboardAccess
    + NativeDialogs
    + SafeAreaInsets
    + SplashControl
    + Send
    + Sync
{
    /// Platform family, used for the Android-only contacts gate and the
    /// `PLATFORM_OS` environment flag injected into the web content.
    fn platform_family(&self) -> PlatformFamily;
}

/// Push-notification registration.
pub trait PushNotifications {
    /// Passive permission check — never shows a prompt.
    fn push_permissions(&self) -> Result<PermissionOutcome>;

    /// Actively prompt for push permission.
    fn request_push_permission(&self) -> Result<PermissionOutcome>;

    /// The native device token, if registration has already happened.
    fn device_push_token(&self) -> Result<Option<String>>;

    /// The cross-platform (Expo) token. May trigger registration with the
    /// token service; returns `None` when no token could be obtained.
    fn expo_push_token(&self) -> Result<Option<String>>;
}

/// Foreground geolocation.
pub trait Geolocation {
    /// Prompt for (or re-check) foreground location permission.
    fn request_foreground_permission(&self) -> Result<PermissionOutcome>;

    /// Fetch the current position once. No continuous tracking.
    fn current_position(&self) -> Result<Position>;
}

/// Address-book access.
pub trait ContactsProvider {
    /// Passive permission check — never shows a prompt.
    fn contacts_permissions(&self) -> Result<PermissionOutcome>;

    /// Show the native contacts permission prompt.
    fn request_contacts_permission(&self) -> Result<PermissionOutcome>;

    /// Fetch all contacts, restricted to name, email, and phone fields.
    fn fetch_contacts(&self) -> Result<Vec<RawContact>>;
}

/// Clipboard read access.
pub trait ClipboardAccess {
    /// Current clipboard text. Empty string when the clipboard is empty.
    fn clipboard_text(&self) -> Result<String>;
}

/// Native alert and confirmation dialogs.
pub trait NativeDialogs {
    /// Two-choice rationale dialog ("Not yet" / "OK"). Returns `true` when
    /// the user accepts. Blocks until answered.
    fn confirm(&self, copy: &DialogCopy) -> Result<bool>;

    /// Permission-denied alert with an "Open Settings" shortcut and a no-op
    /// "OK" dismissal. Fire-and-forget.
    fn alert_open_settings(&self, copy: &DialogCopy);
}

/// Safe-area inset geometry.
pub trait SafeAreaInsets {
    /// Height of the bottom inset in device-independent pixels.
    fn inset_bottom(&self) -> f64;
}

/// Startup splash-screen control.
pub trait SplashControl {
    /// Keep the splash visible past first paint until `hide_splash`.
    fn prevent_auto_hide(&self);

    /// Hide the splash. Idempotent.
    fn hide_splash(&self);
}
