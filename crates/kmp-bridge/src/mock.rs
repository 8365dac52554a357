// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scriptable in-memory bridge for tests and headless development.
//
// Every answer is a plain public field set up front; every interaction that
// matters to a test (prompts shown, clipboard reads, splash hides) is
// recorded so assertions can check what the gateway actually did.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use kmp_core::error::Result;
use kmp_core::prompts::DialogCopy;
use kmp_core::types::{PermissionOutcome, PlatformFamily, Position, RawContact};

use crate::traits::*;

/// Bridge whose every answer is scripted by the test.
pub struct MockBridge {
    pub family: PlatformFamily,
    pub push_check: PermissionOutcome,
    pub push_request: PermissionOutcome,
    pub device_token: Option<String>,
    pub expo_token: Option<String>,
    pub location_permission: PermissionOutcome,
    pub position: Position,
    pub contacts_check: PermissionOutcome,
    pub contacts_request: PermissionOutcome,
    pub contacts: Vec<RawContact>,
    pub clipboard: String,
    pub confirm_answer: bool,
    pub inset: f64,

    // -- Recorded interactions --
    pub push_permission_requests: AtomicUsize,
    pub clipboard_reads: AtomicUsize,
    pub position_reads: AtomicUsize,
    pub contact_fetches: AtomicUsize,
    pub alerts: Mutex<Vec<String>>,
    pub confirms: Mutex<Vec<String>>,
    pub splash_hidden: AtomicBool,
}

impl Default for MockBridge {
    fn default() -> Self {
        Self {
            family: PlatformFamily::Android,
            push_check: PermissionOutcome::granted(),
            push_request: PermissionOutcome::granted(),
            device_token: None,
            expo_token: None,
            location_permission: PermissionOutcome::granted(),
            position: Position::new(55.6761, 12.5683),
            contacts_check: PermissionOutcome::granted(),
            contacts_request: PermissionOutcome::granted(),
            contacts: Vec::new(),
            clipboard: String::new(),
            confirm_answer: true,
            inset: 34.0,
            push_permission_requests: AtomicUsize::new(0),
            clipboard_reads: AtomicUsize::new(0),
            position_reads: AtomicUsize::new(0),
            contact_fetches: AtomicUsize::new(0),
            alerts: Mutex::new(Vec::new()),
            confirms: Mutex::new(Vec::new()),
            splash_hidden: AtomicBool::new(false),
        }
    }
}

impl MockBridge {
    /// Titles of the settings alerts shown so far.
    pub fn alert_titles(&self) -> Vec<String> {
        self.alerts.lock().expect("alerts lock poisoned").clone()
    }

    /// Titles of the rationale dialogs shown so far.
    pub fn confirm_titles(&self) -> Vec<String> {
        self.confirms.lock().expect("confirms lock poisoned").clone()
    }

    pub fn splash_was_hidden(&self) -> bool {
        self.splash_hidden.load(Ordering::SeqCst)
    }

    pub fn clipboard_read_count(&self) -> usize {
        self.clipboard_reads.load(Ordering::SeqCst)
    }

    pub fn push_permission_request_count(&self) -> usize {
        self.push_permission_requests.load(Ordering::SeqCst)
    }
}

impl PlatformBridge for MockBridge {
    fn platform_family(&self) -> PlatformFamily {
        self.family
    }
}

impl PushNotifications for MockBridge {
    fn push_permissions(&self) -> Result<PermissionOutcome> {
        Ok(self.push_check)
    }

    fn request_push_permission(&self) -> Result<PermissionOutcome> {
        self.push_permission_requests.fetch_add(1, Ordering::SeqCst);
        Ok(self.push_request)
    }

    fn device_push_token(&self) -> Result<Option<String>> {
        Ok(self.device_token.clone())
    }

    fn expo_push_token(&self) -> Result<Option<String>> {
        Ok(self.expo_token.clone())
    }
}

impl Geolocation for MockBridge {
    fn request_foreground_permission(&self) -> Result<PermissionOutcome> {
        Ok(self.location_permission)
    }

    fn current_position(&self) -> Result<Position> {
        self.position_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.position)
    }
}

impl ContactsProvider for MockBridge {
    fn contacts_permissions(&self) -> Result<PermissionOutcome> {
        Ok(self.contacts_check)
    }

    fn request_contacts_permission(&self) -> Result<PermissionOutcome> {
        Ok(self.contacts_request)
    }

    fn fetch_contacts(&self) -> Result<Vec<RawContact>> {
        self.contact_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.contacts.clone())
    }
}

impl ClipboardAccess for MockBridge {
    fn clipboard_text(&self) -> Result<String> {
        self.clipboard_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.clipboard.clone())
    }
}

impl NativeDialogs for MockBridge {
    fn confirm(&self, copy: &DialogCopy) -> Result<bool> {
        self.confirms
            .lock()
            .expect("confirms lock poisoned")
            .push(copy.title.to_string());
        Ok(self.confirm_answer)
    }

    fn alert_open_settings(&self, copy: &DialogCopy) {
        self.alerts
            .lock()
            .expect("alerts lock poisoned")
            .push(copy.title.to_string());
    }
}

impl SafeAreaInsets for MockBridge {
    fn inset_bottom(&self) -> f64 {
        self.inset
    }
}

impl SplashControl for MockBridge {
    fn prevent_auto_hide(&self) {}

    fn hide_splash(&self) {
        self.splash_hidden.store(true, Ordering::SeqCst);
    }
}
