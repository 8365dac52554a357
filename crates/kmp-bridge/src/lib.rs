// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Native platform bridge abstractions.
//
// This crate defines the capability-provider traits the gateway depends on:
// push registration, geolocation, contacts, clipboard, dialogs, safe-area
// geometry, and splash control. Device builds (iOS/Android embedders) supply
// their own implementation of `PlatformBridge`; everything else gets the stub.

pub mod traits;

pub mod stub;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

/// Default bridge for the current build.
///
/// RETURNS: a boxed trait object (`dyn PlatformBridge`) abstracting the
/// underlying native SDK details. Desktop and CI builds receive the stub;
/// device embedders construct the gateway with their own bridge instead of
/// calling this.
pub fn platform_bridge() -> Box<dyn traits::PlatformBridge> {
    Box::new(stub::StubBridge)
}
