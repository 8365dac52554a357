// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The native capability gateway.
//
// Web content running inside the embedded renderer cannot reach device APIs
// directly. It emits string-encoded request tokens; this crate decodes them,
// performs the privileged operation through the platform bridge, and answers
// by injecting a callback invocation back into the web execution context.
//
// Module map:
//   message   — the wire vocabulary and its decode into tagged requests
//   router    — the single inbound entry point and dispatch policy
//   handlers  — per-capability flows (push, location, contacts, clipboard)
//   contacts  — pure normalization/validation pipeline for contact records
//   referral  — first-opening clipboard referral heuristic
//   response  — callback injection channel into the web renderer
//   session   — request-scoped UI state (background, navigation override)
//   store     — rusqlite-backed preferences (open counter, historical flags)

pub mod contacts;
pub mod handlers;
pub mod message;
pub mod referral;
pub mod response;
pub mod router;
pub mod session;
pub mod store;

pub use message::{Capability, CapabilityRequest, InboundMessage, RequestVariant, UiSync};
pub use response::{ResponseChannel, WebRenderer};
pub use router::Gateway;
pub use session::SessionState;
pub use store::PrefsStore;
