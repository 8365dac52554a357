// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The wire vocabulary and its decode.
//
// Inbound messages are opaque string tokens from a fixed, closed vocabulary.
// There is no payload; request context (which permission variant, which token
// kind) is encoded by having multiple tokens per capability. The vocabulary
// must stay byte-identical for compatibility with the deployed web frontend,
// but internally every token is decoded into a tagged request at the boundary
// so the rest of the system branches on types, not strings.

use kmp_core::types::RequestId;

// ---------------------------------------------------------------------------
// Inbound tokens (exact wire strings)
// ---------------------------------------------------------------------------

pub const TOKEN_SET_BACKGROUND_BLACK: &str = "request-native-set-safe-background-black";
pub const TOKEN_SET_BACKGROUND_WHITE: &str = "request-native-set-safe-background-white";
pub const TOKEN_GET_INSET_BOTTOM_HEIGHT: &str = "request-native-get-inset-bottom-height";
pub const TOKEN_GET_CONTACTS: &str = "request-native-get-contacts";
pub const TOKEN_CLIPBOARD_TEXT: &str = "request-native-clipboard-text-content";
pub const TOKEN_CLIPBOARD_TEXT_FIRST_OPENING: &str =
    "request-native-clipboard-text-content-on-first-opening";
pub const TOKEN_GET_CURRENT_POSITION: &str = "request-native-get-current-position";
pub const TOKEN_FORCE_CURRENT_POSITION: &str = "request-native-force-current-position";
pub const TOKEN_PUSH_PERMISSION: &str = "request-native-push-permission";
pub const TOKEN_EXPO_PUSH_PERMISSION: &str = "request-native-expo-push-permission";
pub const TOKEN_GET_TOKEN_IF_EXISTS: &str = "request-native-get-token-if-exists";
pub const TOKEN_GET_EXPO_TOKEN: &str = "request-native-get-expo-token";

// ---------------------------------------------------------------------------
// Outbound callback names
// ---------------------------------------------------------------------------

pub const CB_INSET_BOTTOM_HEIGHT: &str = "onGetInsetBottomHeight";
pub const CB_CONTACTS: &str = "onGetContacts";
pub const CB_CLIPBOARD_TEXT: &str = "onGetClipboardTextContent";
pub const CB_CURRENT_POSITION: &str = "onGetCurrentPosition";
pub const CB_UN_ZOOM: &str = "onUnZoom";
pub const CB_PUSH_TOKEN: &str = "onNativePushToken";

// ---------------------------------------------------------------------------
// Decoded request types
// ---------------------------------------------------------------------------

/// Messages handled synchronously in the router's tick, without a capability
/// provider round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiSync {
    SetBackgroundBlack,
    SetBackgroundWhite,
    GetInsetBottomHeight,
}

/// The four permission-gated device capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Push,
    Location,
    Contacts,
    Clipboard,
}

/// Disambiguates aliased tokens of the same capability (force-vs-lazy
/// semantics, first-opening variants, token kinds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestVariant {
    // -- Push --
    PushPrompt,
    ExpoPushPrompt,
    PushTokenIfExists,
    ExpoPushToken,
    // -- Location --
    CurrentPosition,
    ForceCurrentPosition,
    // -- Contacts --
    GetContacts,
    // -- Clipboard --
    ClipboardText,
    ClipboardTextOnFirstOpening,
}

/// A decoded capability request with its internally minted id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityRequest {
    pub capability: Capability,
    pub variant: RequestVariant,
    pub request_id: RequestId,
}

impl CapabilityRequest {
    fn new(capability: Capability, variant: RequestVariant) -> Self {
        Self {
            capability,
            variant,
            request_id: RequestId::new(),
        }
    }
}

/// A fully decoded inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboundMessage {
    UiSync(UiSync),
    Capability(CapabilityRequest),
}

impl InboundMessage {
    /// Decode a raw wire token. Unknown tokens yield `None` and are dropped
    /// by the router without a trace.
    pub fn parse(raw: &str) -> Option<Self> {
        use self::{Capability as C, RequestVariant as V};

        let message = match raw {
            TOKEN_SET_BACKGROUND_BLACK => Self::UiSync(UiSync::SetBackgroundBlack),
            TOKEN_SET_BACKGROUND_WHITE => Self::UiSync(UiSync::SetBackgroundWhite),
            TOKEN_GET_INSET_BOTTOM_HEIGHT => Self::UiSync(UiSync::GetInsetBottomHeight),
            TOKEN_GET_CONTACTS => Self::Capability(CapabilityRequest::new(C::Contacts, V::GetContacts)),
            TOKEN_CLIPBOARD_TEXT => {
                Self::Capability(CapabilityRequest::new(C::Clipboard, V::ClipboardText))
            }
            TOKEN_CLIPBOARD_TEXT_FIRST_OPENING => Self::Capability(CapabilityRequest::new(
                C::Clipboard,
                V::ClipboardTextOnFirstOpening,
            )),
            TOKEN_GET_CURRENT_POSITION => {
                Self::Capability(CapabilityRequest::new(C::Location, V::CurrentPosition))
            }
            TOKEN_FORCE_CURRENT_POSITION => {
                Self::Capability(CapabilityRequest::new(C::Location, V::ForceCurrentPosition))
            }
            TOKEN_PUSH_PERMISSION => Self::Capability(CapabilityRequest::new(C::Push, V::PushPrompt)),
            TOKEN_EXPO_PUSH_PERMISSION => {
                Self::Capability(CapabilityRequest::new(C::Push, V::ExpoPushPrompt))
            }
            TOKEN_GET_TOKEN_IF_EXISTS => {
                Self::Capability(CapabilityRequest::new(C::Push, V::PushTokenIfExists))
            }
            TOKEN_GET_EXPO_TOKEN => Self::Capability(CapabilityRequest::new(C::Push, V::ExpoPushToken)),
            _ => return None,
        };
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_decodes() {
        let tokens = [
            TOKEN_SET_BACKGROUND_BLACK,
            TOKEN_SET_BACKGROUND_WHITE,
            TOKEN_GET_INSET_BOTTOM_HEIGHT,
            TOKEN_GET_CONTACTS,
            TOKEN_CLIPBOARD_TEXT,
            TOKEN_CLIPBOARD_TEXT_FIRST_OPENING,
            TOKEN_GET_CURRENT_POSITION,
            TOKEN_FORCE_CURRENT_POSITION,
            TOKEN_PUSH_PERMISSION,
            TOKEN_EXPO_PUSH_PERMISSION,
            TOKEN_GET_TOKEN_IF_EXISTS,
            TOKEN_GET_EXPO_TOKEN,
        ];
        for token in tokens {
            assert!(InboundMessage::parse(token).is_some(), "token {token} must decode");
        }
    }

    #[test]
    fn unknown_token_yields_none() {
        assert!(InboundMessage::parse("request-native-reboot").is_none());
        assert!(InboundMessage::parse("").is_none());
        // Near-misses must not decode either.
        assert!(InboundMessage::parse("request-native-get-contacts ").is_none());
    }

    #[test]
    fn aliased_tokens_share_a_capability() {
        let plain = InboundMessage::parse(TOKEN_GET_CURRENT_POSITION).expect("decode");
        let force = InboundMessage::parse(TOKEN_FORCE_CURRENT_POSITION).expect("decode");
        let (InboundMessage::Capability(plain), InboundMessage::Capability(force)) = (plain, force)
        else {
            panic!("location tokens must decode as capability requests");
        };
        assert_eq!(plain.capability, Capability::Location);
        assert_eq!(force.capability, Capability::Location);
        assert_ne!(plain.variant, force.variant);
    }

    #[test]
    fn each_decode_mints_a_fresh_request_id() {
        let a = InboundMessage::parse(TOKEN_GET_CONTACTS).expect("decode");
        let b = InboundMessage::parse(TOKEN_GET_CONTACTS).expect("decode");
        let (InboundMessage::Capability(a), InboundMessage::Capability(b)) = (a, b) else {
            panic!("contacts token must decode as a capability request");
        };
        assert_ne!(a.request_id, b.request_id);
    }
}
