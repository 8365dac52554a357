// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the native capability gateway.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier minted for each inbound capability request.
///
/// The wire protocol carries no correlation id, so requests of the same
/// capability are indistinguishable on the wire. This id exists purely on the
/// native side: it is attached to log spans so interleaved responses can be
/// traced back to the request that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Platform family the shell is running on.
///
/// Drives the Android-only contacts gate and the `PLATFORM_OS` value injected
/// into the web environment after first load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformFamily {
    Android,
    Ios,
    /// Desktop / CI builds backed by the stub bridge.
    Desktop,
}

impl PlatformFamily {
    /// Wire string for `window.ENV.PLATFORM_OS`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
            Self::Desktop => "desktop",
        }
    }
}

/// Safe-area background color requested by the web content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Background {
    #[default]
    White,
    Black,
}

impl Background {
    /// CSS color the view layer paints behind the web surface.
    pub fn css(&self) -> &'static str {
        match self {
            Self::White => "#fff",
            Self::Black => "#000",
        }
    }
}

/// Permission state as reported by the platform, fetched fresh on every
/// capability request. The gateway never caches this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionOutcome {
    pub granted: bool,
    pub can_ask_again: bool,
}

impl PermissionOutcome {
    pub fn granted() -> Self {
        Self {
            granted: true,
            can_ask_again: true,
        }
    }

    pub fn denied(can_ask_again: bool) -> Self {
        Self {
            granted: false,
            can_ask_again,
        }
    }
}

/// Geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A position as delivered to the web content: `{"coords": {...}}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub coords: Coordinates,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            coords: Coordinates {
                latitude,
                longitude,
            },
        }
    }

    /// The `{0, 0}` sentinel sent when location access is unavailable.
    pub fn center_of_the_world() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A phone number as returned by the platform contacts provider.
///
/// `digits` is the platform's pre-extracted digit string, present on some
/// platforms only. When present it is preferred over `number` for validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPhoneNumber {
    pub number: String,
    pub digits: Option<String>,
}

impl RawPhoneNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            digits: None,
        }
    }

    pub fn with_digits(number: impl Into<String>, digits: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            digits: Some(digits.into()),
        }
    }
}

/// A contact as returned by the platform provider, limited to the three
/// fields the gateway requests (name, emails, phone numbers).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawContact {
    pub name: Option<String>,
    pub emails: Vec<String>,
    pub phone_numbers: Vec<RawPhoneNumber>,
}

/// A flattened, validated contact record as delivered to the web content.
///
/// One record is emitted per (contact, valid email) pair; a contact with an
/// empty raw email list yields a single record with `email: ""`. All records
/// fanned out from one contact share the same name, search key, and phone
/// list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub name: String,
    pub for_search: String,
    pub email: String,
    pub phone_numbers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_serializes_to_coords_shape() {
        let json = serde_json::to_string(&Position::center_of_the_world()).expect("serialize");
        assert_eq!(json, r#"{"coords":{"latitude":0.0,"longitude":0.0}}"#);
    }

    #[test]
    fn contact_record_serializes_camel_case() {
        let record = ContactRecord {
            name: "Ada".into(),
            for_search: "ada".into(),
            email: "ada@example.com".into(),
            phone_numbers: vec!["+4512345678".into()],
        };
        let json = serde_json::to_string(&record).expect("serialize");
        assert!(json.contains(r#""forSearch":"ada""#));
        assert!(json.contains(r#""phoneNumbers":["+4512345678"]"#));
    }

    #[test]
    fn background_defaults_to_white() {
        assert_eq!(Background::default().css(), "#fff");
    }
}
