// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// User-facing dialog copy, centralised so the wording ships identically on
// every platform. Two kinds of dialog exist: permission-denied alerts with a
// settings shortcut, and prominent-disclosure rationales shown before a
// native permission prompt.

/// Title and body of a native dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogCopy {
    pub title: &'static str,
    pub message: &'static str,
}

/// Shown when location permission is denied on a force-variant request.
pub const LOCATION_DENIED: DialogCopy = DialogCopy {
    title: "Permission not granted to access your location",
    message: "You can change that in your settings",
};

/// Shown when the contacts permission prompt is refused.
pub const CONTACTS_DENIED: DialogCopy = DialogCopy {
    title: "Permission not granted to access contacts",
    message: "You can change that in your settings",
};

/// Prominent disclosure shown on Android before the native contacts prompt.
pub const CONTACTS_RATIONALE: DialogCopy = DialogCopy {
    title: "Kiss My Plan wants to access your contacts",
    message: "In order to see if your contacts already use Kiss My Plan, or if \
              you want to invite any of them, we need to access your contacts.",
};

/// Rationale shown before the one-time first-opening clipboard inspection.
pub const CLIPBOARD_RATIONALE: DialogCopy = DialogCopy {
    title: "It's your first time on Kiss My Plan, can we check your Clipboard \
            if you were invited by one of your friends?",
    message: "We need to access your clipboard, it will load the link you \
              clicked on, and if it's a Kiss My Plan link, we will check if \
              you were invited by one of your friends to add him/her to your \
              friends on Kiss My Plan.",
};
