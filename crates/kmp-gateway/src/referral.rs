// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// First-opening referral heuristic.
//
// When the app is opened for the first time, the clipboard may still hold
// the invitation link the user tapped before installing. These are the pure
// decision pieces; the clipboard handler wires them to the store, the
// rationale dialog, and the response channel.

/// Whether the app has been opened before. The counter is incremented on
/// every cold start, so anything above one means this is not a first run.
pub fn is_repeat_opening(open_count: u32) -> bool {
    open_count > 1
}

/// Marker delivered instead of clipboard content on repeat openings.
pub fn opening_marker(open_count: u32) -> String {
    format!("numberOfOpenings: {open_count}")
}

/// Accept clipboard text as a referral only when it is present and prefixed
/// by our own base URL.
pub fn referral_url<'a>(clipboard: &'a str, base_url: &str) -> Option<&'a str> {
    if clipboard.is_empty() || !clipboard.starts_with(base_url) {
        return None;
    }
    Some(clipboard)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://kiss-my-plan.com";

    #[test]
    fn first_and_second_opening_are_not_repeats() {
        assert!(!is_repeat_opening(0));
        assert!(!is_repeat_opening(1));
        assert!(is_repeat_opening(2));
        assert!(is_repeat_opening(17));
    }

    #[test]
    fn marker_carries_the_counter_value() {
        assert_eq!(opening_marker(2), "numberOfOpenings: 2");
    }

    #[test]
    fn foreign_urls_are_not_referrals() {
        assert!(referral_url("https://example.com/invite/42", BASE).is_none());
        assert!(referral_url("some plain text", BASE).is_none());
        assert!(referral_url("", BASE).is_none());
    }

    #[test]
    fn own_urls_are_accepted_verbatim() {
        let link = "https://kiss-my-plan.com/invite/42";
        assert_eq!(referral_url(link, BASE), Some(link));
        // The bare base URL itself counts as a referral.
        assert_eq!(referral_url(BASE, BASE), Some(BASE));
    }
}
