// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Contact normalization and validation.
//
// Raw platform contacts are flattened into one record per (contact, valid
// email) pair, each carrying a diacritic-free lowercase search key and the
// contact's validated phone numbers. Contacts without a name, or with neither
// phones nor emails, are dropped; nothing here fails, malformed entries are
// filtered out silently.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use kmp_core::types::{ContactRecord, RawContact, RawPhoneNumber};

/// Conservative email shape. The dot before the final segment is
/// intentionally unescaped and therefore matches any character; the deployed
/// web frontend has only ever seen addresses filtered this way, so the
/// historical laxity is kept.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+.[a-zA-Z0-9-.]+$").expect("email pattern")
});

/// Valid phone candidates after digit extraction: digits, `+`, and spaces.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9+ ]+$").expect("phone pattern"));

/// Derive the search key for a display name.
///
/// Decomposes to NFD and strips combining diacritical marks, replaces every
/// character that is not an ASCII letter or whitespace with a space,
/// lowercases, and collapses whitespace runs. Total function: empty input
/// (or input with no letters) yields an empty string. Idempotent on its own
/// output.
pub fn search_key(name: &str) -> String {
    let decomposed: String = name
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect();

    let letters_only: String = decomposed
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    letters_only
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Validate one phone entry, preferring the platform's pre-extracted digit
/// string. The fallback strips everything but digits and `+` from the raw
/// number, so in practice rejection happens on the pre-extracted form.
fn validate_phone(phone: &RawPhoneNumber) -> Option<String> {
    let candidate = match &phone.digits {
        Some(digits) if !digits.is_empty() => digits.clone(),
        _ => phone
            .number
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect(),
    };

    PHONE_RE.is_match(&candidate).then_some(candidate)
}

fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Flatten and validate the full platform contact list.
///
/// Output preserves the platform's contact order and, within a contact, the
/// email input order.
pub fn flatten_contacts(raw: &[RawContact]) -> Vec<ContactRecord> {
    let mut records = Vec::new();

    for contact in raw {
        if contact.phone_numbers.is_empty() && contact.emails.is_empty() {
            continue;
        }
        let Some(raw_name) = contact.name.as_deref() else {
            continue;
        };
        if raw_name.is_empty() {
            continue;
        }

        // Apostrophes in the display name break the single-quoted injection
        // channel, so they are replaced before the record ever leaves here.
        let name = raw_name.replace('\'', " ");
        let for_search = search_key(raw_name);

        let phone_numbers: Vec<String> = contact
            .phone_numbers
            .iter()
            .filter_map(validate_phone)
            .collect();

        if contact.emails.is_empty() {
            records.push(ContactRecord {
                name,
                for_search,
                email: String::new(),
                phone_numbers,
            });
            continue;
        }

        for email in &contact.emails {
            if !validate_email(email) {
                continue;
            }
            records.push(ContactRecord {
                name: name.clone(),
                for_search: for_search.clone(),
                email: email.clone(),
                phone_numbers: phone_numbers.clone(),
            });
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: contact with a name and the given emails/phones.
    fn contact(name: &str, emails: &[&str], phones: &[RawPhoneNumber]) -> RawContact {
        RawContact {
            name: Some(name.to_string()),
            emails: emails.iter().map(|e| e.to_string()).collect(),
            phone_numbers: phones.to_vec(),
        }
    }

    #[test]
    fn search_key_strips_diacritics_and_case() {
        assert_eq!(search_key("Véronique"), "veronique");
        assert_eq!(search_key("  Zoë   O'Brien-42 "), "zoe o brien");
    }

    #[test]
    fn search_key_replaces_non_letters_with_spaces() {
        assert_eq!(search_key("Anna-Lena (work)"), "anna lena work");
        // Non-Latin letters are not in [a-zA-Z] and collapse away.
        assert_eq!(search_key("李小龙"), "");
        assert_eq!(search_key(""), "");
    }

    #[test]
    fn search_key_is_idempotent() {
        for name in ["Véronique", "Zoë O'Brien", "  many   spaces  ", "плюс"] {
            let once = search_key(name);
            assert_eq!(search_key(&once), once);
        }
    }

    #[test]
    fn contact_without_phones_or_emails_is_dropped() {
        let raw = vec![contact("Lonely", &[], &[])];
        assert!(flatten_contacts(&raw).is_empty());
    }

    #[test]
    fn contact_without_name_is_dropped() {
        let raw = vec![RawContact {
            name: None,
            emails: vec!["someone@example.com".into()],
            phone_numbers: vec![],
        }];
        assert!(flatten_contacts(&raw).is_empty());

        let raw = vec![RawContact {
            name: Some(String::new()),
            emails: vec!["someone@example.com".into()],
            phone_numbers: vec![],
        }];
        assert!(flatten_contacts(&raw).is_empty());
    }

    #[test]
    fn one_record_per_valid_email() {
        let raw = vec![contact(
            "Ada Lovelace",
            &["ada@example.com", "nope", "lovelace@example.org"],
            &[RawPhoneNumber::new("+45 12 34 56 78")],
        )];
        let records = flatten_contacts(&raw);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].email, "ada@example.com");
        assert_eq!(records[1].email, "lovelace@example.org");
        for record in &records {
            assert_eq!(record.name, "Ada Lovelace");
            assert_eq!(record.for_search, "ada lovelace");
            assert_eq!(record.phone_numbers, vec!["+4512345678".to_string()]);
        }
    }

    #[test]
    fn empty_email_list_yields_single_record() {
        let raw = vec![contact(
            "Phone Only",
            &[],
            &[RawPhoneNumber::new("(555) 123-4567")],
        )];
        let records = flatten_contacts(&raw);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].email, "");
        assert_eq!(records[0].phone_numbers, vec!["5551234567".to_string()]);
    }

    #[test]
    fn all_invalid_emails_yield_no_records() {
        // Historical behavior: the empty-email record is only emitted when
        // the raw list is empty, not when every entry fails validation.
        let raw = vec![contact(
            "Bad Emails",
            &["not-an-email", "also@bad"],
            &[RawPhoneNumber::new("12345678")],
        )];
        assert!(flatten_contacts(&raw).is_empty());
    }

    #[test]
    fn invalid_phones_never_survive() {
        let raw = vec![contact(
            "Mixed Phones",
            &[],
            &[
                RawPhoneNumber::with_digits("+45 12 34", "+45 12ab"),
                RawPhoneNumber::new("call me maybe"),
                RawPhoneNumber::new("+1 (555) 000-1111"),
            ],
        )];
        let records = flatten_contacts(&raw);

        assert_eq!(records.len(), 1);
        // Letters in the pre-extracted form reject the entry; the raw
        // fallback strips formatting instead of rejecting.
        assert_eq!(records[0].phone_numbers, vec!["+15550001111".to_string()]);
    }

    #[test]
    fn pre_extracted_digits_are_preferred() {
        let raw = vec![contact(
            "Digits",
            &[],
            &[RawPhoneNumber::with_digits("(555) 123-4567", "+15551234567")],
        )];
        let records = flatten_contacts(&raw);
        assert_eq!(records[0].phone_numbers, vec!["+15551234567".to_string()]);
    }

    #[test]
    fn email_pattern_edges() {
        let cases = [
            ("a@b.c", true),
            ("not-an-email", false),
            ("a@b", false),
            ("first.last+tag@example-host.co", true),
            // The unescaped dot matches any character; kept as-is so the
            // output matches what the web frontend has always received.
            ("a@b!c", true),
        ];
        for (email, expected) in cases {
            assert_eq!(validate_email(email), expected, "email {email:?}");
        }
    }

    #[test]
    fn output_preserves_contact_order() {
        let raw = vec![
            contact("Beta", &["beta@example.com"], &[]),
            contact("Alpha", &["alpha@example.com"], &[]),
        ];
        let records = flatten_contacts(&raw);
        assert_eq!(records[0].name, "Beta");
        assert_eq!(records[1].name, "Alpha");
    }

    #[test]
    fn apostrophes_in_names_become_spaces() {
        let raw = vec![contact("O'Brien", &["ob@example.com"], &[])];
        let records = flatten_contacts(&raw);
        assert_eq!(records[0].name, "O Brien");
        assert_eq!(records[0].for_search, "o brien");
    }
}
