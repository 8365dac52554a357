// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Session-scoped UI state.
//
// Everything the web content can mutate about the native view lives here in
// one explicit container instead of ambient statics: the safe-area background
// color and the one-time navigation override produced by an accepted referral.

use kmp_core::types::Background;

/// Mutable per-session state, held behind a mutex inside the gateway.
#[derive(Debug, Default)]
pub struct SessionState {
    background: Background,
    nav_override: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(&self) -> Background {
        self.background
    }

    pub fn set_background(&mut self, background: Background) {
        self.background = background;
    }

    /// Record an accepted referral URL. The first accepted referral wins for
    /// the whole session; later calls are ignored.
    pub fn accept_referral(&mut self, url: &str) {
        if self.nav_override.is_none() {
            self.nav_override = Some(url.to_string());
        }
    }

    pub fn nav_override(&self) -> Option<&str> {
        self.nav_override.as_deref()
    }

    /// The URL the shell should actually display: the referral override if
    /// one was accepted, else the initially composed target.
    pub fn navigation_target<'a>(&'a self, initial: &'a str) -> &'a str {
        self.nav_override().unwrap_or(initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referral_override_wins_over_initial_target() {
        let mut session = SessionState::new();
        assert_eq!(
            session.navigation_target("https://kiss-my-plan.com/plans"),
            "https://kiss-my-plan.com/plans"
        );

        session.accept_referral("https://kiss-my-plan.com/invite/42");
        assert_eq!(
            session.navigation_target("https://kiss-my-plan.com/plans"),
            "https://kiss-my-plan.com/invite/42"
        );
    }

    #[test]
    fn first_accepted_referral_is_permanent() {
        let mut session = SessionState::new();
        session.accept_referral("https://kiss-my-plan.com/invite/1");
        session.accept_referral("https://kiss-my-plan.com/invite/2");
        assert_eq!(
            session.nav_override(),
            Some("https://kiss-my-plan.com/invite/1")
        );
    }

    #[test]
    fn background_mutates_in_place() {
        let mut session = SessionState::new();
        assert_eq!(session.background(), Background::White);
        session.set_background(Background::Black);
        assert_eq!(session.background(), Background::Black);
    }
}
