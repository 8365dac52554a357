// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the shell.
//
// Note that a denied permission is NOT an error: denial is part of the normal
// capability flow and is surfaced through alerts and sentinel payloads, never
// through this enum.

use thiserror::Error;

/// Top-level error type for all shell operations.
#[derive(Debug, Error)]
pub enum KmpError {
    // -- Persistence --
    #[error("preferences store error: {0}")]
    Store(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("capability not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, KmpError>;
