// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors surfaced at the API boundary

use thiserror::Error;

/// Failure to interpret a wire-form string from a client
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown event kind: {0}")]
    UnknownKind(String),

    #[error("unknown role: {0}")]
    UnknownRole(String),
}
