// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for tagwire operations.
//!
//! Every data-shape failure is soft: it is reported by value and the decode
//! destination stays untouched. Nothing in the library panics.

use crate::tag::TypeTag;
use std::fmt;

/// Result type for codec and member operations.
pub type WireResult<T> = std::result::Result<T, WireError>;

/// Errors produced by the scalar/sequence codecs and member decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireError {
    /// Payload length does not match the scalar width.
    WidthMismatch { expected: usize, actual: usize },

    /// Buffer too short for the count prefix or the declared element count.
    Truncated { need: usize, have: usize },

    /// Stored tag differs from the requested element type.
    TagMismatch { expected: TypeTag, found: TypeTag },

    /// The element type has no wire representation.
    Unsupported,
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::WidthMismatch { expected, actual } => {
                write!(f, "payload width mismatch: expected {} bytes, got {}", expected, actual)
            }
            WireError::Truncated { need, have } => {
                write!(f, "buffer truncated: need {} bytes, have {}", need, have)
            }
            WireError::TagMismatch { expected, found } => {
                write!(f, "tag mismatch: expected {}, found {}", expected, found)
            }
            WireError::Unsupported => write!(f, "unsupported element type"),
        }
    }
}

impl std::error::Error for WireError {}

/// Errors produced by the prototype registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No prototype registered under the requested name.
    UnknownType(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::UnknownType(name) => write!(f, "unknown type: {}", name),
        }
    }
}

impl std::error::Error for RegistryError {}
