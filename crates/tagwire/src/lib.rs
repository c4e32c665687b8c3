// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # Tagwire - Tagged little-endian member serialization
//!
//! A small serialization core: scalar values and homogeneous sequences are
//! encoded into a tagged, endian-stable byte layout, stored under named
//! keys inside a [`MemberStore`], and whole entities are reconstructed by
//! type name through a [`Registry`] of prototypes.
//!
//! ## Quick Start
//!
//! ```rust
//! use tagwire::{MemberStore, TypeTag};
//!
//! let mut store = MemberStore::new();
//!
//! // Encode members: scalars, fixed arrays and sequences share one layout
//! store.key("id").write(&42u32);
//! store.key("gains").write(&[0.5f64, 0.25, 0.125]);
//! store.key("samples").write(&vec![1i16, -2, 3]);
//!
//! // Decode them back; the stored tag guards every read
//! let mut id = 0u32;
//! store.key("id").read(&mut id).expect("tag matches");
//! assert_eq!(id, 42);
//! assert_eq!(store.key("id").tag(), TypeTag::U32);
//!
//! // A mismatched read reports the error and leaves the destination alone
//! let mut wrong = 0u16;
//! assert!(store.key("id").read(&mut wrong).is_err());
//! assert_eq!(wrong, 0);
//! ```
//!
//! ## Wire layout
//!
//! Every member buffer is `[u32 LE count][payload]`: a bare scalar stores
//! count 1 followed by its little-endian bytes, a sequence stores the
//! element count followed by the fixed-width element bytes in order. The
//! [`TypeTag`] travels out-of-band beside the buffer; a receiver needs it
//! (or must transmit it) to interpret the bytes.
//!
//! Byte order on the wire is always little-endian regardless of host
//! order. Floats travel as their bit pattern at the same width;
//! [`Extended`] 128-bit values travel as two 64-bit limbs, low limb first.
//!
//! ## Error model
//!
//! Data-shape failures are soft: decode errors are reported by value
//! ([`WireError`]) with the destination untouched, unsupported encodes
//! produce nothing rather than corrupting a member, and an unknown name at
//! the registry is an explicit [`RegistryError`]. The library never
//! panics.
//!
//! ## Modules Overview
//!
//! - [`tag`] - scalar type tags and the [`Scalar`] trait
//! - [`scalar`] - single-value codec and the [`Extended`] carrier
//! - [`sequence`] - count-prefixed sequence codec
//! - [`member`] - named member store
//! - [`registry`] - prototype registry for by-name reconstruction
//! - [`error`] - error taxonomy

/// Error types for codec, member and registry operations.
pub mod error;
/// Named member store holding tagged byte buffers.
pub mod member;
/// Prototype registry for reconstructing entities by type name.
pub mod registry;
/// Scalar codec: single-value little-endian encode/decode.
pub mod scalar;
/// Sequence codec: count-prefixed arrays and vectors of scalars.
pub mod sequence;
/// Scalar type tags and the tag resolver.
pub mod tag;

pub use error::{RegistryError, WireError, WireResult};
pub use member::{Decode, Encode, Member, MemberStore};
pub use registry::{Registry, Serializable};
pub use scalar::{decode_scalar, decode_scalar_or_zero, encode_scalar, Extended};
pub use sequence::{decode_sequence, decode_sequence_into, encode_sequence};
pub use tag::{Scalar, TypeTag};

// Width arithmetic throughout the crate counts bits in groups of eight; a
// platform with wider bytes would make every layout computation wrong.
const _: () = assert!(u8::BITS == 8);
