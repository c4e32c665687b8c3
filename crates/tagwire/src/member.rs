// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Named member store.
//!
//! A [`Member`] is one tagged byte buffer; a [`MemberStore`] maps member
//! names to members with lookup-or-create access. Writing a member replaces
//! its tag and bytes atomically; reading validates the stored tag against
//! the requested element type first and leaves the destination untouched on
//! any mismatch.
//!
//! The encodable shapes form a closed set, one [`Encode`]/[`Decode`] impl
//! per variant: a bare scalar, a fixed array `[T; N]`, and a dynamic
//! sequence (`Vec<T>` or `[T]`).

use crate::error::{WireError, WireResult};
use crate::scalar::{decode_scalar, encode_scalar, Extended};
use crate::sequence::{decode_sequence, decode_sequence_into, encode_sequence};
use crate::tag::{Scalar, TypeTag};
use std::collections::HashMap;

/// One serialized member: a type tag plus its encoded bytes.
///
/// Fresh members carry [`TypeTag::None`] and an empty buffer until the
/// first successful write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Member {
    tag: TypeTag,
    bytes: Vec<u8>,
}

impl Member {
    /// Stored tag (`None` until the first successful write).
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Encoded bytes, count prefix included.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Encode `value` into this member, replacing the stored tag and bytes.
    ///
    /// An empty computed encoding (an unsupported bare scalar) leaves the
    /// member entirely unchanged: a member is never clobbered with an
    /// invalid pair.
    pub fn write<V: Encode + ?Sized>(&mut self, value: &V) -> &mut Self {
        let (tag, bytes) = value.encode();
        if bytes.is_empty() {
            log::debug!("member write skipped: empty encoding (tag {})", tag);
            return self;
        }
        self.tag = tag;
        self.bytes = bytes;
        self
    }

    /// Decode this member into `dest`.
    ///
    /// The stored tag must equal the destination's element tag; on that or
    /// any later validation failure `dest` is left byte-for-byte unchanged
    /// and the cause is reported.
    pub fn read<V: Decode + ?Sized>(&self, dest: &mut V) -> WireResult<()> {
        let expected = V::element_tag();
        if self.tag != expected {
            log::debug!(
                "member read rejected: stored tag {} != requested {}",
                self.tag,
                expected
            );
            return Err(WireError::TagMismatch {
                expected,
                found: self.tag,
            });
        }
        dest.decode_payload(&self.bytes)
    }
}

/// Named collection of serialized members.
///
/// Keys are unique member names; insertion order is not significant. Access
/// through [`key`](MemberStore::key) is lookup-or-create and never fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberStore {
    members: HashMap<String, Member>,
}

impl MemberStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Member slot for `name`, created blank on first access.
    pub fn key(&mut self, name: &str) -> &mut Member {
        self.members.entry(name.to_string()).or_default()
    }

    /// Existence test; never creates a slot.
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Read-only member lookup; `None` if the slot was never created.
    pub fn get(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if no member was ever created.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate member names (arbitrary order).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }
}

/// A value with a member encoding.
///
/// The closed set of shapes: bare scalar, fixed array `[T; N]`, dynamic
/// sequence (`Vec<T>` or `[T]`). Each impl computes the `(tag, bytes)`
/// pair for its shape.
pub trait Encode {
    /// Compute the tag and complete member buffer for this value.
    fn encode(&self) -> (TypeTag, Vec<u8>);
}

/// A destination a member can decode into.
///
/// Mirrors the [`Encode`] shapes. `decode_payload` is only invoked after
/// the tag check passed and must not modify `self` on failure.
pub trait Decode {
    /// Element tag the stored member must carry.
    fn element_tag() -> TypeTag;

    /// Decode the complete member buffer (count prefix included) into
    /// `self`.
    fn decode_payload(&mut self, bytes: &[u8]) -> WireResult<()>;
}

/// Generate the bare-scalar `Encode`/`Decode` impls for one concrete type.
///
/// One impl per concrete type rather than a blanket over `T: Scalar`: the
/// container impls below would collide with a blanket under coherence.
macro_rules! impl_member_scalar {
    ($ty:ty) => {
        impl Encode for $ty {
            fn encode(&self) -> (TypeTag, Vec<u8>) {
                (<$ty as Scalar>::TAG, encode_scalar(*self))
            }
        }

        impl Decode for $ty {
            fn element_tag() -> TypeTag {
                <$ty as Scalar>::TAG
            }

            fn decode_payload(&mut self, bytes: &[u8]) -> WireResult<()> {
                let need = 4 + <$ty as Scalar>::WIDTH;
                if bytes.len() < need {
                    return Err(WireError::Truncated {
                        need,
                        have: bytes.len(),
                    });
                }
                // the count prefix is ignored on the scalar path
                *self = decode_scalar(&bytes[4..need])?;
                Ok(())
            }
        }
    };
}

impl_member_scalar!(u8);
impl_member_scalar!(i8);
impl_member_scalar!(u16);
impl_member_scalar!(i16);
impl_member_scalar!(u32);
impl_member_scalar!(i32);
impl_member_scalar!(u64);
impl_member_scalar!(i64);
impl_member_scalar!(f32);
impl_member_scalar!(f64);
impl_member_scalar!(Extended);
impl_member_scalar!(u128);
impl_member_scalar!(i128);

impl<T: Scalar, const N: usize> Encode for [T; N] {
    fn encode(&self) -> (TypeTag, Vec<u8>) {
        (T::TAG, encode_sequence(self))
    }
}

impl<T: Scalar> Encode for [T] {
    fn encode(&self) -> (TypeTag, Vec<u8>) {
        (T::TAG, encode_sequence(self))
    }
}

impl<T: Scalar> Encode for Vec<T> {
    fn encode(&self) -> (TypeTag, Vec<u8>) {
        (T::TAG, encode_sequence(self))
    }
}

impl<T: Scalar, const N: usize> Decode for [T; N] {
    fn element_tag() -> TypeTag {
        T::TAG
    }

    fn decode_payload(&mut self, bytes: &[u8]) -> WireResult<()> {
        decode_sequence_into(bytes, self).map(|_| ())
    }
}

impl<T: Scalar> Decode for [T] {
    fn element_tag() -> TypeTag {
        T::TAG
    }

    fn decode_payload(&mut self, bytes: &[u8]) -> WireResult<()> {
        decode_sequence_into(bytes, self).map(|_| ())
    }
}

impl<T: Scalar> Decode for Vec<T> {
    fn element_tag() -> TypeTag {
        T::TAG
    }

    fn decode_payload(&mut self, bytes: &[u8]) -> WireResult<()> {
        decode_sequence(bytes, self).map(|_| ())
    }
}
