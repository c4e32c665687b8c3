// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Sequence codec.
//!
//! Layout: `[u32 LE count][elem bytes] x count`, each element fixed-width
//! little-endian in declaration order. The count prefix reflects the
//! elements that actually encoded: an element whose scalar encoding is
//! empty (unsupported type) is dropped and the count decremented, so a
//! receiver can always trust `count * width` against the buffer length.

use crate::error::{WireError, WireResult};
use crate::tag::Scalar;

/// Encode a sequence of scalars as a complete member buffer.
///
/// Iterates `elems` in order; each supported element contributes exactly
/// `T::WIDTH` payload bytes. Unsupported elements are dropped from the
/// output and from the reported count.
pub fn encode_sequence<T: Scalar>(elems: &[T]) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + elems.len() * T::WIDTH);
    out.extend_from_slice(&[0u8; 4]);

    let mut count: u32 = 0;
    for elem in elems {
        let before = out.len();
        elem.put_le(&mut out);
        if out.len() > before {
            count += 1;
        }
    }
    if (count as usize) < elems.len() {
        log::debug!(
            "sequence encode dropped {} unsupported element(s)",
            elems.len() - count as usize
        );
    }

    out[..4].copy_from_slice(&count.to_le_bytes());
    out
}

/// Decode a sequence into a growable destination, appending the decoded
/// elements in order. Returns the number decoded.
///
/// On any validation failure the destination is left unchanged.
pub fn decode_sequence<T: Scalar>(buf: &[u8], dest: &mut Vec<T>) -> WireResult<usize> {
    let count = read_count::<T>(buf)?;
    dest.reserve(count);
    for idx in 0..count {
        let at = 4 + idx * T::WIDTH;
        dest.push(T::get_le(&buf[at..at + T::WIDTH]));
    }
    Ok(count)
}

/// Decode a sequence positionally into a fixed-capacity destination.
///
/// At most `dest.len()` elements are written; the destination capacity acts
/// as the max-count cap. Slots beyond the decoded range keep their previous
/// values. Returns the number decoded.
///
/// On any validation failure the destination is left unchanged.
pub fn decode_sequence_into<T: Scalar>(buf: &[u8], dest: &mut [T]) -> WireResult<usize> {
    let count = read_count::<T>(buf)?;
    let take = count.min(dest.len());
    for (idx, slot) in dest.iter_mut().take(take).enumerate() {
        let at = 4 + idx * T::WIDTH;
        *slot = T::get_le(&buf[at..at + T::WIDTH]);
    }
    Ok(take)
}

/// Validate the count prefix and overall buffer length; returns the element
/// count declared on the wire.
fn read_count<T: Scalar>(buf: &[u8]) -> WireResult<usize> {
    if !T::TAG.is_supported() {
        return Err(WireError::Unsupported);
    }
    if buf.len() < 4 {
        return Err(WireError::Truncated {
            need: 4,
            have: buf.len(),
        });
    }
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&buf[..4]);
    let count = u32::from_le_bytes(raw) as usize;

    // count * WIDTH can overflow usize on 32-bit targets
    let need = count
        .checked_mul(T::WIDTH)
        .and_then(|payload| payload.checked_add(4))
        .ok_or(WireError::Truncated {
            need: usize::MAX,
            have: buf.len(),
        })?;
    if buf.len() < need {
        return Err(WireError::Truncated {
            need,
            have: buf.len(),
        });
    }
    Ok(count)
}
