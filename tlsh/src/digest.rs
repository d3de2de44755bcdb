// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The digest value: an immutable record of (checksum, length-code,
//! q1/q2-ratio, body), its canonical packed byte layout, and the
//! hexadecimal transport encoding.

use crate::errors::Error;
use crate::hex;
use crate::params::Params;
use alloc::string::String;
use alloc::vec::Vec;

/// Swaps the low and high nibble of a byte.
#[inline(always)]
const fn swap_nibbles(x: u8) -> u8 {
    (x << 4) | (x >> 4)
}

/// An immutable TLSH digest value.
///
/// Two digests compare equal iff all fields are element-wise equal; there
/// are no external references held by a `Digest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    checksum: Vec<u8>,
    lvalue: u8,
    q1_ratio: u8,
    q2_ratio: u8,
    body: Vec<u8>,
}

impl Digest {
    /// Builds a digest value from its constituent fields.
    ///
    /// This does not validate `checksum.len() ∈ {1, 3}` or
    /// `body.len() ∈ {12, 32, 64}`; those invariants are established by the
    /// digester's [`finalize`](crate::Digester::finalize) and by
    /// [`unpack`](Digest::unpack), the two normal constructors.
    pub(crate) fn from_parts(checksum: Vec<u8>, lvalue: u8, q1_ratio: u8, q2_ratio: u8, body: Vec<u8>) -> Self {
        Digest {
            checksum,
            lvalue,
            q1_ratio: q1_ratio & 0xf,
            q2_ratio: q2_ratio & 0xf,
            body,
        }
    }

    /// The rolling checksum, 1 or 3 bytes.
    pub fn checksum(&self) -> &[u8] {
        &self.checksum
    }

    /// The length code (`l_capturing(count)` at finalize time).
    pub fn lvalue(&self) -> u8 {
        self.lvalue
    }

    /// The low nibble of `q1 * 100 / q3`.
    pub fn q1_ratio(&self) -> u8 {
        self.q1_ratio
    }

    /// The low nibble of `q2 * 100 / q3`.
    pub fn q2_ratio(&self) -> u8 {
        self.q2_ratio
    }

    /// The compressed bucket histogram, 12, 32 or 64 bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Packs this digest into its canonical byte form.
    ///
    /// Layout: checksum bytes (nibble-swapped), the lvalue byte
    /// (nibble-swapped), `(q1_ratio << 4) | q2_ratio`, then the body bytes
    /// in reverse order.
    pub fn pack(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.checksum.len() + 2 + self.body.len());
        out.extend(self.checksum.iter().map(|&b| swap_nibbles(b)));
        out.push(swap_nibbles(self.lvalue));
        out.push((self.q1_ratio << 4) | self.q2_ratio);
        out.extend(self.body.iter().rev().copied());
        out
    }

    /// Unpacks a digest from its canonical byte form.
    ///
    /// The bucket/checksum combination is inferred from `bytes.len()`; any
    /// length other than `15`, `35`, `37`, `67` or `69` fails with
    /// [`Error::BadFormat`].
    pub fn unpack(bytes: &[u8]) -> Result<Self, Error> {
        let (buckets, checksum_len) =
            Params::from_packed_len(bytes.len()).ok_or(Error::BadFormat)?;
        let c = checksum_len as usize;
        let checksum: Vec<u8> = bytes[0..c].iter().map(|&b| swap_nibbles(b)).collect();
        let lvalue = swap_nibbles(bytes[c]);
        let q_byte = bytes[c + 1];
        let q1_ratio = q_byte >> 4;
        let q2_ratio = q_byte & 0xf;
        let mut body: Vec<u8> = bytes[c + 2..].to_vec();
        body.reverse();
        debug_assert_eq!(body.len(), (buckets / 4) as usize);
        Ok(Digest {
            checksum,
            lvalue,
            q1_ratio,
            q2_ratio,
            body,
        })
    }

    /// Upper-case hex encoding of the packed form.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.pack(), false)
    }

    /// Upper-case hex encoding of the packed form, prefixed with `T1`.
    pub fn to_hex_t1(&self) -> String {
        hex::encode(&self.pack(), true)
    }

    /// Parses a hex string (with or without a `T1` prefix) back into a
    /// digest.
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let bytes = hex::decode(s)?;
        Self::unpack(&bytes)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex_t1())
        } else {
            serializer.serialize_bytes(&self.pack())
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;

        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = Digest;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("a TLSH digest (hex string or packed bytes)")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Digest, E> {
                Digest::from_hex(v).map_err(E::custom)
            }

            fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Digest, E> {
                Digest::unpack(v).map_err(E::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(Visitor)
        } else {
            deserializer.deserialize_bytes(Visitor)
        }
    }
}
