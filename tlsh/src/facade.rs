// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A function-per-operation facade: thin free functions over
//! [`Digester`]/[`Digest`] for callers that prefer to call
//! `tlsh::digester_new(..)` rather than `Digester::new(..)`.

use crate::digest::Digest;
use crate::digester::Digester;
use crate::errors::Error;
use crate::hex;
use crate::params::Params;
use alloc::string::String;
use alloc::vec::Vec;

/// Creates a digester in reset state for the given `(w, b, c)` triple.
///
/// See [`Digester::new`].
pub fn digester_new(window: u8, buckets: u16, checksum_len: u8) -> Result<Digester, Error> {
    Digester::new(window, buckets, checksum_len)
}

/// Creates a digester from the algorithm naming grammar
/// (`TLSH-(48|128|256)-(1|3)[/([4-8])]`, bare `TLSH` aliasing
/// `TLSH-128-1/5`).
///
/// See [`Params::parse`].
pub fn digester_for_name(name: &str) -> Result<Digester, Error> {
    Ok(Digester::with_params(Params::parse(name)?))
}

/// Appends bytes to the stream.
///
/// See [`Digester::update`].
pub fn digester_update(digester: &mut Digester, bytes: &[u8]) {
    digester.update(bytes);
}

/// Returns a digester to empty state.
///
/// See [`Digester::reset`].
pub fn digester_reset(digester: &mut Digester) {
    digester.reset();
}

/// Consumes the accumulated state and returns the digest value.
///
/// See [`Digester::finalize`].
pub fn digester_finalize(digester: &mut Digester) -> Digest {
    digester.finalize()
}

/// Packs a digest into its canonical byte form.
///
/// See [`Digest::pack`].
pub fn digest_pack(digest: &Digest) -> Vec<u8> {
    digest.pack()
}

/// Unpacks a digest from its canonical byte form.
///
/// See [`Digest::unpack`].
pub fn digest_unpack(bytes: &[u8]) -> Result<Digest, Error> {
    Digest::unpack(bytes)
}

/// Upper-case hex encoding of a packed digest buffer.
pub fn digest_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes, false)
}

/// Upper-case hex encoding of a packed digest buffer, prefixed with the
/// `T1` format-version tag.
pub fn digest_to_hex_t1(bytes: &[u8]) -> String {
    hex::encode(bytes, true)
}

/// Decodes a hex string (optionally `T1`-prefixed) into bytes.
///
/// See [`hex::decode`].
pub fn hex_to_bytes(s: &str) -> Result<Vec<u8>, Error> {
    hex::decode(s)
}

mod tests;
