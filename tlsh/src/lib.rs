// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A streaming implementation of **TLSH** (Trend Locality-Sensitive Hash): a
//! fuzzy-hash digest of an arbitrary byte stream, together with a bounded
//! integer similarity score between two such digests.
//!
//! TLSH is a *locality-sensitive* fingerprint: small perturbations of the
//! input cause small changes in the digest, and the numerical distance
//! between two digests correlates with the edit distance between the two
//! inputs they were computed from. Unlike a cryptographic hash, TLSH makes
//! no preimage-resistance or collision-resistance claim.
//!
//! The crate is organized around five pieces, leaves first:
//!
//! *   [`pearson`] — the 256-entry Pearson permutation used as an 8-bit
//!     mixing primitive throughout the digester and the checksum.
//! *   [`length`] — [`l_capturing`], the table-driven mapping from a 64-bit
//!     byte count to an 8-bit "log length" code.
//! *   [`digester`] — [`Digester`], the streaming digester: a sliding-window
//!     triplet histogram plus a running checksum, culminating in a
//!     quartile-based compression step at [`Digester::finalize`].
//! *   [`digest`] — [`Digest`], the immutable digest value, its canonical
//!     packed byte layout and its hexadecimal transport encoding.
//! *   [`score`] — [`score`], the bounded-integer similarity metric between
//!     two digests.
//!
//! [`params`] ties the three together: the `(window, buckets, checksum_len)`
//! triple that configures a [`Digester`], along with the algorithm naming
//! grammar `TLSH-(48|128|256)-(1|3)[/([4-8])]` used to select it.
//!
//! # Example
//!
//! ```
//! use tlsh::Digester;
//!
//! let mut digester = Digester::new(5, 128, 1).unwrap();
//! digester.update(b"Hello world!");
//! let digest = digester.finalize();
//! assert_eq!(
//!     digest.to_hex(),
//!     "DD6000030030000C000000000C300CC00000C000030000000000F00030F0C00300CCC0"
//! );
//! ```
//!
//! # Feature flags
//!
//! *   `std` (default) — enables `std::error::Error` for [`Error`] and is
//!     otherwise a thin convenience layer over `alloc`.
//! *   `serde` — `Serialize`/`Deserialize` for [`Digest`]: a `T1`-prefixed
//!     hex string for human-readable formats, the packed bytes otherwise.
//! *   `inspect` — exposes a read-only inspection API on [`Digester`]
//!     (bucket counters, checksum state, lag window) for tests that need to
//!     cross-check internal state against an independent implementation.

#![cfg_attr(not(any(test, doc, feature = "std")), no_std)]
#![cfg_attr(not(test), warn(missing_docs))]
#![cfg_attr(not(test), warn(clippy::missing_docs_in_private_items))]

extern crate alloc;

pub mod digest;
pub mod digester;
pub mod errors;
pub mod hex;
pub mod length;
pub mod params;
pub mod pearson;
pub mod score;

mod facade;

pub use digest::Digest;
pub use digester::Digester;
pub use errors::Error;
pub use facade::{
    digest_pack, digest_to_hex, digest_to_hex_t1, digest_unpack, digester_finalize,
    digester_for_name, digester_new, digester_reset, digester_update, hex_to_bytes,
};
pub use length::l_capturing;
pub use params::Params;
pub use pearson::Pearson;
pub use score::{score, score_digests};
