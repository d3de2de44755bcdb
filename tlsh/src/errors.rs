// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for digester construction, digest parsing and scoring.

use core::fmt::{Display, Formatter, Result as FmtResult};

/// An error returned by this crate.
///
/// All operations in this crate are synchronous and never retry; an error
/// is always surfaced directly to the caller at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A constructor was given an invalid parameter.
    ///
    /// Raised by [`Digester::new`](crate::Digester::new) (window length
    /// outside `4..=8`, or an unsupported bucket/checksum combination) and by
    /// [`Pearson::new`](crate::pearson::Pearson::new) (the supplied table is
    /// not a permutation of `0..=255`).
    InvalidParameter,
    /// A byte buffer or hexadecimal string had an unexpected shape.
    ///
    /// Raised by [`digest_unpack`](crate::digest_unpack) (buffer length is
    /// not one of the five valid packed lengths) and by
    /// [`hex_to_bytes`](crate::hex_to_bytes) (odd length, invalid prefix, or
    /// a non-hexadecimal character).
    BadFormat,
    /// Two digests could not be compared because their shapes differ.
    ///
    /// Raised by [`score`](crate::score) when the checksum lengths or body
    /// lengths of the two digests do not match.
    Mismatched,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Error::InvalidParameter => "invalid parameter",
            Error::BadFormat => "unexpected buffer or string format",
            Error::Mismatched => "digests are not comparable (shape mismatch)",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
#[cfg(all(not(feature = "std"), tlsh_error_in_core = "stable"))]
impl core::error::Error for Error {}
