// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The `(w, b, c)` parameter triple and the algorithm naming grammar used by
//! the public facade: `TLSH-(48|128|256)-(1|3)[/([4-8])]`.

use crate::errors::Error;

/// The minimum supported sliding-window length.
pub const MIN_WINDOW: u8 = 4;
/// The maximum supported sliding-window length.
pub const MAX_WINDOW: u8 = 8;
/// The default window length used when the naming grammar omits `/w`.
pub const DEFAULT_WINDOW: u8 = 5;

/// The validated `(w, b, c)` triple that configures a [`Digester`](crate::Digester).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    window: u8,
    buckets: u16,
    checksum_len: u8,
}

impl Params {
    /// Validates and builds a parameter triple.
    ///
    /// Fails with [`Error::InvalidParameter`] if `window` is outside
    /// `4..=8`, if `buckets` is not one of `48`, `128`, `256`, if
    /// `checksum_len` is not `1` or `3`, or if `buckets == 48` is combined
    /// with `checksum_len == 3` (the 48-bucket body is too short for a
    /// 3-byte checksum to stay proportionate).
    pub fn new(window: u8, buckets: u16, checksum_len: u8) -> Result<Self, Error> {
        if !(MIN_WINDOW..=MAX_WINDOW).contains(&window) {
            return Err(Error::InvalidParameter);
        }
        if !matches!(buckets, 48 | 128 | 256) {
            return Err(Error::InvalidParameter);
        }
        if !matches!(checksum_len, 1 | 3) {
            return Err(Error::InvalidParameter);
        }
        if buckets == 48 && checksum_len == 3 {
            return Err(Error::InvalidParameter);
        }
        Ok(Params {
            window,
            buckets,
            checksum_len,
        })
    }

    /// The canonical `TLSH-128-1/5` parameters (bare `TLSH`).
    pub const fn normal() -> Self {
        Params {
            window: DEFAULT_WINDOW,
            buckets: 128,
            checksum_len: 1,
        }
    }

    /// Sliding-window length in bytes (`4..=8`).
    pub const fn window(&self) -> u8 {
        self.window
    }

    /// Bucket count (`48`, `128` or `256`).
    pub const fn buckets(&self) -> u16 {
        self.buckets
    }

    /// Checksum length in bytes (`1` or `3`).
    pub const fn checksum_len(&self) -> u8 {
        self.checksum_len
    }

    /// Body length in bytes, `buckets / 4`.
    pub const fn body_len(&self) -> usize {
        (self.buckets / 4) as usize
    }

    /// The packed digest length in bytes for this parameter triple:
    /// `checksum_len + 2 + body_len`.
    pub const fn packed_len(&self) -> usize {
        self.checksum_len as usize + 2 + self.body_len()
    }

    /// Parses the algorithm naming grammar:
    /// `TLSH-(48|128|256)-(1|3)[/([4-8])]`, with the bare name `TLSH`
    /// aliasing `TLSH-128-1/5` and `/5` the default window when omitted.
    pub fn parse(name: &str) -> Result<Self, Error> {
        if name == "TLSH" {
            return Ok(Self::normal());
        }
        let rest = name.strip_prefix("TLSH-").ok_or(Error::InvalidParameter)?;
        let (body_part, window_part) = match rest.split_once('/') {
            Some((b, w)) => (b, Some(w)),
            None => (rest, None),
        };
        let (buckets_str, checksum_str) =
            body_part.split_once('-').ok_or(Error::InvalidParameter)?;
        let buckets: u16 = buckets_str.parse().map_err(|_| Error::InvalidParameter)?;
        let checksum_len: u8 = checksum_str.parse().map_err(|_| Error::InvalidParameter)?;
        let window: u8 = match window_part {
            None => DEFAULT_WINDOW,
            Some(w) => w.parse().map_err(|_| Error::InvalidParameter)?,
        };
        Self::new(window, buckets, checksum_len)
    }

    /// Infers the `(buckets, checksum_len)` combination from a packed digest
    /// length, returning `None` if the length is not one of the five valid
    /// packed lengths (`15`, `35`, `37`, `67`, `69`), each equal to
    /// `checksum_len + 2 + body_len` for its combination.
    pub fn from_packed_len(len: usize) -> Option<(u16, u8)> {
        match len {
            15 => Some((48, 1)),
            35 => Some((128, 1)),
            37 => Some((128, 3)),
            67 => Some((256, 1)),
            69 => Some((256, 3)),
            _ => None,
        }
    }
}
