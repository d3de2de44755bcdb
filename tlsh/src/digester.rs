// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The streaming digester: a sliding-window triplet histogram over the
//! input, a running checksum, and the quartile-based finalize step.
//!
//! A single parameterized type serves all five `(w, b, c)` combinations:
//! the bucket-update triples only depend on the window length, so building
//! that list once at construction and indexing through it is equivalent to
//! unrolling a separate type per window length, without the code
//! duplication.

use crate::digest::Digest;
use crate::errors::Error;
use crate::length::l_capturing;
use crate::params::Params;
use crate::pearson::Pearson;
use alloc::vec;
use alloc::vec::Vec;

/// `(salt prime, a, b)`: `a` and `b` index into the lag window `{l1..l_{w-1}}`,
/// 1-based (`l1` is the immediately preceding byte).
type Triple = (u8, u8, u8);

/// Builds the cumulative bucket-update triple list for a given window
/// length: each wider window reuses every triple of the narrower ones and
/// adds the triples formed with its newest lag position.
fn triples_for_window(w: u8) -> Vec<Triple> {
    let mut triples: Vec<Triple> = vec![(2, 1, 2), (3, 1, 3), (5, 2, 3)];
    if w >= 5 {
        triples.extend([(7, 2, 4), (11, 1, 4), (13, 3, 4)]);
    }
    if w >= 6 {
        triples.extend([(17, 1, 5), (19, 2, 5), (23, 3, 5), (29, 4, 5)]);
    }
    if w >= 7 {
        triples.extend([(31, 1, 6), (37, 2, 6), (41, 3, 6), (43, 4, 6), (47, 5, 6)]);
    }
    if w >= 8 {
        triples.extend([
            (53, 1, 7),
            (59, 2, 7),
            (61, 3, 7),
            (67, 4, 7),
            (71, 5, 7),
            (73, 6, 7),
        ]);
    }
    triples
}

/// The streaming TLSH digester.
///
/// Created by [`Digester::new`]; fed with [`update`](Digester::update);
/// consumed by [`finalize`](Digester::finalize), which returns a [`Digest`]
/// and leaves the instance in a stale state until [`reset`](Digester::reset)
/// is called. Not safe for concurrent mutation — use one digester per
/// producer.
#[derive(Debug, Clone)]
pub struct Digester {
    params: Params,
    pearson: Pearson,
    triples: Vec<Triple>,
    buckets: [u64; 256],
    checksum: [u8; 3],
    count: u64,
    /// `lag[0] == l1` (the immediately preceding byte), `lag[1] == l2`, etc.
    /// Only the first `w - 1` entries are meaningful.
    lag: [u8; 7],
}

impl Digester {
    /// Creates a digester in reset state for the given `(w, b, c)` triple.
    ///
    /// Fails with [`Error::InvalidParameter`] through the same validation
    /// as [`Params::new`].
    pub fn new(window: u8, buckets: u16, checksum_len: u8) -> Result<Self, Error> {
        let params = Params::new(window, buckets, checksum_len)?;
        Ok(Self::with_params(params))
    }

    /// Creates a digester from an already-validated parameter triple.
    pub fn with_params(params: Params) -> Self {
        Digester {
            triples: triples_for_window(params.window()),
            params,
            pearson: Pearson::canonical(),
            buckets: [0u64; 256],
            checksum: [0u8; 3],
            count: 0,
            lag: [0u8; 7],
        }
    }

    /// The parameter triple this digester was constructed with.
    pub fn params(&self) -> Params {
        self.params
    }

    /// Appends bytes to the stream.
    ///
    /// `update(a); update(b)` is always equivalent to `update(a ++ b)`.
    /// Never fails.
    pub fn update(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.update_byte(b);
        }
    }

    fn update_byte(&mut self, l0: u8) {
        let w = self.params.window();
        if self.count >= (w as u64 - 1) {
            self.running_update(l0);
        }
        let wm1 = (w - 1) as usize;
        for i in (1..wm1).rev() {
            self.lag[i] = self.lag[i - 1];
        }
        self.lag[0] = l0;
        self.count += 1;
    }

    fn running_update(&mut self, l0: u8) {
        let p = &self.pearson;
        let l1 = self.lag[0];

        self.checksum[0] = p.hash3(1 ^ l0, l1, self.checksum[0]);
        if self.params.checksum_len() == 3 {
            for k in 1..=2usize {
                let t1 = p.hash1(self.checksum[k - 1]);
                let t2 = p.hash1(t1 ^ l0);
                let t3 = p.hash1(t2 ^ l1);
                self.checksum[k] = p.hash1(t3 ^ self.checksum[k]);
            }
        }

        for &(prime, a, b) in &self.triples {
            let salt = p.hash1(prime);
            let first = self.lag[(a - 1) as usize];
            let second = self.lag[(b - 1) as usize];
            let idx = p.hash3(salt ^ l0, first, second) as usize;
            self.buckets[idx] = self.buckets[idx].wrapping_add(1);
        }
    }

    /// Returns to empty state, as if freshly constructed with the same
    /// parameters.
    pub fn reset(&mut self) {
        self.buckets = [0u64; 256];
        self.checksum = [0u8; 3];
        self.count = 0;
        self.lag = [0u8; 7];
    }

    /// Consumes the accumulated state and returns the digest value.
    ///
    /// Never fails, including for empty input (no entropy floor or
    /// minimum-length filter is applied). Not idempotent: call
    /// [`reset`](Digester::reset) before reusing the digester.
    pub fn finalize(&mut self) -> Digest {
        let b = self.params.buckets() as usize;
        let k = b / 4;

        let mut sorted: Vec<u64> = self.buckets[..b].to_vec();
        sorted.sort_unstable();
        let q1 = sorted[k - 1];
        let q2 = sorted[2 * k - 1];
        let q3 = sorted[3 * k - 1];

        let mut body = vec![0u8; k];
        for (i, slot) in body.iter_mut().enumerate() {
            let mut byte = 0u8;
            for j in 0..4 {
                let v = self.buckets[4 * i + j];
                let cc: u8 = if v > q3 {
                    3
                } else if v > q2 {
                    2
                } else if v > q1 {
                    1
                } else {
                    0
                };
                byte |= cc << (2 * j);
            }
            *slot = byte;
        }

        let lvalue = l_capturing(self.count);
        let (q1_ratio, q2_ratio) = if q3 == 0 {
            (0u8, 0u8)
        } else {
            (((q1 * 100 / q3) & 0xf) as u8, ((q2 * 100 / q3) & 0xf) as u8)
        };

        let checksum = self.checksum[..self.params.checksum_len() as usize].to_vec();
        Digest::from_parts(checksum, lvalue, q1_ratio, q2_ratio, body)
    }

    /// Number of bytes consumed so far. Read-only inspection, intended for
    /// tests that need to cross-check against an independent
    /// implementation without reflection.
    #[cfg(any(test, feature = "inspect"))]
    pub fn inspect_count(&self) -> u64 {
        self.count
    }

    /// The raw bucket counter at `index` (`0..256`). See
    /// [`inspect_count`](Digester::inspect_count).
    #[cfg(any(test, feature = "inspect"))]
    pub fn inspect_bucket(&self, index: usize) -> u64 {
        self.buckets[index]
    }

    /// The current rolling-checksum bytes (only the first `checksum_len`
    /// are meaningful). See [`inspect_count`](Digester::inspect_count).
    #[cfg(any(test, feature = "inspect"))]
    pub fn inspect_checksum(&self) -> [u8; 3] {
        self.checksum
    }

    /// The current lag window, most-recent-first. See
    /// [`inspect_count`](Digester::inspect_count).
    #[cfg(any(test, feature = "inspect"))]
    pub fn inspect_lag(&self) -> [u8; 7] {
        self.lag
    }
}

mod tests;
