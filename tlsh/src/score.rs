// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scorer: a bounded-integer similarity metric between two digests,
//! built on a precomputed 256x256 bit-pair difference table.

use crate::digest::Digest;
use crate::errors::Error;

/// The bit-pair difference of two dibits; `3` (the maximum raw difference)
/// is replaced by this outlier constant.
const OUTLIER: u32 = 6;

const fn dibit_diff(x: u8, y: u8) -> u32 {
    let d = if x > y { x - y } else { y - x };
    if d == 3 {
        OUTLIER
    } else {
        d as u32
    }
}

/// `BIT_PAIR_DIFF[x][y]` is the sum, over the four 2-bit digits of bytes `x`
/// and `y`, of the per-digit difference (with `3` folded to
/// [`OUTLIER`]). Range `[0, 24]`. Computed once, at compile time.
const BIT_PAIR_DIFF: [[u8; 256]; 256] = {
    let mut table = [[0u8; 256]; 256];
    let mut x = 0usize;
    while x < 256 {
        let mut y = 0usize;
        while y < 256 {
            let mut sum = 0u32;
            let mut i = 0;
            while i < 4 {
                let dx = ((x >> (i * 2)) & 0b11) as u8;
                let dy = ((y >> (i * 2)) & 0b11) as u8;
                sum += dibit_diff(dx, dy);
                i += 1;
            }
            table[x][y] = sum as u8;
            y += 1;
        }
        x += 1;
    }
    table
};

/// `mod_dist(x, y, R) = min(|x - y|, R - |x - y|)`: distance on a ring of
/// circumference `R`.
fn mod_dist(x: i64, y: i64, r: i64) -> i64 {
    let d = (x - y).abs();
    d.min(r - d)
}

/// `0` if the checksums are identical, else `1`. Fails with
/// [`Error::Mismatched`] if the two checksums differ in length.
pub fn score_checksum(a: &[u8], b: &[u8]) -> Result<i32, Error> {
    if a.len() != b.len() {
        return Err(Error::Mismatched);
    }
    Ok(if a == b { 0 } else { 1 })
}

/// Length-code distance: `0, 1, 12*d` for `mod_dist(a, b, 256) = 0, 1, >=2`.
pub fn score_length(a: u8, b: u8) -> i32 {
    let d = mod_dist(a as i64, b as i64, 256);
    match d {
        0 => 0,
        1 => 1,
        _ => 12 * d as i32,
    }
}

/// Quartile-ratio distance: `d` if `mod_dist(a, b, 16) <= 1`, else
/// `12*(d-1)`.
pub fn score_q(a: u8, b: u8) -> i32 {
    let d = mod_dist(a as i64, b as i64, 16);
    if d <= 1 {
        d as i32
    } else {
        12 * (d as i32 - 1)
    }
}

/// Summed bit-pair difference over the two bodies. Fails with
/// [`Error::Mismatched`] if the two bodies differ in length.
pub fn score_body(a: &[u8], b: &[u8]) -> Result<i32, Error> {
    if a.len() != b.len() {
        return Err(Error::Mismatched);
    }
    let sum: u32 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| BIT_PAIR_DIFF[x as usize][y as usize] as u32)
        .sum();
    Ok(sum as i32)
}

/// Computes the similarity distance between two packed digest buffers.
///
/// `bytes_a` and `bytes_b` are unpacked into [`Digest`] values before
/// scoring; an invalid packed length fails with [`Error::BadFormat`]. A
/// mismatch in checksum or
/// body length between the two (otherwise valid) digests fails with
/// [`Error::Mismatched`]. Lower is more similar; `0` means identical.
pub fn score(bytes_a: &[u8], bytes_b: &[u8], include_length: bool) -> Result<i32, Error> {
    let a = Digest::unpack(bytes_a)?;
    let b = Digest::unpack(bytes_b)?;
    score_digests(&a, &b, include_length)
}

/// As [`score`], but operating on already-unpacked digest values.
pub fn score_digests(a: &Digest, b: &Digest, include_length: bool) -> Result<i32, Error> {
    let mut total = score_checksum(a.checksum(), b.checksum())?;
    if include_length {
        total += score_length(a.lvalue(), b.lvalue());
    }
    total += score_q(a.q1_ratio(), b.q1_ratio());
    total += score_q(a.q2_ratio(), b.q2_ratio());
    total += score_body(a.body(), b.body())?;
    Ok(total)
}
