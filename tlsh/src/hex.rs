// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Upper-case hexadecimal transport encoding: one lookup table for encoding,
//! one for decoding, no intermediate allocation beyond the output buffer.

use crate::errors::Error;
use alloc::string::String;
use alloc::vec::Vec;

const UPPER_NIBBLE: [u8; 16] = *b"0123456789ABCDEF";

/// Per-byte value of a decoded hex digit, or `0xff` if the ASCII byte is not
/// a hexadecimal digit. Accepts both cases on decode even though encoding is
/// always upper case.
const DECODE_TABLE: [u8; 256] = {
    let mut table = [0xffu8; 256];
    let mut i = 0u8;
    loop {
        table[i as usize] = match i {
            b'0'..=b'9' => i - b'0',
            b'a'..=b'f' => i - b'a' + 10,
            b'A'..=b'F' => i - b'A' + 10,
            _ => 0xff,
        };
        if i == 255 {
            break;
        }
        i += 1;
    }
    table
};

/// Encodes `bytes` as an upper-case hex string, optionally prefixed with the
/// literal `T1` format-version tag.
pub fn encode(bytes: &[u8], with_t1_prefix: bool) -> String {
    let mut out = String::with_capacity(bytes.len() * 2 + if with_t1_prefix { 2 } else { 0 });
    if with_t1_prefix {
        out.push_str("T1");
    }
    for &b in bytes {
        out.push(UPPER_NIBBLE[(b >> 4) as usize] as char);
        out.push(UPPER_NIBBLE[(b & 0xf) as usize] as char);
    }
    out
}

/// Decodes a hex string into bytes, accepting an optional leading `T1`
/// prefix. Fails with [`Error::BadFormat`] if, after stripping any `T1`
/// prefix, the remainder has odd length or contains a non-hex character.
pub fn decode(s: &str) -> Result<Vec<u8>, Error> {
    let body = s.strip_prefix("T1").unwrap_or(s);
    let bytes = body.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(Error::BadFormat);
    }
    let mut out = Vec::with_capacity(bytes.len() / 2);
    for pair in bytes.chunks_exact(2) {
        let hi = DECODE_TABLE[pair[0] as usize];
        let lo = DECODE_TABLE[pair[1] as usize];
        if hi == 0xff || lo == 0xff {
            return Err(Error::BadFormat);
        }
        out.push((hi << 4) | lo);
    }
    Ok(out)
}
