// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(test)]

use super::*;

#[test]
fn hello_world_matches_known_digest() {
    let mut d = digester_for_name("TLSH").unwrap();
    digester_update(&mut d, b"Hello world!");
    let digest = digester_finalize(&mut d);
    assert_eq!(
        digest_to_hex(&digest_pack(&digest)),
        "DD6000030030000C000000000C300CC00000C000030000000000F00030F0C00300CCC0"
    );
}

#[test]
fn goodbye_cruel_world_matches_known_digest() {
    let mut d = digester_new(5, 128, 1).unwrap();
    digester_update(&mut d, b"Goodbye Cruel World");
    let digest = digester_finalize(&mut d);
    assert_eq!(
        digest_to_hex(&digest_pack(&digest)),
        "F87000008008000822B80080002C82A000808002800C003020000B2830202008A83A22"
    );
}

/// 65536 bytes of `i ^ 0xAA` under the 256-bucket, 1-byte-checksum variant.
#[test]
fn xor_pattern_matches_known_digest_under_tlsh_256_1() {
    let data: Vec<u8> = (0u32..65536).map(|i| (i as u8) ^ 0xAA).collect();
    let mut d = digester_for_name("TLSH-256-1").unwrap();
    digester_update(&mut d, &data);
    let digest = digester_finalize(&mut d);
    assert_eq!(
        digest_to_hex(&digest_pack(&digest)),
        "57532B05955D1EA730E17241C08C074C3DD1CF5C53CC580C1E2D3064CCF0E05DD8C1528\
         997453D416035B5D9D01F120B4D4CFA884F5B01C1EF764DA71C1E074D3D7B66"
    );
}

#[test]
fn score_between_hello_and_goodbye_is_165_without_length() {
    let mut d1 = digester_for_name("TLSH").unwrap();
    digester_update(&mut d1, b"Hello world!");
    let digest1 = digester_finalize(&mut d1);

    let mut d2 = digester_for_name("TLSH").unwrap();
    digester_update(&mut d2, b"Goodbye Cruel World");
    let digest2 = digester_finalize(&mut d2);

    let packed1 = digest_pack(&digest1);
    let packed2 = digest_pack(&digest2);
    assert_eq!(
        crate::score::score(&packed1, &packed2, false),
        Ok(165)
    );
    assert_eq!(crate::score::score(&packed1, &packed1, true), Ok(0));
}

#[test]
fn unpacking_a_twenty_byte_buffer_is_a_bad_format_error() {
    let buf = vec![0u8; 20];
    assert_eq!(digest_unpack(&buf), Err(Error::BadFormat));
}

#[test]
fn scoring_digests_with_different_checksum_lengths_is_mismatched() {
    let mut short = digester_new(5, 128, 1).unwrap();
    digester_update(&mut short, b"some input");
    let short_digest = digester_finalize(&mut short);

    let mut long = digester_new(5, 128, 3).unwrap();
    digester_update(&mut long, b"some input");
    let long_digest = digester_finalize(&mut long);

    let a = digest_pack(&short_digest);
    let b = digest_pack(&long_digest);
    assert_eq!(crate::score::score(&a, &b, true), Err(Error::Mismatched));
}

#[test]
fn scoring_digests_with_different_body_lengths_is_mismatched() {
    let mut small = digester_new(5, 48, 1).unwrap();
    digester_update(&mut small, b"some input");
    let small_digest = digester_finalize(&mut small);

    let mut normal = digester_new(5, 128, 1).unwrap();
    digester_update(&mut normal, b"some input");
    let normal_digest = digester_finalize(&mut normal);

    let a = digest_pack(&small_digest);
    let b = digest_pack(&normal_digest);
    assert_eq!(crate::score::score(&a, &b, true), Err(Error::Mismatched));
}

#[test]
fn hex_to_bytes_round_trips_with_digest_to_hex_t1() {
    let mut d = digester_for_name("TLSH").unwrap();
    digester_update(&mut d, b"Hello world!");
    let digest = digester_finalize(&mut d);
    let packed = digest_pack(&digest);
    let hex_t1 = digest_to_hex_t1(&packed);
    assert_eq!(hex_to_bytes(&hex_t1).unwrap(), packed);
}

#[test]
fn unknown_algorithm_name_is_rejected() {
    assert!(digester_for_name("NOT-TLSH").is_err());
    assert!(digester_for_name("TLSH-48-3").is_err());
}
