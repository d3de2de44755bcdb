// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(test)]

use super::Digester;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

fn new_normal() -> Digester {
    Digester::new(5, 128, 1).unwrap()
}

#[test]
fn construction_rejects_bad_window() {
    assert!(Digester::new(3, 128, 1).is_err());
    assert!(Digester::new(9, 128, 1).is_err());
}

#[test]
fn construction_rejects_forty_eight_three() {
    assert!(Digester::new(5, 48, 3).is_err());
}

#[test]
fn finalize_never_fails_on_empty_input() {
    let mut d = new_normal();
    let digest = d.finalize();
    assert_eq!(digest.body().len(), 32);
    assert_eq!(digest.checksum().len(), 1);
}

#[test]
fn finalize_never_fails_below_window_length() {
    let mut d = new_normal();
    d.update(b"hi");
    let digest = d.finalize();
    assert_eq!(digest.lvalue(), crate::length::l_capturing(2));
}

#[test]
fn streaming_law_holds_for_random_splits() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0x5EED);
    for _ in 0..50 {
        let len = rng.random_range(0..500);
        let data: Vec<u8> = (0..len).map(|_| rng.random()).collect();
        let split = rng.random_range(0..=data.len());

        let mut whole = new_normal();
        whole.update(&data);
        let whole_digest = whole.finalize();

        let mut parts = new_normal();
        parts.update(&data[..split]);
        parts.update(&data[split..]);
        let parts_digest = parts.finalize();

        assert_eq!(whole_digest, parts_digest);
    }
}

#[test]
fn reset_law_matches_fresh_instance() {
    let data = b"some moderately long input used to exercise the sliding window state machine";
    let mut reused = new_normal();
    reused.update(b"garbage that will be discarded by reset");
    reused.reset();
    reused.update(data);
    let reused_digest = reused.finalize();

    let mut fresh = new_normal();
    fresh.update(data);
    let fresh_digest = fresh.finalize();

    assert_eq!(reused_digest, fresh_digest);
}

#[test]
fn warm_up_does_not_touch_buckets_or_checksum() {
    let mut d = new_normal();
    // window is 5; consuming 4 bytes must stay in warm-up.
    d.update(b"abcd");
    assert_eq!(d.inspect_checksum(), [0u8; 3]);
    for i in 0..256 {
        assert_eq!(d.inspect_bucket(i), 0);
    }
    assert_eq!(d.inspect_count(), 4);
}

#[test]
fn running_state_is_entered_on_the_w_th_byte() {
    let mut d = new_normal();
    d.update(b"abcde");
    assert_eq!(d.inspect_count(), 5);
    assert_ne!(d.inspect_checksum()[0], 0u8);
}

#[test]
fn long_checksum_digester_produces_three_byte_checksum() {
    let mut d = Digester::new(5, 128, 3).unwrap();
    d.update(b"a reasonably sized body of text for the checksum to mix over");
    let digest = d.finalize();
    assert_eq!(digest.checksum().len(), 3);
}

#[test]
fn short_variant_produces_twelve_byte_body() {
    let mut d = Digester::new(5, 48, 1).unwrap();
    d.update(b"a reasonably sized body of text for the digester to chew on");
    let digest = d.finalize();
    assert_eq!(digest.body().len(), 12);
}

#[test]
fn every_supported_window_length_runs_without_panicking() {
    for w in 4..=8u8 {
        let mut d = Digester::new(w, 128, 1).unwrap();
        d.update(b"exercising every supported sliding window length end to end");
        let _ = d.finalize();
    }
}
