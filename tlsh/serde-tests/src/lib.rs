// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Round-trip tests for the `serde` feature against concrete serialization
//! backends (`serde_json`, `postcard`, `ciborium`).
//!
//! Kept as a separate workspace member, not a `tests/` directory inside the
//! `tlsh` crate itself, because these tests need `dev-dependencies` on
//! concrete serde formats that the library crate must not depend on even
//! for its own test builds.
