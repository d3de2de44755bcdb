// SPDX-License-Identifier: MIT

extern crate version_check as rustc;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Module: core::error
    // unstable: 1.65-1.80 (not implemented)
    //   stable: 1.81-
    println!(
        "cargo:rustc-check-cfg=cfg(\
            tlsh_error_in_core, \
            values(\
                \"stable\"\
            )\
        )"
    );
    if rustc::is_min_version("1.81.0").unwrap_or(false) {
        println!("cargo:rustc-cfg=tlsh_error_in_core=\"stable\"");
    }
}
