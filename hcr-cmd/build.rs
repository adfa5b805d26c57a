//! Build script for hcr-cmd.
//!
//! Copies the sample indicator CSV files to OUT_DIR so they can be
//! embedded via `include_str!` at compile time. The fixtures ship with the
//! crate, so a missing file fails the build.

use std::env;
use std::fs;
use std::path::Path;

const FIXTURES: [&str; 3] = [
    "health_workers.csv",
    "healthcare_institutions.csv",
    "healthcare_services.csv",
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let fixture_dir = Path::new("../fixtures");

    for name in FIXTURES {
        let src = fixture_dir.join(name);
        let dest = Path::new(&out_dir).join(name);
        if !src.is_file() {
            panic!("Sample fixture {} is missing", src.display());
        }
        fs::copy(&src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", src.display(), dest.display(), e);
        });
        println!("cargo:rerun-if-changed={}", src.display());
    }

    println!("cargo:rerun-if-changed=build.rs");
}
