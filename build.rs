//! Captures the compiler version at build time.
//!
//! The info endpoint reports the runtime as the `rustc --version` string the
//! binary was built with, exposed to the crate as the `RUSTC_VERSION`
//! compile-time environment variable.

fn main() {
    let version = rustc_version::version_meta()
        .map(|meta| meta.short_version_string)
        .unwrap_or_else(|_| "rustc (unknown)".to_string());

    println!("cargo:rustc-env=RUSTC_VERSION={version}");
    println!("cargo:rerun-if-env-changed=RUSTC");
}
