// build.rs - Stage the PHP for Windows archive for embedding.
//
// The archive is copied into OUT_DIR together with the lowercase hex SHA-256
// of its bytes. `src/runtime/payload.rs` embeds both, so the marker value
// written after installation always matches the archive that was compiled in.
//
// Release builds point PHP_BUNDLE_ARCHIVE at the real distribution zip. Without
// it the development archive under assets/ is used.

use sha2::{Digest, Sha256};
use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=PHP_BUNDLE_ARCHIVE");

    let manifest_dir = PathBuf::from(
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set by Cargo"),
    );
    let source = env::var_os("PHP_BUNDLE_ARCHIVE")
        .map(PathBuf::from)
        .unwrap_or_else(|| manifest_dir.join("assets").join("php_windows.zip"));

    println!("cargo:rerun-if-changed={}", source.display());

    let bytes = fs::read(&source)
        .unwrap_or_else(|e| panic!("failed to read PHP archive {}: {}", source.display(), e));

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set by Cargo"));
    fs::write(out_dir.join("php_windows.zip"), &bytes)
        .expect("failed to stage PHP archive in OUT_DIR");

    let hash = hex::encode(Sha256::digest(&bytes));
    fs::write(out_dir.join("php_windows.zip.sha256"), hash)
        .expect("failed to write PHP archive hash");
}
