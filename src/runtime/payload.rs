//! Compiled-in runtime payload
//!
//! The PHP for Windows archive and its hash are staged by `build.rs`; the
//! `php.ini` template and CA bundle come straight from `assets/`.

use crate::error::{BundleError, BundleResult};
use sha2::{Digest, Sha256};

const PHP_ARCHIVE: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/php_windows.zip"));
const PHP_ARCHIVE_HASH: &str = include_str!(concat!(env!("OUT_DIR"), "/php_windows.zip.sha256"));
const PHP_INI_TEMPLATE: &str = include_str!("../../assets/windows_php.ini.tpl");
const CA_CERT: &[u8] = include_bytes!("../../assets/cacert.pem");

/// Everything the installer writes into the destination tree
#[derive(Debug, Clone, Copy)]
pub struct Payload {
    /// Zip archive with a single root folder wrapping the runtime
    pub archive: &'static [u8],
    /// Expected marker value
    pub hash: &'static str,
    /// `php.ini` template source
    pub ini_template: &'static str,
    /// PEM bundle written to `extras/cacert.pem`
    pub ca_cert: &'static [u8],
}

impl Payload {
    /// The payload embedded in this binary
    pub const fn bundled() -> Self {
        Self {
            archive: PHP_ARCHIVE,
            hash: PHP_ARCHIVE_HASH,
            ini_template: PHP_INI_TEMPLATE,
            ca_cert: CA_CERT,
        }
    }

    /// Lowercase hex SHA-256 of the archive bytes
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.archive);
        hex::encode(hasher.finalize())
    }

    /// Check that the archive bytes hash to the expected value
    pub fn verify(&self) -> BundleResult<()> {
        let actual = self.digest();
        if actual != self.hash {
            return Err(BundleError::PayloadDigest {
                expected: self.hash.to_string(),
                actual,
            });
        }
        Ok(())
    }

    /// Archive size in bytes
    pub fn archive_len(&self) -> usize {
        self.archive.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_payload_verifies() {
        let payload = Payload::bundled();
        payload.verify().unwrap();
        assert_eq!(payload.hash.len(), 64);
        assert!(payload.hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn tampered_payload_fails() {
        let payload = Payload {
            archive: b"not the archive",
            ..Payload::bundled()
        };

        let err = payload.verify().unwrap_err();
        assert!(matches!(err, BundleError::PayloadDigest { .. }));
    }

    #[test]
    fn bundled_ca_cert_is_pem() {
        let pem = std::str::from_utf8(Payload::bundled().ca_cert).unwrap();
        assert!(pem.contains("-----BEGIN CERTIFICATE-----"));
    }

    #[test]
    fn bundled_template_mentions_pshdir() {
        assert!(Payload::bundled().ini_template.contains("{{ PSHDir }}"));
    }
}
