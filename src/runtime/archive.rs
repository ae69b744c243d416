//! Zip extraction into the destination tree
//!
//! The archive must wrap all of its content in one root folder
//! (`php-windows/php.exe`, `php-windows/ext/...`). That folder is stripped, so
//! `php-windows/ext/php_curl.dll` lands at `<dest>/ext/php_curl.dll`.

use crate::error::{BundleError, BundleResult};
use std::fs::{self, OpenOptions};
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::ZipArchive;

/// Mode for files whose entry records no Unix permissions
const DEFAULT_FILE_MODE: u32 = 0o644;

/// Extract every file entry of `archive` under `dest`
///
/// Returns the number of files written. Stops at the first failure without
/// removing files that were already written.
pub fn extract(archive: &[u8], dest: &Path) -> BundleResult<usize> {
    let mut zip = ZipArchive::new(Cursor::new(archive)).map_err(BundleError::ArchiveOpen)?;
    let mut root: Option<String> = None;
    let mut written = 0;

    for i in 0..zip.len() {
        let name = zip
            .name_for_index(i)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", i));

        let mut entry = zip.by_index(i).map_err(|e| BundleError::ArchiveEntry {
            name: name.clone(),
            source: e,
        })?;

        if entry.is_dir() {
            continue;
        }

        let out_path = dest.join(strip_root(&name, &mut root)?);

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BundleError::create_dir(parent, e))?;
        }

        let mode = entry
            .unix_mode()
            .map(|m| m & 0o777)
            .unwrap_or(DEFAULT_FILE_MODE);
        let mut out = open_output(&out_path, mode)
            .map_err(|e| BundleError::write_file(&out_path, e))?;

        io::copy(&mut entry, &mut out).map_err(|e| BundleError::write_file(&out_path, e))?;

        debug!("Extracted {} -> {}", name, out_path.display());
        written += 1;
    }

    Ok(written)
}

#[cfg(unix)]
fn open_output(path: &Path, mode: u32) -> io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(mode)
        .open(path)
}

#[cfg(not(unix))]
fn open_output(path: &Path, _mode: u32) -> io::Result<fs::File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// Strip the root folder from an entry name
///
/// The first file entry fixes the root folder; every later entry must share it.
/// Absolute names and `..` components are rejected.
fn strip_root(name: &str, root: &mut Option<String>) -> BundleResult<PathBuf> {
    if name.starts_with('/') || name.starts_with('\\') || name.contains(':') {
        return Err(BundleError::layout(name, "absolute path in archive"));
    }

    let mut parts = name.split(['/', '\\']).filter(|p| !p.is_empty() && *p != ".");
    let first = parts
        .next()
        .ok_or_else(|| BundleError::layout(name, "empty entry name"))?;

    match root {
        Some(expected) if expected != first => {
            return Err(BundleError::layout(
                name,
                format!("expected everything under root folder {}", expected),
            ));
        }
        Some(_) => {}
        None => *root = Some(first.to_string()),
    }

    let mut relative = PathBuf::new();
    for part in parts {
        if part == ".." {
            return Err(BundleError::layout(name, "path escapes the destination"));
        }
        relative.push(part);
    }

    if relative.as_os_str().is_empty() {
        return Err(BundleError::layout(name, "file outside the archive's root folder"));
    }

    Ok(relative)
}
