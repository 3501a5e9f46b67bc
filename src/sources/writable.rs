//! Directory writability probe for the lock segment.

use std::fs;
use std::path::Path;

use tracing::debug;

const PROBE_FILE: &str = ".promptline-write-test";

/// Whether files can be created in `dir`.
///
/// Permission bits alone do not answer this (ACLs, read-only mounts,
/// root), so the probe creates and removes a hidden file instead. Any
/// create failure counts as unwritable; a leftover probe file from a
/// failed remove is harmless.
pub fn is_writable(dir: &Path) -> bool {
    let probe = dir.join(PROBE_FILE);
    match fs::File::create(&probe) {
        Ok(_) => {
            let _ = fs::remove_file(&probe);
            true
        }
        Err(err) => {
            debug!("write probe failed in {}: {}", dir.display(), err);
            false
        }
    }
}
