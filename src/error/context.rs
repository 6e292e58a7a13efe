//! Attaching paths to I/O failures and routing errors by severity

use crate::error::{ErrorSeverity, Result, ScanError};
use std::io;
use std::path::Path;

/// Extension for I/O results that belong to a manifest on disk
pub trait ManifestResultExt<T> {
    /// Map an I/O failure to `PermissionDenied` or `ManifestRead` for `path`
    fn with_manifest_path<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T> ManifestResultExt<T> for io::Result<T> {
    fn with_manifest_path<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|source| {
            let path = path.as_ref();
            if source.kind() == io::ErrorKind::PermissionDenied {
                ScanError::permission_denied(path)
            } else {
                ScanError::ManifestRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })
    }
}

/// Log an error at the level its severity calls for.
///
/// Only critical errors are handed back; everything else is logged and
/// dropped so the scan can carry on.
pub fn handle_error(err: ScanError) -> Option<ScanError> {
    let message = err.user_message();

    match err.severity() {
        ErrorSeverity::Warning => {
            log::warn!("{}", message);
            None
        }
        ErrorSeverity::Error => {
            log::error!("{}", message);
            None
        }
        ErrorSeverity::Critical => {
            log::error!("Critical: {}", message);
            Some(err)
        }
    }
}
