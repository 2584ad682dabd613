#[cfg(test)]
#[path = "pending_file_test.rs"]
mod tests;

use std::path;

/// A file picked by the user, held while it is validated and uploaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingFile {
    pub path: path::PathBuf,
    pub name: String,
    /// Declared type, derived from the file extension. Never sniffed from
    /// the file contents.
    pub media_type: String,
}

impl PendingFile {
    pub fn from_path(file_path: &path::Path) -> PendingFile {
        let name = file_path
            .file_name()
            .map(|e| return e.to_string_lossy().to_string())
            .unwrap_or_default();

        let media_type = mime_guess::from_path(file_path)
            .first_or_octet_stream()
            .to_string();

        return PendingFile {
            path: file_path.to_path_buf(),
            name,
            media_type,
        };
    }
}
