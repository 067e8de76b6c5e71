use std::fs;
use std::path::{Path, PathBuf};

use common::api::UPLOADS_PATH;
use log::warn;
use uuid::Uuid;

use crate::error::ServiceError;

/// Uploaded PDFs, one file per document, named `<uuid>.pdf`.
///
/// The directory is served as-is under [`UPLOADS_PATH`], so the `pdfPath` handed to
/// clients is simply `/uploads/<file name>`.
pub struct DocumentStore {
    dir: PathBuf,
}

impl DocumentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, ServiceError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `bytes` under a fresh name and returns the public path.
    pub fn save(&self, bytes: &[u8]) -> Result<String, ServiceError> {
        let file_name = format!("{}.pdf", Uuid::new_v4());
        fs::write(self.dir.join(&file_name), bytes)?;
        Ok(format!("{}/{}", UPLOADS_PATH, file_name))
    }

    /// Deletes the file behind a public path. Paths outside the uploads root are
    /// ignored; a failed removal is only logged.
    pub fn remove(&self, document_path: &str) {
        let Some(path) = self.local_path(document_path) else {
            warn!("Not removing document outside the uploads root: {}", document_path);
            return;
        };
        if let Err(e) = fs::remove_file(&path) {
            warn!("Failed to remove document {}: {}", path.display(), e);
        }
    }

    /// Maps `/uploads/<name>` back to a file inside the directory.
    pub fn local_path(&self, document_path: &str) -> Option<PathBuf> {
        let name = document_path.strip_prefix(UPLOADS_PATH)?.strip_prefix('/')?;
        let plain_name = !name.is_empty() && !name.contains(['/', '\\']) && name != "..";
        plain_name.then(|| self.dir.join(name))
    }
}
