//! Filesystem-backed template store.

use super::service::{TemplateError, TemplateResult, TemplateStore};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Reads the redirect-page template from a directory on local disk.
///
/// The directory plays the role of the template bucket; the file name is the
/// object key. The file is read per fetch, so a template swapped in place is
/// picked up without a restart.
pub struct FsTemplateStore {
    dir: PathBuf,
    file: String,
}

impl FsTemplateStore {
    /// Creates a store reading `file` from `dir`.
    pub fn new(dir: impl Into<PathBuf>, file: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            file: file.into(),
        }
    }
}

#[async_trait]
impl TemplateStore for FsTemplateStore {
    async fn fetch(&self) -> TemplateResult<String> {
        let path = self.dir.join(&self.file);

        tokio::fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                TemplateError::NotFound(path.display().to_string())
            } else {
                TemplateError::ReadError(e.to_string())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_reads_file() {
        let dir = std::env::temp_dir().join(format!("tmpl-store-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        tokio::fs::write(dir.join("redirect.html"), "<a href=\"{{LONG_URL}}\">go</a>")
            .await
            .unwrap();

        let store = FsTemplateStore::new(&dir, "redirect.html");
        let body = store.fetch().await.unwrap();

        assert!(body.contains("{{LONG_URL}}"));

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let store = FsTemplateStore::new("/nonexistent-template-dir", "redirect.html");

        let result = store.fetch().await;

        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }
}
