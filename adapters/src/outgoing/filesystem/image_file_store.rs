use std::path::{Path, PathBuf};

use canvas_insight_application::{error::AppResult, ports::outgoing::image_store::ImageStorePort};
use tokio::fs;
use tracing::{debug, instrument};

/// One image file on local disk, replaced on every write.
pub struct FileImageStore {
    path: PathBuf,
}

impl FileImageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl ImageStorePort for FileImageStore {
    #[instrument(skip(self, png_data), fields(path = %self.path.display(), bytes = png_data.len()))]
    async fn write_image(&self, png_data: &[u8]) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        fs::write(&self.path, png_data).await?;
        debug!("Image file written");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn read_image(&self) -> AppResult<Vec<u8>> {
        let bytes = fs::read(&self.path).await?;
        debug!(bytes = bytes.len(), "Image file read");
        Ok(bytes)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvas_insight_application::error::AppError;
    use std::io::ErrorKind;

    #[tokio::test]
    async fn writes_then_reads_back_the_same_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileImageStore::new(dir.path().join("img.png"));

        store.write_image(b"first").await.unwrap();
        assert_eq!(store.read_image().await.unwrap(), b"first");
    }

    #[tokio::test]
    async fn overwrites_instead_of_appending() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileImageStore::new(dir.path().join("img.png"));

        store.write_image(b"a much longer first payload").await.unwrap();
        store.write_image(b"second").await.unwrap();

        assert_eq!(store.read_image().await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileImageStore::new(dir.path().join("nested/out/drawing.png"));

        store.write_image(b"png").await.unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn reading_a_missing_file_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileImageStore::new(dir.path().join("missing.png"));

        match store.read_image().await {
            Err(AppError::IoError(e)) => assert_eq!(e.kind(), ErrorKind::NotFound),
            other => unreachable!("expected NotFound, got {other:?}"),
        }
    }
}
