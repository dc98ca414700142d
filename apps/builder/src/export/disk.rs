//! Disk-backed export adapter.
//!
//! The mobile build hands documents to the platform print engine and view
//! capture; those engines are outside this codebase, so this adapter writes
//! the printable document itself into the output directory and models the
//! gallery as a `Resumes/` album folder. Share and print report
//! `TargetUnavailable`; a headless build has no share sheet or dialog.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::info;

use crate::export::adapter::{ExportAdapter, ExportError, FileHandle};

/// Album folder the gallery copy lands in, mirroring the device gallery.
const GALLERY_ALBUM: &str = "Resumes";

#[derive(Debug, Clone)]
pub struct DiskExporter {
    output_dir: PathBuf,
}

impl DiskExporter {
    pub fn new(output_dir: PathBuf) -> Self {
        DiskExporter { output_dir }
    }
}

#[async_trait]
impl ExportAdapter for DiskExporter {
    async fn render_to_file(
        &self,
        document: &str,
        file_name: &str,
    ) -> Result<FileHandle, ExportError> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| classify_io(e, "output directory"))?;
        let path = self.output_dir.join(file_name);
        tokio::fs::write(&path, document)
            .await
            .map_err(|e| classify_io(e, "artifact"))?;
        info!("Wrote resume artifact to {}", path.display());
        Ok(FileHandle::new(path))
    }

    async fn share(&self, _handle: &FileHandle) -> Result<(), ExportError> {
        Err(ExportError::TargetUnavailable("Sharing"))
    }

    async fn print_document(&self, _document: &str) -> Result<(), ExportError> {
        Err(ExportError::TargetUnavailable("Printing"))
    }

    async fn save_to_gallery(&self, handle: &FileHandle) -> Result<FileHandle, ExportError> {
        let album = self.output_dir.join(GALLERY_ALBUM);
        tokio::fs::create_dir_all(&album)
            .await
            .map_err(|e| classify_io(e, "gallery album"))?;
        let file_name = handle
            .path()
            .file_name()
            .ok_or_else(|| ExportError::Render("artifact has no file name".to_string()))?;
        let target = album.join(file_name);
        tokio::fs::copy(handle.path(), &target).await?;
        info!("Saved resume to gallery album at {}", target.display());
        Ok(FileHandle::new(target))
    }
}

/// Permission failures get their own variant so the UI can ask the user to
/// grant access rather than showing a generic file-system notice.
fn classify_io(e: io::Error, what: &str) -> ExportError {
    if e.kind() == io::ErrorKind::PermissionDenied {
        ExportError::PermissionDenied(format!("{what}: {e}"))
    } else {
        ExportError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_render_writes_document_under_given_name() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = DiskExporter::new(dir.path().to_path_buf());

        let handle = exporter
            .render_to_file("<!DOCTYPE html>", "Resume_Asha_Rao_1700000000000.html")
            .await
            .unwrap();

        assert_eq!(
            handle.path(),
            dir.path().join("Resume_Asha_Rao_1700000000000.html")
        );
        let written = std::fs::read_to_string(handle.path()).unwrap();
        assert_eq!(written, "<!DOCTYPE html>");
    }

    #[tokio::test]
    async fn test_save_to_gallery_copies_without_touching_original() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = DiskExporter::new(dir.path().to_path_buf());

        let handle = exporter
            .render_to_file("doc", "Resume_A_1.html")
            .await
            .unwrap();
        let copy = exporter.save_to_gallery(&handle).await.unwrap();

        assert!(handle.path().exists(), "original artifact must survive");
        assert!(copy.path().exists());
        assert!(copy.path().starts_with(dir.path().join(GALLERY_ALBUM)));
    }

    #[tokio::test]
    async fn test_share_failure_leaves_artifact_intact() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = DiskExporter::new(dir.path().to_path_buf());

        let handle = exporter
            .render_to_file("doc", "Resume_A_1.html")
            .await
            .unwrap();
        let err = exporter.share(&handle).await.unwrap_err();

        assert!(matches!(err, ExportError::TargetUnavailable(_)));
        assert!(
            handle.path().exists(),
            "a failed share must not delete the produced file"
        );
    }

    #[tokio::test]
    async fn test_save_to_gallery_missing_source_is_recoverable() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = DiskExporter::new(dir.path().to_path_buf());

        let missing = FileHandle::new(dir.path().join("Resume_Gone_0.html"));
        let err = exporter.save_to_gallery(&missing).await.unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
