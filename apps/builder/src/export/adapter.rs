//! The adapter contract between the composer's output and platform export
//! targets (print engine, share sheet, media gallery).
//!
//! The composer itself never sees this layer; callers compose first, then
//! hand the finished document here. Each operation fails independently with
//! a recoverable error surfaced to the user as a dismissible notice.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from export operations. All recoverable: the caller surfaces
/// them and the user may retry; no partial artifact blocks a retry.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Render failed: {0}")]
    Render(String),

    #[error("{0} is not available on this device")]
    TargetUnavailable(&'static str),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("File system error: {0}")]
    Io(#[from] io::Error),
}

/// Artifact kind produced by an export path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Print-engine path.
    Pdf,
    /// View-capture path.
    Png,
    /// The composed document itself.
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Png => "png",
            ExportFormat::Html => "html",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(ExportFormat::Pdf),
            "png" => Ok(ExportFormat::Png),
            "html" => Ok(ExportFormat::Html),
            other => Err(format!("unknown export format '{other}'")),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Handle to a produced artifact on the local file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle(PathBuf);

impl FileHandle {
    pub fn new(path: PathBuf) -> Self {
        FileHandle(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

/// Converts composed documents into artifacts and feeds them to platform
/// targets. Implementations wrap whatever the platform offers; tests use
/// in-memory fakes.
#[async_trait]
pub trait ExportAdapter: Send + Sync {
    /// Renders the document into a binary artifact under `file_name`.
    async fn render_to_file(
        &self,
        document: &str,
        file_name: &str,
    ) -> Result<FileHandle, ExportError>;

    /// Hands an artifact to the share sheet.
    async fn share(&self, handle: &FileHandle) -> Result<(), ExportError>;

    /// Sends the document straight to the print dialog.
    async fn print_document(&self, document: &str) -> Result<(), ExportError>;

    /// Copies an artifact into the device gallery, returning the copy.
    async fn save_to_gallery(&self, handle: &FileHandle) -> Result<FileHandle, ExportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_extensions() {
        assert_eq!(ExportFormat::Pdf.extension(), "pdf");
        assert_eq!(ExportFormat::Png.extension(), "png");
        assert_eq!(ExportFormat::Html.extension(), "html");
    }

    #[test]
    fn test_format_parses_from_extension_strings() {
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert_eq!("png".parse::<ExportFormat>().unwrap(), ExportFormat::Png);
        assert!("docx".parse::<ExportFormat>().is_err());
    }
}
