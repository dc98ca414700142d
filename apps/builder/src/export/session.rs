//! Re-entrancy gate for export operations.
//!
//! The UI shows a busy indicator while an export runs; invoking another
//! export in that window must be a no-op, never a concurrent run. The gate
//! is a `try_lock` on a tokio mutex: a held lock means "in flight" and the
//! caller gets [`ExportOutcome::Busy`] back immediately. There is no
//! cancellation mid-export and no timeout; the platform call either
//! resolves or rejects.

use tokio::sync::Mutex;
use tracing::warn;

use crate::export::adapter::{ExportAdapter, ExportError, FileHandle};

/// Result of a gated export call.
#[derive(Debug)]
pub enum ExportOutcome<T> {
    Completed(T),
    /// Another export was already in flight; nothing was done.
    Busy,
}

impl<T> ExportOutcome<T> {
    pub fn is_busy(&self) -> bool {
        matches!(self, ExportOutcome::Busy)
    }
}

/// At-most-one-in-flight wrapper around an [`ExportAdapter`].
#[derive(Debug, Default)]
pub struct ExportSession {
    gate: Mutex<()>,
}

impl ExportSession {
    pub fn new() -> Self {
        ExportSession::default()
    }

    pub async fn render_to_file(
        &self,
        adapter: &dyn ExportAdapter,
        document: &str,
        file_name: &str,
    ) -> Result<ExportOutcome<FileHandle>, ExportError> {
        let Ok(_in_flight) = self.gate.try_lock() else {
            warn!("Export already in flight; ignoring render request");
            return Ok(ExportOutcome::Busy);
        };
        adapter
            .render_to_file(document, file_name)
            .await
            .map(ExportOutcome::Completed)
    }

    pub async fn share(
        &self,
        adapter: &dyn ExportAdapter,
        handle: &FileHandle,
    ) -> Result<ExportOutcome<()>, ExportError> {
        let Ok(_in_flight) = self.gate.try_lock() else {
            warn!("Export already in flight; ignoring share request");
            return Ok(ExportOutcome::Busy);
        };
        adapter.share(handle).await.map(ExportOutcome::Completed)
    }

    pub async fn print_document(
        &self,
        adapter: &dyn ExportAdapter,
        document: &str,
    ) -> Result<ExportOutcome<()>, ExportError> {
        let Ok(_in_flight) = self.gate.try_lock() else {
            warn!("Export already in flight; ignoring print request");
            return Ok(ExportOutcome::Busy);
        };
        adapter
            .print_document(document)
            .await
            .map(ExportOutcome::Completed)
    }

    pub async fn save_to_gallery(
        &self,
        adapter: &dyn ExportAdapter,
        handle: &FileHandle,
    ) -> Result<ExportOutcome<FileHandle>, ExportError> {
        let Ok(_in_flight) = self.gate.try_lock() else {
            warn!("Export already in flight; ignoring gallery request");
            return Ok(ExportOutcome::Busy);
        };
        adapter
            .save_to_gallery(handle)
            .await
            .map(ExportOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use super::*;

    /// Adapter whose render blocks until the test releases it.
    struct BlockingAdapter {
        entered: Notify,
        release: Notify,
    }

    impl BlockingAdapter {
        fn new() -> Self {
            BlockingAdapter {
                entered: Notify::new(),
                release: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl ExportAdapter for BlockingAdapter {
        async fn render_to_file(
            &self,
            _document: &str,
            file_name: &str,
        ) -> Result<FileHandle, ExportError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(FileHandle::new(PathBuf::from(file_name)))
        }

        async fn share(&self, _handle: &FileHandle) -> Result<(), ExportError> {
            Ok(())
        }

        async fn print_document(&self, _document: &str) -> Result<(), ExportError> {
            Err(ExportError::Render("print rejected".to_string()))
        }

        async fn save_to_gallery(&self, handle: &FileHandle) -> Result<FileHandle, ExportError> {
            Ok(handle.clone())
        }
    }

    #[tokio::test]
    async fn test_second_export_is_a_noop_while_first_is_in_flight() {
        let session = Arc::new(ExportSession::new());
        let adapter = Arc::new(BlockingAdapter::new());

        let first = tokio::spawn({
            let session = Arc::clone(&session);
            let adapter = Arc::clone(&adapter);
            async move {
                session
                    .render_to_file(adapter.as_ref(), "doc", "Resume_A_1.html")
                    .await
            }
        });

        // Wait until the first export is actually inside the adapter.
        adapter.entered.notified().await;

        let second = session
            .render_to_file(adapter.as_ref(), "doc", "Resume_B_2.html")
            .await
            .unwrap();
        assert!(second.is_busy(), "overlapping export must be a no-op");

        adapter.release.notify_one();
        let outcome = first.await.unwrap().unwrap();
        assert!(
            matches!(outcome, ExportOutcome::Completed(_)),
            "the in-flight export must still complete"
        );
    }

    #[tokio::test]
    async fn test_gate_reopens_after_completion() {
        let session = ExportSession::new();
        let adapter = BlockingAdapter::new();

        adapter.release.notify_one();
        let first = session
            .render_to_file(&adapter, "doc", "Resume_A_1.html")
            .await
            .unwrap();
        assert!(matches!(first, ExportOutcome::Completed(_)));

        adapter.release.notify_one();
        let second = session
            .render_to_file(&adapter, "doc", "Resume_A_2.html")
            .await
            .unwrap();
        assert!(
            matches!(second, ExportOutcome::Completed(_)),
            "sequential exports must both run"
        );
    }

    #[tokio::test]
    async fn test_failed_operation_releases_the_gate() {
        let session = ExportSession::new();
        let adapter = BlockingAdapter::new();

        let err = session.print_document(&adapter, "doc").await;
        assert!(err.is_err(), "print failure must propagate");

        let outcome = session
            .share(&adapter, &FileHandle::new(PathBuf::from("Resume_A_1.html")))
            .await
            .unwrap();
        assert!(
            matches!(outcome, ExportOutcome::Completed(())),
            "a failed export must not leave the gate held"
        );
    }
}
