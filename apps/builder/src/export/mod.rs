// Export layer: turns a composed document into a file artifact and hands
// it to share/print/gallery targets. Every operation is independently
// fallible and recoverable; a failed share never corrupts a produced file.

pub mod adapter;
pub mod disk;
pub mod filename;
pub mod session;

pub use adapter::{ExportAdapter, ExportError, ExportFormat, FileHandle};
pub use disk::DiskExporter;
pub use filename::export_file_name;
pub use session::{ExportOutcome, ExportSession};
