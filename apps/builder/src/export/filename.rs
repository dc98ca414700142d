//! Artifact naming: `Resume_<sanitized-full-name>_<unix-epoch-millis>.<ext>`.
//!
//! The timestamp lives only in the file name, never inside the document.
//! Composing is deterministic; exporting is when "now" enters the picture.

use crate::export::adapter::ExportFormat;

/// Collapses every run of whitespace in the name to a single underscore and
/// trims the ends. `"  John   Q Public "` → `"John_Q_Public"`.
pub fn sanitize_name_segment(full_name: &str) -> String {
    full_name.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Builds the conventional artifact file name from the form's full name,
/// the export format, and the creation timestamp in unix-epoch millis.
pub fn export_file_name(full_name: &str, format: ExportFormat, created_millis: i64) -> String {
    format!(
        "Resume_{}_{}.{}",
        sanitize_name_segment(full_name),
        created_millis,
        format.extension()
    )
}
