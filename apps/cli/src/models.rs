//! Transient entities of a submission: the two selected files, the
//! server-assigned identifiers, and the final score. Nothing here is
//! persisted; lifetime is a single run of the binary.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A user-selected upload: file name, MIME type, and raw bytes.
/// The CLI analogue of a browser file-picker selection — loading a new
/// file for the same slot overwrites the previous one.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Reads the file at `path` into memory, deriving the upload file name
    /// and MIME type from the path.
    pub async fn load(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read file '{}'", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        Ok(SelectedFile {
            file_name,
            mime: mime_for_path(path),
            bytes,
        })
    }
}

/// MIME type from the file extension. The service accepts .pdf and .docx;
/// anything else is sent as an opaque binary and left for the server to
/// reject.
fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        _ => "application/octet-stream",
    }
}

/// Server-assigned token referencing a previously parsed resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeId(pub i64);

impl fmt::Display for ResumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Server-assigned token referencing a previously analyzed job description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub i64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compatibility score computed by the matching service. The range is the
/// service's business; display is always two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchScore(pub f64);

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_pdf() {
        assert_eq!(mime_for_path(Path::new("resume.pdf")), "application/pdf");
        assert_eq!(mime_for_path(Path::new("RESUME.PDF")), "application/pdf");
    }

    #[test]
    fn test_mime_for_docx() {
        assert_eq!(
            mime_for_path(Path::new("jd.docx")),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }

    #[test]
    fn test_mime_fallback_is_octet_stream() {
        assert_eq!(
            mime_for_path(Path::new("notes.txt")),
            "application/octet-stream"
        );
        assert_eq!(mime_for_path(Path::new("no_extension")), "application/octet-stream");
    }

    #[test]
    fn test_score_renders_two_decimal_places() {
        assert_eq!(MatchScore(0.8765).to_string(), "0.88");
        assert_eq!(MatchScore(1.0).to_string(), "1.00");
        assert_eq!(format!("Match Score: {}", MatchScore(0.8765)), "Match Score: 0.88");
    }

    #[test]
    fn test_ids_serialize_as_bare_integers() {
        assert_eq!(serde_json::to_string(&ResumeId(42)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&JobId(7)).unwrap(), "7");
    }
}
