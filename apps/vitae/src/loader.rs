use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::models::ResumeDocument;

/// Reads and parses the résumé data file.
pub async fn load_document(path: &Path) -> Result<ResumeDocument, AppError> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::DocumentLoad(format!("cannot read {}: {e}", path.display()))
    })?;

    let document = ResumeDocument::from_json(&text).map_err(|e| {
        AppError::DocumentLoad(format!("invalid JSON in {}: {e}", path.display()))
    })?;

    info!(
        "Loaded {} ({} language(s))",
        path.display(),
        document.languages.len()
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::fixtures::RESUME_JSON;

    #[tokio::test]
    async fn test_load_document_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, RESUME_JSON).unwrap();

        let document = load_document(&path).await.unwrap();
        assert!(document.language("sv").is_some());
    }

    #[tokio::test]
    async fn test_missing_file_is_document_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("nope.json")).await.unwrap_err();
        assert!(matches!(err, AppError::DocumentLoad(_)));
    }

    #[tokio::test]
    async fn test_malformed_json_is_document_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_document(&path).await.unwrap_err();
        assert!(matches!(err, AppError::DocumentLoad(_)));
    }
}
