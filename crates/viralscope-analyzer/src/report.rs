//! Persistence of the analysis artifact.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::AnalyzerError;
use crate::types::AnalysisResult;

/// Serialize the result to `viral_analysis_<session_id>_<timestamp>.json`
/// under `output_dir`, creating the directory on first use. The artifact is
/// pretty-printed UTF-8 with non-ASCII characters preserved.
///
/// Returns the path written. The pipeline treats a persistence failure as
/// non-fatal: it logs the error and leaves the result's success flag alone.
///
/// # Errors
///
/// Returns [`AnalyzerError::ArtifactIo`] when the directory or file cannot
/// be written, [`AnalyzerError::Json`] when serialization fails.
pub async fn save_analysis(
    result: &AnalysisResult,
    output_dir: &Path,
) -> Result<PathBuf, AnalyzerError> {
    let filename = format!(
        "viral_analysis_{}_{}.json",
        result.session_id,
        Utc::now().format("%Y%m%d_%H%M%S")
    );
    let path = output_dir.join(filename);

    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|source| AnalyzerError::ArtifactIo {
            path: output_dir.display().to_string(),
            source,
        })?;

    let json = serde_json::to_string_pretty(result)?;
    tokio::fs::write(&path, json)
        .await
        .map_err(|source| AnalyzerError::ArtifactIo {
            path: path.display().to_string(),
            source,
        })?;

    tracing::info!(path = %path.display(), "analysis artifact saved");
    Ok(path)
}
