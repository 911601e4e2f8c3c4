use serde::Deserialize;
use std::path::Path;
use tokio::fs;

use crate::error::{AppError, AppResult, FileError};
use crate::models::entry::AnalysisRequestItem;

/// TOML 批量输入文件
///
/// ```toml
/// [[entries]]
/// text = "Great service!"
/// source = "Survey"
/// ```
#[derive(Debug, Deserialize)]
struct BatchFile {
    #[serde(default)]
    entries: Vec<AnalysisRequestItem>,
}

/// 从 TOML 文件加载一批输入
pub async fn load_toml_batch(toml_file_path: &Path) -> AppResult<Vec<AnalysisRequestItem>> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(toml_file_path.display().to_string(), e))?;

    let batch = parse_toml_batch(&content).map_err(|source| FileError::TomlParseFailed {
        path: toml_file_path.display().to_string(),
        source,
    })?;

    tracing::info!(
        "成功加载 {} 个条目: {}",
        batch.len(),
        toml_file_path.display()
    );

    Ok(batch)
}

fn parse_toml_batch(content: &str) -> Result<Vec<AnalysisRequestItem>, toml::de::Error> {
    let batch: BatchFile = toml::from_str(content)?;
    Ok(batch.entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_batch() {
        let items = parse_toml_batch(
            r#"
            [[entries]]
            text = "Great service!"
            source = "Survey"

            [[entries]]
            text = "No source here"
            "#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0], AnalysisRequestItem::new("Great service!", "Survey"));
        assert_eq!(items[1].source, "");
    }

    #[test]
    fn test_parse_toml_batch_rejects_missing_text() {
        assert!(parse_toml_batch("[[entries]]\nsource = \"x\"\n").is_err());
    }

    #[tokio::test]
    async fn test_load_toml_batch_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.toml");
        std::fs::write(&path, "entries = 3").unwrap();

        match load_toml_batch(&path).await {
            Err(AppError::File(FileError::TomlParseFailed { path: p, .. })) => {
                assert!(p.ends_with("batch.toml"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
