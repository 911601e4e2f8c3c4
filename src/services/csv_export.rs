//! CSV 导出 - 业务能力层
//!
//! 只依赖分析结果列表，与分析流程无关

use std::path::Path;
use tracing::debug;

use crate::error::ExportError;
use crate::models::AnalysisResult;

/// 表头
pub const CSV_HEADER: [&str; 7] = [
    "id",
    "source",
    "text",
    "sentiment",
    "confidence",
    "emotions",
    "explanation",
];

/// 把结果序列化为 CSV 文本（UTF-8，`\n` 换行）
///
/// 含逗号、引号或换行的字段加双引号，内部引号写成两个。
pub fn to_csv_string(results: &[AnalysisResult]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;

    for result in results {
        let id = result.id.to_string();
        let confidence = result.confidence.to_string();
        let emotions = result.emotions.join("; ");
        writer.write_record([
            id.as_str(),
            result.source.as_str(),
            result.text.as_str(),
            result.sentiment.as_str(),
            confidence.as_str(),
            emotions.as_str(),
            result.explanation.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(csv::Error::from(e.into_error())))?;

    // 所有字段都来自 String，结果必然是合法 UTF-8
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// 写入 CSV 文件；结果为空时不写文件，返回 `false`
pub async fn write_csv(path: &Path, results: &[AnalysisResult]) -> Result<bool, ExportError> {
    if results.is_empty() {
        return Ok(false);
    }

    let content = to_csv_string(results)?;
    tokio::fs::write(path, content)
        .await
        .map_err(|source| ExportError::WriteFailed {
            path: path.display().to_string(),
            source,
        })?;

    debug!("已导出 {} 条结果到 {}", results.len(), path.display());
    Ok(true)
}
