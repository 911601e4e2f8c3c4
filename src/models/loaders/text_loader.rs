use std::path::Path;
use tokio::fs;

use crate::error::{AppError, AppResult};

/// 读取到内存的上传文件
#[derive(Debug, Clone)]
pub struct TextFile {
    pub content: String,
    /// 文件名，取不到时为 `None`
    pub file_name: Option<String>,
}

/// 拆分为非空行（去掉首尾空白后非空），保留行内原文
pub fn non_blank_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// 读取 `.txt` / `.csv` 等纯文本文件
///
/// 非 UTF-8 字节替换为 U+FFFD，不会因编码问题失败。
pub async fn load_text_file(path: &Path) -> AppResult<TextFile> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
    let content = String::from_utf8_lossy(&bytes).into_owned();

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .filter(|name| !name.is_empty());

    tracing::debug!(
        "读取文件 {}: {} 个非空行",
        path.display(),
        non_blank_lines(&content).len()
    );

    Ok(TextFile { content, file_name })
}
