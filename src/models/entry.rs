use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 一个可编辑的输入条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: Uuid,
    pub text: String,
    pub source: String,
}

impl Entry {
    /// 创建一个带新 ID 的条目
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            source: source.into(),
        }
    }

    /// 空白占位条目
    pub fn blank() -> Self {
        Self::new("", "")
    }

    /// 文本去掉首尾空白后是否非空
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// 去掉 ID 后的提交项
    pub fn to_request_item(&self) -> AnalysisRequestItem {
        AnalysisRequestItem {
            text: self.text.clone(),
            source: self.source.clone(),
        }
    }
}

/// 条目的部分更新，`None` 表示保持原值
#[derive(Debug, Clone, Default)]
pub struct EntryUpdate {
    pub text: Option<String>,
    pub source: Option<String>,
}

impl EntryUpdate {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            source: None,
        }
    }

    pub fn source(source: impl Into<String>) -> Self {
        Self {
            text: None,
            source: Some(source.into()),
        }
    }
}

/// 提交给分析服务的单条输入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequestItem {
    pub text: String,
    #[serde(default)]
    pub source: String,
}

impl AnalysisRequestItem {
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
        }
    }
}
