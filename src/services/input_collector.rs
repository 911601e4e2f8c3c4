//! 输入收集 - 业务能力层
//!
//! 维护有序、可编辑的条目列表，并按需产出可提交的批次。
//! 列表至少保留一个条目。

use tracing::debug;
use uuid::Uuid;

use crate::models::{non_blank_lines, sample_items, AnalysisRequestItem, Entry, EntryUpdate};

/// 粘贴的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteOutcome {
    /// 多行内容已拆分为 `count` 个条目
    Expanded { count: usize },
    /// 单行内容，不拦截，按普通输入处理
    PassThrough,
    /// 目标条目不存在，内容被丢弃
    UnknownEntry,
}

/// 输入收集器
#[derive(Debug, Clone)]
pub struct InputCollector {
    entries: Vec<Entry>,
    default_source: String,
}

impl InputCollector {
    /// 创建只含一个空白条目的收集器
    pub fn new(default_source: impl Into<String>) -> Self {
        Self {
            entries: vec![Entry::blank()],
            default_source: default_source.into(),
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 是否存在非空文本，决定能否触发分析
    pub fn has_content(&self) -> bool {
        self.entries.iter().any(Entry::has_text)
    }

    /// 追加空白条目，来源沿用最后一个条目
    pub fn add_entry(&mut self) -> Uuid {
        let source = self
            .entries
            .last()
            .map(|entry| entry.source.clone())
            .unwrap_or_default();
        let entry = Entry::new("", source);
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// 合并更新，找不到 ID 时不做任何事
    pub fn update_entry(&mut self, id: Uuid, update: EntryUpdate) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) else {
            return false;
        };
        if let Some(text) = update.text {
            entry.text = text;
        }
        if let Some(source) = update.source {
            entry.source = source;
        }
        true
    }

    /// 删除条目；只剩一个时拒绝
    pub fn remove_entry(&mut self, id: Uuid) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// 粘贴多行内容时，用每个非空行替换目标条目，位置不变
    pub fn paste(&mut self, id: Uuid, pasted: &str) -> PasteOutcome {
        let lines = non_blank_lines(pasted);
        if lines.len() <= 1 {
            return PasteOutcome::PassThrough;
        }

        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            return PasteOutcome::UnknownEntry;
        };

        let source = self.entries[index].source.clone();
        let count = lines.len();
        let replacement: Vec<Entry> = lines
            .into_iter()
            .map(|line| Entry::new(line, source.clone()))
            .collect();
        self.entries.splice(index..=index, replacement);

        debug!("粘贴拆分为 {} 个条目 (位置 {})", count, index);
        PasteOutcome::Expanded { count }
    }

    /// 用文件内容替换整张列表，每个非空行一个条目
    ///
    /// 文件名为空时使用默认来源。没有非空行时列表保持不变，返回 0。
    pub fn load_from_file(&mut self, content: &str, file_name: Option<&str>) -> usize {
        let source = file_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(self.default_source.as_str())
            .to_string();

        let entries: Vec<Entry> = non_blank_lines(content)
            .into_iter()
            .map(|line| Entry::new(line, source.clone()))
            .collect();

        if entries.is_empty() {
            return 0;
        }

        let count = entries.len();
        self.entries = entries;
        count
    }

    /// 用给定的条目替换整张列表，为空时重置
    pub fn load_items(&mut self, items: Vec<AnalysisRequestItem>) -> usize {
        if items.is_empty() {
            self.reset();
            return 0;
        }
        self.entries = items
            .into_iter()
            .map(|item| Entry::new(item.text, item.source))
            .collect();
        self.entries.len()
    }

    /// 载入演示样例
    pub fn load_samples(&mut self) -> usize {
        self.load_items(sample_items())
    }

    /// 重置为单个空白条目
    pub fn reset(&mut self) {
        self.entries = vec![Entry::blank()];
    }

    /// 可提交的批次：文本非空的条目，去掉 ID，保持原顺序
    pub fn valid_submission_set(&self) -> Vec<AnalysisRequestItem> {
        self.entries
            .iter()
            .filter(|entry| entry.has_text())
            .map(Entry::to_request_item)
            .collect()
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new("File Upload")
    }
}
