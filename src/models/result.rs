//! 分析结果模型

use phf::phf_map;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 情感标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Mixed,
}

static SENTIMENT_LABELS: phf::Map<&'static str, Sentiment> = phf_map! {
    "POSITIVE" => Sentiment::Positive,
    "NEGATIVE" => Sentiment::Negative,
    "NEUTRAL" => Sentiment::Neutral,
    "MIXED" => Sentiment::Mixed,
};

impl Sentiment {
    /// 固定展示顺序
    pub const ALL: [Sentiment; 4] = [
        Sentiment::Positive,
        Sentiment::Negative,
        Sentiment::Neutral,
        Sentiment::Mixed,
    ];

    /// 从服务返回的标签解析，大小写不敏感
    pub fn from_label(label: &str) -> Option<Self> {
        SENTIMENT_LABELS
            .get(label.trim().to_uppercase().as_str())
            .copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Negative => "NEGATIVE",
            Sentiment::Neutral => "NEUTRAL",
            Sentiment::Mixed => "MIXED",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一条完整的分析结果，生成后不再修改
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub id: Uuid,
    pub text: String,
    pub source: String,
    pub sentiment: Sentiment,
    /// 0.0 ~ 1.0
    pub confidence: f64,
    /// 最多 3 个
    pub keywords: Vec<String>,
    /// 最多 3 个，可以为空
    pub emotions: Vec<String>,
    pub explanation: String,
}

impl AnalysisResult {
    /// 置信度的整数百分比
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}
