//! 批量情感分析 - 业务能力层
//!
//! 每次运行只调用一次外部模型：
//! 1. 把整批输入和输出格式说明拼成一次请求
//! 2. 把返回文本当作不可信数据，逐字段校验
//! 3. 用提交时的原始值补齐缺失的 text / source，并分配新的 ID
//!
//! 要么返回与输入等长、同序的完整结果，要么整体失败。

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::LlmError;
use crate::models::{AnalysisRequestItem, AnalysisResult, Sentiment};
use crate::services::llm_service::CompletionService;

/// 关键词、情绪的最大数量
pub const MAX_TAGS: usize = 3;

const SYSTEM_MESSAGE: &str = "You are a sentiment analysis engine. \
You answer with a single JSON object and nothing else: no prose, no markdown.";

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*```[A-Za-z]*\s*(.*?)\s*```\s*$").expect("valid fence regex")
});

/// 服务返回的顶层对象
#[derive(Debug, Deserialize)]
struct RawPayload {
    results: Option<Vec<RawResult>>,
}

/// 服务返回的单条结果，所有字段都可能缺失
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawResult {
    text: Option<String>,
    source: Option<String>,
    sentiment: Option<String>,
    confidence: Option<f64>,
    keywords: Option<Vec<String>>,
    emotions: Option<Vec<String>>,
    explanation: Option<String>,
}

/// 批量分析桥接器
pub struct BatchAnalyzer<S> {
    service: S,
}

impl<S: CompletionService> BatchAnalyzer<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// 分析一批输入
    ///
    /// 调用方负责保证 `items` 非空；空批次直接返回空结果，不发请求。
    pub async fn analyze(
        &self,
        items: &[AnalysisRequestItem],
    ) -> Result<Vec<AnalysisResult>, LlmError> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        info!(
            "🤖 提交 {} 条文本进行情感分析 (模型: {})",
            items.len(),
            self.service.model_name()
        );

        let user_message = build_user_message(items);
        let response = self.service.complete(SYSTEM_MESSAGE, &user_message).await?;

        debug!("LLM 返回 {} 字符", response.len());

        let raw = parse_payload(&response)?;
        let results = reconcile(items, raw)?;

        info!("✓ 情感分析完成，共 {} 条结果", results.len());
        Ok(results)
    }
}

/// 构建分析请求的用户消息
pub fn build_user_message(items: &[AnalysisRequestItem]) -> String {
    let inputs_json = serde_json::to_string_pretty(items).unwrap_or_default();

    format!(
        r#"Perform a sentiment analysis on the following batch of text inputs. For each input, provide a detailed analysis.

Analyze the following JSON array of texts:
{inputs_json}

Return a JSON object of the form {{"results": [...]}} with exactly one result per input, in the same order as the inputs. Each result must have:
- "text": the original text that was analyzed
- "source": the original source identifier for the text
- "sentiment": one of the uppercase strings "POSITIVE", "NEGATIVE", "NEUTRAL", "MIXED"
- "confidence": a number from 0.0 to 1.0 representing your confidence in the sentiment assessment
- "keywords": a list of up to {MAX_TAGS} keywords or topics central to the sentiment of the text
- "emotions": a list of up to {MAX_TAGS} emotions detected in the text (e.g. joy, anger, surprise); use an empty list if no specific emotion is detected
- "explanation": a brief, one-sentence explanation for the sentiment, highlighting key phrases or tones"#
    )
}

/// 去掉 Markdown 代码块包裹
fn strip_code_fence(response: &str) -> &str {
    match CODE_FENCE.captures(response).and_then(|caps| caps.get(1)) {
        Some(body) => body.as_str(),
        None => response.trim(),
    }
}

fn parse_payload(response: &str) -> Result<Vec<RawResult>, LlmError> {
    let body = strip_code_fence(response);
    if body.is_empty() {
        return Err(LlmError::MissingResults);
    }

    let payload: RawPayload =
        serde_json::from_str(body).map_err(|source| LlmError::MalformedPayload { source })?;

    payload.results.ok_or(LlmError::MissingResults)
}

/// 逐条校验并补齐，位置 i 的结果对应 `items[i]`
fn reconcile(
    items: &[AnalysisRequestItem],
    raw: Vec<RawResult>,
) -> Result<Vec<AnalysisResult>, LlmError> {
    if raw.len() != items.len() {
        return Err(LlmError::ResultCountMismatch {
            expected: items.len(),
            actual: raw.len(),
        });
    }

    items
        .iter()
        .zip(raw)
        .enumerate()
        .map(|(index, (item, result))| reconcile_one(index, item, result))
        .collect()
}

fn reconcile_one(
    index: usize,
    item: &AnalysisRequestItem,
    raw: RawResult,
) -> Result<AnalysisResult, LlmError> {
    let label = raw.sentiment.ok_or(LlmError::MissingField {
        index,
        field: "sentiment",
    })?;
    let sentiment = Sentiment::from_label(&label).ok_or(LlmError::InvalidSentiment {
        index,
        value: label.clone(),
    })?;

    let confidence = raw.confidence.ok_or(LlmError::MissingField {
        index,
        field: "confidence",
    })?;
    if !(0.0..=1.0).contains(&confidence) {
        return Err(LlmError::ConfidenceOutOfRange {
            index,
            value: confidence,
        });
    }

    let keywords = raw.keywords.ok_or(LlmError::MissingField {
        index,
        field: "keywords",
    })?;
    let explanation = raw.explanation.ok_or(LlmError::MissingField {
        index,
        field: "explanation",
    })?;

    Ok(AnalysisResult {
        id: Uuid::new_v4(),
        text: or_fallback(raw.text, &item.text),
        source: or_fallback(raw.source, &item.source),
        sentiment,
        confidence,
        keywords: limit_tags(keywords),
        emotions: limit_tags(raw.emotions.unwrap_or_default()),
        explanation,
    })
}

fn or_fallback(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback.to_string(),
    }
}

fn limit_tags(mut tags: Vec<String>) -> Vec<String> {
    tags.retain(|tag| !tag.trim().is_empty());
    tags.truncate(MAX_TAGS);
    tags
}
