//! 分析会话 - 流程层
//!
//! 把输入收集、批量分析和状态机串成一次完整的运行：
//! 校验 → 请求 → 成功 / 失败。运行不会修改可编辑的条目列表。

use tracing::{error, info, warn};

use crate::error::{AppError, AppResult, ValidationError, NO_INPUT_MESSAGE};
use crate::models::AnalysisResult;
use crate::services::{BatchAnalyzer, CompletionService, InputCollector};
use crate::workflow::analysis_state::{AnalysisEvent, AnalysisState};

/// 分析会话
pub struct AnalysisSession<S> {
    collector: InputCollector,
    analyzer: BatchAnalyzer<S>,
    state: AnalysisState,
}

impl<S: CompletionService> AnalysisSession<S> {
    pub fn new(collector: InputCollector, analyzer: BatchAnalyzer<S>) -> Self {
        Self {
            collector,
            analyzer,
            state: AnalysisState::Idle,
        }
    }

    pub fn collector(&self) -> &InputCollector {
        &self.collector
    }

    pub fn collector_mut(&mut self) -> &mut InputCollector {
        &mut self.collector
    }

    pub fn analyzer(&self) -> &BatchAnalyzer<S> {
        &self.analyzer
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.state.error_message()
    }

    pub fn has_results(&self) -> bool {
        self.state.has_results()
    }

    pub fn results(&self) -> &[AnalysisResult] {
        self.state.results()
    }

    /// 分析按钮是否可用
    pub fn can_analyze(&self) -> bool {
        !self.is_loading() && self.collector.has_content()
    }

    /// 运行一次分析
    ///
    /// 没有非空条目时不会调用外部服务。失败时结果列表清空，条目列表保持不变。
    pub async fn analyze(&mut self) -> AppResult<&[AnalysisResult]> {
        let items = self.collector.valid_submission_set();
        if items.is_empty() {
            warn!("⚠️ 没有可分析的文本，跳过本次分析");
            self.apply(AnalysisEvent::Rejected(NO_INPUT_MESSAGE.to_string()));
            return Err(ValidationError::NoValidEntries.into());
        }

        self.apply(AnalysisEvent::Submit);
        info!("📤 本次提交 {} 条文本", items.len());

        let outcome = self.analyzer.analyze(&items).await;
        match outcome {
            Ok(results) => {
                self.apply(AnalysisEvent::Completed(results));
                Ok(self.state.results())
            }
            Err(e) => {
                error!("❌ 情感分析失败: {}", e);
                let err = AppError::from(e);
                self.apply(AnalysisEvent::Errored(err.user_message()));
                Err(err)
            }
        }
    }

    /// 清空：条目重置为一个空白条目，结果和错误一并清除
    pub fn clear(&mut self) {
        self.collector.reset();
        self.apply(AnalysisEvent::Clear);
    }

    fn apply(&mut self, event: AnalysisEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.transition(event);
    }
}
