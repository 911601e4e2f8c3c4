//! 单次分析运行的状态机
//!
//! `Idle → Requesting → {Succeeded | Failed} → Idle`

use crate::models::AnalysisResult;

/// 分析状态
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnalysisState {
    /// 尚未运行或已清空
    #[default]
    Idle,
    /// 请求进行中，此时不能再次触发
    Requesting,
    /// 成功，持有完整结果
    Succeeded(Vec<AnalysisResult>),
    /// 失败，持有面向用户的提示
    Failed(String),
}

/// 驱动状态变化的事件
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisEvent {
    /// 用户触发分析
    Submit,
    /// 提交前校验未通过
    Rejected(String),
    /// 外部调用成功
    Completed(Vec<AnalysisResult>),
    /// 外部调用失败
    Errored(String),
    /// 清空结果和错误
    Clear,
}

impl AnalysisState {
    /// 状态转移，对任意 (状态, 事件) 组合都有定义
    ///
    /// 请求进行中只接受 `Completed` / `Errored`，其余事件被忽略；
    /// 不在请求中时收到的 `Completed` / `Errored` 视为过期，同样忽略。
    pub fn transition(self, event: AnalysisEvent) -> AnalysisState {
        match (self, event) {
            (AnalysisState::Requesting, AnalysisEvent::Completed(results)) => {
                AnalysisState::Succeeded(results)
            }
            (AnalysisState::Requesting, AnalysisEvent::Errored(message)) => {
                AnalysisState::Failed(message)
            }
            (AnalysisState::Requesting, _) => AnalysisState::Requesting,
            (_, AnalysisEvent::Submit) => AnalysisState::Requesting,
            (_, AnalysisEvent::Rejected(message)) => AnalysisState::Failed(message),
            (_, AnalysisEvent::Clear) => AnalysisState::Idle,
            (state, AnalysisEvent::Completed(_) | AnalysisEvent::Errored(_)) => state,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisState::Requesting)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            AnalysisState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// 当前可展示的结果，失败或未运行时为空
    pub fn results(&self) -> &[AnalysisResult] {
        match self {
            AnalysisState::Succeeded(results) => results,
            _ => &[],
        }
    }

    pub fn has_results(&self) -> bool {
        !self.results().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let state = AnalysisState::Idle.transition(AnalysisEvent::Submit);
        assert!(state.is_loading());

        let state = state.transition(AnalysisEvent::Completed(vec![]));
        assert_eq!(state, AnalysisState::Succeeded(vec![]));
        assert!(!state.is_loading());

        let state = state.transition(AnalysisEvent::Clear);
        assert_eq!(state, AnalysisState::Idle);
    }

    #[test]
    fn test_error_path() {
        let state = AnalysisState::Idle
            .transition(AnalysisEvent::Submit)
            .transition(AnalysisEvent::Errored("boom".to_string()));
        assert_eq!(state.error_message(), Some("boom"));
        assert!(!state.has_results());
    }

    #[test]
    fn test_requesting_ignores_other_events() {
        for event in [
            AnalysisEvent::Submit,
            AnalysisEvent::Clear,
            AnalysisEvent::Rejected("x".to_string()),
        ] {
            assert_eq!(
                AnalysisState::Requesting.transition(event),
                AnalysisState::Requesting
            );
        }
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let state = AnalysisState::Failed("old".to_string())
            .transition(AnalysisEvent::Completed(vec![]));
        assert_eq!(state, AnalysisState::Failed("old".to_string()));

        let state = AnalysisState::Idle.transition(AnalysisEvent::Errored("late".to_string()));
        assert_eq!(state, AnalysisState::Idle);
    }

    #[test]
    fn test_rejected_and_resubmit() {
        let state = AnalysisState::Idle.transition(AnalysisEvent::Rejected("empty".to_string()));
        assert_eq!(state.error_message(), Some("empty"));

        let state = state.transition(AnalysisEvent::Submit);
        assert!(state.is_loading());
        assert_eq!(state.error_message(), None);
    }
}
