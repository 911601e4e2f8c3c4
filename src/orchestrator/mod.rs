//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 负责一次命令行运行的调度：载入输入、触发一次分析、输出汇总和导出文件。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (载入输入 / 汇总 / 导出)
//!     ↓
//! workflow::AnalysisSession (校验 → 请求 → 成功 / 失败)
//!     ↓
//! services (能力层：input_collector / batch_analyzer / llm / dashboard / csv)
//! ```

pub mod app;

pub use app::App;
