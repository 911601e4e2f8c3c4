//! # Sentiment Batch
//!
//! 把一批带来源标签的短文本交给外部大模型做情感分析，
//! 校验并补齐返回结果，输出汇总统计和 CSV
//!
//! ## 架构设计
//!
//! ### ① 数据模型（Models）
//! - `models/` - `Entry`、`AnalysisRequestItem`、`AnalysisResult`、`Sentiment`
//! - `models/loaders` - 纯文本文件和 TOML 批量文件的读取
//!
//! ### ② 业务能力层（Services）
//! - `InputCollector` - 维护可编辑的条目列表，产出可提交的批次
//! - `LlmService` - OpenAI 兼容的聊天接口（`CompletionService` 的实现）
//! - `BatchAnalyzer` - 构建请求、校验返回、用原始输入补齐结果
//! - `dashboard` / `csv_export` - 汇总统计与导出
//!
//! ### ③ 流程层（Workflow）
//! - `AnalysisState` - `Idle → Requesting → Succeeded | Failed` 状态机
//! - `AnalysisSession` - 一次完整的分析运行
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 命令行入口：载入输入、运行、汇总、导出

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnalysisRequestItem, AnalysisResult, Entry, EntryUpdate, Sentiment};
pub use orchestrator::App;
pub use services::{BatchAnalyzer, CompletionService, InputCollector, LlmService, PasteOutcome};
pub use workflow::{AnalysisEvent, AnalysisSession, AnalysisState};
