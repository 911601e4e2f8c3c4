//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::services::DashboardSummary;

/// 初始化 tracing 日志
///
/// `RUST_LOG` 优先；否则默认 `info`，开启详细日志时为 `debug`。重复调用不会报错。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - 批量情感分析 ({})",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🤖 模型: {} @ {}", config.llm_model_name, config.llm_api_base_url);
    info!("🌡️ 温度: {}", config.temperature);
    info!("{}", "=".repeat(60));
}

/// 记录输入加载信息
///
/// # 参数
/// - `total`: 条目总数
/// - `valid`: 文本非空的条目数
/// - `origin`: 输入来源（文件路径或样例）
pub fn log_batch_loaded(total: usize, valid: usize, origin: &str) {
    info!("✓ 从 {} 载入 {} 个条目", origin, total);
    if valid < total {
        info!("📋 其中 {} 个为空白条目，不会提交", total - valid);
    }
}

/// 记录汇总统计
pub fn log_summary(summary: &DashboardSummary) {
    info!("\n{}", "─".repeat(60));
    info!("📊 分析汇总: 共 {} 条", summary.total);
    info!(
        "😊 POSITIVE {:.0}% | 😠 NEGATIVE {:.0}% | 😐 NEUTRAL {:.0}% | 🤔 MIXED {:.0}%",
        summary.positive_pct, summary.negative_pct, summary.neutral_pct, summary.mixed_pct
    );
    info!("🏆 最常见: {}", summary.most_common);
    info!("🎯 平均置信度: {:.0}%", summary.avg_confidence * 100.0);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `results`: 结果数量
/// - `csv_path`: 导出文件路径，未导出时为 `None`
pub fn print_final_stats(results: usize, csv_path: Option<&str>) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 结果: {} 条", results);
    match csv_path {
        Some(path) => info!("💾 结果已导出至: {}", path),
        None => info!("💾 没有结果可导出"),
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
