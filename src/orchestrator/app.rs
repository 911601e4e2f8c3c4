//! 应用入口 - 编排层
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：记录启动信息、创建 LLM 服务和分析会话
//! 2. **载入输入**：纯文本文件（每个非空行一个条目）、TOML 批量文件，或演示样例
//! 3. **单次分析**：整批只调用一次外部模型
//! 4. **输出**：汇总统计写入日志，结果导出为 CSV

use anyhow::Result;
use std::path::Path;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::FileError;
use crate::models::{load_text_file, load_toml_batch};
use crate::services::{
    write_csv, BatchAnalyzer, CompletionService, DashboardSummary, InputCollector, LlmService,
};
use crate::utils::logging::{
    log_batch_loaded, log_startup, log_summary, print_final_stats, truncate_text,
};
use crate::workflow::AnalysisSession;

/// 应用主结构
pub struct App<S> {
    config: Config,
    session: AnalysisSession<S>,
}

impl App<LlmService> {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        let service = LlmService::new(&config);
        Self::with_service(config, service)
    }
}

impl<S: CompletionService> App<S> {
    /// 使用指定的分析服务创建应用
    pub fn with_service(config: Config, service: S) -> Self {
        log_startup(&config);

        let collector = InputCollector::new(config.default_source.clone());
        let session = AnalysisSession::new(collector, BatchAnalyzer::new(service));

        Self { config, session }
    }

    pub fn session(&self) -> &AnalysisSession<S> {
        &self.session
    }

    /// 运行应用主逻辑
    ///
    /// `input` 为空时使用演示样例。
    pub async fn run(&mut self, input: Option<&Path>) -> Result<()> {
        self.load_input(input).await?;

        if let Err(e) = self.session.analyze().await {
            error!("❌ 分析失败: {}", e.user_message());
            return Err(e.into());
        }

        let results = self.session.results();
        for (i, result) in results.iter().enumerate() {
            info!(
                "  {}. [{}] {} {}% | {}",
                i + 1,
                result.source,
                result.sentiment,
                result.confidence_percent(),
                truncate_text(&result.text, 60)
            );
        }

        log_summary(&DashboardSummary::from_results(results));

        let csv_path = Path::new(&self.config.output_csv);
        let exported = write_csv(csv_path, results).await?;
        print_final_stats(
            results.len(),
            exported.then_some(self.config.output_csv.as_str()),
        );

        Ok(())
    }

    /// 载入输入
    async fn load_input(&mut self, input: Option<&Path>) -> Result<()> {
        info!("\n📁 正在载入输入...");
        let collector = self.session.collector_mut();

        let origin = match input {
            None => {
                collector.load_samples();
                "演示样例".to_string()
            }
            Some(path) if is_toml(path) => {
                let items = load_toml_batch(path).await?;
                collector.load_items(items);
                path.display().to_string()
            }
            Some(path) => {
                let file = load_text_file(path).await?;
                let loaded = collector.load_from_file(&file.content, file.file_name.as_deref());
                if loaded == 0 {
                    let err = FileError::NoLines {
                        path: path.display().to_string(),
                    };
                    warn!("⚠️ {}", err);
                    return Err(err.into());
                }
                path.display().to_string()
            }
        };

        let collector = self.session.collector();
        log_batch_loaded(
            collector.len(),
            collector.valid_submission_set().len(),
            &origin,
        );
        Ok(())
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use async_trait::async_trait;

    struct CannedService(String);

    #[async_trait]
    impl CompletionService for CannedService {
        fn model_name(&self) -> &str {
            "canned"
        }

        async fn complete(&self, _system: &str, _user: &str) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    fn config_in(dir: &Path) -> Config {
        let mut config = Config::with_api_key("test");
        config.output_csv = dir.join("out.csv").display().to_string();
        config
    }

    #[tokio::test]
    async fn test_run_text_file_exports_csv() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("reviews.txt");
        std::fs::write(&input, "Love it\n\nHate it\n").unwrap();

        let payload = serde_json::json!({
            "results": [
                { "sentiment": "POSITIVE", "confidence": 0.9, "keywords": ["love"],
                  "emotions": ["joy"], "explanation": "Positive words." },
                { "sentiment": "NEGATIVE", "confidence": 0.8, "keywords": ["hate"],
                  "emotions": ["anger"], "explanation": "Negative words." }
            ]
        });
        let config = config_in(dir.path());
        let mut app = App::with_service(config.clone(), CannedService(payload.to_string()));

        app.run(Some(&input)).await.unwrap();

        let results = app.session().results();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.source == "reviews.txt"));

        let csv_text = std::fs::read_to_string(&config.output_csv).unwrap();
        assert_eq!(csv_text.lines().count(), 3);
    }

    #[tokio::test]
    async fn test_run_blank_file_fails_before_analysis() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("blank.txt");
        std::fs::write(&input, "\n   \n").unwrap();

        let config = config_in(dir.path());
        let mut app = App::with_service(config.clone(), CannedService("{}".to_string()));

        assert!(app.run(Some(&input)).await.is_err());
        assert!(!Path::new(&config.output_csv).exists());
    }

    #[tokio::test]
    async fn test_run_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut app = App::with_service(config.clone(), CannedService("oops".to_string()));

        assert!(app.run(None).await.is_err());
        assert!(app.session().error_message().is_some());
        assert_eq!(app.session().collector().len(), 4);
        assert!(!Path::new(&config.output_csv).exists());
    }

    #[test]
    fn test_is_toml() {
        assert!(is_toml(Path::new("batch.toml")));
        assert!(!is_toml(Path::new("lines.txt")));
    }
}
