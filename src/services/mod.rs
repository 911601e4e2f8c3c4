pub mod batch_analyzer;
pub mod csv_export;
pub mod dashboard;
pub mod input_collector;
pub mod llm_service;

pub use batch_analyzer::BatchAnalyzer;
pub use csv_export::{to_csv_string, write_csv};
pub use dashboard::{chart_data, DashboardSummary, SentimentFilter};
pub use input_collector::{InputCollector, PasteOutcome};
pub use llm_service::{CompletionService, LlmService};
