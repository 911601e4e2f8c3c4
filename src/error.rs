use thiserror::Error;

/// 分析失败时展示给用户的统一提示
pub const ANALYSIS_FAILED_MESSAGE: &str = "An error occurred during analysis. The AI model may be temporarily unavailable or the input format is incorrect. Please try again.";

/// 没有可提交内容时的提示
pub const NO_INPUT_MESSAGE: &str = "Please add some text to analyze.";

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 提交校验错误
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),
    /// LLM 服务错误（传输失败或返回结构不符合约定）
    #[error("LLM错误: {0}")]
    Llm(#[from] LlmError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 导出错误
    #[error("导出错误: {0}")]
    Export(#[from] ExportError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 缺少 API 密钥
    #[error("缺少 LLM API 密钥: 请设置环境变量 {var_name} 或在配置文件中填写 llm_api_key")]
    MissingApiKey { var_name: String },
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    FileReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 配置文件 TOML 解析失败
    #[error("配置文件解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 提交校验错误
#[derive(Debug, Error)]
pub enum ValidationError {
    /// 所有条目的文本都为空
    #[error("没有可分析的文本条目")]
    NoValidEntries,
}

/// LLM 服务错误
#[derive(Debug, Error)]
pub enum LlmError {
    /// 请求构建失败
    #[error("构建 LLM 请求失败: {source}")]
    RequestBuildFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// API 调用失败
    #[error("LLM API调用失败 (模型: {model}): {source}")]
    ApiCallFailed {
        model: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 返回内容为空
    #[error("LLM返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
    /// 返回内容不是合法 JSON
    #[error("LLM返回内容无法解析为JSON: {source}")]
    MalformedPayload {
        #[source]
        source: serde_json::Error,
    },
    /// 返回对象缺少 results 数组
    #[error("LLM返回结果缺少 results 字段")]
    MissingResults,
    /// 结果数量与提交数量不一致
    #[error("LLM返回结果数量不一致: 提交 {expected} 条，返回 {actual} 条")]
    ResultCountMismatch { expected: usize, actual: usize },
    /// 必填字段缺失
    #[error("第 {index} 条结果缺少字段 {field}")]
    MissingField { index: usize, field: &'static str },
    /// 情感标签不在约定范围内
    #[error("第 {index} 条结果的情感标签无效: '{value}'")]
    InvalidSentiment { index: usize, value: String },
    /// 置信度超出 [0, 1]
    #[error("第 {index} 条结果的置信度超出范围 [0, 1]: {value}")]
    ConfidenceOutOfRange { index: usize, value: f64 },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 文件中没有非空行
    #[error("文件中没有可用的文本行: {path}")]
    NoLines { path: String },
}

/// 导出错误
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV 序列化失败
    #[error("CSV写入失败: {0}")]
    Csv(#[from] csv::Error),
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 面向用户的提示信息
    ///
    /// 所有 LLM 相关错误统一为一条提示，具体原因只写入日志。
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(_) => NO_INPUT_MESSAGE.to_string(),
            AppError::Llm(_) => ANALYSIS_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_errors_collapse_to_generic_message() {
        let errors = vec![
            AppError::Llm(LlmError::MissingResults),
            AppError::Llm(LlmError::EmptyContent {
                model: "m".to_string(),
            }),
            AppError::Llm(LlmError::ResultCountMismatch {
                expected: 2,
                actual: 1,
            }),
            AppError::Llm(LlmError::ApiCallFailed {
                model: "m".to_string(),
                source: Box::new(std::io::Error::other("connection reset")),
            }),
        ];

        for err in errors {
            assert_eq!(err.user_message(), ANALYSIS_FAILED_MESSAGE);
        }
    }

    #[test]
    fn test_validation_message() {
        let err = AppError::from(ValidationError::NoValidEntries);
        assert_eq!(err.user_message(), NO_INPUT_MESSAGE);
    }

    #[test]
    fn test_display_keeps_diagnostics() {
        let err = AppError::Llm(LlmError::InvalidSentiment {
            index: 3,
            value: "HAPPY".to_string(),
        });
        let text = err.to_string();
        assert!(text.contains("HAPPY"));
        assert!(text.contains('3'));
    }
}
