use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::error::ConfigError;

/// 程序配置
#[derive(Clone)]
pub struct Config {
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 采样温度，取低值让输出更稳定
    pub temperature: f32,
    pub max_tokens: u32,
    // --- 输入输出 ---
    /// CSV 导出文件
    pub output_csv: String,
    /// 上传文件没有文件名时使用的来源标签
    pub default_source: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

/// 配置文件内容，所有字段均可省略
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    llm_api_key: Option<String>,
    llm_api_base_url: Option<String>,
    llm_model_name: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    output_csv: Option<String>,
    default_source: Option<String>,
    verbose_logging: Option<bool>,
}

impl Config {
    pub const API_KEY_VAR: &'static str = "LLM_API_KEY";
    pub const CONFIG_FILE_VAR: &'static str = "SENTIMENT_CONFIG";

    /// 使用给定的密钥和默认值创建配置
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            llm_api_key: api_key.into(),
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4o-mini".to_string(),
            temperature: 0.2,
            max_tokens: 4096,
            output_csv: "sentiment-analysis-results.csv".to_string(),
            default_source: "File Upload".to_string(),
            verbose_logging: false,
        }
    }

    /// 加载配置：先读 `SENTIMENT_CONFIG` 指向的 TOML 文件（可选），再用环境变量覆盖
    ///
    /// 缺少 API 密钥时立即失败，不会拖到第一次调用才报错。
    pub fn load() -> Result<Self, ConfigError> {
        let file = match std::env::var(Self::CONFIG_FILE_VAR) {
            Ok(path) => read_file_config(Path::new(&path))?,
            Err(_) => FileConfig::default(),
        };
        Self::resolve(file, |name| std::env::var(name).ok())
    }

    fn resolve(
        file: FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = env(Self::API_KEY_VAR)
            .or(file.llm_api_key)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey {
                var_name: Self::API_KEY_VAR.to_string(),
            })?;

        let default = Self::with_api_key(api_key);

        Ok(Self {
            llm_api_base_url: env("LLM_API_BASE_URL")
                .or(file.llm_api_base_url)
                .unwrap_or(default.llm_api_base_url),
            llm_model_name: env("LLM_MODEL_NAME")
                .or(file.llm_model_name)
                .unwrap_or(default.llm_model_name),
            temperature: parse_var(&env, "LLM_TEMPERATURE", "f32")?
                .or(file.temperature)
                .unwrap_or(default.temperature),
            max_tokens: parse_var(&env, "LLM_MAX_TOKENS", "u32")?
                .or(file.max_tokens)
                .unwrap_or(default.max_tokens),
            output_csv: env("OUTPUT_CSV")
                .or(file.output_csv)
                .unwrap_or(default.output_csv),
            default_source: env("DEFAULT_SOURCE")
                .or(file.default_source)
                .unwrap_or(default.default_source),
            verbose_logging: parse_var(&env, "VERBOSE_LOGGING", "bool")?
                .or(file.verbose_logging)
                .unwrap_or(default.verbose_logging),
            llm_api_key: default.llm_api_key,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("llm_api_key", &"***")
            .field("llm_api_base_url", &self.llm_api_base_url)
            .field("llm_model_name", &self.llm_model_name)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("output_csv", &self.output_csv)
            .field("default_source", &self.default_source)
            .field("verbose_logging", &self.verbose_logging)
            .finish()
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadFailed {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
        path: path.display().to_string(),
        source,
    })
}

fn parse_var<T: std::str::FromStr>(
    env: &impl Fn(&str) -> Option<String>,
    var_name: &str,
    expected_type: &str,
) -> Result<Option<T>, ConfigError> {
    match env(var_name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
    }
}
