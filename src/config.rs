use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// 凭据使用的配置键（环境变量名与 secrets 文件键名相同）
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 待处理的评分表
    pub input_file: String,
    /// 生成结果输出表格
    pub output_file: String,
    /// 示例模板输出路径（输入文件不存在时写出）
    pub sample_template_file: String,
    /// 逐条摘要日志文件
    pub output_log_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- LLM 配置 ---
    pub llm_api_key: Option<String>,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 凭据兜底来源
    pub secrets_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: "candidate_scores.xlsx".to_string(),
            output_file: "candidate_summaries_results_v11.xlsx".to_string(),
            sample_template_file: "candidate_scores_template_v11.xlsx".to_string(),
            output_log_file: "summaries.txt".to_string(),
            verbose_logging: false,
            llm_api_key: None,
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            llm_model_name: "gemini-2.5-pro".to_string(),
            secrets_file: ".streamlit/secrets.toml".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            input_file: std::env::var("INPUT_FILE").unwrap_or(default.input_file),
            output_file: std::env::var("OUTPUT_FILE").unwrap_or(default.output_file),
            sample_template_file: std::env::var("SAMPLE_TEMPLATE_FILE").unwrap_or(default.sample_template_file),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            llm_api_key: std::env::var(API_KEY_VAR).ok().or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            secrets_file: std::env::var("SECRETS_FILE").unwrap_or(default.secrets_file),
        }
    }

    /// 解析远程服务凭据
    ///
    /// 顺序：环境变量 → secrets 文件。每次批处理开始前调用一次。
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        let key = match &self.llm_api_key {
            Some(key) => Some(key.clone()),
            None => read_secrets_key(Path::new(&self.secrets_file))?,
        };

        match key {
            Some(key) if key.trim().is_empty() => Err(ConfigError::BlankCredential {
                var_name: API_KEY_VAR.to_string(),
            }),
            Some(key) => Ok(key.trim().to_string()),
            None => Err(ConfigError::MissingCredential {
                var_name: API_KEY_VAR.to_string(),
                secrets_file: self.secrets_file.clone(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Secrets {
    #[serde(rename = "GEMINI_API_KEY")]
    gemini_api_key: Option<String>,
}

/// 从 secrets 文件读取凭据，文件不存在视为未配置
fn read_secrets_key(path: &Path) -> Result<Option<String>, ConfigError> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Ok(None);
    };

    let secrets: Secrets = toml::from_str(&content).map_err(|source| ConfigError::SecretsParseFailed {
        path: path.display().to_string(),
        source,
    })?;

    Ok(secrets.gemini_api_key)
}
