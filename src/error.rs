use thiserror::Error;

/// 应用程序错误类型
///
/// 只有配置错误和格式错误会中止整个流程，
/// 单条记录的生成错误在编排层被就地转换为结果文本。
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误（凭据缺失等）
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// 上传文件无法解析
    #[error("format error: {0}")]
    Format(#[from] FormatError),
    /// 导出表格失败
    #[error("export error: {0}")]
    Export(#[from] ExportError),
    /// 文件读写错误
    #[error("I/O error ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量和 secrets 文件中都没有凭据
    #[error("{var_name} not found. Please add it to the environment or to {secrets_file}")]
    MissingCredential {
        var_name: String,
        secrets_file: String,
    },
    /// 凭据存在但为空白
    #[error("{var_name} is set but empty")]
    BlankCredential { var_name: String },
    /// secrets 文件存在但无法解析
    #[error("failed to parse secrets file {path}: {source}")]
    SecretsParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 表格格式错误
#[derive(Debug, Error)]
pub enum FormatError {
    /// 字节流不是合法的 xlsx
    #[error("file is not a readable xlsx workbook: {0}")]
    Unreadable(#[from] calamine::XlsxError),
    /// 工作簿里没有任何工作表
    #[error("workbook contains no worksheet")]
    NoWorksheet,
    /// 工作表没有表头行
    #[error("worksheet has no header row")]
    EmptySheet,
}

/// 单次生成调用的错误
#[derive(Debug, Error)]
pub enum GenerationError {
    /// 构建请求失败
    #[error("failed to build request: {0}")]
    RequestBuild(#[source] async_openai::error::OpenAIError),
    /// API 调用失败（超时、配额、响应格式错误等）
    #[error("API call failed (model: {model}): {source}")]
    ApiCallFailed {
        model: String,
        #[source]
        source: async_openai::error::OpenAIError,
    },
    /// 返回内容为空
    #[error("model {model} returned no text")]
    EmptyContent { model: String },
}

/// 导出错误
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("xlsx encoder failed: {0}")]
    Encoder(#[from] rust_xlsxwriter::XlsxError),
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读写错误
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    /// 是否为配置错误
    pub fn is_config(&self) -> bool {
        matches!(self, AppError::Config(_))
    }

    /// 是否为格式错误
    pub fn is_format(&self) -> bool {
        matches!(self, AppError::Format(_))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
