use thiserror::Error;

/// 题库搜索错误
///
/// 三种错误分别对应：网络问题（可由调用方重试）、响应不符合约定、题库自身返回失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// 网络请求失败（连接失败、超时等）
    #[error("请求失败")]
    Request,
    /// 响应体不是预期的 JSON 结构
    #[error("解析JSON失败")]
    ParseJson,
    /// 题库返回失败，原样携带题库的 message
    #[error("{0}")]
    Provider(String),
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 临时性网络问题
    Transient,
    /// 协议/约定被破坏
    Protocol,
    /// 题库侧原因导致没有答案
    Provider,
}

impl SearchError {
    /// 获取错误类别
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::Request => ErrorKind::Transient,
            SearchError::ParseJson => ErrorKind::Protocol,
            SearchError::Provider(_) => ErrorKind::Provider,
        }
    }

    /// 调用方是否可以重试
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Transient
    }

    /// 题库返回的原始消息（仅 Provider 错误有）
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            SearchError::Provider(msg) => Some(msg),
            _ => None,
        }
    }
}

// 底层错误只用于分类，不向调用方透出
impl From<reqwest::Error> for SearchError {
    fn from(_: reqwest::Error) -> Self {
        SearchError::Request
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(_: serde_json::Error) -> Self {
        SearchError::ParseJson
    }
}

/// 应用程序错误类型（配置、文件等外围功能）
#[derive(Debug, Error)]
pub enum AppError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    FileReadFailed {
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
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 搜索错误
    #[error("搜索错误: {0}")]
    Search(#[from] SearchError),
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
