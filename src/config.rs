use crate::error::{AppError, AppResult};
use crate::search::ze::DEFAULT_ENDPOINT;
use serde::Deserialize;
use std::path::Path;

/// 程序配置文件
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 是否启用 ZE 题库
    pub ze_enabled: bool,
    /// ZE 题库接口地址
    pub ze_api_url: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ze_enabled: true,
            ze_api_url: DEFAULT_ENDPOINT.to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从环境变量加载配置，未设置的字段使用默认值
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let default = Self::default();
        Ok(Self {
            ze_enabled: parse_bool_var(&lookup, "ZE_ENABLED", default.ze_enabled)?,
            ze_api_url: lookup("ZE_API_URL").unwrap_or(default.ze_api_url),
            verbose_logging: parse_bool_var(&lookup, "VERBOSE_LOGGING", default.verbose_logging)?,
        })
    }

    /// 从 TOML 文件加载配置，缺省字段使用默认值
    pub async fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| AppError::FileReadFailed {
                path: path.display().to_string(),
                source,
            })?;

        toml::from_str(&content).map_err(|source| AppError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    /// 从 TOML 字符串解析配置
    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|source| AppError::TomlParseFailed {
            path: String::new(),
            source,
        })
    }
}

fn parse_bool_var(
    lookup: &impl Fn(&str) -> Option<String>,
    var_name: &str,
    default: bool,
) -> AppResult<bool> {
    match lookup(var_name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| AppError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: "bool".to_string(),
            }),
    }
}
