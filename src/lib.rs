//! # Tiku Adapter
//!
//! 题库搜题适配器：调用第三方题库接口，并把响应归一化为统一的答案格式
//!
//! ## 模块结构
//!
//! - `models/` - 搜题请求 `SearchRequest`、题型 `QuestionType`、归一化答案 `Answer`
//! - `search/` - 题库能力 `SearchProvider` 及各题库客户端（目前为 `ZeClient`）
//! - `error` - 搜索错误分类 `SearchError`，以及配置等外围错误 `AppError`
//! - `config` - 配置加载（环境变量 / TOML）
//! - `utils/` - 日志工具
//!
//! ## 调用流程
//!
//! 构造 `SearchRequest` → `SearchProvider::search_answer` → 单次 HTTP 请求 →
//! 解析并归一化 → 返回 `Answer` 或分类后的 `SearchError`

pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, ErrorKind, SearchError};
pub use models::{Answer, QuestionType, SearchRequest};
pub use search::{SearchProvider, ZeClient};
