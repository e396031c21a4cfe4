//! 题库搜索模块
//!
//! 每个题库一个客户端，统一实现 [`SearchProvider`]，调用方无需关心具体题库

use crate::error::SearchError;
use crate::models::{Answer, SearchRequest};
use async_trait::async_trait;

pub mod ze;

pub use ze::ZeClient;

/// 题库搜索能力
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// 题库名称
    fn name(&self) -> &str;

    /// 是否启用
    fn is_enabled(&self) -> bool;

    /// 搜索答案
    ///
    /// 未启用时直接返回空答案，不发起网络请求；
    /// 出错时调用方可用 `unwrap_or_default()` 得到空答案
    async fn search_answer(&self, req: &SearchRequest) -> Result<Answer, SearchError>;
}
