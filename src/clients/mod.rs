pub mod mock_client;
pub mod policy_qna_client;

pub use mock_client::{MockFailure, MockQnaApi};
pub use policy_qna_client::PolicyQnaClient;

use async_trait::async_trait;

use crate::error::UpstreamError;
use crate::models::{PageOptions, QnaDetail, QnaKey, QnaSummary};

/// 远程问答接口
///
/// 列表检索 + 按标识查询详情；实现方不做重试
#[async_trait]
pub trait QnaApi: Send + Sync {
    /// 按关键词检索摘要列表，保持接口返回的顺序
    async fn search_list(
        &self,
        keyword: &str,
        options: &PageOptions,
    ) -> Result<Vec<QnaSummary>, UpstreamError>;

    /// 查询单条详情
    async fn fetch_item(&self, key: &QnaKey) -> Result<QnaDetail, UpstreamError>;
}
