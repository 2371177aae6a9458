//! 详情补全服务 - 业务能力层
//!
//! 对每个候选并发查询详情，等全部结束后再汇总。
//! 单条失败只记录在对应记录里，不影响其他条目。

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::clients::QnaApi;
use crate::models::{Candidate, EnrichedRecord};
use crate::services::similarity::Scorer;

/// 详情补全服务
pub struct EnrichService {
    api: Arc<dyn QnaApi>,
    scorer: Arc<dyn Scorer>,
}

impl EnrichService {
    pub fn new(api: Arc<dyn QnaApi>, scorer: Arc<dyn Scorer>) -> Self {
        Self { api, scorer }
    }

    /// 并发查询全部候选的详情，并按标题+正文重新打分
    ///
    /// # 参数
    /// - `keyword`: 搜索阶段使用的关键词
    /// - `candidates`: 搜索阶段保留的候选
    ///
    /// # 返回
    /// 与输入等长的记录列表，按相似度降序
    pub async fn enrich(&self, keyword: &str, candidates: &[Candidate]) -> Vec<EnrichedRecord> {
        let lookups = candidates
            .iter()
            .map(|candidate| self.enrich_one(keyword, candidate));

        let mut records = join_all(lookups).await;
        records.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        records
    }

    async fn enrich_one(&self, keyword: &str, candidate: &Candidate) -> EnrichedRecord {
        match self.api.fetch_item(candidate.key()).await {
            Ok(detail) => {
                let similarity = self
                    .scorer
                    .score(keyword, &detail.title, Some(&detail.body));
                debug!("详情打分: {} → {:.4}", candidate.key(), similarity);
                EnrichedRecord::found(candidate.clone(), detail, similarity)
            }
            Err(e) => {
                warn!("⚠️ 详情查询失败 {}: {}", candidate.key(), e);
                EnrichedRecord::failed(candidate.clone(), e.to_string())
            }
        }
    }
}
