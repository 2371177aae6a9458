/// 问答搜索服务
///
/// 负责调用列表接口、按标题打分并保留最相关的几条
use std::sync::Arc;

use tracing::debug;

use crate::clients::QnaApi;
use crate::error::UpstreamError;
use crate::models::{Candidate, PageOptions};
use crate::services::similarity::Scorer;

/// 搜索阶段保留的候选数量
pub const CANDIDATE_LIMIT: usize = 3;

/// 搜索服务
pub struct SearchService {
    api: Arc<dyn QnaApi>,
    scorer: Arc<dyn Scorer>,
}

impl SearchService {
    pub fn new(api: Arc<dyn QnaApi>, scorer: Arc<dyn Scorer>) -> Self {
        Self { api, scorer }
    }

    /// 搜索并按标题相似度排序
    ///
    /// # 参数
    /// - `keyword`: 关键词
    /// - `options`: 分页与过滤参数
    ///
    /// # 返回
    /// 返回 (接口返回总条数, 相似度最高的至多 `CANDIDATE_LIMIT` 条候选)
    pub async fn search(
        &self,
        keyword: &str,
        options: &PageOptions,
    ) -> Result<(usize, Vec<Candidate>), UpstreamError> {
        let summaries = self.api.search_list(keyword, options).await?;
        let total = summaries.len();

        let scored = summaries
            .into_iter()
            .map(|summary| {
                let similarity = self.scorer.score(keyword, &summary.title, None);
                debug!("标题打分: {} → {:.4}", summary.title, similarity);
                Candidate {
                    summary,
                    similarity,
                }
            })
            .collect();

        Ok((total, top_candidates(scored, CANDIDATE_LIMIT)))
    }
}

/// 按相似度降序排列并截断；相同分数保持原顺序
pub fn top_candidates(mut candidates: Vec<Candidate>, limit: usize) -> Vec<Candidate> {
    // sort_by 是稳定排序
    candidates.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    candidates.truncate(limit);
    candidates
}
