//! 问答检索流程 - 流程层
//!
//! 核心职责：按顺序编排三个阶段，并通过会话状态在阶段之间传递数据
//!
//! 流程顺序：
//! 1. search → 按标题打分，保留前 3 条候选
//! 2. enrich → 并发查询详情，按标题+正文重新打分
//! 3. select_best → 取相似度最高的一条
//!
//! 每个阶段都要求前一个阶段已经写入会话状态，
//! 否则返回前置条件错误且不修改状态。

use std::sync::Arc;

use tracing::{error, info};

use crate::clients::QnaApi;
use crate::error::{AppResult, PreconditionError};
use crate::models::{Candidate, EnrichedRecord, PageOptions};
use crate::services::{select_best, EnrichService, Scorer, SearchService};
use crate::utils::logging::{log_enrich_complete, log_final_result, log_search_complete};
use crate::workflow::session::SessionState;

/// 问答检索流程
///
/// - 不持有网络资源之外的任何状态，状态都在 `SessionState` 里
/// - 多个 `QnaFlow` 可以共享同一个会话
pub struct QnaFlow {
    search_service: SearchService,
    enrich_service: EnrichService,
    session: Arc<SessionState>,
}

impl QnaFlow {
    /// 创建新的流程
    pub fn new(api: Arc<dyn QnaApi>, scorer: Arc<dyn Scorer>, session: Arc<SessionState>) -> Self {
        Self {
            search_service: SearchService::new(api.clone(), scorer.clone()),
            enrich_service: EnrichService::new(api, scorer),
            session,
        }
    }

    pub fn session(&self) -> &Arc<SessionState> {
        &self.session
    }

    /// 第一阶段：搜索
    ///
    /// 成功后整体替换会话中的关键词和候选，并清空上一轮的详情列表；
    /// 失败时会话保持不变
    pub async fn search(&self, keyword: &str, options: &PageOptions) -> AppResult<Vec<Candidate>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(PreconditionError::EmptyKeyword.into());
        }
        options.validate()?;

        info!("🔍 正在搜索: {}", keyword);

        let (total, candidates) = self
            .search_service
            .search(keyword, options)
            .await
            .map_err(|e| {
                error!("❌ 搜索失败: {}", e);
                e
            })?;

        log_search_complete(total, &candidates);
        self.session.replace_candidates(keyword, candidates.clone());

        Ok(candidates)
    }

    /// 第二阶段：查询详情
    ///
    /// 单条失败不会导致整体失败；成功后整体替换会话中的详情列表
    pub async fn enrich(&self) -> AppResult<Vec<EnrichedRecord>> {
        let (keyword, candidates) = match self.session.search_snapshot() {
            Some((keyword, candidates)) if !candidates.is_empty() => (keyword, candidates),
            _ => return Err(PreconditionError::NoCandidates.into()),
        };

        info!("📄 正在查询 {} 条候选的详情...", candidates.len());

        let records = self.enrich_service.enrich(&keyword, &candidates).await;

        log_enrich_complete(&records);
        self.session.replace_enriched(records.clone());

        Ok(records)
    }

    /// 第三阶段：取相似度最高的一条（只读）
    pub fn select_best(&self) -> AppResult<EnrichedRecord> {
        let records = self.session.enriched().unwrap_or_default();
        let best = select_best(&records)
            .cloned()
            .ok_or(PreconditionError::NoEnrichedRecords)?;

        log_final_result(&best);
        Ok(best)
    }

    /// 依次执行三个阶段
    pub async fn run(&self, keyword: &str, options: &PageOptions) -> AppResult<EnrichedRecord> {
        self.search(keyword, options).await?;
        self.enrich().await?;
        self.select_best()
    }
}
