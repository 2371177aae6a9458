//! 会话状态
//!
//! 三个阶段之间通过同一个会话对象传递数据。
//! 整个进程同一时间只有一份工作流状态。
//!
//! 并发约定：每次写入都是整体替换，多个调用方同时写入时以最后一次写入为准。
//! 锁只保证单次替换是完整的，不提供按调用方隔离。
//!
//! 新的搜索结果写入时会清空上一轮的详情列表，详情总是属于当前候选。

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{Candidate, EnrichedRecord};

#[derive(Debug, Default)]
struct SessionInner {
    active_keyword: Option<String>,
    candidates: Option<Vec<Candidate>>,
    enriched: Option<Vec<EnrichedRecord>>,
}

/// 工作流会话状态
#[derive(Debug, Default)]
pub struct SessionState {
    inner: RwLock<SessionInner>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前关键词（最近一次成功搜索）
    pub fn active_keyword(&self) -> Option<String> {
        self.read().active_keyword.clone()
    }

    /// 候选列表快照；从未成功搜索时为 None
    pub fn candidates(&self) -> Option<Vec<Candidate>> {
        self.read().candidates.clone()
    }

    /// 详情列表快照；当前候选尚未补全时为 None
    pub fn enriched(&self) -> Option<Vec<EnrichedRecord>> {
        self.read().enriched.clone()
    }

    /// 关键词和候选一起读取，保证两者来自同一次搜索
    pub fn search_snapshot(&self) -> Option<(String, Vec<Candidate>)> {
        let inner = self.read();
        match (&inner.active_keyword, &inner.candidates) {
            (Some(keyword), Some(candidates)) => Some((keyword.clone(), candidates.clone())),
            _ => None,
        }
    }

    /// 整体替换关键词和候选，并丢弃旧的详情列表
    pub fn replace_candidates(&self, keyword: impl Into<String>, candidates: Vec<Candidate>) {
        let mut inner = self.write();
        inner.active_keyword = Some(keyword.into());
        inner.candidates = Some(candidates);
        inner.enriched = None;
    }

    /// 整体替换详情列表
    pub fn replace_enriched(&self, records: Vec<EnrichedRecord>) {
        self.write().enriched = Some(records);
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
