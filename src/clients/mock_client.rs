// MockQnaApi - 可编排的假接口，供测试和离线调试使用

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Map;

use super::QnaApi;
use crate::error::UpstreamError;
use crate::models::{PageOptions, QnaDetail, QnaKey, QnaSummary};

/// 预设的失败方式
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// 网络层失败
    Transport(String),
    /// 非成功状态码
    Status(u16, String),
}

impl MockFailure {
    fn into_error(self, endpoint: &str) -> UpstreamError {
        match self {
            MockFailure::Transport(msg) => UpstreamError::request_failed(
                endpoint,
                std::io::Error::new(std::io::ErrorKind::ConnectionReset, msg),
            ),
            MockFailure::Status(status, body) => UpstreamError::BadStatus {
                endpoint: endpoint.to_string(),
                status,
                body,
            },
        }
    }
}

pub struct MockQnaApi {
    list: Mutex<Result<Vec<QnaSummary>, MockFailure>>,
    details: Mutex<HashMap<QnaKey, Result<QnaDetail, MockFailure>>>,
    delays: Mutex<HashMap<QnaKey, Duration>>,
    search_calls: Mutex<Vec<(String, PageOptions)>>,
    item_calls: Mutex<Vec<QnaKey>>,
}

impl MockQnaApi {
    pub fn new() -> Self {
        Self {
            list: Mutex::new(Ok(Vec::new())),
            details: Mutex::new(HashMap::new()),
            delays: Mutex::new(HashMap::new()),
            search_calls: Mutex::new(Vec::new()),
            item_calls: Mutex::new(Vec::new()),
        }
    }

    /// 列表接口按顺序返回这些标题，faqNo 依次为 1, 2, 3...
    pub fn with_titles(self, titles: &[&str]) -> Self {
        let summaries = titles
            .iter()
            .enumerate()
            .map(|(i, title)| summary((i + 1).to_string(), title))
            .collect();
        *lock(&self.list) = Ok(summaries);
        self
    }

    /// 列表接口原样返回这些摘要
    pub fn with_summaries(self, summaries: Vec<QnaSummary>) -> Self {
        *lock(&self.list) = Ok(summaries);
        self
    }

    pub fn with_list_failure(self, failure: MockFailure) -> Self {
        *lock(&self.list) = Err(failure);
        self
    }

    /// 为 faqNo 设置详情
    pub fn with_detail(self, faq_no: &str, title: &str, body: &str) -> Self {
        let detail = QnaDetail {
            title: title.to_string(),
            body: body.to_string(),
            extra: Map::new(),
        };
        lock(&self.details).insert(key(faq_no), Ok(detail));
        self
    }

    pub fn with_detail_failure(self, faq_no: &str, failure: MockFailure) -> Self {
        lock(&self.details).insert(key(faq_no), Err(failure));
        self
    }

    /// 详情接口在返回前等待一段时间
    pub fn with_delay(self, faq_no: &str, delay: Duration) -> Self {
        lock(&self.delays).insert(key(faq_no), delay);
        self
    }

    pub fn set_list_failure(&self, failure: MockFailure) {
        *lock(&self.list) = Err(failure);
    }

    pub fn search_calls(&self) -> Vec<(String, PageOptions)> {
        lock(&self.search_calls).clone()
    }

    pub fn item_calls(&self) -> Vec<QnaKey> {
        lock(&self.item_calls).clone()
    }
}

impl Default for MockQnaApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QnaApi for MockQnaApi {
    async fn search_list(
        &self,
        keyword: &str,
        options: &PageOptions,
    ) -> Result<Vec<QnaSummary>, UpstreamError> {
        lock(&self.search_calls).push((keyword.to_string(), options.clone()));
        lock(&self.list).clone().map_err(|f| f.into_error("mock-list"))
    }

    async fn fetch_item(&self, key: &QnaKey) -> Result<QnaDetail, UpstreamError> {
        lock(&self.item_calls).push(key.clone());

        let delay = lock(&self.delays).get(key).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let outcome = lock(&self.details).get(key).cloned();
        match outcome {
            Some(Ok(detail)) => Ok(detail),
            Some(Err(failure)) => Err(failure.into_error("mock-item")),
            None => Err(MockFailure::Status(404, format!("no detail for {}", key))
                .into_error("mock-item")),
        }
    }
}

/// mock 使用的固定业务分类
pub const MOCK_DUTY_SECTION: &str = "mock";

fn key(faq_no: &str) -> QnaKey {
    QnaKey::new(faq_no, MOCK_DUTY_SECTION)
}

fn summary(faq_no: String, title: &str) -> QnaSummary {
    QnaSummary {
        key: QnaKey::new(faq_no, MOCK_DUTY_SECTION),
        title: title.to_string(),
        extra: Map::new(),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
