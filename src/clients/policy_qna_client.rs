/// 民愿政策问答 API 客户端
///
/// 封装列表接口和详情接口的 HTTP 调用
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::QnaApi;
use crate::config::Config;
use crate::error::{ConfigError, UpstreamError};
use crate::models::{PageOptions, QnaDetail, QnaKey, QnaSummary};

/// 列表接口响应
#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(rename = "resultList", default)]
    result_list: Option<Vec<QnaSummary>>,
}

/// 详情接口响应
#[derive(Debug, Deserialize)]
struct ItemResponse {
    #[serde(rename = "resultData", default)]
    result_data: Option<QnaDetail>,
}

/// 问答 API 客户端
pub struct PolicyQnaClient {
    client: reqwest::Client,
    service_key: String,
    list_endpoint: String,
    item_endpoint: String,
}

impl PolicyQnaClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(ConfigError::client_build_failed)?;

        Ok(Self {
            client,
            service_key: config.service_key.clone(),
            list_endpoint: config.list_endpoint.clone(),
            item_endpoint: config.item_endpoint.clone(),
        })
    }

    /// 发送 GET 请求并解析 JSON
    ///
    /// 非 2xx 状态码时带回状态码和响应体
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, UpstreamError> {
        let response = self
            .client
            .get(endpoint)
            .query(params)
            .send()
            .await
            .map_err(|e| UpstreamError::request_failed(endpoint, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::request_failed(endpoint, e))?;

        if !status.is_success() {
            return Err(UpstreamError::BadStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| UpstreamError::json_parse_failed(endpoint, e))
    }
}

#[async_trait]
impl QnaApi for PolicyQnaClient {
    async fn search_list(
        &self,
        keyword: &str,
        options: &PageOptions,
    ) -> Result<Vec<QnaSummary>, UpstreamError> {
        debug!("列表接口请求: keyword={}, options={:?}", keyword, options);

        let params = [
            ("serviceKey", self.service_key.clone()),
            ("firstIndex", options.first_index.to_string()),
            ("recordCountPerPage", options.record_count_per_page.to_string()),
            ("type", options.qna_type.to_string()),
            ("keyword", keyword.to_string()),
            ("searchType", options.search_type.to_string()),
            ("regFrom", options.reg_from.clone()),
            ("regTo", options.reg_to.clone()),
        ];

        let response: ListResponse = self.get_json(&self.list_endpoint, &params).await?;
        let summaries = response.result_list.unwrap_or_default();

        debug!("列表接口返回 {} 条", summaries.len());
        Ok(summaries)
    }

    async fn fetch_item(&self, key: &QnaKey) -> Result<QnaDetail, UpstreamError> {
        debug!("详情接口请求: {}", key);

        let params = [
            ("serviceKey", self.service_key.clone()),
            ("faqNo", key.faq_no.clone()),
            ("dutySctnNm", key.duty_sctn_nm.clone()),
        ];

        let response: ItemResponse = self.get_json(&self.item_endpoint, &params).await?;
        response.result_data.ok_or_else(|| UpstreamError::MissingField {
            endpoint: self.item_endpoint.clone(),
            field: "resultData".to_string(),
        })
    }
}
