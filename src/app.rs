use std::sync::Arc;

use tracing::info;

use crate::clients::{PolicyQnaClient, QnaApi};
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{EnrichedRecord, PageOptions};
use crate::services::{normalizer_from_name, TfIdfScorer};
use crate::utils::logging::log_startup;
use crate::workflow::{QnaFlow, SessionState};

/// 应用主结构
pub struct App {
    config: Config,
    flow: QnaFlow,
}

impl App {
    /// 初始化应用：校验配置、创建接口客户端和流程
    pub fn initialize(config: Config) -> AppResult<Self> {
        config.validate()?;
        let api: Arc<dyn QnaApi> = Arc::new(PolicyQnaClient::new(&config)?);
        Self::with_api(config, api)
    }

    /// 使用指定的接口实现初始化（测试或离线调试）
    pub fn with_api(config: Config, api: Arc<dyn QnaApi>) -> AppResult<Self> {
        let normalizer = normalizer_from_name(&config.normalizer)?;
        let scorer = Arc::new(TfIdfScorer::new(normalizer));
        let flow = QnaFlow::new(api, scorer, Arc::new(SessionState::new()));

        info!(
            "✓ 初始化完成 (分词: {}, 超时: {}s)",
            config.normalizer, config.request_timeout_secs
        );

        Ok(Self { config, flow })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn flow(&self) -> &QnaFlow {
        &self.flow
    }

    /// 运行完整流程
    pub async fn run(&self, keyword: &str, options: &PageOptions) -> AppResult<EnrichedRecord> {
        log_startup(keyword);
        self.flow.run(keyword, options).await
    }
}
