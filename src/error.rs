use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 远程接口调用错误
    #[error("上游接口错误: {0}")]
    Upstream(#[from] UpstreamError),
    /// 调用顺序或参数错误（客户端错误）
    #[error("调用错误: {0}")]
    Precondition(#[from] PreconditionError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// 是否属于调用方的使用错误（不应重试）
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::Precondition(_))
    }
}

/// 远程搜索 / 详情接口错误
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// 网络请求失败（连接、超时等）
    #[error("请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 接口返回非成功状态码
    #[error("接口返回错误状态 ({endpoint}): status={status}, body={body}")]
    BadStatus {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// 响应体无法解析
    #[error("响应解析失败 ({endpoint}): {source}")]
    JsonParseFailed {
        endpoint: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 响应缺少必要字段
    #[error("响应缺少字段 {field} ({endpoint})")]
    MissingField { endpoint: String, field: String },
}

impl UpstreamError {
    /// 上游返回的 HTTP 状态码（如果有）
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::BadStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 上游返回的响应体（如果有）
    pub fn body(&self) -> Option<&str> {
        match self {
            UpstreamError::BadStatus { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }
}

/// 前置条件错误
///
/// 阶段调用顺序不对，或参数本身不合法
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreconditionError {
    /// 关键词为空
    #[error("关键词不能为空")]
    EmptyKeyword,
    /// 日期范围不合法
    #[error("日期范围不合法: {field}='{value}' (格式 YYYYMMDD，且起始日期不能晚于结束日期)")]
    InvalidDateRange { field: String, value: String },
    /// 候选列表为空
    #[error("候选列表为空，请先调用搜索阶段")]
    NoCandidates,
    /// 详情列表为空
    #[error("详情列表为空，请先调用详情阶段")]
    NoEnrichedRecords,
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 缺少服务密钥
    #[error("未配置 SERVICE_KEY")]
    MissingServiceKey,
    /// 未知的分词器
    #[error("未知的分词器: {0} (可选: word, bigram)")]
    UnknownNormalizer(String),
    /// 分词正则编译失败
    #[error("分词正则编译失败: {0}")]
    InvalidPattern(#[from] regex::Error),
    /// HTTP 客户端创建失败
    #[error("HTTP客户端创建失败: {source}")]
    ClientBuildFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

// ========== 便捷构造函数 ==========

impl UpstreamError {
    /// 创建请求失败错误
    pub fn request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        UpstreamError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }

    /// 创建响应解析错误
    pub fn json_parse_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        UpstreamError::JsonParseFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }
}

impl ConfigError {
    /// 创建客户端构建错误
    pub fn client_build_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        ConfigError::ClientBuildFailed {
            source: Box::new(source),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precondition_is_client_error() {
        let err: AppError = PreconditionError::NoCandidates.into();
        assert!(err.is_client_error());

        let err: AppError = UpstreamError::BadStatus {
            endpoint: "list".to_string(),
            status: 500,
            body: "boom".to_string(),
        }
        .into();
        assert!(!err.is_client_error());
    }

    #[test]
    fn upstream_exposes_status_and_body() {
        let err = UpstreamError::BadStatus {
            endpoint: "list".to_string(),
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.body(), Some("unavailable"));

        let err = UpstreamError::request_failed(
            "list",
            std::io::Error::new(std::io::ErrorKind::TimedOut, "timeout"),
        );
        assert_eq!(err.status(), None);
        assert_eq!(err.body(), None);
    }

    #[test]
    fn client_build_failure_is_config_error() {
        let err: AppError = ConfigError::client_build_failed(std::io::Error::new(
            std::io::ErrorKind::Other,
            "tls backend unavailable",
        ))
        .into();

        assert!(matches!(
            err,
            AppError::Config(ConfigError::ClientBuildFailed { .. })
        ));
        assert!(!err.is_client_error());
        assert!(err.to_string().contains("tls backend unavailable"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
