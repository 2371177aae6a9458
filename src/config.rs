use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 公共数据门户的服务密钥（未编码形式）
    pub service_key: String,
    /// 问答列表接口地址
    pub list_endpoint: String,
    /// 问答详情接口地址
    pub item_endpoint: String,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 分词方式：word / bigram
    pub normalizer: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 列表接口默认每页条数
    pub default_page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_key: String::new(),
            list_endpoint: "http://apis.data.go.kr/1140100/CivilPolicyQnaService/PolicyQnaList"
                .to_string(),
            item_endpoint: "http://apis.data.go.kr/1140100/CivilPolicyQnaService/PolicyQnaItem"
                .to_string(),
            request_timeout_secs: 30,
            normalizer: "bigram".to_string(),
            verbose_logging: false,
            default_page_size: 10,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件读取配置，缺省字段使用默认值
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    /// `QNA_CONFIG_FILE` 指定的文件（如有），再叠加环境变量
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var("QNA_CONFIG_FILE") {
            Ok(path) => Self::from_toml_file(path)?,
            Err(_) => Self::default(),
        };
        Ok(base.with_env_overrides())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_key.trim().is_empty() {
            return Err(ConfigError::MissingServiceKey);
        }
        Ok(())
    }

    fn with_env_overrides(self) -> Self {
        Self {
            service_key: std::env::var("SERVICE_KEY").unwrap_or(self.service_key),
            list_endpoint: std::env::var("POLICY_QNA_LIST_URL").unwrap_or(self.list_endpoint),
            item_endpoint: std::env::var("POLICY_QNA_ITEM_URL").unwrap_or(self.item_endpoint),
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS")
                .unwrap_or(self.request_timeout_secs),
            normalizer: std::env::var("NORMALIZER").unwrap_or(self.normalizer),
            verbose_logging: env_parse("VERBOSE_LOGGING").unwrap_or(self.verbose_logging),
            default_page_size: env_parse("PAGE_SIZE").unwrap_or(self.default_page_size),
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_toml_with_defaults() {
        let config: Config = toml::from_str(
            r#"
            service_key = "abc"
            normalizer = "word"
            "#,
        )
        .unwrap();

        assert_eq!(config.service_key, "abc");
        assert_eq!(config.normalizer, "word");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.list_endpoint.ends_with("PolicyQnaList"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_service_key_is_rejected() {
        let config = Config::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingServiceKey)
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Config::from_toml_file("/nonexistent/qna.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/qna.toml"));
    }
}
