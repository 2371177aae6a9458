use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 问答记录的标识（查询详情时使用）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QnaKey {
    #[serde(rename = "faqNo", deserialize_with = "deserialize_faq_no")]
    pub faq_no: String,
    #[serde(rename = "dutySctnNm", default)]
    pub duty_sctn_nm: String,
}

impl QnaKey {
    pub fn new(faq_no: impl Into<String>, duty_sctn_nm: impl Into<String>) -> Self {
        Self {
            faq_no: faq_no.into(),
            duty_sctn_nm: duty_sctn_nm.into(),
        }
    }
}

impl std::fmt::Display for QnaKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.duty_sctn_nm, self.faq_no)
    }
}

/// 列表接口返回的摘要记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QnaSummary {
    #[serde(flatten)]
    pub key: QnaKey,

    #[serde(rename = "qnaTitl", default, deserialize_with = "null_as_empty")]
    pub title: String,

    /// 其余字段原样透传
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 按标题打分后的候选记录
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    #[serde(flatten)]
    pub summary: QnaSummary,
    pub similarity: f64,
}

impl Candidate {
    pub fn key(&self) -> &QnaKey {
        &self.summary.key
    }

    pub fn title(&self) -> &str {
        &self.summary.title
    }
}

/// 详情接口返回的记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QnaDetail {
    #[serde(rename = "qnaTitl", default, deserialize_with = "null_as_empty")]
    pub title: String,

    /// 回答正文
    #[serde(rename = "ansCntnCl", default, deserialize_with = "null_as_empty")]
    pub body: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 详情查询结果：要么拿到详情，要么记录失败原因
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DetailOutcome {
    Found { result: QnaDetail },
    Failed { error: String },
}

/// 候选记录 + 详情（或失败原因），按标题+正文重新打分
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecord {
    pub candidate: Candidate,
    #[serde(flatten)]
    pub outcome: DetailOutcome,
    pub similarity: f64,
}

impl EnrichedRecord {
    pub fn found(candidate: Candidate, detail: QnaDetail, similarity: f64) -> Self {
        Self {
            candidate,
            outcome: DetailOutcome::Found { result: detail },
            similarity,
        }
    }

    /// 查询失败的记录，分数固定为 0
    pub fn failed(candidate: Candidate, error: impl Into<String>) -> Self {
        Self {
            candidate,
            outcome: DetailOutcome::Failed {
                error: error.into(),
            },
            similarity: 0.0,
        }
    }

    pub fn key(&self) -> &QnaKey {
        self.candidate.key()
    }

    pub fn detail(&self) -> Option<&QnaDetail> {
        match &self.outcome {
            DetailOutcome::Found { result } => Some(result),
            DetailOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            DetailOutcome::Found { .. } => None,
            DetailOutcome::Failed { error } => Some(error),
        }
    }
}

impl std::fmt::Display for EnrichedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.outcome {
            DetailOutcome::Found { result } => {
                let title = crate::utils::logging::truncate_text(&result.title, 60);
                write!(f, "{} {} [相似度: {:.4}]", self.key(), title, self.similarity)
            }
            DetailOutcome::Failed { error } => {
                write!(f, "{} [查询失败: {}]", self.key(), error)
            }
        }
    }
}

// 接口对空文本有时返回 null
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// faqNo 可能是字符串也可能是数字
fn deserialize_faq_no<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct FaqNoVisitor;

    impl<'de> Visitor<'de> for FaqNoVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer faqNo")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(FaqNoVisitor)
}
