//! 相似度计算 - 业务能力层
//!
//! 关键词作为一篇文档，待比较文本作为另一篇，在这两篇文档组成的语料上计算
//! 关键词各个词项对第二篇文档的 TF-IDF 权重并求和。
//!
//! 分词方式（`Normalizer`）和打分方式（`Scorer`）都可以替换。

use std::collections::HashMap;
use std::sync::Arc;

use regex::Regex;

use crate::error::ConfigError;

/// 文本归一化：把文本切成有序的词项序列
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> Vec<String>;
}

/// 相似度打分
pub trait Scorer: Send + Sync {
    /// # 参数
    /// - `keyword`: 关键词
    /// - `primary`: 主文本（标题）
    /// - `secondary`: 附加文本（正文），空字符串等同于不传
    ///
    /// # 返回
    /// 非负数，越大越相关
    fn score(&self, keyword: &str, primary: &str, secondary: Option<&str>) -> f64;
}

const WORD_PATTERN: &str = r"[\p{L}\p{N}_]+";

/// 按 Unicode 字母/数字连续片段切分，并转小写
pub struct WordNormalizer {
    re: Regex,
}

impl WordNormalizer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            re: Regex::new(WORD_PATTERN)?,
        })
    }
}

impl Normalizer for WordNormalizer {
    fn normalize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.re
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// 在 `WordNormalizer` 的基础上，把非 ASCII 片段（韩文、中文等）展开成重叠的二元字组
///
/// 韩文没有空格分隔的复合词（如 "근로자내일배움카드"）用整词匹配几乎不会命中，
/// 二元字组可以在没有形态素分析器的情况下得到部分匹配。
pub struct BigramNormalizer {
    words: WordNormalizer,
}

impl BigramNormalizer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            words: WordNormalizer::new()?,
        })
    }
}

impl Normalizer for BigramNormalizer {
    fn normalize(&self, text: &str) -> Vec<String> {
        let mut terms = Vec::new();
        for word in self.words.normalize(text) {
            let chars: Vec<char> = word.chars().collect();
            if word.is_ascii() || chars.len() < 2 {
                terms.push(word);
                continue;
            }
            terms.extend(chars.windows(2).map(|pair| pair.iter().collect::<String>()));
        }
        terms
    }
}

/// 按名称创建分词器（word / bigram）
pub fn normalizer_from_name(name: &str) -> Result<Arc<dyn Normalizer>, ConfigError> {
    match name.trim().to_lowercase().as_str() {
        "word" => Ok(Arc::new(WordNormalizer::new()?)),
        "bigram" => Ok(Arc::new(BigramNormalizer::new()?)),
        other => Err(ConfigError::UnknownNormalizer(other.to_string())),
    }
}

/// 两篇文档语料上的 TF-IDF 打分
pub struct TfIdfScorer {
    normalizer: Arc<dyn Normalizer>,
}

impl TfIdfScorer {
    pub fn new(normalizer: Arc<dyn Normalizer>) -> Self {
        Self { normalizer }
    }
}

impl Scorer for TfIdfScorer {
    fn score(&self, keyword: &str, primary: &str, secondary: Option<&str>) -> f64 {
        let keyword_terms = self.normalizer.normalize(keyword);
        if keyword_terms.is_empty() {
            return 0.0;
        }

        let text = match secondary {
            Some(extra) if !extra.is_empty() => format!("{} {}", primary, extra),
            _ => primary.to_string(),
        };
        let text_terms = self.normalizer.normalize(&text);

        let keyword_counts = term_counts(&keyword_terms);
        let text_counts = term_counts(&text_terms);
        let corpus = [&keyword_counts, &text_counts];

        // 重复的关键词词项各自计一次
        keyword_terms
            .iter()
            .map(|term| {
                let tf = text_counts.get(term.as_str()).copied().unwrap_or(0);
                if tf == 0 {
                    return 0.0;
                }
                let doc_freq = document_frequency(term, &corpus);
                tf as f64 * idf(doc_freq, corpus.len())
            })
            .sum()
    }
}

fn term_counts(terms: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for term in terms {
        *counts.entry(term.as_str()).or_insert(0) += 1;
    }
    counts
}

/// 包含该词项的文档数
fn document_frequency(term: &str, corpus: &[&HashMap<&str, usize>]) -> usize {
    corpus.iter().filter(|doc| doc.contains_key(term)).count()
}

/// 对数平滑的逆文档频率：1 + ln(N / (1 + df))
fn idf(doc_freq: usize, corpus_size: usize) -> f64 {
    1.0 + (corpus_size as f64 / (1.0 + doc_freq as f64)).ln()
}
