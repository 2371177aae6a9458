/// 最终选择
///
/// 显式求最大值，不依赖输入已经排好序；分数相同取先出现的
use crate::models::EnrichedRecord;

pub fn select_best(records: &[EnrichedRecord]) -> Option<&EnrichedRecord> {
    records.iter().fold(None, |best, record| match best {
        Some(current) if record.similarity <= current.similarity => Some(current),
        _ => Some(record),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Candidate, QnaDetail, QnaKey, QnaSummary};
    use serde_json::Map;

    fn record(faq_no: &str, similarity: f64) -> EnrichedRecord {
        let candidate = Candidate {
            summary: QnaSummary {
                key: QnaKey::new(faq_no, "d"),
                title: format!("title {}", faq_no),
                extra: Map::new(),
            },
            similarity: 0.0,
        };
        let detail = QnaDetail {
            title: candidate.summary.title.clone(),
            body: String::new(),
            extra: Map::new(),
        };
        EnrichedRecord::found(candidate, detail, similarity)
    }

    #[test]
    fn empty_input_selects_nothing() {
        assert!(select_best(&[]).is_none());
    }

    #[test]
    fn picks_maximum_even_when_unsorted() {
        let records = vec![record("1", 0.2), record("2", 0.9), record("3", 0.5)];
        let best = select_best(&records).unwrap();
        assert_eq!(best.key().faq_no, "2");
        assert!(records.iter().all(|r| best.similarity >= r.similarity));
    }

    #[test]
    fn tie_keeps_first_encountered() {
        let records = vec![record("1", 0.4), record("2", 0.7), record("3", 0.7)];
        assert_eq!(select_best(&records).unwrap().key().faq_no, "2");
    }

    #[test]
    fn failed_records_lose_to_any_positive_score() {
        let mut failed = record("1", 0.0);
        failed.outcome = crate::models::DetailOutcome::Failed {
            error: "timeout".to_string(),
        };
        let records = vec![failed, record("2", 0.01)];
        assert_eq!(select_best(&records).unwrap().key().faq_no, "2");
    }
}
