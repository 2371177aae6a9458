pub mod page_options;
pub mod qna;

pub use page_options::PageOptions;
pub use qna::{Candidate, DetailOutcome, EnrichedRecord, QnaDetail, QnaKey, QnaSummary};
