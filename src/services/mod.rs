pub mod enrich_service;
pub mod search_service;
pub mod selection;
pub mod similarity;

pub use enrich_service::EnrichService;
pub use search_service::{SearchService, CANDIDATE_LIMIT};
pub use selection::select_best;
pub use similarity::{
    normalizer_from_name, BigramNormalizer, Normalizer, Scorer, TfIdfScorer, WordNormalizer,
};
