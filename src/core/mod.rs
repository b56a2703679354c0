// Core algorithm exports
pub mod matcher;
pub mod overlap;
pub mod similarity;
pub mod vector;

pub use matcher::find_best_match;
pub use overlap::shared_attributes;
pub use similarity::cosine_similarity;
pub use vector::{target_length, CandidateVector, FeatureVector, VectorRejection};
