use crate::core::{
    overlap::shared_attributes,
    similarity::cosine_similarity,
    vector::{target_length, CandidateVector},
};
use crate::error::MatchError;
use crate::models::{Candidate, Entity, MatchOutcome, MatchResult};

/// Find the candidate whose vector is closest to the current entity's
///
/// # Pipeline
/// 1. Reconcile every valid vector to the longest length in the request
/// 2. Score each valid candidate with cosine similarity, in input order
/// 3. Keep the first candidate with the strictly highest score
///
/// Candidates whose vector was rejected during parsing are skipped.
///
/// # Returns
/// `MatchOutcome::NoCandidates` for an empty slice, `MatchOutcome::NoMatch`
/// when nothing was scorable, otherwise the winner with its shared labels.
pub fn find_best_match(current: &Entity, candidates: &[Candidate]) -> Result<MatchOutcome, MatchError> {
    if candidates.is_empty() {
        return Ok(MatchOutcome::NoCandidates);
    }

    let target = target_length(&current.vector, candidates.iter().map(|c| &c.vector));
    let current_vector = current.vector.reconciled(target);

    let mut best_score = f64::NEG_INFINITY;
    let mut best_match: Option<MatchResult> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let vector = match &candidate.vector {
            CandidateVector::Valid(vector) => vector,
            CandidateVector::Rejected(reason) => {
                tracing::debug!(index, candidate = ?candidate.id, %reason, "Skipping candidate");
                continue;
            }
        };

        let score = cosine_similarity(&current_vector, &vector.reconciled(target));
        if !score.is_finite() {
            return Err(MatchError::Computation(format!(
                "non-finite similarity for candidate at index {}",
                index
            )));
        }

        // Strict comparison: ties keep the earliest candidate
        if score > best_score {
            best_score = score;
            best_match = Some(MatchResult {
                matched_id: candidate.id.clone(),
                similarity: score,
                shared_attributes: shared_attributes(&current.attributes, &candidate.attributes),
            });
        }
    }

    Ok(best_match.map_or(MatchOutcome::NoMatch, MatchOutcome::Matched))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vector::VectorRejection;
    use crate::models::EntityId;

    fn rejected(id: &str) -> Candidate {
        Candidate {
            id: Some(id.into()),
            vector: CandidateVector::Rejected(VectorRejection::NonNumeric { index: 0 }),
            attributes: Default::default(),
        }
    }

    #[test]
    fn test_basic_match() {
        let current = Entity::new("u1", vec![1.0, 0.0, 0.0], ["chess", "music"]);
        let candidates = vec![
            Candidate::new("u2", vec![1.0, 0.0, 0.0], ["chess"]),
            Candidate::new("u3", vec![0.0, 1.0, 0.0], ["music"]),
        ];

        let outcome = find_best_match(&current, &candidates).unwrap();
        let result = outcome.matched().expect("expected a match");

        assert_eq!(result.matched_id, Some(EntityId::from("u2")));
        assert_eq!(result.similarity, 1.0);
        assert_eq!(result.shared_attributes.iter().collect::<Vec<_>>(), vec!["chess"]);
    }

    #[test]
    fn test_no_candidates() {
        let current = Entity::new("u1", vec![1.0, 2.0, 3.0], ["a"]);
        let outcome = find_best_match(&current, &[]).unwrap();
        assert_eq!(outcome, MatchOutcome::NoCandidates);
    }

    #[test]
    fn test_only_rejected_is_no_match() {
        let current = Entity::new("u1", vec![1.0, 0.0], ["a"]);
        let outcome = find_best_match(&current, &[rejected("u2"), rejected("u3")]).unwrap();
        assert_eq!(outcome, MatchOutcome::NoMatch);
    }

    #[test]
    fn test_rejected_candidate_is_skipped() {
        let current = Entity::new("u1", vec![1.0, 0.0], Vec::<String>::new());
        let candidates = vec![
            rejected("bad"),
            Candidate::new("good", vec![0.0, 1.0], Vec::<String>::new()),
        ];

        let outcome = find_best_match(&current, &candidates).unwrap();
        assert_eq!(outcome.matched().unwrap().matched_id, Some("good".into()));
    }

    #[test]
    fn test_ties_keep_first_candidate() {
        let current = Entity::new("u1", vec![1.0, 1.0], Vec::<String>::new());
        let candidates = vec![
            Candidate::new("first", vec![2.0, 2.0], Vec::<String>::new()),
            Candidate::new("second", vec![1.0, 1.0], ["x"]),
        ];

        let outcome = find_best_match(&current, &candidates).unwrap();
        assert_eq!(outcome.matched().unwrap().matched_id, Some("first".into()));
    }

    #[test]
    fn test_negative_similarity_still_matches() {
        let current = Entity::new("u1", vec![1.0, 0.0], Vec::<String>::new());
        let candidates = vec![Candidate::new("opposite", vec![-1.0, 0.0], Vec::<String>::new())];

        let outcome = find_best_match(&current, &candidates).unwrap();
        let result = outcome.matched().unwrap();
        assert_eq!(result.similarity, -1.0);
    }

    #[test]
    fn test_overlap_reflects_final_winner() {
        let current = Entity::new("u1", vec![1.0, 0.0], ["chess", "music"]);
        let candidates = vec![
            Candidate::new("early", vec![1.0, 1.0], ["chess"]),
            Candidate::new("late", vec![1.0, 0.0], ["music"]),
        ];

        let result = find_best_match(&current, &candidates).unwrap();
        let result = result.matched().unwrap();
        assert_eq!(result.matched_id, Some("late".into()));
        assert!(result.shared_attributes.contains("music"));
        assert!(!result.shared_attributes.contains("chess"));
    }

    #[test]
    fn test_tiny_magnitudes_keep_direction() {
        let current = Entity::new("u1", vec![1e-200, 0.0], Vec::<String>::new());
        let candidates = vec![
            Candidate::new("orth", vec![0.0, 1.0], Vec::<String>::new()),
            Candidate::new("same", vec![1e-200, 0.0], Vec::<String>::new()),
        ];

        let outcome = find_best_match(&current, &candidates).unwrap();
        let result = outcome.matched().unwrap();
        assert_eq!(result.matched_id, Some("same".into()));
        assert_eq!(result.similarity, 1.0);
    }

    #[test]
    fn test_huge_magnitudes_do_not_overflow() {
        let current = Entity::new("u1", vec![1e200, 1e200], Vec::<String>::new());
        let candidates = vec![Candidate::new("u2", vec![1e200, 1e200], Vec::<String>::new())];

        let outcome = find_best_match(&current, &candidates).unwrap();
        let result = outcome.matched().unwrap();
        assert!((result.similarity - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite_input_is_computation_error() {
        // Entities built in code can bypass the parse step's finiteness check
        let current = Entity::new("u1", vec![f64::NAN, 1.0], Vec::<String>::new());
        let candidates = vec![Candidate::new("u2", vec![1.0, 1.0], Vec::<String>::new())];

        let err = find_best_match(&current, &candidates).unwrap_err();
        assert!(matches!(err, MatchError::Computation(_)));
    }
}
