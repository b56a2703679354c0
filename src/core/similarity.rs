/// Cosine similarity between two vectors of equal length
///
/// Scoring formula:
/// similarity = (a . b) / (||a|| * ||b||)
///
/// Each vector is divided by its largest absolute component before the sums
/// are taken, so very large or very small inputs neither overflow nor
/// underflow to a zero norm.
///
/// # Returns
/// Similarity in [-1.0, 1.0], or 0.0 when either vector is all zeros.
/// Non-finite components yield a non-finite value; callers decide what to
/// do with it.
#[inline]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vectors must be reconciled first");

    let scale_a = max_abs(a);
    let scale_b = max_abs(b);
    if scale_a == 0.0 || scale_b == 0.0 {
        return 0.0;
    }

    let (dot, norm_a_sq, norm_b_sq) = a
        .iter()
        .zip(b)
        .map(|(x, y)| (x / scale_a, y / scale_b))
        .fold((0.0_f64, 0.0_f64, 0.0_f64), |(dot, na, nb), (x, y)| {
            (dot + x * y, na + x * x, nb + y * y)
        });

    let similarity = dot / (norm_a_sq.sqrt() * norm_b_sq.sqrt());
    if similarity.is_finite() {
        // 1.0000000000000002 and friends
        similarity.clamp(-1.0, 1.0)
    } else {
        similarity
    }
}

#[inline]
fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |max, x| max.max(x.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_direction() {
        let score = cosine_similarity(&[1.0, 0.0, 0.0], &[1.0, 0.0, 0.0]);
        assert_eq!(score, 1.0);

        let score = cosine_similarity(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_orthogonal_and_opposite() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]), -1.0);
    }

    #[test]
    fn test_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 1.0], &[0.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // [1,1,0] vs [1,0,0] -> 1 / sqrt(2)
        let score = cosine_similarity(&[1.0, 1.0, 0.0], &[1.0, 0.0, 0.0]);
        assert!((score - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_extreme_magnitudes() {
        let huge = cosine_similarity(&[f64::MAX, f64::MAX], &[f64::MAX, f64::MAX]);
        assert!((huge - 1.0).abs() < 1e-12, "got {}", huge);

        let mixed = cosine_similarity(&[1e200, 1e200], &[1.0, 1.0]);
        assert!((mixed - 1.0).abs() < 1e-12, "got {}", mixed);

        assert_eq!(cosine_similarity(&[1e-200, 0.0], &[1e-200, 0.0]), 1.0);
        assert_eq!(cosine_similarity(&[1e-200, 0.0], &[0.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[5e-324, 0.0], &[-1e300, 0.0]), -1.0);
    }

    #[test]
    fn test_non_finite_component_is_not_finite() {
        assert!(!cosine_similarity(&[f64::NAN, 1.0], &[1.0, 1.0]).is_finite());
    }
}
