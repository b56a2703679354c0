use serde_json::Value;
use std::borrow::Cow;
use thiserror::Error;

/// Ordered sequence of real numbers describing an entity in feature space
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Parse a raw JSON value into a vector
    ///
    /// Only arrays whose every element is a JSON number are accepted.
    /// Booleans, strings, nulls and nested arrays are rejected.
    pub fn parse(raw: Option<&Value>) -> Result<Self, VectorRejection> {
        let items = match raw {
            None | Some(Value::Null) => return Err(VectorRejection::Missing),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(VectorRejection::NotAnArray),
        };

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.as_f64()
                    .filter(|value| value.is_finite())
                    .ok_or(VectorRejection::NonNumeric { index })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// View this vector at `target` length
    ///
    /// Shorter vectors are right-padded with zeros, longer ones lose their
    /// trailing elements. Borrows when the length already matches.
    pub fn reconciled(&self, target: usize) -> Cow<'_, [f64]> {
        match self.0.len() {
            len if len == target => Cow::Borrowed(&self.0),
            len if len > target => Cow::Borrowed(&self.0[..target]),
            _ => {
                let mut padded = Vec::with_capacity(target);
                padded.extend_from_slice(&self.0);
                padded.resize(target, 0.0);
                Cow::Owned(padded)
            }
        }
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// Why a candidate's vector was excluded from scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorRejection {
    #[error("interestVector is missing")]
    Missing,

    #[error("interestVector is not an array")]
    NotAnArray,

    #[error("interestVector element {index} is not a number")]
    NonNumeric { index: usize },
}

/// Outcome of the typed parse step for one candidate's vector
#[derive(Debug, Clone, PartialEq)]
pub enum CandidateVector {
    Valid(FeatureVector),
    Rejected(VectorRejection),
}

impl CandidateVector {
    pub fn parse(raw: Option<&Value>) -> Self {
        match FeatureVector::parse(raw) {
            Ok(vector) => Self::Valid(vector),
            Err(reason) => Self::Rejected(reason),
        }
    }

    pub fn valid(&self) -> Option<&FeatureVector> {
        match self {
            Self::Valid(vector) => Some(vector),
            Self::Rejected(_) => None,
        }
    }
}

impl From<FeatureVector> for CandidateVector {
    fn from(vector: FeatureVector) -> Self {
        Self::Valid(vector)
    }
}

/// Common length every vector in one request is reconciled to
///
/// Rejected candidates never reach scoring, so only valid vectors count.
pub fn target_length<'a, I>(current: &FeatureVector, candidates: I) -> usize
where
    I: IntoIterator<Item = &'a CandidateVector>,
{
    candidates
        .into_iter()
        .filter_map(CandidateVector::valid)
        .map(FeatureVector::len)
        .fold(current.len(), usize::max)
}
