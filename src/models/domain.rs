use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::core::vector::{CandidateVector, FeatureVector};

/// Opaque entity identifier, kept in the form the caller sent it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(id) => write!(f, "{}", id),
            EntityId::Text(id) => f.write_str(id),
        }
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId::Text(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        EntityId::Text(id)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        EntityId::Number(id)
    }
}

/// The entity a match is being searched for
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub vector: FeatureVector,
    pub attributes: BTreeSet<String>,
}

impl Entity {
    pub fn new<I, S>(id: impl Into<EntityId>, vector: Vec<f64>, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            vector: FeatureVector::new(vector),
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }
}

/// One entity compared against the current entity
///
/// The vector has already been through the typed parse step. Candidates
/// holding `CandidateVector::Rejected` are passed to the matcher like any
/// other and skipped there without being scored.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: Option<EntityId>,
    pub vector: CandidateVector,
    pub attributes: BTreeSet<String>,
}

impl Candidate {
    pub fn new<I, S>(id: impl Into<EntityId>, vector: Vec<f64>, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: Some(id.into()),
            vector: CandidateVector::Valid(FeatureVector::new(vector)),
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Best candidate found for a request
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub matched_id: Option<EntityId>,
    pub similarity: f64,
    pub shared_attributes: BTreeSet<String>,
}

/// Non-error outcomes of a match
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Matched(MatchResult),
    /// The candidate list was empty
    NoCandidates,
    /// Candidates were supplied but none had a usable vector
    NoMatch,
}

impl MatchOutcome {
    pub fn matched(&self) -> Option<&MatchResult> {
        match self {
            MatchOutcome::Matched(result) => Some(result),
            _ => None,
        }
    }
}
