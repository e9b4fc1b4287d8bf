/// Validated directed edge list.
///
/// [`EdgeList`] pairs the `from` and `to` label sequences and guarantees at
/// construction time that they have the same length. Nothing else is checked
/// here: duplicate, zero, negative or out-of-range labels are all legal values
/// that [`crate::validator::is_single_cycle`] classifies.
///
/// Serde `Deserialize` re-runs the length check, so a mismatched document
/// cannot produce an [`EdgeList`].
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

use crate::validator::is_single_cycle;

/// Vertex label type used across the workspace.
pub type Vertex = i64;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced when constructing an [`EdgeList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeListError {
    /// `from` and `to` have different lengths.
    LengthMismatch {
        /// Number of source labels supplied.
        from_len: usize,
        /// Number of target labels supplied.
        to_len: usize,
    },
}

impl fmt::Display for EdgeListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { from_len, to_len } => write!(
                f,
                "edge list length mismatch: {from_len} source labels, {to_len} target labels"
            ),
        }
    }
}

impl std::error::Error for EdgeListError {}

// ---------------------------------------------------------------------------
// EdgeList
// ---------------------------------------------------------------------------

/// A directed graph given as edges `from[k] → to[k]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EdgeList {
    from: Vec<Vertex>,
    to: Vec<Vertex>,
}

impl EdgeList {
    /// Pairs `from` and `to` into an edge list.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeListError::LengthMismatch`] when the sequences differ in
    /// length.
    pub fn new(from: Vec<Vertex>, to: Vec<Vertex>) -> Result<Self, EdgeListError> {
        if from.len() != to.len() {
            return Err(EdgeListError::LengthMismatch {
                from_len: from.len(),
                to_len: to.len(),
            });
        }
        Ok(Self { from, to })
    }

    /// Builds an edge list from `(source, target)` pairs. Always well-formed.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let (from, to) = pairs.into_iter().unzip();
        Self { from, to }
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.from.len()
    }

    /// Returns `true` if there are no edges.
    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
    }

    /// Source labels in input order.
    pub fn sources(&self) -> &[Vertex] {
        &self.from
    }

    /// Target labels in input order.
    pub fn targets(&self) -> &[Vertex] {
        &self.to
    }

    /// Iterates over `(source, target)` pairs in input order.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.from.iter().copied().zip(self.to.iter().copied())
    }

    /// Returns `true` if the edges form exactly one cycle through every
    /// vertex they touch. See [`is_single_cycle`].
    pub fn is_single_cycle(&self) -> bool {
        is_single_cycle(&self.from, &self.to)
    }

    /// Splits the list back into its `(from, to)` sequences.
    pub fn into_parts(self) -> (Vec<Vertex>, Vec<Vertex>) {
        (self.from, self.to)
    }
}

impl FromIterator<(Vertex, Vertex)> for EdgeList {
    fn from_iter<I: IntoIterator<Item = (Vertex, Vertex)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Unchecked wire form; `A`/`B` are the array names of the classic problem
/// statement.
#[derive(Deserialize)]
struct RawEdgeList {
    #[serde(alias = "A")]
    from: Vec<Vertex>,
    #[serde(alias = "B")]
    to: Vec<Vertex>,
}

impl<'de> Deserialize<'de> for EdgeList {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = RawEdgeList::deserialize(d)?;
        Self::new(raw.from, raw.to).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn new_accepts_equal_lengths() {
        let edges = EdgeList::new(vec![1, 2], vec![2, 1]).expect("equal lengths");
        assert_eq!(edges.len(), 2);
        assert!(!edges.is_empty());
        assert_eq!(edges.sources(), &[1, 2]);
        assert_eq!(edges.targets(), &[2, 1]);
    }

    #[test]
    fn new_rejects_mismatched_lengths() {
        let err = EdgeList::new(vec![1, 2, 3], vec![2]).expect_err("mismatch");
        assert_eq!(
            err,
            EdgeListError::LengthMismatch {
                from_len: 3,
                to_len: 1
            }
        );
    }

    #[test]
    fn mismatch_message_names_both_lengths() {
        let msg = EdgeListError::LengthMismatch {
            from_len: 4,
            to_len: 7,
        }
        .to_string();
        assert!(msg.contains('4'), "message: {msg}");
        assert!(msg.contains('7'), "message: {msg}");
    }

    #[test]
    fn default_is_empty_and_not_a_cycle() {
        let edges = EdgeList::default();
        assert!(edges.is_empty());
        assert!(!edges.is_single_cycle());
    }

    #[test]
    fn pairs_preserve_input_order() {
        let edges = EdgeList::from_pairs([(3, 2), (1, 3), (2, 1)]);
        assert_eq!(edges.sources(), &[3, 1, 2]);
        assert_eq!(edges.targets(), &[2, 3, 1]);
        assert_eq!(edges.edges().collect::<Vec<_>>(), vec![(3, 2), (1, 3), (2, 1)]);
        assert!(edges.is_single_cycle());
    }

    #[test]
    fn collect_builds_an_edge_list() {
        let edges: EdgeList = (1..=5).map(|v| (v, v % 5 + 1)).collect();
        assert_eq!(edges.len(), 5);
        assert!(edges.is_single_cycle());
    }

    #[test]
    fn into_parts_returns_original_sequences() {
        let edges = EdgeList::new(vec![7], vec![7]).expect("valid");
        assert_eq!(edges.into_parts(), (vec![7], vec![7]));
    }

    #[test]
    fn deserialize_accepts_problem_statement_names() {
        let edges: EdgeList =
            serde_json::from_str(r#"{"A":[1,2,1],"B":[2,3,3]}"#).expect("parses");
        assert_eq!(edges.sources(), &[1, 2, 1]);
        assert!(!edges.is_single_cycle());
    }

    #[test]
    fn deserialize_rejects_mismatched_lengths() {
        let err = serde_json::from_str::<EdgeList>(r#"{"from":[1,2],"to":[2]}"#)
            .expect_err("length mismatch");
        assert!(err.to_string().contains("mismatch"), "error: {err}");
    }

    #[test]
    fn serialize_uses_from_and_to_keys() {
        let edges = EdgeList::from_pairs([(1, 2), (2, 1)]);
        let json = serde_json::to_string(&edges).expect("serializes");
        assert_eq!(json, r#"{"from":[1,2],"to":[2,1]}"#);
    }
}
