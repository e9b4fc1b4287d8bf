/// JSON edge documents.
///
/// Two document shapes are accepted by [`parse_edge_list`]:
///
/// - **Columns** — `{"from": [1, 2], "to": [2, 1]}`. `A` and `B` are accepted
///   as aliases for `from` and `to`.
/// - **Pairs** — `{"edges": [[1, 2], [2, 1]]}`.
///
/// [`to_json_string`] always writes the columns shape.
use std::fmt;

use serde::Deserialize;

use crate::edges::{EdgeList, EdgeListError, Vertex};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced while parsing an edge document.
#[derive(Debug)]
pub enum DocumentError {
    /// The input is not valid JSON, or a field has the wrong JSON type.
    Json {
        /// 1-based line of the error.
        line: usize,
        /// 1-based column of the error.
        column: usize,
        /// The underlying parser message.
        detail: String,
    },
    /// The document names neither shape completely.
    MissingField {
        /// The field that was expected.
        field: &'static str,
    },
    /// The document mixes `edges` with `from`/`to`.
    ConflictingShapes,
    /// The columns have different lengths.
    Shape(EdgeListError),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json {
                line,
                column,
                detail,
            } => write!(f, "line {line}, column {column}: {detail}"),
            Self::MissingField { field } => write!(f, "missing field `{field}`"),
            Self::ConflictingShapes => {
                f.write_str("document mixes `edges` with `from`/`to`; use one shape")
            }
            Self::Shape(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Shape(e) => Some(e),
            Self::Json { .. } | Self::MissingField { .. } | Self::ConflictingShapes => None,
        }
    }
}

impl From<EdgeListError> for DocumentError {
    fn from(e: EdgeListError) -> Self {
        Self::Shape(e)
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json {
            line: e.line(),
            column: e.column(),
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default, alias = "A")]
    from: Option<Vec<Vertex>>,
    #[serde(default, alias = "B")]
    to: Option<Vec<Vertex>>,
    #[serde(default)]
    edges: Option<Vec<(Vertex, Vertex)>>,
}

/// Parses a JSON edge document in either accepted shape.
///
/// # Errors
///
/// - [`DocumentError::Json`] — malformed JSON or non-integer labels.
/// - [`DocumentError::MissingField`] — neither shape is complete.
/// - [`DocumentError::ConflictingShapes`] — both shapes are present.
/// - [`DocumentError::Shape`] — `from` and `to` differ in length.
pub fn parse_edge_list(input: &str) -> Result<EdgeList, DocumentError> {
    let raw: RawDocument = serde_json::from_str(input)?;

    match (raw.from, raw.to, raw.edges) {
        (None, None, Some(pairs)) => Ok(EdgeList::from_pairs(pairs)),
        (Some(from), Some(to), None) => Ok(EdgeList::new(from, to)?),
        (Some(_), _, Some(_)) | (_, Some(_), Some(_)) => Err(DocumentError::ConflictingShapes),
        (Some(_), None, None) => Err(DocumentError::MissingField { field: "to" }),
        (None, Some(_), None) => Err(DocumentError::MissingField { field: "from" }),
        (None, None, None) => Err(DocumentError::MissingField { field: "edges" }),
    }
}

/// Serializes `edges` in the columns shape.
///
/// # Errors
///
/// Propagates any `serde_json` serialization failure.
pub fn to_json_string(edges: &EdgeList, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(edges)
    } else {
        serde_json::to_string(edges)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
