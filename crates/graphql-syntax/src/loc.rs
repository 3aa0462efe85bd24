use crate::Source;
use crate::token::GraphQLToken;
use std::sync::Arc;

/// The source range an AST node was parsed from.
///
/// `start` is the start offset of the node's first token and `end` the end
/// offset of its last token (both absolute byte offsets, half-open).
#[derive(Clone)]
pub struct Loc {
    pub start: usize,
    pub end: usize,
    pub start_token: GraphQLToken,
    pub end_token: GraphQLToken,
    source: Arc<Source>,
}

impl Loc {
    pub fn new(
        start_token: GraphQLToken,
        end_token: GraphQLToken,
        source: Arc<Source>,
    ) -> Self {
        Self {
            start: start_token.start,
            end: end_token.end,
            start_token,
            end_token,
            source,
        }
    }

    pub fn source(&self) -> &Arc<Source> {
        &self.source
    }

    /// The exact source text this location covers.
    pub fn source_slice(&self) -> &str {
        self.source.body().get(self.start..self.end).unwrap_or("")
    }

    /// Returns `true` if `other` lies entirely within this range.
    pub fn contains(&self, other: &Loc) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl std::fmt::Debug for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Loc({}..{})", self.start, self.end)
    }
}

impl PartialEq for Loc {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && (Arc::ptr_eq(&self.source, &other.source)
                || self.source == other.source)
    }
}

impl Eq for Loc {}
