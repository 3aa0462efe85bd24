use smallvec::SmallVec;

/// The kind of an error note (determines how the note is rendered).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphQLErrorNoteKind {
    /// General context or explanation about the error.
    ///
    /// Rendered as `= note: ...` in CLI output.
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...` in CLI output.
    Help,
}

/// An error note providing additional context about an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,

    /// Optional byte offset of a related location (e.g. where an
    /// unterminated string was opened).
    pub position: Option<usize>,
}

impl GraphQLErrorNote {
    /// Creates a general note without a position.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            position: None,
        }
    }

    /// Creates a general note pointing at a related position.
    pub fn general_at(message: impl Into<String>, position: usize) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::General,
            message: message.into(),
            position: Some(position),
        }
    }

    /// Creates a help note without a position.
    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: GraphQLErrorNoteKind::Help,
            message: message.into(),
            position: None,
        }
    }
}

/// Type alias for error notes.
///
/// Uses SmallVec since most errors have 0-2 notes, avoiding heap
/// allocation in the common case.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
