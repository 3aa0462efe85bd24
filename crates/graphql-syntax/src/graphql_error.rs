use crate::GraphQLErrorKind;
use crate::GraphQLErrorNote;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLErrorNotes;
use crate::Loc;
use crate::Source;
use crate::SourceLocation;
use std::sync::Arc;

/// An error raised while lexing, parsing, or configuring a [`Source`].
///
/// Lexer and parser errors always carry the offending absolute byte
/// offset (`positions`) and the 1-indexed physical location computed from
/// it (`locations`). Errors built from AST nodes carry the nodes' [`Loc`]s
/// and derive their positions from them.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct GraphQLError {
    message: String,
    kind: GraphQLErrorKind,

    // Not named `source`: thiserror treats such a field as the error's
    // cause.
    graphql_source: Option<Arc<Source>>,
    positions: Vec<usize>,
    locations: Vec<SourceLocation>,
    nodes: Vec<Loc>,
    notes: GraphQLErrorNotes,
}

impl GraphQLError {
    /// Creates an error with no source or location information.
    pub fn new(message: impl Into<String>, kind: GraphQLErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
            graphql_source: None,
            positions: vec![],
            locations: vec![],
            nodes: vec![],
            notes: GraphQLErrorNotes::new(),
        }
    }

    /// Creates a syntax error at byte `position` of `source`.
    ///
    /// `description` is prefixed with `Syntax Error: `.
    pub fn syntax_error(
        source: &Arc<Source>,
        position: usize,
        description: impl AsRef<str>,
        kind: GraphQLErrorKind,
    ) -> Self {
        Self::new(
            format!("Syntax Error: {}", description.as_ref()),
            kind,
        ).with_source_position(source, position)
    }

    /// Creates the error raised when nesting exceeds `limit` levels.
    pub fn nesting_limit(
        source: &Arc<Source>,
        position: usize,
        limit: usize,
    ) -> Self {
        Self::new(
            format!("Document exceeds the maximum nesting depth of {limit}."),
            GraphQLErrorKind::NestingLimitExceeded { limit },
        ).with_source_position(source, position)
    }

    /// Creates a construction-time configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::new(message, GraphQLErrorKind::InvalidConfiguration)
    }

    /// Attaches the AST nodes this error refers to.
    ///
    /// If the error has no positions yet, they are taken from the start
    /// of each node's [`Loc`] and the source from the first node.
    pub fn with_nodes(mut self, nodes: impl IntoIterator<Item = Loc>) -> Self {
        self.nodes.extend(nodes);
        if self.positions.is_empty()
            && let Some(first) = self.nodes.first()
        {
            let source = Arc::clone(first.source());
            self.positions = self.nodes.iter().map(|loc| loc.start).collect();
            self.locations = self.positions
                .iter()
                .map(|position| source.location_of(*position))
                .collect();
            self.graphql_source = Some(source);
        }
        self
    }

    /// Appends a note.
    pub fn with_note(mut self, note: GraphQLErrorNote) -> Self {
        self.notes.push(note);
        self
    }

    /// Adds a general note without a position.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::general(message));
    }

    /// Adds a help note without a position.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::help(message));
    }

    fn with_source_position(
        mut self,
        source: &Arc<Source>,
        position: usize,
    ) -> Self {
        self.positions = vec![position];
        self.locations = vec![source.location_of(position)];
        self.graphql_source = Some(Arc::clone(source));
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &GraphQLErrorKind {
        &self.kind
    }

    /// The [`Source`] this error was raised against, if any.
    pub fn graphql_source(&self) -> Option<&Arc<Source>> {
        self.graphql_source.as_ref()
    }

    /// Absolute byte offsets into the source body.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Physical 1-indexed locations of each entry in
    /// [`positions()`](Self::positions), before any location offset.
    pub fn locations(&self) -> &[SourceLocation] {
        &self.locations
    }

    pub fn nodes(&self) -> &[Loc] {
        &self.nodes
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    pub fn is_syntax_error(&self) -> bool {
        self.kind.is_syntax_error()
    }

    /// Formats this error as a single-line summary.
    ///
    /// ```text
    /// schema.graphql:5:12: Syntax Error: Expected Name, found "}".
    /// ```
    ///
    /// Errors without a source render as the bare message.
    pub fn format_oneline(&self) -> String {
        match (&self.graphql_source, self.locations.first()) {
            (Some(source), Some(location)) => {
                let location = source.offset_location(*location);
                format!(
                    "{}:{}:{}: {}",
                    source.name(),
                    location.line,
                    location.column,
                    self.message,
                )
            },
            _ => self.message.clone(),
        }
    }

    /// Formats this error as a multi-line diagnostic.
    ///
    /// ```text
    /// error: Syntax Error: Expected Name, found "}".
    ///   --> schema.graphql:5:12
    ///    |
    ///  5 |   user(id: }
    ///    |            ^
    ///    = help: ...
    /// ```
    pub fn format_detailed(&self) -> String {
        let mut output = format!("error: {}\n", self.message);
        let Some(source) = &self.graphql_source else {
            self.push_notes(&mut output, None);
            return output;
        };

        for location in &self.locations {
            let display = source.offset_location(*location);
            output.push_str(&format!(
                "  --> {}:{}:{}\n",
                source.name(),
                display.line,
                display.column,
            ));
            if let Some(snippet) = format_snippet(source, *location, '^') {
                output.push_str(&snippet);
            }
        }
        self.push_notes(&mut output, Some(source));
        output
    }

    fn push_notes(&self, output: &mut String, source: Option<&Arc<Source>>) {
        for note in &self.notes {
            let prefix = match note.kind {
                GraphQLErrorNoteKind::General => "note",
                GraphQLErrorNoteKind::Help => "help",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));
            if let (Some(source), Some(position)) = (source, note.position)
                && let Some(snippet) = format_snippet(
                    source,
                    source.location_of(position),
                    '-',
                )
            {
                output.push_str(&snippet);
            }
        }
    }
}

fn format_snippet(
    source: &Source,
    location: SourceLocation,
    marker: char,
) -> Option<String> {
    let line_content = source.line_text(location.line)?;
    let display_line = source.offset_location(location).line;
    let width = display_line.to_string().len().max(2);

    let mut output = String::new();
    output.push_str(&format!("{:>width$} |\n", ""));
    output.push_str(&format!("{display_line:>width$} | {line_content}\n"));
    output.push_str(&format!(
        "{:>width$} | {:>padding$}{marker}\n",
        "",
        "",
        padding = location.column - 1,
    ));
    Some(output)
}
