//! Cursor over the non-comment tokens of a [`GraphQLTokenSource`], with
//! bounded lookahead.

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLError;
use crate::IntoSource;
use crate::Source;
use std::collections::VecDeque;
use std::sync::Arc;

/// Cursor over the tokens of a [`Source`].
///
/// The lexer starts on a `Sof` token. [`advance()`](Self::advance) moves
/// to the next non-comment token; [`lookahead()`](Self::lookahead) and
/// [`lookahead_nth()`](Self::lookahead_nth) peek without moving. Once the
/// cursor reaches `Eof` it stays there.
///
/// Comments never reach the cursor. They are collected in source order
/// and available from [`comments()`](Self::comments).
///
/// # Internal Buffer Management
///
/// Peeked tokens are held in a [`VecDeque`]. Each token is pulled from the
/// token source once and handed out by `advance()` via `pop_front()`.
///
/// A `Lexer` is single-owner: every method that can pull from the token
/// source takes `&mut self`.
pub struct Lexer<TTokenSource: GraphQLTokenSource = StrGraphQLTokenSource> {
    source: Arc<Source>,
    token_source: TTokenSource,
    token: GraphQLToken,
    last_token: GraphQLToken,
    buffer: VecDeque<GraphQLToken>,
    comments: Vec<GraphQLToken>,
}

impl Lexer<StrGraphQLTokenSource> {
    /// Creates a lexer over `source`.
    pub fn new(source: impl IntoSource) -> Self {
        let token_source = StrGraphQLTokenSource::new(source);
        let source = Arc::clone(token_source.source());
        Self::from_token_source(source, token_source)
    }
}

impl<TTokenSource: GraphQLTokenSource> Lexer<TTokenSource> {
    /// Creates a lexer over tokens produced by `token_source`.
    ///
    /// `source` is the text those tokens' offsets refer to; it is attached
    /// to every [`Loc`](crate::Loc) and error.
    pub fn from_token_source(
        source: Arc<Source>,
        token_source: TTokenSource,
    ) -> Self {
        Self {
            source,
            token_source,
            token: GraphQLToken::sof(),
            last_token: GraphQLToken::sof(),
            buffer: VecDeque::new(),
            comments: vec![],
        }
    }

    pub fn source(&self) -> &Arc<Source> {
        &self.source
    }

    /// The current token.
    pub fn token(&self) -> &GraphQLToken {
        &self.token
    }

    /// The token the cursor was on before the most recent
    /// [`advance()`](Self::advance).
    pub fn last_token(&self) -> &GraphQLToken {
        &self.last_token
    }

    /// Comments seen so far, in source order.
    ///
    /// Comments are collected as tokens are pulled, so this covers at
    /// least everything up to the furthest token peeked.
    pub fn comments(&self) -> &[GraphQLToken] {
        &self.comments
    }

    /// Moves to the next non-comment token and returns it.
    pub fn advance(&mut self) -> Result<&GraphQLToken, GraphQLError> {
        if self.token.kind == GraphQLTokenKind::Eof {
            self.last_token = self.token.clone();
            return Ok(&self.token);
        }
        self.ensure_buffer_has(1)?;
        let next = match self.buffer.pop_front() {
            Some(token) => token,
            None => self.synthesized_eof(),
        };
        self.last_token = std::mem::replace(&mut self.token, next);
        Ok(&self.token)
    }

    /// Peeks at the token after the current one.
    pub fn lookahead(&mut self) -> Result<&GraphQLToken, GraphQLError> {
        self.lookahead_nth(0)
    }

    /// Peeks `n + 1` tokens past the current one (`lookahead_nth(0)` is
    /// [`lookahead()`](Self::lookahead)).
    ///
    /// Returns `Eof` for any position at or past the end of input.
    pub fn lookahead_nth(
        &mut self,
        n: usize,
    ) -> Result<&GraphQLToken, GraphQLError> {
        if self.token.kind == GraphQLTokenKind::Eof {
            return Ok(&self.token);
        }
        self.ensure_buffer_has(n + 1)?;
        Ok(self.buffer
            .get(n)
            .or_else(|| self.buffer.back())
            .unwrap_or(&self.token))
    }

    /// Pulls from the token source until `count` tokens are buffered or
    /// `Eof` has been buffered.
    fn ensure_buffer_has(&mut self, count: usize) -> Result<(), GraphQLError> {
        while self.buffer.len() < count {
            if self.buffer.back().is_some_and(|t| t.kind == GraphQLTokenKind::Eof) {
                break;
            }
            match self.token_source.next() {
                Some(Ok(token)) if token.kind == GraphQLTokenKind::Comment => {
                    self.comments.push(token);
                },
                Some(Ok(token)) => self.buffer.push_back(token),
                Some(Err(err)) => return Err(err),
                None => {
                    let eof = self.synthesized_eof();
                    self.buffer.push_back(eof);
                },
            }
        }
        Ok(())
    }

    /// An `Eof` token at the end of the body, for token sources that end
    /// without yielding one.
    fn synthesized_eof(&self) -> GraphQLToken {
        let end = self.source.body().len();
        let location = self.source.location_of(end);
        GraphQLToken::new(
            GraphQLTokenKind::Eof,
            end,
            end,
            location.line,
            location.column,
        )
    }
}
