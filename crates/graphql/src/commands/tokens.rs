use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_syntax::Source;
use graphql_syntax::token::GraphQLToken;
use graphql_syntax::token::GraphQLTokenKind;
use graphql_syntax::token_source::StrGraphQLTokenSource;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct TokensCmd {
    #[arg(
        help="Omit comment tokens.",
        long,
    )]
    skip_comments: bool,

    #[arg(
        help="Path to the GraphQL file to tokenize.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

/// Renders a token as `line:column  Kind "value"`.
fn format_token(out: &mut String, token: &GraphQLToken) -> std::fmt::Result {
    let position = format!("{}:{}", token.line, token.column);
    match &token.value {
        Some(value) => writeln!(out, "{position:<10} {} {value:?}", token.kind),
        None => writeln!(out, "{position:<10} {}", token.kind),
    }
}

#[inherent::inherent]
impl RunnableCommand for TokensCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let body = match tokio::fs::read_to_string(&self.file_path).await {
            Ok(body) => body,
            Err(e) => {
                return CommandResult::stderr(format_args!(
                    "{} Failed to read {}: {e}",
                    output_utils::RED_X,
                    self.file_path.display(),
                ));
            },
        };
        let source = Source::with_name(body, self.file_path.display().to_string());

        let mut out = String::new();
        let mut num_tokens = 0;
        for result in StrGraphQLTokenSource::new(source) {
            let token = match result {
                Ok(token) => token,
                Err(err) => {
                    return CommandResult::stderr(format_args!(
                        "{out}{}",
                        err.format_detailed(),
                    ));
                },
            };
            if self.skip_comments && token.kind == GraphQLTokenKind::Comment {
                continue;
            }
            num_tokens += 1;
            if let Err(e) = format_token(&mut out, &token) {
                return CommandResult::stderr(format_args!("{e}"));
            }
        }
        log::debug!("Printed {num_tokens} tokens.");

        CommandResult::stdout(format_args!("{}", out.trim_end()))
    }
}
