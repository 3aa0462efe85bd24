mod check;
mod parse_args;
mod tokens;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use tokens::TokensCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Parse GraphQL files and report any syntax errors.
    Check(Box<CheckCmd>),

    /// Print the tokens (including comments) of a GraphQL file.
    Tokens(Box<TokensCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Tokens(cmd) => cmd.run(cli).await,
        }
    }
}
