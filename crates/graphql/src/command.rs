use crate::Cli;
use crate::CommandResult;

/// A subcommand that consumes its parsed arguments and produces output
/// for `main` to print.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
