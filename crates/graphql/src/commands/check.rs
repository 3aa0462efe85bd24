use crate::commands::parse_args::ParseArgs;
use crate::commands::parse_args::ParseTarget;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use graphql_syntax::GraphQLError;
use graphql_syntax::ParseOptions;
use graphql_syntax::Source;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        default_value="document",
        help="What each file is expected to contain.",
        long="as",
        value_enum,
    )]
    target: ParseTarget,

    #[arg(
        help="Print each error on a single line.",
        long,
    )]
    oneline: bool,

    #[command(flatten)]
    parse_args: ParseArgs,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files to check.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// The outcome of checking a single file.
enum FileOutcome {
    Parsed { definitions: usize },
    SyntaxError(Box<GraphQLError>),
    Unreadable(String),
}

impl CheckCmd {
    /// Finds every GraphQL file at or under the input paths.
    ///
    /// Returns the files found, the number of non-file entries skipped, and
    /// any errors hit while walking.
    fn collect_files(&self) -> (Vec<PathBuf>, usize, Vec<String>) {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut errors = vec![];
        let mut num_skipped = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            num_skipped += 1;
                            continue;
                        }
                        log::trace!("Found file at {path:#?}.");
                        if let Some(ext) = path.extension()
                            && graphql_file_exts.contains(&*ext.to_string_lossy())
                        {
                            file_paths.push(path.to_path_buf());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.to_string());
                    },
                }
            }
        }

        // A single explicit file is checked regardless of its extension.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file()
        {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it doesn't \
                match any of the --graphql-file-exts ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.clone());
        }

        (file_paths, num_skipped, errors)
    }
}

fn check_file(path: &Path, target: ParseTarget, options: ParseOptions) -> FileOutcome {
    let body = match std::fs::read_to_string(path) {
        Ok(body) => body,
        Err(e) => return FileOutcome::Unreadable(format!("{}: {e}", path.display())),
    };
    let source = Source::with_name(body, path.display().to_string());
    let result = match target {
        ParseTarget::Document => {
            graphql_syntax::parse(source, options).map(|doc| doc.definitions.len())
        },
        ParseTarget::Value => graphql_syntax::parse_value(source, options).map(|_| 1),
        ParseTarget::Type => graphql_syntax::parse_type(source, options).map(|_| 1),
    };
    match result {
        Ok(definitions) => FileOutcome::Parsed { definitions },
        Err(err) => FileOutcome::SyntaxError(Box::new(err)),
    }
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let (file_paths, num_skipped, mut errors) = self.collect_files();
        log::debug!("Found {} GraphQL files to check.", file_paths.len());

        let options = self.parse_args.to_options();
        let handles: Vec<_> = file_paths
            .iter()
            .cloned()
            .map(|path| {
                let target = self.target;
                tokio::task::spawn_blocking(move || check_file(&path, target, options))
            })
            .collect();

        let mut num_definitions = 0;
        for (path, handle) in file_paths.iter().zip(handles) {
            match handle.await {
                Ok(FileOutcome::Parsed { definitions }) => {
                    log::debug!("Parsed {definitions} definitions from {path:#?}.");
                    num_definitions += definitions;
                },
                Ok(FileOutcome::SyntaxError(err)) => {
                    errors.push(
                        if self.oneline {
                            err.format_oneline()
                        } else {
                            err.format_detailed()
                        },
                    );
                },
                Ok(FileOutcome::Unreadable(message)) => errors.push(message),
                Err(join_error) => {
                    errors.push(format!("{}: {join_error}", path.display()));
                },
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{}\n{} Found {} errors in {} files.",
                errors.join("\n"),
                output_utils::RED_X,
                errors.len(),
                file_paths.len(),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL parsed successfully:\n",
                "  * Checked {} files.\n",
                "  * Skipped {} non-file entries.\n",
                "  * Parsed {} definitions.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped,
            num_definitions,
        ))
    }
}
