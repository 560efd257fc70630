use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_loader::Fragment;
use libgraphql_loader::Loader;
use libgraphql_loader::merge::MergeTypeDefsConfig;
use std::collections::HashSet;
use std::error::Error;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct MergeCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Only keep types that are reachable from a root operation type.",
        long,
    )]
    root_reachable_only: bool,

    #[arg(
        help="Namespace every file under a synthetic root type: the content \
             of each file becomes the body of `type <ROOT> { ... }`.",
        long,
        value_name="ROOT",
    )]
    wrap: Option<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be merged.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for MergeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<Box<dyn Error>> = vec![];

        let graphql_file_exts = normalize_file_exts(&self.graphql_file_exts);
        let file_paths = find_graphql_files(
            &self.file_or_dir_paths,
            &graphql_file_exts,
            &mut errors,
        );
        log::debug!("Found {} GraphQL files to be merged.", file_paths.len());

        let mut fragments = vec![];
        for file_path in &file_paths {
            match Fragment::from_file(file_path) {
                Ok(fragment) => fragments.push(fragment),
                Err(e) => errors.push(Box::new(e)),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors reading GraphQL files: {errors:#?}",
                output_utils::RED_X,
            ));
        }

        let mut loader = Loader::new();
        if let Some(root_type) = &self.wrap {
            loader.load([Loader::wrap(root_type, &fragments)]);
        } else {
            loader.load(fragments);
        }

        let config = MergeTypeDefsConfig {
            all: !self.root_reachable_only,
        };
        match loader.get_schema_with(&config) {
            Ok(schema) => {
                log::info!(
                    "Merged {} type definitions from {} files.",
                    loader.get_type_defs().len(),
                    file_paths.len(),
                );
                CommandResult::stdout(format_args!("{}", schema.type_defs().trim_end()))
            },

            Err(e) => CommandResult::stderr(format_args!(
                "{} Errors merging schema: {e}",
                output_utils::RED_X,
            )),
        }
    }
}

/// Ensures every extension has exactly one leading `.`.
fn normalize_file_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| format!(".{}", ext.trim_start_matches('.')))
        .collect()
}

/// Recursively collects files at or under each of `paths` whose extension is
/// in `graphql_file_exts`, sorted so that merge order is stable across runs.
fn find_graphql_files(
    paths: &[PathBuf],
    graphql_file_exts: &HashSet<String>,
    errors: &mut Vec<Box<dyn Error>>,
) -> Vec<PathBuf> {
    log::debug!("Scanning {} input paths...", paths.len());
    let mut file_paths = vec![];
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            match entry {
                Ok(entry) => {
                    let entry_path = entry.path();
                    if !entry.file_type().is_file() {
                        log::trace!("Skipping non-file: {entry_path:#?}.");
                        continue;
                    }

                    if has_graphql_ext(entry_path, graphql_file_exts) {
                        log::trace!("Found GraphQL file at {entry_path:#?}.");
                        match std::fs::canonicalize(entry_path) {
                            Ok(canonical_path) => file_paths.push(canonical_path),
                            Err(e) => errors.push(Box::new(e)),
                        }
                    }
                },

                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    errors.push(Box::new(e));
                },
            }
        }
    }

    // If the user specifies a single file path as an argument, presume the
    // user explicitly wants that file merged -- even if its file extension
    // doesn't match one of the `--graphql-file-exts`.
    if file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_arg_path) = paths.first()
        && first_arg_path.is_file() {
        log::warn!(
            "Proceeding to merge {first_arg_path:#?} even though it doesn't \
            match any of the --graphql-file-exts ({}).",
            graphql_file_exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        file_paths.push(first_arg_path.to_path_buf());
    }

    file_paths.sort();
    file_paths.dedup();
    file_paths
}

fn has_graphql_ext(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| graphql_file_exts.contains(&format!(".{}", ext.to_string_lossy())))
        .unwrap_or(false)
}
