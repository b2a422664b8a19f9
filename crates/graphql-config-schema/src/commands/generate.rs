use crate::output_utils;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libconfigschema::json_schema;
use libconfigschema::markdown;
use libconfigschema::TypeGraph;
use libconfigschema::TypeGraphBuildError;
use libconfigschema::TypeGraphBuilder;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        help="One or more GraphQL SDL sources: file paths, directories \
             (searched recursively), glob patterns or inline SDL text.",
        long="schema",
        num_args=1..,
        required=true,
    )]
    schema_paths: Vec<String>,

    #[arg(
        help="Where to write the generated JSON Schema document.",
        long,
    )]
    json: PathBuf,

    #[arg(
        default_value="Query",
        help="The object type whose fields become the top-level properties.",
        long="rootType",
    )]
    root_type: String,

    #[arg(
        help="When set, also compile the JSON Schema into typings at this \
             path using --typings-compiler.",
        long,
    )]
    typings: Option<PathBuf>,

    #[arg(
        default_value="json2ts",
        help="Command invoked as `<cmd> --input <json> --output <typings>`.",
        long,
    )]
    typings_compiler: String,

    #[arg(
        help="Directory to write `<TypeName>.generated.md` files into for \
             every `@md` type. Created if absent.",
        long,
        visible_alias="md",
    )]
    markdown: Option<PathBuf>,

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
}

/// What a successful run produced, for the closing report.
#[derive(Debug)]
struct GenerateSummary {
    num_definitions: usize,
    num_markdown_files: usize,
    num_schema_sources: usize,
    typings_written: bool,
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self) -> CommandResult {
        match self.generate().await {
            Ok(summary) => CommandResult::stdout(format_args!(
                concat!(
                    "{} Generated JSON Schema for `{}`:\n",
                    "  * Loaded {} schema sources.\n",
                    "  * Wrote {} definitions to {}.\n",
                    "  * Wrote {} Markdown files.\n",
                    "  * Typings: {}.",
                ),
                output_utils::GREEN_CHECK,
                self.root_type,
                summary.num_schema_sources,
                summary.num_definitions,
                self.json.display(),
                summary.num_markdown_files,
                match (&self.typings, summary.typings_written) {
                    (Some(path), true) => path.display().to_string(),
                    _ => "skipped".to_string(),
                },
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} Failed to generate the config schema: {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}

impl GenerateCmd {
    async fn generate(&self) -> anyhow::Result<GenerateSummary> {
        let graphql_file_exts = normalize_file_exts(&self.graphql_file_exts);
        let sources = discover_schema_sources(&self.schema_paths, &graphql_file_exts)?;
        log::debug!("Found {} GraphQL sources to be loaded.", sources.len());

        let graph = build_type_graph(&sources)
            .context("Failed to build the type graph")?;

        let compiled = json_schema::compile(&graph, self.root_type.as_str())
            .context("Failed to compile the JSON Schema")?;
        let mut json_text = compiled.to_json_string_pretty()
            .context("Failed to serialize the JSON Schema")?;
        json_text.push('\n');
        write_file(&self.json, json_text).await?;
        log::debug!("Wrote JSON Schema to {:#?}.", self.json);

        let typings_written =
            if let Some(typings_path) = &self.typings {
                run_typings_compiler(
                    self.typings_compiler.as_str(),
                    &self.json,
                    typings_path,
                ).await?;
                true
            } else {
                false
            };

        let num_markdown_files =
            if let Some(markdown_dir) = &self.markdown {
                write_markdown(&graph, markdown_dir).await?
            } else {
                0
            };

        Ok(GenerateSummary {
            num_definitions: compiled.definitions().len(),
            num_markdown_files,
            num_schema_sources: sources.len(),
            typings_written,
        })
    }
}

/// Lowercased extensions without a leading `.`, so `.GraphQL` and `graphql`
/// select the same files.
fn normalize_file_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

fn has_matching_ext(path: &Path, graphql_file_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| graphql_file_exts.contains(&ext))
}

/// A single unit of SDL to load into the type graph.
#[derive(Clone, Debug, PartialEq)]
enum SchemaSource {
    File(PathBuf),
    InlineSdl(String),
}

/// Expand each `--schema` argument into SDL sources.
///
/// Explicit file arguments are loaded regardless of their extension;
/// directories are walked (sorted by file name) and glob patterns expanded
/// for files matching `graphql_file_exts`. Arguments that are neither an
/// existing path nor a pattern but read like SDL are loaded as inline text.
fn discover_schema_sources(
    schema_args: &[String],
    graphql_file_exts: &HashSet<String>,
) -> anyhow::Result<Vec<SchemaSource>> {
    let mut sources = vec![];
    for schema_arg in schema_args {
        if schema_arg.starts_with("http://") || schema_arg.starts_with("https://") {
            anyhow::bail!(
                "Loading schemas from URLs is not supported (`{schema_arg}`). \
                Download the SDL and pass the file path instead."
            );
        }

        let path = Path::new(schema_arg);
        if path.is_file() {
            if !has_matching_ext(path, graphql_file_exts) {
                log::warn!(
                    "Loading {path:#?} even though it doesn't match any of the \
                    --graphql-file-exts.",
                );
            }
            sources.push(SchemaSource::File(path.to_path_buf()));
        } else if path.is_dir() {
            log::debug!("Scanning {path:#?} for GraphQL files...");
            for entry in WalkDir::new(path).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| {
                    format!("Failed to scan schema directory {path:#?}")
                })?;
                let entry_path = entry.path();
                if entry.file_type().is_file() && has_matching_ext(entry_path, graphql_file_exts) {
                    log::trace!("Found file at {entry_path:#?}.");
                    sources.push(SchemaSource::File(entry_path.to_path_buf()));
                } else {
                    log::trace!("Skipping {entry_path:#?}.");
                }
            }
        } else if looks_like_inline_sdl(schema_arg) {
            log::debug!("Loading `--schema` argument as inline SDL.");
            sources.push(SchemaSource::InlineSdl(schema_arg.to_string()));
        } else if is_glob_pattern(schema_arg) {
            log::debug!("Expanding glob pattern `{schema_arg}`...");
            let matches = glob::glob(schema_arg)
                .with_context(|| format!("Invalid glob pattern `{schema_arg}`"))?;
            let num_sources_before = sources.len();
            for entry in matches {
                let entry_path = entry.with_context(|| {
                    format!("Failed to expand glob pattern `{schema_arg}`")
                })?;
                if entry_path.is_file() && has_matching_ext(&entry_path, graphql_file_exts) {
                    log::trace!("Found file at {entry_path:#?}.");
                    sources.push(SchemaSource::File(entry_path));
                }
            }
            if sources.len() == num_sources_before {
                log::warn!("Glob pattern `{schema_arg}` matched no GraphQL files.");
            }
        } else {
            anyhow::bail!("Schema path {path:#?} does not exist");
        }
    }

    if sources.is_empty() {
        anyhow::bail!("No GraphQL schema files were found");
    }
    Ok(sources)
}

/// SDL always contains whitespace or a `{`; file paths and glob patterns
/// practically never do.
fn looks_like_inline_sdl(schema_arg: &str) -> bool {
    schema_arg.contains('{') || schema_arg.trim().contains(char::is_whitespace)
}

fn is_glob_pattern(schema_arg: &str) -> bool {
    schema_arg.contains(['*', '?', '['])
}

fn build_type_graph(
    sources: &[SchemaSource],
) -> Result<TypeGraph, TypeGraphBuildError> {
    let mut builder = TypeGraphBuilder::new();
    for source in sources {
        builder = match source {
            SchemaSource::File(file_path) => builder.load_file(file_path)?,
            SchemaSource::InlineSdl(sdl) => builder.load_str(None, sdl)?,
        };
    }
    builder.build()
}

async fn write_file(path: &Path, content: String) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty() {
        tokio::fs::create_dir_all(parent).await
            .with_context(|| format!("Failed to create directory {parent:#?}"))?;
    }
    tokio::fs::write(path, content).await
        .with_context(|| format!("Failed to write {path:#?}"))
}

async fn write_markdown(graph: &TypeGraph, markdown_dir: &Path) -> anyhow::Result<usize> {
    tokio::fs::create_dir_all(markdown_dir).await
        .with_context(|| format!("Failed to create directory {markdown_dir:#?}"))?;

    let fragments = markdown::render(graph);
    for fragment in &fragments {
        let file_path = markdown_dir.join(fragment.file_name.as_str());
        tokio::fs::write(&file_path, fragment.content.as_str()).await
            .with_context(|| format!("Failed to write {file_path:#?}"))?;
        log::debug!("Wrote {file_path:#?}.");
    }
    Ok(fragments.len())
}

async fn run_typings_compiler(
    typings_compiler: &str,
    json_path: &Path,
    typings_path: &Path,
) -> anyhow::Result<()> {
    log::debug!("Running `{typings_compiler}` to produce {typings_path:#?}...");
    let output = tokio::process::Command::new(typings_compiler)
        .arg("--input")
        .arg(json_path)
        .arg("--output")
        .arg(typings_path)
        .output()
        .await
        .with_context(|| format!("Failed to run typings compiler `{typings_compiler}`"))?;

    if !output.status.success() {
        anyhow::bail!(
            "Typings compiler `{typings_compiler}` exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim(),
        );
    }
    Ok(())
}
