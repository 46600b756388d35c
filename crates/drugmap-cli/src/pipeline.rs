//! Stages of the `run` and `report` commands.
//!
//! The graph is built and serialized completely in memory before anything is
//! written. The output file is replaced through a sibling temporary file, so a
//! failed run never leaves a partial document behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, info_span, warn};

use drugmap_graph::{
    DEFAULT_MIN_NAME_LEN, ExtractOptions, JournalReport, build, extract_with_options,
    journal_drug_counts, top_journals,
};
use drugmap_ingest::{LoadWarning, SourceData, load_sources};
use drugmap_model::MentionGraph;

/// File name of the serialized graph.
pub const DEFAULT_OUTPUT_NAME: &str = "drug_mentions_graph.json";
/// Output directory used when none is given, relative to the resources.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Settings for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub resources_dir: PathBuf,
    pub output_path: PathBuf,
    pub min_name_len: usize,
    pub pretty: bool,
    /// Build and report without writing the document.
    pub dry_run: bool,
}

impl RunOptions {
    /// Options with the default output location under `resources_dir`.
    pub fn new(resources_dir: impl Into<PathBuf>) -> Self {
        let resources_dir = resources_dir.into();
        let output_path = resources_dir
            .join(DEFAULT_OUTPUT_DIR)
            .join(DEFAULT_OUTPUT_NAME);
        Self {
            resources_dir,
            output_path,
            min_name_len: DEFAULT_MIN_NAME_LEN,
            pretty: false,
            dry_run: false,
        }
    }
}

/// Everything a run produced.
#[derive(Debug)]
pub struct RunOutput {
    pub graph: MentionGraph,
    pub warnings: Vec<LoadWarning>,
    pub publications: usize,
    pub mentions: usize,
    /// Where the document was written; `None` on a dry run.
    pub written: Option<PathBuf>,
}

/// Loads the sources, builds the graph and writes it.
pub fn run(options: &RunOptions) -> Result<RunOutput> {
    let run_span = info_span!("run", resources = %options.resources_dir.display());
    let _run_guard = run_span.enter();

    let data = load(&options.resources_dir)?;
    let extract_options = ExtractOptions::default().with_min_name_len(options.min_name_len);
    let (graph, mentions) = build_graph(&data, extract_options)?;
    let document = serialize_graph(&graph, options.pretty)?;

    let written = if options.dry_run {
        info!(path = %options.output_path.display(), "dry run; document not written");
        None
    } else {
        info_span!("output").in_scope(|| write_atomic(&options.output_path, document.as_bytes()))?;
        info!(
            path = %options.output_path.display(),
            bytes = document.len(),
            "graph written"
        );
        Some(options.output_path.clone())
    };

    Ok(RunOutput {
        graph,
        publications: data.publications.len(),
        warnings: data.warnings,
        mentions,
        written,
    })
}

/// Loads and resolves the resources directory.
pub fn load(resources_dir: &Path) -> Result<SourceData> {
    load_sources(resources_dir)
        .with_context(|| format!("load resources from {}", resources_dir.display()))
}

/// Runs extraction and consolidation. Returns the graph and the raw mention
/// count.
pub fn build_graph(data: &SourceData, options: ExtractOptions) -> Result<(MentionGraph, usize)> {
    info_span!("graph").in_scope(|| -> Result<_> {
        let mentions = extract_with_options(&data.drugs, &data.publications, options);
        let graph = build(&mentions, &data.drugs).context("build mention graph")?;
        info!(
            drugs = graph.len(),
            mentions = mentions.len(),
            publication_refs = graph.mention_count(),
            "graph complete"
        );
        Ok((graph, mentions.len()))
    })
}

pub fn serialize_graph(graph: &MentionGraph, pretty: bool) -> Result<String> {
    let document = if pretty {
        serde_json::to_string_pretty(graph)
    } else {
        serde_json::to_string(graph)
    };
    document.context("serialize mention graph")
}

/// Reads a document written by [`run`].
pub fn read_graph(path: &Path) -> Result<MentionGraph> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse graph {}", path.display()))
}

/// Journal statistics read back from a written document.
#[derive(Debug)]
pub struct GraphReport {
    pub top: JournalReport,
    /// Distinct drugs per journal, highest count first.
    pub journal_counts: Vec<(String, usize)>,
}

/// Reads the document at `path` and computes its journal statistics.
///
/// Fails when the graph holds no mention in a known journal.
pub fn report(path: &Path) -> Result<GraphReport> {
    let graph = read_graph(path)?;
    let top = top_journals(&graph)
        .ok_or_else(|| anyhow!("graph {} contains no mentions", path.display()))?;
    info!(
        journals = top.journals.len(),
        drug_count = top.drug_count,
        "top journals found"
    );
    Ok(GraphReport {
        top,
        journal_counts: journal_drug_counts(&graph),
    })
}

/// Writes `contents` to a temporary sibling of `path`, then renames it over
/// `path`.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }

    let temp_path = temp_path_for(path);
    let result = write_and_sync(&temp_path, contents).and_then(|()| {
        fs::rename(&temp_path, path).with_context(|| {
            format!(
                "move {} into place at {}",
                temp_path.display(),
                path.display()
            )
        })
    });
    if result.is_err()
        && let Err(error) = fs::remove_file(&temp_path)
    {
        warn!(path = %temp_path.display(), %error, "failed to remove temporary output");
    }
    result
}

fn write_and_sync(path: &Path, contents: &[u8]) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    file.write_all(contents)
        .with_context(|| format!("write {}", path.display()))?;
    file.sync_all()
        .with_context(|| format!("sync {}", path.display()))?;
    debug!(path = %path.display(), bytes = contents.len(), "temporary output written");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_else(|| DEFAULT_OUTPUT_NAME.into());
    name.push(".tmp");
    path.with_file_name(name)
}
