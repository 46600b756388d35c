use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span};

use drugmap_cli::pipeline::{DEFAULT_OUTPUT_DIR, RunOptions, report, run};
use drugmap_model::MentionGraph;

use crate::cli::{ReportArgs, RunArgs};
use crate::types::{DrugSummary, ReportResult, RunResult};

pub fn run_pipeline(args: &RunArgs) -> Result<RunResult> {
    let options = run_options(args);
    let start = Instant::now();
    let output = run(&options)?;
    info!(
        elapsed_ms = start.elapsed().as_millis(),
        warnings = output.warnings.len(),
        "run finished"
    );

    Ok(RunResult {
        resources_dir: options.resources_dir,
        output_path: output.written,
        publications: output.publications,
        mentions: output.mentions,
        drugs: drug_summaries(&output.graph),
        warnings: output.warnings.iter().map(ToString::to_string).collect(),
    })
}

pub fn run_report(args: &ReportArgs) -> Result<ReportResult> {
    let report_span = info_span!("report", graph = %args.graph.display());
    let _report_guard = report_span.enter();

    let report = report(&args.graph)?;
    Ok(ReportResult {
        graph_path: args.graph.clone(),
        top_journals: report.top.journals,
        top_drug_count: report.top.drug_count,
        journal_counts: report.journal_counts,
    })
}

fn run_options(args: &RunArgs) -> RunOptions {
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.resources_dir.join(DEFAULT_OUTPUT_DIR));
    RunOptions {
        resources_dir: args.resources_dir.clone(),
        output_path: output_dir.join(&args.output_name),
        min_name_len: args.min_name_len,
        pretty: args.pretty,
        dry_run: args.dry_run,
    }
}

fn drug_summaries(graph: &MentionGraph) -> Vec<DrugSummary> {
    graph
        .entries()
        .iter()
        .map(|entry| DrugSummary {
            drug: entry.drug.clone(),
            journals: entry.journals.len(),
            publications: entry.mention_count(),
        })
        .collect()
}
