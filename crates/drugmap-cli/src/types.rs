use std::path::PathBuf;

/// Outcome of `drugmap run`, as shown to the user.
#[derive(Debug)]
pub struct RunResult {
    pub resources_dir: PathBuf,
    /// `None` on a dry run.
    pub output_path: Option<PathBuf>,
    pub publications: usize,
    pub mentions: usize,
    pub drugs: Vec<DrugSummary>,
    pub warnings: Vec<String>,
}

#[derive(Debug)]
pub struct DrugSummary {
    pub drug: String,
    pub journals: usize,
    pub publications: usize,
}

/// Outcome of `drugmap report`.
#[derive(Debug)]
pub struct ReportResult {
    pub graph_path: PathBuf,
    pub top_journals: Vec<String>,
    pub top_drug_count: usize,
    pub journal_counts: Vec<(String, usize)>,
}
