//! Applying the resolver to every tooltip annotation of a document.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use tooltip_model::{AnnotationRef, AnnotationStore, RowTable};
use tooltip_pdf::PdfAnnotations;
use tooltip_resolve::resolve;

/// One document to process: where to read it and where to write the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentJob {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Resolve and report without writing the output document.
    pub dry_run: bool,
}

impl DocumentJob {
    /// Job writing to `<input stem>_modified.pdf` next to the input.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = default_output_path(&input);
        Self {
            input,
            output,
            dry_run: false,
        }
    }

    /// Overrides the output path; `None` keeps the derived default.
    #[must_use]
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        self
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// `<dir>/<stem>_modified.pdf` for an input at `<dir>/<stem>.<ext>`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_modified.pdf"))
}

/// What happened to one tooltip annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Contents were replaced with row data.
    Updated { before: String, after: String },
    /// No matching row data; contents left as they were.
    Unchanged { current: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationOutcome {
    pub annotation: AnnotationRef,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessReport {
    pub page_count: usize,
    /// One entry per tooltip annotation, in document order.
    pub outcomes: Vec<AnnotationOutcome>,
    /// Set when the modified document was written.
    pub saved_to: Option<PathBuf>,
}

impl ProcessReport {
    /// Number of tooltip annotations seen.
    pub fn tooltip_count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn updated_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|entry| matches!(entry.outcome, Outcome::Updated { .. }))
            .count()
    }
}

/// Resolves every tooltip annotation of `store` against `table`.
///
/// Annotations of other kinds are skipped. Contents are only written when
/// the resolver produced a replacement.
pub fn process_annotations<S>(
    store: &mut S,
    table: &RowTable,
) -> std::result::Result<Vec<AnnotationOutcome>, S::Error>
where
    S: AnnotationStore + ?Sized,
{
    let mut outcomes = Vec::new();
    for annotation in store.annotations()? {
        if !annotation.kind.is_tooltip() {
            continue;
        }
        let current = store.contents(&annotation)?;
        let outcome = match resolve(table, &current) {
            Some(after) => {
                store.set_contents(&annotation, &after)?;
                Outcome::Updated {
                    before: current,
                    after,
                }
            }
            None => Outcome::Unchanged { current },
        };
        debug!(
            page = annotation.page,
            index = annotation.index,
            kind = %annotation.kind,
            updated = matches!(outcome, Outcome::Updated { .. }),
            "annotation processed"
        );
        outcomes.push(AnnotationOutcome {
            annotation,
            outcome,
        });
    }
    Ok(outcomes)
}

/// Opens the job's PDF, fills its tooltips and saves the result.
///
/// The output is written only when at least one tooltip annotation was found
/// and the job is not a dry run.
pub fn process_document(job: &DocumentJob, table: &RowTable) -> Result<ProcessReport> {
    let span = info_span!("document", input = %job.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut store = PdfAnnotations::open(&job.input)
        .with_context(|| format!("open {}", job.input.display()))?;
    let outcomes = process_annotations(&mut store, table).context("process annotations")?;
    let mut report = ProcessReport {
        page_count: store.page_count(),
        outcomes,
        saved_to: None,
    };

    if report.tooltip_count() == 0 {
        info!("no tooltip annotations found");
    } else if job.dry_run {
        info!(output = %job.output.display(), "dry run, output not written");
    } else {
        store
            .save(&job.output)
            .with_context(|| format!("save {}", job.output.display()))?;
        report.saved_to = Some(job.output.clone());
    }

    info!(
        pages = report.page_count,
        tooltips = report.tooltip_count(),
        updated = report.updated_count(),
        duration_ms = start.elapsed().as_millis(),
        "document processed"
    );
    Ok(report)
}
