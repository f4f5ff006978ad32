//! Cross-check navigation against the corpus and emit diagnostics.

use super::open_index;
use anyhow::Result;
use fieldguide_core::{Diagnostic, DiagnosticSeverity};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct VerificationSummary<'a> {
    documents: usize,
    errors: usize,
    warnings: usize,
    infos: usize,
    diagnostics: &'a [Diagnostic],
}

/// Run the scan and the navigation cross-check without rendering output.
/// Divergence is reported as warnings, never as a hard failure.
pub fn verify_corpus(config_path: &Path, json: bool) -> Result<()> {
    let index = open_index(config_path)?;

    let documents = index.list_all().len();
    let diagnostics = index.verify();

    let count = |severity: DiagnosticSeverity| {
        diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    };
    let summary = VerificationSummary {
        documents,
        errors: count(DiagnosticSeverity::Error),
        warnings: count(DiagnosticSeverity::Warning),
        infos: count(DiagnosticSeverity::Info),
        diagnostics: &diagnostics,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Verification complete: {} documents, {} errors, {} warnings, {} info",
            summary.documents, summary.errors, summary.warnings, summary.infos
        );
        for diag in &diagnostics {
            let slug = diag
                .slug
                .as_deref()
                .map(|s| format!(" [{}]", s))
                .unwrap_or_default();
            println!("- {:?} {}{}: {}", diag.severity, diag.code, slug, diag.message);
        }
    }

    Ok(())
}
