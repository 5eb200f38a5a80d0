use std::path::PathBuf;
use std::process::ExitCode;

use bca_lib::{
    load_guidelines, load_scraped, AuditOutput, BcaOutput, BrandComplianceEngine, Severity,
};

use crate::cli::OutputFormat;
use crate::formatting::{exit_code_for_audit, render_error, write_output};
use crate::settings::{load_config, log_effective_config, resolve_threshold, AuditFlagSources};

/// Run the audit command.
#[allow(clippy::too_many_arguments)]
pub async fn run_audit(
    raw_args: &[String],
    config_path: Option<PathBuf>,
    verbose: bool,
    guidelines_path: PathBuf,
    scraped_path: PathBuf,
    threshold: f32,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let config = match load_config(config_path.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output.clone()),
    };
    let flags = AuditFlagSources::from_args(raw_args);
    let threshold = resolve_threshold(threshold, &config, &flags);
    if !(0.0..=1.0).contains(&threshold) {
        return render_error(
            bca_lib::BcaError::Config(format!(
                "pass threshold must lie in [0, 1], got {}",
                threshold
            )),
            format,
            output,
        );
    }
    if verbose {
        log_effective_config(config_path.as_deref(), threshold, &config);
        eprintln!("Loading snapshots\u{2026}");
    }

    let guidelines = match load_guidelines(&guidelines_path) {
        Ok(snapshot) => snapshot,
        Err(err) => return render_error(err, format, output.clone()),
    };
    let scraped = match load_scraped(&scraped_path) {
        Ok(snapshot) => snapshot,
        Err(err) => return render_error(err, format, output.clone()),
    };
    if verbose {
        eprintln!(
            "Snapshots loaded: {} scraped colors, {} font families, {} components, {} headings",
            scraped.colors.len(),
            scraped.typography.families.len(),
            scraped.components.len(),
            scraped.headings.len()
        );
    }

    let engine = BrandComplianceEngine::new(config);
    let report = match engine.audit(&guidelines, &scraped).await {
        Ok(report) => report,
        Err(err) => return render_error(err, format, output.clone()),
    };
    if verbose {
        eprintln!(
            "Audit complete: score {:.4}, confidence {:.2}, {} issues ({} high or worse), {} categories skipped",
            report.overall_score,
            report.confidence,
            report.issues.len(),
            report.issue_count(Severity::Critical) + report.issue_count(Severity::High),
            report.skipped_categories.len()
        );
    }

    let body = BcaOutput::Audit(AuditOutput::from_report(
        report,
        guidelines.name.clone(),
        scraped.url.clone(),
        threshold,
    ));
    let passed = matches!(&body, BcaOutput::Audit(out) if out.passed);

    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(bca_lib::BcaError::Config(err.to_string()), format, output);
    }
    exit_code_for_audit(passed)
}
