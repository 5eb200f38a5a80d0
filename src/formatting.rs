use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bca_lib::output::BCA_OUTPUT_VERSION;
use bca_lib::{BcaError, BcaOutput, ErrorOutput};

use crate::cli::OutputFormat;

/// Write output in the requested format.
pub fn write_output(
    body: &BcaOutput,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => write_json_output(body, output.as_deref())?,
        OutputFormat::Pretty => write_pretty_output(body, output.as_deref())?,
    };
    Ok(())
}

/// Render an error and return the appropriate exit code.
pub fn render_error(err: BcaError, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    let error_payload = err.to_payload();
    let payload = BcaOutput::Error(ErrorOutput {
        version: BCA_OUTPUT_VERSION.to_string(),
        message: Some(error_payload.message.clone()),
        error: error_payload,
    });

    match format {
        OutputFormat::Json => {
            let content =
                serde_json::to_string(&payload).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
            if let Some(path) = output {
                if let Err(write_err) = std::fs::write(&path, &content) {
                    eprintln!("Failed to write error output: {}", write_err);
                    println!("{content}");
                }
            } else {
                println!("{content}");
            }
        }
        OutputFormat::Pretty => {
            if let Err(write_err) = write_pretty_output(&payload, output.as_deref()) {
                eprintln!("Failed to write error output: {}", write_err);
            }
        }
    };

    // Reserve exit code 2 for fatal/errors; threshold failures use 1.
    ExitCode::from(2)
}

/// Write JSON output to file or stdout.
fn write_json_output(
    body: &BcaOutput,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = serde_json::to_string(body)?;
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Write pretty output to file or stdout.
fn write_pretty_output(body: &BcaOutput, output: Option<&Path>) -> io::Result<()> {
    let stdout_is_tty = std::io::stdout().is_terminal();
    let use_human = output.is_none() && stdout_is_tty;

    if use_human {
        let content = format_pretty(body, true);
        println!("{content}");
        return Ok(());
    }

    // Non-tty or file output: keep JSON shape for pipelines/files.
    let content =
        serde_json::to_string_pretty(body).unwrap_or_else(|_| "{\"mode\":\"error\"}".to_string());
    if let Some(path) = output {
        std::fs::write(path, &content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Format output for human consumption in a terminal.
pub fn format_pretty(body: &BcaOutput, colorize: bool) -> String {
    match body {
        BcaOutput::Audit(out) => {
            let mut buf = String::new();
            let status = if out.passed { "PASS" } else { "FAIL" };
            let status_colored = color(status, if out.passed { "32" } else { "31" }, colorize);
            let score = format_score(out.overall_score, Some(out.threshold), colorize);
            let threshold = format!("{:.1}%", out.threshold * 100.0);
            writeln!(buf, "{} Brand compliance audit", status_colored).ok();
            if let Some(brand) = &out.brand {
                writeln!(buf, "Brand: {brand}").ok();
            }
            if let Some(url) = &out.url {
                writeln!(buf, "URL: {url}").ok();
            }
            writeln!(buf, "Score: {score} (threshold {threshold})").ok();
            writeln!(buf, "Confidence: {:.2}", out.confidence).ok();

            if !out.category_scores.is_empty() {
                writeln!(buf, "Categories:").ok();
                for (category, score) in &out.category_scores {
                    let styled = format_score(*score, None, colorize);
                    writeln!(buf, "- {:12} {}", category.as_str(), styled).ok();
                }
            }
            if !out.skipped_categories.is_empty() {
                let names: Vec<&str> = out
                    .skipped_categories
                    .iter()
                    .map(|c| c.as_str())
                    .collect();
                writeln!(buf, "Skipped (no brand data): {}", names.join(", ")).ok();
            }
            if !out.issues.is_empty() {
                writeln!(buf, "Issues:").ok();
                for issue in &out.issues {
                    writeln!(
                        buf,
                        "- [{}] {} (expected: {}, actual: {})",
                        issue.severity, issue.message, issue.expected, issue.actual
                    )
                    .ok();
                }
            }
            buf
        }
        BcaOutput::Inspect(out) => {
            let mut buf = String::new();
            let header = color("[INSPECT]", "36", colorize);
            writeln!(buf, "{} Normalized brand profile", header).ok();
            if let Some(brand) = &out.brand {
                writeln!(buf, "Brand: {brand}").ok();
            }
            if let Some(primary) = &out.colors.primary {
                writeln!(buf, "Primary color: {primary}").ok();
            }
            if !out.colors.palette.is_empty() {
                writeln!(buf, "Palette: {}", out.colors.palette.join(", ")).ok();
            }
            if !out.colors.forbidden.is_empty() {
                writeln!(buf, "Forbidden: {}", out.colors.forbidden.join(", ")).ok();
            }
            if let Some(primary) = &out.typography.primary {
                writeln!(buf, "Primary font: {primary}").ok();
            }
            if let Some(secondary) = &out.typography.secondary {
                writeln!(buf, "Secondary font: {secondary}").ok();
            }
            if !out.typography.weights.is_empty() {
                writeln!(buf, "Font weights: {}", out.typography.weights.join(", ")).ok();
            }
            if let Some(min) = &out.logo.min_size {
                writeln!(buf, "Logo min size: {:.0}x{:.0}px", min.width, min.height).ok();
            }
            if let Some(max) = &out.logo.max_size {
                writeln!(buf, "Logo max size: {:.0}x{:.0}px", max.width, max.height).ok();
            }
            if let Some(ratio) = out.logo.aspect_ratio {
                writeln!(buf, "Logo aspect ratio: {:.2}", ratio).ok();
            }
            if !out.logo.rules.is_empty() {
                writeln!(buf, "Logo rules:").ok();
                for rule in &out.logo.rules {
                    writeln!(buf, "- {rule}").ok();
                }
            }
            buf
        }
        BcaOutput::Error(out) => {
            let mut buf = String::new();
            let header = color("[ERROR]", "31", colorize);
            let message = out
                .message
                .as_deref()
                .unwrap_or_else(|| out.error.message.as_str());
            writeln!(buf, "{} {}", header, message).ok();
            if let Some(remediation) = &out.error.remediation {
                writeln!(buf, "Hint: {}", remediation).ok();
            }
            buf
        }
    }
}

fn format_score(score: f32, threshold: Option<f32>, colorize: bool) -> String {
    let pct = score * 100.0;
    let code = if let Some(th) = threshold {
        if score >= th {
            "32"
        } else if (th - score) <= 0.05 {
            "33"
        } else {
            "31"
        }
    } else {
        score_color_code(score)
    };
    let text = format!("{:.4} ({:.1}%)", score, pct);
    color(&text, code, colorize)
}

/// Apply ANSI color codes when enabled.
fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Map score to ANSI color code.
fn score_color_code(score: f32) -> &'static str {
    if score >= 0.9 {
        "32" // green
    } else if score >= 0.75 {
        "33" // yellow
    } else {
        "31" // red
    }
}

/// Determine exit code for the audit command.
pub fn exit_code_for_audit(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bca_lib::output::AuditOutput;
    use bca_lib::types::{Category, ComplianceIssue, ComplianceReport, Severity};
    use std::collections::BTreeMap;

    fn audit_body(passed: bool) -> BcaOutput {
        let mut category_scores = BTreeMap::new();
        category_scores.insert(Category::Colors, 0.91_f32);
        category_scores.insert(Category::Layout, 0.8_f32);
        let report = ComplianceReport {
            overall_score: if passed { 0.88 } else { 0.42 },
            category_scores,
            issues: vec![ComplianceIssue::new(
                Category::Colors,
                Severity::High,
                "#FF0000",
                "#00FF00",
                "Color #00FF00 does not match the brand palette",
            )],
            confidence: 0.81,
            skipped_categories: vec![Category::Typography],
        };
        BcaOutput::Audit(AuditOutput::from_report(
            report,
            Some("Acme".to_string()),
            Some("https://example.com".to_string()),
            0.75,
        ))
    }

    #[test]
    fn exit_code_for_audit_maps_pass_fail() {
        assert_eq!(exit_code_for_audit(true), ExitCode::SUCCESS);
        assert_eq!(exit_code_for_audit(false), ExitCode::from(1));
    }

    #[test]
    fn render_error_always_returns_fatal_exit_code() {
        let code = render_error(
            BcaError::Config("boom".to_string()),
            OutputFormat::Json,
            None,
        );
        assert_eq!(code, ExitCode::from(2));
    }

    #[test]
    fn format_pretty_includes_status_categories_and_issues() {
        let pretty = format_pretty(&audit_body(true), false);
        assert!(pretty.contains("PASS Brand compliance audit"));
        assert!(pretty.contains("Brand: Acme"));
        assert!(pretty.contains("Score:"));
        assert!(pretty.contains("Categories:"));
        assert!(pretty.contains("colors") && pretty.contains("0.91"));
        assert!(pretty.contains("Skipped (no brand data): typography"));
        assert!(pretty.contains("[high] Color #00FF00 does not match the brand palette"));
    }

    #[test]
    fn format_pretty_marks_failures() {
        let pretty = format_pretty(&audit_body(false), false);
        assert!(pretty.contains("FAIL Brand compliance audit"));
    }

    #[test]
    fn format_pretty_handles_errors() {
        let output = BcaOutput::Error(ErrorOutput {
            version: BCA_OUTPUT_VERSION.to_string(),
            message: Some("bad input".to_string()),
            error: bca_lib::error::ErrorPayload {
                category: bca_lib::error::ErrorCategory::Config,
                message: "bad input".to_string(),
                remediation: Some("check flags".to_string()),
            },
        });

        let pretty = format_pretty(&output, false);
        assert!(pretty.contains("[ERROR] bad input"));
        assert!(pretty.contains("Hint: check flags"));
    }
}
