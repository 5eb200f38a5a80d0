use std::path::PathBuf;
use std::process::ExitCode;

use bca_lib::output::BCA_OUTPUT_VERSION;
use bca_lib::profile::{extract_color_profile, extract_logo_profile, extract_typography_profile};
use bca_lib::{load_guidelines, BcaOutput, InspectColors, InspectOutput, InspectTypography};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};

/// Run the inspect command: echo the normalized brand profile.
pub async fn run_inspect(
    verbose: bool,
    guidelines_path: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let guidelines = match load_guidelines(&guidelines_path) {
        Ok(snapshot) => snapshot,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let colors = extract_color_profile(&guidelines.colors);
    let typography = extract_typography_profile(&guidelines.typography);
    let logo = extract_logo_profile(&guidelines.logo);
    if verbose {
        eprintln!(
            "Extracted profile: {} palette colors, {} forbidden, {} font families, {} measurable logo constraints",
            colors.palette.len(),
            colors.forbidden.len(),
            typography.all.len(),
            logo.measurable_constraints()
        );
    }

    let body = BcaOutput::Inspect(InspectOutput {
        version: BCA_OUTPUT_VERSION.to_string(),
        brand: guidelines.name.clone(),
        colors: InspectColors::from(&colors),
        typography: InspectTypography::from(&typography),
        logo,
    });

    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(bca_lib::BcaError::Config(err.to_string()), format, output);
    }
    ExitCode::SUCCESS
}
