use std::path::Path;

use bca_lib::{BcaError, Config};

/// Tracks which CLI flags were explicitly provided vs. defaulted.
#[derive(Debug, Default)]
pub struct AuditFlagSources {
    pub threshold: bool,
}

impl AuditFlagSources {
    pub fn from_args(args: &[String]) -> Self {
        Self {
            threshold: flag_present(args, "--threshold"),
        }
    }
}

/// Checks if a flag was present in the command-line arguments.
pub fn flag_present(args: &[String], flag: &str) -> bool {
    args.iter()
        .any(|arg| arg == flag || arg.starts_with(&format!("{flag}=")))
}

/// Merge the CLI threshold with the config file, preferring the CLI when the
/// flag was explicitly given.
pub fn resolve_threshold(cli_threshold: f32, config: &Config, flags: &AuditFlagSources) -> f32 {
    if flags.threshold {
        cli_threshold
    } else {
        config.threshold
    }
}

/// Load config from a TOML file or return defaults, then validate.
pub fn load_config(path: Option<&Path>) -> Result<Config, BcaError> {
    let cfg = Config::load(path).map_err(|e| {
        let loc = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string());
        BcaError::Config(format!("Failed to read config {}: {}", loc, e))
    })?;

    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        BcaError::Config(prefix)
    })?;
    Ok(cfg)
}

/// Log effective config to stderr (verbose mode).
pub fn log_effective_config(config_path: Option<&Path>, threshold: f32, config: &Config) {
    let config_source = config_path
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "defaults/built-in".to_string());
    eprintln!(
        "Effective config (source: {}): threshold {:.2}, weights colors {:.2} / typography {:.2} / logo {:.2} / layout {:.2}, color match strict {:.2} / authorized {:.2}, logo_missing_score {:.2}",
        config_source,
        threshold,
        config.weights.colors,
        config.weights.typography,
        config.weights.logo,
        config.weights.layout,
        config.thresholds.strict,
        config.thresholds.authorized,
        config.logo_missing_score
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_present_matches_plain_and_equals_forms() {
        let args = vec![
            "bca".to_string(),
            "audit".to_string(),
            "--threshold=0.9".to_string(),
        ];
        assert!(flag_present(&args, "--threshold"));
        assert!(!flag_present(&args, "--format"));
    }

    #[test]
    fn resolve_threshold_prefers_config_when_flag_absent() {
        let config = Config {
            threshold: 0.6,
            ..Config::default()
        };
        let flags = AuditFlagSources::default();
        assert!((resolve_threshold(0.9, &config, &flags) - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn resolve_threshold_prefers_cli_when_flag_present() {
        let config = Config {
            threshold: 0.6,
            ..Config::default()
        };
        let flags = AuditFlagSources { threshold: true };
        assert!((resolve_threshold(0.9, &config, &flags) - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn load_config_rejects_invalid_weights() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bca.toml");
        std::fs::write(&path, "[weights]\ncolors = -1.0\n").expect("write config");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, BcaError::Config(_)));
    }
}
