//! YAML → `PlannerConfig`.
//!
//! Every key is optional; missing keys keep their defaults.
//!
//! Example:
//! ```yaml
//! radices: [2, 3, 4, 5, 8, 12, 16]
//! dif_radices: [4]
//! twiddle_cap_bytes: 16777216
//! memoize: true
//! ```

use std::path::Path;

use ctplan_core::{Error, PlannerConfig, Result};

/// Parse and validate a YAML planner configuration.
pub fn parse_config_yaml(src: &str) -> Result<PlannerConfig> {
    // An empty document is all defaults.
    if src.trim().is_empty() {
        return Ok(PlannerConfig::default());
    }
    let cfg: PlannerConfig =
        serde_yaml::from_str(src).map_err(|e| Error::Config(format!("yaml parse: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_config(path: impl AsRef<Path>) -> Result<PlannerConfig> {
    let path = path.as_ref();
    let src = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("read {}: {e}", path.display())))?;
    parse_config_yaml(&src)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let cfg = parse_config_yaml("radices: [2, 3]\nmemoize: false\n").unwrap();
        assert_eq!(cfg.radices, vec![2, 3]);
        assert!(!cfg.memoize);
        assert_eq!(cfg.dif_radices, PlannerConfig::default().dif_radices);
        assert_eq!(
            cfg.twiddle_cap_bytes,
            PlannerConfig::default().twiddle_cap_bytes
        );
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(parse_config_yaml("  \n").unwrap(), PlannerConfig::default());
    }

    #[test]
    fn radix_one_fails_validation() {
        assert!(matches!(
            parse_config_yaml("radices: [1, 2]"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn malformed_yaml_is_a_config_error() {
        assert!(matches!(
            parse_config_yaml("radices: [2, three"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        assert!(matches!(
            load_config("/nonexistent/ctplan.yaml"),
            Err(Error::Config(_))
        ));
    }
}
