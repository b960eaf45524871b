//! Models-directory resolution
//!
//! The trained artifacts live in one directory; where that directory is
//! follows a fixed priority order:
//! 1. Command-line argument (highest priority)
//! 2. `SAMPAH_MODELS_DIR` environment variable
//! 3. `models_dir` key in the user config file (`sampah/config.toml`)
//! 4. Compiled default `./models` (fallback)

use std::path::PathBuf;

/// Environment variable overriding the models directory
pub const MODELS_DIR_ENV: &str = "SAMPAH_MODELS_DIR";

/// Filename of the regression artifact inside the models directory
pub const MODEL_FILE: &str = "model_lr_sampah.json";

/// Filename of the label-encoder artifact inside the models directory
pub const ENCODER_FILE: &str = "encoder_kecamatan.json";

/// Resolve the models directory following the priority order above
pub fn resolve_models_dir(cli_arg: Option<&str>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(MODELS_DIR_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: User config file
    if let Some(path) = models_dir_from_config_file() {
        return path;
    }

    // Priority 4: Compiled default
    PathBuf::from("models")
}

/// Read `models_dir` from `<config dir>/sampah/config.toml`, if present
fn models_dir_from_config_file() -> Option<PathBuf> {
    let config_path = dirs::config_dir()?.join("sampah").join("config.toml");
    let content = std::fs::read_to_string(&config_path).ok()?;
    let config: toml::Value = toml::from_str(&content).ok()?;
    config
        .get("models_dir")
        .and_then(|v| v.as_str())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cli_arg_wins() {
        std::env::set_var(MODELS_DIR_ENV, "/from/env");
        let dir = resolve_models_dir(Some("/from/cli"));
        std::env::remove_var(MODELS_DIR_ENV);
        assert_eq!(dir, PathBuf::from("/from/cli"));
    }

    #[test]
    #[serial]
    fn test_env_var_beats_default() {
        std::env::set_var(MODELS_DIR_ENV, "/from/env");
        let dir = resolve_models_dir(None);
        std::env::remove_var(MODELS_DIR_ENV);
        assert_eq!(dir, PathBuf::from("/from/env"));
    }

    #[test]
    #[serial]
    fn test_empty_env_var_ignored() {
        std::env::set_var(MODELS_DIR_ENV, "");
        let dir = resolve_models_dir(None);
        std::env::remove_var(MODELS_DIR_ENV);
        // Falls through to config file or compiled default; either way
        // the empty string must not be used as a path
        assert_ne!(dir, PathBuf::from(""));
    }
}
