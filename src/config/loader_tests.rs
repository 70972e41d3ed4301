//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

/// Removes an environment variable on construction and on drop.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

// ===== Paths =====

#[test]
fn default_config_path_contains_vscroll_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("vscroll") && path_str.ends_with("config.toml"),
        "Path should contain 'vscroll' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_vscroll_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("vscroll.log"),
        "Default log path should end with 'vscroll.log', got: {:?}",
        path
    );
}

// ===== load_config_file =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/vscroll.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = write_temp(
        "vscroll_test_config.toml",
        r#"
top_padding = 2
bottom_padding = 3
item_spacing = 0
overscan = 8
fallback_row_height = 2
min_row_height = 2
row_vertical_padding = 1
log_file_path = "/tmp/vscroll-test.log"
"#,
    );

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.top_padding, Some(2));
    assert_eq!(config.bottom_padding, Some(3));
    assert_eq!(config.item_spacing, Some(0));
    assert_eq!(config.overscan, Some(8));
    assert_eq!(config.fallback_row_height, Some(2));
    assert_eq!(config.min_row_height, Some(2));
    assert_eq!(config.row_vertical_padding, Some(1));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/vscroll-test.log"))
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let config_path = write_temp(
        "vscroll_test_partial.toml",
        r#"
overscan = 2
# Other fields omitted
"#,
    );

    let config = load_config_file(&config_path).unwrap().unwrap();
    assert_eq!(config.overscan, Some(2));
    assert_eq!(config.item_spacing, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = write_temp("vscroll_test_invalid.toml", "this is not valid TOML ][}{");

    let result = load_config_file(&config_path);

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_keys() {
    let config_path = write_temp("vscroll_test_unknown.toml", "theme = \"monokai\"\n");

    let result = load_config_file(&config_path);

    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Unknown keys should be a parse error, got {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_negative_overscan() {
    let config_path = write_temp("vscroll_test_negative.toml", "overscan = -1\n");

    let result = load_config_file(&config_path);

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));

    fs::remove_file(config_path).ok();
}

// ===== merge_config =====

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn defaults_are_terminal_rows() {
    let defaults = ResolvedConfig::default();

    assert_eq!(defaults.top_padding, 0);
    assert_eq!(defaults.bottom_padding, 0);
    assert_eq!(defaults.item_spacing, 1);
    assert_eq!(defaults.overscan, 4);
    assert_eq!(defaults.fallback_row_height, 1);
    assert_eq!(defaults.min_row_height, 1);
    assert_eq!(defaults.row_vertical_padding, 0);
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        top_padding: Some(1),
        item_spacing: Some(2),
        overscan: Some(10),
        min_row_height: Some(3),
        log_file_path: Some(PathBuf::from("/custom/path/to/app.log")),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));

    assert_eq!(resolved.top_padding, 1);
    assert_eq!(resolved.item_spacing, 2);
    assert_eq!(resolved.overscan, 10);
    assert_eq!(resolved.min_row_height, 3);
    assert_eq!(
        resolved.log_file_path,
        PathBuf::from("/custom/path/to/app.log")
    );
}

#[test]
fn merge_config_uses_defaults_for_none_fields() {
    let config_file = ConfigFile {
        overscan: Some(0),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.overscan, 0);
    assert_eq!(resolved.item_spacing, defaults.item_spacing);
    assert_eq!(resolved.fallback_row_height, defaults.fallback_row_height);
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
}

#[test]
fn resolved_config_builds_scroller_and_row_settings() {
    let resolved = ResolvedConfig {
        top_padding: 1,
        bottom_padding: 2,
        item_spacing: 3,
        overscan: 6,
        fallback_row_height: 2,
        min_row_height: 4,
        row_vertical_padding: 1,
        log_file_path: default_log_path(),
    };

    let scroller = resolved.scroller_config();
    assert_eq!(scroller.layout, LayoutParams::new(1, 2, 3));
    assert_eq!(scroller.overscan, 6);
    assert_eq!(scroller.fallback_row_height, 2);
    assert_eq!(resolved.row_metrics(), RowMetrics::new(4, 1));
}

// ===== Environment overrides =====

#[test]
#[serial(vscroll_overscan)]
fn apply_env_overrides_respects_vscroll_overscan() {
    let _guard = EnvGuard::new(OVERSCAN_ENV_VAR);
    env::set_var(OVERSCAN_ENV_VAR, "9");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(
        result.overscan,
        9,
        "VSCROLL_OVERSCAN should override overscan"
    );
}

#[test]
#[serial(vscroll_overscan)]
fn apply_env_overrides_ignores_invalid_value() {
    let _guard = EnvGuard::new(OVERSCAN_ENV_VAR);
    env::set_var(OVERSCAN_ENV_VAR, "lots");

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(result, base);
}

#[test]
#[serial(vscroll_overscan)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(OVERSCAN_ENV_VAR);

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(
        result, base,
        "Config should be unchanged when VSCROLL_OVERSCAN not set"
    );
}

// ===== Precedence =====

#[test]
#[serial(vscroll_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let explicit_path = write_temp("vscroll_explicit.toml", "overscan = 1\n");
    let env_path = write_temp("vscroll_env.toml", "overscan = 2\n");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .unwrap()
        .unwrap();

    assert_eq!(
        config.overscan,
        Some(1),
        "Should use explicit path, not VSCROLL_CONFIG env var"
    );

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(vscroll_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let env_path = write_temp("vscroll_env_only.toml", "overscan = 3\n");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(None).unwrap().unwrap();

    assert_eq!(
        config.overscan,
        Some(3),
        "Should use VSCROLL_CONFIG when no explicit path"
    );

    fs::remove_file(env_path).ok();
}

#[test]
#[serial(vscroll_config)]
fn load_config_with_precedence_missing_env_file_is_not_an_error() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    env::set_var(CONFIG_ENV_VAR, "/nonexistent/vscroll/config.toml");

    assert_eq!(load_config_with_precedence(None), Ok(None));
}

// ===== CLI overrides =====

#[test]
fn apply_cli_overrides_sets_overscan() {
    let result = apply_cli_overrides(ResolvedConfig::default(), Some(12));
    assert_eq!(result.overscan, 12);
}

#[test]
fn apply_cli_overrides_without_flags_is_identity() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None), base);
}

#[test]
fn full_precedence_chain_cli_wins() {
    let file = ConfigFile {
        overscan: Some(5),
        ..ConfigFile::default()
    };

    let merged = merge_config(Some(file));
    let resolved = apply_cli_overrides(merged, Some(7));

    assert_eq!(resolved.overscan, 7);
}
