use super::*;

use std::{
    collections::HashMap,
    env, fs,
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

static TEMP_DIRS: AtomicUsize = AtomicUsize::new(0);

fn temp_settings_file(contents: &str) -> (PathBuf, PathBuf) {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let seq = TEMP_DIRS.fetch_add(1, Ordering::Relaxed);
    let temp_root = env::temp_dir().join(format!("roster_cli_config_test_{suffix}_{seq}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("roster.toml");
    fs::write(&path, contents).expect("write settings");
    (temp_root, path)
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn defaults_apply_without_file_or_env() {
    let settings = load_settings_with_env(Path::new("definitely/missing/roster.toml"), no_env);
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.feedback_hide_after_ms, 5_000);
}

#[test]
fn file_values_override_defaults() {
    let (temp_root, path) = temp_settings_file(
        "server_url = \"http://school.test:9000/\"\nfeedback_hide_after_ms = 2500\nlog_filter = \"debug\"\n",
    );

    let settings = load_settings_with_env(&path, no_env);
    assert_eq!(settings.server_url, "http://school.test:9000");
    assert_eq!(settings.feedback_hide_after_ms, 2_500);
    assert_eq!(settings.log_filter, "debug");

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn env_overrides_file_and_app_prefix_wins() {
    let (temp_root, path) = temp_settings_file("server_url = \"http://file.test\"\n");
    let vars: HashMap<&str, &str> = [
        ("ROSTER_SERVER_URL", "http://legacy.test"),
        ("APP__SERVER_URL", "http://app.test"),
        ("APP__FEEDBACK_HIDE_AFTER_MS", "750"),
    ]
    .into_iter()
    .collect();

    let settings = load_settings_with_env(&path, |key| vars.get(key).map(|v| v.to_string()));
    assert_eq!(settings.server_url, "http://app.test");
    assert_eq!(settings.feedback_hide_after_ms, 750);

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn unparseable_overrides_are_ignored() {
    let (temp_root, path) = temp_settings_file("feedback_hide_after_ms = -3\n");

    let settings = load_settings_with_env(&path, |key| {
        (key == "APP__FEEDBACK_HIDE_AFTER_MS").then(|| "soon".to_string())
    });
    assert_eq!(settings.feedback_hide_after_ms, 5_000);

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let (temp_root, path) = temp_settings_file("server_url = [unterminated");

    let settings = load_settings_with_env(&path, no_env);
    assert_eq!(settings, Settings::default());

    fs::remove_dir_all(temp_root).expect("cleanup");
}

#[test]
fn blank_server_url_uses_default() {
    assert_eq!(normalize_server_url("   "), Settings::default().server_url);
    assert_eq!(
        normalize_server_url(" http://127.0.0.1:8000// "),
        "http://127.0.0.1:8000"
    );
}
