//! Integration tests for tfidf-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> merge.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use tfidf_config::{
    Analyzer, CONFIG_FILENAME, Config, ConfigError, DocFrequency, StopWordsSpec, TextOp,
};

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    /// Backing temporary directory.
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_load_root_config() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        r#"
root = true

[model]
ops = ["lower", "stop_words", "lemmatize", "digits"]
stop_words = ["but", "and"]
max_df = 0.95
min_df = 0.05

[output]
dir = "results"
"#,
    );

    let config = Config::load(env.path()).unwrap();
    let model = &config.model;
    assert!(model.ops.contains(TextOp::Lemmatize));
    assert!(!model.ops.contains(TextOp::Stem));
    assert_eq!(
        model.stop_words,
        Some(StopWordsSpec::Words(vec!["but".into(), "and".into()]))
    );
    assert_eq!(model.max_df, DocFrequency::Fraction(0.95));
    assert_eq!(model.min_df, DocFrequency::Fraction(0.05));
    assert_eq!(config.output.dir, Some(PathBuf::from("results")));
    assert_eq!(config.config_root.as_deref(), Some(env.path()));
    assert!(model.validate().is_ok());
}

#[test]
fn test_nested_config_overrides_parent() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        "root = true\n[model]\nanalyzer = \"char\"\nmax_features = 10\n",
    );
    env.create_file(
        &format!("corpus/{CONFIG_FILENAME}"),
        "[model]\nanalyzer = \"char_wb\"\n",
    );

    let config = Config::load(&env.path().join("corpus")).unwrap();
    assert_eq!(config.model.analyzer, Analyzer::CharWb);
    assert_eq!(config.model.max_features, Some(10));
}

#[test]
fn test_load_from_files_reports_path() {
    let env = TestEnv::new();
    let path = env.create_file("broken.toml", "[model\n");

    let err = Config::load_from_files(&[path.clone()]).unwrap_err();
    assert!(matches!(err, ConfigError::ParseToml { .. }));
    assert!(err.to_string().contains(&path.display().to_string()));
}

#[test]
fn test_missing_file_is_read_error() {
    let env = TestEnv::new();
    let err = Config::load_from_files(&[env.path().join("nope.toml")]).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn test_conflicting_ops_load_but_fail_validation() {
    let env = TestEnv::new();
    env.create_file(
        CONFIG_FILENAME,
        "root = true\n[model]\nops = [\"ascii\", \"unicode\"]\n",
    );

    let config = Config::load(env.path()).unwrap();
    assert!(matches!(
        config.model.validate(),
        Err(ConfigError::ExclusiveOps { .. })
    ));
}
