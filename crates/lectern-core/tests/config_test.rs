use std::io::Write;

use lectern_core::config::{defaults, LecternConfig};
use lectern_core::errors::LecternError;

#[test]
fn default_config_matches_defaults_module() {
    let config = LecternConfig::default();
    assert_eq!(config.embedding.model, defaults::DEFAULT_EMBEDDING_MODEL);
    assert_eq!(
        config.embedding.dimensions,
        defaults::DEFAULT_EMBEDDING_DIMENSIONS
    );
    assert_eq!(config.retrieval.top_k, defaults::DEFAULT_TOP_K);
    assert_eq!(config.synthesis.temperature, defaults::DEFAULT_TEMPERATURE);
    assert_eq!(config.resolver.alpha_schedule, vec![1.0, 0.5, 0.0]);
    assert_eq!(config.resolver.deadline_ms, defaults::DEFAULT_DEADLINE_MS);
}

#[test]
fn partial_toml_fills_in_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[retrieval]
top_k = 5
source_label = "Babok"

[resolver]
deadline_ms = 30000
"#
    )
    .unwrap();

    let config = LecternConfig::load(file.path()).unwrap();
    assert_eq!(config.retrieval.top_k, 5);
    assert_eq!(config.retrieval.source_label, "Babok");
    assert_eq!(config.resolver.deadline_ms, 30_000);
    // Untouched sections keep their defaults.
    assert_eq!(config.embedding.model, defaults::DEFAULT_EMBEDDING_MODEL);
    assert_eq!(config.resolver.alpha_schedule, vec![1.0, 0.5, 0.0]);
}

#[test]
fn missing_file_is_a_config_error() {
    let result = LecternConfig::load(std::path::Path::new("/nonexistent/lectern.toml"));
    assert!(matches!(result, Err(LecternError::Config { .. })));
}

#[test]
fn malformed_toml_is_a_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not [valid toml").unwrap();
    let result = LecternConfig::load(file.path());
    assert!(matches!(result, Err(LecternError::Config { .. })));
}
