//! Environment-variable layering gets its own test binary: these
//! variables are process-wide, so they must not leak into the
//! default/CLI precedence tests.

use opini_prep::config::{load_config, ConfigError, Overrides};
use std::path::{Path, PathBuf};

#[test]
fn env_layer_sits_between_defaults_and_cli() {
    std::env::set_var("OPINI_TEXT_COLUMN", "tweet");
    std::env::set_var("OPINI_SLANG_PATH", "env/kamus.csv");
    std::env::set_var("OPINI_SAMPLE_SIZE", "250");
    std::env::set_var("OPINI_SEED", "9");
    std::env::set_var("OPINI_MAX_CORPUS_CHARS", "12345");
    std::env::set_var("OPINI_TOP_TERMS", "5");

    let cfg = load_config(Path::new("data.csv"), &Overrides::default()).unwrap();
    assert_eq!(cfg.text_column, "tweet");
    assert_eq!(cfg.slang_path, PathBuf::from("env/kamus.csv"));
    assert_eq!(cfg.sample_size, 250);
    assert_eq!(cfg.seed, 9);
    assert_eq!(cfg.max_corpus_chars, 12345);
    assert_eq!(cfg.top_terms, 5);

    // CLI flags still beat the environment; env fills the gaps
    let overrides = Overrides {
        text_column: Some("isi".into()),
        sample_size: Some(10),
        ..Default::default()
    };
    let cfg = load_config(Path::new("data.csv"), &overrides).unwrap();
    assert_eq!(cfg.text_column, "isi");
    assert_eq!(cfg.sample_size, 10);
    assert_eq!(cfg.seed, 9);
    assert_eq!(cfg.top_terms, 5);

    // a non-numeric value for an integer key is rejected up front
    std::env::set_var("OPINI_SAMPLE_SIZE", "many");
    let err = load_config(Path::new("data.csv"), &Overrides::default()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidEnv {
            var: "OPINI_SAMPLE_SIZE",
            ..
        }
    ));

    for var in [
        "OPINI_TEXT_COLUMN",
        "OPINI_SLANG_PATH",
        "OPINI_SAMPLE_SIZE",
        "OPINI_SEED",
        "OPINI_MAX_CORPUS_CHARS",
        "OPINI_TOP_TERMS",
    ] {
        std::env::remove_var(var);
    }
}
