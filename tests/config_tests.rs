use opini_prep::config::{load_config, Overrides, DEFAULT_SLANG_PATH};
use std::path::{Path, PathBuf};

#[test]
fn defaults_apply_without_overrides() {
    let cfg = load_config(Path::new("data.csv"), &Overrides::default()).unwrap();
    assert_eq!(cfg.input, PathBuf::from("data.csv"));
    assert_eq!(cfg.text_column, "text");
    assert_eq!(cfg.label_column, None);
    assert_eq!(cfg.sample_size, 1000);
    assert_eq!(cfg.seed, 42);
    assert_eq!(cfg.max_corpus_chars, 500_000);
    assert_eq!(cfg.top_terms, 100);
    assert_eq!(cfg.slang_path, PathBuf::from(DEFAULT_SLANG_PATH));
    assert_eq!(cfg.model_dir, None);
}

#[test]
fn cli_overrides_take_precedence() {
    let overrides = Overrides {
        text_column: Some("tweet".into()),
        label_column: Some("sentimen".into()),
        sample_size: Some(50),
        seed: Some(7),
        max_corpus_chars: Some(1_000),
        top_terms: Some(20),
        slang_url: Some("http://localhost/kamus.csv".into()),
        slang_path: Some(PathBuf::from("cache/kamus.csv")),
        model_dir: Some(PathBuf::from("model")),
    };
    let cfg = load_config(Path::new("tweets.csv"), &overrides).unwrap();
    assert_eq!(cfg.text_column, "tweet");
    assert_eq!(cfg.label_column.as_deref(), Some("sentimen"));
    assert_eq!(cfg.sample_size, 50);
    assert_eq!(cfg.seed, 7);
    assert_eq!(cfg.max_corpus_chars, 1_000);
    assert_eq!(cfg.top_terms, 20);
    assert_eq!(cfg.slang_url, "http://localhost/kamus.csv");
    assert_eq!(cfg.slang_path, PathBuf::from("cache/kamus.csv"));
    assert_eq!(cfg.model_dir, Some(PathBuf::from("model")));
}
