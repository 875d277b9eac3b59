use clap::Parser;
use opini_prep::artifacts::ModelArtifacts;
use opini_prep::config::{load_config, Overrides};
use opini_prep::corpus::Corpus;
use opini_prep::errors::AppError;
use opini_prep::metrics::Metrics;
use opini_prep::report::Report;
use opini_prep::sentiment::SentimentSummary;
use opini_prep::slang::{self, SlangMap};
use opini_prep::{dataset, logger};
use prometheus::Registry;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "opini-prep", version)]
struct Cli {
    /// Input CSV dataset with the text-bearing column
    input: PathBuf,

    /// Name of the text-bearing column (default: text)
    #[arg(long)]
    text_column: Option<String>,

    /// Column with sentiment labels to tally into the report
    #[arg(long)]
    label_column: Option<String>,

    /// Maximum number of rows to sample
    #[arg(long)]
    sample_size: Option<usize>,

    /// RNG seed for row sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Character cap for the word-cloud corpus
    #[arg(long)]
    max_corpus_chars: Option<usize>,

    /// How many top terms to emit
    #[arg(long)]
    top_terms: Option<usize>,

    /// Slang dictionary download URL
    #[arg(long)]
    slang_url: Option<String>,

    /// Local cache path for the slang dictionary
    #[arg(long)]
    slang_path: Option<PathBuf>,

    /// Pretrained model folder to validate before processing
    #[arg(long)]
    model_dir: Option<PathBuf>,

    /// Write the JSON report here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    logger::init();
    let cli = Cli::parse();
    let cfg = load_config(
        &cli.input,
        &Overrides {
            text_column: cli.text_column.clone(),
            label_column: cli.label_column.clone(),
            sample_size: cli.sample_size,
            seed: cli.seed,
            max_corpus_chars: cli.max_corpus_chars,
            top_terms: cli.top_terms,
            slang_url: cli.slang_url.clone(),
            slang_path: cli.slang_path.clone(),
            model_dir: cli.model_dir.clone(),
        },
    )?;

    let registry = Registry::new();
    let metrics = Metrics::new(&registry);

    if let Some(dir) = &cfg.model_dir {
        let artifacts = ModelArtifacts::global(|| ModelArtifacts::locate(dir))?;
        info!("Model artifacts located at {}", artifacts.dir.display());
    }

    let client = reqwest::Client::new();
    if slang::ensure_local(&client, &cfg.slang_url, &cfg.slang_path).await? {
        metrics.dictionary_downloads.inc();
    }
    let slang = SlangMap::global(|| SlangMap::load(&cfg.slang_path))?;
    info!("Loaded {} slang entries", slang.len());

    info!("Reading column '{}' from {}", cfg.text_column, cfg.input.display());
    let texts = dataset::load_column(&cfg.input, &cfg.text_column).await?;
    metrics.rows_read.inc_by(texts.len() as u64);

    let sampled = dataset::sample(&texts, cfg.sample_size, cfg.seed);
    info!("Sampled {} of {} rows", sampled.len(), texts.len());

    let corpus = Corpus::build(&sampled, slang, cfg.max_corpus_chars);
    metrics.rows_normalized.inc_by(corpus.contributing_rows as u64);
    metrics
        .rows_skipped
        .inc_by((sampled.len() - corpus.contributing_rows) as u64);

    let sentiment = match &cfg.label_column {
        Some(column) => {
            let labels = dataset::load_column(&cfg.input, column).await?;
            Some(SentimentSummary::tally(labels.iter().map(String::as_str)))
        }
        None => None,
    };

    let report = Report {
        rows_total: texts.len(),
        rows_sampled: sampled.len(),
        contributing_rows: corpus.contributing_rows,
        corpus_chars: corpus.char_count(),
        top_terms: corpus.top_terms(cfg.top_terms),
        sentiment,
    };

    match &cli.output {
        Some(path) => {
            report.write_json(path).await?;
            info!("Report written to {}", path.display());
        }
        None => println!("{}", report.to_json()?),
    }
    Ok(())
}
