//! opini-prep: preprocessing and aggregation for opinion-sentiment dashboards

pub mod artifacts;
pub mod config;
pub mod corpus;
pub mod dataset;
pub mod errors;
pub mod logger;
pub mod metrics;
pub mod normalizer;
pub mod report;
pub mod sentiment;
pub mod slang;

// Re-exports
pub use corpus::{Corpus, TermCount};
pub use errors::AppError;
pub use normalizer::normalize;
pub use report::Report;
pub use sentiment::{Sentiment, SentimentSummary};
pub use slang::SlangMap;
