use opini_prep::sentiment::{Sentiment, SentimentSummary};

#[test]
fn parses_english_and_indonesian_labels() {
    assert_eq!(Sentiment::parse("positive"), Some(Sentiment::Positive));
    assert_eq!(Sentiment::parse("Positif"), Some(Sentiment::Positive));
    assert_eq!(Sentiment::parse("NEGATIF"), Some(Sentiment::Negative));
    assert_eq!(Sentiment::parse("neg"), Some(Sentiment::Negative));
    assert_eq!(Sentiment::parse(" netral "), Some(Sentiment::Neutral));
    assert_eq!(Sentiment::parse("neutral"), Some(Sentiment::Neutral));
    assert_eq!(Sentiment::parse("senang"), None);
    assert_eq!(Sentiment::parse(""), None);
}

#[test]
fn displays_lowercase_names() {
    assert_eq!(Sentiment::Positive.to_string(), "positive");
    assert_eq!(Sentiment::Negative.to_string(), "negative");
    assert_eq!(Sentiment::Neutral.to_string(), "neutral");
}

#[test]
fn tallies_labels_and_skips_unknown() {
    let labels = ["positif", "negatif", "positif", "netral", "???", ""];
    let summary = SentimentSummary::tally(labels);
    assert_eq!(
        summary,
        SentimentSummary {
            positive: 2,
            negative: 1,
            neutral: 1,
            skipped: 2,
        }
    );
    assert_eq!(summary.classified(), 4);
}

#[test]
fn empty_tally_is_all_zero() {
    let summary = SentimentSummary::tally(std::iter::empty::<&str>());
    assert_eq!(summary, SentimentSummary::default());
    assert_eq!(summary.classified(), 0);
}
