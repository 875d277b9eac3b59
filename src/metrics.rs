use prometheus::{IntCounter, Registry};

pub struct Metrics {
    pub rows_read: IntCounter,
    pub rows_normalized: IntCounter,
    pub rows_skipped: IntCounter,
    pub dictionary_downloads: IntCounter,
}

impl Metrics {
    pub fn new(registry: &Registry) -> Self {
        let rows_read =
            IntCounter::new("rows_read", "Rows read from the input dataset").unwrap();
        let rows_normalized =
            IntCounter::new("rows_normalized", "Rows that produced cleaned text").unwrap();
        let rows_skipped =
            IntCounter::new("rows_skipped", "Rows that cleaned down to nothing").unwrap();
        let dictionary_downloads = IntCounter::new(
            "dictionary_downloads",
            "Slang dictionary downloads performed",
        )
        .unwrap();

        registry.register(Box::new(rows_read.clone())).unwrap();
        registry.register(Box::new(rows_normalized.clone())).unwrap();
        registry.register(Box::new(rows_skipped.clone())).unwrap();
        registry
            .register(Box::new(dictionary_downloads.clone()))
            .unwrap();

        Self {
            rows_read,
            rows_normalized,
            rows_skipped,
            dictionary_downloads,
        }
    }
}
